/*
* Copyright (C) 2025-2026  Henrique Almeida
* This file is part of SudokuForge.
*
* SudokuForge is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* SudokuForge is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with SudokuForge.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Randomized backtracking search. Serves as the uniqueness oracle for
//! generation and as the fallback when logic stalls.

use crate::cell::Cell;
use crate::config::Verbosity;
use crate::error::SolveError;
use crate::grid::Grid;
use crate::logical_solver::{Level, Reducer, Strategy};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Backtracking search that reduces every branch before descending.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    reducer: Reducer,
}

impl Searcher {
    pub fn new(reducer: Reducer) -> Self {
        Searcher { reducer }
    }

    /// Finds up to two solutions of `grid`. Stops as soon as a second one
    /// turns up, so the result answers "none, unique or ambiguous".
    pub fn search<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> Vec<Grid> {
        let mut solutions = Vec::new();
        self.search_into(grid, rng, &mut solutions);
        solutions
    }

    fn search_into<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R, solutions: &mut Vec<Grid>) {
        if grid.is_solved() {
            solutions.push(grid.clone());
            return;
        }
        if grid.is_dead() {
            return;
        }
        // Every cell is a singleton but some unit repeats a digit.
        let Some(p) = grid.min_point(rng) else {
            return;
        };

        let mut digits: Vec<u8> = grid.cell(p).digits().collect();
        digits.shuffle(rng);
        for digit in digits {
            let mut branch = grid.clone();
            branch.set_to(p, Cell::from_digit(digit));
            self.reducer.reduce(&mut branch);
            self.search_into(&branch, rng, solutions);
            if solutions.len() > 1 {
                return;
            }
        }
    }

    /// 0, 1 or 2, where 2 means "more than one".
    pub fn count_solutions<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> usize {
        let mut reduced = grid.clone();
        if self.reducer.reduce(&mut reduced).solved {
            return 1;
        }
        self.search(&reduced, rng).len()
    }
}

/// Searches with every implemented tier and no tracing.
pub fn search<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Grid> {
    Searcher::default().search(grid, rng)
}

pub fn count_solutions<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> usize {
    Searcher::default().count_solutions(grid, rng)
}

/// The outcome of solving one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Hardest tier the reduction needed.
    pub level: Level,
    /// True when logic alone finished the grid.
    pub logical: bool,
    pub strategies: Vec<Strategy>,
    /// The logical result, or up to two search results when logic stalled.
    pub solutions: Vec<Grid>,
}

/// Parses, validates and solves an encoded puzzle: logic first, search
/// when it stalls.
pub fn solve(text: &str, verbosity: Verbosity) -> Result<Solution, SolveError> {
    let mut grid = Grid::parse(text)?;
    if !grid.is_valid() {
        return Err(SolveError::InvalidPuzzle);
    }

    let reducer = Reducer::new().verbosity(verbosity);
    let reduction = reducer.reduce(&mut grid);
    let solutions = if reduction.solved {
        vec![grid]
    } else {
        log::debug!("logic stalled at {}, falling back to search", reduction.level);
        Searcher::new(reducer).search(&grid, &mut rand::rng())
    };

    Ok(Solution {
        level: reduction.level,
        logical: reduction.solved,
        strategies: reduction.strategies.into_iter().collect(),
        solutions,
    })
}
