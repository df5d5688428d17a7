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

use super::{Listed, Strategy, eliminate, restrict};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Point, all_units};
use crate::grid::Grid;
use itertools::Itertools;

// --- Naked Subsets ---

pub fn naked_pair(grid: &mut Grid, verbosity: Verbosity) -> bool {
    naked_subset(grid, 2, Strategy::NakedPair, verbosity)
}

pub fn naked_triple(grid: &mut Grid, verbosity: Verbosity) -> bool {
    naked_subset(grid, 3, Strategy::NakedTriple, verbosity)
}

pub fn naked_quad(grid: &mut Grid, verbosity: Verbosity) -> bool {
    naked_subset(grid, 4, Strategy::NakedQuad, verbosity)
}

/// `size` cells of a unit whose candidates together span exactly `size`
/// digits own those digits; the rest of the unit loses them.
fn naked_subset(grid: &mut Grid, size: usize, strategy: Strategy, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for unit in all_units() {
        // Filter to cells with between 2 and `size` candidates
        let potential: Vec<Point> = unit
            .points
            .iter()
            .copied()
            .filter(|&p| (2..=size).contains(&grid.cell(p).count()))
            .collect();
        if potential.len() < size {
            continue;
        }

        for subset in potential.iter().copied().combinations(size) {
            let union = subset
                .iter()
                .fold(Cell::EMPTY, |acc, &p| acc | grid.cell(p));
            if union.count() != size {
                continue;
            }

            for &q in &unit.points {
                if subset.contains(&q) {
                    continue;
                }
                if eliminate(
                    grid,
                    q,
                    union,
                    strategy,
                    verbosity,
                    format_args!("in {unit} because of {}", Listed(&subset)),
                ) {
                    changed = true;
                }
            }
        }
    }
    changed
}

// --- Hidden Subsets ---

pub fn hidden_pair(grid: &mut Grid, verbosity: Verbosity) -> bool {
    hidden_subset(grid, 2, Strategy::HiddenPair, verbosity)
}

pub fn hidden_triple(grid: &mut Grid, verbosity: Verbosity) -> bool {
    hidden_subset(grid, 3, Strategy::HiddenTriple, verbosity)
}

pub fn hidden_quad(grid: &mut Grid, verbosity: Verbosity) -> bool {
    hidden_subset(grid, 4, Strategy::HiddenQuad, verbosity)
}

/// `size` digits confined to exactly `size` cells of a unit; those cells
/// lose every other digit.
fn hidden_subset(grid: &mut Grid, size: usize, strategy: Strategy, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for unit in all_units() {
        let places = grid.digit_place_mask(unit);
        let potential: Vec<u8> = (1..=9u8)
            .filter(|&d| (2..=size).contains(&(places[d as usize].count_ones() as usize)))
            .collect();
        if potential.len() < size {
            continue;
        }

        for digits in potential.iter().copied().combinations(size) {
            let slots = digits
                .iter()
                .fold(0u16, |acc, &d| acc | places[d as usize]);
            if slots.count_ones() as usize != size {
                continue;
            }

            let keep: Cell = digits.iter().copied().collect();
            for (slot, &p) in unit.points.iter().enumerate() {
                if slots & (1 << slot) == 0 {
                    continue;
                }
                if restrict(
                    grid,
                    p,
                    keep,
                    strategy,
                    verbosity,
                    format_args!("in {unit} because {keep} appear nowhere else"),
                ) {
                    changed = true;
                }
            }
        }
    }
    changed
}
