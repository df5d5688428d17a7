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

//! The candidate grid every strategy operates on.

use crate::cell::Cell;
use crate::config::Verbosity;
use crate::error::ParseError;
use crate::geometry::{Point, Unit, all_units};
use crate::logical_solver::Strategy;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// 81 candidate cells plus the flags marking the original clues.
///
/// Given cells are immutable: `and`, `and_not` and `set_to` leave them alone
/// and report no change.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; 81],
    given: [bool; 81],
}

impl Grid {
    /// Every cell unconstrained, no givens.
    pub fn empty() -> Self {
        Grid {
            cells: [Cell::ALL; 81],
            given: [false; 81],
        }
    }

    /// Parses the 81-character text form: `1`-`9` for a clue, `.` for an
    /// unknown square.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let found = text.chars().count();
        if found != 81 {
            return Err(ParseError::Length { found });
        }

        let mut grid = Grid::empty();
        for (index, character) in text.chars().enumerate() {
            match character {
                '1'..='9' => {
                    grid.cells[index] = Cell::from_digit(character as u8 - b'0');
                    grid.given[index] = true;
                }
                '.' => {}
                _ => return Err(ParseError::IllegalCharacter { character, index }),
            }
        }
        Ok(grid)
    }

    /// The 81-character text form. Solved cells print their digit, anything
    /// else prints `.`, so a freshly parsed puzzle encodes back to its input.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.digit() {
                Some(d) => (b'0' + d) as char,
                None => '.',
            })
            .collect()
    }

    /// Rebuilds a full candidate state from the integer-list form. The form
    /// carries no given flags.
    pub fn decode_candidates(values: &[u32]) -> Result<Self, ParseError> {
        if values.len() != 81 {
            return Err(ParseError::CandidateCount {
                found: values.len(),
            });
        }

        let mut grid = Grid::empty();
        for (index, &value) in values.iter().enumerate() {
            grid.cells[index] =
                Cell::from_decimal(value).ok_or(ParseError::IllegalCandidates { value, index })?;
        }
        Ok(grid)
    }

    /// The integer-list form: each cell's candidates as ascending decimal
    /// digits.
    pub fn encode_candidates(&self) -> Vec<u32> {
        self.cells.iter().map(|cell| cell.to_decimal()).collect()
    }

    /// An unconstrained grid with one random unit holding a shuffled 1-9.
    /// Cheap symmetry breaking before searching for a full solution.
    pub fn randomize_seed<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Grid::empty();
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(rng);

        let units = all_units();
        let unit = &units[rng.random_range(0..units.len())];
        for (p, digit) in unit.points.iter().zip(digits) {
            grid.cells[p.index()] = Cell::from_digit(digit);
        }
        grid
    }

    #[inline]
    pub fn cell(&self, p: Point) -> Cell {
        self.cells[p.index()]
    }

    #[inline]
    pub fn cells(&self) -> &[Cell; 81] {
        &self.cells
    }

    #[inline]
    pub fn is_given(&self, p: Point) -> bool {
        self.given[p.index()]
    }

    /// Number of given cells.
    pub fn givens(&self) -> usize {
        self.given.iter().filter(|&&g| g).count()
    }

    /// Turns every solved cell into a given.
    pub fn freeze_solved(&mut self) {
        for (cell, given) in self.cells.iter().zip(self.given.iter_mut()) {
            *given = cell.is_solved();
        }
    }

    /// Forgets the clue at `p`, making it fully unconstrained.
    pub fn clear(&mut self, p: Point) {
        self.cells[p.index()] = Cell::ALL;
        self.given[p.index()] = false;
    }

    /// Intersects the cell at `p` with `mask`.
    #[inline]
    pub fn and(&mut self, p: Point, mask: Cell) -> bool {
        let i = p.index();
        !self.given[i] && self.cells[i].and(mask)
    }

    /// Removes the digits of `mask` from the cell at `p`.
    #[inline]
    pub fn and_not(&mut self, p: Point, mask: Cell) -> bool {
        let i = p.index();
        !self.given[i] && self.cells[i].and_not(mask)
    }

    /// Replaces the cell at `p` with `mask`.
    #[inline]
    pub fn set_to(&mut self, p: Point, mask: Cell) -> bool {
        let i = p.index();
        !self.given[i] && self.cells[i].set_to(mask)
    }

    /// True when every unit holds each digit exactly once.
    ///
    /// # Panics
    ///
    /// Panics if a given cell no longer holds exactly one candidate. That can
    /// only happen when a strategy's elimination logic is broken.
    pub fn is_solved(&self) -> bool {
        for (i, (cell, &given)) in self.cells.iter().zip(&self.given).enumerate() {
            if given && !cell.is_solved() {
                panic!(
                    "given cell {} was corrupted to {{{}}}",
                    Point::from_index(i),
                    cell
                );
            }
        }

        all_units().iter().all(|unit| {
            let mut seen = Cell::EMPTY;
            for &p in &unit.points {
                let cell = self.cell(p);
                if !cell.is_solved() {
                    return false;
                }
                seen |= cell;
            }
            seen == Cell::ALL
        })
    }

    /// True when no unit repeats a given digit.
    pub fn is_valid(&self) -> bool {
        all_units().iter().all(|unit| {
            let mut seen = Cell::EMPTY;
            for &p in &unit.points {
                if !self.is_given(p) {
                    continue;
                }
                let cell = self.cell(p);
                if cell.count() != 1 || seen.intersects(cell) {
                    return false;
                }
                seen |= cell;
            }
            true
        })
    }

    /// True when some cell has no candidates left.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    /// True when the grid can no longer be completed: an empty cell, or a
    /// unit where some digit has no place left.
    pub fn is_dead(&self) -> bool {
        self.has_empty_cell()
            || all_units().iter().any(|unit| {
                let mut seen = Cell::EMPTY;
                for &p in &unit.points {
                    seen |= self.cell(p);
                }
                seen != Cell::ALL
            })
    }

    /// For each digit, the points of `unit` holding it as a candidate.
    /// Index 0 is unused.
    pub fn digit_positions(&self, unit: &Unit) -> [Vec<Point>; 10] {
        let mut positions: [Vec<Point>; 10] = Default::default();
        for &p in &unit.points {
            for d in self.cell(p).digits() {
                positions[d as usize].push(p);
            }
        }
        positions
    }

    /// For each digit, a 9-bit mask of the unit slots holding it.
    /// Index 0 is unused.
    pub fn digit_place_mask(&self, unit: &Unit) -> [u16; 10] {
        let mut places = [0u16; 10];
        for (slot, &p) in unit.points.iter().enumerate() {
            for d in self.cell(p).digits() {
                places[d as usize] |= 1 << slot;
            }
        }
        places
    }

    /// Points whose cells still have two or more candidates.
    pub fn unsolved_points(&self) -> impl Iterator<Item = Point> + '_ {
        Point::all().filter(|&p| self.cell(p).count() > 1)
    }

    /// A random point among the unsolved cells with the fewest candidates.
    pub fn min_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        let fewest = self.unsolved_points().map(|p| self.cell(p).count()).min()?;
        let ties: Vec<Point> = self
            .unsolved_points()
            .filter(|&p| self.cell(p).count() == fewest)
            .collect();
        ties.choose(rng).copied()
    }

    /// The change-tracing hook. Strategies call it after every cell they
    /// modify.
    pub fn log_change(&self, verbosity: Verbosity, strategy: Strategy, args: fmt::Arguments<'_>) {
        if !verbosity.traces_changes() {
            return;
        }
        log::debug!("{strategy}: {args}");
        if verbosity.dumps_grids() {
            log::trace!("\n{self}");
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::empty()
    }
}

impl Index<Point> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, p: Point) -> &Cell {
        &self.cells[p.index()]
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.count().max(1))
            .max()
            .unwrap_or(1);
        let rule = format!("+{}", format!("{}+", "-".repeat((width + 1) * 3 + 1)).repeat(3));

        for row in 0..9u8 {
            if row % 3 == 0 {
                writeln!(f, "{rule}")?;
            }
            for col in 0..9u8 {
                if col % 3 == 0 {
                    f.write_str("| ")?;
                }
                let p = Point::new(row, col);
                let text = match self.cell(p) {
                    cell if cell.is_empty() => "-".to_string(),
                    cell => cell.to_string(),
                };
                write!(f, "{text:<width$} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Grid").field(&self.encode_candidates()).finish()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Grid::parse(&text).map_err(serde::de::Error::custom)
    }
}
