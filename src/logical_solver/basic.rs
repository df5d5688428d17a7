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

use super::{Strategy, eliminate, place};
use crate::config::Verbosity;
use crate::geometry::{Unit, all_units};
use crate::grid::Grid;

/// Removes the digit of every solved cell from the rest of its units.
pub fn naked_single(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for unit in all_units() {
        for &p in &unit.points {
            let cell = grid.cell(p);
            if !cell.is_solved() {
                continue;
            }
            for &q in &unit.points {
                if q != p
                    && eliminate(
                        grid,
                        q,
                        cell,
                        Strategy::NakedSingle,
                        verbosity,
                        format_args!("because {p} is solved in {unit}"),
                    )
                {
                    changed = true;
                }
            }
        }
    }
    changed
}

/// Fixes a digit in the only cell of a unit that can still hold it.
pub fn hidden_single(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for unit in all_units() {
        for digit in 1..=9 {
            let places = places_of(grid, unit, digit);
            if places.count_ones() != 1 {
                continue;
            }
            let p = unit.points[places.trailing_zeros() as usize];
            if place(
                grid,
                p,
                digit,
                Strategy::HiddenSingle,
                verbosity,
                format_args!("because it is the only place for {digit} in {unit}"),
            ) {
                changed = true;
            }
        }
    }
    changed
}

/// Slots of `unit` that hold `digit`, as a 9-bit mask.
#[inline]
fn places_of(grid: &Grid, unit: &Unit, digit: u8) -> u16 {
    unit.points
        .iter()
        .enumerate()
        .filter(|&(_, &p)| grid.cell(p).contains(digit))
        .fold(0, |mask, (slot, _)| mask | 1 << slot)
}
