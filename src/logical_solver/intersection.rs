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

use super::{Strategy, eliminate};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Unit, UnitKind, unit, units};
use crate::grid::Grid;

// --- Pointing Lines ---

/// A digit confined to one row (or column) inside a box is removed from the
/// rest of that line.
pub fn pointing_line(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for box_unit in units(UnitKind::Box) {
        let positions = grid.digit_positions(box_unit);
        for digit in 1..=9u8 {
            let cells = &positions[digit as usize];
            if cells.len() < 2 {
                continue;
            }

            let line = if cells.iter().all(|p| p.row == cells[0].row) {
                unit(UnitKind::Row, cells[0].row as usize)
            } else if cells.iter().all(|p| p.col == cells[0].col) {
                unit(UnitKind::Col, cells[0].col as usize)
            } else {
                continue;
            };

            changed |= clear_outside(
                grid,
                line,
                box_unit,
                digit,
                Strategy::PointingLine,
                verbosity,
            );
        }
    }
    changed
}

// --- Box/Line Reduction ---

/// A digit confined to one box within a column (or row) is removed from
/// the rest of that box.
pub fn box_line(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for line in units(UnitKind::Col).iter().chain(units(UnitKind::Row)) {
        let positions = grid.digit_positions(line);
        for digit in 1..=9u8 {
            let cells = &positions[digit as usize];
            if cells.len() < 2 {
                continue;
            }
            let box_index = cells[0].box_index();
            if cells.iter().any(|p| p.box_index() != box_index) {
                continue;
            }

            changed |= clear_outside(
                grid,
                unit(UnitKind::Box, box_index),
                line,
                digit,
                Strategy::BoxLine,
                verbosity,
            );
        }
    }
    changed
}

/// Removes `digit` from the points of `target` that are not in `source`.
fn clear_outside(
    grid: &mut Grid,
    target: &Unit,
    source: &Unit,
    digit: u8,
    strategy: Strategy,
    verbosity: Verbosity,
) -> bool {
    let mut changed = false;
    for &p in target.points.iter().filter(|&&p| !source.contains(p)) {
        if eliminate(
            grid,
            p,
            Cell::from_digit(digit),
            strategy,
            verbosity,
            format_args!("because {digit} is confined to {target} within {source}"),
        ) {
            changed = true;
        }
    }
    changed
}
