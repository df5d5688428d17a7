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
use crate::geometry::{Point, PointSet, visibility};
use crate::grid::Grid;

/// Longest chain considered, in cells.
const MAX_CHAIN: usize = 10;
/// Depth-first expansions allowed per start cell and digit.
const SEARCH_BUDGET: usize = 4000;

// --- XY-Chains ---

struct ChainSearch<'a> {
    grid: &'a Grid,
    bivalue: &'a [Point],
    start: Point,
    /// The digit that is true at one end of the chain if it is false at the
    /// other.
    digit: u8,
    path: Vec<Point>,
    on_path: PointSet,
    steps: usize,
    found: Vec<(Point, u8, Point, Point)>,
}

impl ChainSearch<'_> {
    /// `out` is the digit the last cell is forced to when its predecessor
    /// is forced away from the shared one.
    fn extend(&mut self, out: u8) {
        if self.steps > SEARCH_BUDGET {
            return;
        }
        self.steps += 1;

        let Some(&current) = self.path.last() else {
            return;
        };
        if self.path.len() >= 3 && out == self.digit {
            let ends = visibility(self.start) & visibility(current);
            for p in ends.iter() {
                let cell = self.grid.cell(p);
                if !self.on_path.contains(p) && cell.count() > 1 && cell.contains(self.digit) {
                    self.found.push((p, self.digit, self.start, current));
                }
            }
        }
        if self.path.len() >= MAX_CHAIN {
            return;
        }

        for &next in self.bivalue {
            if self.on_path.contains(next)
                || !current.sees(next)
                || !self.grid.cell(next).contains(out)
            {
                continue;
            }
            let forced = (self.grid.cell(next) - Cell::from_digit(out)).lowest_digit();
            self.path.push(next);
            self.on_path.insert(next);
            self.extend(forced);
            self.on_path.remove(next);
            self.path.pop();
        }
    }
}

/// Chains of bivalue cells where consecutive cells share a digit. If the
/// chain starts and ends on the same digit `z`, one end holds `z`, so cells
/// seeing both ends lose it.
pub fn xy_chain(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let bivalue: Vec<Point> = Point::all()
        .filter(|&p| grid.cell(p).count() == 2)
        .collect();

    let mut found = Vec::new();
    for &start in &bivalue {
        for digit in grid.cell(start).digits() {
            let mut search = ChainSearch {
                grid: &*grid,
                bivalue: &bivalue,
                start,
                digit,
                path: vec![start],
                on_path: PointSet::from_iter([start]),
                steps: 0,
                found,
            };
            search.extend((grid.cell(start) - Cell::from_digit(digit)).lowest_digit());
            found = search.found;
        }
    }

    let mut changed = false;
    for (p, digit, start, end) in found {
        if eliminate(
            grid,
            p,
            Cell::from_digit(digit),
            Strategy::XyChain,
            verbosity,
            format_args!("because it sees both ends of the chain from {start} to {end}"),
        ) {
            changed = true;
        }
    }
    changed
}
