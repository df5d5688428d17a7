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

use super::{Strategy, restrict};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Point, UnitKind, units};
use crate::grid::Grid;
use itertools::Itertools;

/// Which lines the base cells share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Rows,
    Cols,
}

impl Orientation {
    #[inline]
    fn line(self, p: Point) -> u8 {
        match self {
            Orientation::Rows => p.row,
            Orientation::Cols => p.col,
        }
    }

    #[inline]
    fn cross(self, p: Point) -> u8 {
        match self {
            Orientation::Rows => p.col,
            Orientation::Cols => p.row,
        }
    }

    #[inline]
    fn at(self, line: u8, cross: u8) -> Point {
        match self {
            Orientation::Rows => Point::new(line, cross),
            Orientation::Cols => Point::new(cross, line),
        }
    }
}

// --- Junior Exocet ---

/// Two base cells in one mini-line whose candidates span three or four
/// digits, and two target cells in the other lines of the band, each outside
/// the base box and in a different box from the other. If the base digits
/// are confined to at most two lines outside the band across the three cross
/// lines, the targets hold the base digits, so they lose everything else.
pub fn exocet(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for orientation in [Orientation::Rows, Orientation::Cols] {
        for box_unit in units(UnitKind::Box) {
            for (&b1, &b2) in box_unit.points.iter().tuple_combinations() {
                if orientation.line(b1) != orientation.line(b2)
                    || grid.cell(b1).count() < 2
                    || grid.cell(b2).count() < 2
                {
                    continue;
                }
                let base = grid.cell(b1) | grid.cell(b2);
                if !(3..=4).contains(&base.count()) {
                    continue;
                }
                changed |= try_base(grid, orientation, [b1, b2], base, verbosity);
            }
        }
    }
    changed
}

fn try_base(
    grid: &mut Grid,
    orientation: Orientation,
    [b1, b2]: [Point; 2],
    base: Cell,
    verbosity: Verbosity,
) -> bool {
    let line = orientation.line(b1);
    let band = line / 3 * 3;
    let stack = orientation.cross(b1) / 3 * 3;
    let Some(third) = (stack..stack + 3)
        .find(|&x| x != orientation.cross(b1) && x != orientation.cross(b2))
    else {
        return false;
    };

    let targets: Vec<Point> = (band..band + 3)
        .filter(|&l| l != line)
        .flat_map(|l| (0..9).map(move |x| orientation.at(l, x)))
        .filter(|&t| {
            let cell = grid.cell(t);
            t.box_index() != b1.box_index() && cell.count() > 1 && cell.contains_all(base)
        })
        .collect();

    let mut changed = false;
    for (&t1, &t2) in targets.iter().tuple_combinations() {
        if orientation.line(t1) == orientation.line(t2)
            || t1.box_index() == t2.box_index()
            || orientation.cross(t1) == orientation.cross(t2)
        {
            continue;
        }
        let companions = [
            orientation.at(orientation.line(t2), orientation.cross(t1)),
            orientation.at(orientation.line(t1), orientation.cross(t2)),
        ];
        if companions.iter().any(|&c| grid.cell(c).intersects(base)) {
            continue;
        }

        let cross_lines = [third, orientation.cross(t1), orientation.cross(t2)];
        let confined = base.digits().all(|d| {
            let covers = (0..9u8)
                .filter(|&l| l / 3 * 3 != band)
                .filter(|&l| {
                    cross_lines
                        .iter()
                        .any(|&x| grid.cell(orientation.at(l, x)).contains(d))
                })
                .count();
            covers <= 2
        });
        if !confined {
            continue;
        }

        for t in [t1, t2] {
            if restrict(
                grid,
                t,
                base,
                Strategy::Exocet,
                verbosity,
                format_args!("as a target of the base {b1} and {b2}"),
            ) {
                changed = true;
            }
        }
    }
    changed
}
