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

use super::{Listed, Strategy, eliminate};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Point, visibility};
use crate::grid::Grid;
use itertools::Itertools;

// --- Y-Wing ---

/// A bivalue pivot `ab` seeing bivalue wings `az` and `bz`: whichever digit
/// the pivot takes, one wing becomes `z`, so cells seeing both wings lose `z`.
pub fn y_wing(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for pivot in Point::all() {
        if grid.cell(pivot).count() != 2 {
            continue;
        }
        let wings: Vec<Point> = visibility(pivot)
            .iter()
            .filter(|&w| grid.cell(w).count() == 2)
            .collect();

        for (&w1, &w2) in wings.iter().tuple_combinations() {
            let (p, x, y) = (grid.cell(pivot), grid.cell(w1), grid.cell(w2));
            if x == p || y == p || x == y {
                continue;
            }
            let z = x & y;
            if z.count() != 1 || z.intersects(p) || x | y | p != p | z {
                continue;
            }

            for q in (visibility(w1) & visibility(w2)).iter() {
                if q == pivot {
                    continue;
                }
                if eliminate(
                    grid,
                    q,
                    z,
                    Strategy::YWing,
                    verbosity,
                    format_args!("because of pivot {pivot} with wings {w1} and {w2}"),
                ) {
                    changed = true;
                }
            }
        }
    }
    changed
}

// --- XYZ-Wing ---

/// A pivot `xyz` with bivalue wings `xz` and `yz`: `z` is removed from cells
/// seeing all three.
pub fn xyz_wing(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for pivot in Point::all() {
        let p = grid.cell(pivot);
        if p.count() != 3 {
            continue;
        }
        let wings: Vec<Point> = visibility(pivot)
            .iter()
            .filter(|&w| grid.cell(w).count() == 2 && p.contains_all(grid.cell(w)))
            .collect();

        for (&w1, &w2) in wings.iter().tuple_combinations() {
            let (x, y) = (grid.cell(w1), grid.cell(w2));
            let z = x & y;
            if x | y != p || z.count() != 1 {
                continue;
            }

            for q in (visibility(pivot) & visibility(w1) & visibility(w2)).iter() {
                if eliminate(
                    grid,
                    q,
                    z,
                    Strategy::XyzWing,
                    verbosity,
                    format_args!("because of pivot {pivot} with wings {w1} and {w2}"),
                ) {
                    changed = true;
                }
            }
        }
    }
    changed
}

// --- WXYZ-Wing ---

/// Four cells spanning exactly four digits where only one digit `z` has
/// holders that do not all see each other. The pattern must contain `z`, so
/// every cell outside it seeing all `z` holders loses `z`.
pub fn wxyz_wing(grid: &mut Grid, verbosity: Verbosity) -> bool {
    // (target, digit, pattern)
    let mut found: Vec<(Point, u8, [Point; 4])> = Vec::new();

    for pivot in Point::all() {
        let p = grid.cell(pivot);
        if !(2..=4).contains(&p.count()) {
            continue;
        }
        let wings: Vec<Point> = visibility(pivot)
            .iter()
            .filter(|&w| {
                let cell = grid.cell(w);
                (2..=4).contains(&cell.count()) && (cell | p).count() <= 4
            })
            .collect();

        for (&a, &b, &c) in wings.iter().tuple_combinations() {
            let pattern = [pivot, a, b, c];
            let union = pattern
                .iter()
                .fold(Cell::EMPTY, |acc, &q| acc | grid.cell(q));
            if union.count() != 4 {
                continue;
            }

            let mut unrestricted = union.digits().filter_map(|d| {
                let holders: Vec<Point> = pattern
                    .iter()
                    .copied()
                    .filter(|&q| grid.cell(q).contains(d))
                    .collect();
                let restricted = holders
                    .iter()
                    .tuple_combinations()
                    .all(|(&h1, &h2)| h1.sees(h2));
                (!restricted).then_some((d, holders))
            });
            let (Some((z, holders)), None) = (unrestricted.next(), unrestricted.next()) else {
                continue;
            };

            let seen = holders
                .iter()
                .map(|&h| visibility(h))
                .reduce(|acc, v| acc & v)
                .unwrap_or_default();
            for q in seen.iter().filter(|q| !pattern.contains(q)) {
                found.push((q, z, pattern));
            }
        }
    }

    let mut changed = false;
    for (q, z, pattern) in found {
        if eliminate(
            grid,
            q,
            Cell::from_digit(z),
            Strategy::WxyzWing,
            verbosity,
            format_args!("because {z} must appear in {}", Listed(&pattern)),
        ) {
            changed = true;
        }
    }
    changed
}
