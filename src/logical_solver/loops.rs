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
use crate::geometry::{Point, PointSet, Unit, UnitKind, unit};
use crate::grid::Grid;

// --- SK Loops ---

/// The two other cells of `p`'s mini-row and mini-column inside its box.
fn lobes_of(p: Point) -> ([Point; 2], [Point; 2]) {
    let others = |x: u8| {
        let base = x / 3 * 3;
        match x - base {
            0 => [base + 1, base + 2],
            1 => [base, base + 2],
            _ => [base, base + 1],
        }
    };
    let [c1, c2] = others(p.col);
    let [r1, r2] = others(p.row);
    (
        [Point::new(p.row, c1), Point::new(p.row, c2)],
        [Point::new(r1, p.col), Point::new(r2, p.col)],
    )
}

/// Splits the lobe candidates into the digits carried by each of the eight
/// links. Link `k` joins lobe `k` and lobe `k + 1`, link 7 closing the loop
/// back to lobe 0; every lobe's digits are exactly the union of its two links.
fn partition_links(lobes: &[Cell; 8]) -> Option<[Cell; 8]> {
    let shared = (lobes[7] & lobes[0]).bits();
    let mut sub = shared;
    while sub != 0 {
        let closing = Cell::from_bits(sub);
        if let Some(links) = propagate(lobes, closing) {
            return Some(links);
        }
        sub = (sub - 1) & shared;
    }
    None
}

/// Walks the loop from the link closing it, each lobe passing on the digits
/// it did not receive.
fn propagate(lobes: &[Cell; 8], closing: Cell) -> Option<[Cell; 8]> {
    let mut links = [Cell::EMPTY; 8];
    links[7] = closing;
    for k in 0..8 {
        let prev = links[(k + 7) % 8];
        if !lobes[k].contains_all(prev) {
            return None;
        }
        let next = lobes[k] - prev;
        if next.is_empty() || !lobes[(k + 1) % 8].contains_all(next) {
            return None;
        }
        if k == 7 {
            if next != links[7] {
                return None;
            }
        } else {
            links[k] = next;
        }
    }
    let total: usize = links.iter().map(|l| l.count()).sum();
    (total == 16).then_some(links)
}

/// Four solved corners in different bands and stacks, each with unsolved
/// lobes along its row and column. When the 16 lobe digits split into eight
/// links, each link digit lives in the lobes of its unit, and the rest of
/// that unit loses it.
pub fn sk_loop(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for r1 in 0..9u8 {
        for r2 in (r1 + 1)..9 {
            if r1 / 3 == r2 / 3 {
                continue;
            }
            for c1 in 0..9u8 {
                for c2 in (c1 + 1)..9 {
                    if c1 / 3 == c2 / 3 {
                        continue;
                    }
                    changed |= try_loop(grid, [r1, r2], [c1, c2], verbosity);
                }
            }
        }
    }
    changed
}

fn try_loop(grid: &mut Grid, [r1, r2]: [u8; 2], [c1, c2]: [u8; 2], verbosity: Verbosity) -> bool {
    let corners = [
        Point::new(r1, c1),
        Point::new(r1, c2),
        Point::new(r2, c2),
        Point::new(r2, c1),
    ];
    if corners.iter().any(|&p| !grid.cell(p).is_solved()) {
        return false;
    }
    let arms = corners.map(lobes_of);
    let pairs: [[Point; 2]; 8] = [
        arms[0].0, arms[1].0, arms[1].1, arms[2].1, arms[2].0, arms[3].0, arms[3].1, arms[0].1,
    ];
    if pairs
        .iter()
        .flatten()
        .any(|&p| grid.cell(p).count() < 2)
    {
        return false;
    }

    let cells = pairs.map(|[a, b]| grid.cell(a) | grid.cell(b));
    if cells.iter().map(|c| c.count()).sum::<usize>() != 32 {
        return false;
    }
    let Some(links) = partition_links(&cells) else {
        return false;
    };

    let link_units: [&Unit; 8] = [
        unit(UnitKind::Row, r1 as usize),
        unit(UnitKind::Box, corners[1].box_index()),
        unit(UnitKind::Col, c2 as usize),
        unit(UnitKind::Box, corners[2].box_index()),
        unit(UnitKind::Row, r2 as usize),
        unit(UnitKind::Box, corners[3].box_index()),
        unit(UnitKind::Col, c1 as usize),
        unit(UnitKind::Box, corners[0].box_index()),
    ];
    let immune: PointSet = corners
        .iter()
        .chain(pairs.iter().flatten())
        .copied()
        .collect();

    let mut changed = false;
    for (link, link_unit) in links.into_iter().zip(link_units) {
        for &p in &link_unit.points {
            if immune.contains(p) {
                continue;
            }
            if eliminate(
                grid,
                p,
                link,
                Strategy::SkLoop,
                verbosity,
                format_args!(
                    "because of the loop through rows {r1}, {r2} and columns {c1}, {c2}"
                ),
            ) {
                changed = true;
            }
        }
    }
    changed
}
