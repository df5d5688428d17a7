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

use super::single_digit::two_color;
use super::{Strategy, eliminate};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Point, all_units, visibility};
use crate::grid::Grid;
use itertools::Itertools;
use std::collections::BTreeMap;

/// A candidate: a digit in a cell.
type Node = (Point, u8);

/// Strong links between candidates: conjugate pairs within units and the
/// two digits of bivalue cells.
fn strong_links(grid: &Grid) -> BTreeMap<Node, Vec<Node>> {
    let mut links: BTreeMap<Node, Vec<Node>> = BTreeMap::new();
    let mut link = |a: Node, b: Node| {
        let from = links.entry(a).or_default();
        if from.contains(&b) {
            return;
        }
        from.push(b);
        links.entry(b).or_default().push(a);
    };

    for digit in 1..=9u8 {
        for unit in all_units() {
            let places = &grid.digit_positions(unit)[digit as usize];
            let &[a, b] = places.as_slice() else {
                continue;
            };
            if grid.cell(a).count() > 1 && grid.cell(b).count() > 1 {
                link((a, digit), (b, digit));
            }
        }
    }
    for p in Point::all() {
        let cell = grid.cell(p);
        if cell.count() == 2 {
            let mut digits = cell.digits();
            if let (Some(a), Some(b)) = (digits.next(), digits.next()) {
                link((p, a), (p, b));
            }
        }
    }

    for neighbours in links.values_mut() {
        neighbours.sort_unstable();
    }
    links
}

/// Colors of the candidates in the cell at `p`, as a two-bit mask.
fn colors_in_cell(colors: &BTreeMap<Node, u8>, grid: &Grid, p: Point) -> u8 {
    grid.cell(p)
        .digits()
        .filter_map(|d| colors.get(&(p, d)))
        .fold(0, |mask, &color| mask | 1 << color)
}

/// Colors of `digit` among the cells `p` sees, as a two-bit mask.
fn colors_seen(colors: &BTreeMap<Node, u8>, p: Point, digit: u8) -> u8 {
    visibility(p)
        .iter()
        .filter_map(|q| colors.get(&(q, digit)))
        .fold(0, |mask, &color| mask | 1 << color)
}

/// A color contradicting itself: twice in one cell, or the same digit
/// twice in one unit.
fn contradicted_color(groups: &[Vec<Node>; 2]) -> Option<usize> {
    (0..2).find(|&c| {
        let group = &groups[c];
        let repeats_cell = group.iter().map(|&(p, _)| p).duplicates().next().is_some();
        repeats_cell
            || group
                .iter()
                .tuple_combinations()
                .any(|(&(a, da), &(b, db))| da == db && a.sees(b))
    })
}

/// A color whose truth would empty some uncolored cell, because every one
/// of its candidates sees that color.
fn color_emptying_cell(colors: &BTreeMap<Node, u8>, grid: &Grid) -> Option<usize> {
    for p in grid.unsolved_points() {
        let cell = grid.cell(p);
        if cell.digits().any(|d| colors.contains_key(&(p, d))) {
            continue;
        }
        if let Some(c) = (0..2).find(|&c| {
            cell.digits()
                .all(|d| colors_seen(colors, p, d) & (1 << c) != 0)
        }) {
            return Some(c);
        }
    }
    None
}

/// 3D medusa: coloring across all candidates linked by conjugate pairs and
/// bivalue cells. A contradicted color is removed entirely; otherwise
/// uncolored candidates that would clash with both colors are removed.
pub fn medusa_3d(grid: &mut Grid, verbosity: Verbosity) -> bool {
    for colors in two_color(&strong_links(grid)) {
        let groups: [Vec<Node>; 2] = [0, 1].map(|c| {
            colors
                .iter()
                .filter(|&(_, &color)| color == c)
                .map(|(&node, _)| node)
                .collect()
        });

        let mut false_color = contradicted_color(&groups);
        if false_color.is_none() {
            let mut found: Vec<Node> = Vec::new();
            for p in grid.unsolved_points() {
                let in_cell = colors_in_cell(&colors, grid, p);
                for d in grid.cell(p).digits() {
                    if colors.contains_key(&(p, d)) {
                        continue;
                    }
                    let seen = colors_seen(&colors, p, d);
                    // Both colors in the cell, both seen, or one in the cell
                    // and the other seen.
                    let opposed = in_cell == 0b11
                        || seen == 0b11
                        || (in_cell & 1 != 0 && seen & 2 != 0)
                        || (in_cell & 2 != 0 && seen & 1 != 0);
                    if opposed {
                        found.push((p, d));
                    }
                }
            }

            let mut changed = false;
            for (p, d) in found {
                if eliminate(
                    grid,
                    p,
                    Cell::from_digit(d),
                    Strategy::Medusa3d,
                    verbosity,
                    format_args!("because it clashes with both colors"),
                ) {
                    changed = true;
                }
            }
            if changed {
                return true;
            }
            false_color = color_emptying_cell(&colors, grid);
        }

        if let Some(c) = false_color {
            let mut changed = false;
            for &(p, d) in &groups[c] {
                if eliminate(
                    grid,
                    p,
                    Cell::from_digit(d),
                    Strategy::Medusa3d,
                    verbosity,
                    format_args!("because its color leads to a contradiction"),
                ) {
                    changed = true;
                }
            }
            if changed {
                return true;
            }
        }
    }
    false
}
