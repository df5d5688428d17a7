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
use crate::geometry::{Point, UnitKind, unit};
use crate::grid::Grid;
use itertools::Itertools;

pub fn x_wing(grid: &mut Grid, verbosity: Verbosity) -> bool {
    find_fish(grid, 2, Strategy::XWing, verbosity)
}

pub fn swordfish(grid: &mut Grid, verbosity: Verbosity) -> bool {
    find_fish(grid, 3, Strategy::Swordfish, verbosity)
}

pub fn jellyfish(grid: &mut Grid, verbosity: Verbosity) -> bool {
    find_fish(grid, 4, Strategy::Jellyfish, verbosity)
}

/// Generalized fish: `size` base lines whose positions for a digit fall in
/// exactly `size` cover lines. The digit is removed from the cover lines
/// outside the base lines. Rows are tried as base lines before columns.
fn find_fish(grid: &mut Grid, size: usize, strategy: Strategy, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for digit in 1..=9u8 {
        for (base, cover) in [(UnitKind::Row, UnitKind::Col), (UnitKind::Col, UnitKind::Row)] {
            // (base line, mask of cover lines holding the digit)
            let lines: Vec<(usize, u16)> = (0..9)
                .filter_map(|line| {
                    let mask = grid.digit_place_mask(unit(base, line))[digit as usize];
                    (2..=size)
                        .contains(&(mask.count_ones() as usize))
                        .then_some((line, mask))
                })
                .collect();
            if lines.len() < size {
                continue;
            }

            for combo in lines.iter().copied().combinations(size) {
                let covers = combo.iter().fold(0u16, |acc, &(_, mask)| acc | mask);
                if covers.count_ones() as usize != size {
                    continue;
                }
                let bases: Vec<usize> = combo.iter().map(|&(line, _)| line).collect();

                for cover_line in (0..9).filter(|&c| covers & (1 << c) != 0) {
                    let cover_unit = unit(cover, cover_line);
                    for &p in &cover_unit.points {
                        if bases.contains(&base_coordinate(p, base)) {
                            continue;
                        }
                        if eliminate(
                            grid,
                            p,
                            Cell::from_digit(digit),
                            strategy,
                            verbosity,
                            format_args!(
                                "because {digit} in {base}s {bases:?} is confined to {cover_unit} and its partners"
                            ),
                        ) {
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    changed
}

#[inline]
fn base_coordinate(p: Point, base: UnitKind) -> usize {
    match base {
        UnitKind::Row => p.row as usize,
        _ => p.col as usize,
    }
}
