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

mod common;

use common::{apply, assert_sound, changes, grid_from};
use pretty_assertions::assert_eq;
use sudoku_forge::config::Verbosity;
use sudoku_forge::logical_solver::chains::xy_chain;

const XY_CHAIN_BEFORE: [u32; 81] = [
    26, 8, 245, 1, 29, 3, 59, 7, 456,
    37, 9, 24, 5, 27, 6, 18, 14, 348,
    37, 56, 1, 4, 79, 8, 359, 2, 356,
    5, 7, 8, 2, 4, 1, 6, 3, 9,
    1, 4, 3, 6, 5, 9, 7, 8, 2,
    9, 2, 6, 8, 3, 7, 4, 5, 1,
    68, 3, 7, 9, 16, 5, 2, 14, 48,
    28, 56, 25, 3, 16, 4, 18, 9, 7,
    4, 1, 9, 7, 8, 2, 35, 6, 35,
];

const XY_CHAIN_SOLUTION: &str =
    "684123975392576148751498326578241639143659782926837451837965214265314897419782563";

const XY_CHAIN_CHANGES: &[(usize, u32, u32)] = &[
    (2, 245, 4),
    (17, 348, 38),
    (24, 359, 39),
    (26, 356, 36),
];

#[test]
fn test_xy_chain() {
    let before = grid_from(&XY_CHAIN_BEFORE);
    let (changed, after) = apply(&before, |g| xy_chain(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), XY_CHAIN_CHANGES);
    assert_sound(&after, XY_CHAIN_SOLUTION);
}
