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

use common::{apply, assert_sound, changes, grid_from, grid_with};
use pretty_assertions::assert_eq;
use sudoku_forge::config::Verbosity;
use sudoku_forge::logical_solver::wings::{wxyz_wing, xyz_wing, y_wing};

const WXYZ_BEFORE: [u32; 81] = [
    1689, 169, 189, 1589, 2, 4, 7, 3, 158,
    5, 4, 189, 3, 7, 89, 2, 6, 18,
    2, 3, 7, 168, 15, 568, 159, 189, 4,
    7, 12569, 1259, 59, 3, 259, 8, 4, 156,
    69, 2569, 3, 4, 8, 1, 59, 279, 567,
    19, 8, 4, 579, 6, 2579, 159, 12, 3,
    3, 12, 128, 1678, 14, 678, 46, 5, 9,
    148, 7, 158, 568, 9, 3, 46, 18, 2,
    1489, 159, 6, 2, 145, 58, 3, 178, 178,
];

const WXYZ_SOLUTION: &str =
    "169824735548379261237156984751932846623481597984567123312748659875693412496215378";

const WXYZ_CHANGES: &[(usize, u32, u32)] = &[(28, 12569, 1256), (65, 158, 58)];

#[test]
fn test_y_wing_pincers() {
    let before = grid_with(&[(0, 0, &[1, 2]), (0, 4, &[1, 3]), (4, 0, &[2, 3])]);
    let (changed, after) = apply(&before, |g| y_wing(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(
        changes(&before, &after),
        vec![(40, 123456789, 12456789)],
        "Only (4, 4) sees both wings."
    );
}

#[test]
fn test_y_wing_needs_distinct_wings() {
    let before = grid_with(&[(0, 0, &[1, 2]), (0, 4, &[1, 2]), (4, 0, &[1, 2])]);
    let (changed, _) = apply(&before, |g| y_wing(g, Verbosity::SILENT));
    assert!(!changed);
}

#[test]
fn test_xyz_wing_pincers() {
    let before = grid_with(&[(0, 0, &[1, 2, 3]), (0, 4, &[1, 3]), (1, 1, &[2, 3])]);
    let (wing, _) = apply(&before, |g| y_wing(g, Verbosity::SILENT));
    assert!(!wing);

    let (changed, after) = apply(&before, |g| xyz_wing(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(
        changes(&before, &after),
        vec![(1, 123456789, 12456789), (2, 123456789, 12456789)]
    );
}

#[test]
fn test_wxyz_wing() {
    let before = grid_from(&WXYZ_BEFORE);
    let (changed, after) = apply(&before, |g| wxyz_wing(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), WXYZ_CHANGES);
    assert_sound(&after, WXYZ_SOLUTION);
}
