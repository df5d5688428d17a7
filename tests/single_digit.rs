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
use sudoku_forge::logical_solver::single_digit::{singles_chain, x_cycles};

const TWICE_IN_A_UNIT_BEFORE: [u32; 81] = [
    2, 8, 9, 146, 46, 14, 3, 7, 5,
    3, 6, 4, 57, 9, 57, 8, 1, 2,
    5, 1, 7, 2, 8, 3, 9, 6, 4,
    8, 9, 3, 457, 2, 457, 6, 45, 1,
    1, 4, 5, 8, 3, 6, 7, 2, 9,
    7, 2, 6, 19, 45, 19, 45, 8, 3,
    4, 5, 1, 3, 7, 8, 2, 9, 6,
    69, 7, 2, 4569, 1, 459, 45, 3, 8,
    69, 3, 8, 4569, 456, 2, 1, 45, 7,
];

const TWICE_IN_A_UNIT_SOLUTION: &str =
    "289641375364795812517283964893427651145836729726159483451378296672914538938562147";

const TWICE_IN_A_UNIT_CHANGES: &[(usize, u32, u32)] = &[
    (51, 45, 4),
    (66, 4569, 469),
    (68, 459, 49),
    (76, 456, 6),
    (79, 45, 4),
];

const TWO_COLORS_ELSEWHERE_BEFORE: [u32; 81] = [
    1, 2, 8, 4, 5, 37, 37, 9, 6,
    37, 4, 6, 37, 9, 1, 2, 8, 5,
    9, 37, 5, 8, 2, 6, 4, 1, 37,
    678, 67, 3, 5, 678, 2, 1, 4, 9,
    678, 9, 1, 367, 4, 37, 68, 5, 2,
    4, 5, 2, 1, 68, 9, 68, 37, 37,
    36, 36, 4, 27, 1, 5, 9, 27, 8,
    2, 8, 7, 9, 3, 4, 5, 6, 1,
    5, 1, 9, 267, 67, 8, 37, 237, 4,
];

const TWO_COLORS_ELSEWHERE_SOLUTION: &str =
    "128453796346791285975826413763582149891347652452169837634215978287934561519678324";

const TWO_COLORS_ELSEWHERE_CHANGES: &[(usize, u32, u32)] = &[
    (31, 678, 68),
    (36, 678, 68),
    (75, 267, 26),
];

const NICE_LOOP_BEFORE: [u32; 81] = [
    59, 2, 4, 1, 35, 58, 6, 7, 389,
    59, 6, 38, 238, 7, 258, 4, 1, 389,
    7, 18, 138, 9, 6, 4, 58, 2, 358,
    2, 4, 6, 5, 9, 1, 3, 8, 7,
    1, 3, 5, 4, 8, 7, 2, 9, 6,
    8, 7, 9, 6, 2, 3, 1, 5, 4,
    4, 18, 128, 38, 35, 9, 7, 6, 258,
    3, 5, 28, 7, 1, 6, 9, 4, 28,
    6, 9, 7, 28, 4, 258, 58, 3, 1,
];

const NICE_LOOP_SOLUTION: &str =
    "524138679968275413713964825246591387135487296879623154481359762352716948697842531";

const NICE_LOOP_CHANGES: &[(usize, u32, u32)] = &[
    (20, 138, 13),
    (26, 358, 35),
    (56, 128, 12),
    (62, 258, 25),
];

const STRONG_LOOP_BEFORE: [u32; 81] = [
    8, 19, 4, 5, 3, 7, 169, 126, 12,
    79, 2, 3, 6, 1, 4, 79, 8, 5,
    6, 17, 5, 9, 8, 2, 17, 3, 4,
    349, 346, 269, 1, 469, 5, 8, 7, 29,
    5, 49, 12, 7, 49, 8, 3, 12, 6,
    179, 8, 1679, 2, 69, 3, 4, 5, 19,
    2, 467, 167, 8, 5, 9, 16, 146, 3,
    49, 5, 69, 3, 7, 1, 2, 469, 8,
    139, 39, 8, 4, 2, 6, 5, 19, 7,
];

const STRONG_LOOP_SOLUTION: &str =
    "894537612723614985615982734362145879541798326987263451276859143459371268138426597";

const STRONG_LOOP_CHANGES: &[(usize, u32, u32)] = &[(72, 139, 1)];

const WEAK_LOOP_BEFORE: [u32; 81] = [
    2478, 23, 247, 357, 1, 357, 9, 6, 28,
    127, 1239, 1279, 6, 8, 37, 4, 5, 12,
    18, 5, 6, 9, 4, 2, 3, 18, 7,
    1247, 126, 12457, 157, 36, 8, 17, 137, 9,
    3, 8, 17, 17, 9, 4, 6, 2, 5,
    9, 16, 157, 2, 36, 157, 178, 1378, 4,
    6, 7, 3, 18, 2, 9, 5, 4, 18,
    5, 129, 8, 4, 7, 6, 12, 19, 3,
    12, 4, 129, 138, 5, 13, 1278, 1789, 6,
];

const WEAK_LOOP_SOLUTION: &str =
    "432715968791683452856942317124568739387194625965237184673829541518476293249351876";

const WEAK_LOOP_CHANGES: &[(usize, u32, u32)] = &[(52, 1378, 378)];

#[test]
fn test_singles_chain_color_twice_in_a_unit() {
    let before = grid_from(&TWICE_IN_A_UNIT_BEFORE);
    let (changed, after) = apply(&before, |g| singles_chain(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), TWICE_IN_A_UNIT_CHANGES);
    assert_sound(&after, TWICE_IN_A_UNIT_SOLUTION);
}

#[test]
fn test_singles_chain_two_colors_elsewhere() {
    let before = grid_from(&TWO_COLORS_ELSEWHERE_BEFORE);
    let (changed, after) = apply(&before, |g| singles_chain(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), TWO_COLORS_ELSEWHERE_CHANGES);
    assert_sound(&after, TWO_COLORS_ELSEWHERE_SOLUTION);
}

#[test]
fn test_x_cycles_nice_loop() {
    let before = grid_from(&NICE_LOOP_BEFORE);
    let (changed, after) = apply(&before, |g| x_cycles(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), NICE_LOOP_CHANGES);
    assert_sound(&after, NICE_LOOP_SOLUTION);
}

#[test]
fn test_x_cycles_strong_discontinuity() {
    let before = grid_from(&STRONG_LOOP_BEFORE);
    let (changed, after) = apply(&before, |g| x_cycles(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), STRONG_LOOP_CHANGES);
    assert_sound(&after, STRONG_LOOP_SOLUTION);
}

#[test]
fn test_x_cycles_weak_discontinuity() {
    let before = grid_from(&WEAK_LOOP_BEFORE);
    let (changed, after) = apply(&before, |g| x_cycles(g, Verbosity::SILENT));
    assert!(changed);
    assert_eq!(changes(&before, &after), WEAK_LOOP_CHANGES);
    assert_sound(&after, WEAK_LOOP_SOLUTION);
}
