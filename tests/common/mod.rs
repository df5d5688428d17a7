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

//! Helpers shared by the strategy tests.

#![allow(dead_code)]

use sudoku_forge::cell::Cell;
use sudoku_forge::geometry::Point;
use sudoku_forge::grid::Grid;

/// A grid from the integer-list candidate form.
pub fn grid_from(values: &[u32; 81]) -> Grid {
    Grid::decode_candidates(values).unwrap()
}

/// `(index, before, after)` for every cell that differs.
pub fn changes(before: &Grid, after: &Grid) -> Vec<(usize, u32, u32)> {
    Point::all()
        .filter(|&p| before.cell(p) != after.cell(p))
        .map(|p| {
            (
                p.index(),
                before.cell(p).to_decimal(),
                after.cell(p).to_decimal(),
            )
        })
        .collect()
}

/// Runs `strategy` on a copy of `before` and returns the copy.
pub fn apply(before: &Grid, strategy: impl Fn(&mut Grid) -> bool) -> (bool, Grid) {
    let mut grid = before.clone();
    let changed = strategy(&mut grid);
    (changed, grid)
}

/// Asserts every cell still holds its digit from `solution`.
pub fn assert_sound(grid: &Grid, solution: &str) {
    let solution = Grid::parse(solution).unwrap();
    for p in Point::all() {
        let digit = solution.cell(p).digit().unwrap();
        assert!(
            grid.cell(p).contains(digit),
            "{p} lost {digit}, its solution digit, leaving {}",
            grid.cell(p)
        );
    }
}

/// A grid of unconstrained cells with the given overrides.
pub fn grid_with(cells: &[(u8, u8, &[u8])]) -> Grid {
    let mut values = [123456789u32; 81];
    for &(row, col, digits) in cells {
        values[Point::new(row, col).index()] = digits.iter().copied().collect::<Cell>().to_decimal();
    }
    grid_from(&values)
}

/// Removes `digit` from each listed `(row, col)`.
pub fn remove(grid: &mut Grid, digit: u8, points: impl IntoIterator<Item = (u8, u8)>) {
    for (row, col) in points {
        grid.and_not(Point::new(row, col), Cell::from_digit(digit));
    }
}

/// Keeps `digit` in row `row` only at the listed columns.
pub fn confine_to_row(grid: &mut Grid, digit: u8, row: u8, cols: &[u8]) {
    remove(grid, digit, (0..9).filter(|c| !cols.contains(c)).map(|c| (row, c)));
}
