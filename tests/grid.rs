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

use rand::SeedableRng;
use rand::rngs::StdRng;
use sudoku_forge::cell::Cell;
use sudoku_forge::config::Verbosity;
use sudoku_forge::error::ParseError;
use sudoku_forge::geometry::{Point, all_units};
use sudoku_forge::grid::Grid;
use sudoku_forge::logical_solver::basic::naked_single;

const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const SOLUTION: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

#[test]
fn test_parse_marks_givens() {
    let grid = Grid::parse(PUZZLE).unwrap();
    assert_eq!(grid.givens(), 30);
    assert!(grid.is_given(Point::new(0, 0)));
    assert_eq!(grid.cell(Point::new(0, 0)), Cell::from_digit(5));
    assert!(!grid.is_given(Point::new(0, 2)));
    assert_eq!(grid[Point::new(0, 2)], Cell::ALL);
    assert_eq!(grid.encode(), PUZZLE, "A parsed puzzle encodes back to its text.");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Grid::parse("123"),
        Err(ParseError::Length { found: 3 }),
    );
    let mut text = PUZZLE.to_string();
    text.replace_range(4..5, "x");
    assert_eq!(
        Grid::parse(&text),
        Err(ParseError::IllegalCharacter {
            character: 'x',
            index: 4
        })
    );
    assert_eq!(
        "0".repeat(81).parse::<Grid>().unwrap_err().to_string(),
        "illegal character '0' at position 0 in encoded puzzle"
    );
}

#[test]
fn test_candidate_form_round_trip() {
    let mut values = [123456789u32; 81];
    values[0] = 5;
    values[10] = 158;
    values[80] = 0;
    let grid = Grid::decode_candidates(&values).unwrap();
    assert_eq!(grid.encode_candidates(), values.to_vec());
    assert_eq!(grid.givens(), 0, "The integer form carries no givens.");
    assert!(grid.has_empty_cell());

    assert_eq!(
        Grid::decode_candidates(&values[..80]),
        Err(ParseError::CandidateCount { found: 80 })
    );
    values[3] = 921;
    assert_eq!(
        Grid::decode_candidates(&values),
        Err(ParseError::IllegalCandidates {
            value: 921,
            index: 3
        })
    );
}

#[test]
fn test_givens_are_immutable() {
    let mut grid = Grid::parse(PUZZLE).unwrap();
    let p = Point::new(0, 0);
    assert!(!grid.and_not(p, Cell::from_digit(5)));
    assert!(!grid.set_to(p, Cell::from_digit(1)));
    assert!(!grid.and(p, Cell::from_digit(1)));
    assert_eq!(grid.cell(p), Cell::from_digit(5));

    let q = Point::new(0, 2);
    assert!(grid.and_not(q, Cell::from_digit(5)));
    assert!(!grid.and_not(q, Cell::from_digit(5)));
}

/// A wrong search guess can make a strategy try to strip a given of its own
/// digit. The given holds and the branch ends up dead instead.
#[test]
fn test_contradicting_guess_leaves_givens_alone() {
    let mut grid = Grid::parse(PUZZLE).unwrap();
    // The guess comes before the given in row 0, so it is scanned first.
    let given = Point::new(0, 4);
    let guess = Point::new(0, 2);
    assert!(grid.set_to(guess, Cell::from_digit(7)));

    assert!(naked_single(&mut grid, Verbosity::SILENT));
    assert_eq!(grid.cell(given), Cell::from_digit(7), "The given must keep its digit.");
    assert!(grid.cell(guess).is_empty(), "The guess loses its only candidate.");
    assert!(grid.is_dead());
}

#[test]
fn test_solved_and_valid() {
    let solved = Grid::parse(SOLUTION).unwrap();
    assert!(solved.is_solved());
    assert!(solved.is_valid());
    assert!(!solved.is_dead());

    let puzzle = Grid::parse(PUZZLE).unwrap();
    assert!(!puzzle.is_solved());
    assert!(puzzle.is_valid());

    let mut clash = PUZZLE.to_string();
    clash.replace_range(2..3, "5");
    assert!(!Grid::parse(&clash).unwrap().is_valid(), "Two 5s in row 0.");
}

#[test]
fn test_dead_when_a_digit_loses_every_place() {
    let mut grid = Grid::empty();
    for &p in &all_units()[18].points {
        grid.and_not(p, Cell::from_digit(7));
    }
    assert!(!grid.has_empty_cell());
    assert!(grid.is_dead(), "Row 0 has nowhere left for 7.");
}

#[test]
fn test_min_point_picks_fewest_candidates() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::empty();
    grid.and(Point::new(2, 3), [4, 6].into_iter().collect());
    grid.and(Point::new(6, 1), [1, 2, 3].into_iter().collect());
    assert_eq!(grid.min_point(&mut rng), Some(Point::new(2, 3)));

    let solved = Grid::parse(SOLUTION).unwrap();
    assert_eq!(solved.min_point(&mut rng), None);
}

#[test]
fn test_randomize_seed_fills_one_unit() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::randomize_seed(&mut rng);
    let solved: Vec<Point> = Point::all().filter(|&p| grid.cell(p).is_solved()).collect();
    assert_eq!(solved.len(), 9);
    assert!(
        all_units()
            .iter()
            .any(|u| u.points.iter().all(|p| solved.contains(p))),
        "The solved cells must form one unit."
    );
    let digits: Cell = solved.iter().map(|&p| grid.cell(p).lowest_digit()).collect();
    assert_eq!(digits, Cell::ALL);
    assert_eq!(grid.givens(), 0);
}

#[test]
fn test_display_frames_candidates() {
    let grid = Grid::parse(PUZZLE).unwrap();
    let text = grid.to_string();
    assert_eq!(text.lines().count(), 13, "Nine rows plus four rules.");
    assert!(text.starts_with("+-"));
    assert!(text.lines().nth(1).unwrap().starts_with("| 5"));
}
