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

//! A 9×9 Sudoku engine: candidate bitsets, a catalogue of human-style
//! deduction strategies in difficulty tiers, a randomized backtracking
//! search and a generator that carves rated puzzles with a unique solution.
//!
//! The same library serves native callers and, through the functions at the
//! bottom of this file, a WebAssembly host.

pub mod cell;
pub mod config;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod grid;
pub mod logical_solver;
pub mod solver;

use config::{GeneratorConfig, Verbosity};
use generate::Generator;
use grid::Grid;
use logical_solver::Level;
use std::fmt;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Solves an 81-character puzzle and returns the `Solution` as a JS object.
#[wasm_bindgen]
pub fn solve_sudoku(text: &str) -> Result<JsValue, JsValue> {
    let solution = solver::solve(text, Verbosity::SILENT).map_err(js_error)?;
    Ok(serde_wasm_bindgen::to_value(&solution)?)
}

/// Generates a puzzle at `level` ("easy" through "expert"). `config` may be
/// `undefined` or a partial `GeneratorConfig`. Returns `null` when the
/// attempt budget runs out.
#[wasm_bindgen]
pub fn generate_sudoku(level: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let level: Level = level.parse().map_err(js_error)?;
    let config: GeneratorConfig = if config.is_undefined() || config.is_null() {
        GeneratorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };

    match Generator::new(config).generate(level) {
        Some(game) => Ok(serde_wasm_bindgen::to_value(&game)?),
        None => Ok(JsValue::NULL),
    }
}

/// True when no unit of the puzzle repeats a clue.
#[wasm_bindgen]
pub fn validate_sudoku(text: &str) -> Result<bool, JsValue> {
    let grid = Grid::parse(text).map_err(js_error)?;
    Ok(grid.is_valid())
}

fn js_error(err: impl fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}
