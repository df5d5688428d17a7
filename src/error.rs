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

use thiserror::Error;

/// Errors raised while decoding a puzzle from one of its encodings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("encoded puzzle must contain 81 characters, found {found}")]
    Length { found: usize },
    #[error("illegal character '{character}' at position {index} in encoded puzzle")]
    IllegalCharacter { character: char, index: usize },
    #[error("candidate list must contain 81 cells, found {found}")]
    CandidateCount { found: usize },
    #[error("illegal candidate value {value} at position {index}")]
    IllegalCandidates { value: u32, index: usize },
    #[error("unknown difficulty level '{0}'")]
    UnknownLevel(String),
}

/// Errors raised by the top-level solve entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("puzzle repeats a given digit within a unit")]
    InvalidPuzzle,
}
