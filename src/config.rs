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

//! Caller-supplied knobs for tracing and generation.

use crate::logical_solver::Level;
use serde::{Deserialize, Serialize};

/// How much the change-tracing hook emits.
///
/// `0` is silent, `1` logs one line per changed cell and `2` also dumps the
/// whole candidate grid after every change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Verbosity(pub u8);

impl Verbosity {
    pub const SILENT: Verbosity = Verbosity(0);
    pub const CHANGES: Verbosity = Verbosity(1);
    pub const GRIDS: Verbosity = Verbosity(2);

    #[inline]
    pub fn traces_changes(self) -> bool {
        self >= Verbosity::CHANGES
    }

    #[inline]
    pub fn dumps_grids(self) -> bool {
        self >= Verbosity::GRIDS
    }
}

/// Settings for [`crate::generate::Generator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Full solution-and-minimize rounds tried before giving up on a level.
    pub max_attempts: u32,
    /// Fixed seed for reproducible output; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub verbosity: Verbosity,
    /// Highest tier the reduction inside the search oracle may use.
    pub search_ceiling: Level,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_attempts: 10,
            seed: None,
            verbosity: Verbosity::SILENT,
            search_ceiling: Level::Expert,
        }
    }
}
