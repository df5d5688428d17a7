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

//! A logical Sudoku solver that uses human-like techniques.
//! This module acts as the orchestrator: it owns the difficulty tiers, the
//! strategy identifiers and the reduction driver, and delegates the pattern
//! searches to submodules.

pub mod basic;
pub mod chains;
pub mod exocet;
pub mod fish;
pub mod intersection;
pub mod loops;
pub mod medusa;
pub mod single_digit;
pub mod subsets;
pub mod wings;

use crate::cell::Cell;
use crate::config::Verbosity;
use crate::error::ParseError;
use crate::geometry::Point;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Difficulty tiers, weakest first. A puzzle's level is the tier of the
/// hardest strategy its reduction needed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    Easy,
    Standard,
    Hard,
    Expert,
    /// No strategies live here; reserved for puzzles beyond the catalogue.
    Extreme,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Easy,
        Level::Standard,
        Level::Hard,
        Level::Expert,
        Level::Extreme,
    ];

    /// The strategies of this tier, in the order the driver tries them.
    pub fn strategies(self) -> impl Iterator<Item = Strategy> {
        Strategy::ALL.into_iter().filter(move |s| s.level() == self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Easy => "Easy",
            Level::Standard => "Standard",
            Level::Hard => "Hard",
            Level::Expert => "Expert",
            Level::Extreme => "Extreme",
        })
    }
}

impl FromStr for Level {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownLevel(s.to_string()))
    }
}

/// Identifies one deduction technique.
///
/// The derived ordering is the order in which the driver tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strategy {
    NakedSingle,
    HiddenSingle,
    NakedPair,
    NakedTriple,
    NakedQuad,
    HiddenPair,
    HiddenTriple,
    HiddenQuad,
    PointingLine,
    BoxLine,
    XWing,
    YWing,
    Swordfish,
    XyzWing,
    SinglesChain,
    XCycles,
    XyChain,
    Medusa3d,
    Jellyfish,
    WxyzWing,
    SkLoop,
    Exocet,
}

impl Strategy {
    pub const ALL: [Strategy; 22] = [
        Strategy::NakedSingle,
        Strategy::HiddenSingle,
        Strategy::NakedPair,
        Strategy::NakedTriple,
        Strategy::NakedQuad,
        Strategy::HiddenPair,
        Strategy::HiddenTriple,
        Strategy::HiddenQuad,
        Strategy::PointingLine,
        Strategy::BoxLine,
        Strategy::XWing,
        Strategy::YWing,
        Strategy::Swordfish,
        Strategy::XyzWing,
        Strategy::SinglesChain,
        Strategy::XCycles,
        Strategy::XyChain,
        Strategy::Medusa3d,
        Strategy::Jellyfish,
        Strategy::WxyzWing,
        Strategy::SkLoop,
        Strategy::Exocet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::NakedSingle => "naked single",
            Strategy::HiddenSingle => "hidden single",
            Strategy::NakedPair => "naked pair",
            Strategy::NakedTriple => "naked triple",
            Strategy::NakedQuad => "naked quad",
            Strategy::HiddenPair => "hidden pair",
            Strategy::HiddenTriple => "hidden triple",
            Strategy::HiddenQuad => "hidden quad",
            Strategy::PointingLine => "pointing line",
            Strategy::BoxLine => "box line",
            Strategy::XWing => "x-wing",
            Strategy::YWing => "y-wing",
            Strategy::Swordfish => "swordfish",
            Strategy::XyzWing => "xyz-wing",
            Strategy::SinglesChain => "singles chain",
            Strategy::XCycles => "x-cycles",
            Strategy::XyChain => "xy-chain",
            Strategy::Medusa3d => "3D medusa",
            Strategy::Jellyfish => "jellyfish",
            Strategy::WxyzWing => "wxyz-wing",
            Strategy::SkLoop => "sk-loop",
            Strategy::Exocet => "exocet",
        }
    }

    pub fn level(self) -> Level {
        match self {
            Strategy::NakedSingle
            | Strategy::HiddenSingle
            | Strategy::NakedPair
            | Strategy::NakedTriple
            | Strategy::NakedQuad
            | Strategy::HiddenPair
            | Strategy::HiddenTriple
            | Strategy::HiddenQuad
            | Strategy::PointingLine
            | Strategy::BoxLine => Level::Easy,
            Strategy::XWing
            | Strategy::YWing
            | Strategy::Swordfish
            | Strategy::XyzWing
            | Strategy::SinglesChain => Level::Standard,
            Strategy::XCycles
            | Strategy::XyChain
            | Strategy::Medusa3d
            | Strategy::Jellyfish
            | Strategy::WxyzWing => Level::Hard,
            Strategy::SkLoop | Strategy::Exocet => Level::Expert,
        }
    }

    /// Runs the technique once over the whole grid. Returns true if any cell
    /// changed.
    pub fn apply(self, grid: &mut Grid, verbosity: Verbosity) -> bool {
        match self {
            Strategy::NakedSingle => basic::naked_single(grid, verbosity),
            Strategy::HiddenSingle => basic::hidden_single(grid, verbosity),
            Strategy::NakedPair => subsets::naked_pair(grid, verbosity),
            Strategy::NakedTriple => subsets::naked_triple(grid, verbosity),
            Strategy::NakedQuad => subsets::naked_quad(grid, verbosity),
            Strategy::HiddenPair => subsets::hidden_pair(grid, verbosity),
            Strategy::HiddenTriple => subsets::hidden_triple(grid, verbosity),
            Strategy::HiddenQuad => subsets::hidden_quad(grid, verbosity),
            Strategy::PointingLine => intersection::pointing_line(grid, verbosity),
            Strategy::BoxLine => intersection::box_line(grid, verbosity),
            Strategy::XWing => fish::x_wing(grid, verbosity),
            Strategy::YWing => wings::y_wing(grid, verbosity),
            Strategy::Swordfish => fish::swordfish(grid, verbosity),
            Strategy::XyzWing => wings::xyz_wing(grid, verbosity),
            Strategy::SinglesChain => single_digit::singles_chain(grid, verbosity),
            Strategy::XCycles => single_digit::x_cycles(grid, verbosity),
            Strategy::XyChain => chains::xy_chain(grid, verbosity),
            Strategy::Medusa3d => medusa::medusa_3d(grid, verbosity),
            Strategy::Jellyfish => fish::jellyfish(grid, verbosity),
            Strategy::WxyzWing => wings::wxyz_wing(grid, verbosity),
            Strategy::SkLoop => loops::sk_loop(grid, verbosity),
            Strategy::Exocet => exocet::exocet(grid, verbosity),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one reduction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    /// Hardest tier that changed the grid, `Easy` when nothing did.
    pub level: Level,
    pub solved: bool,
    /// Every strategy that fired, in driver order.
    pub strategies: BTreeSet<Strategy>,
}

/// Applies strategies tier by tier until the grid is solved or nothing
/// changes. After any change the scan restarts from the cheapest strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reducer {
    verbosity: Verbosity,
    ceiling: Level,
}

impl Default for Reducer {
    fn default() -> Self {
        Reducer {
            verbosity: Verbosity::SILENT,
            ceiling: Level::Expert,
        }
    }
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Only strategies at or below `ceiling` are tried.
    pub fn ceiling(mut self, ceiling: Level) -> Self {
        self.ceiling = ceiling;
        self
    }

    /// Reduces `grid` in place. The reported level covers this run only: a
    /// grid that already stalled reports `Easy` with no strategies when
    /// reduced again, whatever level its first reduction reached.
    pub fn reduce(&self, grid: &mut Grid) -> Reduction {
        let mut reduction = Reduction {
            level: Level::Easy,
            solved: false,
            strategies: BTreeSet::new(),
        };

        'scan: loop {
            if grid.is_solved() {
                reduction.solved = true;
                return reduction;
            }
            if grid.is_dead() {
                return reduction;
            }

            for strategy in Strategy::ALL {
                if strategy.level() > self.ceiling {
                    break;
                }
                if strategy.apply(grid, self.verbosity) {
                    reduction.level = reduction.level.max(strategy.level());
                    if reduction.strategies.insert(strategy) && self.verbosity.traces_changes() {
                        log::trace!("first use of {strategy} ({})", strategy.level());
                    }
                    continue 'scan;
                }
            }

            return reduction;
        }
    }
}

/// Reduces with every implemented tier and no tracing.
pub fn reduce(grid: &mut Grid) -> Reduction {
    Reducer::default().reduce(grid)
}

/// Lazily formats a slice as a comma separated list for trace lines.
pub(crate) struct Listed<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

// Change helpers shared by the strategies. Each traces through the grid's
// hook and returns true if the cell changed.

#[inline]
pub(crate) fn eliminate(
    grid: &mut Grid,
    p: Point,
    digits: Cell,
    strategy: Strategy,
    verbosity: Verbosity,
    reason: fmt::Arguments<'_>,
) -> bool {
    if grid.and_not(p, digits) {
        grid.log_change(
            verbosity,
            strategy,
            format_args!("removing {digits} from {p} {reason}"),
        );
        return true;
    }
    false
}

#[inline]
pub(crate) fn restrict(
    grid: &mut Grid,
    p: Point,
    digits: Cell,
    strategy: Strategy,
    verbosity: Verbosity,
    reason: fmt::Arguments<'_>,
) -> bool {
    if grid.and(p, digits) {
        grid.log_change(
            verbosity,
            strategy,
            format_args!("restricting {p} to {digits} {reason}"),
        );
        return true;
    }
    false
}

#[inline]
pub(crate) fn place(
    grid: &mut Grid,
    p: Point,
    digit: u8,
    strategy: Strategy,
    verbosity: Verbosity,
    reason: fmt::Arguments<'_>,
) -> bool {
    if grid.set_to(p, Cell::from_digit(digit)) {
        grid.log_change(
            verbosity,
            strategy,
            format_args!("setting {p} to {digit} {reason}"),
        );
        return true;
    }
    false
}
