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

use crate::config::GeneratorConfig;
use crate::geometry::Point;
use crate::grid::Grid;
use crate::logical_solver::{Level, Reducer, Strategy};
use crate::solver::Searcher;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A generated puzzle together with its rating and unique solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub level: Level,
    /// Number of givens in `puzzle`.
    pub clues: usize,
    /// Strategies the rating reduction needed, in driver order.
    pub strategies: Vec<Strategy>,
    pub puzzle: Grid,
    pub solution: Grid,
}

/// Builds puzzles rated at a requested level.
///
/// Each attempt draws a random full solution, carves it down to a locally
/// minimal set of clues that still has a unique solution, then rates the
/// result with the full strategy catalogue. Only an exact level match is
/// accepted.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
    searcher: Searcher,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let searcher = Searcher::new(Reducer::new().ceiling(config.search_ceiling));
        Generator {
            config,
            rng,
            searcher,
        }
    }

    /// A reproducible generator with otherwise default settings.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
    }

    /// Generates a puzzle at exactly `level`, or `None` once the attempt
    /// budget is spent.
    pub fn generate(&mut self, level: Level) -> Option<Game> {
        if level.strategies().next().is_none() {
            log::warn!("no strategy rates a puzzle {level}, not generating");
            return None;
        }

        let rater = Reducer::new().verbosity(self.config.verbosity);
        for attempt in 1..=self.config.max_attempts {
            let Some(solution) = self.random_solution() else {
                log::warn!("attempt {attempt}: no solution grid found");
                continue;
            };
            let puzzle = self.minimize(&solution);

            let mut rated = puzzle.clone();
            let reduction = rater.reduce(&mut rated);
            log::debug!(
                "attempt {attempt}: {} clues rated {} ({})",
                puzzle.givens(),
                reduction.level,
                if reduction.solved { "solved" } else { "stalled" }
            );
            if !reduction.solved || reduction.level != level {
                continue;
            }
            if self.searcher.count_solutions(&puzzle, &mut self.rng) != 1 {
                log::warn!("attempt {attempt}: minimized puzzle is not unique");
                continue;
            }

            log::info!(
                "generated a {level} puzzle with {} clues after {attempt} attempt(s)",
                puzzle.givens()
            );
            return Some(Game {
                level,
                clues: puzzle.givens(),
                strategies: reduction.strategies.into_iter().collect(),
                puzzle,
                solution,
            });
        }

        log::warn!(
            "gave up on a {level} puzzle after {} attempts",
            self.config.max_attempts
        );
        None
    }

    /// A random complete grid: a shuffled unit seeds the search, which then
    /// fills in the rest. Retries with fresh seeds within the attempt budget.
    pub fn random_solution(&mut self) -> Option<Grid> {
        for attempt in 1..=self.config.max_attempts.max(1) {
            let seed = Grid::randomize_seed(&mut self.rng);
            if let Some(solution) = self.searcher.search(&seed, &mut self.rng).into_iter().next() {
                return Some(solution);
            }
            log::debug!("seed grid {attempt} has no solution");
        }
        None
    }

    /// Removes clues from `solution` in random order, keeping each removal
    /// only while the puzzle stays uniquely solvable. The result is minimal
    /// for that order, not globally.
    pub fn minimize(&mut self, solution: &Grid) -> Grid {
        let mut puzzle = solution.clone();
        puzzle.freeze_solved();

        let mut points: Vec<Point> = Point::all().collect();
        points.shuffle(&mut self.rng);
        for p in points {
            let mut candidate = puzzle.clone();
            candidate.clear(p);
            if self.searcher.count_solutions(&candidate, &mut self.rng) == 1 {
                puzzle = candidate;
            }
        }
        puzzle
    }
}
