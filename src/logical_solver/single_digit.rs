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

//! Single-digit chaining: simple coloring over conjugate pairs and
//! alternating x-cycles.

use super::{Listed, Strategy, eliminate, place};
use crate::cell::Cell;
use crate::config::Verbosity;
use crate::geometry::{Point, PointSet, all_units, visibility};
use crate::grid::Grid;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Longest cycle the x-cycle search will consider, in links.
const MAX_LINKS: usize = 12;
/// Depth-first expansions allowed per start cell.
const SEARCH_BUDGET: usize = 4000;

/// Cells linked when they are the only two unsolved places for `digit` in
/// some unit. Neighbours are sorted.
fn conjugate_pairs(grid: &Grid, digit: u8) -> BTreeMap<Point, Vec<Point>> {
    let mut links: BTreeMap<Point, Vec<Point>> = BTreeMap::new();
    for unit in all_units() {
        let places = &grid.digit_positions(unit)[digit as usize];
        let &[a, b] = places.as_slice() else {
            continue;
        };
        if grid.cell(a).count() < 2 || grid.cell(b).count() < 2 {
            continue;
        }
        for (from, to) in [(a, b), (b, a)] {
            let neighbours = links.entry(from).or_default();
            if !neighbours.contains(&to) {
                neighbours.push(to);
            }
        }
    }
    for neighbours in links.values_mut() {
        neighbours.sort_unstable();
    }
    links
}

/// Splits a link graph into connected components and two-colors each one
/// breadth first, starting every component from its smallest node with
/// color 0.
pub(super) fn two_color<N: Ord + Copy>(links: &BTreeMap<N, Vec<N>>) -> Vec<BTreeMap<N, u8>> {
    let mut components = Vec::new();
    let mut seen = BTreeSet::new();
    for &start in links.keys() {
        if seen.contains(&start) {
            continue;
        }
        let mut colors = BTreeMap::from([(start, 0u8)]);
        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(node) = queue.pop_front() {
            let color = colors[&node];
            for &next in links.get(&node).into_iter().flatten() {
                if colors.contains_key(&next) {
                    continue;
                }
                colors.insert(next, 1 - color);
                seen.insert(next);
                queue.push_back(next);
            }
        }
        components.push(colors);
    }
    components
}

// --- Singles Chains ---

/// Simple coloring. Within one conjugate component exactly one color holds
/// the digit: a color seeing itself is false, and any cell outside the chain
/// seeing both colors cannot hold the digit.
pub fn singles_chain(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for digit in 1..=9u8 {
        let mask = Cell::from_digit(digit);
        for colors in two_color(&conjugate_pairs(grid, digit)) {
            let groups: [Vec<Point>; 2] = [0, 1].map(|c| {
                colors
                    .iter()
                    .filter(|&(_, &color)| color == c)
                    .map(|(&p, _)| p)
                    .collect()
            });

            let false_color = (0..2).find(|&c| {
                groups[c]
                    .iter()
                    .tuple_combinations()
                    .any(|(a, b)| a.sees(*b))
            });
            if let Some(c) = false_color {
                for &p in &groups[c] {
                    if eliminate(
                        grid,
                        p,
                        mask,
                        Strategy::SinglesChain,
                        verbosity,
                        format_args!("because its color appears twice in a unit"),
                    ) {
                        changed = true;
                    }
                }
            }

            for p in Point::all() {
                let cell = grid.cell(p);
                if colors.contains_key(&p) || cell.count() < 2 || !cell.contains(digit) {
                    continue;
                }
                let sees_both = groups
                    .iter()
                    .all(|group| group.iter().any(|&q| p.sees(q)));
                if sees_both
                    && eliminate(
                        grid,
                        p,
                        mask,
                        Strategy::SinglesChain,
                        verbosity,
                        format_args!("because it sees both colors of {digit}"),
                    )
                {
                    changed = true;
                }
            }
        }
    }
    changed
}

// --- X-Cycles ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Strong,
    Weak,
}

impl Link {
    fn flip(self) -> Link {
        match self {
            Link::Strong => Link::Weak,
            Link::Weak => Link::Strong,
        }
    }
}

/// Strong and weak links between the unsolved cells holding one digit.
struct LinkGraph {
    nodes: Vec<Point>,
    strong: [PointSet; 81],
    weak: [PointSet; 81],
}

impl LinkGraph {
    fn new(grid: &Grid, digit: u8) -> Self {
        let nodes: Vec<Point> = grid
            .unsolved_points()
            .filter(|&p| grid.cell(p).contains(digit))
            .collect();
        let node_set: PointSet = nodes.iter().copied().collect();

        let mut strong = [PointSet::EMPTY; 81];
        for (&p, partners) in &conjugate_pairs(grid, digit) {
            strong[p.index()] = partners.iter().copied().collect();
        }
        let mut weak = [PointSet::EMPTY; 81];
        for &p in &nodes {
            weak[p.index()] = visibility(p) & node_set;
        }
        LinkGraph {
            nodes,
            strong,
            weak,
        }
    }

    fn neighbours(&self, p: Point, link: Link) -> PointSet {
        match link {
            Link::Strong => self.strong[p.index()],
            Link::Weak => self.weak[p.index()],
        }
    }
}

/// A closed alternating chain. `links[k]` joins `cells[k]` to
/// `cells[(k + 1) % len]`.
#[derive(Debug, Clone)]
struct Cycle {
    cells: Vec<Point>,
    links: Vec<Link>,
}

/// Depth-first search for the longest alternating cycle through `start`.
struct CycleSearch<'a> {
    graph: &'a LinkGraph,
    start: Point,
    /// Closing is allowed after an even (0) or odd (1) number of links.
    parity: usize,
    path: Vec<Point>,
    on_path: PointSet,
    links: Vec<Link>,
    steps: usize,
    best: Option<Cycle>,
}

impl CycleSearch<'_> {
    fn extend(&mut self, next: Link) {
        if self.steps > SEARCH_BUDGET {
            return;
        }
        self.steps += 1;

        let Some(&current) = self.path.last() else {
            return;
        };
        let n = self.links.len();
        if n >= 2
            && n % 2 == self.parity
            && self.graph.neighbours(current, next).contains(self.start)
            && self.best.as_ref().is_none_or(|best| n + 1 > best.links.len())
        {
            let mut links = self.links.clone();
            links.push(next);
            self.best = Some(Cycle {
                cells: self.path.clone(),
                links,
            });
        }
        if n + 1 >= MAX_LINKS {
            return;
        }

        for candidate in self.graph.neighbours(current, next).iter() {
            if self.on_path.contains(candidate) {
                continue;
            }
            self.path.push(candidate);
            self.on_path.insert(candidate);
            self.links.push(next);
            self.extend(next.flip());
            self.links.pop();
            self.on_path.remove(candidate);
            self.path.pop();
        }
    }
}

/// The longest cycle for `digit` whose first link is `first`, closing after
/// a path length of the given parity. Start cells are tried in index order;
/// the first longest cycle wins.
fn find_cycle(grid: &Grid, digit: u8, first: Link, parity: usize) -> Option<Cycle> {
    let graph = LinkGraph::new(grid, digit);
    let mut best: Option<Cycle> = None;
    for &start in &graph.nodes {
        let mut search = CycleSearch {
            graph: &graph,
            start,
            parity,
            path: vec![start],
            on_path: PointSet::from_iter([start]),
            links: Vec::new(),
            steps: 0,
            best: best.take(),
        };
        search.extend(first);
        best = search.best;
    }
    best
}

/// Alternating cycles of strong and weak links on one digit.
///
/// A continuous (nice) loop turns every weak link into a conjugate pair,
/// clearing the digit from cells seeing both ends. A discontinuity of two
/// strong links fixes the digit at the start cell, and one of two weak links
/// removes it there.
pub fn x_cycles(grid: &mut Grid, verbosity: Verbosity) -> bool {
    let mut changed = false;
    for digit in 1..=9u8 {
        let Some(cycle) = find_cycle(grid, digit, Link::Strong, 1) else {
            continue;
        };
        let on_cycle: PointSet = cycle.cells.iter().copied().collect();
        let len = cycle.cells.len();
        for (k, &link) in cycle.links.iter().enumerate() {
            if link != Link::Weak {
                continue;
            }
            let (a, b) = (cycle.cells[k], cycle.cells[(k + 1) % len]);
            for p in (visibility(a) & visibility(b)).iter() {
                if on_cycle.contains(p) {
                    continue;
                }
                if eliminate(
                    grid,
                    p,
                    Cell::from_digit(digit),
                    Strategy::XCycles,
                    verbosity,
                    format_args!("because of the nice loop {}", Listed(&cycle.cells)),
                ) {
                    changed = true;
                }
            }
        }
    }
    if changed {
        return true;
    }

    for digit in 1..=9u8 {
        let Some(cycle) = find_cycle(grid, digit, Link::Strong, 0) else {
            continue;
        };
        if place(
            grid,
            cycle.cells[0],
            digit,
            Strategy::XCycles,
            verbosity,
            format_args!("because of the strong discontinuity in {}", Listed(&cycle.cells)),
        ) {
            changed = true;
        }
    }
    if changed {
        return true;
    }

    for digit in 1..=9u8 {
        let Some(cycle) = find_cycle(grid, digit, Link::Weak, 0) else {
            continue;
        };
        if eliminate(
            grid,
            cycle.cells[0],
            Cell::from_digit(digit),
            Strategy::XCycles,
            verbosity,
            format_args!("because of the weak discontinuity in {}", Listed(&cycle.cells)),
        ) {
            changed = true;
        }
    }
    changed
}
