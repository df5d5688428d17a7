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

//! Fixed board geometry: points, the 27 units and per-point visibility.
//! Everything here is computed once and read-only afterwards.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A square on the board, row and column in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }

    /// Row-major index in `0..81`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Point {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    #[inline]
    pub const fn box_index(self) -> usize {
        (self.row as usize / 3) * 3 + self.col as usize / 3
    }

    /// True when `other` is a different square sharing a box, column or row.
    #[inline]
    pub fn sees(self, other: Point) -> bool {
        VISIBILITY[self.index()].contains(other)
    }

    /// All 81 points in row-major order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..81).map(Point::from_index)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which family a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitKind {
    Box,
    Col,
    Row,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnitKind::Box => "box",
            UnitKind::Col => "col",
            UnitKind::Row => "row",
        })
    }
}

/// Nine points that must hold each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    /// Index within its kind, `0..9`.
    pub index: usize,
    pub points: [Point; 9],
}

impl Unit {
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        match self.kind {
            UnitKind::Box => p.box_index() == self.index,
            UnitKind::Col => p.col as usize == self.index,
            UnitKind::Row => p.row as usize == self.index,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// A set of points backed by an 81-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointSet(u128);

impl PointSet {
    pub const EMPTY: PointSet = PointSet(0);

    #[inline]
    pub fn insert(&mut self, p: Point) {
        self.0 |= 1 << p.index();
    }

    #[inline]
    pub fn remove(&mut self, p: Point) {
        self.0 &= !(1 << p.index());
    }

    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        self.0 & (1 << p.index()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(Point::from_index(index))
        })
    }
}

impl BitAnd for PointSet {
    type Output = PointSet;

    #[inline]
    fn bitand(self, rhs: PointSet) -> PointSet {
        PointSet(self.0 & rhs.0)
    }
}

impl BitOr for PointSet {
    type Output = PointSet;

    #[inline]
    fn bitor(self, rhs: PointSet) -> PointSet {
        PointSet(self.0 | rhs.0)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::EMPTY;
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// Unit order is boxes, then columns, then rows.
lazy_static::lazy_static! {
    static ref UNITS: [Unit; 27] = std::array::from_fn(|i| {
        let index = i % 9;
        let (kind, points) = match i / 9 {
            0 => (
                UnitKind::Box,
                std::array::from_fn(|j| {
                    Point::new((index / 3 * 3 + j / 3) as u8, (index % 3 * 3 + j % 3) as u8)
                }),
            ),
            1 => (
                UnitKind::Col,
                std::array::from_fn(|j| Point::new(j as u8, index as u8)),
            ),
            _ => (
                UnitKind::Row,
                std::array::from_fn(|j| Point::new(index as u8, j as u8)),
            ),
        };
        Unit { kind, index, points }
    });
    /// Box, column and row unit of every point, as indexes into `UNITS`.
    static ref UNITS_OF: [[usize; 3]; 81] = std::array::from_fn(|i| {
        let p = Point::from_index(i);
        [p.box_index(), 9 + p.col as usize, 18 + p.row as usize]
    });
    /// The up to 20 other points sharing a unit with each point.
    static ref VISIBILITY: [PointSet; 81] = std::array::from_fn(|i| {
        let p = Point::from_index(i);
        let mut seen = PointSet::EMPTY;
        for &u in &UNITS_OF[i] {
            for &q in &UNITS[u].points {
                seen.insert(q);
            }
        }
        seen.remove(p);
        seen
    });
}

/// All 27 units: boxes, columns, rows.
#[inline]
pub fn all_units() -> &'static [Unit] {
    &UNITS[..]
}

/// The nine units of one kind.
#[inline]
pub fn units(kind: UnitKind) -> &'static [Unit] {
    let start = match kind {
        UnitKind::Box => 0,
        UnitKind::Col => 9,
        UnitKind::Row => 18,
    };
    &UNITS[start..start + 9]
}

#[inline]
pub fn unit(kind: UnitKind, index: usize) -> &'static Unit {
    &units(kind)[index]
}

/// The box, column and row containing `p`, in that order.
#[inline]
pub fn units_of(p: Point) -> [&'static Unit; 3] {
    let [b, c, r] = UNITS_OF[p.index()];
    [&UNITS[b], &UNITS[c], &UNITS[r]]
}

/// Every other point sharing a unit with `p`.
#[inline]
pub fn visibility(p: Point) -> PointSet {
    VISIBILITY[p.index()]
}

/// Units holding both `a` and `b`.
pub fn shared_units(a: Point, b: Point) -> impl Iterator<Item = &'static Unit> {
    units_of(a).into_iter().filter(move |u| u.contains(b))
}
