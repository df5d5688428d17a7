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

//! Candidate bitsets.
//!
//! Digit `d` lives at bit `d`, so bits 1 through 9 are meaningful and bit 0 is
//! always clear. Every mutating operation reports whether the value changed,
//! which is how strategies signal progress to the reduction driver.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};

/// Bitmask with every digit 1-9 set.
pub const ALL_DIGITS: u16 = 0b11_1111_1110;

lazy_static::lazy_static! {
    /// Population count for every 10-bit value.
    static ref POPCOUNT: [u8; 1024] = {
        let mut table = [0u8; 1024];
        for i in 1..1024 {
            table[i] = (i & 1) as u8 + table[i >> 1];
        }
        table
    };
}

/// The set of candidate digits still possible for one square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Cell(u16);

impl Cell {
    /// No candidates left; a contradiction.
    pub const EMPTY: Cell = Cell(0);
    /// Every digit is still possible.
    pub const ALL: Cell = Cell(ALL_DIGITS);

    /// Builds a cell from raw bits, dropping anything outside bits 1-9.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Cell(bits & ALL_DIGITS)
    }

    /// A singleton holding `digit` (1-9).
    #[inline]
    pub const fn from_digit(digit: u8) -> Self {
        Cell((1 << digit) & ALL_DIGITS)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Number of candidates, read from the precomputed table.
    #[inline]
    pub fn count(self) -> usize {
        POPCOUNT[self.0 as usize] as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when exactly one candidate remains.
    #[inline]
    pub fn is_solved(self) -> bool {
        self.count() == 1
    }

    #[inline]
    pub const fn contains(self, digit: u8) -> bool {
        digit >= 1 && digit <= 9 && self.0 & (1 << digit) != 0
    }

    /// True when every candidate of `other` is also a candidate here.
    #[inline]
    pub const fn contains_all(self, other: Cell) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Cell) -> bool {
        self.0 & other.0 != 0
    }

    /// The digit of a solved cell.
    #[inline]
    pub fn digit(self) -> Option<u8> {
        if self.is_solved() {
            Some(self.lowest_digit())
        } else {
            None
        }
    }

    /// The smallest candidate, or 0 when the cell is empty.
    #[inline]
    pub const fn lowest_digit(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            self.0.trailing_zeros() as u8
        }
    }

    /// Ascending candidate digits.
    #[inline]
    pub const fn digits(self) -> Digits {
        Digits(self.0)
    }

    /// Intersects with `mask`, returning true if the cell changed.
    #[inline]
    pub fn and(&mut self, mask: Cell) -> bool {
        let next = self.0 & mask.0;
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    /// Removes every candidate in `mask`, returning true if the cell changed.
    #[inline]
    pub fn and_not(&mut self, mask: Cell) -> bool {
        let next = self.0 & !mask.0;
        let changed = next != self.0;
        self.0 = next;
        changed
    }

    /// Replaces the candidates outright, returning true if the cell changed.
    #[inline]
    pub fn set_to(&mut self, mask: Cell) -> bool {
        let changed = mask.0 != self.0;
        self.0 = mask.0;
        changed
    }

    /// The integer-list encoding: candidate digits concatenated in ascending
    /// order, `158` for {1, 5, 8}. An empty cell encodes as 0.
    pub fn to_decimal(self) -> u32 {
        self.digits().fold(0, |acc, d| acc * 10 + d as u32)
    }

    /// Inverse of [`Cell::to_decimal`]. Digits must be strictly ascending and
    /// within 1-9.
    pub fn from_decimal(mut value: u32) -> Option<Self> {
        let mut bits = 0u16;
        let mut previous = 10u32;
        while value != 0 {
            let digit = value % 10;
            if digit == 0 || digit >= previous {
                return None;
            }
            bits |= 1 << digit;
            previous = digit;
            value /= 10;
        }
        Some(Cell(bits))
    }
}

impl BitOr for Cell {
    type Output = Cell;

    #[inline]
    fn bitor(self, rhs: Cell) -> Cell {
        Cell(self.0 | rhs.0)
    }
}

impl BitOrAssign for Cell {
    #[inline]
    fn bitor_assign(&mut self, rhs: Cell) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Cell {
    type Output = Cell;

    #[inline]
    fn bitand(self, rhs: Cell) -> Cell {
        Cell(self.0 & rhs.0)
    }
}

/// Set difference.
impl Sub for Cell {
    type Output = Cell;

    #[inline]
    fn sub(self, rhs: Cell) -> Cell {
        Cell(self.0 & !rhs.0)
    }
}

impl FromIterator<u8> for Cell {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Cell::EMPTY, |acc, d| acc | Cell::from_digit(d))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({self})")
    }
}

/// Iterator over the digits of a [`Cell`], smallest first.
#[derive(Clone, Debug)]
pub struct Digits(u16);

impl Iterator for Digits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let digit = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Digits {}
