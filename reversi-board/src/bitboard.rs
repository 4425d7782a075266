//! Bit-packed sets of board squares.
//!
//! Bit `i` of a [`Bitboard`] stands for the square with row-major index `i`:
//! bit 0 is A1, bit 7 is H1, bit 8 is A2 and bit 63 is H8.

use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square of an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Every square except those on column A.
const NOT_A_FILE: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Every square except those on column H.
const NOT_H_FILE: u64 = 0x7F7F_7F7F_7F7F_7F7F;

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    pub const EMPTY: Self = Self(0);
    pub const FULL: Self = Self(u64::MAX);

    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// A bitboard with only the square at `index` set.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        Self(1 << index)
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the square at `index` is set.
    #[inline]
    pub fn contains_index(self, index: u8) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Shift every bit `distance` places toward H8, or toward A1 when
    /// `distance` is negative. Bits pushed off either end are dropped.
    /// `distance` must lie in `-63..=63`.
    #[inline]
    pub fn signed_shift(self, distance: i32) -> Self {
        if distance >= 0 {
            Self(self.0 << distance)
        } else {
            Self(self.0 >> -distance)
        }
    }

    /// Keep only the least significant set bit.
    #[inline]
    pub fn lowest_bit(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    /// Clear the least significant set bit.
    #[inline]
    pub fn without_lowest_bit(self) -> Self {
        Self(self.0 & self.0.wrapping_sub(1))
    }

    /// The set squares together with every square adjacent to one of them,
    /// in any of the eight directions.
    #[inline]
    pub fn neighbors(self) -> Self {
        let mut neighbors = self.0;
        neighbors |= neighbors >> 8;
        neighbors |= (neighbors >> 1) & NOT_H_FILE;
        neighbors |= (neighbors << 1) & NOT_A_FILE;
        neighbors |= neighbors << 8;
        Self(neighbors)
    }
}

/// Iterator for the bits in a [`Bitboard`], from A1 to H8.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    next: u8,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if usize::from(self.next) == NUM_SPACES {
            return None;
        }

        let bit = self.bitboard.contains_index(self.next);
        self.next += 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = NUM_SPACES - usize::from(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            next: 0,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_shift_both_ways() {
        let a1 = Bitboard::from_index(0);
        assert_eq!(a1.signed_shift(9), Bitboard::from_index(9));
        assert_eq!(Bitboard::from_index(63).signed_shift(-63), a1);
        assert_eq!(a1.signed_shift(-1), Bitboard::EMPTY);
        assert_eq!(Bitboard::from_index(63).signed_shift(1), Bitboard::EMPTY);
    }

    #[test]
    fn lowest_bit_walk() {
        let bits = Bitboard::new(0b1010_0100);
        assert_eq!(bits.lowest_bit(), Bitboard::new(0b100));
        assert_eq!(bits.without_lowest_bit(), Bitboard::new(0b1010_0000));
        assert_eq!(Bitboard::EMPTY.lowest_bit(), Bitboard::EMPTY);
    }

    #[test]
    fn neighbors_of_corner_and_center() {
        // A1 reaches B1, A2 and B2.
        assert_eq!(
            Bitboard::from_index(0).neighbors(),
            Bitboard::new(0b11 | 0b11 << 8)
        );
        // D4 is surrounded on all sides.
        assert_eq!(Bitboard::from_index(27).neighbors().count_occupied(), 9);
        // H1 does not wrap around to A2.
        assert!(!Bitboard::from_index(7).neighbors().contains_index(8));
    }

    #[test]
    fn counts() {
        assert_eq!(Bitboard::FULL.count_occupied(), 64);
        assert_eq!(Bitboard::EMPTY.count_empty(), 64);
        assert_eq!(Bitboard::new(0xF0).count_occupied(), 4);
    }

    #[test]
    fn display_grid() {
        let rendered = Bitboard::from_index(0).to_string();
        assert!(rendered.starts_with("   A B C D E F G H\n 1 # . "));
        assert_eq!(rendered.matches('#').count(), 1);
    }
}
