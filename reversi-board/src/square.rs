//! Code for working with [`Square`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A square on the Othello board, identified by its row-major index:
/// A1 is 0, H1 is 7, A2 is 8 and H8 is 63.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Square(u8);

/// A set of squares on the Othello board, which can be iterated to retrieve them
/// in ascending index order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, From, Into)]
pub struct SquareSet(Bitboard);

impl Square {
    /// Convert from a row-major square index.
    /// Returns None if `index` is not below 64.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        if usize::from(index) < NUM_SPACES {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Convert from zero-based row and column coordinates.
    /// Returns None if the coordinates provided are not valid.
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        let edge = EDGE_LENGTH as u8;
        if row >= edge || col >= edge {
            None
        } else {
            Some(Self(row * edge + col))
        }
    }

    /// Iterate over every square, from A1 to H8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SPACES as u8).map(Self)
    }

    /// The row-major square index.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Zero-based row: 0 for row 1, 7 for row 8.
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / EDGE_LENGTH as u8
    }

    /// Zero-based column: 0 for column A, 7 for column H.
    #[inline]
    pub fn column(self) -> u8 {
        self.0 % EDGE_LENGTH as u8
    }

    /// A one-hot bitboard for this square.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        Bitboard::from_index(self.0)
    }
}

/// Convert this [`Square`] into string notation ("A4").
impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row().into()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.column().into()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, derive_more::Display, derive_more::Error, Eq, PartialEq)]
#[display(fmt = "invalid square string")]
pub struct ParseSquareError;

/// Build a [`Square`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseSquareError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseSquareError)? as u8;
        let row = chars
            .next()
            .ok_or(ParseSquareError)?
            .to_digit(10)
            .ok_or(ParseSquareError)? as u8;

        if row == 0 || chars.next().is_some() {
            return Err(ParseSquareError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseSquareError)
    }
}

impl SquareSet {
    pub const EMPTY: Self = Self(Bitboard::EMPTY);

    /// Returns whether `square` is in this set.
    #[inline]
    pub fn contains(self, square: Square) -> bool {
        !(square.bitboard() & self.0).is_empty()
    }

    /// Returns whether the set has no squares.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether every square of `self` is also in `other`.
    #[inline]
    pub fn is_subset(self, other: SquareSet) -> bool {
        (self.0 & !other.0).is_empty()
    }

    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            return None;
        }

        let lowest: u64 = self.0.lowest_bit().into();
        self.0 = self.0.without_lowest_bit();

        Some(Square(lowest.trailing_zeros() as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SquareSet {}

impl std::iter::FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .fold(Bitboard::EMPTY, |bits, square| bits | square.bitboard()),
        )
    }
}

impl Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|square| square.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn square_from_index() {
        assert_eq!(Square::from_index(0), Some(Square(0)));
        assert_eq!(Square::from_index(63), Some(Square(63)));
        assert_eq!(Square::from_index(64), None);
    }

    #[test]
    fn square_from_coords() {
        assert_eq!(Square::from_coords(0, 0), Some(Square(0)));
        assert_eq!(Square::from_coords(0, 7), Some(Square(7)));
        assert_eq!(Square::from_coords(7, 7), Some(Square(63)));
        assert_eq!(Square::from_coords(0, 8), None);
        assert_eq!(Square::from_coords(8, 0), None);
    }

    #[test]
    fn square_row_and_column() {
        let square = Square(27);
        assert_eq!((square.row(), square.column()), (3, 3));
        assert_eq!(Square(63).bitboard(), Bitboard::new(1 << 63));
    }

    #[test]
    fn square_from_str_success() {
        assert_eq!(Square::from_str("A1"), Ok(Square(0)));
        assert_eq!(Square::from_str("h8"), Ok(Square(63)));
        assert_eq!(Square::from_str("D3"), Square::from_coords(2, 3).ok_or(ParseSquareError));
    }

    #[test]
    fn square_from_str_fail() {
        assert_eq!(Square::from_str(""), Err(ParseSquareError));
        assert_eq!(Square::from_str("A12"), Err(ParseSquareError));
        assert_eq!(Square::from_str("AA"), Err(ParseSquareError));
        assert_eq!(Square::from_str("A0"), Err(ParseSquareError));
        assert_eq!(Square::from_str("A9"), Err(ParseSquareError));
        assert_eq!(Square::from_str("I5"), Err(ParseSquareError));
    }

    #[test]
    fn parse_error_is_a_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(ParseSquareError);
        assert_eq!(error.to_string(), "invalid square string");
        assert!(error.source().is_none());
    }

    #[test]
    fn square_to_str() {
        assert_eq!(Square(0).to_string(), "A1");
        assert_eq!(Square(63).to_string(), "H8");
        assert_eq!(Square::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Square::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn square_set_iterates_in_index_order() {
        let set: SquareSet = [Square(44), Square(19), Square(37), Square(26)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 4);
        assert_eq!(
            set.collect::<Vec<_>>(),
            vec![Square(19), Square(26), Square(37), Square(44)]
        );
        assert_eq!(set.to_string(), "[D3, C4, F5, E6]");
        assert!(set.contains(Square(26)));
        assert!(!set.contains(Square(27)));
    }

    #[test]
    fn square_set_subset() {
        let small: SquareSet = [Square(1)].into_iter().collect();
        let large: SquareSet = [Square(1), Square(2)].into_iter().collect();
        assert!(small.is_subset(large));
        assert!(!large.is_subset(small));
        assert!(SquareSet::EMPTY.is_subset(small));
    }
}
