//! Per-axis transforms between full-board lines and canonical 8-bit rows.
//!
//! Every square lies on four lines: its row, its column and its two diagonals.
//! Each [`Axis`] moves the line through a given square onto a fixed template
//! line by a signed shift of the whole board, then packs the template line
//! into the low byte so that the capture rule can be looked up in the
//! [`CaptureTable`](crate::capture_table::CaptureTable). Bit `k` of a
//! canonical row is the square in column `k` for every axis except
//! [`Axis::Vertical`], whose bit `k` is the square in row `k + 1`.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// Row 1, the template for [`Axis::Horizontal`].
const ROW_1: u64 = 0x0000_0000_0000_00FF;

/// Column A, the template for [`Axis::Vertical`].
const COLUMN_A: u64 = 0x0101_0101_0101_0101;

/// Diagonal A1-H8, the template for [`Axis::DiagonalDown`].
const DIAGONAL_A1_H8: u64 = 0x8040_2010_0804_0201;

/// Diagonal H1-A8, the template for [`Axis::DiagonalUp`].
const DIAGONAL_H1_A8: u64 = 0x0102_0408_1020_4080;

/// Squares B1, F1, A2 and E2: the bits of a twice-duplicated row that still
/// need to move up two rows to reach the H1-A8 diagonal.
const SQUARES_B1_F1_A2_E2: u64 = 0x1122;

/// One of the four line families through a square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Axis {
    /// West-east, along a row.
    Horizontal,
    /// North-south, along a column.
    Vertical,
    /// Parallel to the A1-H8 diagonal.
    DiagonalDown,
    /// Parallel to the H1-A8 diagonal.
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// The template line, in full-board layout, read by [`Axis::to_row_one`].
    #[inline]
    pub fn template(self) -> Bitboard {
        Bitboard::new(match self {
            Axis::Horizontal => ROW_1,
            Axis::Vertical => COLUMN_A,
            Axis::DiagonalDown => DIAGONAL_A1_H8,
            Axis::DiagonalUp => DIAGONAL_H1_A8,
        })
    }

    /// The signed shift (positive toward H8) that moves the line of this axis
    /// through `square` onto the template line.
    #[inline]
    pub fn shift_distance(self, square: Square) -> i32 {
        let row = i32::from(square.row());
        let col = i32::from(square.column());
        match self {
            Axis::Horizontal => -8 * row,
            Axis::Vertical => -col,
            Axis::DiagonalDown => 8 * (col - row),
            Axis::DiagonalUp => 8 * (7 - col - row),
        }
    }

    /// The bit position of `square` inside its canonical row for this axis.
    #[inline]
    pub fn position(self, square: Square) -> u8 {
        match self {
            Axis::Vertical => square.row(),
            _ => square.column(),
        }
    }

    /// Pack the template line of `squares` into the low byte.
    /// Squares off the template line are ignored.
    #[inline]
    pub fn to_row_one(self, squares: Bitboard) -> u8 {
        let squares = u64::from(squares);
        match self {
            Axis::Horizontal => (squares & ROW_1) as u8,
            Axis::Vertical => column_a_to_row_one(squares),
            Axis::DiagonalDown => diagonal_to_row_one(squares & DIAGONAL_A1_H8),
            Axis::DiagonalUp => diagonal_to_row_one(squares & DIAGONAL_H1_A8),
        }
    }

    /// Spread a canonical row back onto the template line.
    /// All squares off the template line are zero.
    #[inline]
    pub fn from_row_one(self, row: u8) -> Bitboard {
        Bitboard::new(match self {
            Axis::Horizontal => u64::from(row),
            Axis::Vertical => row_one_to_column_a(row),
            Axis::DiagonalDown => row_one_to_diagonal_a1_h8(row),
            Axis::DiagonalUp => row_one_to_diagonal_h1_a8(row),
        })
    }

    /// The canonical row of the line of this axis through `square`.
    #[inline]
    pub fn extract(self, squares: Bitboard, square: Square) -> u8 {
        self.to_row_one(squares.signed_shift(self.shift_distance(square)))
    }

    /// Place a canonical row back on the line of this axis through `square`.
    #[inline]
    pub fn insert(self, row: u8, square: Square) -> Bitboard {
        self.from_row_one(row)
            .signed_shift(-self.shift_distance(square))
    }
}

/// A1 goes to A1, A2 to B1, ..., A8 to H1.
#[inline]
fn column_a_to_row_one(squares: u64) -> u8 {
    let mut tmp = squares & COLUMN_A;
    tmp |= tmp >> 28;
    tmp |= tmp >> 14;
    tmp |= tmp >> 7;
    tmp as u8
}

/// Folds a masked diagonal onto row 1. Folding by whole rows keeps every
/// square in its column.
#[inline]
fn diagonal_to_row_one(diagonal: u64) -> u8 {
    let mut tmp = diagonal;
    tmp |= tmp >> 32;
    tmp |= tmp >> 16;
    tmp |= tmp >> 8;
    tmp as u8
}

/// A1 goes to A1, B1 to A2, ..., H1 to A8.
#[inline]
fn row_one_to_column_a(row: u8) -> u64 {
    let mut tmp = u64::from(row);
    tmp |= tmp << 7;
    tmp |= tmp << 14;
    tmp |= tmp << 28;
    tmp & COLUMN_A
}

/// A1 goes to A1, B1 to B2, ..., H1 to H8.
#[inline]
fn row_one_to_diagonal_a1_h8(row: u8) -> u64 {
    let mut tmp = u64::from(row);
    tmp |= tmp << 8;
    tmp |= tmp << 16;
    tmp |= tmp << 32;
    tmp & DIAGONAL_A1_H8
}

/// A1 goes to A8, B1 to B7, ..., H1 to H1.
#[inline]
fn row_one_to_diagonal_h1_a8(row: u8) -> u64 {
    let mut tmp = u64::from(row);
    tmp |= tmp << 8;
    tmp |= (tmp & SQUARES_B1_F1_A2_E2) << 16;
    tmp |= tmp << 32;
    tmp & DIAGONAL_H1_A8
}
