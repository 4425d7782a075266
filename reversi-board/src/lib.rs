//! `reversi-board` is an immutable bitboard Othello engine built on lookup tables.
//!
//! The package is organised bottom-up:
//!
//!  - [`bitboard`] holds the raw [`Bitboard`] type.
//!  - [`axis`] converts the four lines through any square to and from a
//!    canonical 8-bit row.
//!  - [`capture_table`] tabulates the capture rule for every 8-square row.
//!  - [`Board`] combines both into legality testing, legal-move generation
//!    and move application, with checked and unchecked entry points.

pub mod axis;
pub mod bitboard;
pub mod capture_table;
pub mod test_utils;

mod board;
mod color;
mod error;
mod square;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use color::*;
pub use error::*;
pub use square::*;

/// The number of squares on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on an Othello board.
pub const NUM_SPACES: usize = 64;
