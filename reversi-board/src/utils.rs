//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

const COLUMN_LABELS: &str = "   A B C D E F G H";

/// Format one character per square into a labelled grid, row 1 on top.
/// `cells` must yield exactly 64 items, A1 first and H8 last.
pub fn format_grid<T: Iterator<Item = char>>(mut cells: T, f: &mut Formatter) -> fmt::Result {
    f.write_str(COLUMN_LABELS)?;

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n {} ", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, "{} ", cells.next().ok_or(fmt::Error)?)?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}
