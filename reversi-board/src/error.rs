use crate::{Color, Square, SquareSet};
use derive_more::{Display, Error};

/// Rejected arguments to [`Board`](crate::Board) construction and moves.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum BoardError {
    #[display(fmt = "square {} is already occupied", square)]
    OccupiedSquare { square: Square },

    #[display(fmt = "{} cannot legally move to {}", color, square)]
    IllegalMove { square: Square, color: Color },

    #[display(fmt = "square {} has no assigned state", square)]
    MissingSquare { square: Square },

    #[display(fmt = "square {} is assigned more than once", square)]
    DuplicateSquare { square: Square },

    #[display(fmt = "black and white both occupy {}", overlap)]
    OverlappingDiscs { overlap: SquareSet },
}

/// Failure to read a board from text.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 squares, found {}", found)]
    WrongLength { found: usize },

    #[display(fmt = "unexpected character {:?}", found)]
    UnexpectedChar { found: char },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn board_error_display() {
        let square = Square::from_str("C4").unwrap();
        assert_eq!(
            BoardError::OccupiedSquare { square }.to_string(),
            "square C4 is already occupied"
        );
        assert_eq!(
            BoardError::IllegalMove {
                square,
                color: Color::White
            }
            .to_string(),
            "White cannot legally move to C4"
        );
        let overlap: SquareSet = [square].into_iter().collect();
        assert_eq!(
            BoardError::OverlappingDiscs { overlap }.to_string(),
            "black and white both occupy [C4]"
        );
    }

    #[test]
    fn parse_error_display() {
        assert_eq!(
            ParseBoardError::WrongLength { found: 3 }.to_string(),
            "expected 64 squares, found 3"
        );
        assert_eq!(
            ParseBoardError::UnexpectedChar { found: 'z' }.to_string(),
            "unexpected character 'z'"
        );
    }
}
