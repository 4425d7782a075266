//! The two sides of the game and the state of a single square.

use derive_more::Display;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Color {
    Black,
    White,
}

impl Default for Color {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The state of a square holding one of this color's discs.
    #[inline]
    pub fn square_state(self) -> SquareState {
        match self {
            Color::Black => SquareState::Black,
            Color::White => SquareState::White,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// What occupies a square.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum SquareState {
    Empty,
    Black,
    White,
}

impl SquareState {
    /// The color of the disc on the square, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            SquareState::Empty => None,
            SquareState::Black => Some(Color::Black),
            SquareState::White => Some(Color::White),
        }
    }

    /// Single-character rendering used by board text.
    pub fn symbol(self) -> char {
        match self {
            SquareState::Empty => '.',
            SquareState::Black => 'X',
            SquareState::White => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(color.opponent().opponent(), color);
            assert_eq!(!color, color.opponent());
        }
    }

    #[test]
    fn square_state_round_trip() {
        for color in Color::ALL {
            assert_eq!(color.square_state().color(), Some(color));
        }
        assert_eq!(SquareState::Empty.color(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Color::Black.to_string(), "Black");
        assert_eq!(SquareState::Empty.to_string(), "Empty");
    }
}
