//! Values passed between plies: the search window and its result.

use crate::MAX_VALUE;
use reversi_board::Square;
use std::fmt;

/// The best move found at a node and its value for the player to move.
/// `best_move` is `None` at leaves, at finished games and at passes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SearchNode {
    pub best_move: Option<Square>,
    pub value: i32,
}

impl SearchNode {
    #[inline]
    pub fn new(best_move: Square, value: i32) -> Self {
        Self {
            best_move: Some(best_move),
            value,
        }
    }

    /// A node without a move, valued directly.
    #[inline]
    pub fn leaf(value: i32) -> Self {
        Self {
            best_move: None,
            value,
        }
    }

    /// The same node seen from the other player: the value flips sign, the move stays.
    #[inline]
    pub fn negated(self) -> Self {
        Self {
            best_move: self.best_move,
            value: -self.value,
        }
    }
}

impl std::ops::Neg for SearchNode {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl fmt::Display for SearchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.best_move {
            Some(mv) => write!(f, "{} ({})", mv, self.value),
            None => write!(f, "-- ({})", self.value),
        }
    }
}

/// Search bounds for the player to move: values at or below `achievable`
/// are already guaranteed, values at or above `cutoff` will be refused by
/// the opponent.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    pub achievable: i32,
    pub cutoff: i32,
}

impl Window {
    /// Every value an evaluation or a finished game can produce.
    pub const FULL: Self = Self::new(-MAX_VALUE, MAX_VALUE);

    /// Only the sign of the result matters.
    pub const WIN_LOSS_DRAW: Self = Self::new(-1, 1);

    pub const fn new(achievable: i32, cutoff: i32) -> Self {
        Self { achievable, cutoff }
    }

    /// The window with both bounds limited to `±MAX_VALUE`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.achievable.clamp(-MAX_VALUE, MAX_VALUE),
            self.cutoff.clamp(-MAX_VALUE, MAX_VALUE),
        )
    }

    /// The same window from the opponent's side.
    #[inline]
    pub fn negated(self) -> Self {
        Self::new(-self.cutoff, -self.achievable)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}
