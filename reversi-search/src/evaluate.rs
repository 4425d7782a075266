//! The evaluation capability consumed at the leaves of the search.

use reversi_board::{Board, Color};

/// Scores a position for the player to move. Higher is better for `color`.
///
/// Implementations must be deterministic. The search clamps values to
/// `±MAX_VALUE`, so only evaluations within that range are exact.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, color: Color) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Board, Color) -> i32,
{
    #[inline]
    fn evaluate(&self, board: &Board, color: Color) -> i32 {
        self(board, color)
    }
}

/// Score a board as: # my discs - # opponent discs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscDifference;

impl Evaluator for DiscDifference {
    #[inline]
    fn evaluate(&self, board: &Board, color: Color) -> i32 {
        i32::from(board.count_difference(color))
    }
}
