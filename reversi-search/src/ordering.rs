//! The order in which candidate moves are searched.
//!
//! Ordering never changes a full-window result, only how soon cutoffs happen.
//! Among equally valued moves the first one visited is kept, so an ordering
//! can change which of them is reported.

use arrayvec::ArrayVec;
use reversi_board::{Board, Color, Square, NUM_SPACES};

/// Candidate moves at one node, at most one per square.
pub type Candidates = ArrayVec<Square, NUM_SPACES>;

pub trait MoveOrdering {
    /// Permute `moves`, the legal moves of `color` on `board`, in place.
    fn order(&mut self, board: &Board, color: Color, moves: &mut Candidates);
}

/// Keep the board's ascending square order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl MoveOrdering for NaturalOrder {
    #[inline]
    fn order(&mut self, _board: &Board, _color: Color, _moves: &mut Candidates) {}
}

/// "Fastest first": visit the moves that leave the opponent the fewest replies
/// first. Ties keep ascending square order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FastestFirst;

impl FastestFirst {
    /// Positions with fewer empty squares keep their natural order.
    pub const MIN_SORT_EMPTIES: u8 = 6;
}

impl MoveOrdering for FastestFirst {
    fn order(&mut self, board: &Board, color: Color, moves: &mut Candidates) {
        if board.count_empty() < Self::MIN_SORT_EMPTIES {
            return;
        }

        let mut keyed: ArrayVec<(usize, Square), NUM_SPACES> = moves
            .iter()
            .map(|&mv| {
                let replies = board.make_move_unchecked(mv, color).legal_moves(!color);
                (replies.len(), mv)
            })
            .collect();
        keyed.sort_by_key(|&(replies, _)| replies);

        for (slot, (_, mv)) in moves.iter_mut().zip(keyed) {
            *slot = mv;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_is_untouched() {
        let board = Board::initial();
        let mut moves: Candidates = board.legal_moves(Color::Black).collect();
        let before = moves.clone();
        NaturalOrder.order(&board, Color::Black, &mut moves);
        assert_eq!(moves, before);
    }

    #[test]
    fn fastest_first_sorts_by_reply_count() {
        let board = Board::initial()
            .make_move("D3".parse().unwrap(), Color::Black)
            .unwrap();
        let mut moves: Candidates = board.legal_moves(Color::White).collect();
        let mut natural = moves.clone();
        natural.sort();
        FastestFirst.order(&board, Color::White, &mut moves);

        let replies: Vec<usize> = moves
            .iter()
            .map(|&mv| {
                board
                    .make_move_unchecked(mv, Color::White)
                    .legal_moves(Color::Black)
                    .len()
            })
            .collect();
        assert!(replies.windows(2).all(|pair| pair[0] <= pair[1]));

        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(sorted, natural);
    }
}
