//! Depth-limited negamax search with fail-soft alpha-beta pruning.
//!
//! Values are always from the perspective of the player to move. A player
//! without legal moves passes, which consumes a ply; when neither player can
//! move the game is over and scored by [`final_value`].

use crate::evaluate::Evaluator;
use crate::node::{SearchNode, Window};
use crate::observer::SearchObserver;
use crate::ordering::{Candidates, MoveOrdering, NaturalOrder};
use crate::{FINAL_SCORE_SCALE, MAX_VALUE};
use reversi_board::{Board, Color};

/// Search `board` for `color` with the default move ordering and no observer.
///
/// The result is exact when it lies strictly between `achievable` and
/// `cutoff`. Otherwise it is a bound on the same side of the window as the
/// true value. Both bounds are clamped to `±MAX_VALUE`.
///
/// When `color` has to pass, the result is the negated reply of the opponent
/// searched one ply shallower on the swapped window, except that
/// `best_move` is `None` rather than the opponent's move.
pub fn search<E>(
    color: Color,
    board: &Board,
    achievable: i32,
    cutoff: i32,
    ply: u32,
    evaluator: &E,
) -> SearchNode
where
    E: Evaluator + ?Sized,
{
    Search::new(evaluator).run(color, board, Window::new(achievable, cutoff), ply)
}

/// The value of a finished game for `color`: the disc differential, scaled so
/// that it outranks any heuristic evaluation.
#[inline]
pub fn final_value(board: &Board, color: Color) -> i32 {
    i32::from(board.count_difference(color)) * FINAL_SCORE_SCALE
}

/// A configured search: an evaluator, a move ordering and an observer.
pub struct Search<'a, E: ?Sized, O = NaturalOrder, S = ()> {
    evaluator: &'a E,
    ordering: O,
    observer: S,
}

impl<'a, E: Evaluator + ?Sized> Search<'a, E> {
    pub fn new(evaluator: &'a E) -> Self {
        Self {
            evaluator,
            ordering: NaturalOrder,
            observer: (),
        }
    }
}

impl<'a, E, O, S> Search<'a, E, O, S>
where
    E: Evaluator + ?Sized,
    O: MoveOrdering,
    S: SearchObserver,
{
    pub fn with_ordering<P: MoveOrdering>(self, ordering: P) -> Search<'a, E, P, S> {
        Search {
            evaluator: self.evaluator,
            ordering,
            observer: self.observer,
        }
    }

    pub fn with_observer<T: SearchObserver>(self, observer: T) -> Search<'a, E, O, T> {
        Search {
            evaluator: self.evaluator,
            ordering: self.ordering,
            observer,
        }
    }

    pub fn observer(&self) -> &S {
        &self.observer
    }

    pub fn into_observer(self) -> S {
        self.observer
    }

    /// Search `ply` plies ahead from `board` with `color` to move.
    /// Window bounds beyond `±MAX_VALUE` are clamped, so any `i32` window is accepted.
    pub fn run(&mut self, color: Color, board: &Board, window: Window, ply: u32) -> SearchNode {
        let window = window.clamped();
        self.alpha_beta(color, board, window.achievable, window.cutoff, ply)
    }

    fn alpha_beta(
        &mut self,
        color: Color,
        board: &Board,
        achievable: i32,
        cutoff: i32,
        ply: u32,
    ) -> SearchNode {
        self.observer.on_node(ply);

        if ply == 0 || self.observer.should_stop() {
            self.observer.on_leaf();
            let value = self.evaluator.evaluate(board, color);
            // Keeps every value negatable.
            return SearchNode::leaf(value.clamp(-MAX_VALUE, MAX_VALUE));
        }

        let moves = board.legal_moves(color);
        if moves.is_empty() {
            // Neither player can move: the game is over.
            if !board.has_any_legal_move(!color) {
                self.observer.on_game_over();
                return SearchNode::leaf(final_value(board, color));
            }

            // I pass, but my opponent may have moves.
            self.observer.on_pass(ply);
            let reply = self.alpha_beta(!color, board, -cutoff, -achievable, ply - 1);
            return SearchNode::leaf(-reply.value);
        }

        let mut candidates: Candidates = moves.collect();
        self.ordering.order(board, color, &mut candidates);

        let mut best = SearchNode::new(candidates[0], achievable);
        for mv in candidates {
            let next = board.make_move_unchecked(mv, color);
            let value = -self.alpha_beta(!color, &next, -cutoff, -best.value, ply - 1).value;

            // Strictly better only: the earliest of equal moves is kept.
            if value > best.value {
                best = SearchNode::new(mv, value);
            }

            // Fail high: the opponent will never allow this line.
            if best.value >= cutoff {
                self.observer.on_cutoff(ply);
                break;
            }

            if self.observer.should_stop() {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::DiscDifference;
    use crate::observer::SearchStats;
    use crate::MAX_VALUE;

    #[test]
    fn depth_zero_is_the_evaluation() {
        let board = Board::initial();
        let node = search(Color::Black, &board, -MAX_VALUE, MAX_VALUE, 0, &|_: &Board, _: Color| 17);
        assert_eq!(node, SearchNode::leaf(17));
    }

    #[test]
    fn opening_move_by_disc_count() {
        // Every opening move flips one disc, so the first is kept.
        let board = Board::initial();
        let node = search(Color::Black, &board, -MAX_VALUE, MAX_VALUE, 1, &DiscDifference);
        assert_eq!(node, SearchNode::new("D3".parse().unwrap(), 3));
    }

    #[test]
    fn stats_count_every_call() {
        let mut search = Search::new(&DiscDifference).with_observer(SearchStats::default());
        search.run(Color::Black, &Board::initial(), Window::FULL, 2);

        let stats = *search.observer();
        // The root and its four children, then one leaf per reply visited.
        // Each child visits at least one of its three replies.
        assert_eq!(stats.nodes, 1 + 4 + stats.leaves);
        assert!((4..=12).contains(&stats.leaves));
        assert_eq!(stats.passes, 0);
        assert_eq!(stats.game_overs, 0);
    }

    #[test]
    fn final_value_is_scaled() {
        let board: Board = "XXXO".repeat(16).parse().unwrap();
        assert_eq!(final_value(&board, Color::Black), 32 * FINAL_SCORE_SCALE);
        assert_eq!(final_value(&board, Color::White), -32 * FINAL_SCORE_SCALE);
    }
}
