//! Game-tree search for reversi positions.
//!
//! [`search`] is a depth-limited negamax with fail-soft alpha-beta pruning over
//! [`reversi_board::Board`]. Leaves are scored by an [`Evaluator`]; finished
//! games are scored by their disc differential, scaled by
//! [`FINAL_SCORE_SCALE`] so that a certain win outranks any heuristic value.

mod config;
mod evaluate;
mod node;
mod observer;
mod ordering;
pub mod search;

pub use config::SearchConfig;
pub use evaluate::{DiscDifference, Evaluator};
pub use node::{SearchNode, Window};
pub use observer::{NodeBudget, SearchObserver, SearchStats};
pub use ordering::{Candidates, FastestFirst, MoveOrdering, NaturalOrder};
pub use search::{final_value, search, Search};

use reversi_board::{Board, Color};

/// Multiplier applied to the disc differential of a finished game.
pub const FINAL_SCORE_SCALE: i32 = 1000;

/// The largest value a finished game can have.
pub const MAX_VALUE: i32 = reversi_board::NUM_SPACES as i32 * FINAL_SCORE_SCALE;

/// Pick a move for `color` by searching `config.depth` plies ahead.
/// `best_move` in the result is `None` when `color` must pass or the game is over.
pub fn best_move<E>(board: &Board, color: Color, config: &SearchConfig, evaluator: &E) -> SearchNode
where
    E: Evaluator + ?Sized,
{
    let mut search = Search::new(evaluator)
        .with_ordering(FastestFirst)
        .with_observer(SearchStats::default());
    let node = search.run(color, board, config.window, config.depth);
    log::debug!(
        "{} at depth {}: {} [{}]",
        color,
        config.depth,
        node,
        search.observer()
    );
    node
}

/// Solve the game, trying to determine the exact final disc differential.
/// Takes longer, but can be valuable for debugging or winning by a margin.
pub fn solve_exact(board: &Board, color: Color) -> SearchNode {
    solve(board, color, Window::FULL)
}

/// Solve the game, caring only about a win, loss, or draw.
/// Faster, but only the sign of the value is meaningful.
pub fn solve_win_loss_draw(board: &Board, color: Color) -> SearchNode {
    solve(board, color, Window::WIN_LOSS_DRAW)
}

fn solve(board: &Board, color: Color, window: Window) -> SearchNode {
    // Every remaining move may be preceded by a pass, so this never reaches ply 0.
    let depth = 2 * u32::from(board.count_empty()) + 1;
    let config = SearchConfig::default().with_depth(depth).with_window(window);
    best_move(board, color, &config, &DiscDifference)
}
