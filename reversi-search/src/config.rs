use crate::Window;

/// Settings for a [`best_move`](crate::best_move) search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// Plies to look ahead. A pass consumes a ply.
    pub depth: u32,
    /// The initial window at the root.
    pub window: Window,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 6,
            window: Window::FULL,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(self, depth: u32) -> Self {
        Self { depth, ..self }
    }

    pub fn with_window(self, window: Window) -> Self {
        Self { window, ..self }
    }
}
