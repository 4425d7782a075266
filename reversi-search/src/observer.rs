//! Optional hooks into a running search: telemetry and cooperative stopping.

use derive_more::Display;

/// Receives events from the search. Every method defaults to doing nothing,
/// and `()` is the observer that ignores everything.
pub trait SearchObserver {
    /// A search call was entered with `ply` plies remaining.
    fn on_node(&mut self, _ply: u32) {}

    /// A position was handed to the evaluator.
    fn on_leaf(&mut self) {}

    /// A finished game was scored from its disc counts.
    fn on_game_over(&mut self) {}

    /// The player to move had to pass.
    fn on_pass(&mut self, _ply: u32) {}

    /// Remaining candidates were skipped because the value reached the cutoff.
    fn on_cutoff(&mut self, _ply: u32) {}

    /// Polled at the top of every call and after every candidate move.
    /// Once it answers true, the search unwinds with the best values it has.
    fn should_stop(&mut self) -> bool {
        false
    }
}

impl SearchObserver for () {}

impl<S: SearchObserver + ?Sized> SearchObserver for &mut S {
    fn on_node(&mut self, ply: u32) {
        (**self).on_node(ply)
    }

    fn on_leaf(&mut self) {
        (**self).on_leaf()
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over()
    }

    fn on_pass(&mut self, ply: u32) {
        (**self).on_pass(ply)
    }

    fn on_cutoff(&mut self, ply: u32) {
        (**self).on_cutoff(ply)
    }

    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}

/// Counts what a search did.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
#[display(
    fmt = "nodes={} leaves={} game_overs={} passes={} cutoffs={}",
    nodes,
    leaves,
    game_overs,
    passes,
    cutoffs
)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub game_overs: u64,
    pub passes: u64,
    pub cutoffs: u64,
}

impl SearchObserver for SearchStats {
    fn on_node(&mut self, _ply: u32) {
        self.nodes += 1;
    }

    fn on_leaf(&mut self) {
        self.leaves += 1;
    }

    fn on_game_over(&mut self) {
        self.game_overs += 1;
    }

    fn on_pass(&mut self, _ply: u32) {
        self.passes += 1;
    }

    fn on_cutoff(&mut self, _ply: u32) {
        self.cutoffs += 1;
    }
}

/// Asks the search to stop once a fixed number of nodes has been entered.
#[derive(Clone, Copy, Debug)]
pub struct NodeBudget {
    remaining: u64,
}

impl NodeBudget {
    pub fn new(nodes: u64) -> Self {
        Self { remaining: nodes }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

impl SearchObserver for NodeBudget {
    fn on_node(&mut self, _ply: u32) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn should_stop(&mut self) -> bool {
        self.is_exhausted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_display() {
        let stats = SearchStats {
            nodes: 5,
            leaves: 3,
            game_overs: 0,
            passes: 1,
            cutoffs: 2,
        };
        assert_eq!(
            stats.to_string(),
            "nodes=5 leaves=3 game_overs=0 passes=1 cutoffs=2"
        );
    }

    #[test]
    fn budget_runs_out() {
        let mut budget = NodeBudget::new(2);
        assert!(!budget.should_stop());
        budget.on_node(3);
        budget.on_node(2);
        assert!(budget.should_stop());
        budget.on_node(1);
        assert!(budget.is_exhausted());
    }

    #[test]
    fn borrowed_observers_forward() {
        let mut stats = SearchStats::default();
        {
            let mut borrowed = &mut stats;
            borrowed.on_node(1);
            borrowed.on_cutoff(1);
        }
        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.cutoffs, 1);
    }
}
