//! The configuration surface shared by both solvers (§6 of the interface
//! contract: precision, discount, directions, heuristics, episode/sweep caps).

pub use movi_env::Direction;

/// §4.5.1: how BRTDP picks an action at each trajectory step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionSelectionHeuristic {
    Uniform,
    #[default]
    Pareto,
    /// A valid implementation may fall back to `Pareto`; the source code
    /// treats anything non-uniform identically.
    Hypervolume,
}

/// §4.5.2: how BRTDP picks which successor to recurse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSelectionHeuristic {
    #[default]
    Brtdp,
    Uniform,
}

#[derive(Debug, Clone)]
pub struct ExplorationSettings {
    pub precision: f64,
    pub discount: Vec<f64>,
    pub directions: Vec<Direction>,
    pub action_heuristic: ActionSelectionHeuristic,
    pub state_heuristic: StateSelectionHeuristic,
    pub max_episodes: u64,
    pub max_sweeps: u64,
    pub max_depth: u64,
    pub min_depth: u64,
    pub seed: u64,
    pub trace: bool,
}

impl ExplorationSettings {
    pub fn dim(&self) -> usize {
        self.discount.len()
    }

    /// Broadcasts a scalar discount factor over `dim` objectives.
    pub fn broadcast(dim: usize, precision: f64, gamma: f64, directions: Vec<Direction>) -> Self {
        ExplorationSettings {
            precision,
            discount: vec![gamma; dim],
            directions,
            action_heuristic: ActionSelectionHeuristic::default(),
            state_heuristic: StateSelectionHeuristic::default(),
            max_episodes: 100_000,
            max_sweeps: 10_000,
            max_depth: 1_000,
            min_depth: 10,
            seed: 0,
            trace: false,
        }
    }
}
