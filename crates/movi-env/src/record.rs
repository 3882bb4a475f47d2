//! Per-state bookkeeping kept by `EnvWrapper`.

use movi_core::Bounds;

use crate::environment::ActionId;

/// Lazily populated the first time a state is discovered by `EnvWrapper::discover`.
#[derive(Debug, Clone)]
pub struct StateRecord {
    pub actions: Vec<ActionId>,
    pub bound: Bounds,
    pub action_bounds: Vec<Bounds>,
    pub terminal: bool,
    pub visits: u64,
    /// Set when the environment reported no actions for this state: treated
    /// as a self-loop terminal per the failure semantics in §4's spec, with
    /// a single synthetic action (id 0) that `EnvWrapper` intercepts rather
    /// than forwarding to the environment.
    pub synthetic_self_loop: bool,
}

impl StateRecord {
    pub fn new(mut actions: Vec<ActionId>, bound: Bounds, mut terminal: bool) -> Self {
        let synthetic_self_loop = actions.is_empty();
        if synthetic_self_loop {
            actions.push(0);
            terminal = true;
        }
        let action_bounds = vec![bound.clone(); actions.len()];
        StateRecord {
            actions,
            bound,
            action_bounds,
            terminal,
            visits: 0,
            synthetic_self_loop,
        }
    }
}
