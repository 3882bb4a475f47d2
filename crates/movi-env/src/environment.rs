//! The abstract contract every MDP/benchmark implementation honors.

use rand::RngCore;

/// States and actions are small integer indices; this is what lets `EnvWrapper`
/// key its per-state records with a plain hash map instead of a pointer graph.
pub type StateId = usize;
pub type ActionId = usize;

/// Chosen per benchmark run; solvers and `EnvWrapper` hold it as `Box<dyn Environment>`.
pub trait Environment {
    fn current_state(&self) -> StateId;

    /// Finite, non-empty except for self-loop terminals.
    fn actions(&self, s: StateId) -> Vec<ActionId>;

    /// Finite successor distribution; probabilities sum to `1 ± eps`.
    fn transition(&self, s: StateId, a: ActionId) -> Vec<(StateId, f64)>;

    /// Per-objective immediate reward for taking `a` in `s`.
    fn reward(&self, s: StateId, a: ActionId) -> Vec<f64>;

    /// Componentwise `(r_min, r_max)` over the whole environment.
    fn reward_range(&self) -> (Vec<f64>, Vec<f64>);

    fn objective_dim(&self) -> usize;

    /// Samples a successor of `current_state()` under `a` and moves there.
    /// Only ever called by BRTDP; CHVI never mutates the environment.
    fn step(&mut self, a: ActionId, rng: &mut dyn RngCore) -> StateId;

    /// `seed == 0` means "reseed from entropy"; nonzero is deterministic.
    fn reset(&mut self, seed: u64);

    /// A self-loop state with exactly one action returning to itself.
    fn is_terminal(&self, s: StateId) -> bool {
        let actions = self.actions(s);
        if actions.len() != 1 {
            return false;
        }
        let successors = self.transition(s, actions[0]);
        successors.len() == 1 && successors[0].0 == s && (successors[0].1 - 1.0).abs() < 1e-7
    }
}

/// Samples a successor state from a (state, probability) distribution.
///
/// Shared by every `Environment::step` implementation and by the BRTDP state
/// heuristic's `Uniform` fallback.
pub fn sample_successor(distribution: &[(StateId, f64)], rng: &mut dyn RngCore) -> StateId {
    let total: f64 = distribution.iter().map(|(_, p)| p).sum();
    let mut roll = (rng.next_u64() as f64 / u64::MAX as f64) * total;
    for (s, p) in distribution {
        if roll < *p {
            return *s;
        }
        roll -= p;
    }
    distribution.last().expect("non-empty transition distribution").0
}
