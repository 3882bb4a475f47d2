//! The five-step Bellman-style update shared verbatim by BRTDP and CHVI (§4.5).

use movi_core::Bounds;
use movi_env::EnvWrapper;

use crate::config::ExplorationSettings;

/// Computes the new `(state, action)` bound and writes it back via
/// `set_bound`. Does not itself decide which `(s, a)` pair to update or loop
/// over sweeps/trajectories — that's the caller's job.
///
/// `reduce` applies step 5 (the `pareto` reduction) before writing the bound
/// back. BRTDP always passes `true`. CHVI passes `false` mid-sweep — vertex
/// growth in Q[s,a] is tolerated there, since `set_bound` re-hulls the union
/// anyway when folding Q into the state-level bound — and `true` is never
/// required of CHVI, since that final hull is what normalizes the result.
pub fn update(wrapper: &mut EnvWrapper, settings: &ExplorationSettings, s: usize, a: usize, reduce: bool) {
    let successors = wrapper.transition(s, a);

    let successor_bounds: Vec<Bounds> = successors.iter().map(|(s2, _)| wrapper.get_state_bound(*s2).clone()).collect();
    let weighted: Vec<(&Bounds, f64)> = successor_bounds.iter().zip(successors.iter().map(|(_, p)| *p)).collect();
    let mut sigma = Bounds::sum_successors(&weighted);

    sigma.multiply_vector(&settings.discount);
    sigma.shift(&wrapper.expected_reward(s, a));
    if reduce {
        sigma.pareto(wrapper.reference(), settings.precision);
    }

    wrapper.set_bound(s, a, sigma);
}
