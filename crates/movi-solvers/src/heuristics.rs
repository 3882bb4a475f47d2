//! Action and state selection heuristics used by BRTDP's trajectory sampler.

use movi_core::Point;
use movi_env::{EnvWrapper, StateId};
use rand::Rng;
use rand_pcg::Pcg64;

use crate::config::{ActionSelectionHeuristic, StateSelectionHeuristic};

/// §4.5.1. Picks one of `wrapper.actions(s)`.
pub fn select_action(
    wrapper: &mut EnvWrapper,
    heuristic: ActionSelectionHeuristic,
    s: StateId,
    rng: &mut Pcg64,
) -> usize {
    let actions = wrapper.actions(s);
    assert!(!actions.is_empty(), "discover() always yields at least the synthetic self-loop action");
    match heuristic {
        ActionSelectionHeuristic::Uniform => actions[rng.gen_range(0..actions.len())],
        ActionSelectionHeuristic::Pareto | ActionSelectionHeuristic::Hypervolume => {
            let candidates = pareto_candidate_actions(wrapper, s, &actions);
            candidates[rng.gen_range(0..candidates.len())]
        }
    }
}

/// Unions every action's upper-bound vertices, strips strictly dominated
/// vertices (O(A * V^2), per §4.5.1), and returns the actions that still
/// contribute at least one surviving vertex.
fn pareto_candidate_actions(wrapper: &mut EnvWrapper, s: StateId, actions: &[usize]) -> Vec<usize> {
    let tagged: Vec<(usize, Point)> = actions
        .iter()
        .flat_map(|&a| {
            let vertices = wrapper.get_state_action_bound(s, a).upper().vertices().to_vec();
            vertices.into_iter().map(move |v| (a, v))
        })
        .collect();

    let mut candidates = Vec::new();
    for (i, (a, v)) in tagged.iter().enumerate() {
        let dominated = tagged.iter().enumerate().any(|(j, (_, w))| {
            i != j && w.iter().zip(v).all(|(wc, vc)| *wc >= vc - 1e-9) && w.iter().zip(v).any(|(wc, vc)| *wc > vc + 1e-9)
        });
        if !dominated && !candidates.contains(a) {
            candidates.push(*a);
        }
    }
    if candidates.is_empty() {
        actions.to_vec()
    } else {
        candidates
    }
}

/// §4.5.2. Returns the sampled successor state.
pub fn select_successor(
    wrapper: &mut EnvWrapper,
    heuristic: StateSelectionHeuristic,
    successors: &[(StateId, f64)],
    rng: &mut Pcg64,
) -> StateId {
    match heuristic {
        StateSelectionHeuristic::Uniform => sample_weighted(successors, rng),
        StateSelectionHeuristic::Brtdp => {
            let mut best = f64::NEG_INFINITY;
            let mut attaining = Vec::new();
            for &(succ, p) in successors {
                let d = p * wrapper.get_state_bound(succ).clone().bound_distance();
                if d > best + 1e-12 {
                    best = d;
                    attaining.clear();
                    attaining.push(succ);
                } else if (d - best).abs() <= 1e-12 {
                    attaining.push(succ);
                }
            }
            attaining[rng.gen_range(0..attaining.len())]
        }
    }
}

fn sample_weighted(successors: &[(StateId, f64)], rng: &mut Pcg64) -> StateId {
    let total: f64 = successors.iter().map(|(_, p)| p).sum();
    let mut roll = rng.gen_range(0.0..total);
    for &(s, p) in successors {
        if roll < p {
            return s;
        }
        roll -= p;
    }
    successors.last().expect("non-empty successor distribution").0
}
