//! Small explicit in-memory MDPs used by the test suite and the CLI's
//! built-in demo benchmarks.

use std::collections::HashMap;

use rand::RngCore;

use crate::environment::{sample_successor, ActionId, Environment, StateId};

#[derive(Debug, Clone)]
struct Transition {
    reward: Vec<f64>,
    successors: Vec<(StateId, f64)>,
}

/// A fully explicit, finite MDP: every `(state, action)` pair maps to a
/// reward vector and a successor distribution supplied up front.
pub struct InMemoryMdp {
    current: StateId,
    initial: StateId,
    dim: usize,
    table: HashMap<(StateId, ActionId), Transition>,
    actions: HashMap<StateId, Vec<ActionId>>,
    reward_min: Vec<f64>,
    reward_max: Vec<f64>,
}

impl InMemoryMdp {
    /// Builds the fixture from a flat list of `(state, action, reward, successors)`
    /// entries. `reward_range` should be the tightest componentwise bound the
    /// caller knows, typically the min/max of every listed `reward`.
    pub fn new(
        initial: StateId,
        dim: usize,
        entries: Vec<(StateId, ActionId, Vec<f64>, Vec<(StateId, f64)>)>,
        reward_min: Vec<f64>,
        reward_max: Vec<f64>,
    ) -> Self {
        let mut table = HashMap::new();
        let mut actions: HashMap<StateId, Vec<ActionId>> = HashMap::new();
        for (s, a, reward, successors) in entries {
            assert_eq!(reward.len(), dim, "reward vector must match objective_dim");
            let total: f64 = successors.iter().map(|(_, p)| p).sum();
            assert!((total - 1.0).abs() < 1e-6, "successor probabilities for ({s}, {a}) sum to {total}");
            actions.entry(s).or_default().push(a);
            table.insert((s, a), Transition { reward, successors });
        }
        InMemoryMdp { current: initial, initial, dim, table, actions, reward_min, reward_max }
    }
}

impl Environment for InMemoryMdp {
    fn current_state(&self) -> StateId {
        self.current
    }

    fn actions(&self, s: StateId) -> Vec<ActionId> {
        self.actions.get(&s).cloned().unwrap_or_default()
    }

    fn transition(&self, s: StateId, a: ActionId) -> Vec<(StateId, f64)> {
        self.table
            .get(&(s, a))
            .unwrap_or_else(|| panic!("no transition for state {s} action {a}"))
            .successors
            .clone()
    }

    fn reward(&self, s: StateId, a: ActionId) -> Vec<f64> {
        self.table
            .get(&(s, a))
            .unwrap_or_else(|| panic!("no transition for state {s} action {a}"))
            .reward
            .clone()
    }

    fn reward_range(&self) -> (Vec<f64>, Vec<f64>) {
        (self.reward_min.clone(), self.reward_max.clone())
    }

    fn objective_dim(&self) -> usize {
        self.dim
    }

    fn step(&mut self, a: ActionId, rng: &mut dyn RngCore) -> StateId {
        let successors = self.transition(self.current, a);
        self.current = sample_successor(&successors, rng);
        self.current
    }

    fn reset(&mut self, _seed: u64) {
        self.current = self.initial;
    }
}

/// Two states, two actions each, both self-looping on the state they're
/// called from with rewards `(1, 0)` and `(0, 1)` respectively. At `gamma =
/// 0.5` the discounted bound for each action is `(2, 0)` / `(0, 2)`.
pub fn two_state_mdp() -> InMemoryMdp {
    InMemoryMdp::new(
        0,
        2,
        vec![
            (0, 0, vec![1.0, 0.0], vec![(0, 1.0)]),
            (0, 1, vec![0.0, 1.0], vec![(0, 1.0)]),
            (1, 0, vec![1.0, 0.0], vec![(1, 1.0)]),
            (1, 1, vec![0.0, 1.0], vec![(1, 1.0)]),
        ],
        vec![0.0, 0.0],
        vec![1.0, 1.0],
    )
}

/// A five-state chain with a branching action at state 0, used to exercise
/// bound propagation through a non-trivial transition structure.
///
/// State 4 is terminal (self-loop, zero reward). States 1-3 each have a
/// single forced action leading toward 4 with a small per-objective reward;
/// state 0 has two actions choosing between the "left" and "right" branch.
/// From s0: a0 -> s1, a1 -> s2. From s1: a0 -> {s3: 0.5, s4: 0.5}. From s2:
/// a0 -> s4. s3 and s4 self-loop (terminal).
pub fn five_state_mdp() -> InMemoryMdp {
    InMemoryMdp::new(
        0,
        2,
        vec![
            (0, 0, vec![3.0, 1.0], vec![(1, 1.0)]),
            (0, 1, vec![1.0, 1.0], vec![(2, 1.0)]),
            (1, 0, vec![1.0, 1.0], vec![(3, 0.5), (4, 0.5)]),
            (2, 0, vec![1.0, 1.0], vec![(4, 1.0)]),
            (3, 0, vec![1.0, 0.0], vec![(3, 1.0)]),
            (4, 0, vec![0.0, 1.0], vec![(4, 1.0)]),
        ],
        vec![0.0, 0.0],
        vec![3.0, 1.0],
    )
}
