//! Discovery, reward-orientation, and bound-cache layer sitting between a raw
//! `Environment` and the solvers.

use std::collections::HashMap;

use log::{debug, trace};
use movi_core::{Bounds, ParetoCurve};

use crate::environment::{ActionId, Environment, StateId};
use crate::record::StateRecord;

/// Whether larger or smaller values of an objective are preferred. Solvers and
/// `movi-core` only ever reason in "larger is better" terms; `EnvWrapper` is
/// the single place rewards get their sign flipped to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Maximize => 1.0,
            Direction::Minimize => -1.0,
        }
    }
}

fn orient(reward: &[f64], directions: &[Direction]) -> Vec<f64> {
    reward
        .iter()
        .zip(directions)
        .map(|(r, d)| r * d.sign())
        .collect()
}

/// Owns the environment and the lazily discovered per-state records. Every
/// reward and bound that crosses this boundary is already reoriented to
/// "larger is better"; nothing downstream needs to know about `Direction`.
pub struct EnvWrapper {
    env: Box<dyn Environment>,
    directions: Vec<Direction>,
    gamma: Vec<f64>,
    records: HashMap<StateId, StateRecord>,
    dim: usize,
    /// The worst reachable discounted return, componentwise; the corner
    /// every lower curve's downward closure is anchored to.
    reference: Vec<f64>,
}

impl EnvWrapper {
    pub fn new(env: Box<dyn Environment>, directions: Vec<Direction>, gamma: Vec<f64>) -> Self {
        let dim = env.objective_dim();
        assert_eq!(directions.len(), dim, "one direction per objective");
        assert_eq!(gamma.len(), dim, "one discount factor per objective");

        let (r_min, r_max) = env.reward_range();
        let r_min = orient(&r_min, &directions);
        let r_max = orient(&r_max, &directions);
        let reference: Vec<f64> = (0..dim)
            .map(|i| {
                let denom = (1.0 - gamma[i]).max(1e-9);
                (r_min[i] / denom).min(r_max[i] / denom)
            })
            .collect();

        EnvWrapper {
            env,
            directions,
            gamma,
            records: HashMap::new(),
            dim,
            reference,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn gamma(&self) -> &[f64] {
        &self.gamma
    }

    pub fn env(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    pub fn env_mut(&mut self) -> &mut dyn Environment {
        self.env.as_mut()
    }

    /// The initial, maximally loose bound for a freshly seen state: the
    /// environment's discounted reward-range rectangle.
    fn initial_bound(&self) -> Bounds {
        let (r_min, r_max) = self.env.reward_range();
        let r_min = orient(&r_min, &self.directions);
        let r_max = orient(&r_max, &self.directions);
        let (lo, hi) = self.min_max_discounted_reward(&r_min, &r_max);
        Bounds::rectangle(lo, hi)
    }

    /// `sum_i min(r_min_i, r_max_i) / (1 - gamma_i)` and the matching max
    /// corner, guarding the `gamma -> 1` division.
    fn min_max_discounted_reward(&self, r_min: &[f64], r_max: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut lo = vec![0.0; self.dim];
        let mut hi = vec![0.0; self.dim];
        for i in 0..self.dim {
            let denom = (1.0 - self.gamma[i]).max(1e-9);
            let a = r_min[i] / denom;
            let b = r_max[i] / denom;
            lo[i] = a.min(b);
            hi[i] = a.max(b);
        }
        (lo, hi)
    }

    /// Ensures `s` has a `StateRecord`, inserting the initial loose bound and
    /// the action list reported by the environment if this is the first visit.
    pub fn discover(&mut self, s: StateId) -> &StateRecord {
        if !self.records.contains_key(&s) {
            let actions = self.env.actions(s);
            let terminal = self.env.is_terminal(s);
            let bound = self.initial_bound();
            trace!("discovered state {s} ({} actions, terminal={terminal})", actions.len());
            self.records.insert(s, StateRecord::new(actions, bound, terminal));
        }
        self.records.get(&s).expect("just inserted")
    }

    pub fn get_state_bound(&mut self, s: StateId) -> &Bounds {
        &self.discover(s).bound
    }

    /// The actions available at `s`, discovering it first. A state the
    /// environment reported with no actions surfaces as `[0]`, the
    /// synthetic self-loop action (see [`StateRecord::synthetic_self_loop`]).
    pub fn actions(&mut self, s: StateId) -> Vec<ActionId> {
        self.discover(s).actions.clone()
    }

    pub fn is_terminal(&mut self, s: StateId) -> bool {
        self.discover(s).terminal
    }

    pub fn get_state_action_bound(&mut self, s: StateId, a: ActionId) -> &Bounds {
        self.discover(s);
        let record = self.records.get(&s).expect("discovered above");
        let idx = record
            .actions
            .iter()
            .position(|&x| x == a)
            .unwrap_or_else(|| panic!("action {a} not available in state {s}"));
        &record.action_bounds[idx]
    }

    /// Overwrites the cached bound for `(s, a)` and recomputes the state-level
    /// bound as the union (Pareto envelope) of all of its actions' bounds.
    pub fn set_bound(&mut self, s: StateId, a: ActionId, bound: Bounds) {
        self.discover(s);
        let record = self.records.get_mut(&s).expect("discovered above");
        let idx = record
            .actions
            .iter()
            .position(|&x| x == a)
            .unwrap_or_else(|| panic!("action {a} not available in state {s}"));
        record.action_bounds[idx] = bound;
        record.visits += 1;

        // State bound is the Pareto envelope over all actions, not their sum:
        // a state can always pick its best action, so its curves are the
        // hull of the union of its actions' curves.
        let lower_vertices: Vec<_> = record.action_bounds.iter().flat_map(|b| b.lower().vertices().iter().cloned()).collect();
        let upper_vertices: Vec<_> = record.action_bounds.iter().flat_map(|b| b.upper().vertices().iter().cloned()).collect();
        let mut unioned = Bounds::new(ParetoCurve::new(lower_vertices), ParetoCurve::new(upper_vertices));
        unioned.pareto(&self.reference, 1e-7);
        record.bound = unioned;
        debug!("state {s} bound refreshed after action {a} update (visits={})", record.visits);
    }

    pub fn expected_reward(&self, s: StateId, a: ActionId) -> Vec<f64> {
        if self.records.get(&s).is_some_and(|r| r.synthetic_self_loop) {
            return vec![0.0; self.dim];
        }
        orient(&self.env.reward(s, a), &self.directions)
    }

    pub fn transition(&self, s: StateId, a: ActionId) -> Vec<(StateId, f64)> {
        if self.records.get(&s).is_some_and(|r| r.synthetic_self_loop) {
            return vec![(s, 1.0)];
        }
        self.env.transition(s, a)
    }

    /// The worst reachable discounted return, used as the Pareto reference
    /// corner every lower curve's downward closure anchors to.
    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    pub fn records(&self) -> &HashMap<StateId, StateRecord> {
        &self.records
    }

    pub fn write_statistics(&self) -> String {
        let discovered = self.records.len();
        let terminal = self.records.values().filter(|r| r.terminal).count();
        let visits: u64 = self.records.values().map(|r| r.visits).sum();
        format!("discovered={discovered} terminal={terminal} total_visits={visits}")
    }
}
