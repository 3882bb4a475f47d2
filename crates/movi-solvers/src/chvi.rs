//! Reachability-set sweep value iteration (§4.6).

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::{debug, info};
use movi_env::{EnvWrapper, StateId};

use crate::config::ExplorationSettings;
use crate::result::SolverResult;
use crate::update::update;

pub struct ChviSolver {
    wrapper: EnvWrapper,
    settings: ExplorationSettings,
    initial_state: StateId,
    reachable: Vec<StateId>,
}

impl ChviSolver {
    /// Computes the BFS reachability closure from `initial_state` and
    /// discovers every state in it up front.
    pub fn new(mut wrapper: EnvWrapper, settings: ExplorationSettings, initial_state: StateId) -> Self {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(initial_state);
        queue.push_back(initial_state);

        let mut reachable = Vec::new();
        while let Some(s) = queue.pop_front() {
            wrapper.discover(s);
            reachable.push(s);
            let actions = wrapper.actions(s);
            for a in actions {
                for (succ, _) in wrapper.transition(s, a) {
                    if seen.insert(succ) {
                        queue.push_back(succ);
                    }
                }
            }
        }

        ChviSolver { wrapper, settings, initial_state, reachable }
    }

    pub fn into_wrapper(self) -> EnvWrapper {
        self.wrapper
    }

    pub fn reachable_states(&self) -> &[StateId] {
        &self.reachable
    }

    pub fn solve(&mut self) -> SolverResult {
        let start = Instant::now();
        let mut sweeps = 0u64;
        let mut converged = false;
        let reachable = self.reachable.clone();

        loop {
            let gap = self.wrapper.get_state_bound(self.initial_state).clone().bound_distance();
            if gap < self.settings.precision {
                converged = true;
                break;
            }
            if sweeps >= self.settings.max_sweeps {
                break;
            }

            for &s in &reachable {
                for a in self.wrapper.actions(s) {
                    update(&mut self.wrapper, &self.settings, s, a, false);
                }
            }
            sweeps += 1;
        }

        if converged {
            info!("CHVI converged after {sweeps} sweeps over {} states", self.reachable.len());
        } else {
            debug!("CHVI exhausted max_sweeps={} without converging", self.settings.max_sweeps);
        }
        SolverResult {
            bound: self.wrapper.get_state_bound(self.initial_state).clone(),
            converged,
            iterations: sweeps,
            elapsed: start.elapsed(),
        }
    }
}
