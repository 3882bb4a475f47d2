//! Trajectory-guided asynchronous value iteration (§4.5).

use std::time::Instant;

use log::{debug, info};
use movi_env::{EnvWrapper, StateId};
use rand_pcg::Pcg64;

use crate::config::ExplorationSettings;
use crate::heuristics::{select_action, select_successor};
use crate::prng::seeded_rng;
use crate::result::SolverResult;
use crate::update::update;

/// Trajectory states named in §"State machines": `Sampling` while the
/// trajectory stack is being built, `Backing-up` while it unwinds, then
/// `Converged` or `Exhausted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrajectoryState {
    Sampling,
    BackingUp,
    Converged,
    Exhausted,
}

pub struct BrtdpSolver {
    wrapper: EnvWrapper,
    settings: ExplorationSettings,
    rng: Pcg64,
    initial_state: StateId,
}

impl BrtdpSolver {
    pub fn new(wrapper: EnvWrapper, settings: ExplorationSettings, initial_state: StateId) -> Self {
        let rng = seeded_rng(settings.seed);
        BrtdpSolver { wrapper, settings, rng, initial_state }
    }

    pub fn into_wrapper(self) -> EnvWrapper {
        self.wrapper
    }

    pub fn solve(&mut self) -> SolverResult {
        let start = Instant::now();
        let mut state = TrajectoryState::Sampling;
        let mut episodes = 0u64;

        self.wrapper.discover(self.initial_state);
        loop {
            state = match state {
                TrajectoryState::Sampling => {
                    let stack = self.sample_trajectory();
                    self.backup(stack);
                    episodes += 1;
                    TrajectoryState::BackingUp
                }
                TrajectoryState::BackingUp => {
                    let gap = self.wrapper.get_state_bound(self.initial_state).clone().bound_distance();
                    if gap < self.settings.precision {
                        TrajectoryState::Converged
                    } else if episodes >= self.settings.max_episodes {
                        TrajectoryState::Exhausted
                    } else {
                        TrajectoryState::Sampling
                    }
                }
                TrajectoryState::Converged | TrajectoryState::Exhausted => break,
            };
        }

        let converged = state == TrajectoryState::Converged;
        if converged {
            info!("BRTDP converged after {episodes} episodes ({})", self.wrapper.write_statistics());
        } else {
            debug!("BRTDP exhausted max_episodes={} without converging", self.settings.max_episodes);
        }
        SolverResult {
            bound: self.wrapper.get_state_bound(self.initial_state).clone(),
            converged,
            iterations: episodes,
            elapsed: start.elapsed(),
        }
    }

    /// Samples one trajectory from `initial_state`, returning the stack of
    /// `(predecessor, action)` pairs to back up, deepest step last.
    fn sample_trajectory(&mut self) -> Vec<(StateId, usize)> {
        let mut stack = Vec::new();
        let mut current = self.initial_state;
        self.wrapper.env_mut().reset(0);

        let mut k = 0u64;
        loop {
            self.wrapper.discover(current);
            // Terminals are not skipped here: they still need their own
            // (s, a) backed up (self-loop onto themselves), or their bound
            // never moves off the initial reward-range rectangle. The loop
            // relies on the successor-gap/decay checks below to stop once a
            // terminal's bound has converged, per the spec's termination
            // conditions (which don't list "current is terminal").
            if k >= self.settings.max_depth {
                break;
            }

            let action = select_action(&mut self.wrapper, self.settings.action_heuristic, current, &mut self.rng);
            let successors = self.wrapper.transition(current, action);
            let next = select_successor(&mut self.wrapper, self.settings.state_heuristic, &successors, &mut self.rng);
            stack.push((current, action));
            k += 1;

            let decayed_enough = k >= self.settings.min_depth
                && self
                    .settings
                    .discount
                    .iter()
                    .zip(self.wrapper.env().reward_range().1)
                    .all(|(g, r_max)| g.powi(k as i32) * r_max.abs() < self.settings.precision);
            let successor_gap = self.wrapper.get_state_bound(next).clone().bound_distance();
            current = next;
            if decayed_enough || successor_gap < 1e-12 {
                break;
            }
        }
        stack
    }

    fn backup(&mut self, mut stack: Vec<(StateId, usize)>) {
        while let Some((s, a)) = stack.pop() {
            update(&mut self.wrapper, &self.settings, s, a, true);
        }
    }
}
