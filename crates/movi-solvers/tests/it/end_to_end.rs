use movi_env::{five_state_mdp, two_state_mdp, Direction, EnvWrapper};
use movi_solvers::{BrtdpSolver, ChviSolver, ExplorationSettings};

fn on_frontier(curve: &movi_core::ParetoCurve, point: &[f64]) -> bool {
    curve.point_distance(point).abs() < 1e-6
}

#[test]
fn chvi_five_state_mdp_converges_and_matches_hand_solved_bound() {
    let settings = ExplorationSettings::broadcast(2, 1e-9, 0.75, vec![Direction::Maximize, Direction::Maximize]);
    let wrapper = EnvWrapper::new(Box::new(five_state_mdp()), settings.directions.clone(), settings.discount.clone());
    let mut solver = ChviSolver::new(wrapper, settings, 0);
    let result = solver.solve();

    assert!(result.converged, "CHVI should converge on a 5-state acyclic-beyond-self-loops MDP");
    // Hand-solved via backward induction: s3 -> (4,0), s4 -> (0,4) fixed
    // points, s1 -> (2.5,2.5), s2 -> (1,4), giving Q[0,0] = (4.875, 2.875)
    // and Q[0,1] = (1.75, 4.0), neither dominating the other.
    let upper = result.bound.upper().clone();
    assert!(on_frontier(&upper, &[4.875, 2.875]));
    assert!(on_frontier(&upper, &[1.75, 4.0]));
}

#[test]
fn chvi_five_state_mdp_with_zero_discount_collapses_to_immediate_reward() {
    let settings = ExplorationSettings::broadcast(2, 1e-9, 0.0, vec![Direction::Maximize, Direction::Maximize]);
    let wrapper = EnvWrapper::new(Box::new(five_state_mdp()), settings.directions.clone(), settings.discount.clone());
    let mut solver = ChviSolver::new(wrapper, settings, 0);
    let mut result = solver.solve();

    assert!(result.converged);
    assert!(
        movi_core::vector::approx_zero(result.bound.bound_distance()),
        "with gamma=0, there's no residual uncertainty left to close"
    );
    assert!(on_frontier(result.bound.upper(), &[3.0, 1.0]));
}

#[test]
fn brtdp_five_state_mdp_converges_through_absorbing_terminals() {
    let settings = ExplorationSettings {
        max_episodes: 200_000,
        max_depth: 200,
        min_depth: 4,
        seed: 0,
        ..ExplorationSettings::broadcast(2, 1e-9, 0.75, vec![Direction::Maximize, Direction::Maximize])
    };
    let wrapper = EnvWrapper::new(Box::new(five_state_mdp()), settings.directions.clone(), settings.discount.clone());
    let mut solver = BrtdpSolver::new(wrapper, settings, 0);
    let result = solver.solve();

    assert!(
        result.converged,
        "BRTDP must back up s3/s4 (absorbing terminals) to close the gap at s0, not just loose states"
    );
    let upper = result.bound.upper().clone();
    assert!(on_frontier(&upper, &[4.875, 2.875]));
    assert!(on_frontier(&upper, &[1.75, 4.0]));
}

#[test]
fn brtdp_two_state_mdp_reaches_precision_within_max_episodes() {
    let settings = ExplorationSettings {
        max_episodes: 20_000,
        max_depth: 64,
        min_depth: 2,
        seed: 7,
        ..ExplorationSettings::broadcast(2, 0.2, 0.5, vec![Direction::Maximize, Direction::Maximize])
    };
    let wrapper = EnvWrapper::new(Box::new(two_state_mdp()), settings.directions.clone(), settings.discount.clone());
    let mut solver = BrtdpSolver::new(wrapper, settings, 0);
    let result = solver.solve();

    assert!(result.converged, "BRTDP should close a 0.2 gap on a two-state, two-action MDP");
    assert!(on_frontier(result.bound.upper(), &[2.0, 0.0]));
    assert!(on_frontier(result.bound.upper(), &[0.0, 2.0]));
}
