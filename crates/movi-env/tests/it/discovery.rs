use movi_core::Bounds;
use movi_env::{two_state_mdp, Direction, EnvWrapper};

fn wrapper() -> EnvWrapper {
    EnvWrapper::new(
        Box::new(two_state_mdp()),
        vec![Direction::Maximize, Direction::Maximize],
        vec![0.5, 0.5],
    )
}

#[test]
fn discover_seeds_the_reward_range_rectangle() {
    let mut w = wrapper();
    let bound = w.get_state_bound(0).clone();
    assert_eq!(bound.lower().vertices(), &[vec![0.0, 0.0]]);
    assert_eq!(bound.upper().vertices(), &[vec![2.0, 2.0]]);
}

#[test]
fn discover_is_idempotent() {
    let mut w = wrapper();
    w.discover(0);
    let first = w.get_state_bound(0).clone();
    w.discover(0);
    let second = w.get_state_bound(0).clone();
    assert_eq!(first.lower().vertices(), second.lower().vertices());
}

#[test]
fn set_bound_folds_action_bounds_into_the_state_envelope() {
    let mut w = wrapper();
    w.discover(0);
    w.set_bound(0, 0, Bounds::rectangle(vec![2.0, 0.0], vec![2.0, 0.0]));
    w.set_bound(0, 1, Bounds::rectangle(vec![0.0, 2.0], vec![0.0, 2.0]));

    let bound = w.get_state_bound(0);
    assert!(bound.upper().vertices().contains(&vec![2.0, 0.0]));
    assert!(bound.upper().vertices().contains(&vec![0.0, 2.0]));
}

#[test]
fn minimize_direction_flips_reward_sign() {
    let mut w = EnvWrapper::new(
        Box::new(two_state_mdp()),
        vec![Direction::Minimize, Direction::Maximize],
        vec![0.5, 0.5],
    );
    assert_eq!(w.expected_reward(0, 0), vec![-1.0, 0.0]);
}
