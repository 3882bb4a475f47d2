use movi_env::{five_state_mdp, two_state_mdp, Environment};

#[test]
fn two_state_mdp_has_two_actions_at_each_state() {
    let env = two_state_mdp();
    assert_eq!(env.actions(0).len(), 2);
    assert_eq!(env.actions(1).len(), 2);
}

#[test]
fn two_state_mdp_rewards_are_axis_aligned() {
    let env = two_state_mdp();
    assert_eq!(env.reward(0, 0), vec![1.0, 0.0]);
    assert_eq!(env.reward(0, 1), vec![0.0, 1.0]);
}

#[test]
fn five_state_mdp_states_three_and_four_are_terminal() {
    let env = five_state_mdp();
    assert!(env.is_terminal(3));
    assert!(env.is_terminal(4));
    assert!(!env.is_terminal(0));
}

#[test]
fn five_state_mdp_branches_from_s0() {
    let env = five_state_mdp();
    assert_eq!(env.transition(0, 0), vec![(1, 1.0)]);
    assert_eq!(env.transition(0, 1), vec![(2, 1.0)]);
    assert_eq!(env.transition(1, 0), vec![(3, 0.5), (4, 0.5)]);
    assert_eq!(env.transition(2, 0), vec![(4, 1.0)]);
}
