use std::fs;

use movi_env::Environment;
use movi_parser::{parse_explicit_mdp, ParseError};

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("movi-parser-test-{name}"));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn parses_two_state_mdp_and_collapses_rewards() {
    let dir = scratch_dir("two-state");
    let transitions = dir.join("transitions.txt");
    let reward_1 = dir.join("reward1.txt");
    let reward_2 = dir.join("reward2.txt");

    fs::write(&transitions, "0 0 0 1.0\n0 1 0 1.0\n1 0 1 1.0\n1 1 1 1.0\n").unwrap();
    fs::write(&reward_1, "0 0 0 1.0\n0 1 0 0.0\n1 0 1 1.0\n1 1 1 0.0\n").unwrap();
    fs::write(&reward_2, "0 0 0 0.0\n0 1 0 1.0\n1 0 1 0.0\n1 1 1 1.0\n").unwrap();

    let mdp = parse_explicit_mdp(&transitions, &[reward_1, reward_2], 0).unwrap();
    assert_eq!(mdp.reward(0, 0), vec![1.0, 0.0]);
    assert_eq!(mdp.reward(0, 1), vec![0.0, 1.0]);
    assert_eq!(mdp.objective_dim(), 2);
}

#[test]
fn rejects_unnormalized_transition_probabilities() {
    let dir = scratch_dir("bad-probs");
    let transitions = dir.join("transitions.txt");
    fs::write(&transitions, "0 0 0 0.5\n0 0 1 0.2\n").unwrap();

    let reward = dir.join("reward.txt");
    fs::write(&reward, "0 0 0 1.0\n").unwrap();

    let err = parse_explicit_mdp(&transitions, &[reward], 0).unwrap_err();
    assert!(matches!(err, ParseError::TransitionNotNormalized { .. }));
}

#[test]
fn rejects_unknown_initial_state() {
    let dir = scratch_dir("bad-initial");
    let transitions = dir.join("transitions.txt");
    fs::write(&transitions, "0 0 0 1.0\n").unwrap();
    let reward = dir.join("reward.txt");
    fs::write(&reward, "0 0 0 1.0\n").unwrap();

    let err = parse_explicit_mdp(&transitions, &[reward], 7).unwrap_err();
    assert!(matches!(err, ParseError::UnknownInitialState(7)));
}

#[test]
fn rejects_reward_for_unknown_state_action() {
    let dir = scratch_dir("bad-state-action");
    let transitions = dir.join("transitions.txt");
    fs::write(&transitions, "0 0 0 1.0\n").unwrap();
    let reward = dir.join("reward.txt");
    // action 1 never appears in the transition file.
    fs::write(&reward, "0 1 0 1.0\n").unwrap();

    let err = parse_explicit_mdp(&transitions, &[reward], 0).unwrap_err();
    assert!(matches!(err, ParseError::UnknownStateAction { state: 0, action: 1, .. }));
}

#[test]
fn rejects_malformed_lines() {
    let dir = scratch_dir("malformed");
    let transitions = dir.join("transitions.txt");
    fs::write(&transitions, "0 0 0\n").unwrap();
    let reward = dir.join("reward.txt");
    fs::write(&reward, "0 0 0 1.0\n").unwrap();

    let err = parse_explicit_mdp(&transitions, &[reward], 0).unwrap_err();
    assert!(matches!(err, ParseError::MalformedTriplet { .. }));
}
