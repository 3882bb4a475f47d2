//! Reader for the explicit whitespace-triplet MDP file format (§6 of the
//! interface contract this crate implements): a transition file of
//! `source action successor probability` lines, and one or more reward files
//! of `source action successor reward_value` lines — one file per objective.
//!
//! Rewards are collapsed from per-successor triplets to per-`(state, action)`
//! expectations against the transition distribution; nothing downstream ever
//! sees a `(s, a, s')`-indexed reward.

pub mod error;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use movi_env::InMemoryMdp;

pub use error::ParseError;

type Sas = (usize, usize, usize);

fn parse_triplet(path: &str, line_no: usize, line: &str) -> Result<(usize, usize, usize, f64), ParseError> {
    let mut tokens = line.split_whitespace();
    let mut next_usize = |kind: &'static str| -> Result<usize, ParseError> {
        let token = tokens.next().ok_or_else(|| ParseError::MalformedTriplet {
            path: path.to_string(),
            line: line_no,
            text: line.to_string(),
        })?;
        token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
            path: path.to_string(),
            line: line_no,
            token: token.to_string(),
            kind,
        })
    };
    let source = next_usize("state id")?;
    let action = next_usize("action id")?;
    let successor = next_usize("successor state id")?;
    let value_token = tokens.next().ok_or_else(|| ParseError::MalformedTriplet {
        path: path.to_string(),
        line: line_no,
        text: line.to_string(),
    })?;
    let value = value_token.parse::<f64>().map_err(|_| ParseError::InvalidToken {
        path: path.to_string(),
        line: line_no,
        token: value_token.to_string(),
        kind: "probability or reward value",
    })?;
    if tokens.next().is_some() {
        return Err(ParseError::MalformedTriplet { path: path.to_string(), line: line_no, text: line.to_string() });
    }
    Ok((source, action, successor, value))
}

fn read_triplets(path: &Path) -> Result<Vec<(usize, usize, usize, f64)>, ParseError> {
    let path_str = path.display().to_string();
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_triplet(&path_str, i + 1, line))
        .collect()
}

/// Parses the transition file and every reward file, collapses rewards to
/// `(state, action)` expectations, and builds an [`InMemoryMdp`].
///
/// `reward_paths[i]` supplies objective `i`'s rewards; the resulting MDP's
/// `objective_dim()` equals `reward_paths.len()`.
pub fn parse_explicit_mdp(
    transition_path: impl AsRef<Path>,
    reward_paths: &[impl AsRef<Path>],
    initial_state: usize,
) -> Result<InMemoryMdp, ParseError> {
    let dim = reward_paths.len().max(1);
    let transition_path = transition_path.as_ref();
    let transitions = read_triplets(transition_path)?;

    let mut by_state_action: HashMap<(usize, usize), Vec<(usize, f64)>> = HashMap::new();
    for (s, a, succ, p) in transitions {
        by_state_action.entry((s, a)).or_default().push((succ, p));
    }
    for (&(s, a), successors) in &by_state_action {
        let sum: f64 = successors.iter().map(|(_, p)| p).sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ParseError::TransitionNotNormalized { state: s, action: a, sum });
        }
    }

    let mut reward_triplets: HashMap<Sas, Vec<f64>> = HashMap::new();
    for (index, reward_path) in reward_paths.iter().enumerate() {
        let reward_path = reward_path.as_ref();
        let path_str = reward_path.display().to_string();
        for (s, a, succ, r) in read_triplets(reward_path)? {
            if !by_state_action.contains_key(&(s, a)) {
                return Err(ParseError::UnknownStateAction { path: path_str, state: s, action: a });
            }
            let entry = reward_triplets.entry((s, a, succ)).or_insert_with(|| vec![0.0; dim]);
            entry[index] = r;
        }
    }

    let mut entries = Vec::with_capacity(by_state_action.len());
    let mut reward_min = vec![f64::INFINITY; dim];
    let mut reward_max = vec![f64::NEG_INFINITY; dim];
    for ((s, a), successors) in by_state_action {
        let mut expected = vec![0.0; dim];
        for (succ, p) in &successors {
            if let Some(r) = reward_triplets.get(&(s, a, *succ)) {
                for i in 0..dim {
                    expected[i] += p * r[i];
                }
            }
        }
        for i in 0..dim {
            reward_min[i] = reward_min[i].min(expected[i]);
            reward_max[i] = reward_max[i].max(expected[i]);
        }
        entries.push((s, a, expected, successors));
    }

    if !entries.iter().any(|(s, _, _, _)| *s == initial_state) {
        return Err(ParseError::UnknownInitialState(initial_state));
    }

    info!(
        "parsed {} ({} state-action pairs, {dim} objectives)",
        transition_path.display(),
        entries.len()
    );
    Ok(InMemoryMdp::new(initial_state, dim, entries, reward_min, reward_max))
}
