use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{path}:{line}: expected a triplet of whitespace-separated tokens, got {text:?}")]
    MalformedTriplet { path: String, line: usize, text: String },

    #[error("{path}:{line}: token {token:?} is not a valid {kind}")]
    InvalidToken { path: String, line: usize, token: String, kind: &'static str },

    #[error("state {state} action {action}: transition probabilities sum to {sum}, expected 1±eps")]
    TransitionNotNormalized { state: usize, action: usize, sum: f64 },

    #[error("no transitions recorded for declared initial state {0}")]
    UnknownInitialState(usize),

    #[error("reward file {path} gives a reward for state {state} action {action}, but the transition file records no such state-action pair")]
    UnknownStateAction { path: String, state: usize, action: usize },
}
