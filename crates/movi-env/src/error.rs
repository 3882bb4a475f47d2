use thiserror::Error;

/// Recoverable failures at the environment boundary.
///
/// Geometric precondition violations panic inside `movi-core` instead; those
/// are programming errors, not something a caller recovers from.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("transition probabilities for state {state} action {action} sum to {sum}, expected 1±eps")]
    TransitionNotNormalized { state: usize, action: usize, sum: f64 },
    #[error("state {0} has no actions and is not a valid self-loop terminal")]
    DegenerateActionSet(usize),
}
