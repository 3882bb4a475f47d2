use std::time::Duration;

use movi_core::Bounds;

/// What a solver invocation hands back: the best-effort bound at the initial
/// state plus enough bookkeeping for the logging collaborator to report on.
///
/// `converged = false` is the Nonconvergence failure mode (§7): non-fatal,
/// the bound is still meaningful, just not within the requested precision.
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub bound: Bounds,
    pub converged: bool,
    pub iterations: u64,
    pub elapsed: Duration,
}
