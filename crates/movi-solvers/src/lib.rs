//! BRTDP and CHVI value-iteration drivers sharing one update law (§4.5, §4.6).

pub mod brtdp;
pub mod chvi;
pub mod config;
pub mod heuristics;
pub mod prng;
pub mod result;
pub mod update;

pub use brtdp::BrtdpSolver;
pub use chvi::ChviSolver;
pub use config::{ActionSelectionHeuristic, Direction, ExplorationSettings, StateSelectionHeuristic};
pub use result::SolverResult;
