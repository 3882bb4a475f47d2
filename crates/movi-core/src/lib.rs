//! Vector algebra, the convex Pareto-curve representation, and the `Bounds`
//! pair used to approximate achievable multi-objective returns.
//!
//! Every curve operation here assumes objectives are oriented so that
//! "larger is better" on every axis; reward-sign orientation for minimized
//! objectives happens at the environment boundary, not in this crate.

pub mod bounds;
pub mod curve;
pub mod vector;

pub use bounds::Bounds;
pub use curve::{ccw, minkowski_sum, ParetoCurve, Point};
