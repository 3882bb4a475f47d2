//! The `Environment` contract, the `EnvWrapper` discovery/bound-cache layer
//! sitting in front of it, and a handful of built-in explicit-MDP fixtures.

pub mod environment;
pub mod error;
pub mod fixtures;
pub mod record;
pub mod wrapper;

pub use environment::{sample_successor, ActionId, Environment, StateId};
pub use error::EnvError;
pub use fixtures::{five_state_mdp, two_state_mdp, InMemoryMdp};
pub use record::StateRecord;
pub use wrapper::{Direction, EnvWrapper};
