//! Core transition-engine types.
//!
//! This module contains the pure leaves of the crate:
//! - State definitions via the `State` trait
//! - The `Transition` contract (validity and effect computation)
//! - The bounded `HistoryLedger` of visited states
//!
//! Nothing here performs I/O; the imperative shell lives in the sibling
//! `engine`, `persist`, and `serial` modules.

mod history;
mod state;
mod transition;

pub mod macros;

pub use history::HistoryLedger;
pub use state::State;
pub use transition::Transition;
