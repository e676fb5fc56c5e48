//! The transition engine and its configuration.
//!
//! The engine is the imperative shell around the pure `core` types: it
//! drives the `Transition` contract against the current state, commits on
//! success, and raises [`InvalidTransition`] on rejection. All diagnostics
//! and history behavior are governed by the configured logging level.

mod config;
mod error;
mod machine;

pub use config::EngineConfig;
pub use error::InvalidTransition;
pub use machine::TransitionEngine;
