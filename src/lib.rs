//! Gearshift: a guarded finite-state transition engine.
//!
//! Gearshift decides whether a candidate transition is legal from the
//! current state, applies it, and returns the side effects the transition
//! produces. Along the way it can keep a bounded trail of visited states
//! and route diagnostics to a pluggable sink. It is an in-process building
//! block for anything modeled as discrete states with guarded transitions:
//! UI flows, protocol handshakes, workflow steps.
//!
//! # Core Concepts
//!
//! - **State**: opaque caller-supplied value, via the [`State`] trait
//! - **Transition**: target state + effect payload + validity predicate,
//!   via the [`Transition`] contract
//! - **Engine**: validates, produces effects, commits; the only failure is
//!   a rejected transition, which leaves the engine untouched
//! - **History**: bounded FIFO ledger of visited states, sized by the
//!   logging level
//! - **Serialized access**: [`SerialEngine`] funnels concurrent callers
//!   through one FIFO worker
//!
//! # Example
//!
//! ```rust
//! use gearshift::{state_enum, Transition, TransitionEngine};
//!
//! state_enum! {
//!     enum Light { Red, Green, Yellow }
//! }
//!
//! struct Switch { to: Light }
//!
//! impl Transition<Light> for Switch {
//!     type Effect = String;
//!
//!     fn target(&self) -> Light { self.to.clone() }
//!     fn effect(&self) -> String { format!("go {}", gearshift::State::name(&self.to)) }
//!
//!     fn is_valid(&self, current: &Light) -> bool {
//!         matches!(
//!             (current, &self.to),
//!             (Light::Red, Light::Green)
//!                 | (Light::Green, Light::Yellow)
//!                 | (Light::Yellow, Light::Red)
//!         )
//!     }
//!
//!     fn apply(&self, _current: &Light) -> Vec<String> {
//!         vec![self.effect()]
//!     }
//! }
//!
//! let mut engine = TransitionEngine::new(Light::Red);
//! assert!(engine.process(&Switch { to: Light::Yellow }).is_err());
//! let effects = engine.process(&Switch { to: Light::Green }).unwrap();
//! assert_eq!(effects, vec!["go Green".to_string()]);
//! ```

pub mod core;
pub mod engine;
pub mod logging;
pub mod persist;
pub mod render;
pub mod serial;

// Re-export commonly used types
pub use crate::core::{HistoryLedger, State, Transition};
pub use crate::engine::{EngineConfig, InvalidTransition, TransitionEngine};
pub use crate::logging::{LogLevel, LogSink};
pub use crate::persist::{
    MemoryStore, PersistError, PersistenceConfig, PersistentState, StateStore,
};
pub use crate::render::{render, DiagramFormat};
pub use crate::serial::SerialEngine;
