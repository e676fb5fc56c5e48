//! Core State trait for transition engine states.
//!
//! The engine treats states as opaque values: it compares them, names them
//! for diagnostics, and otherwise never looks inside.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states the transition engine can hold.
///
/// States are immutable values describing where the machine currently is.
/// The engine only ever clones, compares, and names them.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the history ledger
/// - `PartialEq`: states are compared by transition guards
/// - `Debug`: states show up in diagnostics and test failures
/// - `Serialize` + `Deserialize`: states can be persisted and restored
///
/// # Example
///
/// ```rust
/// use gearshift::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for diagnostics and error descriptions.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
