//! The transition contract.
//!
//! A transition bundles a target state, an effect payload, and the logic
//! that decides whether the move is legal from a given current state. The
//! engine drives the contract; implementors never call `apply` themselves.

use super::state::State;
use std::fmt::Debug;

/// Contract every transition value must satisfy.
///
/// Validity and effect computation are deliberately separate methods:
/// guard logic lives in [`is_valid`](Transition::is_valid), effect
/// computation in [`apply`](Transition::apply). This lets a transition
/// table express guards without entangling them with effect production.
///
/// The engine guarantees `apply` is only invoked after `is_valid` returned
/// `true` for the same current state. Implementations of both must be pure:
/// deterministic for the same `(current, target)` pair and free of side
/// effects.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{State, Transition};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Light { Red, Green, Yellow }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "Red",
///             Self::Green => "Green",
///             Self::Yellow => "Yellow",
///         }
///     }
/// }
///
/// struct Switch {
///     to: Light,
/// }
///
/// impl Transition<Light> for Switch {
///     type Effect = String;
///
///     fn target(&self) -> Light {
///         self.to.clone()
///     }
///
///     fn effect(&self) -> String {
///         format!("lamp set to {}", self.to.name())
///     }
///
///     fn is_valid(&self, current: &Light) -> bool {
///         matches!(
///             (current, &self.to),
///             (Light::Red, Light::Green)
///                 | (Light::Green, Light::Yellow)
///                 | (Light::Yellow, Light::Red)
///         )
///     }
///
///     fn apply(&self, _current: &Light) -> Vec<String> {
///         vec![self.effect()]
///     }
/// }
/// ```
pub trait Transition<S: State> {
    /// Opaque payload describing a side effect for the caller to carry out.
    ///
    /// `'static` because effects cross the serialized wrapper's channels.
    type Effect: Clone + Debug + Send + 'static;

    /// The state this transition moves to.
    fn target(&self) -> S;

    /// The effect payload this transition carries.
    fn effect(&self) -> Self::Effect;

    /// Pure predicate: is this transition legal from `current`?
    fn is_valid(&self, current: &S) -> bool;

    /// Compute the effects this transition emits when taken from `current`.
    ///
    /// Must only be called after `is_valid` returned `true` for the same
    /// state pair; the engine enforces that ordering.
    fn apply(&self, current: &S) -> Vec<Self::Effect>;
}
