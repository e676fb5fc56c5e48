//! Engine error types.

use thiserror::Error;

/// A transition was rejected by its own validity predicate.
///
/// This is the only failure `process` can produce. It is fully
/// recoverable: the engine's current state and history are exactly as
/// they were before the call, and the caller may retry with a different
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid transition from '{from}' to '{to}'")]
pub struct InvalidTransition {
    /// Name of the state the engine was in.
    pub from: String,
    /// Name of the rejected target state.
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_both_states() {
        let err = InvalidTransition {
            from: "Red".to_string(),
            to: "Yellow".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid transition from 'Red' to 'Yellow'");
    }
}
