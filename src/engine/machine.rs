//! The transition engine: validation, effect production, state commit.

use crate::core::{HistoryLedger, State, Transition};
use crate::engine::config::EngineConfig;
use crate::engine::error::InvalidTransition;
use crate::logging::Logger;
use crate::persist::{PersistError, PersistenceConfig, PersistentState};

/// Engine holding exactly one live state at a time.
///
/// `process` is the only mutating operation: it checks the transition's
/// validity against the current state, and either rejects it leaving the
/// engine untouched, or computes the effects, records the move in the
/// history ledger, and commits the new state.
///
/// The engine itself does no locking; use [`SerialEngine`] to share one
/// instance across concurrent callers.
///
/// [`SerialEngine`]: crate::serial::SerialEngine
///
/// # Example
///
/// ```rust
/// use gearshift::engine::TransitionEngine;
/// use gearshift::core::{State, Transition};
/// use gearshift::state_enum;
///
/// state_enum! {
///     enum Light { Red, Green, Yellow }
/// }
///
/// struct Switch { to: Light }
///
/// impl Transition<Light> for Switch {
///     type Effect = String;
///
///     fn target(&self) -> Light { self.to.clone() }
///     fn effect(&self) -> String { format!("switch to {}", self.to.name()) }
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
///
/// let mut engine = TransitionEngine::new(Light::Red);
/// let effects = engine.process(&Switch { to: Light::Green }).unwrap();
/// assert_eq!(effects, vec!["switch to Green".to_string()]);
/// assert_eq!(engine.current_state(), &Light::Green);
/// ```
#[derive(Debug)]
pub struct TransitionEngine<S: State> {
    current: S,
    logger: Logger,
    history: Option<HistoryLedger<S>>,
    persistence: Option<PersistenceConfig>,
}

impl<S: State> TransitionEngine<S> {
    /// Create an engine with default configuration: category `"default"`,
    /// [`LogLevel::Minimal`](crate::logging::LogLevel::Minimal), no custom
    /// sink, no persistence.
    pub fn new(initial: S) -> Self {
        Self::with_config(initial, EngineConfig::new())
    }

    /// Create an engine with explicit configuration.
    ///
    /// When the logging level enables history, the ledger is seeded with
    /// the initial state.
    pub fn with_config(initial: S, config: EngineConfig) -> Self {
        let (category, level, sink, persistence) = config.into_parts();
        let capacity = level.history_capacity();
        let history = (capacity > 0).then(|| {
            let mut ledger = HistoryLedger::with_capacity(capacity);
            ledger.record(initial.clone());
            ledger
        });
        Self {
            current: initial,
            logger: Logger::new(category, level, sink),
            history,
            persistence,
        }
    }

    /// Process one candidate transition.
    ///
    /// On rejection the engine is left exactly as before the call; the
    /// error carries the names of both sides and nothing else. On success
    /// the target state is committed, the ledger updated, and the effects
    /// computed by the transition are returned verbatim.
    pub fn process<T: Transition<S>>(
        &mut self,
        transition: &T,
    ) -> Result<Vec<T::Effect>, InvalidTransition> {
        let target = transition.target();

        if self.logger.level().logs_validation() {
            self.logger.emit(&format!(
                "validating transition: {} -> {}",
                self.current.name(),
                target.name()
            ));
        }

        if !transition.is_valid(&self.current) {
            if self.logger.level().logs_validation() {
                self.logger.emit(&format!(
                    "invalid transition: {} -> {}",
                    self.current.name(),
                    target.name()
                ));
            }
            return Err(InvalidTransition {
                from: self.current.name().to_string(),
                to: target.name().to_string(),
            });
        }

        let effects = transition.apply(&self.current);

        if self.logger.level().logs_state_change() {
            self.logger.emit(&format!(
                "state changed: {} -> {}",
                self.current.name(),
                target.name()
            ));
        }
        if self.logger.level().logs_effect_count() {
            self.logger.emit(&format!("produced {} effect(s)", effects.len()));
        }

        if let Some(ledger) = &mut self.history {
            ledger.record(target.clone());
        }
        self.current = target;

        Ok(effects)
    }

    /// The state the engine currently holds.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Visited states, oldest first, starting with the initial state while
    /// it is still within capacity. `None` when logging is disabled.
    pub fn history(&self) -> Option<Vec<S>> {
        self.history.as_ref().map(HistoryLedger::states)
    }
}

impl<S: PersistentState> TransitionEngine<S> {
    /// Serialize the current state and write it to the configured store
    /// under `"{prefix}.{persistence_key}"`.
    pub fn persist_state(&self) -> Result<(), PersistError> {
        let config = self.persistence.as_ref().ok_or(PersistError::NotConfigured)?;
        let key = config.key_for(self.current.persistence_key());
        let bytes = bincode::serialize(&self.current)
            .map_err(|e| PersistError::Serialize(e.to_string()))?;
        config.store().set(&key, bytes)
    }

    /// Read a previously persisted state and, if one exists, overwrite the
    /// current state with it.
    ///
    /// Restoring bypasses transition validation: this is a restore, not a
    /// transition. A missing stored value is not an error; the call is a
    /// no-op and returns `Ok(false)`.
    pub fn load_persisted_state(&mut self) -> Result<bool, PersistError> {
        let config = self.persistence.as_ref().ok_or(PersistError::NotConfigured)?;
        let key = config.key_for(self.current.persistence_key());
        match config.store().get(&key)? {
            Some(bytes) => {
                self.current = bincode::deserialize(&bytes)
                    .map_err(|e| PersistError::Deserialize(e.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::persist::MemoryStore;
    use serde::{Deserialize, Serialize};
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Light {
        Red,
        Green,
        Yellow,
    }

    impl State for Light {
        fn name(&self) -> &str {
            match self {
                Self::Red => "Red",
                Self::Green => "Green",
                Self::Yellow => "Yellow",
            }
        }
    }

    impl PersistentState for Light {
        fn persistence_key(&self) -> &str {
            "light"
        }
    }

    struct Switch {
        to: Light,
    }

    impl Transition<Light> for Switch {
        type Effect = String;

        fn target(&self) -> Light {
            self.to.clone()
        }

        fn effect(&self) -> String {
            format!("switch to {}", self.to.name())
        }

        fn is_valid(&self, current: &Light) -> bool {
            matches!(
                (current, &self.to),
                (Light::Red, Light::Green)
                    | (Light::Green, Light::Yellow)
                    | (Light::Yellow, Light::Red)
            )
        }

        fn apply(&self, _current: &Light) -> Vec<String> {
            vec![self.effect()]
        }
    }

    #[test]
    fn valid_transition_commits_and_returns_effects() {
        let mut engine = TransitionEngine::new(Light::Red);
        let effects = engine.process(&Switch { to: Light::Green }).unwrap();
        assert_eq!(effects, vec!["switch to Green".to_string()]);
        assert_eq!(engine.current_state(), &Light::Green);
    }

    #[test]
    fn invalid_transition_leaves_engine_untouched() {
        let mut engine = TransitionEngine::new(Light::Red);
        let history_before = engine.history();

        let err = engine.process(&Switch { to: Light::Yellow }).unwrap_err();
        assert_eq!(err.from, "Red");
        assert_eq!(err.to, "Yellow");
        assert_eq!(engine.current_state(), &Light::Red);
        assert_eq!(engine.history(), history_before);
    }

    #[test]
    fn rejection_is_recoverable() {
        let mut engine = TransitionEngine::new(Light::Red);
        engine.process(&Switch { to: Light::Yellow }).unwrap_err();
        engine.process(&Switch { to: Light::Green }).unwrap();
        assert_eq!(engine.current_state(), &Light::Green);
    }

    #[test]
    fn history_is_seeded_with_initial_state() {
        let engine = TransitionEngine::new(Light::Red);
        assert_eq!(engine.history(), Some(vec![Light::Red]));
    }

    #[test]
    fn history_records_each_committed_state() {
        let mut engine = TransitionEngine::new(Light::Red);
        engine.process(&Switch { to: Light::Green }).unwrap();
        engine.process(&Switch { to: Light::Yellow }).unwrap();
        assert_eq!(
            engine.history(),
            Some(vec![Light::Red, Light::Green, Light::Yellow])
        );
    }

    #[test]
    fn history_is_absent_when_logging_disabled() {
        let config = EngineConfig::new().level(LogLevel::None);
        let mut engine = TransitionEngine::with_config(Light::Red, config);
        engine.process(&Switch { to: Light::Green }).unwrap();
        assert_eq!(engine.history(), None);
    }

    #[test]
    fn persist_without_config_is_an_error() {
        let engine = TransitionEngine::new(Light::Red);
        assert!(matches!(
            engine.persist_state(),
            Err(PersistError::NotConfigured)
        ));
    }

    #[test]
    fn persist_and_load_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        let store_handle: Arc<dyn crate::persist::StateStore> = store.clone();
        let config =
            EngineConfig::new().persistence(PersistenceConfig::new("fsm", store_handle));
        let mut engine = TransitionEngine::with_config(Light::Red, config.clone());

        engine.process(&Switch { to: Light::Green }).unwrap();
        engine.persist_state().unwrap();

        // A fresh engine starting over restores the persisted state,
        // bypassing transition validation.
        let mut restored = TransitionEngine::with_config(Light::Red, config);
        assert!(restored.load_persisted_state().unwrap());
        assert_eq!(restored.current_state(), &Light::Green);
    }

    #[test]
    fn load_with_nothing_stored_is_a_noop() {
        let config = EngineConfig::new()
            .persistence(PersistenceConfig::new("fsm", Arc::new(MemoryStore::new())));
        let mut engine = TransitionEngine::with_config(Light::Red, config);
        assert!(!engine.load_persisted_state().unwrap());
        assert_eq!(engine.current_state(), &Light::Red);
    }
}
