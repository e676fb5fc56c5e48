//! Persistence collaborator for transition engines.
//!
//! The engine talks to storage through the narrow [`StateStore`] key-value
//! byte contract and nothing else. Serialization uses `bincode`; keys are
//! `"{prefix}.{persistence_key}"`. Restoring a state deliberately bypasses
//! transition validation, it is a restore, not a transition.

use crate::core::State;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors owned by the persistence collaborator.
///
/// None of these are ever raised by `process`; they surface only from
/// `persist_state` / `load_persisted_state`.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The engine was built without a `PersistenceConfig`.
    #[error("Persistence not configured for this engine")]
    NotConfigured,

    /// The backing store rejected a read or write.
    #[error("Store operation failed: {0}")]
    Store(String),

    /// Encoding the current state to bytes failed.
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// Decoding a stored state from bytes failed.
    #[error("Deserialization failed: {0}")]
    Deserialize(String),
}

/// A state that knows its own storage key.
///
/// Implementing this unlocks `persist_state` / `load_persisted_state` on
/// the engine. The key is combined with the configured prefix as
/// `"{prefix}.{key}"`.
pub trait PersistentState: State {
    /// Storage key for this state value, without the prefix.
    fn persistence_key(&self) -> &str;
}

/// Narrow key-value byte store contract the engine persists through.
///
/// Implementations decide where bytes live (memory, disk, a database);
/// the engine only ever calls `get` and `set`.
pub trait StateStore: Send + Sync {
    /// Fetch the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), PersistError>;
}

/// Configuration enabling the persistence collaborator on an engine.
#[derive(Clone)]
pub struct PersistenceConfig {
    prefix: String,
    store: Arc<dyn StateStore>,
}

impl PersistenceConfig {
    pub fn new(prefix: impl Into<String>, store: Arc<dyn StateStore>) -> Self {
        Self {
            prefix: prefix.into(),
            store,
        }
    }

    /// Full storage key for a state: `"{prefix}.{key}"`.
    pub fn key_for(&self, state_key: &str) -> String {
        format!("{}.{}", self.prefix, state_key)
    }

    pub fn store(&self) -> &dyn StateStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for PersistenceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceConfig")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// In-process `StateStore` backed by a mutex-guarded map.
///
/// Useful for tests and demos; real deployments supply their own store.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, PersistError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| PersistError::Store(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<(), PersistError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| PersistError::Store(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
