//! Bounded ledger of visited states.
//!
//! The ledger is a fixed-capacity ring: insertion-ordered, oldest-first,
//! with FIFO eviction once full. Capacity is decided once at construction
//! from the logging level and never changes afterwards.

use super::state::State;
use std::collections::VecDeque;

/// Bounded, insertion-ordered record of visited states.
///
/// Once `capacity` entries are held, recording another state evicts the
/// oldest entry first. Eviction is strictly FIFO; there is no recency or
/// priority logic.
///
/// # Example
///
/// ```rust
/// use gearshift::core::{HistoryLedger, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step { A, B, C }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::A => "A",
///             Self::B => "B",
///             Self::C => "C",
///         }
///     }
/// }
///
/// let mut ledger = HistoryLedger::with_capacity(2);
/// ledger.record(Step::A);
/// ledger.record(Step::B);
/// ledger.record(Step::C); // evicts A
///
/// assert_eq!(ledger.states(), vec![Step::B, Step::C]);
/// ```
#[derive(Clone, Debug)]
pub struct HistoryLedger<S: State> {
    entries: VecDeque<S>,
    capacity: usize,
}

impl<S: State> HistoryLedger<S> {
    /// Create an empty ledger holding at most `capacity` states.
    ///
    /// A zero capacity yields a ledger that records nothing; the engine
    /// never constructs one, it omits the ledger entirely instead.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a visited state, evicting the oldest entry when full.
    pub fn record(&mut self, state: S) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(state);
    }

    /// The recorded states, oldest first.
    pub fn states(&self) -> Vec<S> {
        self.entries.iter().cloned().collect()
    }

    /// Number of states currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no states.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed capacity this ledger was built with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
