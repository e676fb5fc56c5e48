//! Logging policy for the transition engine.
//!
//! A single ordered level gates two things at once: which lifecycle
//! diagnostics are emitted, and whether (and how large) the history ledger
//! is. Diagnostics are plain `"[category] message"` strings delivered to a
//! caller-supplied sink; without one they go through `tracing`.

use std::sync::Arc;

/// Verbosity levels, ordered `None < Minimal < Standard < Verbose`.
///
/// The level is fixed at engine construction. Besides gating diagnostics it
/// also decides the history ledger capacity, per the table:
///
/// | Level    | History cap | Validation | State change | Effect count |
/// |----------|-------------|------------|--------------|--------------|
/// | None     | 0 (absent)  | no         | no           | no           |
/// | Minimal  | 10          | no         | yes          | no           |
/// | Standard | 100         | yes        | yes          | no           |
/// | Verbose  | 100         | yes        | yes          | yes          |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// No diagnostics, no history.
    None,
    /// State-change diagnostics only; short history.
    Minimal,
    /// Validation and state-change diagnostics; full history.
    Standard,
    /// Everything, including effect counts.
    Verbose,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Minimal
    }
}

impl LogLevel {
    /// History ledger capacity for this level; zero means the ledger is
    /// absent entirely.
    pub fn history_capacity(self) -> usize {
        match self {
            Self::None => 0,
            Self::Minimal => 10,
            Self::Standard | Self::Verbose => 100,
        }
    }

    /// Whether validation outcomes are emitted.
    pub fn logs_validation(self) -> bool {
        matches!(self, Self::Standard | Self::Verbose)
    }

    /// Whether successful state changes are emitted.
    pub fn logs_state_change(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether effect counts are emitted after a successful transition.
    pub fn logs_effect_count(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Caller-supplied diagnostic receiver.
///
/// Invoked synchronously with the already-formatted `"[category] message"`
/// line. The sink must not panic; the engine performs no retry or
/// suppression on its behalf.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Formats and routes diagnostics for one engine instance.
///
/// There is no hidden global sink: each engine carries its own `Logger`
/// built from explicit configuration. Without a custom sink, lines are
/// emitted through `tracing` at info level.
#[derive(Clone)]
pub struct Logger {
    category: String,
    level: LogLevel,
    sink: Option<LogSink>,
}

impl Logger {
    pub fn new(category: impl Into<String>, level: LogLevel, sink: Option<LogSink>) -> Self {
        Self {
            category: category.into(),
            level,
            sink,
        }
    }

    /// The level this logger was configured with.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The category label prefixed to every diagnostic.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Deliver one diagnostic line, `"[category] message"`.
    pub fn emit(&self, message: &str) {
        let line = format!("[{}] {}", self.category, message);
        match &self.sink {
            Some(sink) => sink(&line),
            None => tracing::info!(target: "gearshift", "{}", line),
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("level", &self.level)
            .field("sink", &self.sink.as_ref().map(|_| "custom"))
            .finish()
    }
}
