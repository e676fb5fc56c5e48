//! Engine configuration.

use crate::logging::{LogLevel, LogSink};
use crate::persist::PersistenceConfig;

/// Explicit configuration for one engine instance.
///
/// There are no hidden global defaults: everything an engine needs beyond
/// its initial state is carried here and fixed at construction.
///
/// # Example
///
/// ```rust
/// use gearshift::engine::EngineConfig;
/// use gearshift::logging::LogLevel;
///
/// let config = EngineConfig::new()
///     .category("checkout")
///     .level(LogLevel::Verbose);
/// ```
#[derive(Clone, Default)]
pub struct EngineConfig {
    category: Option<String>,
    level: LogLevel,
    sink: Option<LogSink>,
    persistence: Option<PersistenceConfig>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label prefixed to every diagnostic. Defaults to `"default"`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Logging level; gates diagnostics and history capacity.
    /// Defaults to [`LogLevel::Minimal`].
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Custom diagnostic receiver. Without one, diagnostics go through
    /// `tracing` at info level.
    pub fn sink(mut self, sink: LogSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Enable the persistence collaborator.
    pub fn persistence(mut self, persistence: PersistenceConfig) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub(crate) fn into_parts(self) -> (String, LogLevel, Option<LogSink>, Option<PersistenceConfig>) {
        (
            self.category.unwrap_or_else(|| "default".to_string()),
            self.level,
            self.sink,
            self.persistence,
        )
    }
}

impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("category", &self.category)
            .field("level", &self.level)
            .field("sink", &self.sink.as_ref().map(|_| "custom"))
            .field("persistence", &self.persistence)
            .finish()
    }
}
