//! Warning emission seam for the resolvers.

/// Trait for emitting fire-and-forget warnings.
///
/// Injectable so tests can capture the one warning the Unix fallback path
/// emits without touching global subscriber state.
pub trait WarnLogger: Send + Sync {
    /// Emits a warning message. No return value is consulted.
    fn warn(&self, message: &str);
}

/// Production [`WarnLogger`] forwarding to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarn {
    _private: (),
}

impl TracingWarn {
    /// Creates a new tracing-backed warn logger.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl WarnLogger for TracingWarn {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
