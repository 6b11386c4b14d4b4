#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the tracing macros used across datepick when the `tracing`
//! feature is enabled. Without the feature, no-op macros with the same names
//! are exported at the crate root, so call sites stay free of `cfg` noise.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, trace_span, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op trace_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// A no-op span for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    /// Mirror of `tracing::Span::entered` (does nothing).
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
pub struct NoopGuard;

/// Failure to install the JSON subscriber.
#[cfg(feature = "tracing-json")]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidFilter {
        /// The directive as given.
        directive: String,
        /// Parser message.
        reason: String,
    },
    /// A global subscriber was already installed.
    #[error("a global tracing subscriber is already set")]
    SubscriberAlreadySet,
}

/// Install a global JSON `tracing` subscriber filtered by `directive`
/// (same syntax as `RUST_LOG`, e.g. `"datepick_widgets=debug"`).
///
/// Hosts that already own a subscriber should skip this and attach their
/// own layers instead.
#[cfg(feature = "tracing-json")]
pub fn install_json_subscriber(directive: &str) -> Result<(), LoggingError> {
    let filter = tracing_subscriber::EnvFilter::try_new(directive).map_err(|err| {
        LoggingError::InvalidFilter {
            directive: directive.to_string(),
            reason: err.to_string(),
        }
    })?;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    tracing::info!(directive, "JSON logging installed");
    Ok(())
}
