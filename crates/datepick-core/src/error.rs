#![forbid(unsafe_code)]

//! Error types raised by date adapters.
//!
//! These are programmer/configuration faults or raw parse failures. User
//! input that does not form a date never surfaces as an `Err` from a picker;
//! it becomes [`DateValue::Invalid`](crate::value::DateValue::Invalid) plus
//! an `invalidDate` validation result.

/// Failure to turn text into a date, or to understand a format string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("cannot parse an empty string")]
    Empty,

    /// The text does not describe a date in the given format.
    #[error("`{text}` does not match format `{format}`")]
    Mismatch {
        /// Input text.
        text: String,
        /// Format the text was checked against.
        format: String,
    },

    /// The format string contains a token the adapter does not understand.
    #[error("unsupported token `{token}` in format `{format}`")]
    UnsupportedToken {
        /// Offending token.
        token: String,
        /// Full format string.
        format: String,
    },
}
