#![forbid(unsafe_code)]

//! Core: the date adapter capability, the picker value model, and canonical
//! input events.

pub mod adapter;
#[cfg(feature = "chrono")]
pub mod chrono_adapter;
pub mod error;
pub mod event;
pub mod logging;
pub mod value;

pub use adapter::{DateAdapter, DateUnit};
#[cfg(feature = "chrono")]
pub use chrono_adapter::ChronoAdapter;
pub use error::ParseError;
pub use value::{
    DateRange, DateValue, PickerMode, PickerValue, RawDate, RawInput, SelectionPosition,
};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, trace_span, warn};
