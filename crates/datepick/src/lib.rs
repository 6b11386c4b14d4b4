#![forbid(unsafe_code)]

//! Datepick public facade crate.
//!
//! Re-exports the value model and adapter capability from `datepick-core`
//! and the picker controller from `datepick-widgets`, plus a prelude for
//! day-to-day usage.

// --- Core re-exports -------------------------------------------------------

#[cfg(feature = "chrono")]
pub use datepick_core::ChronoAdapter;
pub use datepick_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PasteEvent};
pub use datepick_core::{
    DateAdapter, DateRange, DateUnit, DateValue, ParseError, PickerMode, PickerValue, RawDate,
    RawInput, SelectionPosition,
};

// --- Widget re-exports -----------------------------------------------------

pub use datepick_widgets::{
    ConfigError, DatePicker, DateValidationError, DayProps, FocusRegistry, InputMode, InputProps,
    Keystroke, MaskTemplate, Notifications, OpenReason, OverlayProps, PickerConfig,
    PickerNotification, PickerPhase, PickerStateSnapshot, RangeValidation, SlotId,
    ValidationReport, ValidationRules, WrapperProps,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for datepick.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Text could not be parsed with a format.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The picker configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for datepick APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    #[cfg(feature = "chrono")]
    pub use crate::ChronoAdapter;
    pub use crate::{
        DateAdapter, DatePicker, DateValidationError, DateValue, Error, Keystroke, PickerConfig,
        PickerMode, PickerNotification, PickerValue, Result, SelectionPosition, SlotId,
        ValidationReport,
    };

    pub use crate::{core, widgets};
}

pub use datepick_core as core;
pub use datepick_widgets as widgets;
