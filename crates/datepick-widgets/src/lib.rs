#![forbid(unsafe_code)]

//! Date picker widgets: masked input, validation, overlay policy, and the
//! picker state controller.

pub mod config;
pub mod focus;
pub mod mask;
pub mod overlay;
pub mod picker;
pub mod validation;

pub use config::{ConfigError, DEFAULT_FORMAT, DEFAULT_MASK, InputMode, PickerConfig, SharedPredicate};
pub use focus::{FocusRegistry, SlotId};
pub use mask::{EditBuffer, Keystroke, MaskOutput, MaskState, MaskTemplate, PlainState, apply_keystroke};
pub use overlay::{
    OpenReason, OpenState, OverlayAction, OverlayConfig, OverlayCoordinator, OverlayDecision, decide,
};
pub use picker::{
    DatePicker, DayProps, InputProps, Notifications, OverlayProps, PickerNotification, PickerPhase,
    PickerStateSnapshot, ValueSource, WrapperProps,
};
pub use validation::{
    DateValidationError, RangeValidation, ValidationReport, ValidationRules, is_day_disabled, validate,
    validate_date, validate_range,
};
