#![forbid(unsafe_code)]

//! Read-only projections handed to the presentation layer.

use datepick_core::{PickerMode, PickerValue, SelectionPosition};

use crate::focus::SlotId;
use crate::overlay::OpenReason;
use crate::validation::{DateValidationError, ValidationReport};

/// Controller state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerPhase {
    /// Overlay hidden.
    Closed,
    /// Overlay shown for a single-date picker.
    OpenSingle,
    /// Overlay shown, range start being edited.
    OpenEditingStart,
    /// Overlay shown, range end being edited.
    OpenEditingEnd,
}

impl PickerPhase {
    /// Whether the overlay is shown.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// The externally observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerStateSnapshot<D> {
    /// Committed value.
    pub value: PickerValue<D>,
    /// Overlay visibility.
    pub open: bool,
    /// Range side the next edit affects.
    pub selection_position: SelectionPosition,
    /// Last validation result delivered to the host.
    pub validation: ValidationReport,
}

/// Props for one text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// The field.
    pub slot: SlotId,
    /// Text to show.
    pub display_text: String,
    /// Cursor within `display_text`.
    pub cursor: usize,
    /// Hint shown while empty (the mask or the format).
    pub placeholder: String,
    /// Error to show on this field.
    pub error: Option<DateValidationError>,
    /// Next edit or calendar click lands in this field.
    pub active: bool,
}

/// Props for the overlay chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayProps<'a, H> {
    /// Whether to show the overlay.
    pub open: bool,
    /// Why it is open.
    pub reason: OpenReason,
    /// Host handle of the field the overlay anchors to.
    pub anchor: Option<&'a H>,
}

/// Props for the layout wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperProps {
    /// Single or range.
    pub mode: PickerMode,
    /// Current phase.
    pub phase: PickerPhase,
    /// Range side being edited.
    pub selection_position: SelectionPosition,
    /// The committed value fails validation.
    pub invalid: bool,
}

/// Props for one calendar day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayProps {
    /// Not selectable.
    pub disabled: bool,
    /// The day is the single value or one end of the range.
    pub selected: bool,
    /// The day lies within a complete range (ends included).
    pub in_range: bool,
    /// The day is the range start.
    pub range_start: bool,
    /// The day is the range end.
    pub range_end: bool,
    /// The day is today.
    pub today: bool,
    /// Range side a click on this day would set.
    pub selection_position: SelectionPosition,
}
