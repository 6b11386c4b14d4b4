#![forbid(unsafe_code)]

//! Editable slots and the focus target registry.
//!
//! The controller never holds on to host widgets. It names slots; the host
//! registers an opaque handle per slot and resolves focus requests
//! ([`PickerNotification::FocusSlot`](crate::picker::PickerNotification))
//! through the registry.

use datepick_core::{PickerMode, SelectionPosition};

/// One editable text field of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    /// The only field of a single-date picker.
    Single,
    /// Start field of a range picker.
    Start,
    /// End field of a range picker.
    End,
}

impl SlotId {
    /// The range field editing `position`.
    #[must_use]
    pub const fn for_position(position: SelectionPosition) -> Self {
        match position {
            SelectionPosition::Start => Self::Start,
            SelectionPosition::End => Self::End,
        }
    }

    /// The range side this slot edits. A single slot edits the start side.
    #[must_use]
    pub const fn position(self) -> SelectionPosition {
        match self {
            Self::Single | Self::Start => SelectionPosition::Start,
            Self::End => SelectionPosition::End,
        }
    }

    /// Whether this slot exists in `mode`.
    #[must_use]
    pub const fn belongs_to(self, mode: PickerMode) -> bool {
        matches!(
            (self, mode),
            (Self::Single, PickerMode::Single) | (Self::Start | Self::End, PickerMode::Range)
        )
    }

    /// The slots of `mode`, in tab order.
    #[must_use]
    pub const fn all(mode: PickerMode) -> &'static [SlotId] {
        match mode {
            PickerMode::Single => &[Self::Single],
            PickerMode::Range => &[Self::Start, Self::End],
        }
    }

    /// First slot of `mode`; the overlay anchors to it.
    #[must_use]
    pub const fn first(mode: PickerMode) -> Self {
        match mode {
            PickerMode::Single => Self::Single,
            PickerMode::Range => Self::Start,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Single => 0,
            Self::Start => 1,
            Self::End => 2,
        }
    }
}

/// Slot → host handle mapping.
#[derive(Debug, Clone)]
pub struct FocusRegistry<H> {
    handles: [Option<H>; 3],
}

impl<H> Default for FocusRegistry<H> {
    fn default() -> Self {
        Self {
            handles: [None, None, None],
        }
    }
}

impl<H> FocusRegistry<H> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` for `slot`, returning the handle it replaces.
    pub fn register(&mut self, slot: SlotId, handle: H) -> Option<H> {
        self.handles[slot.index()].replace(handle)
    }

    /// Remove and return the handle for `slot`.
    pub fn unregister(&mut self, slot: SlotId) -> Option<H> {
        self.handles[slot.index()].take()
    }

    /// Handle registered for `slot`.
    #[must_use]
    pub fn resolve(&self, slot: SlotId) -> Option<&H> {
        self.handles[slot.index()].as_ref()
    }

    /// Forget every handle.
    pub fn clear(&mut self) {
        self.handles = [None, None, None];
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.iter().filter(|h| h.is_some()).count()
    }

    /// No handle registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
