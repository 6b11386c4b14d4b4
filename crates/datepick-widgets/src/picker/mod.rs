#![forbid(unsafe_code)]

//! Date picker state controller.
//!
//! [`DatePicker`] is the single writer of the picker state: the committed
//! value, the overlay state, the range side being edited, and the per-field
//! edit buffers. Every handler returns the notifications it produced, in
//! order, as a `Vec<PickerNotification>`.
//!
//! # Usage
//!
//! ```ignore
//! let mut picker = DatePicker::new(ChronoAdapter::new(), PickerConfig::default(), PickerMode::Range)?;
//! picker.focus_input(SlotId::Start);
//! for c in "01052023".chars() {
//!     for note in picker.keystroke(SlotId::Start, Keystroke::Char(c)) {
//!         match note {
//!             PickerNotification::Error(report) => show_errors(report),
//!             PickerNotification::Change(value) => store(value),
//!             PickerNotification::FocusSlot(slot) => focus(registry.resolve(slot)),
//!             _ => {}
//!         }
//!     }
//! }
//! ```
//!
//! # Invariants
//!
//! 1. `Change` is emitted at most once per handler call and always carries
//!    the whole value, never a half-updated range.
//! 2. Every `Change` is immediately preceded by the `Error` for the same
//!    value, so consumers never see a value without its validation result.
//! 3. Incomplete buffers never reach the parser and never emit anything.
//! 4. A candidate whose own side fails validation is echoed on screen but
//!    not committed.
//! 5. A host value that differs from the current one always wins over
//!    in-progress edits and resets editing to the start side.
//! 6. A host value equal to the current one (an echo of a controlled
//!    commit) keeps the side being edited and any buffer already showing
//!    the committed value.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Slot that does not exist in the picker's mode | Logged at `warn`, ignored |
//! | Host value of the wrong mode | Logged at `warn`, ignored |
//! | Keystroke that changes nothing | No notifications |
//! | Dismiss with uncommitted text | Text reset to the committed value, no notifications but `Close` |

mod props;
mod source;

pub use props::{
    DayProps, InputProps, OverlayProps, PickerPhase, PickerStateSnapshot, WrapperProps,
};
pub use source::ValueSource;

use datepick_core::event::{Event, KeyCode, KeyEventKind};
use datepick_core::{DateAdapter, DateValue, PickerMode, PickerValue, SelectionPosition};

use crate::config::{ConfigError, InputMode, PickerConfig};
use crate::focus::{FocusRegistry, SlotId};
use crate::mask::{EditBuffer, Keystroke};
use crate::overlay::{OverlayAction, OverlayConfig, OverlayCoordinator};
use crate::validation::{ValidationReport, is_day_disabled, validate, validate_date};

/// Something the host should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerNotification<D> {
    /// Validation result for the value just committed or rejected.
    Error(ValidationReport),
    /// The committed value changed.
    Change(PickerValue<D>),
    /// The overlay opened (or, when controlled, asks to open).
    Open,
    /// The overlay closed (or, when controlled, asks to close).
    Close,
    /// The overlay closed on a committed value.
    Accept(PickerValue<D>),
    /// Move keyboard focus to a field.
    FocusSlot(SlotId),
}

/// Notifications produced by one handler call.
pub type Notifications<D> = Vec<PickerNotification<D>>;

/// Date or date-range picker controller.
///
/// `H` is the host's focus handle type; see [`FocusRegistry`].
pub struct DatePicker<A: DateAdapter, H = ()> {
    adapter: A,
    config: PickerConfig<A::Date>,
    input_mode: InputMode,
    mode: PickerMode,
    source: ValueSource<PickerValue<A::Date>>,
    overlay: OverlayCoordinator,
    selection: SelectionPosition,
    /// In-progress text per side (`[start, end]`; single uses the first).
    buffers: [Option<EditBuffer>; 2],
    /// Last validation result delivered.
    report: ValidationReport,
    /// Value when the overlay last opened, for `cancel`.
    value_at_open: Option<PickerValue<A::Date>>,
    focus: FocusRegistry<H>,
}

impl<A: DateAdapter> DatePicker<A> {
    /// Uncontrolled picker starting empty.
    pub fn new(adapter: A, config: PickerConfig<A::Date>, mode: PickerMode) -> Result<Self, ConfigError> {
        Self::build(adapter, config, ValueSource::uncontrolled(PickerValue::empty(mode)))
    }

    /// Uncontrolled picker starting at `value`.
    pub fn with_value(
        adapter: A,
        config: PickerConfig<A::Date>,
        value: PickerValue<A::Date>,
    ) -> Result<Self, ConfigError> {
        Self::build(adapter, config, ValueSource::uncontrolled(value))
    }

    /// Picker whose value is owned by the host.
    ///
    /// Commits are reported through `Change`; the host answers with
    /// [`external_value_change`](Self::external_value_change).
    pub fn controlled(
        adapter: A,
        config: PickerConfig<A::Date>,
        value: PickerValue<A::Date>,
    ) -> Result<Self, ConfigError> {
        Self::build(adapter, config, ValueSource::controlled(value))
    }

    fn build(
        adapter: A,
        config: PickerConfig<A::Date>,
        source: ValueSource<PickerValue<A::Date>>,
    ) -> Result<Self, ConfigError> {
        let input_mode = config.resolve_input(&adapter)?;
        let mode = source.current().mode();
        let overlay = OverlayCoordinator::new(OverlayConfig {
            controlled_open: config.open,
            disable_close_on_select: config.disable_close_on_select,
            close_on_commit_when_forced_open: config.close_on_commit_when_forced_open,
        });
        let now = adapter.today();
        let report = validate(&adapter, source.current(), &config.rules(), &now);
        let value_at_open = overlay.is_open().then(|| source.current().clone());

        datepick_core::debug!(?mode, masked = input_mode.template().is_some(), "picker created");

        Ok(Self {
            adapter,
            config,
            input_mode,
            mode,
            source,
            overlay,
            selection: SelectionPosition::Start,
            buffers: [None, None],
            report,
            value_at_open,
            focus: FocusRegistry::new(),
        })
    }

    /// Attach a focus registry with a host handle type.
    #[must_use]
    pub fn with_focus_registry<H>(self, focus: FocusRegistry<H>) -> DatePicker<A, H> {
        DatePicker {
            adapter: self.adapter,
            config: self.config,
            input_mode: self.input_mode,
            mode: self.mode,
            source: self.source,
            overlay: self.overlay,
            selection: self.selection,
            buffers: self.buffers,
            report: self.report,
            value_at_open: self.value_at_open,
            focus,
        }
    }
}

impl<A: DateAdapter, H> DatePicker<A, H> {
    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// The committed value.
    #[must_use]
    pub fn value(&self) -> &PickerValue<A::Date> {
        self.source.current()
    }

    /// Single or range.
    #[must_use]
    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// Range side the next edit or calendar click affects.
    #[must_use]
    pub fn selection_position(&self) -> SelectionPosition {
        self.selection
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Last validation result delivered.
    #[must_use]
    pub fn validation(&self) -> ValidationReport {
        self.report
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &PickerConfig<A::Date> {
        &self.config
    }

    /// How fields accept text.
    #[must_use]
    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    /// The adapter.
    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Focus handles registered by the host.
    #[must_use]
    pub fn focus_registry(&self) -> &FocusRegistry<H> {
        &self.focus
    }

    /// Mutable access to the focus registry.
    pub fn focus_registry_mut(&mut self) -> &mut FocusRegistry<H> {
        &mut self.focus
    }

    /// State machine phase.
    #[must_use]
    pub fn phase(&self) -> PickerPhase {
        if !self.overlay.is_open() {
            return PickerPhase::Closed;
        }
        match (self.mode, self.selection) {
            (PickerMode::Single, _) => PickerPhase::OpenSingle,
            (PickerMode::Range, SelectionPosition::Start) => PickerPhase::OpenEditingStart,
            (PickerMode::Range, SelectionPosition::End) => PickerPhase::OpenEditingEnd,
        }
    }

    /// Copy of the externally observable state.
    #[must_use]
    pub fn snapshot(&self) -> PickerStateSnapshot<A::Date> {
        PickerStateSnapshot {
            value: self.value().clone(),
            open: self.overlay.is_open(),
            selection_position: self.selection,
            validation: self.report,
        }
    }

    // ---------------------------------------------------------------------
    // Props
    // ---------------------------------------------------------------------

    /// Props for one text field.
    #[must_use]
    pub fn input_props(&self, slot: SlotId) -> InputProps {
        let position = slot.position();
        let (display_text, cursor) = match &self.buffers[side_index(position)] {
            Some(buffer) => (buffer.display_text(), buffer.cursor()),
            None => {
                let text = self.committed_side(position).display(&self.adapter, &self.config.format);
                let cursor = text.chars().count();
                (text, cursor)
            }
        };
        let error = match self.report {
            ValidationReport::Single(error) => error,
            ValidationReport::Range(range) => range.field_error(position),
        };
        let placeholder = match self.input_mode.template() {
            Some(template) => template.as_string(),
            None => self.config.format.clone(),
        };
        InputProps {
            slot,
            display_text,
            cursor,
            placeholder,
            error,
            active: self.mode == PickerMode::Range && self.selection == position,
        }
    }

    /// Props for the overlay chrome.
    #[must_use]
    pub fn overlay_props(&self) -> OverlayProps<'_, H> {
        let state = self.overlay.state();
        OverlayProps {
            open: state.open,
            reason: state.reason,
            anchor: self.focus.resolve(SlotId::first(self.mode)),
        }
    }

    /// Props for the layout wrapper.
    #[must_use]
    pub fn wrapper_props(&self) -> WrapperProps {
        WrapperProps {
            mode: self.mode,
            phase: self.phase(),
            selection_position: self.selection,
            invalid: self.report.is_invalid(),
        }
    }

    /// Props for the calendar cell of `day`.
    #[must_use]
    pub fn day_props(&self, day: &A::Date) -> DayProps {
        let adapter = &self.adapter;
        let now = adapter.today();
        let same = |side: &DateValue<A::Date>| side.as_date().is_some_and(|d| adapter.is_same_day(d, day));

        let mut props = DayProps {
            disabled: is_day_disabled(adapter, day, &self.config.rules(), &now),
            today: adapter.is_same_day(day, &now),
            selection_position: self.selection,
            ..DayProps::default()
        };
        match self.value() {
            PickerValue::Single(value) => props.selected = same(value),
            PickerValue::Range(range) => {
                props.range_start = same(&range.start);
                props.range_end = same(&range.end);
                props.selected = props.range_start || props.range_end;
                props.in_range = match (range.start.as_date(), range.end.as_date()) {
                    (Some(start), Some(end)) => adapter.is_within_range(day, start, end),
                    _ => false,
                };
            }
        }
        props
    }

    // ---------------------------------------------------------------------
    // Input events
    // ---------------------------------------------------------------------

    /// Route a canonical event aimed at `slot`.
    ///
    /// Escape dismisses, Enter accepts, focus changes map to
    /// [`focus_input`](Self::focus_input) / [`blur_input`](Self::blur_input),
    /// everything else goes through the field buffer.
    pub fn handle_event(&mut self, slot: SlotId, event: &Event) -> Notifications<A::Date> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Release => Vec::new(),
            Event::Key(key) if key.code == KeyCode::Escape => self.dismiss(),
            Event::Key(key) if key.code == KeyCode::Enter => self.accept(),
            Event::Key(key) => match Keystroke::from_key_event(key) {
                Some(keystroke) => self.keystroke(slot, keystroke),
                None => Vec::new(),
            },
            Event::Paste(paste) => self.paste(slot, &paste.text),
            Event::Focus(true) => self.focus_input(slot),
            Event::Focus(false) => self.blur_input(slot),
        }
    }

    /// A field gained focus: edit its side and open the overlay.
    pub fn focus_input(&mut self, slot: SlotId) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "focus_input", mode = ?self.mode, ?slot).entered();

        if !self.accepts_slot(slot) {
            return Vec::new();
        }
        self.selection = slot.position();
        let mut notes = Vec::new();
        self.apply_overlay(OverlayAction::UserOpen, &mut notes);
        notes
    }

    /// A field lost focus: uncommitted text is reset to the committed value.
    pub fn blur_input(&mut self, slot: SlotId) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "blur_input", mode = ?self.mode, ?slot).entered();

        if !self.accepts_slot(slot) {
            return Vec::new();
        }
        if self.buffers[side_index(slot.position())].take().is_some() {
            self.revalidate_committed();
            datepick_core::trace!(?slot, "edit buffer reset on blur");
        }
        Vec::new()
    }

    /// One keystroke in `slot`.
    pub fn keystroke(&mut self, slot: SlotId, keystroke: Keystroke) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "keystroke", mode = ?self.mode, ?slot, ?keystroke).entered();

        if !self.accepts_slot(slot) {
            return Vec::new();
        }
        let position = slot.position();
        self.selection = position;
        if !self.buffer_mut(position).apply(keystroke) {
            return Vec::new();
        }
        self.evaluate_buffer(position)
    }

    /// Text pasted into `slot`.
    pub fn paste(&mut self, slot: SlotId, text: &str) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "paste", mode = ?self.mode, ?slot, len = text.len()).entered();

        if !self.accepts_slot(slot) {
            return Vec::new();
        }
        let position = slot.position();
        self.selection = position;
        if !self.buffer_mut(position).paste(text) {
            return Vec::new();
        }
        self.evaluate_buffer(position)
    }

    /// A day was clicked in the calendar.
    ///
    /// Single pickers commit and request a close. Range pickers set the side
    /// being edited; setting the start moves editing to the end, setting the
    /// end moves it back and requests a close when the pair is fully valid.
    pub fn calendar_select(&mut self, date: A::Date) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "calendar_select", mode = ?self.mode).entered();

        let now = self.adapter.today();
        let position = match self.mode {
            PickerMode::Single => SelectionPosition::Start,
            PickerMode::Range => self.selection,
        };
        self.buffers[side_index(position)] = None;

        let mut notes = Vec::new();
        let candidate = DateValue::Valid(date);
        if !self.try_commit_side(position, candidate, &now, &mut notes) {
            return notes;
        }

        let close = match (self.mode, position) {
            (PickerMode::Single, _) => true,
            (PickerMode::Range, SelectionPosition::Start) => {
                if self.config.auto_advance_to_end {
                    self.selection = SelectionPosition::End;
                    notes.push(PickerNotification::FocusSlot(SlotId::End));
                }
                false
            }
            (PickerMode::Range, SelectionPosition::End) => {
                self.selection = SelectionPosition::Start;
                self.report.is_valid()
            }
        };
        if close {
            self.apply_overlay(OverlayAction::CommitSelected, &mut notes);
        }
        notes
    }

    /// The host pushed a new value.
    ///
    /// A value that differs from the current one replaces it, drops every
    /// edit buffer, resets editing to the start side, and reports its
    /// validation. An equal value only drops buffers that do not show the
    /// committed value.
    pub fn external_value_change(&mut self, value: PickerValue<A::Date>) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "external_value_change", mode = ?self.mode).entered();

        if value.mode() != self.mode {
            datepick_core::warn!(expected = ?self.mode, got = ?value.mode(), "ignoring external value of the wrong mode");
            return Vec::new();
        }

        let now = self.adapter.today();
        if !value.equals(self.value(), &self.adapter) {
            self.source.write_external(value);
            self.buffers = [None, None];
            self.selection = SelectionPosition::Start;
            self.report = self.validate_value(self.value(), &now);
            datepick_core::debug!("external value replaced edits");
            return vec![PickerNotification::Error(self.report)];
        }

        self.source.write_external(value);
        for position in [SelectionPosition::Start, SelectionPosition::End] {
            if !self.buffer_shows_committed(position) {
                self.buffers[side_index(position)] = None;
            }
        }
        let report = self.validate_value(self.value(), &now);
        if report == self.report {
            return Vec::new();
        }
        self.report = report;
        vec![PickerNotification::Error(report)]
    }

    // ---------------------------------------------------------------------
    // Overlay and action bar
    // ---------------------------------------------------------------------

    /// Escape or outside click.
    pub fn dismiss(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "dismiss", mode = ?self.mode).entered();

        self.close_with(OverlayAction::Escape)
    }

    /// Programmatic open.
    pub fn open(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "open", mode = ?self.mode).entered();

        let mut notes = Vec::new();
        self.apply_overlay(OverlayAction::ExplicitOpen, &mut notes);
        notes
    }

    /// Programmatic close. Uncommitted text is discarded.
    pub fn close(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "close", mode = ?self.mode).entered();

        self.close_with(OverlayAction::ExplicitClose)
    }

    /// The host changed the controlled `open` prop.
    pub fn set_controlled_open(&mut self, open: Option<bool>) {
        let was_open = self.overlay.is_open();
        self.config.open = open;
        if self.overlay.set_controlled(open).is_some() {
            self.track_open_transition(was_open);
        }
    }

    /// Clear the value.
    pub fn clear(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "clear", mode = ?self.mode).entered();

        let now = self.adapter.today();
        self.buffers = [None, None];
        self.selection = SelectionPosition::Start;
        let mut notes = Vec::new();
        self.commit(PickerValue::empty(self.mode), &now, &mut notes);
        self.apply_overlay(OverlayAction::CommitSelected, &mut notes);
        notes
    }

    /// Set the value to today (both ends for a range).
    pub fn set_today(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "set_today", mode = ?self.mode).entered();

        let now = self.adapter.today();
        let value = match self.mode {
            PickerMode::Single => PickerValue::single(now.clone()),
            PickerMode::Range => PickerValue::range(DateValue::Valid(now.clone()), DateValue::Valid(now.clone())),
        };
        let report = self.validate_value(&value, &now);
        if report.is_invalid() {
            self.report = report;
            datepick_core::debug!(error = ?report.first_error(), "today rejected");
            return vec![PickerNotification::Error(report)];
        }
        self.buffers = [None, None];
        self.selection = SelectionPosition::Start;
        let mut notes = Vec::new();
        self.commit(value, &now, &mut notes);
        self.apply_overlay(OverlayAction::CommitSelected, &mut notes);
        notes
    }

    /// Keep the current value and close.
    pub fn accept(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "accept", mode = ?self.mode).entered();

        if !self.overlay.is_open() {
            return Vec::new();
        }
        let mut notes = vec![PickerNotification::Accept(self.value().clone())];
        notes.extend(self.close_with(OverlayAction::ExplicitClose));
        notes
    }

    /// Restore the value held when the overlay opened and close.
    pub fn cancel(&mut self) -> Notifications<A::Date> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("picker_event", event = "cancel", mode = ?self.mode).entered();

        let mut notes = Vec::new();
        if let Some(previous) = self.value_at_open.take()
            && !previous.equals(self.value(), &self.adapter)
        {
            let now = self.adapter.today();
            self.commit(previous, &now, &mut notes);
        }
        notes.extend(self.close_with(OverlayAction::ExplicitClose));
        notes
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn accepts_slot(&self, slot: SlotId) -> bool {
        let ok = slot.belongs_to(self.mode);
        if !ok {
            datepick_core::warn!(?slot, mode = ?self.mode, "slot does not exist in this picker");
        }
        ok
    }

    fn validate_value(&self, value: &PickerValue<A::Date>, now: &A::Date) -> ValidationReport {
        validate(&self.adapter, value, &self.config.rules(), now)
    }

    fn revalidate_committed(&mut self) {
        let now = self.adapter.today();
        self.report = self.validate_value(self.value(), &now);
    }

    fn committed_side(&self, position: SelectionPosition) -> DateValue<A::Date> {
        match self.value() {
            PickerValue::Single(value) => value.clone(),
            PickerValue::Range(range) => range.side(position).clone(),
        }
    }

    fn value_with_side(&self, position: SelectionPosition, side: DateValue<A::Date>) -> PickerValue<A::Date> {
        match self.value() {
            PickerValue::Single(_) => PickerValue::Single(side),
            PickerValue::Range(range) => PickerValue::Range(range.with_side(position, side)),
        }
    }

    /// The buffer for `position`, seeded from the committed text if absent.
    fn buffer_mut(&mut self, position: SelectionPosition) -> &mut EditBuffer {
        let index = side_index(position);
        let seed = match &self.buffers[index] {
            Some(_) => String::new(),
            None => self.committed_side(position).display(&self.adapter, &self.config.format),
        };
        let template = self.input_mode.template();
        self.buffers[index].get_or_insert_with(|| EditBuffer::from_text(template, &seed))
    }

    /// Whether the buffer for `position` is absent or evaluates to the
    /// committed side.
    fn buffer_shows_committed(&self, position: SelectionPosition) -> bool {
        let Some(buffer) = &self.buffers[side_index(position)] else {
            return true;
        };
        buffer
            .candidate(&self.adapter, &self.config.format)
            .is_some_and(|candidate| candidate.equals(&self.committed_side(position), &self.adapter))
    }

    fn evaluate_buffer(&mut self, position: SelectionPosition) -> Notifications<A::Date> {
        let Some(buffer) = &self.buffers[side_index(position)] else {
            return Vec::new();
        };
        let Some(candidate) = buffer.candidate(&self.adapter, &self.config.format) else {
            datepick_core::trace!(text = %buffer.display_text(), "incomplete input");
            return Vec::new();
        };

        let now = self.adapter.today();
        if candidate.equals(&self.committed_side(position), &self.adapter) {
            self.report = self.validate_value(self.value(), &now);
            return vec![PickerNotification::Error(self.report)];
        }

        let mut notes = Vec::new();
        let advance = self.mode == PickerMode::Range
            && position == SelectionPosition::Start
            && candidate.is_valid()
            && self.config.auto_advance_to_end;
        if self.try_commit_side(position, candidate, &now, &mut notes) && advance {
            self.selection = SelectionPosition::End;
            notes.push(PickerNotification::FocusSlot(SlotId::End));
        }
        notes
    }

    /// Commit `candidate` into `position` if that side passes validation;
    /// otherwise report the rejection. Returns whether it was committed.
    fn try_commit_side(
        &mut self,
        position: SelectionPosition,
        candidate: DateValue<A::Date>,
        now: &A::Date,
        notes: &mut Notifications<A::Date>,
    ) -> bool {
        let side_error = validate_date(&self.adapter, &candidate, &self.config.rules(), now);
        let proposed = self.value_with_side(position, candidate);
        if side_error.is_some() {
            self.report = self.validate_value(&proposed, now);
            datepick_core::debug!(?position, error = ?side_error, "candidate rejected");
            notes.push(PickerNotification::Error(self.report));
            return false;
        }
        self.commit(proposed, now, notes);
        true
    }

    fn commit(&mut self, value: PickerValue<A::Date>, now: &A::Date, notes: &mut Notifications<A::Date>) {
        let report = self.validate_value(&value, now);
        self.report = report;
        if value.equals(self.value(), &self.adapter) {
            notes.push(PickerNotification::Error(report));
            return;
        }
        datepick_core::debug!(valid = report.is_valid(), "value committed");
        self.source.write_internal(value.clone());
        notes.push(PickerNotification::Error(report));
        notes.push(PickerNotification::Change(value));
    }

    fn discard_buffers(&mut self) {
        if self.buffers.iter().any(Option::is_some) {
            self.buffers = [None, None];
            self.revalidate_committed();
        }
    }

    fn close_with(&mut self, action: OverlayAction) -> Notifications<A::Date> {
        self.discard_buffers();
        let mut notes = Vec::new();
        self.apply_overlay(action, &mut notes);
        notes
    }

    /// Run an overlay action and report the resulting open/close request.
    /// A commit that closes the overlay is reported as `Accept` first.
    fn apply_overlay(&mut self, action: OverlayAction, notes: &mut Notifications<A::Date>) {
        let was_open = self.overlay.is_open();
        match self.overlay.apply(action) {
            Some(true) => notes.push(PickerNotification::Open),
            Some(false) => {
                if action == OverlayAction::CommitSelected {
                    notes.push(PickerNotification::Accept(self.value().clone()));
                }
                notes.push(PickerNotification::Close);
            }
            None => {}
        }
        self.track_open_transition(was_open);
    }

    fn track_open_transition(&mut self, was_open: bool) {
        match (was_open, self.overlay.is_open()) {
            (false, true) => self.value_at_open = Some(self.value().clone()),
            (true, false) => {
                self.value_at_open = None;
                self.discard_buffers();
            }
            _ => {}
        }
    }
}

const fn side_index(position: SelectionPosition) -> usize {
    match position {
        SelectionPosition::Start => 0,
        SelectionPosition::End => 1,
    }
}

impl<A: DateAdapter + std::fmt::Debug, H> std::fmt::Debug for DatePicker<A, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("adapter", &self.adapter)
            .field("mode", &self.mode)
            .field("value", self.value())
            .field("open", &self.overlay.state())
            .field("selection", &self.selection)
            .field("buffers", &self.buffers)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}
