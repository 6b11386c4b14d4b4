#![forbid(unsafe_code)]

//! End-to-end picker scenarios driven through the public controller API.
//!
//! "Today" is pinned to 2023-06-15 for every test.

use chrono::NaiveDate;
use datepick_core::event::{Event, KeyCode};
use datepick_core::{ChronoAdapter, DateRange, DateValue, PickerMode, PickerValue, SelectionPosition};
use datepick_widgets::{
    ConfigError, DatePicker, DateValidationError, FocusRegistry, Keystroke, OpenReason, PickerConfig,
    PickerNotification, PickerPhase, RangeValidation, SlotId, ValidationReport,
};

type Picker = DatePicker<ChronoAdapter>;
type Note = PickerNotification<NaiveDate>;

// ============================================================================
// Helpers
// ============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn adapter() -> ChronoAdapter {
    ChronoAdapter::fixed_today(ymd(2023, 6, 15))
}

fn single() -> Picker {
    DatePicker::new(adapter(), PickerConfig::default(), PickerMode::Single).unwrap()
}

fn range_with(config: PickerConfig<NaiveDate>) -> Picker {
    DatePicker::new(adapter(), config, PickerMode::Range).unwrap()
}

fn type_text(picker: &mut Picker, slot: SlotId, text: &str) -> Vec<Note> {
    let mut notes = Vec::new();
    for c in text.chars() {
        notes.extend(picker.keystroke(slot, Keystroke::Char(c)));
    }
    notes
}

fn changes(notes: &[Note]) -> Vec<&PickerValue<NaiveDate>> {
    notes
        .iter()
        .filter_map(|n| match n {
            PickerNotification::Change(value) => Some(value),
            _ => None,
        })
        .collect()
}

fn errors(notes: &[Note]) -> Vec<ValidationReport> {
    notes
        .iter()
        .filter_map(|n| match n {
            PickerNotification::Error(report) => Some(*report),
            _ => None,
        })
        .collect()
}

fn range_value(start: NaiveDate, end: NaiveDate) -> PickerValue<NaiveDate> {
    PickerValue::Range(DateRange::from_dates(start, end))
}

// ============================================================================
// Single date
// ============================================================================

#[test]
fn typing_a_full_date_commits_once() {
    let mut picker = single();
    assert_eq!(picker.focus_input(SlotId::Single), vec![PickerNotification::Open]);

    let notes = type_text(&mut picker, SlotId::Single, "01012023");

    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Single(None)),
            PickerNotification::Change(PickerValue::single(ymd(2023, 1, 1))),
        ]
    );
    let input = picker.input_props(SlotId::Single);
    assert_eq!(input.display_text, "01/01/2023");
    assert_eq!(input.error, None);
    assert_eq!(picker.value(), &PickerValue::single(ymd(2023, 1, 1)));
    assert!(picker.is_open(), "keyboard commits never close the overlay");
}

#[test]
fn incomplete_input_emits_nothing() {
    let mut picker = single();
    picker.focus_input(SlotId::Single);
    let notes = type_text(&mut picker, SlotId::Single, "0101");
    assert!(notes.is_empty());
    assert_eq!(picker.input_props(SlotId::Single).display_text, "01/01/____");
    assert!(picker.value().is_empty());
}

#[test]
fn unparsable_text_is_echoed_with_invalid_date() {
    let mut picker = single();
    picker.focus_input(SlotId::Single);

    let notes = type_text(&mut picker, SlotId::Single, "13452023");

    assert_eq!(
        notes,
        vec![PickerNotification::Error(ValidationReport::Single(Some(
            DateValidationError::InvalidDate
        )))]
    );
    let input = picker.input_props(SlotId::Single);
    assert_eq!(input.display_text, "13/45/2023");
    assert_eq!(input.error, Some(DateValidationError::InvalidDate));
    assert!(picker.value().is_empty());
}

#[test]
fn blur_resets_unparsable_text() {
    let mut picker = single();
    picker.focus_input(SlotId::Single);
    type_text(&mut picker, SlotId::Single, "13452023");
    assert!(picker.validation().is_invalid());

    assert!(picker.blur_input(SlotId::Single).is_empty());

    let input = picker.input_props(SlotId::Single);
    assert_eq!(input.display_text, "");
    assert_eq!(input.error, None);
    assert!(picker.validation().is_valid());
}

#[test]
fn clearing_every_slot_commits_empty() {
    let mut picker = DatePicker::with_value(adapter(), PickerConfig::default(), PickerValue::single(ymd(2023, 1, 1))).unwrap();
    picker.focus_input(SlotId::Single);

    let mut notes = Vec::new();
    for _ in 0..8 {
        notes.extend(picker.keystroke(SlotId::Single, Keystroke::Backspace));
    }

    assert_eq!(changes(&notes), vec![&PickerValue::Single(DateValue::Empty)]);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "");
}

#[test]
fn calendar_select_commits_and_closes() {
    let mut picker = single();
    picker.focus_input(SlotId::Single);

    let notes = picker.calendar_select(ymd(2023, 3, 4));

    let value = PickerValue::single(ymd(2023, 3, 4));
    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Single(None)),
            PickerNotification::Change(value.clone()),
            PickerNotification::Accept(value),
            PickerNotification::Close,
        ]
    );
    assert!(!picker.is_open());
    assert_eq!(picker.phase(), PickerPhase::Closed);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "03/04/2023");
}

#[test]
fn calendar_select_keeps_overlay_with_disable_close_on_select() {
    let config = PickerConfig::default().disable_close_on_select(true);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    picker.focus_input(SlotId::Single);

    let notes = picker.calendar_select(ymd(2023, 3, 4));

    assert_eq!(changes(&notes).len(), 1);
    assert!(!notes.contains(&PickerNotification::Close));
    assert!(picker.is_open());
}

#[test]
fn forced_open_overlay_survives_commit() {
    let mut picker = single();
    assert_eq!(picker.open(), vec![PickerNotification::Open]);
    assert_eq!(picker.overlay_props().reason, OpenReason::ExplicitOpenCall);

    let notes = picker.calendar_select(ymd(2023, 3, 4));

    assert_eq!(changes(&notes).len(), 1);
    assert!(picker.is_open());
}

#[test]
fn disabled_day_from_calendar_is_rejected() {
    let config = PickerConfig::default().disable_future(true);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    picker.focus_input(SlotId::Single);

    let notes = picker.calendar_select(ymd(2023, 6, 16));

    assert_eq!(
        notes,
        vec![PickerNotification::Error(ValidationReport::Single(Some(
            DateValidationError::DisableFuture
        )))]
    );
    assert!(picker.value().is_empty());
    assert!(picker.is_open());
}

// ============================================================================
// Range
// ============================================================================

#[test]
fn start_before_min_date_is_not_committed() {
    let mut picker = range_with(PickerConfig::default().min_date(ymd(2023, 1, 1)));
    picker.focus_input(SlotId::Start);

    let notes = type_text(&mut picker, SlotId::Start, "12312022");

    assert_eq!(
        notes,
        vec![PickerNotification::Error(ValidationReport::Range(RangeValidation {
            start: Some(DateValidationError::MinDate),
            end: None,
            invalid_range: false,
        }))]
    );
    assert!(changes(&notes).is_empty());
    assert!(picker.value().is_empty());
    assert!(picker.is_open());
    assert_eq!(picker.selection_position(), SelectionPosition::Start);
    assert_eq!(picker.input_props(SlotId::Start).error, Some(DateValidationError::MinDate));
    assert_eq!(picker.input_props(SlotId::Start).display_text, "12/31/2022");
}

#[test]
fn valid_start_advances_to_end() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    assert_eq!(picker.phase(), PickerPhase::OpenEditingStart);

    let notes = type_text(&mut picker, SlotId::Start, "01052023");

    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Range(RangeValidation::default())),
            PickerNotification::Change(PickerValue::range(DateValue::Valid(ymd(2023, 1, 5)), DateValue::Empty)),
            PickerNotification::FocusSlot(SlotId::End),
        ]
    );
    assert_eq!(picker.selection_position(), SelectionPosition::End);
    assert_eq!(picker.phase(), PickerPhase::OpenEditingEnd);
    assert!(picker.input_props(SlotId::End).active);
    assert!(!picker.input_props(SlotId::Start).active);
}

#[test]
fn auto_advance_can_be_turned_off() {
    let mut picker = range_with(PickerConfig::default().auto_advance_to_end(false));
    picker.focus_input(SlotId::Start);
    let notes = type_text(&mut picker, SlotId::Start, "01052023");
    assert!(!notes.contains(&PickerNotification::FocusSlot(SlotId::End)));
    assert_eq!(picker.selection_position(), SelectionPosition::Start);
}

#[test]
fn inverted_range_is_committed_and_flagged() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    type_text(&mut picker, SlotId::Start, "01052023");
    picker.focus_input(SlotId::End);

    let notes = type_text(&mut picker, SlotId::End, "01032023");

    let expected = range_value(ymd(2023, 1, 5), ymd(2023, 1, 3));
    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Range(RangeValidation {
                start: None,
                end: None,
                invalid_range: true,
            })),
            PickerNotification::Change(expected.clone()),
        ]
    );
    assert_eq!(picker.value(), &expected);
    assert!(picker.is_open());
    assert_eq!(picker.input_props(SlotId::End).error, Some(DateValidationError::InvalidRange));
}

#[test]
fn inverted_range_from_calendar_keeps_overlay_open() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);

    let first = picker.calendar_select(ymd(2023, 1, 5));
    assert_eq!(first.last(), Some(&PickerNotification::FocusSlot(SlotId::End)));
    assert!(picker.is_open());

    let second = picker.calendar_select(ymd(2023, 1, 3));
    assert_eq!(changes(&second), vec![&range_value(ymd(2023, 1, 5), ymd(2023, 1, 3))]);
    assert!(errors(&second)[0].contains(DateValidationError::InvalidRange));
    assert!(!second.contains(&PickerNotification::Close));
    assert!(picker.is_open());
    assert_eq!(picker.selection_position(), SelectionPosition::Start);
}

#[test]
fn valid_range_from_calendar_closes() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    picker.calendar_select(ymd(2023, 1, 3));

    let notes = picker.calendar_select(ymd(2023, 1, 5));

    let value = range_value(ymd(2023, 1, 3), ymd(2023, 1, 5));
    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Range(RangeValidation::default())),
            PickerNotification::Change(value.clone()),
            PickerNotification::Accept(value),
            PickerNotification::Close,
        ]
    );
    assert!(!picker.is_open());
}

#[test]
fn refocusing_start_overrides_selection() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    picker.calendar_select(ymd(2023, 1, 3));
    assert_eq!(picker.selection_position(), SelectionPosition::End);

    assert!(picker.focus_input(SlotId::Start).is_empty());
    assert_eq!(picker.selection_position(), SelectionPosition::Start);
}

// ============================================================================
// External value and dismissal
// ============================================================================

#[test]
fn external_value_discards_incomplete_buffer() {
    let mut picker = single();
    picker.focus_input(SlotId::Single);
    type_text(&mut picker, SlotId::Single, "011");
    assert_eq!(picker.input_props(SlotId::Single).display_text, "01/1_/____");

    let notes = picker.external_value_change(PickerValue::single(ymd(2023, 3, 4)));

    assert_eq!(notes, vec![PickerNotification::Error(ValidationReport::Single(None))]);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "03/04/2023");
    assert_eq!(picker.value(), &PickerValue::single(ymd(2023, 3, 4)));
}

#[test]
fn external_value_resets_selection() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    picker.calendar_select(ymd(2023, 1, 3));
    type_text(&mut picker, SlotId::End, "01");

    picker.external_value_change(range_value(ymd(2023, 2, 1), ymd(2023, 2, 10)));

    assert_eq!(picker.selection_position(), SelectionPosition::Start);
    assert_eq!(picker.input_props(SlotId::End).display_text, "02/10/2023");
}

#[test]
fn equal_external_value_keeps_committed_edits() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    type_text(&mut picker, SlotId::Start, "01052023");
    type_text(&mut picker, SlotId::End, "01");
    let current = picker.value().clone();

    let notes = picker.external_value_change(current);

    assert!(notes.is_empty());
    assert_eq!(picker.selection_position(), SelectionPosition::End);
    assert_eq!(picker.input_props(SlotId::Start).display_text, "01/05/2023");
    assert_eq!(picker.input_props(SlotId::End).display_text, "");
}

#[test]
fn external_value_of_wrong_mode_is_ignored() {
    let mut picker = single();
    let notes = picker.external_value_change(range_value(ymd(2023, 1, 1), ymd(2023, 1, 2)));
    assert!(notes.is_empty());
    assert!(picker.value().is_empty());
}

#[test]
fn controlled_value_follows_host() {
    let mut picker = DatePicker::controlled(adapter(), PickerConfig::default(), PickerValue::single(ymd(2023, 1, 1))).unwrap();
    picker.focus_input(SlotId::Single);
    picker.keystroke(SlotId::Single, Keystroke::Backspace);

    let notes = picker.keystroke(SlotId::Single, Keystroke::Char('4'));
    assert_eq!(changes(&notes), vec![&PickerValue::single(ymd(2024, 1, 1))]);

    // The host rejects the change and pushes its own value back.
    picker.external_value_change(PickerValue::single(ymd(2023, 1, 1)));
    assert_eq!(picker.value(), &PickerValue::single(ymd(2023, 1, 1)));
    assert_eq!(picker.input_props(SlotId::Single).display_text, "01/01/2023");
}

#[test]
fn dismiss_restores_committed_text() {
    let mut picker = DatePicker::with_value(adapter(), PickerConfig::default(), PickerValue::single(ymd(2023, 1, 1))).unwrap();
    picker.focus_input(SlotId::Single);
    picker.keystroke(SlotId::Single, Keystroke::Backspace);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "01/01/202_");

    let notes = picker.dismiss();

    assert_eq!(notes, vec![PickerNotification::Close]);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "01/01/2023");
    assert_eq!(picker.value(), &PickerValue::single(ymd(2023, 1, 1)));
}

#[test]
fn escape_event_dismisses() {
    let mut picker = single();
    picker.handle_event(SlotId::Single, &Event::Focus(true));
    picker.handle_event(SlotId::Single, &Event::char('0'));
    let notes = picker.handle_event(SlotId::Single, &Event::key(KeyCode::Escape));
    assert_eq!(notes, vec![PickerNotification::Close]);
    assert_eq!(picker.input_props(SlotId::Single).display_text, "");
}

// ============================================================================
// Action bar
// ============================================================================

#[test]
fn accept_closes_with_current_value() {
    let mut picker = DatePicker::with_value(adapter(), PickerConfig::default(), PickerValue::single(ymd(2023, 1, 1))).unwrap();
    picker.focus_input(SlotId::Single);
    let notes = picker.accept();
    assert_eq!(
        notes,
        vec![
            PickerNotification::Accept(PickerValue::single(ymd(2023, 1, 1))),
            PickerNotification::Close,
        ]
    );
    assert!(picker.accept().is_empty(), "nothing to accept while closed");
}

#[test]
fn cancel_restores_value_from_open() {
    let mut picker = DatePicker::with_value(adapter(), PickerConfig::default(), PickerValue::single(ymd(2023, 1, 1))).unwrap();
    picker.focus_input(SlotId::Single);
    picker.keystroke(SlotId::Single, Keystroke::Backspace);
    picker.keystroke(SlotId::Single, Keystroke::Char('4'));
    assert_eq!(picker.value(), &PickerValue::single(ymd(2024, 1, 1)));

    let notes = picker.cancel();

    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Single(None)),
            PickerNotification::Change(PickerValue::single(ymd(2023, 1, 1))),
            PickerNotification::Close,
        ]
    );
    assert!(!picker.is_open());
}

#[test]
fn clear_commits_empty_and_closes() {
    let mut picker = DatePicker::with_value(adapter(), PickerConfig::default(), range_value(ymd(2023, 1, 1), ymd(2023, 1, 2))).unwrap();
    picker.focus_input(SlotId::End);

    let notes = picker.clear();

    let empty = PickerValue::empty(PickerMode::Range);
    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Range(RangeValidation::default())),
            PickerNotification::Change(empty.clone()),
            PickerNotification::Accept(empty),
            PickerNotification::Close,
        ]
    );
    assert_eq!(picker.selection_position(), SelectionPosition::Start);
}

#[test]
fn set_today_respects_rules() {
    let mut picker = range_with(PickerConfig::default());
    let notes = picker.set_today();
    assert_eq!(changes(&notes), vec![&range_value(ymd(2023, 6, 15), ymd(2023, 6, 15))]);

    let config = PickerConfig::default().min_date(ymd(2023, 7, 1));
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    let notes = picker.set_today();
    assert_eq!(
        notes,
        vec![PickerNotification::Error(ValidationReport::Single(Some(
            DateValidationError::MinDate
        )))]
    );
    assert!(picker.value().is_empty());
}

// ============================================================================
// Input variants
// ============================================================================

#[test]
fn paste_fills_the_mask() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);

    let notes = picker.handle_event(SlotId::Start, &Event::Paste(datepick_core::event::PasteEvent::new("01/05/2023")));

    assert_eq!(
        changes(&notes),
        vec![&PickerValue::range(DateValue::Valid(ymd(2023, 1, 5)), DateValue::Empty)]
    );
    assert_eq!(notes.last(), Some(&PickerNotification::FocusSlot(SlotId::End)));
}

#[test]
fn plain_input_parses_free_text() {
    let config = PickerConfig::default().disable_masked_input(true);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    picker.focus_input(SlotId::Single);

    let notes = type_text(&mut picker, SlotId::Single, "01/05/2023");

    let invalid = PickerNotification::Error(ValidationReport::Single(Some(DateValidationError::InvalidDate)));
    let mut expected = vec![invalid; 6];
    expected.push(PickerNotification::Error(ValidationReport::Single(None)));
    expected.push(PickerNotification::Change(PickerValue::single(ymd(2023, 1, 5))));
    assert_eq!(notes, expected);

    assert_eq!(picker.value(), &PickerValue::single(ymd(2023, 1, 5)));
    let input = picker.input_props(SlotId::Single);
    assert_eq!(input.display_text, "01/05/2023");
    assert_eq!(input.placeholder, "MM/dd/yyyy");
}

#[test]
fn plain_input_does_not_commit_a_partial_year() {
    let config = PickerConfig::default().disable_masked_input(true);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    picker.focus_input(SlotId::Single);
    type_text(&mut picker, SlotId::Single, "01/05/");

    for c in "202".chars() {
        assert!(picker.keystroke(SlotId::Single, Keystroke::Char(c)).is_empty());
        assert!(picker.value().is_empty());
    }
    assert_eq!(changes(&picker.keystroke(SlotId::Single, Keystroke::Char('3'))).len(), 1);
}

#[test]
fn unknown_slot_is_ignored() {
    let mut picker = single();
    assert!(picker.focus_input(SlotId::End).is_empty());
    assert!(picker.keystroke(SlotId::Start, Keystroke::Char('1')).is_empty());
    assert!(!picker.is_open());
}

#[test]
fn bad_mask_is_a_config_error() {
    let config = PickerConfig::default().mask("no slots");
    let result = DatePicker::new(adapter(), config, PickerMode::Single);
    assert!(matches!(result, Err(ConfigError::EmptyMask { .. })));
}

// ============================================================================
// Overlay control and projections
// ============================================================================

#[test]
fn controlled_open_only_requests() {
    let config = PickerConfig::default().open(false);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();

    assert_eq!(picker.focus_input(SlotId::Single), vec![PickerNotification::Open]);
    assert!(!picker.is_open());

    picker.set_controlled_open(Some(true));
    assert!(picker.is_open());
    assert_eq!(picker.phase(), PickerPhase::OpenSingle);
}

#[test]
fn controlled_open_requests_close_after_calendar_select() {
    let config = PickerConfig::default().open(false);
    let mut picker = DatePicker::new(adapter(), config, PickerMode::Single).unwrap();
    assert_eq!(picker.focus_input(SlotId::Single), vec![PickerNotification::Open]);
    picker.set_controlled_open(Some(true));
    assert_eq!(picker.overlay_props().reason, OpenReason::Controlled);

    let notes = picker.calendar_select(ymd(2023, 3, 4));

    let value = PickerValue::single(ymd(2023, 3, 4));
    assert_eq!(
        notes,
        vec![
            PickerNotification::Error(ValidationReport::Single(None)),
            PickerNotification::Change(value.clone()),
            PickerNotification::Accept(value),
            PickerNotification::Close,
        ]
    );
    assert!(picker.is_open(), "the host still owns visibility");

    picker.set_controlled_open(Some(false));
    assert!(!picker.is_open());
    assert_eq!(picker.phase(), PickerPhase::Closed);
}

#[test]
fn overlay_anchors_to_first_slot() {
    let mut registry = FocusRegistry::new();
    registry.register(SlotId::Start, "start-field");
    registry.register(SlotId::End, "end-field");
    let mut picker = range_with(PickerConfig::default()).with_focus_registry(registry);

    picker.focus_input(SlotId::Start);
    let overlay = picker.overlay_props();
    assert!(overlay.open);
    assert_eq!(overlay.anchor, Some(&"start-field"));

    let notes = picker.calendar_select(ymd(2023, 1, 3));
    let target = notes
        .iter()
        .find_map(|n| match n {
            PickerNotification::FocusSlot(slot) => Some(*slot),
            _ => None,
        })
        .expect("start commit moves focus");
    assert_eq!(picker.focus_registry().resolve(target), Some(&"end-field"));
}

#[test]
fn day_props_mark_range_and_rules() {
    let config = PickerConfig::default().max_date(ymd(2023, 6, 20));
    let mut picker = DatePicker::with_value(adapter(), config, range_value(ymd(2023, 6, 10), ymd(2023, 6, 12))).unwrap();
    picker.focus_input(SlotId::Start);

    let start = picker.day_props(&ymd(2023, 6, 10));
    assert!(start.selected && start.range_start && start.in_range && !start.range_end);

    let middle = picker.day_props(&ymd(2023, 6, 11));
    assert!(middle.in_range && !middle.selected);

    let outside = picker.day_props(&ymd(2023, 6, 13));
    assert!(!outside.in_range && !outside.disabled);

    assert!(picker.day_props(&ymd(2023, 6, 15)).today);
    assert!(picker.day_props(&ymd(2023, 6, 21)).disabled);
    assert_eq!(start.selection_position, SelectionPosition::Start);
}

#[test]
fn snapshot_and_wrapper_agree() {
    let mut picker = range_with(PickerConfig::default());
    picker.focus_input(SlotId::Start);
    picker.calendar_select(ymd(2023, 1, 5));
    picker.calendar_select(ymd(2023, 1, 3));

    let snapshot = picker.snapshot();
    assert_eq!(snapshot.value, range_value(ymd(2023, 1, 5), ymd(2023, 1, 3)));
    assert!(snapshot.open);
    assert!(snapshot.validation.contains(DateValidationError::InvalidRange));

    let wrapper = picker.wrapper_props();
    assert_eq!(wrapper.mode, PickerMode::Range);
    assert_eq!(wrapper.phase, PickerPhase::OpenEditingStart);
    assert!(wrapper.invalid);
}
