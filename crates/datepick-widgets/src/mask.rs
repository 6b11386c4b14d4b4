#![forbid(unsafe_code)]

//! Masked date input engine.
//!
//! A [`MaskTemplate`] is a fixed-width pattern such as `__/__/____` where `_`
//! marks a slot accepting one digit and every other character is a literal
//! separator. [`MaskState`] is the per-field edit buffer: one optional digit
//! per slot plus a cursor expressed as a template position.
//!
//! # Invariants
//!
//! 1. **Separators are immutable**: no keystroke ever changes a literal.
//! 2. **Fixed width**: once any slot is filled, the display text has exactly
//!    the template's width.
//! 3. **Overwrite, never drop**: a digit typed with the cursor on a filled
//!    slot replaces that slot, so the display never lags the buffer.
//! 4. **No parse before completion**: [`MaskOutput::candidate`] returns
//!    `None` until every slot holds a digit.
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Non-digit that is not the next literal | Ignored, returns `false` |
//! | Digit with no slot right of the cursor | Ignored, returns `false` |
//! | Backspace with nothing filled to the left | Ignored, returns `false` |
//! | Complete text that is not a real date | `DateValue::Invalid` with the text |

use datepick_core::event::{KeyCode, KeyEvent};
use datepick_core::{DateAdapter, DateValue};

use crate::config::ConfigError;

/// Placeholder character marking a digit slot in a template.
pub const SLOT_CHAR: char = '_';

/// Reference dates used to derive a template from a display format. Two
/// dates differing in digit count for unpadded tokens expose variable-width
/// formats.
const REFERENCE_DATES: [(i32, u32, u32); 2] = [(2019, 11, 21), (2019, 1, 1)];

// ---------------------------------------------------------------------------
// Keystroke
// ---------------------------------------------------------------------------

/// An edit applied to a field buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keystroke {
    /// A typed character.
    Char(char),
    /// Clear leftward.
    Backspace,
    /// Clear at the cursor.
    Delete,
    /// Cursor one slot left.
    Left,
    /// Cursor one slot right.
    Right,
    /// Cursor to the first slot.
    Home,
    /// Cursor past the last filled slot.
    End,
}

impl Keystroke {
    /// Map a key event onto a keystroke.
    ///
    /// Releases, Ctrl/Alt chords, and keys the buffer has no use for
    /// (Enter, Escape) yield `None`.
    #[must_use]
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if !key.is_actionable() || key.ctrl() || key.alt() {
            return None;
        }
        match key.code {
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            KeyCode::Enter | KeyCode::Escape => None,
        }
    }
}

// ---------------------------------------------------------------------------
// MaskTemplate
// ---------------------------------------------------------------------------

/// A fixed-width input pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    pattern: Vec<char>,
    /// Template positions of the `_` slots, ascending.
    slots: Vec<usize>,
}

impl MaskTemplate {
    /// Build a template. At least one `_` slot is required.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern: Vec<char> = pattern.chars().collect();
        let slots: Vec<usize> = pattern
            .iter()
            .enumerate()
            .filter_map(|(pos, &c)| (c == SLOT_CHAR).then_some(pos))
            .collect();
        if slots.is_empty() {
            return Err(ConfigError::EmptyMask {
                mask: pattern.into_iter().collect(),
            });
        }
        Ok(Self { pattern, slots })
    }

    /// Derive the template a fixed-width `format` produces, by formatting
    /// reference dates and turning their digits into slots.
    ///
    /// Returns `Ok(None)` when the format renders at different widths for
    /// different dates (e.g. `M/d/yyyy`) and so cannot be masked.
    pub fn from_format<A: DateAdapter>(adapter: &A, format: &str) -> Result<Option<Self>, ConfigError> {
        adapter.check_format(format)?;

        let mut derived: Option<String> = None;
        for (year, month, day) in REFERENCE_DATES {
            let Some(date) = adapter.date_from_ymd(year, month, day) else {
                continue;
            };
            let shape: String = adapter
                .format(&date, format)
                .chars()
                .map(|c| if c.is_ascii_digit() { SLOT_CHAR } else { c })
                .collect();
            match &derived {
                None => derived = Some(shape),
                Some(previous) if *previous == shape => {}
                Some(_) => return Ok(None),
            }
        }

        match derived {
            Some(shape) => Self::new(&shape).map(Some).or(Ok(None)),
            None => Ok(None),
        }
    }

    /// The pattern as text.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.pattern.iter().collect()
    }

    /// Width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.pattern.len()
    }

    /// Number of digit slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether `pos` is a digit slot.
    #[must_use]
    pub fn is_slot(&self, pos: usize) -> bool {
        self.pattern.get(pos) == Some(&SLOT_CHAR)
    }

    /// The literal at `pos`, or `None` for slots and out-of-range positions.
    #[must_use]
    pub fn literal_at(&self, pos: usize) -> Option<char> {
        self.pattern.get(pos).copied().filter(|&c| c != SLOT_CHAR)
    }

    /// Index into the slot list of the first slot at or after `pos`.
    fn slot_at_or_after(&self, pos: usize) -> Option<usize> {
        self.slots.iter().position(|&p| p >= pos)
    }
}

// ---------------------------------------------------------------------------
// MaskState
// ---------------------------------------------------------------------------

/// Edit buffer for one masked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskState {
    template: MaskTemplate,
    digits: Vec<Option<char>>,
    /// Template position in `0..=width`.
    cursor: usize,
}

impl MaskState {
    /// An empty buffer with the cursor at the start.
    #[must_use]
    pub fn new(template: MaskTemplate) -> Self {
        let digits = vec![None; template.slot_count()];
        Self {
            template,
            digits,
            cursor: 0,
        }
    }

    /// Rebuild a buffer from displayed text.
    ///
    /// Digits fill slots in order, `_` leaves a slot empty, matching
    /// literals are consumed, anything else is skipped. The cursor lands
    /// right after the last filled slot.
    #[must_use]
    pub fn from_text(template: MaskTemplate, text: &str) -> Self {
        let mut state = Self::new(template);
        let mut pos = 0;
        for c in text.chars() {
            if pos >= state.template.width() {
                break;
            }
            if c.is_ascii_digit() {
                let Some(slot) = state.template.slot_at_or_after(pos) else {
                    break;
                };
                state.digits[slot] = Some(c);
                pos = state.template.slots[slot] + 1;
            } else if c == SLOT_CHAR && state.template.is_slot(pos) {
                pos += 1;
            } else if state.template.literal_at(pos) == Some(c) {
                pos += 1;
            }
        }
        state.cursor = state.end_position();
        state
    }

    /// The template this buffer follows.
    #[must_use]
    pub fn template(&self) -> &MaskTemplate {
        &self.template
    }

    /// Cursor as a template position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the template width.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.template.width());
    }

    /// Every slot holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.digits.iter().all(Option::is_some)
    }

    /// No slot holds a digit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.digits.iter().all(Option::is_none)
    }

    /// Text to display: empty when blank, otherwise the full template with
    /// unfilled slots shown as `_`.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.is_blank() {
            return String::new();
        }
        let mut slot = 0;
        self.template
            .pattern
            .iter()
            .map(|&c| {
                if c == SLOT_CHAR {
                    let digit = self.digits[slot].unwrap_or(SLOT_CHAR);
                    slot += 1;
                    digit
                } else {
                    c
                }
            })
            .collect()
    }

    /// Apply one keystroke. Returns `true` if the text or cursor changed.
    pub fn apply(&mut self, keystroke: Keystroke) -> bool {
        match keystroke {
            Keystroke::Char(c) if c.is_ascii_digit() => self.type_digit(c),
            Keystroke::Char(c) => self.type_literal(c),
            Keystroke::Backspace => self.clear_left(),
            Keystroke::Delete => self.clear_at_cursor(),
            Keystroke::Left => {
                let target = self
                    .template
                    .slots
                    .iter()
                    .rev()
                    .find(|&&p| p < self.cursor)
                    .copied()
                    .unwrap_or(0);
                self.move_cursor(target)
            }
            Keystroke::Right => {
                let target = self
                    .template
                    .slots
                    .iter()
                    .find(|&&p| p > self.cursor)
                    .copied()
                    .unwrap_or(self.template.width());
                self.move_cursor(target)
            }
            Keystroke::Home => {
                let first = self.template.slots[0];
                self.move_cursor(first)
            }
            Keystroke::End => {
                let end = self.end_position();
                self.move_cursor(end)
            }
        }
    }

    fn type_digit(&mut self, c: char) -> bool {
        let Some(slot) = self.template.slot_at_or_after(self.cursor) else {
            return false;
        };
        self.digits[slot] = Some(c);
        self.cursor = self.template.slots[slot] + 1;
        true
    }

    fn type_literal(&mut self, c: char) -> bool {
        if self.template.literal_at(self.cursor) == Some(c) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn clear_left(&mut self) -> bool {
        let filled = self
            .template
            .slots
            .iter()
            .enumerate()
            .rev()
            .find(|&(slot, &pos)| pos < self.cursor && self.digits[slot].is_some());
        match filled {
            Some((slot, &pos)) => {
                self.digits[slot] = None;
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    fn clear_at_cursor(&mut self) -> bool {
        match self.template.slot_at_or_after(self.cursor) {
            Some(slot) if self.digits[slot].is_some() => {
                self.digits[slot] = None;
                true
            }
            _ => false,
        }
    }

    fn move_cursor(&mut self, target: usize) -> bool {
        let target = target.min(self.template.width());
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }

    /// Position right after the last filled slot, or the first slot when
    /// nothing is filled.
    fn end_position(&self) -> usize {
        self.digits
            .iter()
            .rposition(Option::is_some)
            .map_or(self.template.slots[0], |slot| self.template.slots[slot] + 1)
    }
}

// ---------------------------------------------------------------------------
// PlainState
// ---------------------------------------------------------------------------

/// Edit buffer for a field with masking disabled: free text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainState {
    text: Vec<char>,
    cursor: usize,
}

impl PlainState {
    /// Buffer holding `text`, cursor at the end.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// The current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Cursor as a character index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one keystroke. Returns `true` if the text or cursor changed.
    pub fn apply(&mut self, keystroke: Keystroke) -> bool {
        match keystroke {
            Keystroke::Char(c) if !c.is_control() => {
                self.text.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            Keystroke::Char(_) => false,
            Keystroke::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.text.remove(self.cursor);
                true
            }
            Keystroke::Delete if self.cursor < self.text.len() => {
                self.text.remove(self.cursor);
                true
            }
            Keystroke::Backspace | Keystroke::Delete => false,
            Keystroke::Left => self.move_cursor(self.cursor.saturating_sub(1)),
            Keystroke::Right => self.move_cursor((self.cursor + 1).min(self.text.len())),
            Keystroke::Home => self.move_cursor(0),
            Keystroke::End => self.move_cursor(self.text.len()),
        }
    }

    fn move_cursor(&mut self, target: usize) -> bool {
        let moved = target != self.cursor;
        self.cursor = target;
        moved
    }
}

// ---------------------------------------------------------------------------
// EditBuffer
// ---------------------------------------------------------------------------

/// The in-progress text of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditBuffer {
    /// Masked input.
    Masked(MaskState),
    /// Free text (masking disabled).
    Plain(PlainState),
}

impl EditBuffer {
    /// Buffer seeded with `text`, masked when a template is given.
    #[must_use]
    pub fn from_text(template: Option<&MaskTemplate>, text: &str) -> Self {
        match template {
            Some(template) => Self::Masked(MaskState::from_text(template.clone(), text)),
            None => Self::Plain(PlainState::from_text(text)),
        }
    }

    /// Apply one keystroke. Returns `true` if the text or cursor changed.
    pub fn apply(&mut self, keystroke: Keystroke) -> bool {
        match self {
            Self::Masked(state) => state.apply(keystroke),
            Self::Plain(state) => state.apply(keystroke),
        }
    }

    /// Apply pasted text character by character.
    pub fn paste(&mut self, text: &str) -> bool {
        text.chars()
            .fold(false, |changed, c| self.apply(Keystroke::Char(c)) || changed)
    }

    /// Text shown in the field.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Masked(state) => state.display_text(),
            Self::Plain(state) => state.text(),
        }
    }

    /// Cursor position within [`display_text`](Self::display_text).
    #[must_use]
    pub fn cursor(&self) -> usize {
        match self {
            Self::Masked(state) => state.cursor(),
            Self::Plain(state) => state.cursor(),
        }
    }

    /// Snapshot of display text and completeness.
    #[must_use]
    pub fn output(&self) -> MaskOutput {
        match self {
            Self::Masked(state) => MaskOutput {
                display_text: state.display_text(),
                is_complete: state.is_complete(),
            },
            Self::Plain(state) => {
                let display_text = state.text();
                let is_complete = !display_text.trim().is_empty();
                MaskOutput {
                    display_text,
                    is_complete,
                }
            }
        }
    }

    /// The value this buffer stands for, if it can be evaluated.
    ///
    /// Masked buffers follow [`MaskOutput::candidate`]. Free text that parses
    /// but does not format back to what was typed (a year still being typed,
    /// say) is treated as incomplete.
    pub fn candidate<A: DateAdapter>(&self, adapter: &A, format: &str) -> Option<DateValue<A::Date>> {
        let output = self.output();
        let value = output.candidate(adapter, format)?;
        match (self, &value) {
            (Self::Plain(_), DateValue::Valid(date))
                if adapter.format(date, format) != output.display_text.trim() =>
            {
                None
            }
            _ => Some(value),
        }
    }
}

// ---------------------------------------------------------------------------
// MaskOutput
// ---------------------------------------------------------------------------

/// Result of applying a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutput {
    /// Text to show.
    pub display_text: String,
    /// Every slot is filled (plain buffers: text is non-blank).
    pub is_complete: bool,
}

impl MaskOutput {
    /// Nothing typed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.display_text.is_empty()
    }

    /// The value this output stands for, if it can be evaluated.
    ///
    /// Blank text is a complete "clear" candidate. Incomplete text never
    /// reaches the parser. Complete text that fails to parse becomes
    /// [`DateValue::Invalid`] carrying the text.
    pub fn candidate<A: DateAdapter>(&self, adapter: &A, format: &str) -> Option<DateValue<A::Date>> {
        if self.is_blank() {
            return Some(DateValue::Empty);
        }
        if !self.is_complete {
            return None;
        }
        Some(DateValue::from_text(adapter, &self.display_text, format))
    }
}

/// Apply one keystroke to previously displayed text.
///
/// The cursor is taken to sit right after the last typed digit, which is
/// where it is while a user types left to right.
#[must_use]
pub fn apply_keystroke(previous_text: &str, keystroke: Keystroke, template: &MaskTemplate) -> MaskOutput {
    let mut state = MaskState::from_text(template.clone(), previous_text);
    state.apply(keystroke);
    MaskOutput {
        display_text: state.display_text(),
        is_complete: state.is_complete(),
    }
}
