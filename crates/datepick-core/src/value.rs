#![forbid(unsafe_code)]

//! The canonical picker value.
//!
//! A picker holds either one nullable date or an ordered `[start, end]` pair
//! whose sides are independently nullable. Both shapes live in one tagged
//! [`PickerValue`] so every operation is written once and matches on the
//! variant.
//!
//! # Invariants
//!
//! 1. A [`DateRange`] always exists as a pair. Construction never fails, even
//!    when `start > end`; inversion is a validation concern.
//! 2. `[date, null]` is a legitimate "start only" value and is never
//!    collapsed to the empty range.
//! 3. Replacing one side produces a new, fully formed pair
//!    ([`DateRange::with_side`]); there is no in-place half update.

use crate::adapter::DateAdapter;

/// A single, possibly absent or unparsable, date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateValue<D> {
    /// No date.
    #[default]
    Empty,
    /// A parsed date.
    Valid(D),
    /// Text that did not parse; kept so the user still sees what they typed.
    Invalid(String),
}

impl<D: Clone> DateValue<D> {
    /// Parse `text` through the adapter. Blank text is [`DateValue::Empty`];
    /// parse failures keep the text as [`DateValue::Invalid`].
    pub fn from_text<A>(adapter: &A, text: &str, format: &str) -> Self
    where
        A: DateAdapter<Date = D>,
    {
        if text.trim().is_empty() {
            return Self::Empty;
        }
        match adapter.parse(text, format) {
            Ok(date) => Self::Valid(date),
            Err(_) => Self::Invalid(text.to_string()),
        }
    }

    /// Whether there is no date at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the value carries a parsed date.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Whether the value is unparsable text.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The parsed date, if any.
    #[must_use]
    pub fn as_date(&self) -> Option<&D> {
        match self {
            Self::Valid(date) => Some(date),
            _ => None,
        }
    }

    /// Null-safe equality through the adapter.
    ///
    /// Two invalid values are equal when their text is identical.
    pub fn equals<A>(&self, other: &Self, adapter: &A) -> bool
    where
        A: DateAdapter<Date = D>,
    {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::Valid(a), Self::Valid(b)) => adapter.is_equal(a, b),
            (Self::Invalid(a), Self::Invalid(b)) => a == b,
            _ => false,
        }
    }

    /// Text shown in an input for this value.
    pub fn display<A>(&self, adapter: &A, format: &str) -> String
    where
        A: DateAdapter<Date = D>,
    {
        match self {
            Self::Empty => String::new(),
            Self::Valid(date) => adapter.format(date, format),
            Self::Invalid(text) => text.clone(),
        }
    }
}

impl<D> From<Option<D>> for DateValue<D> {
    fn from(value: Option<D>) -> Self {
        value.map_or(Self::Empty, Self::Valid)
    }
}

/// Which end of a range the next edit affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionPosition {
    /// The start date.
    #[default]
    Start,
    /// The end date.
    End,
}

impl SelectionPosition {
    /// The opposite end.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// An ordered `[start, end]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange<D> {
    /// Start side.
    pub start: DateValue<D>,
    /// End side.
    pub end: DateValue<D>,
}

impl<D: Clone> DateRange<D> {
    /// Build a pair. Never fails, whatever the order of the sides.
    #[must_use]
    pub fn new(start: DateValue<D>, end: DateValue<D>) -> Self {
        Self { start, end }
    }

    /// Pair of two parsed dates.
    #[must_use]
    pub fn from_dates(start: D, end: D) -> Self {
        Self::new(DateValue::Valid(start), DateValue::Valid(end))
    }

    /// Both sides empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DateValue::Empty, DateValue::Empty)
    }

    /// Borrow one side.
    #[must_use]
    pub fn side(&self, position: SelectionPosition) -> &DateValue<D> {
        match position {
            SelectionPosition::Start => &self.start,
            SelectionPosition::End => &self.end,
        }
    }

    /// A new pair with `position` replaced by `value`.
    #[must_use]
    pub fn with_side(&self, position: SelectionPosition, value: DateValue<D>) -> Self {
        match position {
            SelectionPosition::Start => Self::new(value, self.end.clone()),
            SelectionPosition::End => Self::new(self.start.clone(), value),
        }
    }

    /// Both sides empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// Side-wise equality through the adapter.
    pub fn equals<A>(&self, other: &Self, adapter: &A) -> bool
    where
        A: DateAdapter<Date = D>,
    {
        self.start.equals(&other.start, adapter) && self.end.equals(&other.end, adapter)
    }
}

/// Whether a picker edits one date or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerMode {
    /// One date.
    Single,
    /// A `[start, end]` pair.
    Range,
}

/// One side of an external value before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDate<'a, D> {
    /// Absent.
    Null,
    /// Already a date.
    Date(D),
    /// Text to run through the adapter.
    Text(&'a str),
}

/// External value representation handed to [`PickerValue::parse_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput<'a, D> {
    /// Single-date representation.
    Single(RawDate<'a, D>),
    /// Two-element range representation.
    Range([RawDate<'a, D>; 2]),
}

/// The value a picker owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerValue<D> {
    /// Single-date picker value.
    Single(DateValue<D>),
    /// Range picker value.
    Range(DateRange<D>),
}

impl<D: Clone> PickerValue<D> {
    /// The empty value for `mode`.
    #[must_use]
    pub fn empty(mode: PickerMode) -> Self {
        match mode {
            PickerMode::Single => Self::Single(DateValue::Empty),
            PickerMode::Range => Self::Range(DateRange::empty()),
        }
    }

    /// A single parsed date.
    #[must_use]
    pub fn single(date: D) -> Self {
        Self::Single(DateValue::Valid(date))
    }

    /// A range from two sides.
    #[must_use]
    pub fn range(start: DateValue<D>, end: DateValue<D>) -> Self {
        Self::Range(DateRange::new(start, end))
    }

    /// Convert an external representation. Each range side is parsed
    /// independently; a partially null pair stays partially null.
    pub fn parse_input<A>(adapter: &A, raw: RawInput<'_, D>, format: &str) -> Self
    where
        A: DateAdapter<Date = D>,
    {
        fn side<A: DateAdapter>(
            adapter: &A,
            raw: RawDate<'_, A::Date>,
            format: &str,
        ) -> DateValue<A::Date> {
            match raw {
                RawDate::Null => DateValue::Empty,
                RawDate::Date(date) => DateValue::Valid(date),
                RawDate::Text(text) => DateValue::from_text(adapter, text, format),
            }
        }

        match raw {
            RawInput::Single(raw) => Self::Single(side(adapter, raw, format)),
            RawInput::Range([start, end]) => Self::Range(DateRange::new(
                side(adapter, start, format),
                side(adapter, end, format),
            )),
        }
    }

    /// Single or range.
    #[must_use]
    pub fn mode(&self) -> PickerMode {
        match self {
            Self::Single(_) => PickerMode::Single,
            Self::Range(_) => PickerMode::Range,
        }
    }

    /// No date anywhere in the value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::Range(range) => range.is_empty(),
        }
    }

    /// Component-wise, null-safe equality. Values of different modes are
    /// never equal.
    pub fn equals<A>(&self, other: &Self, adapter: &A) -> bool
    where
        A: DateAdapter<Date = D>,
    {
        match (self, other) {
            (Self::Single(a), Self::Single(b)) => a.equals(b, adapter),
            (Self::Range(a), Self::Range(b)) => a.equals(b, adapter),
            _ => false,
        }
    }

    /// The single-date side, if this is a single value.
    #[must_use]
    pub fn as_single(&self) -> Option<&DateValue<D>> {
        match self {
            Self::Single(value) => Some(value),
            Self::Range(_) => None,
        }
    }

    /// The pair, if this is a range value.
    #[must_use]
    pub fn as_range(&self) -> Option<&DateRange<D>> {
        match self {
            Self::Single(_) => None,
            Self::Range(range) => Some(range),
        }
    }
}
