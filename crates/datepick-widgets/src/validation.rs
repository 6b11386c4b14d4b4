#![forbid(unsafe_code)]

//! Date and date-range validation.
//!
//! Validation is a pure function of `(value, rules, now)`. "Now" is always
//! passed in; nothing here reads a clock. Rules are evaluated in a fixed
//! order and the first failing rule wins:
//!
//! 1. unparsable text → [`DateValidationError::InvalidDate`]
//! 2. `disable_future` and after today → [`DateValidationError::DisableFuture`]
//! 3. `disable_past` and before today → [`DateValidationError::DisablePast`]
//! 4. before `min_date` → [`DateValidationError::MinDate`]
//! 5. after `max_date` → [`DateValidationError::MaxDate`]
//! 6. `should_disable_date` → [`DateValidationError::ShouldDisableDate`]
//! 7. `should_disable_year` → [`DateValidationError::ShouldDisableYear`]
//!
//! Ranges are validated side by side, then the pair is checked for
//! inversion. The inversion flag sits next to the side errors rather than
//! replacing them.

use std::fmt;

use datepick_core::{DateAdapter, DateRange, DateValue, PickerValue, SelectionPosition};

// ---------------------------------------------------------------------------
// Error Codes (for i18n lookup)
// ---------------------------------------------------------------------------

/// Error code for unparsable input.
pub const ERROR_CODE_INVALID_DATE: &str = "invalidDate";
/// Error code for a day after today when the future is disabled.
pub const ERROR_CODE_DISABLE_FUTURE: &str = "disableFuture";
/// Error code for a day before today when the past is disabled.
pub const ERROR_CODE_DISABLE_PAST: &str = "disablePast";
/// Error code for a day before `min_date`.
pub const ERROR_CODE_MIN_DATE: &str = "minDate";
/// Error code for a day after `max_date`.
pub const ERROR_CODE_MAX_DATE: &str = "maxDate";
/// Error code for a day rejected by `should_disable_date`.
pub const ERROR_CODE_SHOULD_DISABLE_DATE: &str = "shouldDisableDate";
/// Error code for a day rejected by `should_disable_year`.
pub const ERROR_CODE_SHOULD_DISABLE_YEAR: &str = "shouldDisableYear";
/// Error code for a range whose start is after its end.
pub const ERROR_CODE_INVALID_RANGE: &str = "invalidRange";

// ---------------------------------------------------------------------------
// DateValidationError
// ---------------------------------------------------------------------------

/// Why a date (or range) is not acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValidationError {
    /// Text that does not parse.
    InvalidDate,
    /// After today with the future disabled.
    DisableFuture,
    /// Before today with the past disabled.
    DisablePast,
    /// Before `min_date`.
    MinDate,
    /// After `max_date`.
    MaxDate,
    /// Rejected by `should_disable_date`.
    ShouldDisableDate,
    /// Rejected by `should_disable_year`.
    ShouldDisableYear,
    /// Range start after range end.
    InvalidRange,
}

impl DateValidationError {
    /// Stable code for programmatic handling and i18n.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidDate => ERROR_CODE_INVALID_DATE,
            Self::DisableFuture => ERROR_CODE_DISABLE_FUTURE,
            Self::DisablePast => ERROR_CODE_DISABLE_PAST,
            Self::MinDate => ERROR_CODE_MIN_DATE,
            Self::MaxDate => ERROR_CODE_MAX_DATE,
            Self::ShouldDisableDate => ERROR_CODE_SHOULD_DISABLE_DATE,
            Self::ShouldDisableYear => ERROR_CODE_SHOULD_DISABLE_YEAR,
            Self::InvalidRange => ERROR_CODE_INVALID_RANGE,
        }
    }

    /// Default English message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidDate => "Invalid date",
            Self::DisableFuture => "Date must not be in the future",
            Self::DisablePast => "Date must not be in the past",
            Self::MinDate => "Date is before the earliest allowed date",
            Self::MaxDate => "Date is after the latest allowed date",
            Self::ShouldDisableDate => "Date is not available",
            Self::ShouldDisableYear => "Year is not available",
            Self::InvalidRange => "Start date is after end date",
        }
    }
}

impl fmt::Display for DateValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// ValidationRules
// ---------------------------------------------------------------------------

/// Borrowed rule set handed to the validator at call time.
pub struct ValidationRules<'a, D> {
    /// Earliest allowed day.
    pub min_date: Option<&'a D>,
    /// Latest allowed day.
    pub max_date: Option<&'a D>,
    /// Reject days after today.
    pub disable_future: bool,
    /// Reject days before today.
    pub disable_past: bool,
    /// `true` = day disabled.
    pub should_disable_date: Option<&'a dyn Fn(&D) -> bool>,
    /// `true` = the day's year is disabled.
    pub should_disable_year: Option<&'a dyn Fn(&D) -> bool>,
}

impl<D> ValidationRules<'_, D> {
    /// No rules: every parsable value is accepted.
    #[must_use]
    pub fn none() -> Self {
        Self {
            min_date: None,
            max_date: None,
            disable_future: false,
            disable_past: false,
            should_disable_date: None,
            should_disable_year: None,
        }
    }
}

impl<D> Default for ValidationRules<'_, D> {
    fn default() -> Self {
        Self::none()
    }
}

impl<D> Clone for ValidationRules<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for ValidationRules<'_, D> {}

impl<D: fmt::Debug> fmt::Debug for ValidationRules<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRules")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("disable_future", &self.disable_future)
            .field("disable_past", &self.disable_past)
            .field("should_disable_date", &self.should_disable_date.is_some())
            .field("should_disable_year", &self.should_disable_year.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Side errors plus the inversion flag for a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RangeValidation {
    /// Start side error.
    pub start: Option<DateValidationError>,
    /// End side error.
    pub end: Option<DateValidationError>,
    /// Both sides parse and start is after end.
    pub invalid_range: bool,
}

impl RangeValidation {
    /// No side error and no inversion.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_none() && self.end.is_none() && !self.invalid_range
    }

    /// Error of one side.
    #[must_use]
    pub fn side(&self, position: SelectionPosition) -> Option<DateValidationError> {
        match position {
            SelectionPosition::Start => self.start,
            SelectionPosition::End => self.end,
        }
    }

    /// Error to show on one side's field: its own error, or the inversion.
    #[must_use]
    pub fn field_error(&self, position: SelectionPosition) -> Option<DateValidationError> {
        self.side(position)
            .or(self.invalid_range.then_some(DateValidationError::InvalidRange))
    }
}

/// Outcome of validating a picker value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReport {
    /// Single-date result; `None` means valid.
    Single(Option<DateValidationError>),
    /// Range result.
    Range(RangeValidation),
}

impl ValidationReport {
    /// Whether nothing is flagged.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Single(error) => error.is_none(),
            Self::Range(range) => range.is_valid(),
        }
    }

    /// Whether something is flagged.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Whether `error` appears anywhere in the report.
    #[must_use]
    pub fn contains(&self, error: DateValidationError) -> bool {
        match self {
            Self::Single(found) => *found == Some(error),
            Self::Range(range) => {
                range.start == Some(error)
                    || range.end == Some(error)
                    || (error == DateValidationError::InvalidRange && range.invalid_range)
            }
        }
    }

    /// First error in reading order (start, end, inversion).
    #[must_use]
    pub fn first_error(&self) -> Option<DateValidationError> {
        match self {
            Self::Single(error) => *error,
            Self::Range(range) => range.field_error(SelectionPosition::Start).or(range.end),
        }
    }

    /// The range part, if this is a range report.
    #[must_use]
    pub fn as_range(&self) -> Option<&RangeValidation> {
        match self {
            Self::Single(_) => None,
            Self::Range(range) => Some(range),
        }
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate one date. Empty values are valid.
pub fn validate_date<A: DateAdapter>(
    adapter: &A,
    value: &DateValue<A::Date>,
    rules: &ValidationRules<'_, A::Date>,
    now: &A::Date,
) -> Option<DateValidationError> {
    match value {
        DateValue::Empty => None,
        DateValue::Invalid(_) => Some(DateValidationError::InvalidDate),
        DateValue::Valid(date) => validate_day(adapter, date, rules, now),
    }
}

fn validate_day<A: DateAdapter>(
    adapter: &A,
    date: &A::Date,
    rules: &ValidationRules<'_, A::Date>,
    now: &A::Date,
) -> Option<DateValidationError> {
    if rules.disable_future && adapter.is_after_day(date, now) {
        return Some(DateValidationError::DisableFuture);
    }
    if rules.disable_past && adapter.is_before_day(date, now) {
        return Some(DateValidationError::DisablePast);
    }
    if let Some(min) = rules.min_date
        && adapter.is_before_day(date, min)
    {
        return Some(DateValidationError::MinDate);
    }
    if let Some(max) = rules.max_date
        && adapter.is_after_day(date, max)
    {
        return Some(DateValidationError::MaxDate);
    }
    if let Some(predicate) = rules.should_disable_date
        && predicate(date)
    {
        return Some(DateValidationError::ShouldDisableDate);
    }
    if let Some(predicate) = rules.should_disable_year
        && predicate(date)
    {
        return Some(DateValidationError::ShouldDisableYear);
    }
    None
}

/// Validate a pair side by side and flag inversion.
///
/// Inversion is flagged whenever both sides parse and start is after end,
/// independent of any side error, so a `minDate` on one side and an
/// inverted pair are reported together.
pub fn validate_range<A: DateAdapter>(
    adapter: &A,
    range: &DateRange<A::Date>,
    rules: &ValidationRules<'_, A::Date>,
    now: &A::Date,
) -> RangeValidation {
    let start = validate_date(adapter, &range.start, rules, now);
    let end = validate_date(adapter, &range.end, rules, now);
    let invalid_range = match (range.start.as_date(), range.end.as_date()) {
        (Some(s), Some(e)) => adapter.is_after(s, e),
        _ => false,
    };
    RangeValidation {
        start,
        end,
        invalid_range,
    }
}

/// Validate a picker value of either shape.
pub fn validate<A: DateAdapter>(
    adapter: &A,
    value: &PickerValue<A::Date>,
    rules: &ValidationRules<'_, A::Date>,
    now: &A::Date,
) -> ValidationReport {
    match value {
        PickerValue::Single(date) => ValidationReport::Single(validate_date(adapter, date, rules, now)),
        PickerValue::Range(range) => ValidationReport::Range(validate_range(adapter, range, rules, now)),
    }
}

/// Whether a calendar cell for `day` should be disabled.
pub fn is_day_disabled<A: DateAdapter>(
    adapter: &A,
    day: &A::Date,
    rules: &ValidationRules<'_, A::Date>,
    now: &A::Date,
) -> bool {
    validate_day(adapter, day, rules, now).is_some()
}
