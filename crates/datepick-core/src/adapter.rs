#![forbid(unsafe_code)]

//! The date adapter capability.
//!
//! Pickers never perform calendar arithmetic or text conversion themselves.
//! Everything goes through a [`DateAdapter`], which owns the opaque date type
//! and its locale rules. Comparisons at day granularity are provided on top
//! of the required methods.

use std::fmt;

use crate::error::ParseError;

/// Calendar units accepted by [`DateAdapter::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    /// Calendar days.
    Days,
    /// Seven-day weeks.
    Weeks,
    /// Calendar months (day clamped to the target month's length).
    Months,
    /// Calendar years.
    Years,
}

/// Parse/format/compare/arithmetic capability over an opaque date type.
///
/// Implementations must be deterministic except for [`today`](Self::today),
/// which is the single point where wall-clock time may enter a picker.
pub trait DateAdapter {
    /// Opaque date type.
    type Date: Clone + fmt::Debug;

    /// Parse `text` using `format`.
    fn parse(&self, text: &str, format: &str) -> Result<Self::Date, ParseError>;

    /// Render `value` using `format`.
    fn format(&self, value: &Self::Date, format: &str) -> String;

    /// Exact equality.
    fn is_equal(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// `a` strictly before `b`.
    fn is_before(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// `a` strictly after `b`.
    fn is_after(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// Add `amount` (possibly negative) of `unit` to `value`.
    fn add(&self, value: &Self::Date, amount: i64, unit: DateUnit) -> Self::Date;

    /// Truncate `value` to the first instant of its day.
    fn start_of_day(&self, value: &Self::Date) -> Self::Date;

    /// Build a date from calendar fields, or `None` if they do not exist.
    fn date_from_ymd(&self, year: i32, month: u32, day: u32) -> Option<Self::Date>;

    /// The current day according to the adapter's clock.
    fn today(&self) -> Self::Date;

    /// Check that every token of `format` is understood.
    fn check_format(&self, _format: &str) -> Result<(), ParseError> {
        Ok(())
    }

    /// `a` and `b` fall on the same calendar day.
    fn is_same_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.is_equal(&self.start_of_day(a), &self.start_of_day(b))
    }

    /// `a` falls on a later calendar day than `b`.
    fn is_after_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.is_after(&self.start_of_day(a), &self.start_of_day(b))
    }

    /// `a` falls on an earlier calendar day than `b`.
    fn is_before_day(&self, a: &Self::Date, b: &Self::Date) -> bool {
        self.is_before(&self.start_of_day(a), &self.start_of_day(b))
    }

    /// `day` lies within `[start, end]` at day granularity.
    fn is_within_range(&self, day: &Self::Date, start: &Self::Date, end: &Self::Date) -> bool {
        !self.is_before_day(day, start) && !self.is_after_day(day, end)
    }
}
