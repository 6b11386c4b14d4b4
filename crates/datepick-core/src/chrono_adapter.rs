#![forbid(unsafe_code)]

//! [`DateAdapter`] over [`chrono::NaiveDate`].
//!
//! Format strings use date-fns style tokens (`MM/dd/yyyy`), which are
//! translated to chrono's strftime items on each call:
//!
//! | Token | Meaning | Format | Parse |
//! |-------|---------|--------|-------|
//! | `yyyy`, `y` | full year | `%Y` | `%Y` |
//! | `yy` | two-digit year | `%y` | `%y` |
//! | `MM` / `M` | month, padded / unpadded | `%m` / `%-m` | `%m` |
//! | `MMM` / `MMMM` | month name, short / long | `%b` / `%B` | `%b` / `%B` |
//! | `dd` / `d` | day, padded / unpadded | `%d` / `%-d` | `%d` |
//! | `EEE` / `EEEE` | weekday name, short / long | `%a` / `%A` | `%a` / `%A` |
//!
//! Any other ASCII letter is rejected with [`ParseError::UnsupportedToken`].

use chrono::{Datelike, Days, Local, Months, NaiveDate};

use crate::adapter::{DateAdapter, DateUnit};
use crate::error::ParseError;

/// Chrono-backed adapter for calendar dates without a time component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoAdapter {
    /// Pinned "today"; `None` reads the local clock.
    today: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Format,
    Parse,
}

impl ChronoAdapter {
    /// Adapter reading the local clock for `today`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapter whose `today` is always `date`.
    #[must_use]
    pub fn fixed_today(date: NaiveDate) -> Self {
        Self { today: Some(date) }
    }

    fn translate(format: &str, direction: Direction) -> Result<String, ParseError> {
        let mut out = String::with_capacity(format.len() * 2);
        let mut chars = format.chars().peekable();

        while let Some(c) = chars.next() {
            if !c.is_ascii_alphabetic() {
                if c == '%' {
                    out.push_str("%%");
                } else {
                    out.push(c);
                }
                continue;
            }

            let mut run = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                run += 1;
            }

            let item = match (c, run, direction) {
                ('y', 2, _) => "%y",
                ('y', 1 | 3 | 4, _) => "%Y",
                ('M', 1, Direction::Format) => "%-m",
                ('M', 1 | 2, _) => "%m",
                ('M', 3, _) => "%b",
                ('M', 4, _) => "%B",
                ('d', 1, Direction::Format) => "%-d",
                ('d', 1 | 2, _) => "%d",
                ('E', 1..=3, _) => "%a",
                ('E', 4, _) => "%A",
                _ => {
                    return Err(ParseError::UnsupportedToken {
                        token: std::iter::repeat_n(c, run).collect(),
                        format: format.to_string(),
                    });
                }
            };
            out.push_str(item);
        }

        Ok(out)
    }
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDate;

    fn parse(&self, text: &str, format: &str) -> Result<NaiveDate, ParseError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }
        let pattern = Self::translate(format, Direction::Parse)?;
        NaiveDate::parse_from_str(text, &pattern).map_err(|_| ParseError::Mismatch {
            text: text.to_string(),
            format: format.to_string(),
        })
    }

    fn format(&self, value: &NaiveDate, format: &str) -> String {
        match Self::translate(format, Direction::Format) {
            Ok(pattern) => value.format(&pattern).to_string(),
            Err(err) => {
                crate::warn!(%err, "falling back to ISO date format");
                value.format("%Y-%m-%d").to_string()
            }
        }
    }

    fn is_equal(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a == b
    }

    fn is_before(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a < b
    }

    fn is_after(&self, a: &NaiveDate, b: &NaiveDate) -> bool {
        a > b
    }

    fn add(&self, value: &NaiveDate, amount: i64, unit: DateUnit) -> NaiveDate {
        let forward = amount >= 0;
        let magnitude = amount.unsigned_abs();
        let shifted = match unit {
            DateUnit::Days => shift_days(*value, magnitude, forward),
            DateUnit::Weeks => shift_days(*value, magnitude.saturating_mul(7), forward),
            DateUnit::Months => shift_months(*value, magnitude, forward),
            DateUnit::Years => shift_months(*value, magnitude.saturating_mul(12), forward),
        };
        shifted.unwrap_or(if forward { NaiveDate::MAX } else { NaiveDate::MIN })
    }

    fn start_of_day(&self, value: &NaiveDate) -> NaiveDate {
        *value
    }

    fn date_from_ymd(&self, year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn check_format(&self, format: &str) -> Result<(), ParseError> {
        Self::translate(format, Direction::Format).map(|_| ())
    }
}

fn shift_days(value: NaiveDate, days: u64, forward: bool) -> Option<NaiveDate> {
    if forward {
        value.checked_add_days(Days::new(days))
    } else {
        value.checked_sub_days(Days::new(days))
    }
}

fn shift_months(value: NaiveDate, months: u64, forward: bool) -> Option<NaiveDate> {
    let months = Months::new(u32::try_from(months).ok()?);
    if forward {
        value.checked_add_months(months)
    } else {
        value.checked_sub_months(months)
    }
}

/// Calendar year of a chrono date; handy for `should_disable_year` predicates.
#[must_use]
pub fn year_of(date: &NaiveDate) -> i32 {
    date.year()
}
