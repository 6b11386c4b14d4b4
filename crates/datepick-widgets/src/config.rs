#![forbid(unsafe_code)]

//! Picker configuration.
//!
//! The recognized options and where they act:
//!
//! | Option | Effect |
//! |--------|--------|
//! | `min_date` / `max_date` | validation bounds (day granularity) |
//! | `disable_future` / `disable_past` | validation against "today" |
//! | `should_disable_date` / `should_disable_year` | validation predicates |
//! | `disable_close_on_select` | overlay stays open after a calendar commit |
//! | `disable_masked_input` | fields take free text instead of a mask |
//! | `mask` / `format` | input template and display/parse format |
//! | `open` | controlled overlay visibility |
//!
//! # Example
//!
//! ```ignore
//! use datepick_widgets::PickerConfig;
//!
//! let config = PickerConfig::default()
//!     .min_date(jan_first)
//!     .disable_future(true)
//!     .should_disable_date(|d: &NaiveDate| d.weekday() == Weekday::Sun);
//! ```

use std::fmt;
use std::sync::Arc;

use datepick_core::{DateAdapter, ParseError};

use crate::mask::MaskTemplate;
use crate::validation::ValidationRules;

/// Default input template.
pub const DEFAULT_MASK: &str = "__/__/____";

/// Default display/parse format.
pub const DEFAULT_FORMAT: &str = "MM/dd/yyyy";

/// A shareable date predicate (`true` = disabled).
pub type SharedPredicate<D> = Arc<dyn Fn(&D) -> bool + Send + Sync>;

/// Invalid picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The display format cannot be handled by the adapter.
    #[error("unsupported display format: {0}")]
    UnsupportedFormat(#[from] ParseError),

    /// The mask has no `_` digit slots.
    #[error("mask `{mask}` has no digit slots")]
    EmptyMask {
        /// The offending mask.
        mask: String,
    },
}

/// How fields accept keyboard text, resolved from the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Masked input following the template.
    Masked(MaskTemplate),
    /// Free text, parsed on every edit.
    Plain,
}

impl InputMode {
    /// The template, if masked.
    #[must_use]
    pub fn template(&self) -> Option<&MaskTemplate> {
        match self {
            Self::Masked(template) => Some(template),
            Self::Plain => None,
        }
    }
}

/// Configuration for a date picker.
#[derive(Clone)]
pub struct PickerConfig<D> {
    /// Earliest selectable day.
    pub min_date: Option<D>,
    /// Latest selectable day.
    pub max_date: Option<D>,
    /// Reject days after today.
    pub disable_future: bool,
    /// Reject days before today.
    pub disable_past: bool,
    /// Reject days for which this returns `true`.
    pub should_disable_date: Option<SharedPredicate<D>>,
    /// Reject days whose year this returns `true` for.
    pub should_disable_year: Option<SharedPredicate<D>>,
    /// Keep the overlay open after a calendar commit.
    pub disable_close_on_select: bool,
    /// Free-text fields instead of masked ones.
    pub disable_masked_input: bool,
    /// Input template (`_` = digit slot).
    pub mask: String,
    /// Display/parse format in adapter tokens.
    pub format: String,
    /// Controlled overlay visibility; `None` lets the picker decide.
    pub open: Option<bool>,
    /// Close after a commit even when the host forced the overlay open.
    pub close_on_commit_when_forced_open: bool,
    /// Move range editing to the end field after a valid start commit.
    pub auto_advance_to_end: bool,
}

impl<D> Default for PickerConfig<D> {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            disable_future: false,
            disable_past: false,
            should_disable_date: None,
            should_disable_year: None,
            disable_close_on_select: false,
            disable_masked_input: false,
            mask: DEFAULT_MASK.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            open: None,
            close_on_commit_when_forced_open: false,
            auto_advance_to_end: true,
        }
    }
}

impl<D: fmt::Debug> fmt::Debug for PickerConfig<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("disable_future", &self.disable_future)
            .field("disable_past", &self.disable_past)
            .field("should_disable_date", &self.should_disable_date.is_some())
            .field("should_disable_year", &self.should_disable_year.is_some())
            .field("disable_close_on_select", &self.disable_close_on_select)
            .field("disable_masked_input", &self.disable_masked_input)
            .field("mask", &self.mask)
            .field("format", &self.format)
            .field("open", &self.open)
            .field("close_on_commit_when_forced_open", &self.close_on_commit_when_forced_open)
            .field("auto_advance_to_end", &self.auto_advance_to_end)
            .finish()
    }
}

impl<D> PickerConfig<D> {
    /// Set the earliest selectable day.
    #[must_use]
    pub fn min_date(mut self, date: D) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Set the latest selectable day.
    #[must_use]
    pub fn max_date(mut self, date: D) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Reject days after today.
    #[must_use]
    pub fn disable_future(mut self, disable: bool) -> Self {
        self.disable_future = disable;
        self
    }

    /// Reject days before today.
    #[must_use]
    pub fn disable_past(mut self, disable: bool) -> Self {
        self.disable_past = disable;
        self
    }

    /// Reject days matching `predicate`.
    #[must_use]
    pub fn should_disable_date(mut self, predicate: impl Fn(&D) -> bool + Send + Sync + 'static) -> Self {
        self.should_disable_date = Some(Arc::new(predicate));
        self
    }

    /// Reject days whose year matches `predicate`.
    #[must_use]
    pub fn should_disable_year(mut self, predicate: impl Fn(&D) -> bool + Send + Sync + 'static) -> Self {
        self.should_disable_year = Some(Arc::new(predicate));
        self
    }

    /// Keep the overlay open after a calendar commit.
    #[must_use]
    pub fn disable_close_on_select(mut self, disable: bool) -> Self {
        self.disable_close_on_select = disable;
        self
    }

    /// Use free-text fields.
    #[must_use]
    pub fn disable_masked_input(mut self, disable: bool) -> Self {
        self.disable_masked_input = disable;
        self
    }

    /// Set the input template.
    #[must_use]
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = mask.into();
        self
    }

    /// Set the display/parse format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Control overlay visibility from outside.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Close after a commit even when the host forced the overlay open.
    #[must_use]
    pub fn close_on_commit_when_forced_open(mut self, close: bool) -> Self {
        self.close_on_commit_when_forced_open = close;
        self
    }

    /// Move range editing to the end field after a valid start commit.
    #[must_use]
    pub fn auto_advance_to_end(mut self, advance: bool) -> Self {
        self.auto_advance_to_end = advance;
        self
    }

    /// Lend the validation options to the validation engine.
    #[must_use]
    pub fn rules(&self) -> ValidationRules<'_, D> {
        ValidationRules {
            min_date: self.min_date.as_ref(),
            max_date: self.max_date.as_ref(),
            disable_future: self.disable_future,
            disable_past: self.disable_past,
            should_disable_date: self
                .should_disable_date
                .as_deref()
                .map(|f| f as &dyn Fn(&D) -> bool),
            should_disable_year: self
                .should_disable_year
                .as_deref()
                .map(|f| f as &dyn Fn(&D) -> bool),
        }
    }

    /// Check the configuration against an adapter and decide how fields
    /// accept text.
    ///
    /// A mask that does not line up with the format falls back to free-text
    /// input with a warning, as does a format whose width varies by date.
    /// `min_date` after `max_date` is left to the caller and only logged.
    pub fn resolve_input<A>(&self, adapter: &A) -> Result<InputMode, ConfigError>
    where
        A: DateAdapter<Date = D>,
    {
        adapter.check_format(&self.format)?;

        if let (Some(min), Some(max)) = (&self.min_date, &self.max_date)
            && adapter.is_after_day(min, max)
        {
            datepick_core::warn!(
                min = %adapter.format(min, &self.format),
                max = %adapter.format(max, &self.format),
                "min_date is after max_date; every day will be rejected"
            );
        }

        if self.disable_masked_input {
            return Ok(InputMode::Plain);
        }

        let template = MaskTemplate::new(&self.mask)?;
        match MaskTemplate::from_format(adapter, &self.format)? {
            Some(expected) if expected == template => Ok(InputMode::Masked(template)),
            Some(expected) => {
                datepick_core::warn!(
                    mask = %self.mask,
                    format = %self.format,
                    expected = %expected.as_string(),
                    "mask does not match format; falling back to free-text input"
                );
                Ok(InputMode::Plain)
            }
            None => {
                datepick_core::warn!(
                    format = %self.format,
                    "format has variable width; falling back to free-text input"
                );
                Ok(InputMode::Plain)
            }
        }
    }
}
