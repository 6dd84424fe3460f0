//! Resolves an [`IntervalSelection`] into a concrete, validated [`DateRange`].

use crate::interval::error::ValidationError;
use crate::interval::selection::IntervalSelection;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Longest custom interval accepted, in days (two years).
pub const MAX_CUSTOM_RANGE_DAYS: i64 = 730;

/// Date format used for the archive's `start_date` / `end_date` parameters.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed interval of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting `start > end`. A single day (`start == end`) is valid.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Distance between the bounds in days (`end - start`).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Number of calendar days covered, bounds included.
    pub fn day_count(&self) -> i64 {
        self.span_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `start` formatted as `yyyy-MM-dd`.
    pub fn start_param(&self) -> String {
        self.start.format(QUERY_DATE_FORMAT).to_string()
    }

    /// `end` formatted as `yyyy-MM-dd`.
    pub fn end_param(&self) -> String {
        self.end.format(QUERY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_param(), self.end_param())
    }
}

/// Resolves `selection` into concrete bounds relative to `today`.
///
/// Presets end at `today` and start one calendar unit earlier. A custom
/// selection is checked in a fixed order and the first failure is returned:
/// missing start, then `start >= end` (with `end` defaulting to `today`),
/// then a span longer than [`MAX_CUSTOM_RANGE_DAYS`].
///
/// ```
/// use meteoboard::{resolve, IntervalSelection, Preset};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// let range = resolve(IntervalSelection::Preset(Preset::OneMonth), today).unwrap();
/// assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(range.end(), today);
/// ```
pub fn resolve(selection: IntervalSelection, today: NaiveDate) -> Result<DateRange, ValidationError> {
    let range = match selection {
        IntervalSelection::Preset(preset) => {
            let start = preset
                .start_from(today)
                .ok_or(ValidationError::DateOutOfRange(today))?;
            DateRange { start, end: today }
        }
        IntervalSelection::Custom { start, end } => {
            let start = start.ok_or(ValidationError::MissingStart)?;
            let end = end.unwrap_or(today);
            if start >= end {
                return Err(ValidationError::InvertedRange { start, end });
            }
            let days = (end - start).num_days();
            if days > MAX_CUSTOM_RANGE_DAYS {
                return Err(ValidationError::RangeTooLong {
                    days,
                    max_days: MAX_CUSTOM_RANGE_DAYS,
                });
            }
            DateRange { start, end }
        }
    };
    debug!("Resolved {:?} against {} to {}", selection, today, range);
    Ok(range)
}
