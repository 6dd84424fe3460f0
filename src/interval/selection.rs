//! Defines the interval choices a user can make: a named preset relative to
//! today, or an explicit custom range.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named, fixed-offset interval ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

/// How far back a preset reaches. Weeks are counted in days, months and years
/// in calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetOffset {
    Days(u64),
    Months(u32),
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::OneWeek,
        Preset::TwoWeeks,
        Preset::OneMonth,
        Preset::ThreeMonths,
        Preset::SixMonths,
        Preset::OneYear,
    ];

    pub fn offset(self) -> PresetOffset {
        match self {
            Preset::OneWeek => PresetOffset::Days(7),
            Preset::TwoWeeks => PresetOffset::Days(14),
            Preset::OneMonth => PresetOffset::Months(1),
            Preset::ThreeMonths => PresetOffset::Months(3),
            Preset::SixMonths => PresetOffset::Months(6),
            Preset::OneYear => PresetOffset::Months(12),
        }
    }

    /// The first day of the preset interval ending at `today`.
    ///
    /// Month subtraction clamps to the end of shorter months, so one month
    /// before 2024-03-31 is 2024-02-29. Returns `None` only when the result
    /// falls outside chrono's supported calendar.
    pub fn start_from(self, today: NaiveDate) -> Option<NaiveDate> {
        match self.offset() {
            PresetOffset::Days(days) => today.checked_sub_days(Days::new(days)),
            PresetOffset::Months(months) => today.checked_sub_months(Months::new(months)),
        }
    }

    /// Short code used on command lines and in query strings (`1w`, `3m`, `1y`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Preset::OneWeek => "1w",
            Preset::TwoWeeks => "2w",
            Preset::OneMonth => "1m",
            Preset::ThreeMonths => "3m",
            Preset::SixMonths => "6m",
            Preset::OneYear => "1y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::OneWeek => "1 week",
            Preset::TwoWeeks => "2 weeks",
            Preset::OneMonth => "1 month",
            Preset::ThreeMonths => "3 months",
            Preset::SixMonths => "6 months",
            Preset::OneYear => "1 year",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown interval preset '{0}', expected one of 1w, 2w, 1m, 3m, 6m, 1y")]
pub struct ParsePresetError(pub String);

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(needle) || p.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}

/// The interval a user picked for a query.
///
/// `Custom` keeps both bounds optional because that is how they arrive from a
/// form. The resolver enforces that a start is present and defaults a missing
/// end to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalSelection {
    Preset(Preset),
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl IntervalSelection {
    pub fn custom(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        IntervalSelection::Custom {
            start: Some(start),
            end,
        }
    }
}

impl From<Preset> for IntervalSelection {
    fn from(preset: Preset) -> Self {
        IntervalSelection::Preset(preset)
    }
}

impl Default for IntervalSelection {
    fn default() -> Self {
        IntervalSelection::Preset(Preset::ThreeMonths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse_codes_and_labels() {
        assert_eq!("1w".parse::<Preset>(), Ok(Preset::OneWeek));
        assert_eq!("6M".parse::<Preset>(), Ok(Preset::SixMonths));
        assert_eq!("1 year".parse::<Preset>(), Ok(Preset::OneYear));
        assert!("5d".parse::<Preset>().is_err());
    }

    #[test]
    fn test_preset_display_round_trips_code() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn test_default_selection_is_three_months() {
        assert_eq!(
            IntervalSelection::default(),
            IntervalSelection::Preset(Preset::ThreeMonths)
        );
    }
}
