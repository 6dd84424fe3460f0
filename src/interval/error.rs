use chrono::NaiveDate;
use thiserror::Error;

/// Problems with a user-selected interval. All of them can be fixed by
/// re-entering the dates; none is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A custom interval needs a start date")]
    MissingStart,

    #[error("Start date {start} must be before end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("Interval of {days} days exceeds the maximum of {max_days} days")]
    RangeTooLong { days: i64, max_days: i64 },

    #[error("Date arithmetic on {0} left the supported calendar range")]
    DateOutOfRange(NaiveDate),
}
