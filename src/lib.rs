mod aggregate;
mod dashboard;
mod error;
mod frames;
mod geocoding;
mod interval;
mod query;
mod types;
mod weather_data;

pub use dashboard::*;
pub use error::{DashboardError, ErrorKind};

pub use aggregate::box_stats::BoxStats;
pub use aggregate::monthly::{group_all_by_month, group_by_month, MonthlyBucket};

pub use frames::daily_frame::DailyFrame;

pub use interval::error::ValidationError;
pub use interval::range::{resolve, DateRange, MAX_CUSTOM_RANGE_DAYS};
pub use interval::selection::{IntervalSelection, ParsePresetError, Preset, PresetOffset};

pub use query::outcome::QueryOutcome;
pub use query::state::{ErrorReason, QuerySession, QueryState, RequestToken};

pub use types::location::{LatLon, LocationInfo};
pub use types::month_key::{MonthKey, ParseMonthKeyError};
pub use types::observation::{DailyObservation, WeatherSeries};
pub use types::variable::{ParseVariableError, WeatherVariable};

pub use geocoding::error::GeocodeError;
pub use geocoding::geocoder::Geocoder;
pub use weather_data::error::FetchError;
pub use weather_data::fetcher::WeatherFetcher;
