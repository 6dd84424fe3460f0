use crate::geocoding::error::GeocodeError;
use crate::interval::error::ValidationError;
use crate::types::month_key::MonthKey;
use crate::weather_data::error::FetchError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Failed processing DataFrame: {0}")]
    Frame(#[from] PolarsError),

    #[error("'{0}' is not a calendar month")]
    InvalidMonth(MonthKey),
}

/// The three ways a query can fail, as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad interval input; fixed by re-entering dates.
    Validation,
    /// The place name matched nothing; fixed by refining the query.
    NotFound,
    /// Transport or response failure from either service; worth retrying.
    Fetch,
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Validation(_) | DashboardError::InvalidMonth(_) => {
                ErrorKind::Validation
            }
            DashboardError::Geocode(e) if e.is_not_found() => ErrorKind::NotFound,
            DashboardError::Geocode(_)
            | DashboardError::Fetch(_)
            | DashboardError::HttpClient(_)
            | DashboardError::Frame(_) => ErrorKind::Fetch,
        }
    }
}
