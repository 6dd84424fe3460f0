//! The query lifecycle a view drives: `Idle → Loading → Success | Error`, with
//! a request token so a slow, superseded response can never overwrite a newer one.

use crate::error::{DashboardError, ErrorKind};
use crate::geocoding::error::GeocodeError;
use crate::interval::error::ValidationError;
use crate::query::outcome::QueryOutcome;
use log::{debug, warn};

/// Identifies one submission. Tokens increase monotonically per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Why the latest query failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorReason {
    NotFound { query: String },
    Validation(ValidationError),
    Fetch(String),
}

impl ErrorReason {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorReason::NotFound { .. } => ErrorKind::NotFound,
            ErrorReason::Validation(_) => ErrorKind::Validation,
            ErrorReason::Fetch(_) => ErrorKind::Fetch,
        }
    }

    /// Text for the inline error message of the view.
    pub fn user_message(&self) -> String {
        match self {
            ErrorReason::NotFound { query } => format!(
                "No place named '{}' was found. Try a more specific name.",
                query
            ),
            ErrorReason::Validation(e) => e.to_string(),
            ErrorReason::Fetch(detail) => format!(
                "Could not load weather data ({}). Please try again.",
                detail
            ),
        }
    }
}

impl From<&DashboardError> for ErrorReason {
    fn from(err: &DashboardError) -> Self {
        match err {
            DashboardError::Validation(e) => ErrorReason::Validation(e.clone()),
            DashboardError::Geocode(GeocodeError::NotFound { query }) => ErrorReason::NotFound {
                query: query.clone(),
            },
            other => ErrorReason::Fetch(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    /// A query is in flight. `previous` keeps the last successful result on
    /// screen until the new one settles.
    Loading {
        token: RequestToken,
        previous: Option<Box<QueryOutcome>>,
    },
    Success(Box<QueryOutcome>),
    Error(ErrorReason),
}

impl QueryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading { .. })
    }

    pub fn error(&self) -> Option<&ErrorReason> {
        match self {
            QueryState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Owns the [`QueryState`] of one dashboard view.
///
/// [`QuerySession::begin`] and [`QuerySession::settle`] are the only ways the
/// state changes.
#[derive(Debug, Default)]
pub struct QuerySession {
    state: QueryState,
    next_token: u64,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Enters `Loading` and returns the token the caller must settle with.
    pub fn begin(&mut self) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        let previous = match std::mem::take(&mut self.state) {
            QueryState::Success(outcome) => Some(outcome),
            QueryState::Loading { previous, .. } => previous,
            QueryState::Idle | QueryState::Error(_) => None,
        };
        debug!("Query {:?} started", token);
        self.state = QueryState::Loading { token, previous };
        token
    }

    /// Applies the result of the query identified by `token`.
    ///
    /// Results of superseded queries are dropped and `false` is returned.
    /// An error discards any earlier result, so no stale location or series
    /// stays visible next to the error message.
    pub fn settle(
        &mut self,
        token: RequestToken,
        result: Result<QueryOutcome, DashboardError>,
    ) -> bool {
        match &self.state {
            QueryState::Loading { token: current, .. } if *current == token => {}
            _ => {
                warn!("Dropping stale response for query {:?}", token);
                return false;
            }
        }
        self.state = match result {
            Ok(outcome) => QueryState::Success(Box::new(outcome)),
            Err(err) => {
                warn!("Query {:?} failed: {}", token, err);
                QueryState::Error(ErrorReason::from(&err))
            }
        };
        true
    }

    /// The result a view should currently display: the settled success, or
    /// the previous success while a new query is loading.
    pub fn displayed(&self) -> Option<&QueryOutcome> {
        match &self.state {
            QueryState::Success(outcome) => Some(&**outcome),
            QueryState::Loading {
                previous: Some(outcome),
                ..
            } => Some(&**outcome),
            _ => None,
        }
    }
}
