use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("No place found matching '{query}'")]
    NotFound { query: String },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse geocoding response from {0}")]
    JsonParse(String, #[source] reqwest::Error),

    #[error("Geocoding candidate '{name}' has an invalid coordinate '{value}'")]
    InvalidCoordinate { name: String, value: String },
}

impl GeocodeError {
    /// `true` when the lookup succeeded but nothing matched, as opposed to a
    /// transport or decoding failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeocodeError::NotFound { .. })
    }
}
