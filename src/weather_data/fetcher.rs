use crate::interval::range::DateRange;
use crate::types::location::LatLon;
use crate::types::observation::WeatherSeries;
use crate::types::variable::WeatherVariable;
use crate::weather_data::archive::{ApiErrorBody, ArchiveResponse};
use crate::weather_data::error::FetchError;
use log::{info, warn};
use reqwest::Client;

pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com";

/// Client for the historical daily weather archive.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Client,
    base_url: String,
}

impl WeatherFetcher {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the four daily variables for `location` over `range`, bounds included.
    ///
    /// The archive resolves the local timezone from the coordinates
    /// (`timezone=auto`), so dates are local calendar days.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MalformedResponse`] if the `daily` arrays are
    /// missing or differ in length from `daily.time`, and the other
    /// [`FetchError`] variants for transport, status and decoding failures.
    pub async fn fetch_weather(
        &self,
        location: LatLon,
        range: &DateRange,
    ) -> Result<WeatherSeries, FetchError> {
        let url = format!("{}/v1/archive", self.base_url);
        let daily = WeatherVariable::ALL
            .iter()
            .map(|v| v.api_name())
            .collect::<Vec<_>>()
            .join(",");
        info!("Fetching daily weather at {} for {} from {}", location, range, url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", location.latitude().to_string()),
                ("longitude", location.longitude().to_string()),
                ("start_date", range.start_param()),
                ("end_date", range.end_param()),
                ("daily", daily),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.clone(), e))?;

        if !status.is_success() {
            warn!("HTTP error {} for {}", status, url);
            return Err(match serde_json::from_slice::<ApiErrorBody>(&body) {
                Ok(api_error) if api_error.error => FetchError::Api {
                    status,
                    reason: api_error.reason,
                },
                _ => FetchError::HttpStatus { url, status },
            });
        }

        let parsed: ArchiveResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::JsonParse(url.clone(), e))?;
        let daily = parsed.daily.ok_or_else(|| {
            FetchError::MalformedResponse("response has no 'daily' block".to_string())
        })?;

        let observations = daily.into_observations().inspect_err(|e| {
            warn!("Discarding archive response from {}: {}", url, e);
        })?;
        info!(
            "Received {} daily observations for {}",
            observations.len(),
            location
        );
        Ok(WeatherSeries::new(observations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap()
    }

    fn archive_body() -> serde_json::Value {
        serde_json::json!({
            "latitude": 38.71,
            "longitude": -9.14,
            "timezone": "Europe/Lisbon",
            "daily_units": {"time": "iso8601", "temperature_2m_max": "°C"},
            "daily": {
                "time": ["2024-01-30", "2024-01-31", "2024-02-01"],
                "temperature_2m_max": [15.2, null, 17.0],
                "relative_humidity_2m_mean": [80, 75, 70],
                "precipitation_sum": [0.0, 1.4, 0.2],
                "shortwave_radiation_sum": [8.0, 7.5, 9.1]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_weather_sends_expected_query() -> Result<(), FetchError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/archive"))
            .and(query_param("latitude", "38.71"))
            .and(query_param("longitude", "-9.14"))
            .and(query_param("start_date", "2024-01-30"))
            .and(query_param("end_date", "2024-02-01"))
            .and(query_param(
                "daily",
                "temperature_2m_max,relative_humidity_2m_mean,precipitation_sum,shortwave_radiation_sum",
            ))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(archive_body()))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new(Client::new(), &server.uri());
        let series = fetcher.fetch_weather(LatLon(38.71, -9.14), &range()).await?;

        assert_eq!(series.len(), 3);
        assert_eq!(series.observations()[1].temperature, None);
        assert_eq!(series.observations()[2].radiation, Some(9.1));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_weather_api_error_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/archive"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Parameter 'start_date' is out of allowed range"
            })))
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new(Client::new(), &server.uri());
        let err = fetcher
            .fetch_weather(LatLon(0.0, 0.0), &range())
            .await
            .unwrap_err();
        match err {
            FetchError::Api { status, reason } => {
                assert_eq!(status.as_u16(), 400);
                assert!(reason.contains("start_date"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_weather_plain_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new(Client::new(), &server.uri());
        let err = fetcher
            .fetch_weather(LatLon(0.0, 0.0), &range())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { .. }));
    }

    #[tokio::test]
    async fn test_fetch_weather_missing_daily_block() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 0.0
            })))
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new(Client::new(), &server.uri());
        let err = fetcher
            .fetch_weather(LatLon(0.0, 0.0), &range())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_weather_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let fetcher = WeatherFetcher::new(Client::new(), &server.uri());
        let err = fetcher
            .fetch_weather(LatLon(0.0, 0.0), &range())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::JsonParse(..)));
    }
}
