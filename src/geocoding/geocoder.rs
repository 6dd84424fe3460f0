//! Forward geocoding: resolves a free-text place name to coordinates through a
//! Nominatim-compatible `/search` endpoint.

use crate::geocoding::error::GeocodeError;
use crate::types::location::LocationInfo;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// One candidate of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchCandidate {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    display_name: String,
}

impl SearchCandidate {
    fn into_location(self) -> Result<LocationInfo, GeocodeError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            // Unnamed features (e.g. postcodes) still carry a display name.
            _ => self
                .display_name
                .split(',')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
        };
        let latitude = parse_coordinate(&name, &self.lat)?;
        let longitude = parse_coordinate(&name, &self.lon)?;
        Ok(LocationInfo {
            name,
            display_name: self.display_name,
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate {
            name: name.to_string(),
            value: value.to_string(),
        })
}

/// Client for the place-search endpoint.
///
/// Only the best match is requested (`limit=1`); when the service returns
/// more than one candidate anyway, the first one wins.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolves `place` to a single [`LocationInfo`].
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when the service yields no candidate
    /// (or `place` is blank, in which case no request is made). Transport,
    /// status and decoding failures map to the remaining variants; none of
    /// them is retried.
    pub async fn geocode(&self, place: &str) -> Result<LocationInfo, GeocodeError> {
        let query = place.trim();
        if query.is_empty() {
            return Err(GeocodeError::NotFound {
                query: place.to_string(),
            });
        }

        let url = format!("{}/search", self.base_url);
        info!("Geocoding '{}' via {}", query, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| GeocodeError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    GeocodeError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    GeocodeError::NetworkRequest(url, e)
                });
            }
        };

        let candidates: Vec<SearchCandidate> = response
            .json()
            .await
            .map_err(|e| GeocodeError::JsonParse(url.clone(), e))?;

        let Some(best) = candidates.into_iter().next() else {
            warn!("No geocoding candidates for '{}'", query);
            return Err(GeocodeError::NotFound {
                query: query.to_string(),
            });
        };

        let location = best.into_location()?;
        info!(
            "Geocoded '{}' to {} ({}, {})",
            query, location.display_name, location.latitude, location.longitude
        );
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn lisboa_candidate() -> serde_json::Value {
        serde_json::json!({
            "place_id": 1,
            "lat": "38.7077507",
            "lon": "-9.1365919",
            "name": "Lisboa",
            "display_name": "Lisboa, Portugal"
        })
    }

    #[tokio::test]
    async fn test_geocode_maps_first_candidate() -> Result<(), GeocodeError> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Lisboa"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                lisboa_candidate(),
                {"lat": "0", "lon": "0", "name": "Other", "display_name": "Other"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let geocoder = Geocoder::new(Client::new(), &server.uri());
        let location = geocoder.geocode("  Lisboa ").await?;

        assert_eq!(location.name, "Lisboa");
        assert_eq!(location.display_name, "Lisboa, Portugal");
        assert!((location.latitude - 38.7077507).abs() < 1e-9);
        assert!((location.longitude + 9.1365919).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn test_geocode_zero_candidates_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let geocoder = Geocoder::new(Client::new(), &server.uri());
        let err = geocoder.geocode("Atlantis").await.unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_geocode_blank_query_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let geocoder = Geocoder::new(Client::new(), &server.uri());
        let err = geocoder.geocode("   ").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_geocode_server_error_is_not_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let geocoder = Geocoder::new(Client::new(), &server.uri());
        let err = geocoder.geocode("Lisboa").await.unwrap_err();
        match err {
            GeocodeError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_geocode_bad_coordinate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "north", "lon": "1.0", "name": "Nowhere", "display_name": "Nowhere"}
            ])))
            .mount(&server)
            .await;

        let geocoder = Geocoder::new(Client::new(), &server.uri());
        let err = geocoder.geocode("Nowhere").await.unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_unnamed_candidate_falls_back_to_display_name() -> Result<(), GeocodeError> {
        let candidate = SearchCandidate {
            lat: "52.1".to_string(),
            lon: "5.18".to_string(),
            name: Some(String::new()),
            display_name: "3731 GA, De Bilt, Utrecht, Nederland".to_string(),
        };
        let location = candidate.into_location()?;
        assert_eq!(location.name, "3731 GA");
        Ok(())
    }
}
