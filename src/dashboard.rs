//! This module provides the main entry point of the crate. A [`Dashboard`] resolves
//! the selected interval, geocodes the place name and fetches the daily weather
//! for it, in that order.

use crate::error::DashboardError;
use crate::geocoding::geocoder::{Geocoder, DEFAULT_GEOCODER_URL};
use crate::interval::range::resolve;
use crate::interval::selection::IntervalSelection;
use crate::query::outcome::QueryOutcome;
use crate::query::state::QuerySession;
use crate::weather_data::fetcher::{WeatherFetcher, DEFAULT_ARCHIVE_URL};
use bon::bon;
use chrono::{Local, NaiveDate};
use log::info;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = concat!("meteoboard/", env!("CARGO_PKG_VERSION"));

/// The main client struct of the dashboard core.
///
/// Holds one HTTP client shared by the geocoder and the weather fetcher.
/// Create it with [`Dashboard::builder()`]; every setting has a default.
///
/// # Examples
///
/// ```no_run
/// # use meteoboard::{Dashboard, DashboardError, Preset, WeatherVariable};
/// # #[tokio::main]
/// # async fn main() -> Result<(), DashboardError> {
/// let dashboard = Dashboard::builder().build()?;
///
/// let outcome = dashboard
///     .query()
///     .place("Lisboa")
///     .selection(Preset::ThreeMonths)
///     .call()
///     .await?;
///
/// for bucket in outcome.monthly(WeatherVariable::Temperature) {
///     println!("{}: {:?}", bucket.month, bucket.stats());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    geocoder: Geocoder,
    fetcher: WeatherFetcher,
}

#[bon]
impl Dashboard {
    /// Creates a new `Dashboard`.
    ///
    /// # Arguments
    ///
    /// * `.geocoder_url(..)`: Optional. Base URL of the place-search service. Defaults to Nominatim.
    /// * `.archive_url(..)`: Optional. Base URL of the weather archive. Defaults to Open-Meteo.
    /// * `.user_agent(..)`: Optional. Sent with every request; Nominatim rejects anonymous clients.
    /// * `.timeout_secs(u64)`: Optional. Per-request timeout. Defaults to `10`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::HttpClient`] if the HTTP client cannot be built.
    #[builder]
    pub fn new(
        #[builder(into)] geocoder_url: Option<String>,
        #[builder(into)] archive_url: Option<String>,
        #[builder(into)] user_agent: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, DashboardError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ))
            .user_agent(user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
            .build()
            .map_err(DashboardError::HttpClient)?;

        let geocoder_url = geocoder_url.unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string());
        let archive_url = archive_url.unwrap_or_else(|| DEFAULT_ARCHIVE_URL.to_string());
        Ok(Self {
            geocoder: Geocoder::new(client.clone(), &geocoder_url),
            fetcher: WeatherFetcher::new(client, &archive_url),
        })
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn fetcher(&self) -> &WeatherFetcher {
        &self.fetcher
    }

    /// Runs one query: resolve the interval, geocode `place`, fetch the series.
    ///
    /// The interval is validated before any request is made. The weather
    /// request needs the coordinates, so the two requests run sequentially.
    ///
    /// # Arguments
    ///
    /// * `.place(&str)`: **Required.** Free-text place name.
    /// * `.selection(IntervalSelection)`: **Required.** A [`crate::Preset`] or a custom range.
    /// * `.today(NaiveDate)`: Optional. The date intervals are resolved against. Defaults to the local date.
    ///
    /// # Errors
    ///
    /// [`DashboardError::Validation`] for a bad interval,
    /// [`DashboardError::Geocode`] when the place is unknown or the lookup
    /// fails, [`DashboardError::Fetch`] when the weather request fails.
    #[builder]
    pub async fn query(
        &self,
        place: &str,
        #[builder(into)] selection: IntervalSelection,
        today: Option<NaiveDate>,
    ) -> Result<QueryOutcome, DashboardError> {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        let range = resolve(selection, today)?;
        let location = self.geocoder.geocode(place).await?;
        let series = self
            .fetcher
            .fetch_weather(location.lat_lon(), &range)
            .await?;
        info!(
            "Query for '{}' returned {} days for {}",
            place,
            series.len(),
            range
        );
        Ok(QueryOutcome {
            location,
            range,
            series,
        })
    }

    /// Runs [`Dashboard::query`] inside the lifecycle of `session`.
    ///
    /// Returns `true` if the result was applied to the session, `false` if a
    /// newer submission superseded it.
    #[builder]
    pub async fn submit(
        &self,
        session: &mut QuerySession,
        place: &str,
        #[builder(into)] selection: IntervalSelection,
        today: Option<NaiveDate>,
    ) -> bool {
        let token = session.begin();
        let result = self
            .query()
            .place(place)
            .selection(selection)
            .maybe_today(today)
            .call()
            .await;
        session.settle(token, result)
    }
}
