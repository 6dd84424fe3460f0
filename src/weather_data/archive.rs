//! Wire shapes of the weather-archive response and the positional zip that turns
//! its parallel `daily` arrays into [`DailyObservation`] rows.

use crate::interval::range::QUERY_DATE_FORMAT;
use crate::types::observation::DailyObservation;
use crate::types::variable::WeatherVariable;
use crate::weather_data::error::FetchError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub(crate) struct ArchiveResponse {
    pub daily: Option<DailyBlock>,
}

/// The `daily` block: a shared `time` array plus one array per requested variable.
#[derive(Debug, Deserialize)]
pub(crate) struct DailyBlock {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub variables: HashMap<String, serde_json::Value>,
}

/// Error body returned by the archive for rejected requests.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: bool,
    pub reason: String,
}

impl DailyBlock {
    fn column(&self, variable: WeatherVariable) -> Result<Vec<Option<f64>>, FetchError> {
        let raw = self.variables.get(variable.api_name()).ok_or_else(|| {
            FetchError::MalformedResponse(format!("missing daily.{}", variable.api_name()))
        })?;
        Vec::<Option<f64>>::deserialize(raw).map_err(|e| {
            FetchError::MalformedResponse(format!(
                "daily.{} is not a list of numbers: {}",
                variable.api_name(),
                e
            ))
        })
    }

    /// Zips the parallel arrays into one observation per index.
    ///
    /// Every variable array must have exactly as many entries as `time`.
    /// Null readings stay `None`.
    pub(crate) fn into_observations(self) -> Result<Vec<DailyObservation>, FetchError> {
        let mut observations = self
            .time
            .iter()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, QUERY_DATE_FORMAT)
                    .map(DailyObservation::empty)
                    .map_err(|e| {
                        FetchError::MalformedResponse(format!("invalid date '{}': {}", raw, e))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for variable in WeatherVariable::ALL {
            let values = self.column(variable)?;
            if values.len() != observations.len() {
                return Err(FetchError::MalformedResponse(format!(
                    "daily.{} has {} entries but daily.time has {}",
                    variable.api_name(),
                    values.len(),
                    observations.len()
                )));
            }
            for (observation, value) in observations.iter_mut().zip(values) {
                observation.set_value(variable, value);
            }
        }
        Ok(observations)
    }
}
