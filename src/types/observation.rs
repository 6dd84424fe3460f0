use crate::types::variable::WeatherVariable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather readings.
///
/// Any reading may be `None` when the archive has no data for that day.
/// Missing readings are kept as `None` all the way to the charts.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,               // time
    pub temperature: Option<f64>,      // temperature_2m_max (°C)
    pub humidity: Option<f64>,         // relative_humidity_2m_mean (%)
    pub precipitation: Option<f64>,    // precipitation_sum (mm)
    pub radiation: Option<f64>,        // shortwave_radiation_sum
}

impl DailyObservation {
    /// Creates an observation with no readings for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            temperature: None,
            humidity: None,
            precipitation: None,
            radiation: None,
        }
    }

    pub fn value(&self, variable: WeatherVariable) -> Option<f64> {
        match variable {
            WeatherVariable::Temperature => self.temperature,
            WeatherVariable::Humidity => self.humidity,
            WeatherVariable::Precipitation => self.precipitation,
            WeatherVariable::Radiation => self.radiation,
        }
    }

    pub(crate) fn set_value(&mut self, variable: WeatherVariable, value: Option<f64>) {
        match variable {
            WeatherVariable::Temperature => self.temperature = value,
            WeatherVariable::Humidity => self.humidity = value,
            WeatherVariable::Precipitation => self.precipitation = value,
            WeatherVariable::Radiation => self.radiation = value,
        }
    }
}

/// Daily observations in ascending date order, as returned for one query.
///
/// This is the data shape handed to line charts. Gaps between dates only
/// reflect what the archive returned.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherSeries {
    observations: Vec<DailyObservation>,
}

impl WeatherSeries {
    /// Wraps `observations`, sorting them by date if they are not already sorted.
    pub fn new(mut observations: Vec<DailyObservation>) -> Self {
        if !observations.windows(2).all(|w| w[0].date <= w[1].date) {
            observations.sort_by_key(|o| o.date);
        }
        Self { observations }
    }

    pub fn observations(&self) -> &[DailyObservation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyObservation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.observations.first().map(|o| o.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|o| o.date)
    }

    /// The readings of one variable, aligned with the dates of the series.
    pub fn values(&self, variable: WeatherVariable) -> Vec<Option<f64>> {
        self.observations.iter().map(|o| o.value(variable)).collect()
    }

    pub fn into_inner(self) -> Vec<DailyObservation> {
        self.observations
    }
}

impl<'a> IntoIterator for &'a WeatherSeries {
    type Item = &'a DailyObservation;
    type IntoIter = std::slice::Iter<'a, DailyObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

impl FromIterator<DailyObservation> for WeatherSeries {
    fn from_iter<I: IntoIterator<Item = DailyObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_series_sorts_by_date() {
        let series: WeatherSeries = vec![
            DailyObservation::empty(day(2024, 1, 3)),
            DailyObservation::empty(day(2024, 1, 1)),
            DailyObservation::empty(day(2024, 1, 2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(series.first_date(), Some(day(2024, 1, 1)));
        assert_eq!(series.last_date(), Some(day(2024, 1, 3)));
    }

    #[test]
    fn test_values_keep_missing_readings() {
        let mut first = DailyObservation::empty(day(2024, 1, 1));
        first.set_value(WeatherVariable::Humidity, Some(81.0));
        let second = DailyObservation::empty(day(2024, 1, 2));
        let series = WeatherSeries::new(vec![first, second]);

        assert_eq!(
            series.values(WeatherVariable::Humidity),
            vec![Some(81.0), None]
        );
    }

    #[test]
    fn test_series_serializes_dates_as_iso() {
        let mut obs = DailyObservation::empty(day(2024, 2, 29));
        obs.temperature = Some(14.5);
        let json = serde_json::to_value(WeatherSeries::new(vec![obs])).unwrap();
        assert_eq!(json[0]["date"], "2024-02-29");
        assert_eq!(json[0]["temperature"], 14.5);
        assert!(json[0]["radiation"].is_null());
    }
}
