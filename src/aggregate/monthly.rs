//! Groups a daily series into per-month buckets, the input shape of the
//! monthly boxplot chart.

use crate::aggregate::box_stats::BoxStats;
use crate::types::month_key::MonthKey;
use crate::types::observation::DailyObservation;
use crate::types::variable::WeatherVariable;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// The readings of one variable whose dates fall within one calendar month.
///
/// `values` keeps missing readings as `None`, in the order the days appeared
/// in the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    pub month: MonthKey,
    pub values: Vec<Option<f64>>,
}

impl MonthlyBucket {
    /// The readings that are present, nulls skipped.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied()
    }

    /// Number of days in the bucket without a reading.
    pub fn missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Five-number summary of the present readings, or `None` if there are none.
    pub fn stats(&self) -> Option<BoxStats> {
        BoxStats::from_values(&self.values)
    }
}

/// Groups `series` by calendar month for `variable`.
///
/// Buckets come out in ascending month order whatever order `series` is in.
///
/// ```
/// use meteoboard::{group_by_month, DailyObservation, WeatherVariable};
/// use chrono::NaiveDate;
///
/// let mut jan = DailyObservation::empty(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// jan.temperature = Some(12.0);
/// let feb = DailyObservation::empty(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
///
/// let buckets = group_by_month(&[feb, jan], WeatherVariable::Temperature);
/// assert_eq!(buckets[0].month.to_string(), "2024-01");
/// assert_eq!(buckets[1].values, vec![None]);
/// ```
pub fn group_by_month(
    series: &[DailyObservation],
    variable: WeatherVariable,
) -> Vec<MonthlyBucket> {
    let mut grouped: BTreeMap<MonthKey, Vec<Option<f64>>> = BTreeMap::new();
    for observation in series {
        grouped
            .entry(MonthKey::from_date(observation.date))
            .or_default()
            .push(observation.value(variable));
    }
    debug!(
        "Grouped {} observations of {} into {} monthly buckets",
        series.len(),
        variable,
        grouped.len()
    );
    grouped
        .into_iter()
        .map(|(month, values)| MonthlyBucket { month, values })
        .collect()
}

/// Runs [`group_by_month`] once per variable.
pub fn group_all_by_month(
    series: &[DailyObservation],
) -> BTreeMap<WeatherVariable, Vec<MonthlyBucket>> {
    WeatherVariable::ALL
        .into_iter()
        .map(|variable| (variable, group_by_month(series, variable)))
        .collect()
}
