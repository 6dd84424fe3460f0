use crate::aggregate::monthly::{group_by_month, MonthlyBucket};
use crate::error::DashboardError;
use crate::frames::daily_frame::DailyFrame;
use crate::interval::range::DateRange;
use crate::types::location::LocationInfo;
use crate::types::observation::WeatherSeries;
use crate::types::variable::WeatherVariable;
use serde::Serialize;

/// Everything one successful query produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutcome {
    pub location: LocationInfo,
    pub range: DateRange,
    pub series: WeatherSeries,
}

impl QueryOutcome {
    /// Monthly boxplot buckets of one variable.
    pub fn monthly(&self, variable: WeatherVariable) -> Vec<MonthlyBucket> {
        group_by_month(self.series.observations(), variable)
    }

    /// The series as a polars frame, for line charts.
    pub fn to_frame(&self) -> Result<DailyFrame, DashboardError> {
        self.series.to_frame()
    }
}
