// daily_frame.rs

//! Contains the `DailyFrame` structure, a lazy polars view of a [`WeatherSeries`]
//! for chart code that works on data frames.

use crate::error::DashboardError;
use crate::interval::range::DateRange;
use crate::types::month_key::MonthKey;
use crate::types::observation::WeatherSeries;
use crate::types::variable::WeatherVariable;
use chrono::NaiveDate;
use polars::prelude::{col, lit, Column, DataFrame, Expr, IntoLazy, LazyFrame};

/// A wrapper around a polars `LazyFrame` holding one query's daily observations.
///
/// Columns: `date` (Date), then `temperature`, `humidity`, `precipitation`
/// and `radiation` (nullable Float64). Missing readings are nulls.
///
/// Obtained via [`WeatherSeries::to_frame`].
#[derive(Clone)]
pub struct DailyFrame {
    /// The underlying polars LazyFrame.
    pub frame: LazyFrame,
}

impl WeatherSeries {
    /// Builds a [`DailyFrame`] from this series.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Frame`] if polars fails to assemble the frame.
    pub fn to_frame(&self) -> Result<DailyFrame, DashboardError> {
        let dates: Vec<NaiveDate> = self.iter().map(|o| o.date).collect();
        let mut columns = vec![Column::new("date".into(), dates)];
        for variable in WeatherVariable::ALL {
            columns.push(Column::new(variable.key().into(), self.values(variable)));
        }
        let df = DataFrame::new(columns)?;
        Ok(DailyFrame::new(df.lazy()))
    }
}

impl DailyFrame {
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Applies a polars predicate lazily, returning a new `DailyFrame`.
    ///
    /// ```no_run
    /// # use meteoboard::WeatherSeries;
    /// use polars::prelude::{col, lit};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let series = WeatherSeries::default();
    /// let rainy = series
    ///     .to_frame()?
    ///     .filter(col("precipitation").gt(lit(5.0f64)))
    ///     .frame
    ///     .collect()?;
    /// println!("{}", rainy);
    /// # Ok(())
    /// # }
    /// ```
    pub fn filter(&self, predicate: Expr) -> DailyFrame {
        DailyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps the rows within `range`, bounds included.
    pub fn get_range(&self, range: &DateRange) -> DailyFrame {
        self.filter(
            col("date")
                .gt_eq(lit(range.start()))
                .and(col("date").lt_eq(lit(range.end()))),
        )
    }

    /// Keeps the row for `date`. Collecting yields zero or one row.
    pub fn get_at(&self, date: NaiveDate) -> DailyFrame {
        self.filter(col("date").eq(lit(date)))
    }

    /// Keeps the rows falling in `month`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidMonth`] if `month` is not a calendar month.
    pub fn get_for_month(&self, month: MonthKey) -> Result<DailyFrame, DashboardError> {
        let (Some(start), Some(end)) = (month.first_day(), month.last_day()) else {
            return Err(DashboardError::InvalidMonth(month));
        };
        let range = DateRange::new(start, end)?;
        Ok(self.get_range(&range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::observation::DailyObservation;
    use polars::prelude::*;

    fn sample_series() -> WeatherSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
        (0..7)
            .map(|i| {
                let mut o = DailyObservation::empty(start + chrono::Duration::days(i));
                o.temperature = Some(10.0 + i as f64);
                o.precipitation = if i % 2 == 0 { Some(i as f64) } else { None };
                o
            })
            .collect()
    }

    #[test]
    fn test_frame_schema() -> Result<(), Box<dyn std::error::Error>> {
        let df = sample_series().to_frame()?.frame.collect()?;
        assert_eq!(df.height(), 7);
        assert_eq!(df.column("date")?.dtype(), &DataType::Date);
        for variable in WeatherVariable::ALL {
            assert_eq!(df.column(variable.key())?.dtype(), &DataType::Float64);
        }
        assert_eq!(df.column("precipitation")?.null_count(), 3);
        assert_eq!(df.column("humidity")?.null_count(), 7);
        Ok(())
    }

    #[test]
    fn test_get_for_month_splits_at_boundary() -> Result<(), Box<dyn std::error::Error>> {
        let frame = sample_series().to_frame()?;
        let january = frame.get_for_month(MonthKey(2024, 1))?.frame.collect()?;
        let february = frame.get_for_month(MonthKey(2024, 2))?.frame.collect()?;
        assert_eq!(january.height(), 4); // 28..=31
        assert_eq!(february.height(), 3); // 1..=3
        Ok(())
    }

    #[test]
    fn test_get_at_and_range() -> Result<(), Box<dyn std::error::Error>> {
        let frame = sample_series().to_frame()?;
        let target = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();

        let one = frame.get_at(target).frame.collect()?;
        assert_eq!(one.height(), 1);
        assert_eq!(one.column("temperature")?.f64()?.get(0), Some(12.0));

        let range = DateRange::new(target, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())?;
        assert_eq!(frame.get_range(&range).frame.collect()?.height(), 3);
        Ok(())
    }

    #[test]
    fn test_filter_skips_nulls() -> Result<(), Box<dyn std::error::Error>> {
        let wet = sample_series()
            .to_frame()?
            .filter(col("precipitation").gt(lit(1.0f64)))
            .frame
            .collect()?;
        // Days 2, 4 and 6 have precipitation above 1 mm; null days drop out.
        assert_eq!(wet.height(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_month_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let frame = sample_series().to_frame()?;
        assert!(matches!(
            frame.get_for_month(MonthKey(2024, 13)),
            Err(DashboardError::InvalidMonth(_))
        ));
        Ok(())
    }
}
