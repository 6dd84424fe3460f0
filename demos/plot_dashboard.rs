//! demos/plot_dashboard.rs
//!
//! Renders the two dashboard charts for a place: a line chart of the daily
//! series and a monthly boxplot per variable, using `plotlars`.
//!
//! To run this example:
//! cargo run --example plot_dashboard --features plotting -- Lisboa 6m

use std::error::Error;

use meteoboard::{Dashboard, MonthlyBucket, Preset, WeatherVariable};
use plotlars::{BoxPlot, Legend, Orientation, Plot, Rgb, Text, TimeSeriesPlot};
use polars::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let place = args.next().unwrap_or_else(|| "São Paulo".to_string());
    let preset: Preset = args.next().as_deref().unwrap_or("3m").parse()?;

    let dashboard = Dashboard::builder().build()?;
    let outcome = dashboard
        .query()
        .place(&place)
        .selection(preset)
        .call()
        .await?;

    let daily = outcome.to_frame()?.frame.collect()?;
    plot_lines(&daily, &outcome.location.name);

    for variable in WeatherVariable::ALL {
        let buckets = outcome.monthly(variable);
        plot_boxes(&buckets_to_frame(&buckets)?, variable);
    }

    Ok(())
}

fn plot_lines(data: &DataFrame, place: &str) {
    TimeSeriesPlot::builder()
        .data(data)
        .x("date")
        .y("temperature")
        .additional_series(vec!["humidity", "precipitation"])
        .colors(vec![Rgb(255, 0, 0), Rgb(0, 0, 255), Rgb(0, 196, 159)])
        .plot_title(Text::from(format!("Weather - {}", place).as_str()).size(18))
        .legend(&Legend::new().x(0.05).y(0.9))
        .build()
        .plot();
}

// One row per reading; the boxplot groups rows by the `month` label.
fn buckets_to_frame(buckets: &[MonthlyBucket]) -> PolarsResult<DataFrame> {
    let mut months = Vec::new();
    let mut values = Vec::new();
    for bucket in buckets {
        for value in &bucket.values {
            months.push(bucket.month.to_string());
            values.push(*value);
        }
    }
    df!("month" => months, "value" => values)
}

fn plot_boxes(data: &DataFrame, variable: WeatherVariable) {
    BoxPlot::builder()
        .data(data)
        .labels("month")
        .values("value")
        .orientation(Orientation::Vertical)
        .plot_title(Text::from(
            format!("Monthly boxplot - {}", variable.label()).as_str(),
        ))
        .y_title(variable.label().as_str())
        .build()
        .plot();
}
