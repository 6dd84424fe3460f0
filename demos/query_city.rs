//! demos/query_city.rs
//!
//! Geocodes a place, fetches its daily weather and prints the monthly boxplot
//! statistics for every variable.
//!
//! To run this example:
//! RUST_LOG=info cargo run --example query_city -- Lisboa 3m

use meteoboard::{Dashboard, DashboardError, Preset, WeatherVariable};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=info (or debug) to see request logging
    env_logger::init();

    let mut args = env::args().skip(1);
    let place = args.next().unwrap_or_else(|| "São Paulo".to_string());
    let preset: Preset = args.next().as_deref().unwrap_or("3m").parse()?;

    let dashboard = Dashboard::builder().build()?;
    let outcome = match dashboard
        .query()
        .place(&place)
        .selection(preset)
        .call()
        .await
    {
        Ok(outcome) => outcome,
        Err(DashboardError::Geocode(e)) if e.is_not_found() => {
            eprintln!("No place named '{}' was found. Try a more specific name.", place);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} ({:.4}, {:.4}), {} ({} days)",
        outcome.location.display_name,
        outcome.location.latitude,
        outcome.location.longitude,
        outcome.range,
        outcome.series.len()
    );

    for variable in WeatherVariable::ALL {
        println!("\n{}", variable.label());
        for bucket in outcome.monthly(variable) {
            match bucket.stats() {
                Some(s) => println!(
                    "  {}  min {:>7.1}  q1 {:>7.1}  median {:>7.1}  q3 {:>7.1}  max {:>7.1}  (missing {})",
                    bucket.month, s.min, s.q1, s.median, s.q3, s.max, s.missing
                ),
                None => println!("  {}  no data", bucket.month),
            }
        }
    }

    Ok(())
}
