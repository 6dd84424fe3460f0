//! Defines the four daily variables tracked per observation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four measured quantities tracked per day.
///
/// Each variable knows the identifier the weather archive uses for it, the
/// chart label and the unit its readings are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherVariable {
    /// Daily maximum air temperature at 2 m, in °C.
    Temperature,
    /// Daily mean relative humidity at 2 m, in %.
    Humidity,
    /// Daily precipitation sum, in mm.
    Precipitation,
    /// Daily shortwave radiation sum.
    Radiation,
}

impl WeatherVariable {
    /// All variables, in the order charts present them.
    pub const ALL: [WeatherVariable; 4] = [
        WeatherVariable::Temperature,
        WeatherVariable::Humidity,
        WeatherVariable::Precipitation,
        WeatherVariable::Radiation,
    ];

    /// Identifier of the variable in the archive API's `daily` parameter and response block.
    pub fn api_name(self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "temperature_2m_max",
            WeatherVariable::Humidity => "relative_humidity_2m_mean",
            WeatherVariable::Precipitation => "precipitation_sum",
            WeatherVariable::Radiation => "shortwave_radiation_sum",
        }
    }

    /// Column name used in frames and serialized output.
    pub fn key(self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "temperature",
            WeatherVariable::Humidity => "humidity",
            WeatherVariable::Precipitation => "precipitation",
            WeatherVariable::Radiation => "radiation",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            WeatherVariable::Temperature => "°C",
            WeatherVariable::Humidity => "%",
            WeatherVariable::Precipitation => "mm",
            WeatherVariable::Radiation => "W/m²",
        }
    }

    /// Chart label, e.g. `Temperature (°C)`.
    pub fn label(self) -> String {
        let name = match self {
            WeatherVariable::Temperature => "Temperature",
            WeatherVariable::Humidity => "Humidity",
            WeatherVariable::Precipitation => "Precipitation",
            WeatherVariable::Radiation => "Solar radiation",
        };
        format!("{} ({})", name, self.unit())
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown weather variable '{0}'")]
pub struct ParseVariableError(pub String);

impl FromStr for WeatherVariable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherVariable::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(s) || v.api_name() == s)
            .ok_or_else(|| ParseVariableError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_api_names_are_distinct() {
        let mut names: Vec<_> = WeatherVariable::ALL.iter().map(|v| v.api_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_variable_parse() {
        assert_eq!(
            "Humidity".parse::<WeatherVariable>(),
            Ok(WeatherVariable::Humidity)
        );
        assert_eq!(
            "shortwave_radiation_sum".parse::<WeatherVariable>(),
            Ok(WeatherVariable::Radiation)
        );
        assert!("wind".parse::<WeatherVariable>().is_err());
        assert_eq!(WeatherVariable::Temperature.label(), "Temperature (°C)");
    }
}
