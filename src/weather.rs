//! Weather summary for the garden dashboard.
//!
//! Live retrieval is out of scope; [`sample_report`] returns the fixed
//! conditions used whenever no provider is configured, and a report can be
//! collapsed into the engine's [`WeatherSnapshot`] input.

use serde::Serialize;

use crate::types::{Season, WeatherSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Frost,
    Heat,
    Rain,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: f64,
    pub condition: SkyCondition,
    pub humidity: f64,
    pub wind_speed: f64,
    pub uv_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub day: String,
    pub high: f64,
    pub low: f64,
    pub condition: SkyCondition,
    pub precipitation_chance: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherAlert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
}

/// Everything the dashboard shows for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
    pub alerts: Vec<WeatherAlert>,
    pub garden_tips: Vec<String>,
}

impl WeatherReport {
    /// Collapse the report into the engine's weather input.
    ///
    /// Rainfall is taken from the first forecast day's precipitation
    /// chance; the current rule set carries it without reading it.
    pub fn snapshot(&self, season: Season) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.current.temperature,
            humidity: self.current.humidity,
            rainfall: self
                .forecast
                .first()
                .map(|day| f64::from(day.precipitation_chance))
                .unwrap_or(0.0),
            season,
        }
    }
}

/// Fixed sample conditions for Portland, OR.
pub fn sample_report() -> WeatherReport {
    WeatherReport {
        location: "Portland, OR".to_string(),
        current: CurrentConditions {
            temperature: 65.0,
            condition: SkyCondition::Cloudy,
            humidity: 70.0,
            wind_speed: 8.0,
            uv_index: 4,
        },
        forecast: vec![
            forecast_day("Today", 68.0, 45.0, SkyCondition::Cloudy, 20),
            forecast_day("Tomorrow", 72.0, 48.0, SkyCondition::Sunny, 5),
            forecast_day("Friday", 69.0, 52.0, SkyCondition::Rainy, 80),
            forecast_day("Saturday", 66.0, 49.0, SkyCondition::Cloudy, 30),
            forecast_day("Sunday", 71.0, 51.0, SkyCondition::Sunny, 10),
        ],
        alerts: vec![WeatherAlert {
            kind: AlertKind::Frost,
            severity: Severity::Medium,
            message: "Possible light frost expected Sunday morning. Protect tender seedlings."
                .to_string(),
        }],
        garden_tips: vec![
            "Perfect weather for transplanting cool-season crops".to_string(),
            "Good time to water deeply before weekend rain".to_string(),
            "Consider covering tender plants if frost is predicted".to_string(),
        ],
    }
}

fn forecast_day(
    day: &str,
    high: f64,
    low: f64,
    condition: SkyCondition,
    precipitation_chance: u8,
) -> DailyForecast {
    DailyForecast {
        day: day.to_string(),
        high,
        low,
        condition,
        precipitation_chance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_is_deterministic() {
        assert_eq!(sample_report(), sample_report());
    }

    #[test]
    fn sample_report_has_a_five_day_forecast() {
        let report = sample_report();
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[0].day, "Today");
        assert!(!report.alerts.is_empty());
        assert!(!report.garden_tips.is_empty());
    }

    #[test]
    fn snapshot_uses_current_conditions_and_leading_forecast() {
        let report = sample_report();
        let snapshot = report.snapshot(Season::Spring);
        assert_eq!(snapshot.temperature, 65.0);
        assert_eq!(snapshot.humidity, 70.0);
        assert_eq!(snapshot.rainfall, 20.0);
        assert_eq!(snapshot.season, Season::Spring);
    }
}
