//! Core data model for the suitability engine.
//!
//! Categorical fields are closed enums rather than free-form strings, so a
//! malformed soil type or season is rejected when the sample is built
//! (serde or `FromStr`) instead of silently scoring as a non-match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A categorical value outside its closed vocabulary.
#[derive(Debug, Clone, Error)]
#[error("unknown {field} {value:?}")]
pub struct UnknownVariantError {
    pub field: &'static str,
    pub value: String,
}

/// Soil texture classes accepted on a soil test form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    SandyLoam,
    ClayLoam,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loam => "loam",
            SoilType::Silt => "silt",
            SoilType::SandyLoam => "sandy-loam",
            SoilType::ClayLoam => "clay-loam",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoilType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clay" => Ok(SoilType::Clay),
            "sandy" => Ok(SoilType::Sandy),
            "loam" => Ok(SoilType::Loam),
            "silt" => Ok(SoilType::Silt),
            "sandy-loam" => Ok(SoilType::SandyLoam),
            "clay-loam" => Ok(SoilType::ClayLoam),
            _ => Err(UnknownVariantError {
                field: "soil type",
                value: s.to_string(),
            }),
        }
    }
}

/// How fast water leaves the bed after irrigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drainage {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Drainage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drainage::Poor => "poor",
            Drainage::Moderate => "moderate",
            Drainage::Good => "good",
            Drainage::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Drainage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Drainage {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poor" => Ok(Drainage::Poor),
            "moderate" => Ok(Drainage::Moderate),
            "good" => Ok(Drainage::Good),
            "excellent" => Ok(Drainage::Excellent),
            _ => Err(UnknownVariantError {
                field: "drainage",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(UnknownVariantError {
                field: "season",
                value: s.to_string(),
            }),
        }
    }
}

/// Where a measured nutrient sits relative to a crop's target range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Low,
    Optimal,
    High,
}

/// One soil test, as entered by the gardener.
///
/// Nutrients are in ppm, organic matter in percent. Values outside the
/// documented domains are scored arithmetically as-is; constraining input
/// ranges is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub organic_matter: f64,
    pub soil_type: SoilType,
    pub drainage: Drainage,
}

/// Ambient weather at analysis time.
///
/// `rainfall` is part of the input contract but not read by the current
/// rule set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub season: Season,
}

/// Status and advice for a single nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAdvice {
    pub status: NutrientStatus,
    pub recommendation: String,
}

/// Fertilizer advice for the three macronutrients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpkRecommendations {
    pub nitrogen: NutrientAdvice,
    pub phosphorus: NutrientAdvice,
    pub potassium: NutrientAdvice,
}

/// The engine's verdict for one catalog crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub crop: String,
    /// `suitability_score` rescaled to an integer percentage for display.
    pub confidence: u8,
    /// Mean of the five factor point values, in [0.0, 1.0].
    pub suitability_score: f64,
    /// One entry per satisfied factor, in factor order.
    pub reasons: Vec<String>,
    /// One entry per unsatisfied factor, in factor order.
    pub warnings: Vec<String>,
    pub npk_recommendations: NpkRecommendations,
    pub planting_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_wire_names_match_the_form_vocabulary() {
        assert_eq!(
            serde_json::to_string(&SoilType::SandyLoam).unwrap(),
            "\"sandy-loam\""
        );
        assert_eq!(
            serde_json::to_string(&SoilType::ClayLoam).unwrap(),
            "\"clay-loam\""
        );
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"fall\"");
        assert_eq!(
            serde_json::to_string(&NutrientStatus::Optimal).unwrap(),
            "\"optimal\""
        );
        assert_eq!(
            serde_json::to_string(&Drainage::Excellent).unwrap(),
            "\"excellent\""
        );
    }

    #[test]
    fn from_str_accepts_the_same_names_serde_does() {
        assert_eq!("sandy-loam".parse::<SoilType>().unwrap(), SoilType::SandyLoam);
        assert_eq!("moderate".parse::<Drainage>().unwrap(), Drainage::Moderate);
        assert_eq!("winter".parse::<Season>().unwrap(), Season::Winter);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "chalk".parse::<SoilType>().unwrap_err();
        assert_eq!(err.field, "soil type");
        assert_eq!(err.value, "chalk");
        assert!("autumn".parse::<Season>().is_err());
    }

    #[test]
    fn soil_sample_parses_camel_case_json() {
        let json = r#"{
            "nitrogen": 60,
            "phosphorus": 30,
            "potassium": 200,
            "ph": 6.4,
            "organicMatter": 4,
            "soilType": "loam",
            "drainage": "good"
        }"#;
        let sample: SoilSample = serde_json::from_str(json).unwrap();
        assert_eq!(sample.soil_type, SoilType::Loam);
        assert_eq!(sample.drainage, Drainage::Good);
        assert_eq!(sample.organic_matter, 4.0);
    }

    #[test]
    fn malformed_categoricals_fail_at_the_boundary() {
        let json = r#"{
            "nitrogen": 60, "phosphorus": 30, "potassium": 200,
            "ph": 6.4, "organicMatter": 4,
            "soilType": "gravel", "drainage": "good"
        }"#;
        assert!(serde_json::from_str::<SoilSample>(json).is_err());
    }
}
