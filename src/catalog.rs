//! Static crop requirement catalog.
//!
//! Six garden vegetables with literal agronomic ranges. The catalog is
//! read-only and shared; the engine iterates it in declaration order and
//! only the final ranking is sorted.

use crate::types::{Drainage, Season, SoilType};

/// Inclusive numeric requirement range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Growing requirements for one catalog crop.
///
/// Nutrient ranges are ppm, temperature is in degrees F, humidity in percent.
/// The humidity range is part of the profile contract but not scored by the
/// current rule set.
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    pub nitrogen: Range,
    pub phosphorus: Range,
    pub potassium: Range,
    pub ph: Range,
    pub temperature: Range,
    pub humidity: Range,
    pub soil_types: &'static [SoilType],
    pub drainage: &'static [Drainage],
    pub seasons: &'static [Season],
    /// Two fixed tips appended to every recommendation for this crop.
    pub tips: [&'static str; 2],
}

pub const CROP_CATALOG: &[CropProfile] = &[
    CropProfile {
        name: "tomatoes",
        nitrogen: Range::new(40.0, 80.0),
        phosphorus: Range::new(20.0, 40.0),
        potassium: Range::new(150.0, 300.0),
        ph: Range::new(6.0, 6.8),
        temperature: Range::new(60.0, 85.0),
        humidity: Range::new(50.0, 80.0),
        soil_types: &[SoilType::Loam, SoilType::SandyLoam],
        drainage: &[Drainage::Good, Drainage::Excellent],
        seasons: &[Season::Spring, Season::Summer],
        tips: [
            "Stake or cage plants for support",
            "Water consistently to prevent blossom end rot",
        ],
    },
    CropProfile {
        name: "lettuce",
        nitrogen: Range::new(30.0, 60.0),
        phosphorus: Range::new(15.0, 30.0),
        potassium: Range::new(100.0, 200.0),
        ph: Range::new(6.0, 7.0),
        temperature: Range::new(45.0, 70.0),
        humidity: Range::new(60.0, 85.0),
        soil_types: &[SoilType::Loam, SoilType::ClayLoam, SoilType::Silt],
        drainage: &[Drainage::Moderate, Drainage::Good],
        seasons: &[Season::Spring, Season::Fall],
        tips: [
            "Plant in succession every 2 weeks",
            "Harvest outer leaves first",
        ],
    },
    CropProfile {
        name: "carrots",
        nitrogen: Range::new(20.0, 40.0),
        phosphorus: Range::new(25.0, 50.0),
        potassium: Range::new(120.0, 250.0),
        ph: Range::new(6.0, 6.8),
        temperature: Range::new(55.0, 75.0),
        humidity: Range::new(50.0, 75.0),
        soil_types: &[SoilType::Sandy, SoilType::SandyLoam, SoilType::Loam],
        drainage: &[Drainage::Good, Drainage::Excellent],
        seasons: &[Season::Spring, Season::Fall],
        tips: [
            "Ensure soil is loose and rock-free",
            "Thin seedlings to prevent crowding",
        ],
    },
    CropProfile {
        name: "spinach",
        nitrogen: Range::new(35.0, 70.0),
        phosphorus: Range::new(18.0, 35.0),
        potassium: Range::new(110.0, 220.0),
        ph: Range::new(6.0, 7.0),
        temperature: Range::new(35.0, 65.0),
        humidity: Range::new(60.0, 85.0),
        soil_types: &[SoilType::Loam, SoilType::ClayLoam, SoilType::Silt],
        drainage: &[Drainage::Moderate, Drainage::Good],
        seasons: &[Season::Spring, Season::Fall, Season::Winter],
        tips: [
            "Plant in partial shade during warm weather",
            "Harvest before bolting",
        ],
    },
    CropProfile {
        name: "radishes",
        nitrogen: Range::new(25.0, 50.0),
        phosphorus: Range::new(20.0, 40.0),
        potassium: Range::new(100.0, 180.0),
        ph: Range::new(5.8, 6.8),
        temperature: Range::new(45.0, 70.0),
        humidity: Range::new(50.0, 75.0),
        soil_types: &[SoilType::Sandy, SoilType::SandyLoam, SoilType::Loam],
        drainage: &[Drainage::Good, Drainage::Excellent],
        seasons: &[Season::Spring, Season::Fall],
        tips: [
            "Harvest when roots are 1 inch diameter",
            "Plant every 10 days for continuous harvest",
        ],
    },
    CropProfile {
        // Legumes fix their own nitrogen, hence the low range
        name: "peas",
        nitrogen: Range::new(15.0, 30.0),
        phosphorus: Range::new(25.0, 50.0),
        potassium: Range::new(130.0, 260.0),
        ph: Range::new(6.0, 7.0),
        temperature: Range::new(40.0, 70.0),
        humidity: Range::new(55.0, 75.0),
        soil_types: &[SoilType::Loam, SoilType::ClayLoam, SoilType::SandyLoam],
        drainage: &[Drainage::Moderate, Drainage::Good],
        seasons: &[Season::Spring, Season::Fall],
        tips: [
            "Provide support for climbing varieties",
            "Plant as soon as soil can be worked",
        ],
    },
];
