//! Crop suitability scoring engine.
//!
//! Pure and total over well-formed input: scores every catalog crop against
//! one soil test and one weather snapshot, with no I/O and no hidden state.
//! Each crop gets exactly five binary-gated factor verdicts; the score is
//! the mean of the five factor point values. NPK status and advice are
//! reported alongside the score but do not feed it.

use smallvec::SmallVec;

use crate::catalog::{CropProfile, Range, CROP_CATALOG};
use crate::types::{
    CropRecommendation, Drainage, NpkRecommendations, NutrientAdvice, NutrientStatus, SoilSample,
    WeatherSnapshot,
};

// Factor point values, matched / not matched.
const PH_MATCH: f64 = 0.8;
const PH_MISMATCH: f64 = 0.3;
const TEMPERATURE_MATCH: f64 = 0.9;
const TEMPERATURE_MISMATCH: f64 = 0.4;
const SOIL_TYPE_MATCH: f64 = 0.7;
const SOIL_TYPE_MISMATCH: f64 = 0.4;
const DRAINAGE_MATCH: f64 = 0.6;
const DRAINAGE_MISMATCH: f64 = 0.3;
const SEASON_MATCH: f64 = 0.8;
const SEASON_MISMATCH: f64 = 0.2;

const FACTOR_COUNT: f64 = 5.0;

/// Minimum organic matter (percent) before compost advice kicks in.
const ORGANIC_MATTER_FLOOR: f64 = 3.0;

/// Score every catalog crop against the given soil test and weather.
///
/// Returns one recommendation per crop, sorted by suitability score
/// descending. Equal scores break alphabetically by crop name so the
/// ranking is stable across calls.
pub fn analyze_crop_suitability(
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> Vec<CropRecommendation> {
    let mut recommendations: Vec<CropRecommendation> = CROP_CATALOG
        .iter()
        .map(|profile| score_crop(profile, soil, weather))
        .collect();

    recommendations.sort_by(|a, b| {
        b.suitability_score
            .total_cmp(&a.suitability_score)
            .then_with(|| a.crop.cmp(&b.crop))
    });
    recommendations
}

fn score_crop(
    profile: &CropProfile,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> CropRecommendation {
    let mut points = 0.0;
    // Five factors, so these never spill to the heap.
    let mut reasons: SmallVec<[String; 5]> = SmallVec::new();
    let mut warnings: SmallVec<[String; 5]> = SmallVec::new();

    if profile.ph.contains(soil.ph) {
        points += PH_MATCH;
        reasons.push(format!(
            "Optimal pH range ({}-{})",
            profile.ph.min, profile.ph.max
        ));
    } else {
        points += PH_MISMATCH;
        warnings.push(format!(
            "pH {} is outside optimal range ({}-{})",
            soil.ph, profile.ph.min, profile.ph.max
        ));
    }

    if profile.temperature.contains(weather.temperature) {
        points += TEMPERATURE_MATCH;
        reasons.push("Good temperature range for growth".to_string());
    } else {
        points += TEMPERATURE_MISMATCH;
        warnings.push(format!(
            "Temperature {}°F may not be optimal",
            weather.temperature
        ));
    }

    if profile.soil_types.contains(&soil.soil_type) {
        points += SOIL_TYPE_MATCH;
        reasons.push("Excellent soil type match".to_string());
    } else {
        points += SOIL_TYPE_MISMATCH;
        warnings.push(format!("{} soil may not be ideal", soil.soil_type));
    }

    if profile.drainage.contains(&soil.drainage) {
        points += DRAINAGE_MATCH;
        reasons.push("Good drainage conditions".to_string());
    } else {
        points += DRAINAGE_MISMATCH;
        warnings.push("Drainage conditions may need improvement".to_string());
    }

    if profile.seasons.contains(&weather.season) {
        points += SEASON_MATCH;
        reasons.push("Perfect season for planting".to_string());
    } else {
        points += SEASON_MISMATCH;
        warnings.push("Not the ideal season for this crop".to_string());
    }

    let suitability_score = points / FACTOR_COUNT;
    let confidence = (suitability_score * 100.0).round() as u8;

    CropRecommendation {
        crop: profile.name.to_string(),
        confidence,
        suitability_score,
        reasons: reasons.into_vec(),
        warnings: warnings.into_vec(),
        npk_recommendations: npk_recommendations(profile, soil),
        planting_tips: planting_tips(profile, soil, weather).into_vec(),
    }
}

/// Step function over the inclusive target range.
pub fn nutrient_status(actual: f64, required: &Range) -> NutrientStatus {
    if actual < required.min {
        NutrientStatus::Low
    } else if actual > required.max {
        NutrientStatus::High
    } else {
        NutrientStatus::Optimal
    }
}

fn nutrient_advice(nutrient: &str, actual: f64, required: &Range) -> NutrientAdvice {
    let status = nutrient_status(actual, required);
    let recommendation = match status {
        NutrientStatus::Low => format!(
            "Add {} fertilizer. Current: {}ppm, Target: {}-{}ppm",
            nutrient.to_lowercase(),
            actual,
            required.min,
            required.max
        ),
        NutrientStatus::High => format!(
            "Reduce {} input. Current: {}ppm, Target: {}-{}ppm",
            nutrient.to_lowercase(),
            actual,
            required.min,
            required.max
        ),
        NutrientStatus::Optimal => format!("{nutrient} levels are perfect for this crop"),
    };
    NutrientAdvice {
        status,
        recommendation,
    }
}

fn npk_recommendations(profile: &CropProfile, soil: &SoilSample) -> NpkRecommendations {
    NpkRecommendations {
        nitrogen: nutrient_advice("Nitrogen", soil.nitrogen, &profile.nitrogen),
        phosphorus: nutrient_advice("Phosphorus", soil.phosphorus, &profile.phosphorus),
        potassium: nutrient_advice("Potassium", soil.potassium, &profile.potassium),
    }
}

/// Conditional advice in fixed order, then the crop's two fixed tips.
/// Only the pH pair and the temperature pair are mutually exclusive.
fn planting_tips(
    profile: &CropProfile,
    soil: &SoilSample,
    weather: &WeatherSnapshot,
) -> SmallVec<[String; 8]> {
    let mut tips: SmallVec<[String; 8]> = SmallVec::new();

    if soil.ph < profile.ph.min {
        tips.push("Add lime to raise soil pH before planting".to_string());
    } else if soil.ph > profile.ph.max {
        tips.push("Add sulfur or organic matter to lower soil pH".to_string());
    }

    if weather.temperature < profile.temperature.min {
        tips.push("Consider using row covers or cold frames for protection".to_string());
    } else if weather.temperature > profile.temperature.max {
        tips.push("Provide shade during hottest parts of the day".to_string());
    }

    if soil.drainage == Drainage::Poor && profile.drainage.contains(&Drainage::Good) {
        tips.push("Improve drainage with raised beds or organic matter".to_string());
    }

    if soil.organic_matter < ORGANIC_MATTER_FLOOR {
        tips.push("Add compost to improve soil structure and fertility".to_string());
    }

    for tip in profile.tips {
        tips.push(tip.to_string());
    }
    tips
}
