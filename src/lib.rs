//! Garden crop suitability scorer.
//!
//! Scores a fixed catalog of six vegetable crops against one soil test and
//! one weather snapshot, ranks them, and explains each verdict with
//! reasons, warnings, NPK fertilizer advice and planting tips. The engine
//! is a deterministic rule-based scorer: no I/O, no hidden state, same
//! inputs in, same ranking out.
//!
//! - `types`: closed enums and records for the soil/weather/recommendation model
//! - `catalog`: the static crop requirement table
//! - `scoring`: the five-factor suitability engine
//! - `calendar` / `weather`: static planting schedule and dashboard data
//! - `utils`: season derivation from the calendar month

pub mod calendar;
pub mod catalog;
pub mod scoring;
pub mod types;
pub mod utils;
pub mod weather;

// Re-export commonly used types
pub use catalog::{CropProfile, Range, CROP_CATALOG};
pub use scoring::analyze_crop_suitability;
pub use types::{
    CropRecommendation, Drainage, NpkRecommendations, NutrientAdvice, NutrientStatus, Season,
    SoilSample, SoilType, UnknownVariantError, WeatherSnapshot,
};
pub use utils::season_for_month_index;
