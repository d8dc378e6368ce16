//! Shared helpers.

pub mod season;

pub use season::season_for_month_index;
