//! Calendar season derivation.
//!
//! The engine takes the season as an explicit input; callers wanting "the
//! season right now" derive it from the current month here. Keeping the
//! clock out of the library keeps every scoring call reproducible.

use crate::types::Season;

/// Map a 0-based month index (January = 0) to its season.
///
/// March through May is spring, June through August summer, September
/// through November fall, everything else (including out-of-range
/// indices) winter.
pub fn season_for_month_index(month: u32) -> Season {
    match month {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Fall,
        _ => Season::Winter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_boundaries() {
        assert_eq!(season_for_month_index(2), Season::Spring);
        assert_eq!(season_for_month_index(4), Season::Spring);
        assert_eq!(season_for_month_index(5), Season::Summer);
        assert_eq!(season_for_month_index(7), Season::Summer);
        assert_eq!(season_for_month_index(8), Season::Fall);
        assert_eq!(season_for_month_index(10), Season::Fall);
        assert_eq!(season_for_month_index(11), Season::Winter);
        assert_eq!(season_for_month_index(0), Season::Winter);
        assert_eq!(season_for_month_index(1), Season::Winter);
    }

    #[test]
    fn out_of_range_months_fall_back_to_winter() {
        assert_eq!(season_for_month_index(12), Season::Winter);
        assert_eq!(season_for_month_index(99), Season::Winter);
    }
}
