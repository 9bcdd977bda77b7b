// src/scorecard/mod.rs

//! Everything derived from a score report: percentage, tier, per-subject
//! tally and the HTML scorecard mailed to the candidate.

mod render;
mod tally;
mod tier;

pub use render::{render, render_at};
pub use tally::{SUBJECTS, SubjectScore, tally};
pub use tier::Tier;

/// `score / total` as a percentage rounded to two decimals.
/// Zero when `total` is not positive.
pub fn percentage(score: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    round_to(score as f64 / total as f64 * 100.0, 2)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Formats a percentage for display: `80.0`, `66.67`, `12.5`.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(12, 0), 0.0);
        assert_eq!(percentage(5, -3), 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(percentage(12, 15), 80.0);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 8), 12.5);
    }

    #[test]
    fn sample_candidate_is_very_good() {
        let p = percentage(12, 15);
        assert_eq!(Tier::from_percentage(p), Tier::VeryGood);
        assert_eq!(Tier::from_percentage(p).label(), "Very Good");
    }

    #[test]
    fn rounding_can_lift_into_the_next_tier() {
        // 89.999% rounds to 90.0
        let p = percentage(89999, 100000);
        assert_eq!(p, 90.0);
        assert_eq!(Tier::from_percentage(p), Tier::Excellent);
    }

    #[test]
    fn formats_like_a_human_would() {
        assert_eq!(format_percent(80.0), "80.0");
        assert_eq!(format_percent(0.0), "0.0");
        assert_eq!(format_percent(66.67), "66.67");
        assert_eq!(format_percent(66.7), "66.7");
    }
}
