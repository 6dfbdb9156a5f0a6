//! Calendar helpers
//!
//! Time inputs to the pricing engine are plain year fractions. This helper
//! converts explicit calendar dates for callers working from an option
//! chain's expiry; both dates are arguments, there is no "today" lookup.

use chrono::NaiveDate;

/// Year fraction between two dates, ACT/365.25.
///
/// Negative when `to` precedes `from`; the pricing engine then rejects the
/// resulting non-positive tau via its sentinel.
pub fn year_fraction(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_fraction() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let yf = year_fraction(from, to);
        assert!((yf - 365.0 / 365.25).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_dates_go_negative() {
        let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        assert!(year_fraction(from, to) < 0.0);
    }
}
