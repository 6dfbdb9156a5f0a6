//! Historical (rolling realized) volatility
//!
//! Trailing-window standard deviation of single-period returns, annualized
//! by sqrt(252). The 252-day factor hard-codes a daily sampling assumption;
//! see [`super::TRADING_DAYS_PER_YEAR`].

use crate::core::{simple_returns, VolError, VolResult};
use crate::stats::{sample_std, TRADING_DAYS_PER_YEAR};

/// Rolling realized volatility, aligned with the input series.
///
/// Entry `i` is the annualized sample standard deviation of the returns over
/// the trailing `window` sessions ending at `i` (a window of `window` prices
/// yields `window - 1` returns), defined from `i = window - 1` on. Earlier
/// positions have too little data and hold `None`; output length always
/// equals input length. Callers typically read only the final entry.
///
/// A `window` below 2 spans no return at all and is a contract violation.
pub fn historical_volatility(prices: &[f64], window: usize) -> VolResult<Vec<Option<f64>>> {
    if window < 2 {
        return Err(VolError::invalid_input(
            "historical volatility window must span at least two sessions",
        ));
    }

    let annualize = TRADING_DAYS_PER_YEAR.sqrt();
    let mut estimates = vec![None; prices.len()];

    for i in (window - 1)..prices.len() {
        let trailing = &prices[i + 1 - window..=i];
        let returns = simple_returns(trailing);
        estimates[i] = sample_std(&returns).map(|s| s * annualize);
    }

    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_prices(len: usize) -> Vec<f64> {
        // Deterministic series with non-trivial variation
        let mut prices = Vec::with_capacity(len);
        let mut p = 100.0;
        for i in 0..len {
            let step = if i % 3 == 0 { 0.012 } else { -0.005 };
            p *= 1.0 + step;
            prices.push(p);
        }
        prices
    }

    #[test]
    fn test_window_alignment() {
        let prices = synthetic_prices(40);
        let vol = historical_volatility(&prices, 30).unwrap();

        assert_eq!(vol.len(), 40);
        assert!(vol[..29].iter().all(Option::is_none));
        assert!(vol[29..].iter().all(Option::is_some));
        assert_eq!(vol[29..].len(), 11);
    }

    #[test]
    fn test_estimates_are_non_negative() {
        let prices = synthetic_prices(60);
        let vol = historical_volatility(&prices, 20).unwrap();
        assert!(vol.iter().flatten().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_zero_variance_series() {
        let prices = vec![100.0; 40];
        let vol = historical_volatility(&prices, 30).unwrap();
        assert_eq!(vol[39], Some(0.0));
    }

    #[test]
    fn test_short_series_is_all_undefined() {
        let prices = synthetic_prices(10);
        let vol = historical_volatility(&prices, 30).unwrap();
        assert_eq!(vol.len(), 10);
        assert!(vol.iter().all(Option::is_none));
    }

    #[test]
    fn test_degenerate_window_is_a_usage_error() {
        let prices = synthetic_prices(10);
        assert!(historical_volatility(&prices, 0).is_err());
        assert!(historical_volatility(&prices, 1).is_err());
    }

    #[test]
    fn test_constant_returns_have_zero_volatility() {
        // 1% up every session: returns identical, realized vol exactly zero
        let mut prices = vec![100.0];
        for _ in 0..39 {
            let last = *prices.last().unwrap();
            prices.push(last * 1.01);
        }
        let vol = historical_volatility(&prices, 30).unwrap();
        assert!(vol[39].unwrap() < 1e-10);
    }
}
