//! Volatility estimators and accuracy metrics
//!
//! - historical: rolling realized volatility over a trailing window
//! - bootstrap: resampling distribution of the volatility estimator
//! - metrics: model-vs-market accuracy (RMSE)

pub mod bootstrap;
pub mod historical;
pub mod metrics;

pub use bootstrap::*;
pub use historical::*;
pub use metrics::*;

/// Annualization assumes daily close-to-close sampling, 252 trading days a
/// year. Series sampled at any other frequency need rescaling by the caller.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Sample standard deviation (n - 1 denominator).
///
/// `None` for fewer than two observations, where the statistic is undefined.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / (n - 1.0);

    Some(variance.sqrt())
}
