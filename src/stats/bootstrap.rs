//! Bootstrap resampling of the volatility estimator
//!
//! Realized volatility from a finite return sample has no convenient
//! analytic confidence interval; resampling the observed returns with
//! replacement gives an empirical sampling distribution instead. Returns
//! are treated as exchangeable, so plain i.i.d. resampling (not a block
//! bootstrap) applies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::{simple_returns, VolError, VolResult};
use crate::stats::{sample_std, TRADING_DAYS_PER_YEAR};

/// Empirical sampling distribution of the volatility estimator.
///
/// One annualized estimate per resample trial, in trial order. Non-empty by
/// construction (`trials` is validated at the entry point).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapDistribution {
    /// Per-trial annualized volatility estimates
    pub estimates: Vec<f64>,
}

impl BootstrapDistribution {
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Point estimate: mean across trials
    pub fn mean(&self) -> f64 {
        self.estimates.iter().sum::<f64>() / self.estimates.len() as f64
    }

    /// Percentile via linear interpolation between order statistics
    pub fn percentile(&self, pct: f64) -> f64 {
        let mut sorted = self.estimates.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
        let lo = rank.floor() as usize;
        let hi = rank.ceil() as usize;
        let frac = rank - lo as f64;

        sorted[lo] + frac * (sorted[hi] - sorted[lo])
    }

    /// Two-sided 95% confidence interval (2.5th and 97.5th percentiles)
    pub fn confidence_interval(&self) -> (f64, f64) {
        (self.percentile(2.5), self.percentile(97.5))
    }
}

/// Bootstrap the annualized volatility estimator.
///
/// An explicit map over the trial index: trial `t` draws `sample_size`
/// returns with replacement from the full return series using its own
/// ChaCha8 generator seeded from `(seed, t)`, then takes the annualized
/// sample standard deviation of the draw. Trials are therefore independent
/// and the whole run reproduces exactly for a given `seed`.
///
/// Contract violations (fail-fast): zero `trials`, `sample_size` below 2
/// (no sample standard deviation exists), or a price series too short to
/// yield a single return.
pub fn bootstrap_volatility(
    prices: &[f64],
    sample_size: usize,
    trials: usize,
    seed: u64,
) -> VolResult<BootstrapDistribution> {
    if trials == 0 {
        return Err(VolError::invalid_input("bootstrap requires at least one trial"));
    }
    if sample_size < 2 {
        return Err(VolError::invalid_input(
            "bootstrap sample size must be at least two returns",
        ));
    }

    let returns = simple_returns(prices);
    if returns.is_empty() {
        return Err(VolError::data(
            "price series too short to derive any return",
        ));
    }

    let annualize = TRADING_DAYS_PER_YEAR.sqrt();
    let estimates = (0..trials)
        .map(|trial| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(trial as u64));
            let draw: Vec<f64> = (0..sample_size)
                .map(|_| returns[rng.gen_range(0..returns.len())])
                .collect();
            // sample_size >= 2 keeps the statistic defined
            sample_std(&draw).unwrap_or(0.0) * annualize
        })
        .collect();

    Ok(BootstrapDistribution { estimates })
}
