//! Black-Scholes Pricing Engine
//!
//! Provides:
//! - Closed-form European call pricing
//! - Vega (price sensitivity to volatility)
//! - The d1/d2 building blocks and standard-normal helpers
//!
//! Pricing returns `Option<f64>`: `None` stands for the undefined value a
//! violated precondition produces, so batch computations over a strike range
//! carry on and filter afterwards instead of unwinding per element.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter for time-to-maturity `tau`
pub fn d1(spot: f64, strike: f64, rate: f64, vol: f64, tau: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * tau) / (vol * tau.sqrt())
}

/// Black-Scholes d2 parameter for time-to-maturity `tau`
pub fn d2(spot: f64, strike: f64, rate: f64, vol: f64, tau: f64) -> f64 {
    d1(spot, strike, rate, vol, tau) - vol * tau.sqrt()
}

/// Black-Scholes value of a European call.
///
/// Preconditions: `maturity_time > valuation_time`, `volatility > 0`,
/// `strike > 0`. Any violation yields `None`. No clamping is applied to
/// d1/d2; deep in- or out-of-the-money inputs may price near intrinsic
/// value or near zero.
pub fn price(
    spot: f64,
    valuation_time: f64,
    strike: f64,
    risk_free_rate: f64,
    volatility: f64,
    maturity_time: f64,
) -> Option<f64> {
    let tau = maturity_time - valuation_time;
    // Negated comparisons so NaN inputs fail the guard as well
    if !(tau > 0.0) || !(volatility > 0.0) || !(strike > 0.0) {
        return None;
    }

    let d1 = d1(spot, strike, risk_free_rate, volatility, tau);
    let d2 = d1 - volatility * tau.sqrt();
    let value =
        spot * norm_cdf(d1) - strike * (-risk_free_rate * tau).exp() * norm_cdf(d2);

    // A non-finite spot (or similar) slips past the guards above; collapse
    // it into the same sentinel so Some is always finite.
    value.is_finite().then_some(value)
}

/// Vega: derivative of the call value with respect to volatility.
///
/// `spot * pdf(d1) * sqrt(tau)`. Deliberately unguarded; with `tau <= 0` or
/// non-positive volatility the result is NaN and callers must treat it as
/// undefined.
pub fn vega(
    spot: f64,
    valuation_time: f64,
    strike: f64,
    risk_free_rate: f64,
    volatility: f64,
    maturity_time: f64,
) -> f64 {
    let tau = maturity_time - valuation_time;
    spot * norm_pdf(d1(spot, strike, risk_free_rate, volatility, tau)) * tau.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
    }

    #[test]
    fn test_price_regression() {
        // Long-dated deep ITM call, pinned against the closed form
        let value = price(100.0, 0.0, 80.0, 0.01, 0.25, 30.0).unwrap();
        assert!((value - 63.10886876160603).abs() < 1e-9);

        // ATM call, 20% vol, 1 year, 5% rate
        let atm = price(100.0, 0.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert!((atm - 10.450583572185565).abs() < 1e-9);
    }

    #[test]
    fn test_price_monotonic_in_spot_and_vol() {
        let base = price(100.0, 0.0, 100.0, 0.05, 0.2, 1.0).unwrap();

        let higher_spot = price(105.0, 0.0, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert!(higher_spot >= base);

        let higher_vol = price(100.0, 0.0, 100.0, 0.05, 0.3, 1.0).unwrap();
        assert!(higher_vol >= base);
    }

    #[test]
    fn test_undefined_on_violated_preconditions() {
        // tau = 0
        assert!(price(100.0, 0.0, 80.0, 0.01, 0.25, 0.0).is_none());
        // valuation after maturity
        assert!(price(100.0, 2.0, 80.0, 0.01, 0.25, 1.0).is_none());
        // non-positive volatility
        assert!(price(100.0, 0.0, 80.0, 0.01, 0.0, 1.0).is_none());
        assert!(price(100.0, 0.0, 80.0, 0.01, -0.2, 1.0).is_none());
        // non-positive strike
        assert!(price(100.0, 0.0, 0.0, 0.01, 0.25, 1.0).is_none());
        // NaN volatility must not leak through as Some(NaN)
        assert!(price(100.0, 0.0, 80.0, 0.01, f64::NAN, 1.0).is_none());
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let vega_atm = vega(100.0, 0.0, 100.0, 0.05, 0.2, 1.0);
        assert!((vega_atm - 37.52403469169379).abs() < 1e-9);

        let h = 1e-6;
        let up = price(100.0, 0.0, 100.0, 0.05, 0.2 + h, 1.0).unwrap();
        let down = price(100.0, 0.0, 100.0, 0.05, 0.2 - h, 1.0).unwrap();
        let fd = (up - down) / (2.0 * h);
        assert!((vega_atm - fd).abs() < 1e-4);
    }

    #[test]
    fn test_vega_undefined_at_expiry() {
        assert!(vega(100.0, 0.0, 100.0, 0.05, 0.2, 0.0).is_nan());
    }
}
