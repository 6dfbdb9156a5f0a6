//! Pricing parameters
//!
//! All inputs the pricing engine needs, passed by value and never mutated.
//! Valuation and maturity times are explicit year-valued inputs; the crate
//! never reads the wall clock.

use serde::{Deserialize, Serialize};

use crate::models::black_scholes;

/// Inputs for one Black-Scholes valuation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Underlying spot price
    pub spot: f64,
    /// Valuation time in years (usually 0)
    pub valuation_time: f64,
    /// Strike price
    pub strike: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Annualized volatility
    pub volatility: f64,
    /// Maturity time in years, on the same clock as `valuation_time`
    pub maturity_time: f64,
}

impl PricingParameters {
    /// Parameters valued at time zero
    pub fn new(
        spot: f64,
        strike: f64,
        risk_free_rate: f64,
        volatility: f64,
        maturity_time: f64,
    ) -> Self {
        Self {
            spot,
            valuation_time: 0.0,
            strike,
            risk_free_rate,
            volatility,
            maturity_time,
        }
    }

    /// Time remaining to maturity, in years
    pub fn tau(&self) -> f64 {
        self.maturity_time - self.valuation_time
    }

    /// Do these parameters satisfy the pricing-engine preconditions?
    pub fn is_valid(&self) -> bool {
        self.tau() > 0.0 && self.volatility > 0.0 && self.strike > 0.0
    }

    /// Black-Scholes call value, `None` when the preconditions fail
    pub fn price(&self) -> Option<f64> {
        black_scholes::price(
            self.spot,
            self.valuation_time,
            self.strike,
            self.risk_free_rate,
            self.volatility,
            self.maturity_time,
        )
    }

    /// Sensitivity of the call value to volatility
    pub fn vega(&self) -> f64 {
        black_scholes::vega(
            self.spot,
            self.valuation_time,
            self.strike,
            self.risk_free_rate,
            self.volatility,
            self.maturity_time,
        )
    }
}
