//! Implied Volatility Solver
//!
//! Newton-Raphson calibration: find the volatility at which the
//! Black-Scholes value matches an observed market price.
//!
//! Failure (non-convergence, vega collapse, or an iterate leaving the valid
//! pricing region) is an expected data condition, reported as `None` like
//! any other undefined value. Some market quotes are simply not invertible.

use tracing::debug;

use crate::core::MarketQuote;
use crate::models::black_scholes::{price, vega};

/// Convergence tolerance on the price difference
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Iteration cap; the solver's only bound
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Below this vega the Newton step divides by effectively zero
pub const MIN_VEGA: f64 = 1e-8;

/// Solve for implied volatility with the default tolerance and iteration cap.
///
/// `initial_guess` seeds the iteration (0.20 is a common choice for equity
/// options). Returns `None` when the quote cannot be inverted.
pub fn implied_volatility(
    observed_price: f64,
    spot: f64,
    valuation_time: f64,
    strike: f64,
    risk_free_rate: f64,
    initial_guess: f64,
    maturity_time: f64,
) -> Option<f64> {
    implied_volatility_with(
        observed_price,
        spot,
        valuation_time,
        strike,
        risk_free_rate,
        initial_guess,
        maturity_time,
        DEFAULT_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    )
}

/// Newton-Raphson iteration with explicit tolerance and iteration cap.
///
/// The estimate is intentionally not clamped: an arbitrage-violating quote
/// can drive sigma negative or explosive, and the price/vega guards then
/// terminate the loop rather than mask the condition.
#[allow(clippy::too_many_arguments)]
pub fn implied_volatility_with(
    observed_price: f64,
    spot: f64,
    valuation_time: f64,
    strike: f64,
    risk_free_rate: f64,
    initial_guess: f64,
    maturity_time: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Option<f64> {
    let mut sigma = initial_guess;

    for _ in 0..max_iterations {
        let model = match price(
            spot,
            valuation_time,
            strike,
            risk_free_rate,
            sigma,
            maturity_time,
        ) {
            Some(p) => p,
            None => {
                debug!("implied vol iterate left the valid pricing region at sigma={}", sigma);
                return None;
            }
        };

        let sensitivity = vega(
            spot,
            valuation_time,
            strike,
            risk_free_rate,
            sigma,
            maturity_time,
        );
        if sensitivity < MIN_VEGA {
            debug!("vega {} too flat for a stable Newton step at sigma={}", sensitivity, sigma);
            return None;
        }

        let diff = model - observed_price;
        if diff.abs() < tolerance {
            return Some(sigma);
        }

        sigma -= diff / sensitivity;
    }

    debug!("implied vol did not converge for observed price {}", observed_price);
    None
}

/// Solve the whole strike range of a chain in one pass.
///
/// Output preserves order and length: one entry per quote, `None` where the
/// solver failed. Quotes are taken as given; filtering unusable prices is
/// the caller's responsibility (see [`crate::core::usable_quotes`]).
pub fn implied_volatilities(
    quotes: &[MarketQuote],
    spot: f64,
    valuation_time: f64,
    risk_free_rate: f64,
    initial_guess: f64,
    maturity_time: f64,
) -> Vec<Option<f64>> {
    quotes
        .iter()
        .map(|quote| {
            implied_volatility(
                quote.price,
                spot,
                valuation_time,
                quote.strike,
                risk_free_rate,
                initial_guess,
                maturity_time,
            )
        })
        .collect()
}
