//! Option market quotes
//!
//! A quote is an immutable strike/price pair as observed in the market.
//! The implied-volatility solver requires a strictly positive, finite price;
//! filtering on that invariant is the caller's job before invoking the
//! solver, and `usable_quotes` is the canonical filter.

use serde::{Deserialize, Serialize};

/// A single observed market quote for a European call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Strike price
    pub strike: f64,
    /// Observed market price (last, mid, or whatever the feed supplies)
    pub price: f64,
}

impl MarketQuote {
    pub fn new(strike: f64, price: f64) -> Self {
        Self { strike, price }
    }

    /// Can this quote be fed to the implied-volatility solver?
    ///
    /// Requires a strictly positive, finite price. Zero or stale sentinel
    /// prices from upstream feeds fail this check.
    pub fn is_usable(&self) -> bool {
        self.price > 0.0 && self.price.is_finite()
    }
}

/// Keep only quotes the solver can work with, preserving strike order.
pub fn usable_quotes(quotes: &[MarketQuote]) -> Vec<MarketQuote> {
    quotes.iter().copied().filter(MarketQuote::is_usable).collect()
}
