//! # Vol Options - Black-Scholes Volatility Toolkit
//!
//! A library for estimating option-implied and historical volatility and
//! pricing vanilla European calls under the Black-Scholes model.
//!
//! ## Overview
//!
//! The crate is the numeric core only. An external orchestrator fetches
//! spot, option-chain, and historical-close data, hands them in as plain
//! slices, and renders whatever comes back. Everything here is a pure,
//! synchronous function over caller-supplied values; there is no global
//! state, no wall-clock read, and no I/O.
//!
//! ## Key Components
//!
//! - **Black-Scholes**: closed-form call pricing and vega
//! - **Implied Volatility**: Newton-Raphson inversion of a market price
//! - **Historical Volatility**: rolling realized estimate from closes
//! - **Bootstrap**: resampled confidence interval for the estimate
//! - **Metrics**: RMSE of modeled against observed prices
//!
//! ## Usage
//!
//! ```rust
//! use vol_options::prelude::*;
//!
//! // Price an at-the-money call
//! let price = bs_price(100.0, 0.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//!
//! // Invert the market price back to an implied volatility
//! let iv = implied_volatility(price, 100.0, 0.0, 100.0, 0.05, 0.3, 1.0).unwrap();
//! assert!((iv - 0.2).abs() < 1e-4);
//! ```
//!
//! ## Undefined values
//!
//! Domain-invalid inputs (expired options, non-positive volatility or
//! strike) and solver non-convergence all come back as `None`, not errors,
//! so chain-wide batch runs keep going and filter afterwards. Contract
//! violations (mismatched RMSE inputs, zero bootstrap trials) fail fast
//! with [`VolError`].

pub mod core;
pub mod models;
pub mod stats;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        simple_returns, usable_quotes, year_fraction, MarketQuote, OptionType,
        PricingParameters, VolError, VolResult,
    };

    // Models
    pub use crate::models::{
        d1,
        d2,
        implied_volatilities,
        implied_volatility,
        implied_volatility_with,
        norm_cdf,
        norm_pdf,

        // Black-Scholes
        price as bs_price,
        vega as bs_vega,
    };

    // Estimators and metrics
    pub use crate::stats::{
        bootstrap_volatility, historical_volatility, rmse, BootstrapDistribution,
        TRADING_DAYS_PER_YEAR,
    };
}

// Re-export main types at crate root
pub use crate::core::{VolError, VolResult};
