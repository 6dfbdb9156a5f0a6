//! Core data types for the volatility toolkit
//!
//! Defines fundamental types:
//! - MarketQuote: observed strike/price pair
//! - PricingParameters: by-value inputs for one valuation
//! - OptionType: call/put tag with expiry payoffs
//! - VolError: fail-fast contract-violation errors

pub mod error;
pub mod option;
pub mod params;
pub mod quote;
pub mod series;
pub mod time;

pub use error::*;
pub use option::*;
pub use params::*;
pub use quote::*;
pub use series::*;
pub use time::*;
