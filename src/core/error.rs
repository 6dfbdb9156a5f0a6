//! Error types for the volatility core
//!
//! Only contract violations surface as errors. Domain-invalid inputs and
//! solver non-convergence are data conditions and travel as the `None`
//! sentinel instead, so batch computations over many strikes keep going.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Data error: {0}")]
    Data(String),
}

pub type VolResult<T> = Result<T, VolError>;

impl VolError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::Numerical(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}
