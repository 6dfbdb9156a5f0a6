//! Accuracy metrics
//!
//! Compares a modeled price sequence against the observed market sequence.

use crate::core::{VolError, VolResult};

/// Root-mean-square error between two equal-length sequences.
///
/// Length mismatch or empty input is a contract violation and fails fast;
/// there is no silent truncation to the shorter sequence.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> VolResult<f64> {
    if actual.len() != predicted.len() {
        return Err(VolError::invalid_input(format!(
            "rmse requires equal-length sequences, got {} and {}",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(VolError::invalid_input("rmse requires at least one element"));
    }

    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| {
            let d = a - p;
            d * d
        })
        .sum::<f64>()
        / actual.len() as f64;

    Ok(mse.sqrt())
}
