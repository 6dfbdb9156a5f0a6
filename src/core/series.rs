//! Price series helpers
//!
//! A price series is an ordered slice of positive close prices. Returns are
//! derived on demand and never cached; the result is one element shorter
//! than its source.

/// Single-period simple returns: `p[i] / p[i-1] - 1`.
///
/// Prices are assumed strictly positive (upstream invariant of the data
/// model); an empty or single-element series yields an empty result.
pub fn simple_returns(prices: &[f64]) -> Vec<f64> {
    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_length_and_values() {
        let prices = vec![100.0, 110.0, 99.0];
        let returns = simple_returns(&prices);

        assert_eq!(returns.len(), prices.len() - 1);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] - (-0.10)).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_series() {
        assert!(simple_returns(&[]).is_empty());
        assert!(simple_returns(&[42.0]).is_empty());
    }
}
