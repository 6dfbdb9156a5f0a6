//! Option type and expiry payoffs
//!
//! Call/put payoff at expiration and premium-adjusted profit for the long
//! and short side. Profiles over a grid of terminal spots are plain numeric
//! sequences; rendering them is out of scope.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Profit of the long position at expiry, net of the premium paid
    pub fn profit(&self, spot_at_expiry: f64, strike: f64, premium: f64) -> f64 {
        self.intrinsic(spot_at_expiry, strike) - premium
    }

    /// Profit of the writer at expiry (mirror image of the long side)
    pub fn writer_profit(&self, spot_at_expiry: f64, strike: f64, premium: f64) -> f64 {
        -self.profit(spot_at_expiry, strike, premium)
    }

    /// Long-side profit evaluated over a grid of terminal spot prices
    pub fn profit_profile(&self, strike: f64, premium: f64, spots: &[f64]) -> Vec<f64> {
        spots.iter().map(|&s| self.profit(s, strike, premium)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.intrinsic(80.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.intrinsic(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_profit_sides() {
        // Long call, strike 100, premium 20
        let long = OptionType::Call.profit(150.0, 100.0, 20.0);
        assert_eq!(long, 30.0);

        // Writer takes the other side exactly
        let short = OptionType::Call.writer_profit(150.0, 100.0, 20.0);
        assert_eq!(short, -30.0);

        // Out of the money the long side loses the premium, no more
        assert_eq!(OptionType::Call.profit(50.0, 100.0, 20.0), -20.0);
        assert_eq!(OptionType::Put.profit(150.0, 100.0, 20.0), -20.0);
    }

    #[test]
    fn test_profit_profile() {
        let spots = vec![0.0, 100.0, 200.0];
        let profile = OptionType::Call.profit_profile(100.0, 20.0, &spots);
        assert_eq!(profile, vec![-20.0, -20.0, 80.0]);

        let put_profile = OptionType::Put.profit_profile(100.0, 20.0, &spots);
        assert_eq!(put_profile, vec![80.0, -20.0, -20.0]);
    }
}
