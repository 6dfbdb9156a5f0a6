//! Example: model-vs-market comparison on a synthetic option chain
//!
//! Plays the external orchestrator: builds a daily close history and an
//! option chain in memory, estimates volatility three ways (fixed guess,
//! rolling historical, implied), prices the chain under each, and reports
//! the RMSE against the quoted prices.
//!
//! Run with: cargo run --example compare_model_prices

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vol_options::prelude::*;

/// Median of the converged estimates; aggregation policy lives out here in
/// caller land, not in the core.
fn median(values: &mut Vec<f64>) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

fn main() {
    // Market setup
    let rate = 0.05; // 5% risk-free rate
    let maturity = 0.25; // 3 months
    let true_vol = 0.22; // the vol the synthetic market "knows"

    // Ninety sessions of synthetic daily closes, seeded for repeatability
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let daily = true_vol / TRADING_DAYS_PER_YEAR.sqrt();
    let mut closes = vec![100.0];
    for _ in 0..89 {
        let shock: f64 = rng.gen_range(-1.0..1.0) * daily * 1.7;
        let last = *closes.last().unwrap();
        closes.push(last * (1.0 + shock));
    }
    let spot = *closes.last().unwrap();

    println!("=== Market ===\n");
    println!("Spot:     ${:.2}", spot);
    println!("Rate:     {:.1}%", rate * 100.0);
    println!("Maturity: {:.2} years\n", maturity);

    // A call chain quoted at the true vol, with noise and two junk quotes
    let mut quotes = Vec::new();
    for i in 0..15 {
        let strike = spot * (0.85 + 0.025 * i as f64);
        let fair = bs_price(spot, 0.0, strike, rate, true_vol, maturity).unwrap();
        let noise = 1.0 + rng.gen_range(-0.01..0.01);
        quotes.push(MarketQuote::new(strike, fair * noise));
    }
    quotes.push(MarketQuote::new(spot * 1.30, 0.0)); // stale, never traded
    quotes.push(MarketQuote::new(spot * 1.35, f64::NAN)); // feed glitch

    let usable = usable_quotes(&quotes);
    println!("Quotes:   {} total, {} usable\n", quotes.len(), usable.len());

    // Volatility estimate #1: flat guess
    let fixed_vol = 0.25;

    // Volatility estimate #2: rolling historical, most recent window
    let hist = historical_volatility(&closes, 30).expect("window fits the series");
    let hist_vol = hist.last().copied().flatten().expect("series longer than window");

    // Volatility estimate #3: median implied vol across the usable strikes
    let ivs = implied_volatilities(&usable, spot, 0.0, rate, 0.2, maturity);
    let mut converged: Vec<f64> = ivs.iter().copied().flatten().collect();
    let implied_vol = median(&mut converged);

    println!("=== Volatility Estimates ===\n");
    println!("Fixed:      {:.2}%", fixed_vol * 100.0);
    println!("Historical: {:.2}%", hist_vol * 100.0);
    println!(
        "Implied:    {:.2}% ({} of {} strikes converged)\n",
        implied_vol * 100.0,
        converged.len(),
        usable.len()
    );

    // Bootstrap the historical estimator for an uncertainty band
    let dist = bootstrap_volatility(&closes, 60, 5000, 7).expect("valid bootstrap setup");
    let (lo, hi) = dist.confidence_interval();
    println!(
        "Bootstrap:  mean {:.2}%, 95% CI [{:.2}%, {:.2}%]\n",
        dist.mean() * 100.0,
        lo * 100.0,
        hi * 100.0
    );

    // Price the usable chain under each estimate and score against market
    println!("=== Model vs Market (RMSE) ===\n");
    let market: Vec<f64> = usable.iter().map(|q| q.price).collect();
    for (label, vol) in [
        ("fixed", fixed_vol),
        ("historical", hist_vol),
        ("implied", implied_vol),
    ] {
        let modeled: Vec<f64> = usable
            .iter()
            .map(|q| bs_price(spot, 0.0, q.strike, rate, vol, maturity).unwrap_or(f64::NAN))
            .collect();
        let error = rmse(&market, &modeled).expect("equal-length sequences");
        println!("{:<11} {:.4}", label, error);
    }

    // Expiry economics of the at-the-money call
    let atm = usable
        .iter()
        .min_by(|a, b| {
            let da = (a.strike - spot).abs();
            let db = (b.strike - spot).abs();
            da.partial_cmp(&db).unwrap()
        })
        .expect("chain is not empty");
    let breakeven = atm.strike + atm.price;
    println!("\n=== ATM Payoff at Expiry ===\n");
    println!("Strike:    ${:.2}, premium ${:.2}", atm.strike, atm.price);
    println!("Breakeven: ${:.2}", breakeven);
    println!(
        "P&L at breakeven: {:+.4} (long) / {:+.4} (writer)",
        OptionType::Call.profit(breakeven, atm.strike, atm.price),
        OptionType::Call.writer_profit(breakeven, atm.strike, atm.price)
    );
}
