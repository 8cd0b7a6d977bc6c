//! Run a batch of investments from a CSV file
//!
//! Usage: run_batch <investments.csv> [summary.csv]
//! Market rates come from CDI_ANNUAL_RATE / INFLATION_ANNUAL_RATE.

use anyhow::{Context, Result};
use fixed_income_sim::{investment::load_investments, report, ComparisonRunner, MarketRates};
use std::env;
use std::fs::File;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "data/investments.csv".to_string());
    let output = args.next().unwrap_or_else(|| "batch_summary.csv".to_string());

    let start = Instant::now();
    let market = MarketRates::from_env();
    market.validate().context("invalid market rates")?;

    println!("Loading investments from {}...", input);
    let investments = load_investments(&input, &market)
        .with_context(|| format!("failed to load {}", input))?;
    println!("Loaded {} investments in {:?}", investments.len(), start.elapsed());

    // Invalid rows are reported and left out rather than failing the batch
    let (valid, invalid): (Vec<_>, Vec<_>) = investments
        .into_iter()
        .partition(|inv| inv.request.validate().is_ok());
    for inv in &invalid {
        if let Err(err) = inv.request.validate() {
            log::warn!("Skipping {}: {}", inv.name, err);
        }
    }

    let sim_start = Instant::now();
    let comparison = ComparisonRunner::new().run(&valid);
    println!("Simulations complete in {:?}", sim_start.elapsed());

    let file = File::create(&output).with_context(|| format!("unable to create {}", output))?;
    report::write_summary_csv(file, &comparison, None)?;
    println!("Summary written to {}", output);

    println!("\nBatch Summary:");
    println!("  Simulated: {}", comparison.len());
    println!("  Skipped:   {}", invalid.len());
    if let Some(best) = comparison.best() {
        println!(
            "  Best:      {} ({})",
            best.investment.name,
            report::format_money(best.result.net_final)
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
