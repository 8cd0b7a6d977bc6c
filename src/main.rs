//! Fixed-income simulator CLI
//!
//! Compares CDs and credit notes side by side and prints the ranked results

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

use fixed_income_sim::{
    investment::{load_investments, parse_investment_spec},
    report, ComparisonRunner, MarketRates, NamedInvestment,
};

#[derive(Parser, Debug)]
#[command(name = "fixed-income-sim", about = "Compare projected returns of CDs and credit notes")]
struct Cli {
    /// Initial investment
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    /// Contribution added at the start of each month
    #[arg(long, default_value_t = 500.0)]
    contribution: f64,

    /// CDI annual rate (%), defaults to CDI_ANNUAL_RATE or 10.75
    #[arg(long)]
    cdi: Option<f64>,

    /// Inflation annual rate (%), defaults to INFLATION_ANNUAL_RATE or 4.5
    #[arg(long)]
    inflation: Option<f64>,

    /// Investment as product:kind:rate:term_days[:exempt|:taxable], e.g. LCI:cdi:95:720
    #[arg(short = 'i', long = "investment")]
    investments: Vec<String>,

    /// CSV file of investments
    #[arg(long)]
    input: Option<PathBuf>,

    /// Start date (YYYY-MM-DD) for maturity dates
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Write monthly balances of every investment to this CSV file
    #[arg(long)]
    balances_csv: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut market = MarketRates::from_env();
    if let Some(cdi) = cli.cdi {
        market.cdi_annual_rate = cdi;
    }
    if let Some(inflation) = cli.inflation {
        market.inflation_annual_rate = inflation;
    }
    market.validate().context("invalid market rates")?;

    let mut investments: Vec<NamedInvestment> = Vec::new();
    if let Some(path) = &cli.input {
        let loaded = load_investments(path, &market)
            .with_context(|| format!("failed to load investments from {}", path.display()))?;
        investments.extend(loaded);
    }
    for spec in &cli.investments {
        investments.push(parse_investment_spec(spec, cli.initial, cli.contribution, &market)?);
    }

    if investments.is_empty() {
        // Same two defaults the comparison form opens with
        for spec in ["CDB:fixed:11:720", "LCI:cdi:95:720"] {
            investments.push(parse_investment_spec(spec, cli.initial, cli.contribution, &market)?);
        }
    }

    for inv in &investments {
        inv.request
            .validate()
            .with_context(|| format!("invalid investment {:?}", inv.name))?;
    }

    let comparison = ComparisonRunner::new().run(&investments);

    if cli.json {
        println!("{}", report::to_json(&comparison)?);
    } else {
        println!(
            "CDI {:.2}% a.a. | IPCA {:.2}% a.a.\n",
            market.cdi_annual_rate, market.inflation_annual_rate
        );
        print!("{}", report::render_table(&comparison, cli.start_date));
    }

    if let Some(path) = &cli.balances_csv {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_balances_csv(file, &comparison)?;
        log::info!("Monthly balances written to {}", path.display());
    }

    Ok(())
}
