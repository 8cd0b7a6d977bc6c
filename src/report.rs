//! Rendering comparison results as text tables, CSV and JSON

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::io::Write;

use crate::comparison::{Comparison, RankedInvestment};

/// One line of the comparison table, full precision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub rank: usize,
    pub name: String,
    pub product: String,
    pub rate: String,
    pub term_days: u32,
    pub term_months: u32,
    pub maturity_date: Option<NaiveDate>,
    pub total_invested: f64,
    pub gross_final: f64,
    pub tax_withheld: f64,
    pub net_final: f64,
    pub net_gain: f64,
    pub annual_net_return_pct: Option<f64>,
}

impl SummaryRow {
    pub fn from_ranked(entry: &RankedInvestment, start_date: Option<NaiveDate>) -> Self {
        let request = &entry.investment.request;
        let result = &entry.result;

        Self {
            rank: entry.rank,
            name: entry.investment.name.clone(),
            product: request.product_type.label().to_string(),
            rate: request.rate_spec.to_string(),
            term_days: request.term_days,
            term_months: result.term_months,
            maturity_date: start_date.and_then(|d| maturity_date(d, request.term_days)),
            total_invested: result.total_contributed,
            gross_final: result.gross_final,
            tax_withheld: result.tax_withheld,
            net_final: result.net_final,
            net_gain: result.net_gain(),
            annual_net_return_pct: result.annualized_net_return().map(|r| r * 100.0),
        }
    }

    /// Gain before tax, recovered from the displayed figures
    pub fn gross_gain(&self) -> f64 {
        self.net_final + self.tax_withheld - self.total_invested
    }
}

/// Date the holding period ends
pub fn maturity_date(start: NaiveDate, term_days: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(term_days as u64))
}

pub fn summary_rows(comparison: &Comparison, start_date: Option<NaiveDate>) -> Vec<SummaryRow> {
    comparison
        .entries
        .iter()
        .map(|entry| SummaryRow::from_ranked(entry, start_date))
        .collect()
}

/// Format a currency amount as `R$ 1,234.56`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("R$ {}{}.{:02}", sign, grouped, frac)
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Plain-text comparison table followed by the best option and runner-up gap
pub fn render_table(comparison: &Comparison, start_date: Option<NaiveDate>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>4}  {:<28} {:>6} {:>16} {:>16} {:>16} {:>14} {:>16} {:>16} {:>12}\n",
        "Rank", "Investment", "Days", "Rate", "Invested", "Gross", "Tax", "Net", "Net gain", "Annual"
    ));
    out.push_str(&"-".repeat(156));
    out.push('\n');

    for row in summary_rows(comparison, start_date) {
        let annual = row
            .annual_net_return_pct
            .map(format_percent)
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(&format!(
            "{:>4}  {:<28} {:>6} {:>16} {:>16} {:>16} {:>14} {:>16} {:>16} {:>12}\n",
            row.rank,
            row.name,
            row.term_days,
            row.rate,
            format_money(row.total_invested),
            format_money(row.gross_final),
            format_money(row.tax_withheld),
            format_money(row.net_final),
            format_money(row.net_gain),
            annual,
        ));
        if let Some(date) = row.maturity_date {
            out.push_str(&format!("{:>6}matures {}\n", "", date));
        }
    }

    if let Some(best) = comparison.best() {
        out.push_str(&format!(
            "\nBest option: {} - net {} (gain {})\n",
            best.investment.name,
            format_money(best.result.net_final),
            format_money(best.result.net_gain()),
        ));
    }

    if let Some(gap) = comparison.runner_up_gap() {
        out.push_str(&format!(
            "Beats the runner-up by {} ({:.1}% of its final value)\n",
            format_money(gap.amount),
            gap.percent,
        ));
    }

    out
}

/// Write the comparison summary as CSV
pub fn write_summary_csv<W: Write>(
    writer: W,
    comparison: &Comparison,
    start_date: Option<NaiveDate>,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in summary_rows(comparison, start_date) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct BalanceCsvRow<'a> {
    investment: &'a str,
    month: u32,
    balance: f64,
}

/// Write every investment's balance trajectory as long-format CSV
pub fn write_balances_csv<W: Write>(writer: W, comparison: &Comparison) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in &comparison.entries {
        for row in entry.result.balance_rows() {
            csv_writer.serialize(BalanceCsvRow {
                investment: &entry.investment.name,
                month: row.month,
                balance: row.balance,
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_json(comparison: &Comparison) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(comparison)
}
