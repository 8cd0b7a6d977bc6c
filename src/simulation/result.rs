//! Simulation output structures

use serde::{Deserialize, Serialize};

use super::returns::annualized_return;

/// Balance at the end of one month, for time-series output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceRow {
    pub month: u32,
    pub balance: f64,
}

/// Complete result of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Balance trajectory, index 0 = initial balance, length `term_months + 1`
    pub monthly_balances: Vec<f64>,

    /// Balance at the end of the term, before tax
    pub gross_final: f64,

    /// Balance after withholding tax
    pub net_final: f64,

    /// Withholding tax on the gain (negative when the gain is negative)
    pub tax_withheld: f64,

    /// Whole months simulated (`term_days / 30`)
    pub term_months: u32,

    /// Initial balance plus all monthly contributions
    pub total_contributed: f64,

    /// Effective monthly rate used
    pub monthly_rate: f64,

    /// Withholding rate applied, 0 when untaxed
    pub tax_rate: f64,
}

impl SimulationResult {
    /// Gain before tax
    pub fn gross_gain(&self) -> f64 {
        self.gross_final - self.total_contributed
    }

    /// Gain after tax
    pub fn net_gain(&self) -> f64 {
        self.net_final - self.total_contributed
    }

    /// Annualized net return (fraction), `None` for terms under one month
    pub fn annualized_net_return(&self) -> Option<f64> {
        annualized_return(self.net_final, self.total_contributed, self.term_months)
    }

    /// Balance trajectory as (month, balance) rows
    pub fn balance_rows(&self) -> Vec<BalanceRow> {
        self.monthly_balances
            .iter()
            .enumerate()
            .map(|(month, &balance)| BalanceRow { month: month as u32, balance })
            .collect()
    }
}
