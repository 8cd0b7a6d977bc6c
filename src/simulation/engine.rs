//! Core simulation engine: monthly compounding with contributions, then withholding tax

use crate::investment::{InvestmentRequest, ProductType};
use crate::rates::{monthly_rate, TaxSchedule};
use super::state::SimulationState;
use super::result::SimulationResult;

/// Days counted as one month. Any remainder of the term is dropped.
pub const DAYS_PER_MONTH: u32 = 30;

/// Simulation engine
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    tax: TaxSchedule,
}

impl Simulator {
    /// Create an engine with a given withholding schedule
    pub fn new(tax: TaxSchedule) -> Self {
        Self { tax }
    }

    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax
    }

    /// Run a simulation for a request, normalizing its rate first
    pub fn simulate(&self, request: &InvestmentRequest) -> SimulationResult {
        self.simulate_with_rate(
            request.initial_balance,
            request.monthly_contribution,
            request.term_days,
            monthly_rate(&request.rate_spec),
            request.product_type,
            request.tax_exempt,
        )
    }

    /// Run a simulation with an already normalized monthly rate
    pub fn simulate_with_rate(
        &self,
        initial_balance: f64,
        monthly_contribution: f64,
        term_days: u32,
        monthly_rate: f64,
        product_type: ProductType,
        tax_exempt: bool,
    ) -> SimulationResult {
        let term_months = term_days / DAYS_PER_MONTH;

        let mut state = SimulationState::new(initial_balance);
        let mut monthly_balances = Vec::with_capacity(term_months as usize + 1);
        monthly_balances.push(state.balance);

        for _month in 1..=term_months {
            state.advance_month(monthly_contribution, monthly_rate);
            monthly_balances.push(state.balance);
        }

        let gross_final = state.balance;
        let total_contributed = initial_balance + monthly_contribution * term_months as f64;
        let gross_gain = gross_final - total_contributed;

        // CD is taxed whatever the flag says
        let taxable = match product_type {
            ProductType::Cd => true,
            ProductType::CreditNoteA | ProductType::CreditNoteB => !tax_exempt,
        };

        // A negative gain yields a negative tax; not clamped
        let (tax_rate, tax_withheld) = if taxable {
            let rate = self.tax.get_rate(term_days);
            (rate, gross_gain * rate)
        } else {
            (0.0, 0.0)
        };
        let net_final = gross_final - tax_withheld;

        log::debug!(
            "{} {} days ({} months) at {:.6}/month: gross {:.2}, tax {:.2}, net {:.2}",
            product_type,
            term_days,
            term_months,
            monthly_rate,
            gross_final,
            tax_withheld,
            net_final,
        );

        SimulationResult {
            monthly_balances,
            gross_final,
            net_final,
            tax_withheld,
            term_months,
            total_contributed,
            monthly_rate,
            tax_rate,
        }
    }
}

/// Simulate a request under the standard withholding schedule
pub fn simulate(request: &InvestmentRequest) -> SimulationResult {
    Simulator::default().simulate(request)
}

/// Simulate with an explicit monthly rate under the standard withholding schedule
pub fn simulate_with_rate(
    initial_balance: f64,
    monthly_contribution: f64,
    term_days: u32,
    monthly_rate: f64,
    product_type: ProductType,
    tax_exempt: bool,
) -> SimulationResult {
    Simulator::default().simulate_with_rate(
        initial_balance,
        monthly_contribution,
        term_days,
        monthly_rate,
        product_type,
        tax_exempt,
    )
}
