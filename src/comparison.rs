//! Side-by-side comparison of several investments
//!
//! Each simulation is independent and pure, so batches run in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::investment::NamedInvestment;
use crate::simulation::{SimulationResult, Simulator};

/// One simulated investment within a comparison
#[derive(Debug, Clone, Serialize)]
pub struct RankedInvestment {
    /// 1-based position by net final balance
    pub rank: usize,
    pub investment: NamedInvestment,
    pub result: SimulationResult,
}

/// Gap between the best and second-best investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunnerUpGap {
    /// Net final difference in currency
    pub amount: f64,
    /// Difference relative to the runner-up's net final, in percent
    pub percent: f64,
}

/// Ranked results of a comparison, best net final first
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub entries: Vec<RankedInvestment>,
}

impl Comparison {
    pub fn best(&self) -> Option<&RankedInvestment> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How much more the best option yields than the second best
    pub fn runner_up_gap(&self) -> Option<RunnerUpGap> {
        let best = self.entries.first()?;
        let second = self.entries.get(1)?;

        let amount = best.result.net_final - second.result.net_final;
        if second.result.net_final == 0.0 {
            return None;
        }

        Some(RunnerUpGap {
            amount,
            percent: amount / second.result.net_final * 100.0,
        })
    }
}

/// Runs comparisons with a shared simulation engine
#[derive(Debug, Clone, Default)]
pub struct ComparisonRunner {
    simulator: Simulator,
}

impl ComparisonRunner {
    /// Create runner with the standard withholding schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a pre-built engine
    pub fn with_simulator(simulator: Simulator) -> Self {
        Self { simulator }
    }

    /// Simulate each investment and rank by net final balance (ties keep input order)
    pub fn run(&self, investments: &[NamedInvestment]) -> Comparison {
        let results: Vec<SimulationResult> = investments
            .par_iter()
            .map(|inv| self.simulator.simulate(&inv.request))
            .collect();

        let mut entries: Vec<RankedInvestment> = investments
            .iter()
            .cloned()
            .zip(results)
            .map(|(investment, result)| RankedInvestment { rank: 0, investment, result })
            .collect();

        // Stable sort keeps input order for equal net finals
        entries.sort_by(|a, b| b.result.net_final.total_cmp(&a.result.net_final));
        for (idx, entry) in entries.iter_mut().enumerate() {
            entry.rank = idx + 1;
        }

        log::info!("Compared {} investments", entries.len());
        Comparison { entries }
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::{InvestmentRequest, ProductType};
    use crate::rates::{MarketRates, RateKind, RateSpec};

    fn investment(product: ProductType, kind: RateKind, rate: f64, exempt: bool) -> NamedInvestment {
        let market = MarketRates::default();
        NamedInvestment::from(
            InvestmentRequest::new(10_000.0, 500.0, 720, RateSpec::from_market(kind, rate, &market), product)
                .with_tax_exempt(exempt),
        )
    }

    #[test]
    fn test_ranking_by_net_final() {
        let investments = vec![
            investment(ProductType::Cd, RateKind::Fixed, 11.0, false),
            investment(ProductType::CreditNoteA, RateKind::FloatingCdi, 95.0, true),
            investment(ProductType::CreditNoteB, RateKind::HybridInflation, 5.0, true),
        ];

        let comparison = ComparisonRunner::new().run(&investments);
        assert_eq!(comparison.len(), 3);

        let nets: Vec<f64> = comparison.entries.iter().map(|e| e.result.net_final).collect();
        assert!(nets.windows(2).all(|w| w[0] >= w[1]), "not sorted: {:?}", nets);
        assert_eq!(comparison.entries[0].rank, 1);
        assert_eq!(comparison.entries[2].rank, 3);
        // Exempt 95% CDI beats both the exempt IPCA + 5% and the taxed 11% CD
        assert_eq!(comparison.best().unwrap().investment.request.product_type, ProductType::CreditNoteA);
        assert_eq!(comparison.entries[2].investment.request.product_type, ProductType::Cd);
    }

    #[test]
    fn test_runner_up_gap() {
        let investments = vec![
            investment(ProductType::Cd, RateKind::Fixed, 10.0, false),
            investment(ProductType::Cd, RateKind::Fixed, 12.0, false),
        ];

        let comparison = ComparisonRunner::new().run(&investments);
        let gap = comparison.runner_up_gap().unwrap();
        let best = comparison.entries[0].result.net_final;
        let second = comparison.entries[1].result.net_final;

        assert!((gap.amount - (best - second)).abs() < 1e-9);
        assert!((gap.percent - (best - second) / second * 100.0).abs() < 1e-9);
        assert!(gap.amount > 0.0);
    }

    #[test]
    fn test_single_and_empty() {
        let runner = ComparisonRunner::new();
        assert!(runner.run(&[]).is_empty());
        assert!(runner.run(&[]).best().is_none());

        let single = runner.run(&[investment(ProductType::Cd, RateKind::Fixed, 11.0, false)]);
        assert!(single.best().is_some());
        assert_eq!(single.runner_up_gap(), None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut first = investment(ProductType::CreditNoteA, RateKind::Fixed, 11.0, true);
        first.name = "first".to_string();
        let mut second = investment(ProductType::CreditNoteB, RateKind::Fixed, 11.0, true);
        second.name = "second".to_string();

        let comparison = ComparisonRunner::new().run(&[first, second]);
        assert_eq!(comparison.entries[0].investment.name, "first");
        assert_eq!(comparison.entries[1].investment.name, "second");
    }
}
