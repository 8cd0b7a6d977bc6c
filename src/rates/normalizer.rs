//! Conversion of annual nominal rates into effective monthly compounding rates
//!
//! All annual inputs are percentages (11.0 = 11% a.a.) and are converted to
//! fractions before exponentiation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::MarketRates;

/// Rate regime of a product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateSpec {
    /// Fixed annual rate
    Fixed {
        annual_rate: f64,
    },
    /// Floating rate paying a percentage of CDI
    FloatingCdi {
        /// 105.0 = 105% of CDI
        percent_of_cdi: f64,
        cdi_annual_rate: f64,
    },
    /// Inflation index plus a fixed spread
    HybridInflation {
        annual_spread: f64,
        inflation_annual_rate: f64,
    },
}

/// Rate regime selection without market data attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateKind {
    Fixed,
    FloatingCdi,
    HybridInflation,
}

impl RateKind {
    /// Parse a regime tag. Accepts both English tags and the short forms used in input files.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "fixed" | "prefixada" | "pre" => Some(RateKind::Fixed),
            "cdi" | "floating" | "floatingcdi" | "pos" => Some(RateKind::FloatingCdi),
            "ipca" | "hybrid" | "hybridinflation" | "inflation" => Some(RateKind::HybridInflation),
            _ => None,
        }
    }
}

impl RateSpec {
    /// Build a spec from a regime selection, the product's own rate and the shared market rates
    pub fn from_market(kind: RateKind, rate: f64, market: &MarketRates) -> Self {
        match kind {
            RateKind::Fixed => RateSpec::Fixed { annual_rate: rate },
            RateKind::FloatingCdi => RateSpec::FloatingCdi {
                percent_of_cdi: rate,
                cdi_annual_rate: market.cdi_annual_rate,
            },
            RateKind::HybridInflation => RateSpec::HybridInflation {
                annual_spread: rate,
                inflation_annual_rate: market.inflation_annual_rate,
            },
        }
    }

    pub fn kind(&self) -> RateKind {
        match self {
            RateSpec::Fixed { .. } => RateKind::Fixed,
            RateSpec::FloatingCdi { .. } => RateKind::FloatingCdi,
            RateSpec::HybridInflation { .. } => RateKind::HybridInflation,
        }
    }

    /// The product's own contracted rate (annual %, % of CDI, or spread)
    pub fn contracted_rate(&self) -> f64 {
        match *self {
            RateSpec::Fixed { annual_rate } => annual_rate,
            RateSpec::FloatingCdi { percent_of_cdi, .. } => percent_of_cdi,
            RateSpec::HybridInflation { annual_spread, .. } => annual_spread,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RateSpec::Fixed { .. } => "Fixed",
            RateSpec::FloatingCdi { .. } => "Floating (% CDI)",
            RateSpec::HybridInflation { .. } => "Hybrid (IPCA + %)",
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self)
    }
}

impl fmt::Display for RateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RateSpec::Fixed { annual_rate } => write!(f, "{:.2}% a.a.", annual_rate),
            RateSpec::FloatingCdi { percent_of_cdi, .. } => write!(f, "{:.1}% CDI", percent_of_cdi),
            RateSpec::HybridInflation { annual_spread, .. } => write!(f, "IPCA + {:.2}%", annual_spread),
        }
    }
}

/// Monthly equivalent of an annual percentage rate under monthly compounding
fn annual_to_monthly(annual_pct: f64) -> f64 {
    (1.0 + annual_pct / 100.0).powf(1.0 / 12.0) - 1.0
}

/// Effective monthly rate for a rate regime
///
/// The hybrid regime adds the monthly inflation and monthly spread rather than
/// compounding them together.
pub fn monthly_rate(spec: &RateSpec) -> f64 {
    match *spec {
        RateSpec::Fixed { annual_rate } => annual_to_monthly(annual_rate),
        RateSpec::FloatingCdi { percent_of_cdi, cdi_annual_rate } => {
            annual_to_monthly(cdi_annual_rate) * (percent_of_cdi / 100.0)
        }
        RateSpec::HybridInflation { annual_spread, inflation_annual_rate } => {
            annual_to_monthly(inflation_annual_rate) + annual_to_monthly(annual_spread)
        }
    }
}

/// Annual rate equivalent to a monthly rate compounded twelve times (as a fraction)
pub fn effective_annual_rate(monthly: f64) -> f64 {
    (1.0 + monthly).powi(12) - 1.0
}
