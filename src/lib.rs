//! Fixed-income simulator - monthly compounding engine for CDs and credit notes
//!
//! This library provides:
//! - Rate normalization for fixed, CDI-indexed and inflation-linked hybrid regimes
//! - Month-by-month balance simulation with contributions
//! - Regressive withholding tax on the gain
//! - Ranking of several investments by net final balance
//! - Table, CSV and JSON rendering of results

pub mod error;
pub mod investment;
pub mod rates;
pub mod simulation;
pub mod comparison;
pub mod report;

// Re-export commonly used types
pub use error::{LoadError, ValidationError};
pub use investment::{InvestmentRequest, NamedInvestment, ProductType};
pub use rates::{monthly_rate, tax_bracket, MarketRates, RateKind, RateSpec, TaxSchedule};
pub use simulation::{simulate, simulate_with_rate, SimulationResult, Simulator};
pub use comparison::{Comparison, ComparisonRunner};
