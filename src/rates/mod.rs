//! Rate assumptions: market reference rates, rate normalization and withholding tax

mod normalizer;
mod tax;

pub use normalizer::{monthly_rate, effective_annual_rate, RateKind, RateSpec};
pub use tax::{tax_bracket, TaxSchedule};

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ValidationError;

/// Default CDI annual rate (percent)
pub const DEFAULT_CDI_ANNUAL_RATE: f64 = 10.75;

/// Default inflation (IPCA) annual rate (percent)
pub const DEFAULT_INFLATION_ANNUAL_RATE: f64 = 4.5;

/// Shared market reference rates, held constant over the whole horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRates {
    /// Interbank overnight rate, percent per year
    pub cdi_annual_rate: f64,

    /// Inflation index, percent per year
    pub inflation_annual_rate: f64,
}

impl Default for MarketRates {
    fn default() -> Self {
        Self {
            cdi_annual_rate: DEFAULT_CDI_ANNUAL_RATE,
            inflation_annual_rate: DEFAULT_INFLATION_ANNUAL_RATE,
        }
    }
}

impl MarketRates {
    pub fn new(cdi_annual_rate: f64, inflation_annual_rate: f64) -> Self {
        Self { cdi_annual_rate, inflation_annual_rate }
    }

    /// Read rates from `CDI_ANNUAL_RATE` / `INFLATION_ANNUAL_RATE`, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cdi_annual_rate: env_rate("CDI_ANNUAL_RATE", defaults.cdi_annual_rate),
            inflation_annual_rate: env_rate("INFLATION_ANNUAL_RATE", defaults.inflation_annual_rate),
        }
    }

    /// Check the rates against the accepted input ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_range("CDI annual rate", self.cdi_annual_rate, 0.1, 30.0)?;
        ValidationError::check_range("inflation annual rate", self.inflation_annual_rate, 0.0, 20.0)?;
        Ok(())
    }
}

fn env_rate(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring unparsable {}={:?}, using {}", key, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
