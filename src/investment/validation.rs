//! Input bounds for investment requests
//!
//! The engine accepts any finite input; callers run these checks before
//! handing a request over.

use super::{InvestmentRequest, ProductType};
use crate::error::ValidationError;
use crate::rates::RateSpec;

pub const MIN_INITIAL_BALANCE: f64 = 100.0;
pub const MIN_TERM_DAYS: u32 = 30;
pub const MAX_TERM_DAYS: u32 = 7200;

impl InvestmentRequest {
    /// Check the request against the accepted input ranges
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_min("initial balance", self.initial_balance, MIN_INITIAL_BALANCE)?;
        ValidationError::check_min("monthly contribution", self.monthly_contribution, 0.0)?;

        if self.term_days < MIN_TERM_DAYS || self.term_days > MAX_TERM_DAYS {
            return Err(ValidationError::Term {
                days: self.term_days,
                min: MIN_TERM_DAYS,
                max: MAX_TERM_DAYS,
            });
        }

        match self.rate_spec {
            RateSpec::Fixed { annual_rate } => {
                ValidationError::check_range("fixed annual rate", annual_rate, 0.1, 50.0)?;
            }
            RateSpec::FloatingCdi { percent_of_cdi, cdi_annual_rate } => {
                ValidationError::check_range("percent of CDI", percent_of_cdi, 50.0, 150.0)?;
                ValidationError::check_range("CDI annual rate", cdi_annual_rate, 0.1, 30.0)?;
            }
            RateSpec::HybridInflation { annual_spread, inflation_annual_rate } => {
                ValidationError::check_range("hybrid spread", annual_spread, 0.0, 20.0)?;
                ValidationError::check_range("inflation annual rate", inflation_annual_rate, 0.0, 20.0)?;
            }
        }

        if self.product_type == ProductType::Cd && self.tax_exempt {
            return Err(ValidationError::ExemptCd);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> InvestmentRequest {
        InvestmentRequest::new(
            10_000.0,
            500.0,
            720,
            RateSpec::Fixed { annual_rate: 11.0 },
            ProductType::Cd,
        )
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_initial_balance_minimum() {
        let mut request = valid_request();
        request.initial_balance = 99.99;
        assert!(matches!(request.validate(), Err(ValidationError::BelowMinimum { .. })));
    }

    #[test]
    fn test_negative_contribution() {
        let mut request = valid_request();
        request.monthly_contribution = -1.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_term_bounds() {
        let mut request = valid_request();
        request.term_days = 29;
        assert_eq!(
            request.validate(),
            Err(ValidationError::Term { days: 29, min: 30, max: 7200 })
        );
        request.term_days = 7200;
        assert!(request.validate().is_ok());
        request.term_days = 7201;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rate_bounds_per_regime() {
        let mut request = valid_request();

        request.rate_spec = RateSpec::Fixed { annual_rate: 50.5 };
        assert!(request.validate().is_err());

        request.rate_spec = RateSpec::FloatingCdi { percent_of_cdi: 49.0, cdi_annual_rate: 10.75 };
        assert!(request.validate().is_err());
        request.rate_spec = RateSpec::FloatingCdi { percent_of_cdi: 150.0, cdi_annual_rate: 10.75 };
        assert!(request.validate().is_ok());

        request.rate_spec = RateSpec::HybridInflation { annual_spread: 0.0, inflation_annual_rate: 0.0 };
        assert!(request.validate().is_ok());
        request.rate_spec = RateSpec::HybridInflation { annual_spread: 5.0, inflation_annual_rate: f64::NAN };
        assert!(matches!(request.validate(), Err(ValidationError::NotFinite { .. })));
    }

    #[test]
    fn test_exempt_cd_rejected() {
        // Bypasses the builder on purpose
        let mut request = valid_request();
        request.tax_exempt = true;
        assert_eq!(request.validate(), Err(ValidationError::ExemptCd));
    }
}
