//! Investment request structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rates::RateSpec;

/// Fixed-income product classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Bank certificate of deposit (CDB), always taxable
    Cd,
    /// Real-estate backed credit note (LCI)
    CreditNoteA,
    /// Agribusiness backed credit note (LCA)
    CreditNoteB,
}

impl ProductType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "CD" | "CDB" => Some(ProductType::Cd),
            "CREDITNOTEA" | "LCI" => Some(ProductType::CreditNoteA),
            "CREDITNOTEB" | "LCA" => Some(ProductType::CreditNoteB),
            _ => None,
        }
    }

    pub fn is_credit_note(&self) -> bool {
        matches!(self, ProductType::CreditNoteA | ProductType::CreditNoteB)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Cd => "CDB",
            ProductType::CreditNoteA => "LCI",
            ProductType::CreditNoteB => "LCA",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parameters of a single simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    /// Amount invested at month 0
    pub initial_balance: f64,

    /// Amount added at the start of every month after month 0
    pub monthly_contribution: f64,

    /// Holding period in days
    pub term_days: u32,

    /// Rate regime
    pub rate_spec: RateSpec,

    /// Product classification
    pub product_type: ProductType,

    /// Withholding tax exemption (credit notes only)
    #[serde(default)]
    pub tax_exempt: bool,
}

impl InvestmentRequest {
    /// Create a taxable request
    pub fn new(
        initial_balance: f64,
        monthly_contribution: f64,
        term_days: u32,
        rate_spec: RateSpec,
        product_type: ProductType,
    ) -> Self {
        Self {
            initial_balance,
            monthly_contribution,
            term_days,
            rate_spec,
            product_type,
            tax_exempt: false,
        }
    }

    /// Set the exemption flag. A CD stays taxable whatever is passed.
    pub fn with_tax_exempt(mut self, exempt: bool) -> Self {
        self.tax_exempt = exempt && self.product_type.is_credit_note();
        self
    }

    /// Whether withholding tax applies to the gain
    pub fn is_taxable(&self) -> bool {
        match self.product_type {
            ProductType::Cd => true,
            ProductType::CreditNoteA | ProductType::CreditNoteB => !self.tax_exempt,
        }
    }

    /// Display name of the product and regime, e.g. "LCI - Fixed"
    pub fn default_name(&self) -> String {
        format!("{} - {}", self.product_type, self.rate_spec.label())
    }
}

/// A request with a display name, as compared side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInvestment {
    pub name: String,
    pub request: InvestmentRequest,
}

impl NamedInvestment {
    pub fn new(name: impl Into<String>, request: InvestmentRequest) -> Self {
        Self { name: name.into(), request }
    }
}

impl From<InvestmentRequest> for NamedInvestment {
    fn from(request: InvestmentRequest) -> Self {
        Self { name: request.default_name(), request }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(rate: f64) -> RateSpec {
        RateSpec::Fixed { annual_rate: rate }
    }

    #[test]
    fn test_cd_cannot_be_exempt() {
        let request = InvestmentRequest::new(10_000.0, 0.0, 360, fixed(11.0), ProductType::Cd)
            .with_tax_exempt(true);
        assert!(!request.tax_exempt);
        assert!(request.is_taxable());
    }

    #[test]
    fn test_credit_note_exemption() {
        let exempt = InvestmentRequest::new(10_000.0, 0.0, 360, fixed(11.0), ProductType::CreditNoteA)
            .with_tax_exempt(true);
        assert!(!exempt.is_taxable());

        let taxable = InvestmentRequest::new(10_000.0, 0.0, 360, fixed(11.0), ProductType::CreditNoteB);
        assert!(taxable.is_taxable());
    }

    #[test]
    fn test_product_parse() {
        assert_eq!(ProductType::parse("cdb"), Some(ProductType::Cd));
        assert_eq!(ProductType::parse("CD"), Some(ProductType::Cd));
        assert_eq!(ProductType::parse("LCI"), Some(ProductType::CreditNoteA));
        assert_eq!(ProductType::parse("CreditNoteB"), Some(ProductType::CreditNoteB));
        assert_eq!(ProductType::parse("bond"), None);
    }

    #[test]
    fn test_default_name() {
        let request = InvestmentRequest::new(
            1_000.0,
            0.0,
            720,
            RateSpec::FloatingCdi { percent_of_cdi: 105.0, cdi_annual_rate: 10.75 },
            ProductType::CreditNoteB,
        );
        assert_eq!(request.default_name(), "LCA - Floating (% CDI)");
        assert_eq!(NamedInvestment::from(request).name, "LCA - Floating (% CDI)");
    }
}
