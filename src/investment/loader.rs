//! Load investments from CSV files and command-line specs

use csv::Reader;
use std::path::Path;

use super::{InvestmentRequest, NamedInvestment, ProductType};
use crate::error::LoadError;
use crate::rates::{MarketRates, RateKind, RateSpec};

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Product")]
    product: String,
    #[serde(rename = "RateKind")]
    rate_kind: String,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "TermDays")]
    term_days: u32,
    #[serde(rename = "TaxExempt", default)]
    tax_exempt: Option<bool>,
    #[serde(rename = "InitialBalance")]
    initial_balance: f64,
    #[serde(rename = "MonthlyContribution", default)]
    monthly_contribution: Option<f64>,
}

impl CsvRow {
    fn to_investment(self, row: usize, market: &MarketRates) -> Result<NamedInvestment, LoadError> {
        let product_type = ProductType::parse(&self.product)
            .ok_or_else(|| LoadError::UnknownProduct { row, value: self.product.clone() })?;
        let kind = RateKind::parse(&self.rate_kind)
            .ok_or_else(|| LoadError::UnknownRateKind { row, value: self.rate_kind.clone() })?;

        let request = InvestmentRequest::new(
            self.initial_balance,
            self.monthly_contribution.unwrap_or(0.0),
            self.term_days,
            RateSpec::from_market(kind, self.rate, market),
            product_type,
        )
        // Credit notes are exempt unless the file says otherwise
        .with_tax_exempt(self.tax_exempt.unwrap_or(true));

        Ok(match self.name.filter(|n| !n.trim().is_empty()) {
            Some(name) => NamedInvestment::new(name, request),
            None => NamedInvestment::from(request),
        })
    }
}

/// Load all investments from a CSV file
pub fn load_investments<P: AsRef<Path>>(path: P, market: &MarketRates) -> Result<Vec<NamedInvestment>, LoadError> {
    let reader = Reader::from_path(path)?;
    read_rows(reader, market)
}

/// Load investments from any reader (e.g., string buffer, request body)
pub fn load_investments_from_reader<R: std::io::Read>(
    reader: R,
    market: &MarketRates,
) -> Result<Vec<NamedInvestment>, LoadError> {
    read_rows(Reader::from_reader(reader), market)
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>, market: &MarketRates) -> Result<Vec<NamedInvestment>, LoadError> {
    let mut investments = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // 1-indexed data rows, header excluded
        investments.push(row.to_investment(idx + 1, market)?);
    }

    log::debug!("Loaded {} investments", investments.len());
    Ok(investments)
}

/// Parse a compact investment spec: `product:kind:rate:term_days[:exempt|:taxable]`
///
/// Balances come from the caller since they are shared across a comparison.
pub fn parse_investment_spec(
    spec: &str,
    initial_balance: f64,
    monthly_contribution: f64,
    market: &MarketRates,
) -> Result<NamedInvestment, LoadError> {
    let invalid = |reason: &str| LoadError::InvalidSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    if parts.len() < 4 || parts.len() > 5 {
        return Err(invalid("expected product:kind:rate:term_days[:exempt|:taxable]"));
    }

    let product_type = ProductType::parse(parts[0]).ok_or_else(|| invalid("unknown product"))?;
    let kind = RateKind::parse(parts[1]).ok_or_else(|| invalid("unknown rate kind"))?;
    let rate: f64 = parts[2].parse().map_err(|_| invalid("rate is not a number"))?;
    let term_days: u32 = parts[3].parse().map_err(|_| invalid("term is not a whole number of days"))?;

    let exempt = match parts.get(4).map(|s| s.to_ascii_lowercase()) {
        None => true,
        Some(flag) if flag == "exempt" => true,
        Some(flag) if flag == "taxable" => false,
        Some(_) => return Err(invalid("tax flag must be 'exempt' or 'taxable'")),
    };

    let request = InvestmentRequest::new(
        initial_balance,
        monthly_contribution,
        term_days,
        RateSpec::from_market(kind, rate, market),
        product_type,
    )
    .with_tax_exempt(exempt);

    Ok(NamedInvestment::from(request))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Product,RateKind,Rate,TermDays,TaxExempt,InitialBalance,MonthlyContribution
Bank A,CDB,fixed,11.0,720,,10000,500
,LCI,cdi,95,360,true,10000,500
Agro,LCA,ipca,5.0,1080,false,20000,
";

    #[test]
    fn test_load_from_reader() {
        let market = MarketRates::default();
        let investments = load_investments_from_reader(SAMPLE.as_bytes(), &market).expect("load");
        assert_eq!(investments.len(), 3);

        assert_eq!(investments[0].name, "Bank A");
        assert_eq!(investments[0].request.product_type, ProductType::Cd);
        // CD never carries the exemption
        assert!(!investments[0].request.tax_exempt);

        assert_eq!(investments[1].name, "LCI - Floating (% CDI)");
        assert_eq!(
            investments[1].request.rate_spec,
            RateSpec::FloatingCdi { percent_of_cdi: 95.0, cdi_annual_rate: 10.75 }
        );
        assert!(investments[1].request.tax_exempt);

        assert_eq!(investments[2].request.monthly_contribution, 0.0);
        assert!(!investments[2].request.tax_exempt);
        assert_eq!(investments[2].request.term_days, 1080);
    }

    #[test]
    fn test_load_sample_file() {
        let investments = load_investments("data/investments.csv", &MarketRates::default())
            .expect("Failed to load sample investments");
        assert_eq!(investments.len(), 5);
        assert!(investments.iter().all(|inv| inv.request.validate().is_ok()));
        assert_eq!(investments[4].request.term_days, 1080);
    }

    #[test]
    fn test_unknown_product_row() {
        let data = "Name,Product,RateKind,Rate,TermDays,TaxExempt,InitialBalance,MonthlyContribution\n\
                    x,Bond,fixed,11,360,,1000,0\n";
        let err = load_investments_from_reader(data.as_bytes(), &MarketRates::default()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownProduct { row: 1, .. }));
    }

    #[test]
    fn test_parse_spec() {
        let market = MarketRates::default();
        let inv = parse_investment_spec("LCA:ipca:5.5:720", 10_000.0, 500.0, &market).expect("spec");
        assert_eq!(inv.request.product_type, ProductType::CreditNoteB);
        assert!(inv.request.tax_exempt);
        assert_eq!(
            inv.request.rate_spec,
            RateSpec::HybridInflation { annual_spread: 5.5, inflation_annual_rate: 4.5 }
        );

        let taxable = parse_investment_spec("LCI:fixed:10:360:taxable", 10_000.0, 0.0, &market).expect("spec");
        assert!(taxable.request.is_taxable());
    }

    #[test]
    fn test_parse_spec_errors() {
        let market = MarketRates::default();
        assert!(parse_investment_spec("CDB:fixed:11", 1.0, 0.0, &market).is_err());
        assert!(parse_investment_spec("CDB:fixed:abc:360", 1.0, 0.0, &market).is_err());
        assert!(parse_investment_spec("CDB:fixed:11:360:maybe", 1.0, 0.0, &market).is_err());
        assert!(parse_investment_spec("ETF:fixed:11:360", 1.0, 0.0, &market).is_err());
    }
}
