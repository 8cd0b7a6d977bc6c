//! AWS Lambda handler for investment comparisons
//!
//! Accepts a JSON comparison request and returns the ranked results with each
//! investment's monthly balances. Supports Lambda Function URLs for direct HTTP access.

use fixed_income_sim::{
    comparison::RunnerUpGap,
    investment::{InvestmentRequest, NamedInvestment, ProductType},
    rates::{RateKind, RateSpec, DEFAULT_CDI_ANNUAL_RATE, DEFAULT_INFLATION_ANNUAL_RATE},
    report::{self, SummaryRow},
    ComparisonRunner, MarketRates,
};
use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input configuration for the comparison
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    /// Initial investment shared by all options (default: 10,000)
    #[serde(default = "default_initial_balance")]
    pub initial_balance: f64,

    /// Monthly contribution shared by all options (default: 500)
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// CDI annual rate, percent (default: 10.75)
    #[serde(default = "default_cdi")]
    pub cdi_annual_rate: f64,

    /// Inflation annual rate, percent (default: 4.5)
    #[serde(default = "default_inflation")]
    pub inflation_annual_rate: f64,

    /// Optional start date for maturity dates
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Investments to compare
    pub investments: Vec<InvestmentInput>,
}

#[derive(Debug, Deserialize)]
pub struct InvestmentInput {
    #[serde(default)]
    pub name: Option<String>,
    /// "CDB", "LCI", "LCA" or the English tags
    pub product: String,
    /// "fixed", "cdi" or "ipca"
    pub rate_kind: String,
    pub rate: f64,
    pub term_days: u32,
    /// Credit notes default to exempt
    #[serde(default = "default_exempt")]
    pub tax_exempt: bool,
}

fn default_initial_balance() -> f64 { 10_000.0 }
fn default_monthly_contribution() -> f64 { 500.0 }
fn default_cdi() -> f64 { DEFAULT_CDI_ANNUAL_RATE }
fn default_inflation() -> f64 { DEFAULT_INFLATION_ANNUAL_RATE }
fn default_exempt() -> bool { true }

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub market: MarketRates,
    pub summary: Vec<SummaryRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_up_gap: Option<RunnerUpGap>,
    pub balances: Vec<BalanceSeries>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct BalanceSeries {
    pub name: String,
    pub monthly_balances: Vec<f64>,
}

fn build_investments(request: &CompareRequest, market: &MarketRates) -> Result<Vec<NamedInvestment>, String> {
    request
        .investments
        .iter()
        .enumerate()
        .map(|(idx, input)| -> Result<NamedInvestment, String> {
            let product = ProductType::parse(&input.product)
                .ok_or_else(|| format!("investment {}: unknown product {}", idx + 1, input.product))?;
            let kind = RateKind::parse(&input.rate_kind)
                .ok_or_else(|| format!("investment {}: unknown rate kind {}", idx + 1, input.rate_kind))?;

            let req = InvestmentRequest::new(
                request.initial_balance,
                request.monthly_contribution,
                input.term_days,
                RateSpec::from_market(kind, input.rate, market),
                product,
            )
            .with_tax_exempt(input.tax_exempt);
            req.validate().map_err(|e| format!("investment {}: {}", idx + 1, e))?;

            Ok(match &input.name {
                Some(name) => NamedInvestment::new(name.clone(), req),
                None => NamedInvestment::from(req),
            })
        })
        .collect()
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))?)
}

fn json_response(body: &CompareResponse) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CompareRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    if request.investments.is_empty() {
        return error_response(400, "at least one investment is required");
    }

    let market = MarketRates::new(request.cdi_annual_rate, request.inflation_annual_rate);
    if let Err(e) = market.validate() {
        return error_response(400, &e.to_string());
    }

    let investments = match build_investments(&request, &market) {
        Ok(investments) => investments,
        Err(message) => return error_response(400, &message),
    };

    let comparison = ComparisonRunner::new().run(&investments);

    let response = CompareResponse {
        market,
        summary: report::summary_rows(&comparison, request.start_date),
        runner_up_gap: comparison.runner_up_gap(),
        balances: comparison
            .entries
            .iter()
            .map(|entry| BalanceSeries {
                name: entry.investment.name.clone(),
                monthly_balances: entry.result.monthly_balances.clone(),
            })
            .collect(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    json_response(&response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
