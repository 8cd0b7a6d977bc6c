//! Investment requests: product classification, parameters and input loading

mod data;
mod validation;
pub mod loader;

pub use data::{InvestmentRequest, NamedInvestment, ProductType};
pub use validation::{
    MAX_TERM_DAYS, MIN_INITIAL_BALANCE, MIN_TERM_DAYS,
};
pub use loader::{load_investments, load_investments_from_reader, parse_investment_spec};
