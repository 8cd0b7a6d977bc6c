//! Monthly compounding simulation engine

mod state;
mod engine;
mod result;
mod returns;

pub use state::SimulationState;
pub use engine::{simulate, simulate_with_rate, Simulator, DAYS_PER_MONTH};
pub use result::{BalanceRow, SimulationResult};
pub use returns::annualized_return;
