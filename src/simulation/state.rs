//! Running balance of a single simulation

/// State of an investment at a point in time during simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Months elapsed (0 = before any growth)
    pub month: u32,

    /// Balance after this month's contribution and growth
    pub balance: f64,
}

impl SimulationState {
    /// Initial state: the opening deposit, no growth yet
    pub fn new(initial_balance: f64) -> Self {
        Self {
            month: 0,
            balance: initial_balance,
        }
    }

    /// Advance one month: contribution first, then growth on the whole balance
    pub fn advance_month(&mut self, monthly_contribution: f64, monthly_rate: f64) {
        self.month += 1;

        if monthly_contribution > 0.0 {
            self.balance += monthly_contribution;
        }

        self.balance *= 1.0 + monthly_rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contribution_before_growth() {
        let mut state = SimulationState::new(1_000.0);
        state.advance_month(100.0, 0.01);

        assert_eq!(state.month, 1);
        assert!((state.balance - 1_111.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_contribution_no_growth() {
        let mut state = SimulationState::new(1_000.0);
        state.advance_month(0.0, 0.0);
        assert_eq!(state.balance, 1_000.0);
    }
}
