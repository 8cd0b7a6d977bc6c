//! Regressive withholding tax schedule by holding period

/// Withholding tax schedule by holding period in days
#[derive(Debug, Clone, PartialEq)]
pub struct TaxSchedule {
    /// (inclusive upper bound in days, rate), sorted by bound
    brackets: Vec<(u32, f64)>,
    /// Rate beyond the last bracket
    final_rate: f64,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            brackets: vec![
                (180, 0.225),
                (360, 0.20),
                (720, 0.175),
            ],
            final_rate: 0.15,
        }
    }
}

impl TaxSchedule {
    /// Build a custom schedule. Brackets are sorted by their upper bound.
    pub fn new(mut brackets: Vec<(u32, f64)>, final_rate: f64) -> Self {
        brackets.sort_by_key(|&(bound, _)| bound);
        Self { brackets, final_rate }
    }

    /// Withholding rate for a holding period
    pub fn get_rate(&self, term_days: u32) -> f64 {
        self.brackets
            .iter()
            .find(|&&(bound, _)| term_days <= bound)
            .map(|&(_, rate)| rate)
            .unwrap_or(self.final_rate)
    }

    pub fn brackets(&self) -> &[(u32, f64)] {
        &self.brackets
    }

    pub fn final_rate(&self) -> f64 {
        self.final_rate
    }
}

/// Withholding rate for a holding period under the standard regressive schedule
pub fn tax_bracket(term_days: u32) -> f64 {
    match term_days {
        0..=180 => 0.225,
        181..=360 => 0.20,
        361..=720 => 0.175,
        _ => 0.15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(tax_bracket(180), 0.225);
        assert_eq!(tax_bracket(181), 0.20);
        assert_eq!(tax_bracket(360), 0.20);
        assert_eq!(tax_bracket(361), 0.175);
        assert_eq!(tax_bracket(720), 0.175);
        assert_eq!(tax_bracket(721), 0.15);
    }

    #[test]
    fn test_short_and_long_terms() {
        assert_eq!(tax_bracket(0), 0.225);
        assert_eq!(tax_bracket(29), 0.225);
        assert_eq!(tax_bracket(7200), 0.15);
    }

    #[test]
    fn test_default_schedule_matches_function() {
        let schedule = TaxSchedule::default();
        for days in [1, 90, 180, 181, 270, 360, 361, 540, 720, 721, 1800, 7200] {
            assert_eq!(schedule.get_rate(days), tax_bracket(days), "mismatch at {} days", days);
        }
    }

    #[test]
    fn test_custom_schedule_sorted() {
        let schedule = TaxSchedule::new(vec![(365, 0.10), (30, 0.30)], 0.05);
        assert_eq!(schedule.brackets()[0], (30, 0.30));
        assert_eq!(schedule.get_rate(30), 0.30);
        assert_eq!(schedule.get_rate(31), 0.10);
        assert_eq!(schedule.get_rate(366), 0.05);
    }
}
