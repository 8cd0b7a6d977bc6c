//! Annualized return of a simulated investment

/// Annualized return (as a fraction) of growing `invested` into `final_value` over `months`
///
/// `(final / invested)^(12 / months) - 1`. Returns `None` when there is no
/// elapsed month or nothing was invested.
pub fn annualized_return(final_value: f64, invested: f64, months: u32) -> Option<f64> {
    if months == 0 || invested <= 0.0 {
        return None;
    }

    Some((final_value / invested).powf(12.0 / months as f64) - 1.0)
}
