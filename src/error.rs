//! Error types for the input layer
//!
//! The simulation engine itself is infallible; these errors come from
//! validating caller input and loading investment files.

/// An input value outside what the simulator accepts
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum { field: &'static str, value: f64, min: f64 },

    #[error("term must be between {min} and {max} days, got {days}")]
    Term { days: u32, min: u32, max: u32 },

    #[error("a CD is always taxable and cannot be marked tax exempt")]
    ExemptCd,
}

impl ValidationError {
    pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NotFinite { field, value })
        }
    }

    pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), Self> {
        Self::check_finite(field, value)?;
        if value < min || value > max {
            return Err(ValidationError::OutOfRange { field, value, min, max });
        }
        Ok(())
    }

    pub(crate) fn check_min(field: &'static str, value: f64, min: f64) -> Result<(), Self> {
        Self::check_finite(field, value)?;
        if value < min {
            return Err(ValidationError::BelowMinimum { field, value, min });
        }
        Ok(())
    }
}

/// Failure while reading investments from a file or string
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row}: unknown product {value:?}")]
    UnknownProduct { row: usize, value: String },

    #[error("row {row}: unknown rate kind {value:?}")]
    UnknownRateKind { row: usize, value: String },

    #[error("invalid investment spec {spec:?}: {reason}")]
    InvalidSpec { spec: String, reason: String },
}
