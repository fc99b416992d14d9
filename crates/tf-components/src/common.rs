//! Common validation helpers for component calculations.

use crate::error::{ComponentError, ComponentResult};
use tf_core::numeric::ensure_finite;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonFinite { what })
}

/// Finite and strictly positive.
pub fn require_positive(value: f64, field: &'static str) -> ComponentResult<f64> {
    if check_finite(value, field)? > 0.0 {
        Ok(value)
    } else {
        Err(ComponentError::InvalidInput {
            field,
            reason: "must be positive",
        })
    }
}

/// Finite and zero or greater.
pub fn require_non_negative(value: f64, field: &'static str) -> ComponentResult<f64> {
    if check_finite(value, field)? >= 0.0 {
        Ok(value)
    } else {
        Err(ComponentError::InvalidInput {
            field,
            reason: "must not be negative",
        })
    }
}

/// Isentropic or combustion efficiency in (0, 1].
pub fn require_efficiency(value: f64, field: &'static str) -> ComponentResult<f64> {
    let v = check_finite(value, field)?;
    if v > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(ComponentError::InvalidInput {
            field,
            reason: "must be in (0, 1]",
        })
    }
}

/// Fractional loss in [0, 1).
pub fn require_loss_fraction(value: f64, field: &'static str) -> ComponentResult<f64> {
    let v = check_finite(value, field)?;
    if (0.0..1.0).contains(&v) {
        Ok(v)
    } else {
        Err(ComponentError::InvalidInput {
            field,
            reason: "must be in [0, 1)",
        })
    }
}
