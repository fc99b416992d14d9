//! Shared error type for gas-model and numeric checks.

use thiserror::Error;

pub type TfResult<T> = Result<T, TfError>;

/// Low-level failures raised below the component layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TfError {
    /// NaN or infinity where a physical quantity was expected
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Out of range: {what}")]
    InvalidArg { what: &'static str },

    /// A relation was evaluated outside its physical domain
    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
