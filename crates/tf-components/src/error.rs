//! Error types for component operations.

use tf_core::error::TfError;
use thiserror::Error;

/// Errors raised by a component while computing its exit station.
///
/// `InvalidInput` is a caller/configuration problem detected before any
/// arithmetic. `Infeasible` means the inputs were valid but the solved state
/// breaks a physical invariant at this design point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Cycle infeasible at {component}: {what}")]
    Infeasible {
        component: String,
        what: &'static str,
    },

    #[error("Non-finite value: {what}")]
    NonFinite { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl ComponentError {
    pub fn infeasible(component: &str, what: &'static str) -> Self {
        ComponentError::Infeasible {
            component: component.to_string(),
            what,
        }
    }

    /// True when the inputs were valid but the cycle point cannot exist.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, ComponentError::Infeasible { .. })
    }
}

impl From<TfError> for ComponentError {
    fn from(e: TfError) -> Self {
        match e {
            TfError::NonFinite { what, .. } => ComponentError::NonFinite { what },
            TfError::InvalidArg { what } => ComponentError::InvalidInput {
                field: what,
                reason: "out of range",
            },
            TfError::Invariant { what } => ComponentError::InvalidInput {
                field: what,
                reason: "invariant violated",
            },
        }
    }
}
