//! Error types for cycle evaluation.

use tf_components::ComponentError;
use thiserror::Error;

/// Errors that can occur while evaluating one flight condition.
///
/// Every error aborts the forward pass for that point. The two classes that
/// matter to a caller are invalid input (see [`CycleError::is_invalid_input`])
/// and a valid input that has no physical solution
/// (see [`CycleError::is_infeasible`]).
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Invalid input: {field} ({reason})")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown mode '{0}': expected 'dry' or 'wet'")]
    UnknownMode(String),

    #[error("Unknown exhaust arrangement '{0}': expected 'mixed' or 'separate'")]
    UnknownArrangement(String),

    #[error("Component '{stage}' failed: {source}")]
    Component {
        stage: String,
        #[source]
        source: ComponentError,
    },

    #[error("Cycle infeasible: {what}")]
    Infeasible { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CycleResult<T> = Result<T, CycleError>;

impl CycleError {
    pub(crate) fn at(stage: &str) -> impl FnOnce(ComponentError) -> CycleError + '_ {
        move |source| CycleError::Component {
            stage: stage.to_string(),
            source,
        }
    }

    /// Valid inputs, but no physical solution at this design point.
    pub fn is_infeasible(&self) -> bool {
        match self {
            CycleError::Infeasible { .. } => true,
            CycleError::Component { source, .. } => source.is_infeasible(),
            _ => false,
        }
    }

    /// Rejected before any cycle arithmetic ran.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            CycleError::InvalidInput { .. }
            | CycleError::UnknownMode(_)
            | CycleError::UnknownArrangement(_) => true,
            CycleError::Component { source, .. } => {
                matches!(
                    source,
                    ComponentError::InvalidInput { .. } | ComponentError::NonFinite { .. }
                )
            }
            _ => false,
        }
    }
}

impl From<ComponentError> for CycleError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidInput { field, reason } => CycleError::InvalidInput {
                field,
                reason: reason.to_string(),
            },
            ComponentError::Infeasible { what, .. } => CycleError::Infeasible { what },
            ComponentError::NonFinite { what } => CycleError::InvalidInput {
                field: what,
                reason: "not finite".to_string(),
            },
        }
    }
}
