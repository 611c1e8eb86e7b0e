//! Registry error types

use peachy_client::ApiError;
use peachy_core::ValidationError;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Field-level validation failure; the operation never reached the
    /// network and local state is untouched.
    #[error("Validation failed")]
    Validation(Vec<ValidationError>),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Label not found: {0}")]
    LabelNotFound(String),

    #[error("Label with name '{0}' already exists")]
    DuplicateLabelName(String),

    #[error("Label name cannot be empty")]
    EmptyLabelName,

    /// The remote call failed and local state was rolled back to its
    /// pre-operation snapshot. The display is the user-visible notice.
    #[error("{action}")]
    Remote {
        action: String,
        #[source]
        source: ApiError,
    },
}

impl RegistryError {
    pub(crate) fn remote(action: &str, source: ApiError) -> Self {
        Self::Remote {
            action: action.to_string(),
            source,
        }
    }

    /// Field-level messages for a validation failure, if this is one
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            RegistryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
