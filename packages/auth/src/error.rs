//! Authentication error types

use thiserror::Error;

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Auth bypass only available in development mode")]
    DevModeDisabled,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}
