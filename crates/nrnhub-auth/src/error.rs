//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header was sent.
    #[error("missing bearer token")]
    MissingToken,

    /// The header was not a bearer credential or the token did not match.
    #[error("token invalid")]
    InvalidToken,

    /// No admin token is configured; admin routes are disabled.
    #[error("admin access not configured")]
    AdminDisabled,
}

impl AuthError {
    /// Check if this is an authentication failure (as opposed to a
    /// deployment problem).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::MissingToken | AuthError::InvalidToken)
    }
}
