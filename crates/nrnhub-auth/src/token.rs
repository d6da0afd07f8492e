//! Bearer token checks and provisioning.

use crate::AuthError;

/// Generate a cryptographically secure admin token string.
///
/// Used when provisioning a deployment; the value goes into the
/// `admin_token` runtime variable.
pub fn generate_admin_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Check an `Authorization` header value against the configured token.
///
/// `header` is the raw header value, if the request carried one.
pub fn authorize_bearer(header: Option<&str>, expected: &str) -> Result<(), AuthError> {
    if expected.is_empty() {
        return Err(AuthError::AdminDisabled);
    }
    let header = header.ok_or(AuthError::MissingToken)?;
    let token = parse_bearer(header).ok_or(AuthError::InvalidToken)?;
    if constant_time_eq(token.as_bytes(), expected.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}

/// Extract the credential from a `Bearer <token>` header value.
fn parse_bearer(header: &str) -> Option<&str> {
    let rest = header.trim().strip_prefix("Bearer ")?;
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

/// Compare two byte strings without short-circuiting on the first
/// mismatch.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation() {
        let token = generate_admin_token();
        assert_eq!(token.len(), 32);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_unique_tokens() {
        assert_ne!(generate_admin_token(), generate_admin_token());
    }

    #[test]
    fn test_valid_bearer_accepted() {
        assert_eq!(authorize_bearer(Some("Bearer secret-1"), "secret-1"), Ok(()));
    }

    #[test]
    fn test_missing_header_rejected() {
        assert_eq!(
            authorize_bearer(None, "secret-1"),
            Err(AuthError::MissingToken)
        );
    }

    #[test]
    fn test_wrong_token_rejected() {
        assert_eq!(
            authorize_bearer(Some("Bearer nope"), "secret-1"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_non_bearer_scheme_rejected() {
        assert_eq!(
            authorize_bearer(Some("Basic abc"), "secret-1"),
            Err(AuthError::InvalidToken)
        );
        assert_eq!(
            authorize_bearer(Some("Bearer "), "secret-1"),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_unconfigured_admin_disabled() {
        let err = authorize_bearer(Some("Bearer anything"), "").unwrap_err();
        assert_eq!(err, AuthError::AdminDisabled);
        assert!(!err.is_auth_failure());
    }
}
