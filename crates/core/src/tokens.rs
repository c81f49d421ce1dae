//! Single-use token generation and lifecycle checks.
//!
//! Email-verification and password-reset tokens share the same contract: the
//! plaintext is handed to the caller exactly once, only its SHA-256 digest is
//! stored, and a token is accepted only while `now < expires`.

use chrono::Duration;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Length of a generated token (alphanumeric characters).
pub const TOKEN_LENGTH: usize = 48;

/// Default lifetime of an email-verification token.
pub const DEFAULT_EMAIL_VERIFICATION_TTL_HOURS: i64 = 24;

/// Default lifetime of a password-reset token.
pub const DEFAULT_PASSWORD_RESET_TTL_MINUTES: i64 = 60;

/// A freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The plaintext token (returned to the caller once, never stored).
    pub plaintext: String,
    /// SHA-256 hex digest of the plaintext (stored in the database).
    pub hash: String,
    pub expires_at: Timestamp,
}

/// Generate a random alphanumeric token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Compute the SHA-256 hex digest stored for a token.
pub fn hash_token(token: &str) -> String {
    let hash = Sha256::digest(token.as_bytes());
    format!("{hash:x}")
}

/// Compute the expiry instant for a token issued at `now`.
pub fn expiry_from(now: Timestamp, ttl: Duration) -> Timestamp {
    now + ttl
}

/// Generate a token valid for `ttl` starting at `now`.
pub fn issue_token(now: Timestamp, ttl: Duration) -> IssuedToken {
    let plaintext = generate_token();
    let hash = hash_token(&plaintext);
    IssuedToken {
        plaintext,
        hash,
        expires_at: expiry_from(now, ttl),
    }
}

/// Check a supplied token against the stored digest and expiry.
///
/// - No stored token, or a digest mismatch: [`CoreError::TokenInvalid`].
/// - `now` at or past the expiry: [`CoreError::TokenExpired`].
///
/// A stored token with no expiry is treated as invalid.
pub fn check_token(
    stored_hash: Option<&str>,
    expires: Option<Timestamp>,
    supplied: &str,
    now: Timestamp,
) -> Result<(), CoreError> {
    let Some(stored_hash) = stored_hash else {
        return Err(CoreError::TokenInvalid);
    };
    if supplied.is_empty() || hash_token(supplied) != stored_hash {
        return Err(CoreError::TokenInvalid);
    }
    match expires {
        Some(expires) if now < expires => Ok(()),
        Some(_) => Err(CoreError::TokenExpired),
        None => Err(CoreError::TokenInvalid),
    }
}
