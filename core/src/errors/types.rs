//! Token verification errors
//!
//! Malformed tokens, forged signatures and expired tokens are deliberately
//! collapsed into [`TokenError::Invalid`]; callers cannot tell them apart.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Signature, structure or expiry check failed
    #[error("Token Error: {reason}")]
    Invalid { reason: String },

    /// Token verified but a required claim is absent
    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    /// Configured signing secret is unusable
    #[error("Invalid signing key: {reason}")]
    InvalidKey { reason: String },

    /// Configured algorithm is outside the HMAC family
    #[error("Unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },
}

impl TokenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        TokenError::Invalid {
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_claim(claim: &str) -> Self {
        TokenError::MissingClaim {
            claim: claim.to_string(),
        }
    }
}
