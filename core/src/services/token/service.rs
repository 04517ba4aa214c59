//! Main token service implementation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::domain::entities::token::{Claims, SUBJECT_CLAIM};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service verifying HMAC-signed JWTs and exposing their claims
///
/// Malformed, forged and expired tokens all surface as
/// [`TokenError::Invalid`]. The secret is decoded once at construction.
pub struct TokenClaimsService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenClaimsService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration with a base64 secret
    ///
    /// # Returns
    ///
    /// A new `TokenClaimsService` or `TokenError::InvalidKey` when the secret
    /// is not base64 or decodes to nothing
    pub fn new(config: TokenServiceConfig) -> Result<Self, TokenError> {
        let key_bytes = STANDARD
            .decode(config.jwt_secret.trim())
            .map_err(|e| TokenError::InvalidKey {
                reason: e.to_string(),
            })?;
        if key_bytes.is_empty() {
            return Err(TokenError::InvalidKey {
                reason: String::from("secret decodes to zero bytes"),
            });
        }

        let first = config
            .algorithms
            .first()
            .copied()
            .ok_or_else(|| TokenError::UnsupportedAlgorithm {
                algorithm: String::from("<none>"),
            })?;

        let mut validation = Validation::new(first);
        validation.algorithms = config.algorithms;
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(&key_bytes),
            validation,
        })
    }

    /// Verifies the token and returns its full claim set
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::Invalid)` - Token is invalid, expired, or malformed
    pub fn claims(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::invalid(e.to_string()))?;

        // decode() still lets through a token whose exp is the current second
        if claims.is_expired() {
            return Err(TokenError::invalid("ExpiredSignature"));
        }
        Ok(claims)
    }

    /// Verifies the token and applies `projection` to its claims
    pub fn extract_claim<T, F>(&self, token: &str, projection: F) -> Result<T, TokenError>
    where
        F: FnOnce(&Claims) -> T,
    {
        let claims = self.claims(token)?;
        Ok(projection(&claims))
    }

    /// Verifies the token and returns its subject
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        self.extract_claim(token, |claims| claims.sub.clone())?
            .ok_or_else(|| TokenError::missing_claim(SUBJECT_CLAIM))
    }

    /// Verifies the token and returns its role; `Ok(None)` when the claim is absent
    pub fn extract_role(&self, token: &str) -> Result<Option<String>, TokenError> {
        self.extract_claim(token, |claims| claims.role.clone())
    }

    /// Checks that the token belongs to `expected_subject` and is still fresh
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Signature verifies, subject matches, not expired
    /// * `Ok(false)` - Token verifies but belongs to someone else
    /// * `Err(TokenError)` - Verification failed, including expiry
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> Result<bool, TokenError> {
        let claims = self.claims(token)?;
        let subject_matches = claims.subject() == Some(expected_subject);
        Ok(subject_matches && !claims.is_expired())
    }

    /// Same check as [`Self::is_valid`], with every failure reported as `false`
    pub fn accepts(&self, token: &str, expected_subject: &str) -> bool {
        match self.is_valid(token, expected_subject) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                false
            }
        }
    }
}
