//! Configuration for the token service

use jsonwebtoken::Algorithm;
use pc_shared::config::JwtConfig;

use crate::errors::TokenError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Base64-encoded HMAC secret
    pub jwt_secret: String,
    /// Signing algorithms accepted in the token header
    pub algorithms: Vec<Algorithm>,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        let jwt = JwtConfig::default();
        Self {
            jwt_secret: jwt.secret,
            algorithms: vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512],
        }
    }
}

impl TokenServiceConfig {
    /// Builds the service configuration from the shared JWT settings
    ///
    /// Only the HMAC family is accepted; anything else is rejected up front
    /// rather than failing on every request.
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, TokenError> {
        let algorithms = config
            .algorithms
            .iter()
            .map(|name| parse_hmac_algorithm(name))
            .collect::<Result<Vec<_>, _>>()?;

        if algorithms.is_empty() {
            return Err(TokenError::UnsupportedAlgorithm {
                algorithm: String::from("<none>"),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithms,
        })
    }
}

fn parse_hmac_algorithm(name: &str) -> Result<Algorithm, TokenError> {
    match name.trim().to_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(TokenError::UnsupportedAlgorithm {
            algorithm: other.to_string(),
        }),
    }
}
