//! JWT verification configuration

use serde::{Deserialize, Serialize};

/// Base64 of "development-secret-please-change-in-production"
const DEFAULT_SECRET: &str = "ZGV2ZWxvcG1lbnQtc2VjcmV0LXBsZWFzZS1jaGFuZ2UtaW4tcHJvZHVjdGlvbg==";

/// JWT verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded HMAC secret shared with the token issuer
    pub secret: String,

    /// Accepted signing algorithms (HMAC family only)
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            algorithms: default_algorithms(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a base64 secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| String::from(DEFAULT_SECRET));
        let algorithms = std::env::var("JWT_ALGORITHMS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|alg| alg.trim().to_uppercase())
                    .filter(|alg| !alg.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|algs| !algs.is_empty())
            .unwrap_or_else(default_algorithms);

        Self { secret, algorithms }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_algorithms() -> Vec<String> {
    vec![
        String::from("HS256"),
        String::from("HS384"),
        String::from("HS512"),
    ]
}
