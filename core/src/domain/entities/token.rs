//! Claim set carried by a verified JWT.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Registered subject claim (user identifier / email)
pub const SUBJECT_CLAIM: &str = "sub";

/// Private role claim
pub const ROLE_CLAIM: &str = "role";

/// Claims structure for a JWT payload
///
/// Well-known claims are typed fields; anything else the issuer put in the
/// token is kept in `extra` and readable through [`Claims::get`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Role granted by the issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,

    /// Issued at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Remaining claims by name
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Claims {
    /// Creates claims for a subject expiring at `exp`
    pub fn new(sub: impl Into<String>, role: Option<String>, exp: i64) -> Self {
        Self {
            sub: Some(sub.into()),
            role,
            exp,
            iat: Some(Utc::now().timestamp()),
            extra: HashMap::new(),
        }
    }

    /// Subject claim, if present
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    /// Role claim, if present
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Reads any claim by name
    pub fn get(&self, name: &str) -> Option<Value> {
        match name {
            SUBJECT_CLAIM => self.sub.clone().map(Value::String),
            ROLE_CLAIM => self.role.clone().map(Value::String),
            "exp" => Some(Value::from(self.exp)),
            "iat" => self.iat.map(Value::from),
            _ => self.extra.get(name).cloned(),
        }
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// A token is only fresh while `exp` is strictly in the future
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
