//! Unit tests for token service

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenClaimsService, TokenServiceConfig};

const SECRET: &[u8] = b"catalog-test-secret-with-enough-bytes";
const OTHER_SECRET: &[u8] = b"a-completely-different-signing-secret";

fn service() -> TokenClaimsService {
    let config = TokenServiceConfig {
        jwt_secret: STANDARD.encode(SECRET),
        ..TokenServiceConfig::default()
    };
    TokenClaimsService::new(config).unwrap()
}

fn sign(claims: &serde_json::Value, secret: &[u8], alg: Algorithm) -> String {
    encode(&Header::new(alg), claims, &EncodingKey::from_secret(secret)).unwrap()
}

fn future_exp() -> i64 {
    (Utc::now() + Duration::hours(1)).timestamp()
}

fn past_exp() -> i64 {
    (Utc::now() - Duration::hours(1)).timestamp()
}

#[test]
fn test_valid_token_matches_subject() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "role": "ADMIN", "exp": future_exp() }),
        SECRET,
        Algorithm::HS256,
    );

    assert_eq!(service.is_valid(&token, "admin@shop.test"), Ok(true));
    assert_eq!(service.is_valid(&token, "someone@shop.test"), Ok(false));
    assert!(service.accepts(&token, "admin@shop.test"));
    assert!(!service.accepts(&token, "someone@shop.test"));
}

#[test]
fn test_extract_subject_and_role() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "role": "ADMIN", "exp": future_exp() }),
        SECRET,
        Algorithm::HS512,
    );

    assert_eq!(service.extract_subject(&token).unwrap(), "admin@shop.test");
    assert_eq!(service.extract_role(&token).unwrap(), Some("ADMIN".to_string()));
}

#[test]
fn test_missing_role_is_none_not_error() {
    let service = service();
    let token = sign(
        &json!({ "sub": "user@shop.test", "exp": future_exp() }),
        SECRET,
        Algorithm::HS256,
    );

    assert_eq!(service.extract_role(&token).unwrap(), None);
}

#[test]
fn test_missing_subject_is_missing_claim() {
    let service = service();
    let token = sign(&json!({ "exp": future_exp() }), SECRET, Algorithm::HS256);

    let err = service.extract_subject(&token).unwrap_err();
    assert_eq!(
        err,
        TokenError::MissingClaim {
            claim: "sub".to_string()
        }
    );
}

#[test]
fn test_expired_token_is_error_not_false() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "exp": past_exp() }),
        SECRET,
        Algorithm::HS256,
    );

    let result = service.is_valid(&token, "admin@shop.test");
    match result {
        Err(TokenError::Invalid { reason }) => assert!(reason.contains("ExpiredSignature")),
        other => panic!("expected invalid token error, got {:?}", other),
    }
    assert!(!service.accepts(&token, "admin@shop.test"));
}

#[test]
fn test_token_expiring_this_second_is_error() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "exp": Utc::now().timestamp() }),
        SECRET,
        Algorithm::HS256,
    );

    match service.is_valid(&token, "admin@shop.test") {
        Err(TokenError::Invalid { reason }) => assert!(reason.contains("ExpiredSignature")),
        other => panic!("expected invalid token error, got {:?}", other),
    }
    assert!(service.extract_subject(&token).is_err());
}

#[test]
fn test_foreign_signature_fails_every_extraction() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "role": "ADMIN", "exp": future_exp() }),
        OTHER_SECRET,
        Algorithm::HS256,
    );

    assert!(matches!(service.claims(&token), Err(TokenError::Invalid { .. })));
    assert!(matches!(service.extract_subject(&token), Err(TokenError::Invalid { .. })));
    assert!(matches!(service.extract_role(&token), Err(TokenError::Invalid { .. })));
    assert!(matches!(
        service.is_valid(&token, "admin@shop.test"),
        Err(TokenError::Invalid { .. })
    ));
}

#[test]
fn test_malformed_token_is_invalid() {
    let service = service();
    assert!(matches!(
        service.claims("not.a.jwt"),
        Err(TokenError::Invalid { .. })
    ));
    assert!(matches!(service.claims(""), Err(TokenError::Invalid { .. })));
}

#[test]
fn test_token_without_exp_is_rejected() {
    let service = service();
    let token = sign(&json!({ "sub": "admin@shop.test" }), SECRET, Algorithm::HS256);

    assert!(matches!(service.claims(&token), Err(TokenError::Invalid { .. })));
}

#[test]
fn test_extract_claim_reads_custom_claims() {
    let service = service();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "exp": future_exp(), "tenant": "eu-1" }),
        SECRET,
        Algorithm::HS384,
    );

    let tenant = service
        .extract_claim(&token, |claims: &Claims| claims.get("tenant"))
        .unwrap();
    assert_eq!(tenant, Some(json!("eu-1")));
}

#[test]
fn test_algorithm_outside_accepted_list_is_rejected() {
    let config = TokenServiceConfig {
        jwt_secret: STANDARD.encode(SECRET),
        algorithms: vec![Algorithm::HS256],
    };
    let service = TokenClaimsService::new(config).unwrap();
    let token = sign(
        &json!({ "sub": "admin@shop.test", "exp": future_exp() }),
        SECRET,
        Algorithm::HS512,
    );

    assert!(matches!(service.claims(&token), Err(TokenError::Invalid { .. })));
}

#[test]
fn test_invalid_secret_fails_construction() {
    let not_base64 = TokenServiceConfig {
        jwt_secret: "%%% not base64 %%%".to_string(),
        ..TokenServiceConfig::default()
    };
    assert!(matches!(
        TokenClaimsService::new(not_base64),
        Err(TokenError::InvalidKey { .. })
    ));

    let empty = TokenServiceConfig {
        jwt_secret: String::new(),
        ..TokenServiceConfig::default()
    };
    assert!(matches!(
        TokenClaimsService::new(empty),
        Err(TokenError::InvalidKey { .. })
    ));
}

#[test]
fn test_config_from_jwt_config_rejects_non_hmac() {
    let mut jwt = pc_shared::config::JwtConfig::default();
    jwt.algorithms = vec!["HS256".to_string(), "RS256".to_string()];

    let result = TokenServiceConfig::from_jwt_config(&jwt);
    assert_eq!(
        result.unwrap_err(),
        TokenError::UnsupportedAlgorithm {
            algorithm: "RS256".to_string()
        }
    );

    jwt.algorithms = vec!["hs512".to_string()];
    let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();
    assert_eq!(config.algorithms, vec![Algorithm::HS512]);
}
