//! Shared fixtures for the API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use tempfile::TempDir;

use pc_api::app::AppState;
use pc_core::repositories::{InMemoryCategoryRepository, InMemoryProductRepository};
use pc_core::services::product::{ImageStorageConfig, ProductService};
use pc_core::services::token::{TokenClaimsService, TokenServiceConfig};
use pc_infra::LocalImageWriter;

pub const SECRET: &[u8] = b"catalog-api-test-secret-0123456789";
pub const BOUNDARY: &str = "----catalog-test-boundary";

pub type TestState =
    AppState<InMemoryProductRepository, InMemoryCategoryRepository, LocalImageWriter>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub token_service: Arc<TokenClaimsService>,
    pub image_dir: TempDir,
}

pub fn context() -> TestContext {
    context_with_limit(1024 * 1024)
}

pub fn context_with_limit(upload_limit: usize) -> TestContext {
    let image_dir = TempDir::new().unwrap();
    let token_service = Arc::new(
        TokenClaimsService::new(TokenServiceConfig {
            jwt_secret: STANDARD.encode(SECRET),
            ..TokenServiceConfig::default()
        })
        .unwrap(),
    );
    let product_service = Arc::new(ProductService::new(
        Arc::new(InMemoryProductRepository::new()),
        Arc::new(InMemoryCategoryRepository::with_names(["Books", "Lighting"])),
        Arc::new(LocalImageWriter::new()),
        ImageStorageConfig::new(image_dir.path(), "/images"),
    ));

    TestContext {
        state: web::Data::new(AppState::new(
            product_service,
            token_service.clone(),
            upload_limit,
        )),
        token_service,
        image_dir,
    }
}

pub fn token(subject: &str, role: Option<&str>, ttl_seconds: i64, secret: &[u8]) -> String {
    let exp = (Utc::now() + Duration::seconds(ttl_seconds)).timestamp();
    let mut claims = json!({ "sub": subject, "exp": exp });
    if let Some(role) = role {
        claims["role"] = json!(role);
    }
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

pub fn admin_token() -> String {
    token("admin@shop.test", Some("ADMIN"), 3600, SECRET)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn multipart_content_type() -> (&'static str, String) {
    ("Content-Type", format!("multipart/form-data; boundary={}", BOUNDARY))
}

/// Builds a multipart body from text fields and an optional image part
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn lamp_fields(category: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", "Desk lamp".to_string()),
        ("description", "Adjustable LED desk lamp".to_string()),
        ("price", "24.90".to_string()),
        ("stock", "12".to_string()),
        ("name_category", category.to_string()),
    ]
}

pub fn as_refs<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}
