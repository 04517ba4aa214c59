//! CORS middleware configuration for cross-origin requests.
//!
//! Browser storefronts and admin consoles call the catalog from other
//! origins. Development accepts any origin; production only the origins
//! listed in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use pc_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// # Environment Variables
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (`*` for any)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS to allow any origin");
        return cors.allow_any_origin();
    }

    config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            log::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    async fn preflight(config: CorsConfig, origin: &str) -> u16 {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&config))
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();

        test::call_service(&app, req).await.status().as_u16()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let status = preflight(CorsConfig::development(), "https://anywhere.test").await;
        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn test_restricted_origin_rejected() {
        let config = CorsConfig {
            allowed_origins: vec!["https://shop.example.com".to_string()],
            max_age: 600,
        };
        assert_eq!(preflight(config.clone(), "https://shop.example.com").await, 200);
        assert_eq!(preflight(config, "https://evil.test").await, 400);
    }
}
