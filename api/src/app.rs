//! Application state and factory
//!
//! This module holds the shared services and provides the factory for
//! creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::products::{
    create_product, delete_product, get_product, list_products, update_product,
};

use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::{ImageWriter, ProductService};
use pc_core::services::token::TokenClaimsService;
use pc_shared::config::CorsConfig;
use pc_shared::errors::{error_codes, ErrorResponse};
use pc_shared::types::{HealthResponse, HealthStatus};

/// Application state that holds shared services
pub struct AppState<P, C, W>
where
    P: ProductRepository,
    C: CategoryRepository,
    W: ImageWriter,
{
    pub product_service: Arc<ProductService<P, C, W>>,
    pub token_service: Arc<TokenClaimsService>,
    /// Largest accepted multipart body in bytes
    pub upload_limit: usize,
}

impl<P, C, W> AppState<P, C, W>
where
    P: ProductRepository,
    C: CategoryRepository,
    W: ImageWriter,
{
    pub fn new(
        product_service: Arc<ProductService<P, C, W>>,
        token_service: Arc<TokenClaimsService>,
        upload_limit: usize,
    ) -> Self {
        Self {
            product_service,
            token_service,
            upload_limit,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P, C, W>(
    app_state: web::Data<AppState<P, C, W>>,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    let token_service = Arc::clone(&app_state.token_service);
    let auth = move || JwtAuth::new(Arc::clone(&token_service));

    App::new()
        // Add application state
        .app_data(app_state)
        // Add middleware (CORS first, then logging)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/products")
                    .route("", web::get().to(list_products::<P, C, W>))
                    .route("", web::post().to(create_product::<P, C, W>).wrap(auth()))
                    .route("/{id}", web::get().to(get_product::<P, C, W>))
                    .route("/{id}", web::put().to(update_product::<P, C, W>).wrap(auth()))
                    .route("/{id}", web::delete().to(delete_product::<P, C, W>).wrap(auth())),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::new(
        HealthStatus::Healthy,
        "product-catalog-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
