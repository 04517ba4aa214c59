use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::ImageWriter;
use pc_shared::types::ApiResponse;

/// Handler for GET /api/v1/products
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "data": [ { "id": 1, "name": "Desk lamp", ... } ], "timestamp": "..." }
/// ```
pub async fn list_products<P, C, W>(state: web::Data<AppState<P, C, W>>) -> HttpResponse
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    match state.product_service.list_products().await {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::success(products)),
        Err(error) => handle_domain_error(&error),
    }
}
