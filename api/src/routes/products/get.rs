use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

use pc_core::domain::entities::ProductId;
use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::ImageWriter;
use pc_shared::types::ApiResponse;

/// Handler for GET /api/v1/products/{id}
///
/// ## Errors
/// - 404 Not Found: No product with this id
pub async fn get_product<P, C, W>(
    state: web::Data<AppState<P, C, W>>,
    path: web::Path<ProductId>,
) -> HttpResponse
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    match state.product_service.get_product(path.into_inner()).await {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::success(product)),
        Err(error) => handle_domain_error(&error),
    }
}
