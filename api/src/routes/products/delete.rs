use actix_web::{web, Error, HttpResponse};

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::{AuthContext, ADMIN_ROLE};

use pc_core::domain::entities::ProductId;
use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::ImageWriter;

/// Handler for DELETE /api/v1/products/{id}
///
/// ## Success (204 No Content)
///
/// ## Errors
/// - 404 Not Found: No product with this id; nothing is deleted
pub async fn delete_product<P, C, W>(
    state: web::Data<AppState<P, C, W>>,
    auth: AuthContext,
    path: web::Path<ProductId>,
) -> Result<HttpResponse, Error>
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    auth.require_role(ADMIN_ROLE)?;
    let id = path.into_inner();

    let response = match state.product_service.delete_product(id).await {
        Ok(()) => {
            log::info!("Product {} deleted by {}", id, auth.subject);
            HttpResponse::NoContent().finish()
        }
        Err(error) => handle_domain_error(&error),
    };
    Ok(response)
}
