use actix_multipart::Multipart;
use actix_web::{web, Error, HttpResponse};

use crate::app::AppState;
use crate::dto::ProductForm;
use crate::handlers::error::{handle_domain_error, handle_form_error};
use crate::middleware::auth::{AuthContext, ADMIN_ROLE};

use pc_core::domain::entities::ProductId;
use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::ImageWriter;
use pc_shared::types::ApiResponse;

/// Handler for PUT /api/v1/products/{id}
///
/// Fully replaces a product. The stored image is kept unless the form
/// carries a new one.
///
/// ## Errors
/// - 400 Bad Request: Invalid form fields
/// - 401 Unauthorized / 403 Forbidden: As for create
/// - 404 Not Found: Unknown product or category
pub async fn update_product<P, C, W>(
    state: web::Data<AppState<P, C, W>>,
    auth: AuthContext,
    path: web::Path<ProductId>,
    payload: Multipart,
) -> Result<HttpResponse, Error>
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    auth.require_role(ADMIN_ROLE)?;
    let id = path.into_inner();

    let submission = match ProductForm::from_multipart(payload, state.upload_limit)
        .await
        .and_then(ProductForm::into_submission)
    {
        Ok(submission) => submission,
        Err(error) => return Ok(handle_form_error(error)),
    };

    let response = match state.product_service.update_product(id, submission).await {
        Ok(product) => {
            log::info!("Product {} updated by {}", id, auth.subject);
            HttpResponse::Ok().json(ApiResponse::success(product))
        }
        Err(error) => handle_domain_error(&error),
    };
    Ok(response)
}
