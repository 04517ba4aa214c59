use actix_multipart::Multipart;
use actix_web::{web, Error, HttpResponse};

use crate::app::AppState;
use crate::dto::ProductForm;
use crate::handlers::error::{handle_domain_error, handle_form_error};
use crate::middleware::auth::{AuthContext, ADMIN_ROLE};

use pc_core::repositories::{CategoryRepository, ProductRepository};
use pc_core::services::product::ImageWriter;
use pc_shared::types::ApiResponse;

/// Handler for POST /api/v1/products
///
/// Creates a product from a multipart form. Requires a Bearer token with
/// the `ADMIN` role.
///
/// # Form fields
///
/// `name`, `description`, `price`, `stock`, `name_category` and an optional
/// `image` file.
///
/// ## Success (201 Created)
/// ```json
/// { "success": true, "data": { "id": 1, "name": "Desk lamp", "image": "/images/..." }, "timestamp": "..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid form fields
/// - 401 Unauthorized: Missing or invalid access token
/// - 403 Forbidden: Caller is not an administrator
/// - 404 Not Found: Unknown category
/// - 500 Internal Server Error: Image or database failure
pub async fn create_product<P, C, W>(
    state: web::Data<AppState<P, C, W>>,
    auth: AuthContext,
    payload: Multipart,
) -> Result<HttpResponse, Error>
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
    W: ImageWriter + 'static,
{
    auth.require_role(ADMIN_ROLE)?;

    let submission = match ProductForm::from_multipart(payload, state.upload_limit)
        .await
        .and_then(ProductForm::into_submission)
    {
        Ok(submission) => submission,
        Err(error) => return Ok(handle_form_error(error)),
    };

    let response = match state.product_service.create_product(submission).await {
        Ok(product) => {
            log::info!("Product {} created by {}", product.id, auth.subject);
            HttpResponse::Created().json(ApiResponse::success(product))
        }
        Err(error) => handle_domain_error(&error),
    };
    Ok(response)
}
