//! Mapping of domain and form errors to HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use pc_core::errors::DomainError;
use pc_shared::errors::error_codes;

use crate::dto::{ErrorResponse, ErrorResponseExt, FormError};

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
        DomainError::Storage { .. } | DomainError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Server-side failures are logged with their cause and reported with a
/// generic message so file-system and SQL details stay internal.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let body = if status.is_server_error() {
        log::error!("Domain Error: {:?}", error);
        ErrorResponse::new(error.error_code(), "An internal error occurred")
    } else {
        log::warn!("Request rejected: {}", error);
        ErrorResponse::from(error)
    };

    body.to_response(status)
}

/// Handle rejected multipart forms
pub fn handle_form_error(error: FormError) -> HttpResponse {
    log::warn!("Invalid product form: {}", error);

    match error {
        FormError::TooLarge { .. } => ErrorResponse::new(error_codes::BAD_REQUEST, error.to_string())
            .to_response(StatusCode::PAYLOAD_TOO_LARGE),
        FormError::Invalid(errors) => {
            let mut body = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid product form");
            for (field, _) in errors.field_errors() {
                body = body.add_detail(field.to_string(), "invalid");
            }
            body.to_response(StatusCode::BAD_REQUEST)
        }
        FormError::InvalidNumber { field, .. } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
                .add_detail(field, "invalid")
                .to_response(StatusCode::BAD_REQUEST)
        }
        other => ErrorResponse::new(error_codes::BAD_REQUEST, other.to_string())
            .to_response(StatusCode::BAD_REQUEST),
    }
}
