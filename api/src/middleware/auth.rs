//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts JWT tokens from the Authorization header,
//! verifies them with the core `TokenClaimsService`, and injects the caller's
//! identity into the request. Role checks happen in the handlers through
//! [`AuthContext::require_role`].

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use pc_core::services::token::TokenClaimsService;
use pc_shared::errors::{error_codes, ErrorResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// Role allowed to modify the catalog
pub const ADMIN_ROLE: &str = "ADMIN";

/// Caller identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject claim (user email)
    pub subject: String,
    /// Role claim if the issuer set one
    pub role: Option<String>,
}

impl AuthContext {
    /// Fails with 403 unless the caller holds exactly `role`
    pub fn require_role(&self, role: &str) -> Result<(), Error> {
        if self.role.as_deref() == Some(role) {
            Ok(())
        } else {
            log::warn!("Subject {} lacks role {}", self.subject, role);
            Err(forbidden(format!("Role {} required", role)))
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenClaimsService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(token_service: Arc<TokenClaimsService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenClaimsService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let auth_context = match extract_bearer_token(&req) {
                Some(token) => authenticate(&token_service, &token),
                None => Err("Missing or invalid Authorization header"),
            };

            match auth_context {
                Ok(auth_context) => {
                    req.extensions_mut().insert(auth_context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                Err(message) => Ok(req
                    .into_response(unauthorized_response(message))
                    .map_into_right_body()),
            }
        })
    }
}

/// Verifies the token and builds the caller identity
fn authenticate(
    token_service: &TokenClaimsService,
    token: &str,
) -> Result<AuthContext, &'static str> {
    let claims = token_service.claims(token).map_err(|e| {
        log::debug!("Token verification failed: {}", e);
        "Invalid or expired token"
    })?;

    let subject = claims
        .subject()
        .map(str::to_owned)
        .ok_or("Token has no subject")?;

    if !token_service.accepts(token, &subject) {
        return Err("Invalid or expired token");
    }

    Ok(AuthContext {
        subject,
        role: claims.role,
    })
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

fn unauthorized_response(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(error_codes::UNAUTHORIZED, message))
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response(message.to_string(), unauthorized_response(message)).into()
}

fn forbidden(message: String) -> Error {
    let body = ErrorResponse::new(error_codes::FORBIDDEN, message.clone());
    InternalError::from_response(message, HttpResponse::Forbidden().json(body)).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}
