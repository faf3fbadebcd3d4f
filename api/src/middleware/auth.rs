//! Bearer token middleware for protecting API endpoints.
//!
//! The middleware reads the `Authorization` header, hands the token to the
//! registered [`IdentityResolver`] and injects the resolved user into the
//! request extensions. Handlers behind it take an [`AuthContext`] argument.
//!
//! A header that is absent or not of the form `Bearer <token>` counts as a
//! missing token. A rejection is answered here with the classified error
//! response and the wrapped service is never called.

use actix_web::{
    body::EitherBody,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use fm_core::{
    domain::entities::user::User,
    errors::{AuthError, DomainError},
    services::auth::IdentityResolver,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use crate::config::ErrorConfig;
use crate::handlers::error::ApiError;

/// Authenticated user injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The stored user the token resolved to
    pub user: User,
}

/// Authentication middleware factory
#[derive(Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
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
        }))
    }
}

/// Authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
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

        Box::pin(async move {
            let error_config = req
                .app_data::<web::Data<ErrorConfig>>()
                .map(|config| *config.get_ref())
                .unwrap_or_default();

            let resolver = req
                .app_data::<web::Data<Arc<dyn IdentityResolver>>>()
                .map(|resolver| Arc::clone(resolver.get_ref()));
            let resolver = match resolver {
                Some(resolver) => resolver,
                None => {
                    log::error!("No identity resolver registered");
                    let error = DomainError::internal("identity resolver not configured");
                    return Ok(reject(req, error, error_config));
                }
            };

            let token = extract_bearer_token(&req);
            let user = match resolver.resolve(token.as_deref()).await {
                Ok(user) => user,
                Err(error) => return Ok(reject(req, error, error_config)),
            };

            req.extensions_mut().insert(AuthContext { user });

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn reject<B>(
    req: ServiceRequest,
    error: DomainError,
    config: ErrorConfig,
) -> ServiceResponse<EitherBody<B>> {
    let response = ApiError::new(error, config).error_response();
    req.into_response(response).map_into_right_body()
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub(crate) fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for handlers behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| {
                let config = req
                    .app_data::<web::Data<ErrorConfig>>()
                    .map(|config| *config.get_ref())
                    .unwrap_or_default();
                ApiError::new(AuthError::MissingToken.into(), config).into()
            });

        ready(result)
    }
}
