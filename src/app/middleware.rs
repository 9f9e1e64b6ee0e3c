//! Application middleware.
//!
//! The portal does not validate tokens itself; sessions belong to the
//! external identity provider. The `session` middleware only requires that a
//! bearer token is present and stashes it in the request extensions, where
//! handlers pick it up via the `AccessToken` extractor. Whether the token
//! still resolves to a user is decided by the provider on each operation.

use crate::app::error::AppError;
use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, header, request::Parts},
    middleware::Next,
    response::Response,
};

/// The caller's raw provider access token, as taken from the
/// `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccessToken>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required.".to_string()))
    }
}

pub async fn session(req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Missing or invalid authorization header".to_string()))?
        .to_string();

    let (mut parts, body) = req.into_parts();
    parts.extensions.insert(AccessToken(token));
    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
