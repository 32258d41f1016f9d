//! Auth Middleware
//!
//! The authorization gate for protected routes. Per-request state machine:
//! no header → 401; header without the bearer scheme → 401; verification
//! failure → 401; success → the verified identity is inserted into request
//! extensions and the inner handler runs.
//!
//! Handlers read the caller's identity from [`CurrentUser`] only; request
//! bodies never carry an account id.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::{Request, header, request::Parts};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub tokens: Arc<TokenService>,
}

/// Verified identity propagated to downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Middleware that requires a valid bearer token
pub async fn require_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let header_value = match req.headers().get(header::AUTHORIZATION) {
        Some(v) => v,
        None => return Err(AuthError::MissingAuthHeader.into_response()),
    };

    let token = header_value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AuthError::TokenInvalid.into_response())?;

    let identity = state
        .tokens
        .verify(token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: identity.user_id,
        email: identity.email,
    });

    Ok(next.run(req).await)
}

/// Extractor for the verified identity
///
/// Only works on routes behind [`require_auth`]; anywhere else the
/// extension is absent, which is a wiring bug, not a client error.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                AuthError::Internal("AuthenticatedUser missing from request extensions".into())
            })
    }
}
