//! Identity resolution middleware.
//!
//! Runs once per inbound request, before any business handler. It only
//! populates (or leaves empty) the request's identity slot; it never produces
//! the terminal response. A request with a missing or invalid token reaches
//! the business layer unauthenticated and is rejected there with 401 — token
//! validation failures are logged and swallowed, never propagated as errors.

use crate::auth::context::RequestIdentity;
use crate::auth::token::TokenService;
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::debug;

/// Paths that bypass token processing entirely so unauthenticated callers can
/// reach them.
pub const AUTH_EXEMPT_PATHS: [&str; 2] = ["/api/users/register", "/api/users/login"];

fn is_exempt(path: &str) -> bool {
    AUTH_EXEMPT_PATHS.contains(&path)
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// Returns `None` when the header is absent or not in bearer form.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    header_value?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// axum middleware that binds a `RequestIdentity` into request extensions.
pub async fn resolve_identity(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if is_exempt(path) {
        return next.run(request).await;
    }

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let identity = match bearer_token(header_value) {
        Some(token) => match tokens.validate(token) {
            Ok(email) => {
                debug!(subject = %email, "bearer token accepted");
                RequestIdentity::authenticated(email)
            }
            Err(err) => {
                debug!(path, error = %err, "rejected bearer token");
                RequestIdentity::anonymous()
            }
        },
        None => RequestIdentity::anonymous(),
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}
