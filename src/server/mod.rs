//! HTTP surface: router assembly, error-to-status mapping, and serving.
//!
//! The routing framework stops here — services never see axum types, and the
//! error taxonomy is translated to status codes in exactly one place.

mod handlers;

pub use handlers::AppState;

use crate::auth::resolve_identity;
use crate::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{middleware, Json, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Empty body: the caller learns nothing about why.
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "internal fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
            other => {
                let status = match &other {
                    ApiError::Validation(_) => StatusCode::BAD_REQUEST,
                    ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
                    ApiError::NotFound(_) => StatusCode::NOT_FOUND,
                    ApiError::Conflict(_) => StatusCode::CONFLICT,
                    // Handled above; unreachable here.
                    ApiError::Unauthenticated | ApiError::Internal(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (
                    status,
                    Json(serde_json::json!({ "error": other.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

/// Build the application router.
///
/// The identity-resolution middleware wraps every route; the register and
/// login paths are exempted inside the middleware itself so they stay
/// reachable for unauthenticated callers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/users/register", post(handlers::register))
        .route("/api/users/login", post(handlers::login))
        .route("/api/users/profile", get(handlers::profile))
        .route("/api/users/update-profile", put(handlers::update_profile))
        .route("/api/users/change-password", put(handlers::change_password))
        .route("/api/users/contacts", get(handlers::list_contacts))
        .route("/api/contacts", post(handlers::create_contact))
        .route(
            "/api/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            resolve_identity,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run_server(state: AppState, bind_addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
