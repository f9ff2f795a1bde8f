//! Application service layer.
//!
//! Services contain the business logic and every authorization decision.
//! The middleware only resolves identity; whether that identity may perform
//! an operation is decided here, against stored ownership.

mod contact_service;
mod user_service;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use user_service::{UserService, UserServiceImpl, MIN_PASSWORD_LEN};

use crate::auth::RequestIdentity;
use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::repositories::UserRepository;

/// Resolve a request identity to its stored user record.
///
/// Both failure modes — no identity bound, or an identity with no matching
/// user — yield the same `Unauthenticated` error; callers cannot distinguish
/// a forged subject from a missing credential.
pub(crate) async fn resolve_user(
    users: &dyn UserRepository,
    identity: &RequestIdentity,
) -> ApiResult<User> {
    let email = identity.email().ok_or(ApiError::Unauthenticated)?;
    users
        .find_by_email(email)
        .await?
        .ok_or(ApiError::Unauthenticated)
}
