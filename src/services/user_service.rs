//! User service layer.
//!
//! Registration, login (token issuance), and account self-management.

use crate::auth::{RequestIdentity, TokenService};
use crate::domain::UserEmail;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UpdateProfileRequest,
    User,
};
use crate::repositories::UserRepository;
use crate::services::resolve_user;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// User service trait for account operations.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user. Fails with `Conflict` when the email (compared
    /// case-insensitively) is already taken.
    async fn register(&self, request: RegisterRequest) -> ApiResult<User>;

    /// Verify credentials and issue a bearer token.
    ///
    /// Any mismatch — unknown email, wrong password, unparseable email —
    /// fails with the same `Unauthenticated` error.
    async fn login(&self, request: LoginRequest) -> ApiResult<LoginResponse>;

    /// Fetch the calling user's own record.
    async fn profile(&self, identity: &RequestIdentity) -> ApiResult<User>;

    /// Change the calling user's display name.
    async fn update_profile(
        &self,
        identity: &RequestIdentity,
        request: UpdateProfileRequest,
    ) -> ApiResult<User>;

    /// Change the calling user's password; the supplied current password must
    /// exactly match the stored one.
    async fn change_password(
        &self,
        identity: &RequestIdentity,
        request: ChangePasswordRequest,
    ) -> ApiResult<()>;
}

/// Default implementation of UserService.
pub struct UserServiceImpl {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl UserServiceImpl {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register(&self, request: RegisterRequest) -> ApiResult<User> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }

        if request.email.trim().is_empty() {
            return Err(ApiError::Validation("Email is required".to_string()));
        }
        let email = UserEmail::new(&request.email)
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        // Uniqueness is enforced at write time by the store; a concurrent
        // duplicate registration surfaces here as Conflict.
        let user = self
            .users
            .insert(User {
                id: crate::domain::UserId::new(0),
                name: name.to_string(),
                email,
                password: request.password,
            })
            .await?;

        info!(user = %user.email, "new user registered");
        Ok(user)
    }

    async fn login(&self, request: LoginRequest) -> ApiResult<LoginResponse> {
        // An email that does not even parse cannot match a stored user, so it
        // gets the same answer as a wrong password.
        let email = UserEmail::new(&request.email).map_err(|_| ApiError::Unauthenticated)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .filter(|user| user.password == request.password)
            .ok_or(ApiError::Unauthenticated)?;

        let token = self
            .tokens
            .issue(&user.email)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        info!(user = %user.email, "login succeeded");
        Ok(LoginResponse { token, user })
    }

    async fn profile(&self, identity: &RequestIdentity) -> ApiResult<User> {
        resolve_user(self.users.as_ref(), identity).await
    }

    async fn update_profile(
        &self,
        identity: &RequestIdentity,
        request: UpdateProfileRequest,
    ) -> ApiResult<User> {
        let mut user = resolve_user(self.users.as_ref(), identity).await?;

        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::Validation("Name cannot be empty".to_string()))?;

        user.name = name.to_string();
        let updated = self.users.update(&user).await?;

        info!(user = %updated.email, "profile updated");
        Ok(updated)
    }

    async fn change_password(
        &self,
        identity: &RequestIdentity,
        request: ChangePasswordRequest,
    ) -> ApiResult<()> {
        let mut user = resolve_user(self.users.as_ref(), identity).await?;

        let (current, new) = match (request.current_password, request.new_password) {
            (Some(current), Some(new)) => (current, new),
            _ => {
                return Err(ApiError::Validation(
                    "Current password and new password are required".to_string(),
                ))
            }
        };

        if user.password != current {
            return Err(ApiError::Validation(
                "Current password is incorrect".to_string(),
            ));
        }

        if new.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::Validation(format!(
                "New password must be at least {} characters long",
                MIN_PASSWORD_LEN
            )));
        }

        user.password = new;
        self.users.update(&user).await?;

        info!(user = %user.email, "password changed");
        Ok(())
    }
}
