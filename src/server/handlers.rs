//! HTTP handlers: a thin layer translating requests into service calls.
//!
//! Handlers extract the `RequestIdentity` bound by the middleware and pass it
//! to the services; no authorization logic lives here.

use crate::auth::{RequestIdentity, TokenService};
use crate::domain::ContactId;
use crate::error::ApiError;
use crate::models::{
    ChangePasswordRequest, Contact, ContactInput, LoginRequest, LoginResponse, RegisterRequest,
    UpdateProfileRequest, User,
};
use crate::services::{ContactService, UserService};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use std::sync::Arc;

/// Shared application state: the services and the token service (the latter
/// is also handed to the identity middleware).
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserService>,
    pub contacts: Arc<dyn ContactService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserService>,
        contacts: Arc<dyn ContactService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            contacts,
            tokens,
        }
    }
}

pub(crate) async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<User>, ApiError> {
    state.users.register(request).await.map(Json)
}

pub(crate) async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    state.users.login(request).await.map(Json)
}

pub(crate) async fn profile(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Result<Json<User>, ApiError> {
    state.users.profile(&identity).await.map(Json)
}

pub(crate) async fn update_profile(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    state.users.update_profile(&identity, request).await.map(Json)
}

pub(crate) async fn change_password(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.users.change_password(&identity, request).await?;
    Ok(Json(
        serde_json::json!({ "message": "Password changed successfully" }),
    ))
}

pub(crate) async fn list_contacts(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    state.contacts.list(&identity).await.map(Json)
}

pub(crate) async fn create_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, ApiError> {
    state.contacts.create(&identity, input).await.map(Json)
}

pub(crate) async fn get_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError> {
    state
        .contacts
        .get(&identity, ContactId::new(id))
        .await
        .map(Json)
}

pub(crate) async fn update_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<i64>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Contact>, ApiError> {
    state
        .contacts
        .update(&identity, ContactId::new(id), input)
        .await
        .map(Json)
}

pub(crate) async fn delete_contact(
    State(state): State<AppState>,
    Extension(identity): Extension<RequestIdentity>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.contacts.delete(&identity, ContactId::new(id)).await?;
    Ok(Json(
        serde_json::json!({ "message": "Contact deleted successfully" }),
    ))
}
