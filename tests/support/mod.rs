//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use contact_manager_server::auth::RequestIdentity;
use contact_manager_server::models::{RegisterRequest, User};
use contact_manager_server::repositories::{
    ContactRepository, MemoryContactRepository, MemoryUserRepository, UserRepository,
};
use contact_manager_server::services::{
    ContactService, ContactServiceImpl, UserService, UserServiceImpl,
};
use contact_manager_server::{AppState, TokenService};
use std::sync::Arc;

/// Signing secret used by every integration test (32 bytes).
pub const TEST_SECRET: &[u8] = b"integration-test-secret-abcdefgh";

/// A fully wired application: services sharing one in-memory store.
pub struct TestEnv {
    pub users: Arc<dyn UserService>,
    pub contacts: Arc<dyn ContactService>,
    pub tokens: Arc<TokenService>,
}

pub fn setup() -> TestEnv {
    let tokens = Arc::new(TokenService::new(TEST_SECRET, 24));
    let user_repo = Arc::new(MemoryUserRepository::new()) as Arc<dyn UserRepository>;
    let contact_repo = Arc::new(MemoryContactRepository::new()) as Arc<dyn ContactRepository>;

    TestEnv {
        users: Arc::new(UserServiceImpl::new(user_repo.clone(), tokens.clone())),
        contacts: Arc::new(ContactServiceImpl::new(contact_repo, user_repo)),
        tokens,
    }
}

impl TestEnv {
    pub fn app_state(&self) -> AppState {
        AppState::new(
            self.users.clone(),
            self.contacts.clone(),
            self.tokens.clone(),
        )
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> User {
        self.users
            .register(RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .expect("test user registration should succeed")
    }
}

pub fn identity_for(user: &User) -> RequestIdentity {
    RequestIdentity::authenticated(user.email.clone())
}
