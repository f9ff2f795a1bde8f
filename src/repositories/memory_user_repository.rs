use crate::domain::{UserEmail, UserId};
use crate::error::{StoreError, StoreResult};
use crate::models::User;
use crate::repositories::traits::UserRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct UserTable {
    users: HashMap<i64, User>,
    // Secondary index: normalized email -> user id
    by_email: HashMap<String, i64>,
    next_id: i64,
}

/// In-memory user repository.
///
/// All records live under a single lock, so each operation is atomic. Email
/// uniqueness is enforced through the secondary index at insert time.
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: Mutex<UserTable>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, UserTable>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let table = self.lock()?;
        Ok(table.users.get(&id.value()).cloned())
    }

    async fn find_by_email(&self, email: &UserEmail) -> StoreResult<Option<User>> {
        let table = self.lock()?;
        Ok(table
            .by_email
            .get(email.as_str())
            .and_then(|id| table.users.get(id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> StoreResult<User> {
        let mut table = self.lock()?;

        if table.by_email.contains_key(user.email.as_str()) {
            return Err(StoreError::Conflict(format!(
                "user email {}",
                user.email
            )));
        }

        table.next_id += 1;
        user.id = UserId::new(table.next_id);

        table
            .by_email
            .insert(user.email.as_str().to_string(), user.id.value());
        table.users.insert(user.id.value(), user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> StoreResult<User> {
        let mut table = self.lock()?;

        let existing = table
            .users
            .get(&user.id.value())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user.id)))?;

        if existing.email != user.email {
            if let Some(other) = table.by_email.get(user.email.as_str()) {
                if *other != user.id.value() {
                    return Err(StoreError::Conflict(format!("user email {}", user.email)));
                }
            }
            table.by_email.remove(existing.email.as_str());
            table
                .by_email
                .insert(user.email.as_str().to_string(), user.id.value());
        }

        table.users.insert(user.id.value(), user.clone());
        Ok(user.clone())
    }
}
