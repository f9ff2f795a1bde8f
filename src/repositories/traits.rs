use crate::domain::{ContactId, UserEmail, UserId};
use crate::error::StoreResult;
use crate::models::{Contact, User};
use async_trait::async_trait;

/// Repository for user records.
///
/// Provides abstraction over credential storage, enabling different
/// implementations (in-memory, database-backed).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id.
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Look up a user by normalized email.
    async fn find_by_email(&self, email: &UserEmail) -> StoreResult<Option<User>>;

    /// Persist a new user, assigning its id.
    ///
    /// Email uniqueness is enforced here, at write time: inserting an email
    /// that is already present fails with `StoreError::Conflict`.
    async fn insert(&self, user: User) -> StoreResult<User>;

    /// Overwrite an existing user record.
    ///
    /// Fails with `StoreError::NotFound` if the id is unknown.
    async fn update(&self, user: &User) -> StoreResult<User>;
}

/// Repository for contact aggregates.
///
/// Every operation works on the whole aggregate: a contact together with its
/// email and phone child collections. Implementations must apply each
/// mutation atomically — a crash mid-update must never leave a stale child
/// collection alongside a new parent state, or vice versa.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Load an aggregate by id, child collections populated.
    async fn get(&self, id: ContactId) -> StoreResult<Option<Contact>>;

    /// Load all aggregates owned by the given user.
    async fn list_for_owner(&self, owner: UserId) -> StoreResult<Vec<Contact>>;

    /// Persist a new aggregate, assigning the contact id and all child ids.
    async fn create(&self, contact: Contact) -> StoreResult<Contact>;

    /// Atomically rewrite an existing aggregate: parent fields and the full
    /// child collections (delete-then-insert, so child ids are reassigned).
    ///
    /// Fails with `StoreError::NotFound` if the id is unknown.
    async fn replace(&self, contact: Contact) -> StoreResult<Contact>;

    /// Remove an aggregate and both its child collections as one unit.
    ///
    /// Fails with `StoreError::NotFound` if the id is unknown.
    async fn delete(&self, id: ContactId) -> StoreResult<()>;
}
