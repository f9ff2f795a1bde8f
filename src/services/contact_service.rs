//! Contact service layer.
//!
//! Ownership-enforcing CRUD over the contact aggregate. Every operation
//! first requires a bound identity, resolves it to a stored user, and for
//! id-addressed operations checks existence strictly before ownership: a
//! caller probing a nonexistent id gets `NotFound`, probing an existing but
//! foreign id gets `Forbidden`.

use crate::auth::RequestIdentity;
use crate::domain::{ContactId, UserId};
use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, ContactInput, EmailAddress, PhoneNumber};
use crate::repositories::{ContactRepository, UserRepository};
use crate::services::resolve_user;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Contact service trait for aggregate operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Create a contact owned by the calling user.
    async fn create(&self, identity: &RequestIdentity, input: ContactInput) -> ApiResult<Contact>;

    /// Load one of the calling user's contacts, children populated.
    async fn get(&self, identity: &RequestIdentity, id: ContactId) -> ApiResult<Contact>;

    /// Full-replace update: names and title are overwritten unconditionally
    /// (absent input clears them) and both child collections are destroyed
    /// and rebuilt from the input. Anything not resubmitted is gone.
    async fn update(
        &self,
        identity: &RequestIdentity,
        id: ContactId,
        input: ContactInput,
    ) -> ApiResult<Contact>;

    /// Remove the contact and both child collections as a single unit.
    async fn delete(&self, identity: &RequestIdentity, id: ContactId) -> ApiResult<()>;

    /// All contacts owned by the calling user.
    async fn list(&self, identity: &RequestIdentity) -> ApiResult<Vec<Contact>>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    contacts: Arc<dyn ContactRepository>,
    users: Arc<dyn UserRepository>,
}

impl ContactServiceImpl {
    pub fn new(contacts: Arc<dyn ContactRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { contacts, users }
    }

    /// Load a contact and verify ownership, in that order.
    async fn load_owned(&self, owner: UserId, id: ContactId) -> ApiResult<Contact> {
        let contact = self
            .contacts
            .get(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("contact {}", id)))?;

        if contact.owner_id != owner {
            return Err(ApiError::Forbidden(
                "you can only access your own contacts".to_string(),
            ));
        }

        Ok(contact)
    }

    fn build_emails(input: &ContactInput) -> Vec<EmailAddress> {
        input
            .email_values()
            .into_iter()
            .map(|(label, email)| EmailAddress {
                id: 0,
                label,
                email,
            })
            .collect()
    }

    fn build_phone_numbers(input: &ContactInput) -> Vec<PhoneNumber> {
        input
            .phone_values()
            .into_iter()
            .map(|(label, number)| PhoneNumber {
                id: 0,
                label,
                number,
            })
            .collect()
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create(&self, identity: &RequestIdentity, input: ContactInput) -> ApiResult<Contact> {
        let user = resolve_user(self.users.as_ref(), identity).await?;

        let contact = Contact {
            id: ContactId::new(0),
            owner_id: user.id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            title: input.title.clone(),
            emails: Self::build_emails(&input),
            phone_numbers: Self::build_phone_numbers(&input),
        };

        let created = self.contacts.create(contact).await?;
        info!(owner = %user.email, contact = %created.id, "contact created");
        Ok(created)
    }

    async fn get(&self, identity: &RequestIdentity, id: ContactId) -> ApiResult<Contact> {
        let user = resolve_user(self.users.as_ref(), identity).await?;
        self.load_owned(user.id, id).await
    }

    async fn update(
        &self,
        identity: &RequestIdentity,
        id: ContactId,
        input: ContactInput,
    ) -> ApiResult<Contact> {
        let user = resolve_user(self.users.as_ref(), identity).await?;
        let mut contact = self.load_owned(user.id, id).await?;

        // Full replace: a field absent from the input clears the stored one.
        contact.first_name = input.first_name.clone();
        contact.last_name = input.last_name.clone();
        contact.title = input.title.clone();
        contact.emails = Self::build_emails(&input);
        contact.phone_numbers = Self::build_phone_numbers(&input);

        let updated = self.contacts.replace(contact).await?;
        info!(owner = %user.email, contact = %updated.id, "contact updated");
        Ok(updated)
    }

    async fn delete(&self, identity: &RequestIdentity, id: ContactId) -> ApiResult<()> {
        let user = resolve_user(self.users.as_ref(), identity).await?;
        self.load_owned(user.id, id).await?;

        self.contacts.delete(id).await?;
        info!(owner = %user.email, contact = %id, "contact deleted");
        Ok(())
    }

    async fn list(&self, identity: &RequestIdentity) -> ApiResult<Vec<Contact>> {
        let user = resolve_user(self.users.as_ref(), identity).await?;
        Ok(self.contacts.list_for_owner(user.id).await?)
    }
}
