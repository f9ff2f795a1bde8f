use crate::domain::{ContactId, UserId};
use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
struct ContactTable {
    contacts: HashMap<i64, Contact>,
    next_id: i64,
}

impl ContactTable {
    fn next(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    // Child ids come from the same sequence; they are reassigned on every
    // rewrite, matching delete-then-insert persistence.
    fn assign_child_ids(&mut self, contact: &mut Contact) {
        for email in &mut contact.emails {
            email.id = self.next();
        }
        for phone in &mut contact.phone_numbers {
            phone.id = self.next();
        }
    }
}

/// In-memory contact repository.
///
/// The whole aggregate (contact plus child collections) is stored as one map
/// entry behind one lock, so every mutation is atomic at aggregate
/// granularity: either the parent and all its children are (re)written
/// together, or nothing is.
#[derive(Default)]
pub struct MemoryContactRepository {
    inner: Mutex<ContactTable>,
}

impl MemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, ContactTable>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("contact store lock poisoned".to_string()))
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn get(&self, id: ContactId) -> StoreResult<Option<Contact>> {
        let table = self.lock()?;
        Ok(table.contacts.get(&id.value()).cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> StoreResult<Vec<Contact>> {
        let table = self.lock()?;
        let mut contacts: Vec<Contact> = table
            .contacts
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect();
        contacts.sort_by_key(|c| c.id.value());
        Ok(contacts)
    }

    async fn create(&self, mut contact: Contact) -> StoreResult<Contact> {
        let mut table = self.lock()?;

        contact.id = ContactId::new(table.next());
        table.assign_child_ids(&mut contact);

        table.contacts.insert(contact.id.value(), contact.clone());
        Ok(contact)
    }

    async fn replace(&self, mut contact: Contact) -> StoreResult<Contact> {
        let mut table = self.lock()?;

        if !table.contacts.contains_key(&contact.id.value()) {
            return Err(StoreError::NotFound(format!("contact {}", contact.id)));
        }

        table.assign_child_ids(&mut contact);
        table.contacts.insert(contact.id.value(), contact.clone());
        Ok(contact)
    }

    async fn delete(&self, id: ContactId) -> StoreResult<()> {
        let mut table = self.lock()?;

        if table.contacts.remove(&id.value()).is_none() {
            return Err(StoreError::NotFound(format!("contact {}", id)));
        }
        Ok(())
    }
}
