//! Contact aggregate model and its request payload.
//!
//! A `Contact` is an aggregate root: it exclusively owns its email and phone
//! child entities, which are created, replaced, and destroyed only as part of
//! a contact mutation. Wire field names (`firstName`, `phoneNumbers`,
//! `{label, email}` / `{label, number}` entries) follow the existing API
//! contract.

use crate::domain::{ContactId, UserId};
use serde::{Deserialize, Serialize};

/// Email address entry owned by a contact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailAddress {
    /// Identifier generated by the store; regenerated whenever the parent's
    /// child collections are rewritten
    pub id: i64,

    /// Optional label ("work", "home", ...)
    pub label: Option<String>,

    /// The email address
    pub email: String,
}

/// Phone number entry owned by a contact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Identifier generated by the store; regenerated whenever the parent's
    /// child collections are rewritten
    pub id: i64,

    /// Optional label ("mobile", "office", ...)
    pub label: Option<String>,

    /// The phone number
    pub number: String,
}

/// A contact aggregate owned by exactly one user.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier, generated by the store
    pub id: ContactId,

    /// Owning user; set at creation, never reassigned, never serialized
    #[serde(skip_serializing)]
    pub owner_id: UserId,

    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,

    /// Owned email addresses (set semantics, deduplicated by label + value)
    pub emails: Vec<EmailAddress>,

    /// Owned phone numbers (set semantics, deduplicated by label + value)
    pub phone_numbers: Vec<PhoneNumber>,
}

/// One email entry in a create/update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailEntry {
    pub label: Option<String>,
    pub email: Option<String>,
}

/// One phone entry in a create/update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneEntry {
    pub label: Option<String>,
    pub number: Option<String>,
}

/// Body of `POST /api/contacts` and `PUT /api/contacts/{id}`.
///
/// Updates are full-replace, not patch: an absent name/title clears the stored
/// value and the child collections are rebuilt from exactly the entries given
/// here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub emails: Vec<EmailEntry>,
    pub phone_numbers: Vec<PhoneEntry>,
}

impl ContactInput {
    /// Sanitized email entries: values trimmed, blank values dropped,
    /// duplicates of the same (label, value) pair collapsed.
    pub fn email_values(&self) -> Vec<(Option<String>, String)> {
        let entries = self
            .emails
            .iter()
            .map(|e| (e.label.clone(), e.email.as_deref()));
        sanitize_entries(entries)
    }

    /// Sanitized phone entries, with the same trimming and dedup rules.
    pub fn phone_values(&self) -> Vec<(Option<String>, String)> {
        let entries = self
            .phone_numbers
            .iter()
            .map(|p| (p.label.clone(), p.number.as_deref()));
        sanitize_entries(entries)
    }
}

/// Trim values, drop blank/missing ones, and deduplicate by (label, value)
/// while preserving first-seen order.
fn sanitize_entries<'a, I>(entries: I) -> Vec<(Option<String>, String)>
where
    I: Iterator<Item = (Option<String>, Option<&'a str>)>,
{
    let mut seen: Vec<(Option<String>, String)> = Vec::new();
    for (label, value) in entries {
        let value = match value {
            Some(v) => v.trim(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }
        let entry = (label, value.to_string());
        if !seen.contains(&entry) {
            seen.push(entry);
        }
    }
    seen
}
