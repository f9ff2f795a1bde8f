//! Integration tests for ownership-enforced contact CRUD.
//!
//! Covers the two behaviors with real teeth: the existence-before-ownership
//! check ordering, and the replace-not-merge contract on child collections.

mod support;

use contact_manager_server::domain::ContactId;
use contact_manager_server::error::ApiError;
use contact_manager_server::models::{ContactInput, EmailEntry, PhoneEntry};
use support::{identity_for, setup};

fn email_entry(label: Option<&str>, email: &str) -> EmailEntry {
    EmailEntry {
        label: label.map(str::to_string),
        email: Some(email.to_string()),
    }
}

fn input_with_emails(first_name: &str, emails: Vec<EmailEntry>) -> ContactInput {
    ContactInput {
        first_name: Some(first_name.to_string()),
        emails,
        ..ContactInput::default()
    }
}

#[tokio::test]
async fn test_owner_crud_cycle() {
    let env = setup();
    let owner = env.register_user("Jo", "jo@x.com", "secret1").await;
    let identity = identity_for(&owner);

    let created = env
        .contacts
        .create(
            &identity,
            ContactInput {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                title: Some("Countess".to_string()),
                emails: vec![email_entry(Some("work"), "ada@engine.org")],
                phone_numbers: vec![PhoneEntry {
                    label: Some("mobile".to_string()),
                    number: Some("+1 555 0100".to_string()),
                }],
            },
        )
        .await
        .expect("create should succeed");
    assert!(created.id.value() > 0);
    assert_eq!(created.emails.len(), 1);
    assert_eq!(created.phone_numbers.len(), 1);

    let fetched = env
        .contacts
        .get(&identity, created.id)
        .await
        .expect("owner read should succeed");
    assert_eq!(fetched, created);

    env.contacts
        .delete(&identity, created.id)
        .await
        .expect("owner delete should succeed");

    let result = env.contacts.get(&identity, created.id).await;
    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_cross_tenant_access_is_forbidden() {
    let env = setup();
    let alice = env.register_user("Alice", "alice@x.com", "secret1").await;
    let bob = env.register_user("Bob", "bob@x.com", "secret1").await;
    let alice_id = identity_for(&alice);
    let bob_id = identity_for(&bob);

    let contact = env
        .contacts
        .create(&alice_id, input_with_emails("Ada", vec![]))
        .await
        .unwrap();

    // Existing but foreign: Forbidden, for every operation.
    let result = env.contacts.get(&bob_id, contact.id).await;
    assert!(matches!(result, Err(ApiError::Forbidden(_))));

    let result = env
        .contacts
        .update(&bob_id, contact.id, input_with_emails("Eve", vec![]))
        .await;
    assert!(matches!(result, Err(ApiError::Forbidden(_))));

    let result = env.contacts.delete(&bob_id, contact.id).await;
    assert!(matches!(result, Err(ApiError::Forbidden(_))));

    // The aggregate is untouched.
    let fetched = env.contacts.get(&alice_id, contact.id).await.unwrap();
    assert_eq!(fetched.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_nonexistent_id_is_not_found_for_everyone() {
    let env = setup();
    let alice = env.register_user("Alice", "alice@x.com", "secret1").await;
    let alice_id = identity_for(&alice);
    let missing = ContactId::new(9999);

    assert!(matches!(
        env.contacts.get(&alice_id, missing).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        env.contacts
            .update(&alice_id, missing, ContactInput::default())
            .await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        env.contacts.delete(&alice_id, missing).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_update_replaces_child_collections() {
    let env = setup();
    let owner = env.register_user("Jo", "jo@x.com", "secret1").await;
    let identity = identity_for(&owner);

    let created = env
        .contacts
        .create(
            &identity,
            input_with_emails(
                "Ada",
                vec![
                    email_entry(Some("work"), "a@x.com"),
                    email_entry(Some("home"), "b@x.com"),
                ],
            ),
        )
        .await
        .unwrap();
    assert_eq!(created.emails.len(), 2);

    // Resubmit only {C}: A and B are gone, not merged.
    let update = input_with_emails("Ada", vec![email_entry(Some("new"), "c@x.com")]);
    let updated = env
        .contacts
        .update(&identity, created.id, update.clone())
        .await
        .unwrap();
    let emails: Vec<&str> = updated.emails.iter().map(|e| e.email.as_str()).collect();
    assert_eq!(emails, vec!["c@x.com"]);

    // Idempotent: repeating the same update yields {C} again, not {A,B,C}.
    let repeated = env
        .contacts
        .update(&identity, created.id, update)
        .await
        .unwrap();
    let emails: Vec<&str> = repeated.emails.iter().map(|e| e.email.as_str()).collect();
    assert_eq!(emails, vec!["c@x.com"]);
}

#[tokio::test]
async fn test_update_is_full_replace_of_fields() {
    let env = setup();
    let owner = env.register_user("Jo", "jo@x.com", "secret1").await;
    let identity = identity_for(&owner);

    let created = env
        .contacts
        .create(
            &identity,
            ContactInput {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                title: Some("Countess".to_string()),
                ..ContactInput::default()
            },
        )
        .await
        .unwrap();

    // Absent fields clear stored values: replace, not patch.
    let updated = env
        .contacts
        .update(
            &identity,
            created.id,
            ContactInput {
                first_name: Some("Augusta".to_string()),
                ..ContactInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("Augusta"));
    assert!(updated.last_name.is_none());
    assert!(updated.title.is_none());
}

#[tokio::test]
async fn test_blank_and_duplicate_entries_are_dropped() {
    let env = setup();
    let owner = env.register_user("Jo", "jo@x.com", "secret1").await;
    let identity = identity_for(&owner);

    let created = env
        .contacts
        .create(
            &identity,
            ContactInput {
                emails: vec![
                    email_entry(Some("work"), "  real@x.com  "),
                    email_entry(None, "   "),
                    email_entry(None, ""),
                    email_entry(Some("work"), "real@x.com"),
                ],
                phone_numbers: vec![
                    PhoneEntry {
                        label: None,
                        number: Some(" ".to_string()),
                    },
                    PhoneEntry {
                        label: None,
                        number: None,
                    },
                ],
                ..ContactInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(created.emails.len(), 1);
    assert_eq!(created.emails[0].email, "real@x.com");
    assert!(created.phone_numbers.is_empty());
}

#[tokio::test]
async fn test_list_returns_only_own_contacts() {
    let env = setup();
    let alice = env.register_user("Alice", "alice@x.com", "secret1").await;
    let bob = env.register_user("Bob", "bob@x.com", "secret1").await;
    let alice_id = identity_for(&alice);
    let bob_id = identity_for(&bob);

    env.contacts
        .create(&alice_id, input_with_emails("A1", vec![]))
        .await
        .unwrap();
    env.contacts
        .create(&alice_id, input_with_emails("A2", vec![]))
        .await
        .unwrap();
    env.contacts
        .create(&bob_id, input_with_emails("B1", vec![]))
        .await
        .unwrap();

    let alices = env.contacts.list(&alice_id).await.unwrap();
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|c| c.owner_id == alice.id));

    let bobs = env.contacts.list(&bob_id).await.unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].first_name.as_deref(), Some("B1"));
}
