use chrono::{Duration, Utc};
use entity_framework::{Entity, EntityClient, EntityError, EntityKind, FrameworkError};
use entity_sample::contact::ContactError;
use entity_sample::lifecycle::RecordSystem;
use entity_sample::model::{Address, Contact, User};

async fn create_alice(system: &RecordSystem) -> String {
    let user = User::new()
        .with_email("alice@example.com")
        .with_full_name("Alice", "Martin");
    let created = system
        .user_client
        .create_user(user, None)
        .await
        .expect("Failed to create user");
    created.id().expect("User has no id").to_string()
}

/// Full end-to-end test with the real actors and the shared directory.
#[tokio::test]
async fn test_contact_lifecycle_through_the_record_system() {
    let system = RecordSystem::new();
    let alice = create_alice(&system).await;

    // Create on behalf of alice: creator and owner default to her.
    let contact = Contact::new()
        .with_full_name("Bob", "Durand")
        .with_email("bob@example.com");
    let created = system
        .contact_client
        .create_contact(contact, Some(alice.clone()))
        .await
        .expect("Failed to create contact");
    let id = created.id().expect("Contact has no id").to_string();
    assert!(entity_framework::is_well_formed(&id));
    assert_eq!(created.kind(), Some(EntityKind::Contact));
    assert_eq!(created.created_by_id(), Some(alice.as_str()));
    assert_eq!(created.owner_id(), Some(alice.as_str()));
    assert_eq!(created.cas(), 1);

    // A view records the viewer.
    let viewed = system
        .contact_client
        .view(id.clone(), Some(alice.clone()))
        .await
        .expect("Failed to view contact");
    assert_eq!(viewed.last_view_by_id(), Some(alice.as_str()));
    assert_eq!(viewed.cas(), 2);

    // Update under the token we read.
    let mut edit = viewed.clone();
    edit.phone = Some("+33 1 23 45 67 89".into());
    let updated = system
        .contact_client
        .update_contact(id.clone(), edit, Some(alice.clone()))
        .await
        .expect("Failed to update contact");
    assert_eq!(updated.phone.as_deref(), Some("+33 1 23 45 67 89"));
    assert_eq!(updated.updated_by_id(), Some(alice.as_str()));
    assert_eq!(updated.created(), created.created());
    assert_eq!(updated.cas(), 3);

    // A second writer holding the older token loses.
    let mut stale = viewed;
    stale.phone = Some("0000".into());
    let err = system
        .contact_client
        .update_contact(id.clone(), stale, Some(alice.clone()))
        .await
        .unwrap_err();
    assert!(matches!(err, ContactError::Conflict(_)));

    // Soft delete keeps the record readable.
    let deleted = system
        .contact_client
        .delete(id.clone(), Some(alice.clone()))
        .await
        .expect("Failed to delete contact");
    assert_eq!(deleted.is_deleted(), Some(true));

    let stored = system
        .contact_client
        .get(id.clone())
        .await
        .expect("Failed to get contact")
        .expect("Contact not found");
    assert_eq!(stored.is_deleted(), Some(true));
    assert_eq!(stored.phone.as_deref(), Some("+33 1 23 45 67 89"));

    system.shutdown().await.expect("Shutdown failed");
}

/// Without a session nothing is defaulted and the directory is never asked.
#[tokio::test]
async fn test_create_without_session_leaves_actor_ids_absent() {
    let system = RecordSystem::new();

    let created = system
        .contact_client
        .create_contact(Contact::new().with_full_name("Eve", "Blanc"), None)
        .await
        .expect("Failed to create contact");

    assert!(created.id().is_some());
    assert!(created.created_date().is_some());
    assert!(created.created_by_id().is_none());
    assert!(created.owner().is_none());

    let json = serde_json::to_value(&created).unwrap();
    assert!(json.get("owner").is_none());
    assert!(json["created"].get("id").is_none());

    system.shutdown().await.expect("Shutdown failed");
}

/// An owner that was never registered is rejected and nothing is stored.
#[tokio::test]
async fn test_unknown_owner_is_rejected() {
    let system = RecordSystem::new();
    let alice = create_alice(&system).await;

    let mut contact = Contact::new().with_full_name("Carol", "Petit");
    contact.set_owner_id(Some("ghost".into()));
    let err = system
        .contact_client
        .create_contact(contact, Some(alice.clone()))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ContactError::Rejected(EntityError::MissingRelation {
            id: "ghost".into(),
            kind: EntityKind::User
        })
    );

    // A registered owner other than the session user is accepted.
    let bob = system
        .user_client
        .create_user(User::new().with_username("bob"), Some(alice.clone()))
        .await
        .expect("Failed to create user");
    let bob_id = bob.id().unwrap().to_string();
    assert_eq!(bob.created_by_id(), Some(alice.as_str()));

    let mut contact = Contact::new().with_full_name("Carol", "Petit");
    contact.set_owner_id(Some(bob_id.clone()));
    let created = system
        .contact_client
        .create_contact(contact, Some(alice.clone()))
        .await
        .expect("Failed to create contact");
    assert_eq!(created.owner_id(), Some(bob_id.as_str()));
    assert_eq!(created.created_by_id(), Some(alice.as_str()));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_get_many_reports_missing_ids_in_order() {
    let system = RecordSystem::new();

    let first = system
        .contact_client
        .create_contact(Contact::new().with_email("a@example.com"), None)
        .await
        .unwrap();
    let first_id = first.id().unwrap().to_string();

    let items = system
        .contact_client
        .get_many(vec!["missing".into(), first_id.clone()])
        .await
        .expect("Failed to read contacts");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "missing");
    assert!(items[0].data.is_none());
    assert_eq!(
        items[0].error.as_deref(),
        Some(FrameworkError::NotFound("missing".into()).to_string().as_str())
    );
    assert_eq!(items[1].id, first_id);
    assert_eq!(items[1].cas, 1);
    assert_eq!(items[1].data.as_ref(), Some(&first));

    system.shutdown().await.expect("Shutdown failed");
}

/// A fully populated record survives JSON encoding unchanged.
#[tokio::test]
async fn test_stored_record_round_trips_through_json() {
    let system = RecordSystem::new();
    let alice = create_alice(&system).await;

    let mut office = Address::from_lines(["12 rue des Lilas", "3e etage"]);
    office.zip = Some("75011".into());
    office.city = Some("Paris".into());
    office.alias = Some("office".into());
    office.kind = Some("invoice".into());

    let mut contact = Contact::new()
        .with_full_name("Bob", "Durand")
        .with_email("bob@example.com")
        .with_phone("0102030405")
        .with_address(office);
    contact.set_name(Some("Bob Durand".into()));
    contact.set_expiry(Some(Duration::seconds(90)));
    contact.set_expiry_time(Utc::now() + Duration::days(1));

    let created = system
        .contact_client
        .create_contact(contact, Some(alice.clone()))
        .await
        .unwrap();
    let id = created.id().unwrap().to_string();
    let viewed = system
        .contact_client
        .view(id.clone(), Some(alice.clone()))
        .await
        .unwrap();
    let updated = system
        .contact_client
        .update_contact(id, viewed, Some(alice))
        .await
        .unwrap();

    let json = serde_json::to_vec(&updated).unwrap();
    let decoded = Contact::from_slice(&json).unwrap();
    assert_eq!(decoded, updated);
    assert_eq!(decoded.expiry(), Duration::seconds(90));

    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["type"], "contact");
    assert_eq!(value["expiry"], 90_000_000_000i64);
    assert_eq!(value["cas"], 3);
    assert_eq!(value["addresses"]["0"]["lines"]["1"], "3e etage");

    system.shutdown().await.expect("Shutdown failed");
}
