use entity_framework::mock::MockRelationCheck;
use entity_framework::{Entity, EntityClient, EntityError, EntityKind, RelationMap};
use entity_sample::contact::ContactError;
use entity_sample::model::Contact;
use std::sync::Arc;

/// Real Contact actor with a mocked relation collaborator.
///
/// The session user is trusted and never checked; the explicit owner is sent
/// to the collaborator in a single batch.
#[tokio::test]
async fn test_contact_actor_checks_only_foreign_ids() {
    let mut relations = MockRelationCheck::new();
    relations.expect_check().return_ok();
    let relations = Arc::new(relations);

    let (actor, client) = entity_sample::contact::new();
    let actor_handle = tokio::spawn(actor.run(relations.clone()));

    let mut contact = Contact::new().with_full_name("Bob", "Durand");
    contact.set_owner_id(Some("manager".into()));
    let created = client
        .create_contact(contact, Some("clerk".into()))
        .await
        .expect("Failed to create contact");

    assert_eq!(created.created_by_id(), Some("clerk"));
    assert_eq!(created.owner_id(), Some("manager"));
    assert_eq!(
        relations.received(),
        vec![RelationMap::from([("manager".to_string(), EntityKind::User)])]
    );
    relations.verify();

    drop(client);
    actor_handle.await.unwrap();
}

/// A failed relation check leaves nothing behind.
#[tokio::test]
async fn test_contact_actor_forwards_relation_errors() {
    let mut relations = MockRelationCheck::new();
    relations
        .expect_check()
        .return_err(EntityError::Relation("directory unavailable".into()));
    let relations = Arc::new(relations);

    let (actor, client) = entity_sample::contact::new();
    let actor_handle = tokio::spawn(actor.run(relations.clone()));

    let mut contact = Contact::new();
    contact.set_created_by_id(Some("someone".into()));
    let err = client
        .create_contact(contact, None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ContactError::Rejected(EntityError::Relation("directory unavailable".into()))
    );
    relations.verify();

    drop(client);
    actor_handle.await.unwrap();
}

/// Updating or viewing an unknown id is a not-found, not a relation error.
#[tokio::test]
async fn test_contact_actor_reports_unknown_ids() {
    let relations = Arc::new(MockRelationCheck::new());
    let (actor, client) = entity_sample::contact::new();
    let actor_handle = tokio::spawn(actor.run(relations.clone()));

    let err = client
        .update_contact("nope".into(), Contact::new(), Some("clerk".into()))
        .await
        .unwrap_err();
    assert_eq!(err, ContactError::NotFound("nope".into()));

    let err = client
        .view("nope".to_string(), Some("clerk".into()))
        .await
        .unwrap_err();
    assert_eq!(err, ContactError::NotFound("nope".into()));
    assert!(relations.received().is_empty());

    drop(client);
    actor_handle.await.unwrap();
}

/// Updates cannot undelete, re-tag or re-identify a stored contact.
#[tokio::test]
async fn test_contact_update_keeps_server_owned_state() {
    let relations = Arc::new(MockRelationCheck::new());
    let (actor, client) = entity_sample::contact::new();
    let actor_handle = tokio::spawn(actor.run(relations.clone()));

    let created = client
        .create_contact(Contact::new().with_email("bob@example.com"), None)
        .await
        .unwrap();
    let id = created.id().unwrap().to_string();
    client.delete(id.clone(), None).await.unwrap();

    let edit = Contact::from_slice(br#"{"type":"user","phone":"0102030405"}"#).unwrap();
    let updated = client
        .update_contact(id.clone(), edit, None)
        .await
        .expect("Failed to update contact");
    assert_eq!(updated.is_deleted(), Some(true));
    assert_eq!(updated.kind(), Some(EntityKind::Contact));
    assert_eq!(updated.phone.as_deref(), Some("0102030405"));

    let forged = Contact::from_slice(br#"{"id":"not-a-uuid"}"#).unwrap();
    let err = client
        .update_contact(id.clone(), forged, None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ContactError::Rejected(EntityError::InvalidIdentifier("not-a-uuid".into()))
    );

    drop(client);
    actor_handle.await.unwrap();
}
