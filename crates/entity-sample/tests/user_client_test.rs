use entity_framework::mock::{create_mock_client, expect_create, expect_get};
use entity_framework::{Entity, EntityClient, EntityError, EntityKind, FrameworkError};
use entity_sample::clients::UserClient;
use entity_sample::directory::UserDirectory;
use entity_sample::model::User;
use entity_sample::user::UserError;

/// Client logic test: the test plays the actor.
///
/// Verifies that `create_user` forwards the payload and session, then
/// registers the returned id in the directory.
#[tokio::test]
async fn test_create_user_registers_the_new_id() {
    let (client, mut receiver) = create_mock_client::<User>(10);
    let directory = UserDirectory::new();
    let user_client = UserClient::new(client, directory.clone());

    let handle = tokio::spawn(async move {
        user_client
            .create_user(User::new().with_username("alice"), Some("admin".into()))
            .await
    });

    let (record, session, respond_to) = expect_create(&mut receiver)
        .await
        .expect("Expected a create request");
    assert_eq!(record.username.as_deref(), Some("alice"));
    assert_eq!(session.as_deref(), Some("admin"));

    let mut stored = record.clone();
    stored.set_id(Some("user-1".into()));
    respond_to.send(Ok(stored)).unwrap();

    let created = handle.await.unwrap().expect("create_user failed");
    assert_eq!(created.id(), Some("user-1"));
    assert_eq!(directory.lookup("user-1"), Some(EntityKind::User));
}

#[tokio::test]
async fn test_rejected_create_registers_nothing() {
    let (client, mut receiver) = create_mock_client::<User>(10);
    let directory = UserDirectory::new();
    let user_client = UserClient::new(client, directory.clone());

    let handle = tokio::spawn(async move {
        user_client
            .create_user(User::new(), Some("admin".into()))
            .await
    });

    let (_, _, respond_to) = expect_create(&mut receiver).await.unwrap();
    let rejection = EntityError::Validation("email is required".into());
    respond_to
        .send(Err(FrameworkError::Entity(rejection.clone())))
        .unwrap();

    let err = handle.await.unwrap().unwrap_err();
    assert_eq!(err, UserError::Rejected(rejection));
    assert_eq!(directory.lookup("user-1"), None);
}

#[tokio::test]
async fn test_get_maps_actor_failures() {
    let (client, mut receiver) = create_mock_client::<User>(10);
    let user_client = UserClient::new(client, UserDirectory::new());

    let handle = tokio::spawn(async move { user_client.get("user-9".to_string()).await });

    let (id, respond_to) = expect_get(&mut receiver).await.unwrap();
    assert_eq!(id, "user-9");
    respond_to.send(Err(FrameworkError::ActorDropped)).unwrap();

    let err = handle.await.unwrap().unwrap_err();
    assert!(matches!(err, UserError::ActorCommunicationError(_)));
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (client, receiver) = create_mock_client::<User>(10);
    drop(receiver);
    let user_client = UserClient::new(client, UserDirectory::new());

    let err = user_client
        .create_user(User::new(), None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        UserError::ActorCommunicationError(FrameworkError::ActorClosed.to_string())
    );
}
