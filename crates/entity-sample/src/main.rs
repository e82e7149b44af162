use entity_framework::tracing::setup_tracing;
use entity_framework::{Entity, EntityClient};
use entity_sample::lifecycle::RecordSystem;
use entity_sample::model::{Address, Contact, User};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting record system");
    let system = RecordSystem::new();

    let span = tracing::info_span!("user_creation");
    let alice = async {
        info!("Creating admin user");
        let user = User::new()
            .with_email("alice@example.com")
            .with_username("alice")
            .with_full_name("Alice", "Martin");
        system
            .user_client
            .create_user(user, None)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let alice_id = alice.id().unwrap_or_default().to_string();
    info!(user_id = %alice_id, "User created successfully");

    let span = tracing::info_span!("contact_lifecycle");
    let contact_id = async {
        let mut office = Address::from_lines(["12 rue des Lilas"]);
        office.zip = Some("75011".into());
        office.city = Some("Paris".into());
        office.kind = Some("invoice".into());

        let contact = Contact::new()
            .with_full_name("Bob", "Durand")
            .with_email("bob@example.com")
            .with_address(office);
        let created = system
            .contact_client
            .create_contact(contact, Some(alice_id.clone()))
            .await
            .map_err(|e| e.to_string())?;
        let id = created.id().unwrap_or_default().to_string();
        info!(contact_id = %id, owner = ?created.owner_id(), "Contact created");

        let viewed = system
            .contact_client
            .view(id.clone(), Some(alice_id.clone()))
            .await
            .map_err(|e| e.to_string())?;

        let mut edit = viewed.clone();
        edit.phone = Some("+33 1 23 45 67 89".into());
        let updated = system
            .contact_client
            .update_contact(id.clone(), edit, Some(alice_id.clone()))
            .await
            .map_err(|e| e.to_string())?;
        info!(cas = updated.cas(), "Contact updated");

        Ok::<_, String>(id)
    }
    .instrument(span)
    .await?;

    // Owner that was never registered: rejected by the directory.
    let mut orphan = Contact::new().with_full_name("Carol", "Petit");
    orphan.set_owner_id(Some("unknown-user".into()));
    match system
        .contact_client
        .create_contact(orphan, Some(alice_id.clone()))
        .await
    {
        Ok(_) => error!("Orphan contact was accepted"),
        Err(e) => info!(error = %e, "Orphan contact rejected"),
    }

    match system
        .contact_client
        .get_many(vec![contact_id.clone(), "missing".into()])
        .await
    {
        Ok(items) => match serde_json::to_string(&items) {
            Ok(json) => info!(%json, "Bulk read"),
            Err(e) => error!(error = %e, "Bulk encode failed"),
        },
        Err(e) => error!(error = %e, "Bulk read failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
