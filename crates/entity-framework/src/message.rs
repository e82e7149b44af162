//! # Generic Messages
//!
//! This module defines the message types exchanged between the `RecordClient`
//! and the `RecordActor`.

use crate::entity::Entity;
use crate::envelope::BulkEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a `RecordActor`.
///
/// # Record Lifecycle
/// The variants map onto the lifecycle of a stored record:
///
/// - **Create**: runs `init`, `generate_std_param` and `validate`, then stores.
/// - **Get**: reads the stored copy without touching its audit trail.
/// - **View**: records a view (`update_view_param`).
/// - **Update**: replaces the record's fields, guarded by its CAS token.
/// - **Delete**: soft delete (`isDeleted = true`).
/// - **GetMany**: bulk read into [`BulkEntity`] items.
///
/// `session` is the acting user's identity, when there is one.
#[derive(Debug)]
pub enum RecordRequest<E: Entity> {
    Create {
        record: E,
        session: Option<String>,
        respond_to: Response<E>,
    },
    Get {
        id: String,
        respond_to: Response<Option<E>>,
    },
    View {
        id: String,
        session: Option<String>,
        respond_to: Response<E>,
    },
    Update {
        id: String,
        record: E,
        session: Option<String>,
        respond_to: Response<E>,
    },
    Delete {
        id: String,
        session: Option<String>,
        respond_to: Response<E>,
    },
    GetMany {
        ids: Vec<String>,
        respond_to: Response<Vec<BulkEntity<E>>>,
    },
}
