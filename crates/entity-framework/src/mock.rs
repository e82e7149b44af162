//! # Mock Collaborators & Testing Guide
//!
//! Lifecycle transitions call out to a relation-consistency collaborator, and
//! domain clients talk to a record actor. Both are awkward to stand up in a
//! unit test, so this module provides in-memory stand-ins.
//!
//! | Feature | Mock | Real collaborator |
//! |---------|------|-------------------|
//! | **Speed** | Instant | Needs a directory / running actor |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Requires specific state |
//! | **Call inspection** | Every batch is recorded | None |
//!
//! ## Pattern 1: Mocked Relation Check
//!
//! [`MockRelationCheck`] answers each batch with the next queued expectation
//! and records what it received. A call with nothing queued panics, so a
//! mock with no expectations asserts that the collaborator was never called.
//!
//! ```rust
//! use entity_framework::mock::MockRelationCheck;
//! use entity_framework::{EntityError, EntityKind, RelationMap, Std};
//!
//! let mut mock = MockRelationCheck::new();
//! mock.expect_check().return_err(EntityError::MissingRelation {
//!     id: "ghost".into(),
//!     kind: EntityKind::User,
//! });
//!
//! let mut record = Std::with_kind(EntityKind::Contact);
//! record.set_owner_id(Some("ghost".into()));
//! assert!(record.generate_std_param(Some("u1"), &mock).is_err());
//!
//! assert_eq!(
//!     mock.received(),
//!     vec![RelationMap::from([("ghost".to_string(), EntityKind::User)])]
//! );
//! mock.verify();
//! ```
//!
//! ## Pattern 2: Client Logic Test
//!
//! Use [`create_mock_client`] to get a [`RecordClient`] whose requests land on a
//! receiver you control, then answer them with [`expect_create`] and friends.
//! See `tests/user_client_test.rs` in the `entity-sample` crate.

use crate::client::RecordClient;
use crate::entity::Entity;
use crate::error::{EntityError, FrameworkError};
use crate::message::RecordRequest;
use crate::relation::{RelationCheck, RelationMap};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A relation-consistency collaborator driven by queued expectations.
#[derive(Default)]
pub struct MockRelationCheck {
    expectations: Arc<Mutex<VecDeque<Result<(), EntityError>>>>,
    received: Mutex<Vec<RelationMap>>,
}

impl MockRelationCheck {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one more batch.
    pub fn expect_check(&mut self) -> CheckExpectationBuilder {
        CheckExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every batch received so far, in call order.
    pub fn received(&self) -> Vec<RelationMap> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl RelationCheck for MockRelationCheck {
    fn check(&self, relations: &RelationMap) -> Result<(), EntityError> {
        self.received.lock().unwrap().push(relations.clone());
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(response) => response,
            None => panic!("Unexpected relation check: {:?}", relations),
        }
    }
}

/// Builder for relation-check expectations.
pub struct CheckExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Result<(), EntityError>>>>,
}

impl CheckExpectationBuilder {
    /// The batch resolves.
    pub fn return_ok(self) {
        self.expectations.lock().unwrap().push_back(Ok(()));
    }

    /// The batch fails with `error`.
    pub fn return_err(self, error: EntityError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// CLIENT HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// When testing a domain client wrapper we don't want a real `RecordActor`
/// behind it. The receiver lets the test play the actor: inspect each request
/// and answer it with whatever result the scenario needs.
pub fn create_mock_client<E: Entity>(
    buffer_size: usize,
) -> (RecordClient<E>, mpsc::Receiver<RecordRequest<E>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<E: Entity>(
    receiver: &mut mpsc::Receiver<RecordRequest<E>>,
) -> Option<(E, Option<String>, oneshot::Sender<Result<E, FrameworkError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Create {
            record,
            session,
            respond_to,
        }) => Some((record, session, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request.
pub async fn expect_get<E: Entity>(
    receiver: &mut mpsc::Receiver<RecordRequest<E>>,
) -> Option<(String, oneshot::Sender<Result<Option<E>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::EntityKind;

    #[test]
    fn answers_in_queue_order_and_records_batches() {
        let mut mock = MockRelationCheck::new();
        mock.expect_check().return_ok();
        mock.expect_check().return_err(EntityError::Relation("down".into()));

        let batch = RelationMap::from([("u1".to_string(), EntityKind::User)]);
        assert_eq!(mock.check(&batch), Ok(()));
        assert_eq!(
            mock.check(&batch),
            Err(EntityError::Relation("down".into()))
        );
        assert_eq!(mock.received().len(), 2);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected relation check")]
    fn unexpected_call_panics() {
        let mock = MockRelationCheck::new();
        let _ = mock.check(&RelationMap::new());
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_reports_unused_expectations() {
        let mut mock = MockRelationCheck::new();
        mock.expect_check().return_ok();
        mock.verify();
    }
}
