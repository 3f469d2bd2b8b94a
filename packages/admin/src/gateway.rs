//! # Submission gateway
//!
//! Turns a validated payload into a remote write and a [`SubmissionResult`].
//!
//! The remote side is abstracted by [`EntityService`], implemented by the REST
//! client in the `api` crate and by [`crate::MemoryBackend`] in tests. The gateway
//! only interprets the envelope:
//!
//! | Service answer | Result |
//! |----------------|--------|
//! | `Err(TransportError)` | `Err(SubmitError::Transport(message))` |
//! | `Ok(envelope)` with `data` | `Ok(record)` |
//! | `Ok(envelope)` without `data` | `Err(SubmitError::Rejected(message or generic))` |
//!
//! User-facing side effects (notifications, list reload, closing the dialog) are
//! applied by [`crate::form::EntityFormController::finish_submit`].

use serde_json::Value;

use crate::draft::Payload;
use crate::entity::Entity;
use crate::error::{SubmitError, TransportError, GENERIC_FAILURE};
use crate::form::FormMode;
use crate::models::{ApiResponse, RecordId};

/// Outcome of one submission attempt.
pub type SubmissionResult<E> = Result<E, SubmitError>;

/// Remote CRUD operations for one entity type.
pub trait EntityService<E: Entity> {
    async fn list(&self) -> Result<ApiResponse<Vec<E>>, TransportError>;

    async fn create(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError>;

    async fn update(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError>;

    async fn delete(&self, id: RecordId) -> Result<ApiResponse<Value>, TransportError>;
}

/// Receives user-visible feedback.
pub trait Notifier {
    fn success(&mut self, message: &str);

    fn error(&mut self, title: &str, description: &str);
}

/// Interprets a service answer for a write.
pub fn interpret<E>(answer: Result<ApiResponse<E>, TransportError>) -> SubmissionResult<E> {
    match answer {
        Err(e) => Err(SubmitError::from(e)),
        Ok(ApiResponse { data: Some(record), .. }) => Ok(record),
        Ok(ApiResponse { message, .. }) => Err(SubmitError::Rejected(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        )),
    }
}

/// Interprets a service answer for a delete, where the backend may omit `data`.
pub fn interpret_delete(answer: Result<ApiResponse<Value>, TransportError>) -> Result<(), SubmitError> {
    match answer {
        Err(e) => Err(SubmitError::from(e)),
        Ok(res) if res.data.is_some() || res.status_code.is_some_and(|s| (200..300).contains(&s)) => {
            Ok(())
        }
        Ok(res) => Err(SubmitError::Rejected(
            res.message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        )),
    }
}

/// Performs writes against an [`EntityService`].
#[derive(Clone, Debug)]
pub struct SubmissionGateway<S> {
    service: S,
}

impl<S> SubmissionGateway<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn submit<E>(&self, mode: FormMode, payload: Payload) -> SubmissionResult<E>
    where
        E: Entity,
        S: EntityService<E>,
    {
        match mode {
            FormMode::Create => self.submit_create(payload).await,
            FormMode::Update => self.submit_update(payload).await,
        }
    }

    pub async fn submit_create<E>(&self, payload: Payload) -> SubmissionResult<E>
    where
        E: Entity,
        S: EntityService<E>,
    {
        let result = interpret(self.service.create(payload).await);
        log_result::<E>("create", &result);
        result
    }

    pub async fn submit_update<E>(&self, payload: Payload) -> SubmissionResult<E>
    where
        E: Entity,
        S: EntityService<E>,
    {
        let result = interpret(self.service.update(payload).await);
        log_result::<E>("update", &result);
        result
    }

    pub async fn delete<E>(&self, id: RecordId) -> Result<(), SubmitError>
    where
        E: Entity,
        S: EntityService<E>,
    {
        let result = interpret_delete(self.service.delete(id).await);
        match &result {
            Ok(()) => tracing::info!("deleted {} {}", E::KIND, id),
            Err(e) => tracing::warn!("delete {} {} failed: {}", E::KIND, id, e),
        }
        result
    }
}

fn log_result<E: Entity>(action: &str, result: &SubmissionResult<E>) {
    match result {
        Ok(record) => tracing::info!("{action} {} succeeded (id {:?})", E::KIND, record.id()),
        Err(SubmitError::Rejected(message)) => {
            tracing::warn!("{action} {} rejected: {message}", E::KIND)
        }
        Err(SubmitError::Transport(message)) => {
            tracing::error!("{action} {} failed: {message}", E::KIND)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn category() -> Category {
        Category {
            id: Some(4),
            name: "Shoes".into(),
            description: None,
            active: true,
        }
    }

    #[test]
    fn test_data_payload_is_success() {
        let result = interpret(Ok(ApiResponse::ok(category())));
        assert_eq!(result, Ok(category()));
    }

    #[test]
    fn test_missing_data_uses_server_message() {
        let result: SubmissionResult<Category> = interpret(Ok(ApiResponse::rejected(400, "X")));
        assert_eq!(result, Err(SubmitError::Rejected("X".into())));
    }

    #[test]
    fn test_missing_data_without_message_is_generic() {
        let answer = ApiResponse::<Category> {
            status_code: Some(500),
            error: None,
            message: None,
            data: None,
        };
        let result = interpret(Ok(answer));
        assert_eq!(result.unwrap_err().message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_transport_error_message_is_kept() {
        let result: SubmissionResult<Category> = interpret(Err(TransportError::new("net down")));
        assert_eq!(result, Err(SubmitError::Transport("net down".into())));
    }

    #[test]
    fn test_delete_accepts_empty_success_envelope() {
        let answer = ApiResponse::<Value> {
            status_code: Some(200),
            error: None,
            message: Some("Deleted".into()),
            data: None,
        };
        assert_eq!(interpret_delete(Ok(answer)), Ok(()));
        assert!(interpret_delete(Ok(ApiResponse::rejected(404, "not found"))).is_err());
    }
}
