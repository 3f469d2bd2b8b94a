use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use crate::draft::Payload;
use crate::entity::Entity;
use crate::error::TransportError;
use crate::gateway::EntityService;
use crate::models::{Account, ApiResponse, RecordId};
use crate::session::AccountService;

/// In-memory backend for tests and offline demos.
///
/// Records are kept as JSON per resource. Faults can be queued per resource to
/// exercise rejection and transport failure paths.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<&'static str, Vec<Value>>,
    payloads: HashMap<&'static str, Vec<Payload>>,
    faults: HashMap<String, Fault>,
    next_id: RecordId,
    account: Option<Account>,
    account_fault: Option<String>,
    account_calls: usize,
}

#[derive(Debug)]
enum Fault {
    Reject(String),
    Transport(String),
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores a record as if the server had created it.
    pub fn seed<E: Entity>(&self, record: E) {
        let mut state = self.state();
        if let Some(id) = record.id() {
            state.next_id = state.next_id.max(id);
        }
        if let Ok(json) = serde_json::to_value(&record) {
            state.records.entry(E::RESOURCE).or_default().push(json);
        }
    }

    /// Makes the account endpoint return `account`.
    pub fn sign_in_as(&self, account: Account) {
        let mut state = self.state();
        state.account = Some(account);
        state.account_fault = None;
    }

    /// Makes the account endpoint fail at the transport level.
    pub fn fail_account(&self, message: impl Into<String>) {
        self.state().account_fault = Some(message.into());
    }

    /// The next write to `resource` is answered without data.
    pub fn reject_next(&self, resource: &str, message: impl Into<String>) {
        self.state()
            .faults
            .insert(resource.to_string(), Fault::Reject(message.into()));
    }

    /// The next write to `resource` fails before reaching the server.
    pub fn fail_next(&self, resource: &str, message: impl Into<String>) {
        self.state()
            .faults
            .insert(resource.to_string(), Fault::Transport(message.into()));
    }

    /// Number of create/update calls received for `resource`.
    pub fn calls(&self, resource: &str) -> usize {
        self.state().payloads.get(resource).map_or(0, Vec::len)
    }

    pub fn last_payload(&self, resource: &str) -> Option<Payload> {
        self.state()
            .payloads
            .get(resource)
            .and_then(|p| p.last().cloned())
    }

    pub fn account_calls(&self) -> usize {
        self.state().account_calls
    }

    fn take_fault<T>(state: &mut Inner, resource: &str) -> Option<Result<ApiResponse<T>, TransportError>> {
        state.faults.remove(resource).map(|fault| match fault {
            Fault::Reject(message) => Ok(ApiResponse::rejected(400, message)),
            Fault::Transport(message) => Err(TransportError::new(message)),
        })
    }

    fn write<E: Entity>(&self, payload: Payload, creating: bool) -> Result<ApiResponse<E>, TransportError> {
        let mut state = self.state();
        state
            .payloads
            .entry(E::RESOURCE)
            .or_default()
            .push(payload.clone());
        if let Some(answer) = Self::take_fault(&mut state, E::RESOURCE) {
            return answer;
        }

        let mut json = payload;
        let id = if creating {
            state.next_id += 1;
            state.next_id
        } else {
            match json.get("id").and_then(Value::as_i64) {
                Some(id) => id,
                None => return Ok(ApiResponse::rejected(400, "Missing id")),
            }
        };
        json.insert("id".to_string(), Value::from(id));
        let json = Value::Object(json);

        let record: E = serde_json::from_value(json.clone())
            .map_err(|e| TransportError::new(e.to_string()))?;

        let records = state.records.entry(E::RESOURCE).or_default();
        let existing = records
            .iter()
            .position(|r| r.get("id").and_then(Value::as_i64) == Some(id));
        match (existing, creating) {
            (Some(index), false) => records[index] = json,
            (None, false) => {
                return Ok(ApiResponse::rejected(404, format!("{} {id} not found", E::KIND)));
            }
            (_, true) => records.push(json),
        }
        Ok(ApiResponse::ok(record))
    }
}

impl<E: Entity> EntityService<E> for MemoryBackend {
    async fn list(&self) -> Result<ApiResponse<Vec<E>>, TransportError> {
        let state = self.state();
        let records = state
            .records
            .get(E::RESOURCE)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|r| serde_json::from_value(r.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();
        Ok(ApiResponse::ok(records))
    }

    async fn create(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError> {
        self.write(payload, true)
    }

    async fn update(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError> {
        self.write(payload, false)
    }

    async fn delete(&self, id: RecordId) -> Result<ApiResponse<Value>, TransportError> {
        let mut state = self.state();
        if let Some(answer) = Self::take_fault(&mut state, E::RESOURCE) {
            return answer;
        }
        let records = state.records.entry(E::RESOURCE).or_default();
        let before = records.len();
        records.retain(|r| r.get("id").and_then(Value::as_i64) != Some(id));
        if records.len() == before {
            return Ok(ApiResponse::rejected(404, format!("{} {id} not found", E::KIND)));
        }
        Ok(ApiResponse {
            status_code: Some(200),
            error: None,
            message: Some(format!("Deleted {} {id}", E::KIND)),
            data: None,
        })
    }
}

impl AccountService for MemoryBackend {
    async fn fetch_account(&self) -> Result<ApiResponse<Account>, TransportError> {
        let mut state = self.state();
        state.account_calls += 1;
        if let Some(message) = state.account_fault.clone() {
            return Err(TransportError::new(message));
        }
        match state.account.clone() {
            Some(account) => Ok(ApiResponse::ok(account)),
            None => Err(TransportError::new("Unauthorized").with_status(401)),
        }
    }
}
