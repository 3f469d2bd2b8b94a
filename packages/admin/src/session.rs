//! Session state shared by the bootstrap sequencer, the route guard and headers.

use crate::bootstrap::BootstrapOutcome;
use crate::error::TransportError;
use crate::models::{Account, ApiResponse};

/// Remote lookup of the account behind the current credentials.
pub trait AccountService {
    async fn fetch_account(&self) -> Result<ApiResponse<Account>, TransportError>;
}

/// Where the session stands.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    /// The initial account fetch has not resolved yet.
    Pending,
    Authenticated,
    /// Known to have no session (skipped fetch, 401, logout).
    Anonymous,
    /// The account fetch failed for another reason.
    Failed(String),
}

/// Application context holding the signed-in account.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    account: Option<Account>,
    status: SessionStatus,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            account: None,
            status: SessionStatus::Pending,
        }
    }
}

impl SessionState {
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    pub fn sign_in(&mut self, account: Account) {
        tracing::info!("signed in as {}", account.email);
        self.account = Some(account);
        self.status = SessionStatus::Authenticated;
    }

    pub fn sign_out(&mut self) {
        self.account = None;
        self.status = SessionStatus::Anonymous;
    }

    /// Records the result of the startup account fetch.
    pub fn apply(&mut self, outcome: BootstrapOutcome) {
        match outcome {
            BootstrapOutcome::Authenticated(account) => self.sign_in(account),
            BootstrapOutcome::Anonymous => self.sign_out(),
            BootstrapOutcome::Failed(message) => {
                self.account = None;
                self.status = SessionStatus::Failed(message);
            }
            BootstrapOutcome::Skipped => {
                if self.is_pending() {
                    self.status = SessionStatus::Anonymous;
                }
            }
            BootstrapOutcome::AlreadyRan => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account {
            id: 1,
            email: "admin@shop.test".into(),
            name: Some("Admin".into()),
            role: Some("ADMIN".into()),
        }
    }

    #[test]
    fn test_starts_pending_without_account() {
        let state = SessionState::default();
        assert!(state.is_pending());
        assert!(state.account().is_none());
    }

    #[test]
    fn test_sign_in_then_out() {
        let mut state = SessionState::default();
        state.sign_in(account());
        assert!(state.is_authenticated());
        assert_eq!(state.status(), &SessionStatus::Authenticated);

        state.sign_out();
        assert!(!state.is_authenticated());
        assert_eq!(state.status(), &SessionStatus::Anonymous);
    }

    #[test]
    fn test_failed_fetch_clears_account() {
        let mut state = SessionState::default();
        state.sign_in(account());
        state.apply(BootstrapOutcome::Failed("HTTP 500".into()));
        assert!(state.account().is_none());
        assert_eq!(state.status(), &SessionStatus::Failed("HTTP 500".into()));
    }

    #[test]
    fn test_skip_does_not_touch_signed_in_session() {
        let mut state = SessionState::default();
        state.sign_in(account());
        state.apply(BootstrapOutcome::Skipped);
        assert_eq!(state.account(), Some(&account()));
        assert_eq!(state.status(), &SessionStatus::Authenticated);
    }
}
