//! # Bootstrap sequencer
//!
//! Fetches the current account once per application load and decides whether the
//! router tree may render while that fetch is outstanding.
//!
//! - Paths in `fetch_exempt` (the auth and password-recovery pages) skip the fetch
//!   entirely; the session account is left untouched.
//! - Any other path triggers exactly one fetch. A `200` envelope with data signs the
//!   account in. A `401`/`403` means "no session". Anything else is recorded as
//!   [`BootstrapOutcome::Failed`] so the UI can tell an outage from a signed-out user.
//! - [`BootstrapSequencer::render_gate`] withholds the router while the session is
//!   still pending, except on `render_exempt` paths (auth, recovery and root).

use std::cell::Cell;

use crate::config::SessionConfig;
use crate::models::Account;
use crate::session::{AccountService, SessionState};

/// Result of [`BootstrapSequencer::run`], applied with [`SessionState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum BootstrapOutcome {
    /// The current path is exempt; no fetch happened.
    Skipped,
    /// The sequencer already ran for this application load.
    AlreadyRan,
    Authenticated(Account),
    Anonymous,
    Failed(String),
}

/// Whether the router tree may render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderGate {
    Router,
    Loading,
}

/// One-shot startup account fetch.
#[derive(Debug)]
pub struct BootstrapSequencer {
    fetch_exempt: Vec<String>,
    render_exempt: Vec<String>,
    started: Cell<bool>,
}

impl BootstrapSequencer {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            fetch_exempt: config.fetch_exempt.clone(),
            render_exempt: config.render_exempt.clone(),
            started: Cell::new(false),
        }
    }

    pub fn should_fetch(&self, path: &str) -> bool {
        !matches_any(&self.fetch_exempt, path)
    }

    pub fn render_gate(&self, path: &str, session: &SessionState) -> RenderGate {
        if session.is_pending() && !matches_any(&self.render_exempt, path) {
            RenderGate::Loading
        } else {
            RenderGate::Router
        }
    }

    pub fn has_run(&self) -> bool {
        self.started.get()
    }

    /// Fetches the account unless `path` is exempt. Only the first call does anything.
    pub async fn run<A: AccountService>(&self, service: &A, path: &str) -> BootstrapOutcome {
        if self.started.replace(true) {
            return BootstrapOutcome::AlreadyRan;
        }
        if !self.should_fetch(path) {
            tracing::debug!("skipping account fetch on {path}");
            return BootstrapOutcome::Skipped;
        }

        match service.fetch_account().await {
            Ok(res) if res.is_ok_status() => match res.data {
                Some(account) => BootstrapOutcome::Authenticated(account),
                None => {
                    tracing::warn!("account response carried no data");
                    BootstrapOutcome::Anonymous
                }
            },
            Ok(res) if is_unauthorized(res.status_code) => BootstrapOutcome::Anonymous,
            Ok(res) => {
                let message = res
                    .message
                    .unwrap_or_else(|| format!("Unexpected status {:?}", res.status_code));
                tracing::warn!("account fetch rejected: {message}");
                BootstrapOutcome::Failed(message)
            }
            Err(e) if is_unauthorized(e.status) => BootstrapOutcome::Anonymous,
            Err(e) => {
                tracing::warn!("account fetch failed: {e}");
                BootstrapOutcome::Failed(e.message)
            }
        }
    }
}

impl Default for BootstrapSequencer {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

fn is_unauthorized(status: Option<u16>) -> bool {
    matches!(status, Some(401) | Some(403))
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn matches_any(paths: &[String], path: &str) -> bool {
    let path = normalize(path);
    paths.iter().any(|p| normalize(p) == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use crate::session::SessionStatus;

    fn admin() -> Account {
        Account {
            id: 1,
            email: "admin@shop.test".into(),
            name: Some("Admin".into()),
            role: Some("ADMIN".into()),
        }
    }

    #[tokio::test]
    async fn test_exempt_paths_never_fetch() {
        for path in ["/auth", "/forgot", "/forgot/"] {
            let backend = MemoryBackend::new();
            backend.sign_in_as(admin());
            let sequencer = BootstrapSequencer::default();
            let mut session = SessionState::default();

            let outcome = sequencer.run(&backend, path).await;
            session.apply(outcome.clone());

            assert_eq!(outcome, BootstrapOutcome::Skipped);
            assert_eq!(backend.account_calls(), 0);
            assert!(session.account().is_none());
        }
    }

    #[tokio::test]
    async fn test_admin_path_fetches_exactly_once() {
        let backend = MemoryBackend::new();
        backend.sign_in_as(admin());
        let sequencer = BootstrapSequencer::default();
        let mut session = SessionState::default();

        assert_eq!(sequencer.render_gate("/admin", &session), RenderGate::Loading);

        let outcome = sequencer.run(&backend, "/admin").await;
        assert_eq!(outcome, BootstrapOutcome::Authenticated(admin()));
        session.apply(outcome);

        assert_eq!(sequencer.run(&backend, "/admin").await, BootstrapOutcome::AlreadyRan);
        assert_eq!(backend.account_calls(), 1);
        assert_eq!(session.account(), Some(&admin()));
        assert_eq!(sequencer.render_gate("/admin", &session), RenderGate::Router);
    }

    #[tokio::test]
    async fn test_unauthorized_is_anonymous() {
        let backend = MemoryBackend::new();
        let sequencer = BootstrapSequencer::default();
        let mut session = SessionState::default();

        session.apply(sequencer.run(&backend, "/admin/user").await);

        assert_eq!(session.status(), &SessionStatus::Anonymous);
        assert_eq!(sequencer.render_gate("/admin/user", &session), RenderGate::Router);
    }

    #[tokio::test]
    async fn test_outage_is_an_explicit_failure() {
        let backend = MemoryBackend::new();
        backend.fail_account("connection refused");
        let sequencer = BootstrapSequencer::default();
        let mut session = SessionState::default();

        session.apply(sequencer.run(&backend, "/order").await);

        assert_eq!(
            session.status(),
            &SessionStatus::Failed("connection refused".into())
        );
        assert!(session.account().is_none());
    }

    #[test]
    fn test_render_exempt_paths_render_while_pending() {
        let sequencer = BootstrapSequencer::default();
        let session = SessionState::default();
        for path in ["/", "/auth", "/forgot"] {
            assert_eq!(sequencer.render_gate(path, &session), RenderGate::Router);
        }
        for path in ["/order", "/admin", "/admin/slider"] {
            assert_eq!(sequencer.render_gate(path, &session), RenderGate::Loading);
        }
    }
}
