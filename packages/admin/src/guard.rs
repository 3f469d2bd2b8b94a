//! Route guard for the admin subtree.

use crate::config::SessionConfig;
use crate::session::SessionState;

/// What a protected subtree should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped children unchanged.
    Render,
    /// Render a redirect to the given path instead of the children.
    Redirect(String),
}

/// Gates a subtree on the presence of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    auth_path: String,
}

impl RouteGuard {
    pub fn new(auth_path: impl Into<String>) -> Self {
        Self {
            auth_path: auth_path.into(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.auth_path.clone())
    }

    pub fn auth_path(&self) -> &str {
        &self.auth_path
    }

    pub fn decide(&self, session: &SessionState) -> GuardDecision {
        if session.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect(self.auth_path.clone())
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::BootstrapOutcome;
    use crate::models::Account;

    #[test]
    fn test_absent_session_redirects_to_auth() {
        let guard = RouteGuard::default();
        for state in [
            SessionState::default(),
            {
                let mut s = SessionState::default();
                s.apply(BootstrapOutcome::Failed("boom".into()));
                s
            },
            {
                let mut s = SessionState::default();
                s.apply(BootstrapOutcome::Anonymous);
                s
            },
        ] {
            assert_eq!(guard.decide(&state), GuardDecision::Redirect("/auth".into()));
        }
    }

    #[test]
    fn test_present_session_renders_children() {
        let guard = RouteGuard::default();
        let mut state = SessionState::default();
        state.sign_in(Account {
            id: 3,
            email: "staff@shop.test".into(),
            name: None,
            role: None,
        });
        assert_eq!(guard.decide(&state), GuardDecision::Render);
    }
}
