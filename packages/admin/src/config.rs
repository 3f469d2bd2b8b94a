//! # Application configuration — `admin.toml`
//!
//! The web binary embeds an `admin.toml` and parses it with
//! [`AdminConfig::from_toml`]. Every section and key is optional; a missing or empty
//! file is equivalent to [`AdminConfig::default`], which matches production.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # REST backend origin
//!
//! [session]
//! auth_path = "/auth"                  # where the route guard redirects
//! fetch_exempt = ["/auth", "/forgot"]  # no account fetch on these paths
//! render_exempt = ["/auth", "/forgot", "/"]  # rendered while the fetch is pending
//!
//! [notifications]
//! dismiss_after_secs = 4               # 0 keeps toasts until dismissed
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// REST backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Session bootstrap and guard paths.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_auth_path")]
    pub auth_path: String,
    #[serde(default = "default_fetch_exempt")]
    pub fetch_exempt: Vec<String>,
    #[serde(default = "default_render_exempt")]
    pub render_exempt: Vec<String>,
}

/// Toast behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_secs: u32,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_auth_path() -> String {
    "/auth".to_string()
}

fn default_fetch_exempt() -> Vec<String> {
    vec!["/auth".to_string(), "/forgot".to_string()]
}

fn default_render_exempt() -> Vec<String> {
    vec!["/auth".to_string(), "/forgot".to_string(), "/".to_string()]
}

fn default_dismiss_after() -> u32 {
    4
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_path: default_auth_path(),
            fetch_exempt: default_fetch_exempt(),
            render_exempt: default_render_exempt(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_secs: default_dismiss_after(),
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
