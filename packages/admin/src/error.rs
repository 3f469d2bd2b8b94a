//! Error types shared by the form controller, the gateway and the REST client.

use thiserror::Error;

/// Generic message used when the server rejects a write without saying why.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// A required field is missing or a field value is out of bounds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Network, HTTP or decoding failure reported by a service implementation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Why a submission attempt did not produce a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),

    /// The server answered with an envelope that carries no data.
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    pub fn message(&self) -> &str {
        match self {
            SubmitError::Transport(message) | SubmitError::Rejected(message) => message,
        }
    }
}

impl From<TransportError> for SubmitError {
    fn from(value: TransportError) -> Self {
        SubmitError::Transport(value.message)
    }
}

/// Misuse of the form controller, or a draft that failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    Busy,

    #[error("The form is not open")]
    Closed,
}

/// Malformed configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
