//! # Admin core — framework-independent state for the storefront admin console
//!
//! Everything here is plain Rust with no UI dependency, so it can be unit tested
//! natively and shared by every Dioxus front-end.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire records and the `{statusCode, message, data}` envelope. |
//! | [`schema`] | Static field declarations driving validation and rendering. |
//! | [`entity`] | The [`Entity`] trait and the schemas of vouchers, users, sliders, categories. |
//! | [`draft`] | Editable copies of records and their payload conversion. |
//! | [`form`] | [`EntityFormController`], the create/update dialog state machine. |
//! | [`gateway`] | [`SubmissionGateway`] and the [`EntityService`] / [`Notifier`] seams. |
//! | [`session`] | [`SessionState`] and the [`AccountService`] seam. |
//! | [`guard`] | [`RouteGuard`] for the admin subtree. |
//! | [`bootstrap`] | [`BootstrapSequencer`], the one-shot startup account fetch. |
//! | [`config`] | [`AdminConfig`], parsed from `admin.toml`. |

pub mod bootstrap;
pub mod config;
pub mod draft;
pub mod entity;
pub mod error;
pub mod form;
pub mod gateway;
pub mod guard;
pub mod models;
pub mod schema;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(test)]
mod testing;

pub use bootstrap::{BootstrapOutcome, BootstrapSequencer, RenderGate};
pub use config::AdminConfig;
pub use draft::{Draft, Payload};
pub use entity::Entity;
pub use error::{ConfigError, FormError, SubmitError, TransportError, ValidationError};
pub use form::{EntityFormController, FormMode, Submission, SubmitOutcome};
pub use gateway::{EntityService, Notifier, SubmissionGateway, SubmissionResult};
pub use guard::{GuardDecision, RouteGuard};
pub use models::{Account, ApiResponse, Category, Order, RecordId, Slider, User, Voucher};
pub use schema::{FieldKind, FieldSpec, FieldValue, FormSchema};
pub use session::{AccountService, SessionState, SessionStatus};
