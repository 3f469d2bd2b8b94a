//! # Static field schemas
//!
//! A [`FormSchema`] is the single description of an entity's editable fields. The
//! form controller uses it to seed drafts, validate them and build payloads; the
//! rendering layer uses it to pick a widget and a label for each field.
//!
//! Schemas are declared as `static` items with the `const` builder methods on
//! [`FieldSpec`]:
//!
//! ```
//! use admin::schema::{FieldSpec, FormSchema};
//!
//! static TAGS: FormSchema = FormSchema::new(&[
//!     FieldSpec::text("name", "Name").required("Please enter a name"),
//!     FieldSpec::number("position", "Position").min(0.0),
//! ]);
//! assert_eq!(TAGS.fields().len(), 2);
//! ```

use chrono::{DateTime, Utc};

use crate::error::ValidationError;

/// Widget and value type of a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    LongText,
    Password,
    Number,
    Date,
    Bool,
    /// One of a fixed set of string options.
    Choice(&'static [&'static str]),
}

/// When a field must hold a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    Required,
    /// Required when creating, optional when editing (e.g. passwords).
    RequiredOnCreate,
}

/// Editable value of a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Bool(bool),
}

impl FieldValue {
    /// Whether the value counts as "not filled in" for a required field.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(n) => !n.is_finite(),
            FieldValue::Date(_) | FieldValue::Bool(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(date) => Some(*date),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Extra check run on a present value. Returns the error message on failure.
pub type Validator = fn(&FieldValue) -> Result<(), &'static str>;

/// Declaration of one editable field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    /// Wire name (camelCase, as in the JSON payload).
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    /// Message shown when a required value is missing.
    pub message: &'static str,
    pub min: Option<f64>,
    pub validator: Option<Validator>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            requirement: Requirement::Optional,
            message: "",
            min: None,
            validator: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub const fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Bool)
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    pub const fn required(mut self, message: &'static str) -> Self {
        self.requirement = Requirement::Required;
        self.message = message;
        self
    }

    pub const fn required_on_create(mut self, message: &'static str) -> Self {
        self.requirement = Requirement::RequiredOnCreate;
        self.message = message;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn is_required(&self, creating: bool) -> bool {
        match self.requirement {
            Requirement::Optional => false,
            Requirement::Required => true,
            Requirement::RequiredOnCreate => creating,
        }
    }

    /// Checks a single field value against this declaration.
    pub fn check(&self, value: Option<&FieldValue>, creating: bool) -> Result<(), ValidationError> {
        let value = value.filter(|v| !v.is_blank());
        let Some(value) = value else {
            if self.is_required(creating) {
                return Err(ValidationError::new(self.name, self.missing_message()));
            }
            return Ok(());
        };

        if let (Some(min), Some(n)) = (self.min, value.as_number()) {
            if n < min {
                return Err(ValidationError::new(
                    self.name,
                    format!("{} must be at least {}", self.label, min),
                ));
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|message| ValidationError::new(self.name, message))?;
        }

        Ok(())
    }

    fn missing_message(&self) -> String {
        if self.message.is_empty() {
            format!("{} is required", self.label)
        } else {
            self.message.to_string()
        }
    }
}

/// Ordered field declarations for one entity.
#[derive(Debug)]
pub struct FormSchema {
    fields: &'static [FieldSpec],
}

impl FormSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Validator for email-shaped text.
pub fn email_shape(value: &FieldValue) -> Result<(), &'static str> {
    match value.as_text() {
        Some(text) if text.contains('@') => Ok(()),
        _ => Err("Please enter a valid email"),
    }
}
