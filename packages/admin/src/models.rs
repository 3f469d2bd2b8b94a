//! # Wire models for the storefront backend
//!
//! Every type here mirrors a JSON document exchanged with the REST backend under
//! `/api/v1`. Field names are camelCase on the wire, so each struct carries
//! `#[serde(rename_all = "camelCase")]`.
//!
//! ## Envelope
//!
//! The backend wraps every answer in [`ApiResponse`]:
//! `{ statusCode, error, message, data }`. A write succeeded exactly when `data` is
//! present. `message` is a plain string for most errors but a list of strings for
//! bean-validation failures; both shapes deserialize into a single `String`.
//!
//! ## Records
//!
//! | Struct | Resource | Notes |
//! |--------|----------|-------|
//! | [`Account`] | `/auth/account` | The signed-in user held in the session. |
//! | [`Voucher`] | `/vouchers` | Discount code with a validity window. |
//! | [`User`] | `/users` | Managed user; the password only ever travels in payloads. |
//! | [`Slider`] | `/sliders` | Home page banner. |
//! | [`Category`] | `/categories` | Product category. |
//! | [`Order`] | `/orders` | Read-only, listed on the storefront order page. |
//!
//! Dates stay as the backend's strings on records; [`crate::draft`] converts them
//! into editable values and back.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier shared by every record.
pub type RecordId = i64;

/// Standard response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "message_text")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            status_code: Some(200),
            error: None,
            message: None,
            data: Some(data),
        }
    }

    /// An envelope without data, as returned for rejected writes.
    pub fn rejected(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status_code),
            error: None,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Whether the backend reported HTTP 200 in the envelope.
    pub fn is_ok_status(&self) -> bool {
        self.status_code == Some(200)
    }
}

fn message_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Message {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<Message>::deserialize(deserializer)? {
        Some(Message::One(text)) => Some(text),
        Some(Message::Many(lines)) => Some(lines.join("; ")),
        None => None,
    })
}

fn role_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Role {
        Name(String),
        Object { name: String },
    }

    Ok(Option::<Role>::deserialize(deserializer)?.map(|role| match role {
        Role::Name(name) | Role::Object { name } => name,
    }))
}

/// The authenticated account stored in the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "role_name")]
    pub role: Option<String>,
}

impl Account {
    /// Name shown in headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: a bearer token and the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: Option<Account>,
}

/// Self-service sign-up posted to `/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Password recovery request posted to `/auth/forgot`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// Discount voucher.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Voucher {
    pub id: Option<RecordId>,
    pub voucher_code: String,
    pub voucher_value: f64,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub active: bool,
    pub description: Option<String>,
}

/// User as managed from the admin pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(deserialize_with = "role_name")]
    pub role: Option<String>,
    pub enabled: bool,
}

/// Home page banner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slider {
    pub id: Option<RecordId>,
    pub title: String,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub active: bool,
}

/// Product category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: Option<RecordId>,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

/// Customer order, read-only on the storefront.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: Option<RecordId>,
    pub total_price: f64,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"statusCode":200,"message":"Get account message","data":{"id":7,"email":"a@b.c","name":"Ann","role":"ADMIN"}}"#;
        let res: ApiResponse<Account> = serde_json::from_str(json).unwrap();
        assert!(res.is_ok_status());
        let account = res.data.unwrap();
        assert_eq!(account.display_name(), "Ann");
        assert!(account.is_admin());
    }

    #[test]
    fn test_envelope_message_list_is_joined() {
        let json = r#"{"statusCode":400,"error":"Bad Request","message":["code is blank","value is negative"],"data":null}"#;
        let res: ApiResponse<Voucher> = serde_json::from_str(json).unwrap();
        assert!(res.data.is_none());
        assert_eq!(
            res.message.as_deref(),
            Some("code is blank; value is negative")
        );
    }

    #[test]
    fn test_envelope_for_payload_without_default() {
        let json = r#"{"statusCode":201,"message":"Login success","data":{"access_token":"abc","user":null}}"#;
        let res: ApiResponse<LoginResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(res.data.unwrap().access_token, "abc");

        let res: ApiResponse<Account> =
            serde_json::from_str(r#"{"statusCode":401,"message":"Unauthorized"}"#).unwrap();
        assert!(res.data.is_none());
        assert_eq!(res.message.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_envelope_without_message() {
        let res: ApiResponse<Voucher> = serde_json::from_str(r#"{"statusCode":500}"#).unwrap();
        assert!(res.message.is_none());
        assert!(res.data.is_none());
        assert!(!res.is_ok_status());
    }

    #[test]
    fn test_role_object_is_flattened() {
        let json = r#"{"id":1,"email":"x@y.z","role":{"id":2,"name":"USER"}}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.role.as_deref(), Some("USER"));
        assert!(!account.is_admin());
        assert_eq!(account.display_name(), "x@y.z");
    }

    #[test]
    fn test_voucher_defaults_for_missing_fields() {
        let voucher: Voucher = serde_json::from_str(r#"{"id":3,"voucherCode":"SALE"}"#).unwrap();
        assert_eq!(voucher.id, Some(3));
        assert_eq!(voucher.voucher_code, "SALE");
        assert!(!voucher.active);
        assert!(voucher.start_date.is_none());
    }
}
