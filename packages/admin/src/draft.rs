//! # Form drafts
//!
//! A [`Draft`] is the client-local, editable copy of at most one record. It is
//! either bound to a record id (editing) or unbound (creating), and holds one
//! [`FieldValue`] per filled-in schema field.
//!
//! ## Conversions
//!
//! - **Into a draft**: [`Draft::from_record`] serialises the record to JSON and
//!   reads each schema field by its wire name. Date strings from the backend
//!   (RFC 3339 instants, naive date-times or plain `YYYY-MM-DD` dates) become
//!   [`FieldValue::Date`].
//! - **Out of a draft**: [`Draft::to_payload`] produces the JSON object sent to the
//!   backend. Dates become absolute UTC timestamps with millisecond precision
//!   (`2024-05-01T00:00:00.000Z`), integral numbers are sent as integers, and
//!   blank optional fields are left out.
//! - **Widget text**: [`parse_input`] and [`input_text`] convert between field
//!   values and the strings HTML inputs work with.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::entity::Entity;
use crate::models::RecordId;
use crate::schema::{FieldKind, FieldSpec, FieldValue, FormSchema};

/// JSON object sent to create/update endpoints.
pub type Payload = Map<String, Value>;

/// Editable copy of zero or one record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    binding: Option<RecordId>,
    values: BTreeMap<&'static str, FieldValue>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a draft from an existing record, bound to its id.
    pub fn from_record<E: Entity>(record: &E) -> Self {
        let mut draft = Self {
            binding: record.id(),
            values: BTreeMap::new(),
        };

        let json = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                tracing::warn!("{} record did not serialize to an object", E::KIND);
                return draft;
            }
        };

        for spec in E::schema().fields() {
            if let Some(value) = json.get(spec.name).and_then(|v| value_from_json(spec.kind, v)) {
                draft.values.insert(spec.name, value);
            }
        }
        draft
    }

    /// Id of the record being edited, `None` when creating.
    pub fn binding(&self) -> Option<RecordId> {
        self.binding
    }

    pub fn is_empty(&self) -> bool {
        self.binding.is_none() && self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    /// Drops the binding and every value.
    pub fn clear(&mut self) {
        self.binding = None;
        self.values.clear();
    }

    /// Builds the wire payload for `schema`. Blank values are omitted.
    pub fn to_payload(&self, schema: &FormSchema) -> Payload {
        let mut payload = Payload::new();
        if let Some(id) = self.binding {
            payload.insert("id".to_string(), Value::from(id));
        }
        for spec in schema.fields() {
            let Some(value) = self.values.get(spec.name).filter(|v| !v.is_blank()) else {
                continue;
            };
            payload.insert(spec.name.to_string(), value_to_json(value));
        }
        payload
    }
}

fn value_from_json(kind: FieldKind, json: &Value) -> Option<FieldValue> {
    match (kind, json) {
        (_, Value::Null) => None,
        (FieldKind::Number, v) => v.as_f64().map(FieldValue::Number),
        (FieldKind::Bool, v) => v.as_bool().map(FieldValue::Bool),
        (FieldKind::Date, Value::String(s)) => parse_wire_date(s).map(FieldValue::Date),
        (FieldKind::Date, _) => None,
        (_, Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (_, Value::Number(n)) => Some(FieldValue::Text(n.to_string())),
        (_, Value::Bool(b)) => Some(FieldValue::Text(b.to_string())),
        (_, _) => None,
    }
}

fn value_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::String(text.trim().to_string()),
        FieldValue::Number(n) => number_to_json(*n),
        FieldValue::Date(date) => Value::String(format_timestamp(date)),
        FieldValue::Bool(b) => Value::Bool(*b),
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Parses a date as sent by the backend.
pub fn parse_wire_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Absolute timestamp string, e.g. `2024-05-01T00:00:00.000Z`.
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Converts the text of an HTML input into a field value.
///
/// Returns `None` for blank input or text that does not parse for the field's kind.
/// Text is kept as typed; surrounding whitespace is dropped in [`Draft::to_payload`].
pub fn parse_input(spec: &FieldSpec, input: &str) -> Option<FieldValue> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match spec.kind {
        FieldKind::Number => trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number),
        FieldKind::Date => parse_wire_date(trimmed).map(FieldValue::Date),
        FieldKind::Bool => match trimmed {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => None,
        },
        FieldKind::Text | FieldKind::LongText | FieldKind::Password | FieldKind::Choice(_) => {
            Some(FieldValue::Text(input.to_string()))
        }
    }
}

/// Text shown in an HTML input or a table cell for a value.
pub fn input_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        FieldValue::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Voucher;
    use chrono::TimeZone;

    fn voucher() -> Voucher {
        Voucher {
            id: Some(12),
            voucher_code: "SPRING".into(),
            voucher_value: 15.0,
            start_date: Some("2024-03-01T00:00:00Z".into()),
            end_date: Some("2024-03-31".into()),
            active: true,
            description: None,
        }
    }

    #[test]
    fn test_from_record_converts_dates() {
        let draft = Draft::from_record(&voucher());
        assert_eq!(draft.binding(), Some(12));
        assert_eq!(
            draft.get("voucherCode"),
            Some(&FieldValue::Text("SPRING".into()))
        );
        assert_eq!(
            draft.get("startDate"),
            Some(&FieldValue::Date(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()))
        );
        assert_eq!(
            draft.get("endDate"),
            Some(&FieldValue::Date(Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap()))
        );
        assert!(draft.get("description").is_none());
    }

    #[test]
    fn test_payload_uses_timestamp_strings() {
        let draft = Draft::from_record(&voucher());
        let payload = draft.to_payload(<Voucher as Entity>::schema());
        assert_eq!(payload["id"], Value::from(12));
        assert_eq!(payload["startDate"], Value::from("2024-03-01T00:00:00.000Z"));
        assert_eq!(payload["endDate"], Value::from("2024-03-31T00:00:00.000Z"));
        assert_eq!(payload["voucherValue"], Value::from(15));
        assert_eq!(payload["active"], Value::from(true));
        assert!(!payload.contains_key("description"));
    }

    #[test]
    fn test_fractional_numbers_stay_floats() {
        assert_eq!(number_to_json(2.5), Value::from(2.5));
        assert_eq!(number_to_json(-3.0), Value::from(-3));
    }

    #[test]
    fn test_clear_releases_binding() {
        let mut draft = Draft::from_record(&voucher());
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, Draft::new());
    }

    #[test]
    fn test_parse_input_by_kind() {
        let schema = <Voucher as Entity>::schema();
        let value = schema.field("voucherValue").unwrap();
        let start = schema.field("startDate").unwrap();
        let code = schema.field("voucherCode").unwrap();

        assert_eq!(parse_input(value, "12"), Some(FieldValue::Number(12.0)));
        assert_eq!(parse_input(value, "abc"), None);
        for overflow in ["inf", "-infinity", "NaN", "1e400"] {
            assert_eq!(parse_input(value, overflow), None, "{overflow}");
        }
        assert_eq!(
            parse_input(start, "2024-06-02"),
            Some(FieldValue::Date(Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap()))
        );
        assert_eq!(parse_input(code, "  "), None);
        assert_eq!(
            input_text(&parse_input(start, "2024-06-02").unwrap()),
            "2024-06-02"
        );
    }
}
