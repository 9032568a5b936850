//! Blob document model and DTOs.

use portfolio_core::form;
use portfolio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// Keys that never end up in [`Blob::extra`]: they are either generated by
/// the database or consumed by the HTTP layer.
pub const RESERVED_KEYS: &[&str] = &[
    "id",
    "_id",
    "_method",
    "createdAt",
    "updatedAt",
    "created_at",
    "updated_at",
];

/// A blob row from the `blobs` table.
///
/// Fields the schema does not name are kept in `extra` and flattened into
/// the serialized document.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blob {
    pub id: DbId,
    pub name: Option<String>,
    pub badge: Option<i32>,
    pub dob: Date,
    pub isloved: bool,
    #[serde(flatten)]
    pub extra: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new blob.
///
/// `dob` defaults to the current date and `isloved` to `false` if omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlob {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form::integer")]
    pub badge: Option<i32>,
    #[serde(default, deserialize_with = "form::date")]
    pub dob: Option<Date>,
    #[serde(default, deserialize_with = "form::checkbox")]
    pub isloved: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// DTO for updating an existing blob. All fields are optional; extra keys
/// are merged into the stored document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlob {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "form::clearable_integer")]
    pub badge: Option<Option<i32>>,
    #[serde(default, deserialize_with = "form::date")]
    pub dob: Option<Date>,
    #[serde(default, deserialize_with = "form::checkbox")]
    pub isloved: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Drop reserved keys from user-submitted extra fields.
pub fn sanitize_extra(extra: &Map<String, Value>) -> Map<String, Value> {
    extra
        .iter()
        .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_coerces_checkbox_and_keeps_extra_fields() {
        let input: CreateBlob =
            serde_urlencoded::from_str("name=Bob&badge=7&dob=2001-02-03&isloved=on&colour=blue")
                .unwrap();
        assert_eq!(input.name.as_deref(), Some("Bob"));
        assert_eq!(input.badge, Some(7));
        assert_eq!(input.dob, chrono::NaiveDate::from_ymd_opt(2001, 2, 3));
        assert_eq!(input.isloved, Some(true));
        assert_eq!(input.extra.get("colour"), Some(&Value::from("blue")));
    }

    #[test]
    fn update_checkbox_off_is_false() {
        let input: UpdateBlob = serde_urlencoded::from_str("isloved=off").unwrap();
        assert_eq!(input.isloved, Some(false));
        assert!(input.name.is_none());
        assert!(input.extra.is_empty());
    }

    #[test]
    fn update_blank_badge_clears_it() {
        let input: UpdateBlob = serde_urlencoded::from_str("name=Bob&badge=&dob=").unwrap();
        assert_eq!(input.badge, Some(None));
        assert_eq!(input.dob, None);
        assert!(input.extra.is_empty());
    }

    #[test]
    fn json_body_with_native_types() {
        let input: CreateBlob = serde_json::from_value(serde_json::json!({
            "name": "Ann",
            "badge": 2,
            "isloved": true,
            "tags": ["x"],
        }))
        .unwrap();
        assert_eq!(input.badge, Some(2));
        assert_eq!(input.isloved, Some(true));
        assert_eq!(input.extra.get("tags"), Some(&serde_json::json!(["x"])));
    }

    #[test]
    fn reserved_keys_are_dropped() {
        let mut extra = Map::new();
        extra.insert("id".into(), Value::from(9));
        extra.insert("_method".into(), Value::from("PUT"));
        extra.insert("createdAt".into(), Value::from("yesterday"));
        extra.insert("created_at".into(), Value::from("x"));
        extra.insert("updated_at".into(), Value::from("y"));
        extra.insert("mood".into(), Value::from("happy"));

        let cleaned = sanitize_extra(&extra);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned.get("mood"), Some(&Value::from("happy")));
    }
}
