use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use sqlx::types::Json;
use uuid::Uuid;

/// Current version of the accepted form payload schema.
pub const FORM_SCHEMA_VERSION: i32 = 1;

/// Keys the server owns on a stored form document. Clients cannot set them.
pub const RESERVED_KEYS: [&str; 4] = ["_id", "checked", "created_at", "schema_version"];

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FormSubmission {
    pub id: Uuid,
    pub data: Json<Map<String, Value>>,
    pub checked: bool,
    pub schema_version: i32,
    pub created_at: DateTime<Utc>,
}

/// Serialized as one flat document: client fields alongside `_id`,
/// `checked`, `created_at` and `schema_version`.
impl Serialize for FormSubmission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.data.len() + 4))?;
        map.serialize_entry("_id", &self.id)?;
        for (key, value) in self.data.iter() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("checked", &self.checked)?;
        map.serialize_entry("created_at", &self.created_at)?;
        map.serialize_entry("schema_version", &self.schema_version)?;
        map.end()
    }
}
