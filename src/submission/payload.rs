use serde_json::{Map, Value};

use crate::models::form::RESERVED_KEYS;

pub const MAX_FIELDS: usize = 100;
pub const MAX_FIELD_NAME_LEN: usize = 128;

/// Check a raw form payload against schema v1 and return the fields to
/// store. Reserved keys are dropped, not rejected.
pub fn normalize(raw: Value) -> Result<Map<String, Value>, String> {
    let Value::Object(mut fields) = raw else {
        return Err("Form data must be a JSON object".to_string());
    };

    let dropped: Vec<&str> = RESERVED_KEYS
        .iter()
        .copied()
        .filter(|key| fields.remove(*key).is_some())
        .collect();
    if !dropped.is_empty() {
        tracing::debug!("Dropped server-managed keys from form payload: {dropped:?}");
    }

    if fields.len() > MAX_FIELDS {
        return Err(format!("Form data has more than {MAX_FIELDS} fields"));
    }

    for key in fields.keys() {
        if key.trim().is_empty() {
            return Err("Form field names must not be empty".to_string());
        }
        if key.len() > MAX_FIELD_NAME_LEN {
            return Err(format!(
                "Form field name exceeds {MAX_FIELD_NAME_LEN} bytes"
            ));
        }
    }

    Ok(fields)
}
