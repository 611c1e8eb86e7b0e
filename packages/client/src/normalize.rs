// ABOUTME: Defensive normalization of server records
// ABOUTME: Maps partial or malformed wire payloads onto entity types with safe defaults

use chrono::{DateTime, Utc};
use peachy_core::{normalize_label_name, Label, Task};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Convert a raw task record into a `Task`, defaulting every optional or
/// malformed field. A record with neither `id` nor `_id` is invalid.
pub fn normalize_task(raw: &Value) -> ApiResult<Task> {
    let id = extract_id(raw).ok_or_else(|| ApiError::invalid("task record missing id"))?;

    Ok(Task {
        id,
        user_id: string_field(raw, "user_id"),
        title: string_field(raw, "title"),
        description: raw
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        priority: raw
            .get("priority")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        deadline: string_field(raw, "deadline"),
        completed: raw.get("completed").and_then(Value::as_bool).unwrap_or(false),
        label_ids: raw
            .get("label_ids")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(id_string).collect())
            .unwrap_or_default(),
        created_at: timestamp_field(raw, "created_at"),
        updated_at: timestamp_field(raw, "updated_at"),
    })
}

/// Convert a raw label record into a `Label`. A missing `name_normalized`
/// is recomputed from `name` so the uniqueness key is always populated.
pub fn normalize_label(raw: &Value) -> ApiResult<Label> {
    let id = extract_id(raw).ok_or_else(|| ApiError::invalid("label record missing id"))?;
    let name = string_field(raw, "name");
    let name_normalized = raw
        .get("name_normalized")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| normalize_label_name(&name));

    Ok(Label {
        id,
        user_id: string_field(raw, "user_id"),
        name,
        name_normalized,
        color: raw.get("color").and_then(Value::as_str).map(str::to_string),
        created_at: timestamp_field(raw, "created_at"),
    })
}

/// Server id, falling back to `_id`; numeric ids are stringified.
fn extract_id(raw: &Value) -> Option<String> {
    raw.get("id").and_then(id_string).or_else(|| raw.get("_id").and_then(id_string))
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(raw: &Value, field: &str) -> String {
    raw.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn timestamp_field(raw: &Value, field: &str) -> Option<DateTime<Utc>> {
    raw.get(field)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}
