//! Load-time normalization of raw documents
//!
//! Data files written by older versions may contain bare-string project
//! entries, records with missing or unrecognized fields, or junk shapes.
//! This module upgrades a freshly parsed document so that every stored
//! project satisfies the model invariants:
//! - mappings with a `name` field are kept; missing fields are
//!   backfilled and unrecognized field values are coerced to defaults,
//!   never rejected wholesale
//! - bare strings are promoted to minimal project records
//! - any other entry shape is dropped with a warning
//! - absent settings are replaced with defaults; present settings are
//!   taken field-by-field with unrecognized values coerced to defaults
//!
//! A stray value inside one entry must never discard the rest of the
//! document: the full-replacement fallback is reserved for files that do
//! not parse as JSON objects at all.
//!
//! The pass is idempotent: normalizing an already-normal document is the
//! identity.

use crate::model::{
    AppData, DEFAULT_CATEGORY, DEFAULT_EMOJI, HistoryEntry, Project, Settings,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// The root document as parsed from disk, before normalization
///
/// Projects and settings stay as raw JSON values here so that one bad
/// field cannot fail the whole parse.
#[derive(Debug, Default, Deserialize)]
pub struct RawAppData {
    #[serde(default)]
    pub projects: Vec<Value>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Run the normalization pass over a raw document
pub fn normalize(raw: RawAppData) -> AppData {
    let mut projects = Vec::with_capacity(raw.projects.len());
    for entry in raw.projects {
        match entry {
            Value::String(name) => {
                tracing::info!(%name, "promoting legacy string project to record");
                projects.push(Project::new(
                    name,
                    DEFAULT_CATEGORY,
                    None,
                    crate::model::Recurrence::None,
                ));
            }
            Value::Object(map) if map.contains_key("name") => {
                if let Some(project) = project_from_map(map) {
                    projects.push(project);
                }
            }
            other => {
                tracing::warn!(entry = %other, "skipping invalid project entry");
            }
        }
    }

    AppData {
        projects,
        settings: settings_from_value(raw.settings),
        extra: raw.extra,
    }
}

/// Build a project from a name-bearing mapping, field by field
///
/// Only a non-text name drops the entry; every other unrecognized value
/// is coerced to its default so the record survives.
fn project_from_map(mut map: Map<String, Value>) -> Option<Project> {
    let name = match map.remove("name") {
        Some(Value::String(name)) => name,
        other => {
            tracing::warn!(name = ?other, "skipping project entry with non-text name");
            return None;
        }
    };

    let due_date = match map.remove("due_date") {
        Some(Value::String(raw)) => crate::validation::parse_due_date(&raw),
        None | Some(Value::Null) => None,
        Some(other) => {
            tracing::warn!(%name, value = %other, "due date is not text, storing empty");
            None
        }
    };

    Some(Project {
        category: text_or(&name, "category", map.remove("category"), DEFAULT_CATEGORY),
        status: field_or_default(&name, "status", map.remove("status")),
        emoji: text_or(&name, "emoji", map.remove("emoji"), DEFAULT_EMOJI),
        due_date,
        recurrence: field_or_default(&name, "recurrence", map.remove("recurrence")),
        history: history_entries(&name, map.remove("history")),
        extra: map,
        name,
    })
}

/// Take a text field, falling back to a default for missing or
/// non-text values
fn text_or(name: &str, field: &str, value: Option<Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s,
        None => default.to_string(),
        Some(other) => {
            tracing::warn!(%name, field, value = %other, "unrecognized value, using default");
            default.to_string()
        }
    }
}

/// Deserialize a typed field, falling back to its default on any
/// unrecognized value
fn field_or_default<T: DeserializeOwned + Default>(
    name: &str,
    field: &str,
    value: Option<Value>,
) -> T {
    let Some(value) = value else {
        return T::default();
    };
    serde_json::from_value(value).unwrap_or_else(|err| {
        tracing::warn!(%name, field, %err, "unrecognized value, using default");
        T::default()
    })
}

/// Keep the history entries that parse; drop the rest with a warning
fn history_entries(name: &str, value: Option<Value>) -> Vec<HistoryEntry> {
    match value {
        Some(Value::Array(entries)) => entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(%name, %err, "dropping malformed history entry");
                    None
                }
            })
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(other) => {
            tracing::warn!(%name, value = %other, "history is not a list, storing empty");
            Vec::new()
        }
    }
}

/// Normalize the settings mapping field by field
///
/// Settings are never validated as a whole: an unrecognized theme or
/// font scale falls back to its default, unknown keys are kept in the
/// extras, and a missing or non-mapping value yields the defaults.
fn settings_from_value(value: Option<Value>) -> Settings {
    let Some(value) = value else {
        return Settings::default();
    };
    let Value::Object(mut map) = value else {
        tracing::warn!(value = %value, "settings is not a mapping, using defaults");
        return Settings::default();
    };

    let notifications = match map.remove("notifications") {
        Some(Value::Bool(enabled)) => enabled,
        None => true,
        Some(other) => {
            tracing::warn!(value = %other, "notifications is not a boolean, using default");
            true
        }
    };

    Settings {
        theme: field_or_default("settings", "theme", map.remove("theme")),
        notifications,
        font_scale: field_or_default("settings", "font_scale", map.remove("font_scale")),
        extra: map,
    }
}
