//! Item schema checks on untyped records.

use serde_json::Value;

use reasonbank_core::model::{Family, Item, Status};

use crate::corpus::{json_type, Collection};

/// Keys every record must carry.
pub const REQUIRED_KEYS: [&str; 8] = [
    "id",
    "text",
    "answer",
    "family",
    "difficulty",
    "status",
    "source",
    "notes",
];

/// Collect every schema violation in a record.
///
/// Clean records must also be versioned, out of draft, and have a
/// non-negative difficulty when one is set.
pub fn schema_violations(value: &Value, collection: Collection) -> Vec<String> {
    let Some(object) = value.as_object() else {
        return vec![format!("record must be an object, found {}", json_type(value))];
    };

    let mut violations = Vec::new();

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !object.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        violations.push(format!("missing required keys: {}", missing.join(", ")));
    }

    for key in ["id", "text"] {
        if let Some(field) = object.get(key) {
            match field.as_str() {
                Some(s) if !s.trim().is_empty() => {}
                Some(_) => violations.push(format!("{key} must not be blank")),
                None => violations.push(format!(
                    "{key} must be a string, found {}",
                    json_type(field)
                )),
            }
        }
    }

    if let Some(answer) = object.get("answer") {
        if !answer.is_boolean() {
            violations.push(format!(
                "answer must be a boolean, found {}",
                json_type(answer)
            ));
        }
    }

    if let Some(family) = object.get("family") {
        match family.as_str() {
            Some(name) => {
                if let Err(e) = name.parse::<Family>() {
                    violations.push(e);
                }
            }
            None => violations.push(format!(
                "family must be a string, found {}",
                json_type(family)
            )),
        }
    }

    let mut status = None;
    if let Some(field) = object.get("status") {
        match field.as_str().map(str::parse::<Status>) {
            Some(Ok(parsed)) => status = Some(parsed),
            Some(Err(e)) => violations.push(e),
            None => violations.push(format!(
                "status must be a string, found {}",
                json_type(field)
            )),
        }
    }

    if let Some(difficulty) = object.get("difficulty") {
        match difficulty {
            Value::Null => {}
            Value::Number(n) => {
                if collection.is_curated() && n.as_f64().is_some_and(|d| d < 0.0) {
                    violations.push(format!("difficulty must be non-negative, found {n}"));
                }
            }
            other => violations.push(format!(
                "difficulty must be null or a number, found {}",
                json_type(other)
            )),
        }
    }

    for key in ["source", "notes"] {
        if let Some(field) = object.get(key) {
            if !field.is_string() {
                violations.push(format!(
                    "{key} must be a string, found {}",
                    json_type(field)
                ));
            }
        }
    }

    if let Some(tags) = object.get("tags") {
        match tags.as_array() {
            Some(list) => {
                let valid = list
                    .iter()
                    .all(|tag| tag.as_str().is_some_and(|s| !s.trim().is_empty()));
                if !valid {
                    violations.push("tags must all be non-blank strings".to_string());
                }
            }
            None => violations.push(format!(
                "tags must be a list, found {}",
                json_type(tags)
            )),
        }
    }

    match object.get("version") {
        Some(version) => {
            let positive = version
                .as_u64()
                .is_some_and(|v| v > 0 && v <= u64::from(u32::MAX));
            if !positive {
                violations.push(format!("version must be a positive integer, found {version}"));
            }
        }
        None if collection.is_curated() => {
            violations.push("curated items require a version".to_string());
        }
        None => {}
    }

    if collection.is_curated() && status == Some(Status::Draft) {
        violations.push("curated items must not be in draft".to_string());
    }

    violations
}

/// Check a record and convert it into an [`Item`] when it is well formed.
pub fn parse_record(value: &Value, collection: Collection) -> Result<Item, Vec<String>> {
    let violations = schema_violations(value, collection);
    if !violations.is_empty() {
        return Err(violations);
    }
    serde_json::from_value(value.clone()).map_err(|e| vec![format!("record does not decode: {e}")])
}
