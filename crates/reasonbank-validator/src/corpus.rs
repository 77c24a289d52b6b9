//! Item collections as loaded from disk.
//!
//! Records are kept as untyped JSON so that each schema problem can be
//! reported against the record it came from instead of failing the whole
//! file on the first type mismatch.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use reasonbank_core::model::Item;

/// Default file name of the freshly generated collection.
pub const RAW_FILE: &str = "items_raw.json";
/// Default file name of the curated collection.
pub const CLEAN_FILE: &str = "items_clean.json";

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Freshly generated; drafts allowed.
    Raw,
    /// Curated; every record must be versioned and out of draft.
    Clean,
}

impl Collection {
    pub fn is_curated(&self) -> bool {
        matches!(self, Collection::Clean)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Raw => write!(f, "raw"),
            Collection::Clean => write!(f, "clean"),
        }
    }
}

/// A record borrowed from a corpus, with its position.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub collection: Collection,
    pub index: usize,
    pub value: &'a Value,
}

impl<'a> Record<'a> {
    /// The record's `id`, if it is a string.
    pub fn id(&self) -> Option<&'a str> {
        self.value.get("id").and_then(Value::as_str)
    }

    /// Human-readable location, e.g. `raw[3] (id 1f0c...)`.
    pub fn locator(&self) -> String {
        match self.id() {
            Some(id) => format!("{}[{}] (id {id})", self.collection, self.index),
            None => format!("{}[{}]", self.collection, self.index),
        }
    }
}

/// The raw and clean collections, in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub raw: Vec<Value>,
    pub clean: Vec<Value>,
}

impl Corpus {
    /// Load both collections from explicit paths.
    pub fn load(raw_path: &Path, clean_path: &Path) -> Result<Self> {
        let raw = load_collection(raw_path)?;
        let clean = load_collection(clean_path)?;
        tracing::info!(
            raw = raw.len(),
            clean = clean.len(),
            "loaded item collections"
        );
        Ok(Self { raw, clean })
    }

    /// Load `items_raw.json` and `items_clean.json` from a directory.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            anyhow::bail!("not a directory: {}", dir.display());
        }
        Self::load(&dir.join(RAW_FILE), &dir.join(CLEAN_FILE))
    }

    /// Build a corpus from typed items.
    pub fn from_items(raw: &[Item], clean: &[Item]) -> Result<Self> {
        let to_values = |items: &[Item]| -> Result<Vec<Value>> {
            items
                .iter()
                .map(|item| serde_json::to_value(item).context("failed to serialize item"))
                .collect()
        };
        Ok(Self {
            raw: to_values(raw)?,
            clean: to_values(clean)?,
        })
    }

    /// Every record, raw collection first.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        let raw = self.raw.iter().enumerate().map(|(index, value)| Record {
            collection: Collection::Raw,
            index,
            value,
        });
        let clean = self.clean.iter().enumerate().map(|(index, value)| Record {
            collection: Collection::Clean,
            index,
            value,
        });
        raw.chain(clean)
    }

    pub fn len(&self) -> usize {
        self.raw.len() + self.clean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read a JSON array of item records.
pub fn load_collection(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read item collection: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON: {}", path.display()))?;

    match value {
        Value::Array(records) => Ok(records),
        other => anyhow::bail!(
            "item collection {} must be a JSON array, found {}",
            path.display(),
            json_type(&other)
        ),
    }
}

/// Short JSON type name for messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Write items as a pretty JSON array.
pub fn save_collection(items: &[Item], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("failed to serialize items")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write item collection to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasonbank_core::generator::arithmetic;
    use serde_json::json;

    #[test]
    fn records_are_ordered_raw_then_clean() {
        let corpus = Corpus {
            raw: vec![json!({"id": "r0"}), json!({"id": "r1"})],
            clean: vec![json!({"text": "no id"})],
        };
        let records: Vec<_> = corpus.records().collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].collection, Collection::Raw);
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].locator(), "raw[1] (id r1)");
        assert_eq!(records[2].collection, Collection::Clean);
        assert_eq!(records[2].locator(), "clean[0]");
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![
            arithmetic::addition_equals(2, 3, 5),
            arithmetic::division_whole(4, 0),
        ];
        save_collection(&items, &dir.path().join(RAW_FILE)).unwrap();
        save_collection(&[], &dir.path().join(CLEAN_FILE)).unwrap();

        let corpus = Corpus::load_dir(dir.path()).unwrap();
        assert_eq!(corpus.raw.len(), 2);
        assert!(corpus.clean.is_empty());
        assert_eq!(corpus.raw[0]["text"], "Adding 2 and 3 gives 5.");
    }

    #[test]
    fn non_array_collection_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, r#"{"id": "x"}"#).unwrap();
        let err = load_collection(&path).unwrap_err();
        assert!(err.to_string().contains("must be a JSON array, found object"));
    }

    #[test]
    fn missing_files_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::load_dir(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains(RAW_FILE));
        assert!(Corpus::load_dir(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn from_items_serializes_records() {
        let corpus = Corpus::from_items(&[arithmetic::sum_equals(1, 2, 3)], &[]).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.raw[0]["family"], "arithmetic");
        assert!(corpus.raw[0]["difficulty"].is_null());
    }
}
