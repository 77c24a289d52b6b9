//! SARIF (Static Analysis Results Interchange Format) output.
//!
//! Generates SARIF 2.1.0 documents so corpus findings show up in code
//! scanning alongside other checks.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use reasonbank_validator::corpus::{Collection, CLEAN_FILE, RAW_FILE};
use reasonbank_validator::report::{CheckKind, Finding, ValidationReport};

/// Artifact URIs reported for each collection.
#[derive(Debug, Clone)]
pub struct SarifSources {
    pub raw_uri: String,
    pub clean_uri: String,
}

impl Default for SarifSources {
    fn default() -> Self {
        Self {
            raw_uri: format!("data/{RAW_FILE}"),
            clean_uri: format!("data/{CLEAN_FILE}"),
        }
    }
}

fn rule(check: CheckKind) -> (&'static str, &'static str, &'static str) {
    match check {
        CheckKind::Schema => (
            "Schema Violation",
            "A record is missing a field or has a field of the wrong type",
            "error",
        ),
        CheckKind::Text => (
            "Text Rule Violation",
            "Item text is not a single short sentence in the allowed character set",
            "error",
        ),
        CheckKind::DuplicateId => (
            "Duplicate Id",
            "An item id appears more than once in a collection",
            "error",
        ),
        CheckKind::Consistency => (
            "Answer Mismatch",
            "The answer recomputed from the item text disagrees with the stored answer",
            "error",
        ),
        CheckKind::Coverage => (
            "Recognizer Coverage",
            "A checked family has no item any recognizer could read",
            "warning",
        ),
    }
}

fn result(finding: &Finding, sources: &SarifSources) -> serde_json::Value {
    let (_, _, level) = rule(finding.check);
    let mut value = json!({
        "ruleId": finding.check.as_str(),
        "level": level,
        "message": { "text": format!("{}: {}", finding.location(), finding.message) },
    });

    if let Some(collection) = finding.collection {
        let uri = match collection {
            Collection::Raw => &sources.raw_uri,
            Collection::Clean => &sources.clean_uri,
        };
        let mut location = json!({
            "physicalLocation": {
                "artifactLocation": { "uri": uri }
            }
        });
        if let Some(id) = &finding.item_id {
            location["logicalLocations"] = json!([{ "name": id, "kind": "object" }]);
        }
        value["locations"] = json!([location]);
    }

    let mut properties = serde_json::Map::new();
    if let Some(index) = finding.index {
        properties.insert("index".into(), json!(index));
    }
    if let Some(recognizer) = &finding.recognizer {
        properties.insert("recognizer".into(), json!(recognizer));
    }
    if !properties.is_empty() {
        value["properties"] = serde_json::Value::Object(properties);
    }
    value
}

/// Generate a SARIF 2.1.0 JSON document from a validation report.
pub fn generate_sarif(report: &ValidationReport, sources: &SarifSources) -> serde_json::Value {
    let rules: Vec<_> = CheckKind::ALL
        .into_iter()
        .map(|check| {
            let (name, desc, level) = rule(check);
            json!({
                "id": check.as_str(),
                "name": name,
                "shortDescription": { "text": desc },
                "defaultConfiguration": { "level": level },
            })
        })
        .collect();

    let results: Vec<_> = report
        .findings
        .iter()
        .map(|finding| result(finding, sources))
        .collect();

    json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "reasonbank",
                    "version": env!("CARGO_PKG_VERSION"),
                    "informationUri": "https://github.com/reasonbank/reasonbank",
                    "rules": rules
                }
            },
            "automationDetails": { "id": report.id.to_string() },
            "results": results
        }]
    })
}

/// Write a SARIF report to a file.
pub fn write_sarif_report(
    report: &ValidationReport,
    sources: &SarifSources,
    path: &Path,
) -> Result<()> {
    let sarif = generate_sarif(report, sources);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&sarif)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write SARIF report to {}", path.display()))?;
    Ok(())
}
