//! Validation report types with JSON persistence and a markdown summary.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use reasonbank_core::model::Family;

use crate::corpus::Collection;

/// The check that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Missing, mistyped or out-of-set fields.
    Schema,
    /// Sentence, length or character rules.
    Text,
    /// An id repeated within one collection.
    DuplicateId,
    /// A recognized template whose recomputed answer disagrees.
    Consistency,
    /// A checked family with no recognized item.
    Coverage,
}

impl CheckKind {
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Schema,
        CheckKind::Text,
        CheckKind::DuplicateId,
        CheckKind::Consistency,
        CheckKind::Coverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Schema => "schema",
            CheckKind::Text => "text",
            CheckKind::DuplicateId => "duplicate-id",
            CheckKind::Consistency => "consistency",
            CheckKind::Coverage => "coverage",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Collection of the offending record; `None` for corpus-level findings.
    pub collection: Option<Collection>,
    /// Position within the collection.
    pub index: Option<usize>,
    /// Item id, when the record has one.
    pub item_id: Option<String>,
    pub check: CheckKind,
    /// Recognizer that produced a consistency finding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recognizer: Option<String>,
    pub message: String,
}

impl Finding {
    /// Where the finding applies, e.g. `clean[2] (id 5f1e...)` or `corpus`.
    pub fn location(&self) -> String {
        match (self.collection, self.index, &self.item_id) {
            (Some(c), Some(i), Some(id)) => format!("{c}[{i}] (id {id})"),
            (Some(c), Some(i), None) => format!("{c}[{i}]"),
            _ => "corpus".to_string(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.check, self.location(), self.message)
    }
}

/// Recognition counts for one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyStats {
    pub family: Family,
    /// Schema-valid items of this family, across both collections.
    pub items: usize,
    /// Items some recognizer matched, agreeing or not.
    pub recognized: usize,
    /// Items no recognizer matched.
    pub skipped: usize,
    /// Recognized items whose stored answer disagreed.
    pub mismatched: usize,
}

impl FamilyStats {
    pub fn new(family: Family) -> Self {
        Self {
            family,
            items: 0,
            recognized: 0,
            skipped: 0,
            mismatched: 0,
        }
    }
}

/// How often one recognizer matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizerStats {
    pub name: String,
    pub family: Family,
    pub matched: usize,
}

/// The outcome of one validator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the run finished.
    pub created_at: DateTime<Utc>,
    pub raw_count: usize,
    pub clean_count: usize,
    /// Families that must have at least one recognized item.
    pub checked_families: Vec<Family>,
    /// Per-family counts, in [`Family::ALL`] order.
    pub families: Vec<FamilyStats>,
    /// Per-recognizer match counts, in registration order.
    pub recognizers: Vec<RecognizerStats>,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    /// A run passes only with zero findings.
    pub fn is_success(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.raw_count + self.clean_count
    }

    pub fn findings_of(&self, check: CheckKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.check == check)
    }

    pub fn family(&self, family: Family) -> Option<&FamilyStats> {
        self.families.iter().find(|s| s.family == family)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ValidationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Validation Report\n\n");
        md.push_str(&format!(
            "**Result:** {} ({} findings across {} records: {} raw, {} clean)\n\n",
            if self.is_success() { "PASS" } else { "FAIL" },
            self.findings.len(),
            self.record_count(),
            self.raw_count,
            self.clean_count
        ));

        md.push_str("## Families\n\n");
        md.push_str("| Family | Items | Recognized | Skipped | Mismatched |\n");
        md.push_str("|--------|-------|------------|---------|------------|\n");
        for s in &self.families {
            let checked = if self.checked_families.contains(&s.family) {
                " (checked)"
            } else {
                ""
            };
            md.push_str(&format!(
                "| {}{} | {} | {} | {} | {} |\n",
                s.family, checked, s.items, s.recognized, s.skipped, s.mismatched
            ));
        }
        md.push('\n');

        if !self.findings.is_empty() {
            md.push_str("## Findings\n\n");
            md.push_str("| Check | Location | Message |\n");
            md.push_str("|-------|----------|---------|\n");
            for f in &self.findings {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    f.check,
                    f.location(),
                    f.message.replace('|', "\\|")
                ));
            }
        }

        md
    }
}
