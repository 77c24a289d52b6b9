//! Core data model types for reasonbank.
//!
//! An [`Item`] is a single True/False reasoning statement paired with its
//! ground truth. Items are created by the family generators as drafts and
//! promoted later by an external curation process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Provenance recorded on every generated item.
pub const DEFAULT_SOURCE: &str = "auto_generated";

/// A single True/False reasoning item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// One ESL-friendly sentence stating the claim.
    pub text: String,
    /// Ground truth for the claim in `text`.
    pub answer: bool,
    /// Reasoning family the item belongs to.
    pub family: Family,
    /// Calibrated difficulty; `None` until the item has response data.
    pub difficulty: Option<f64>,
    /// Curation status.
    pub status: Status,
    /// Where the item came from.
    pub source: String,
    /// Free-text annotation.
    pub notes: String,
    /// Optional labels for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Curation version; required once the item leaves draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

impl Item {
    /// Create a draft item with a fresh identifier.
    ///
    /// No check is made that `answer` is the truth of `text`; generators are
    /// responsible for that pairing.
    pub fn new(text: impl Into<String>, answer: bool, family: Family) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            answer,
            family,
            difficulty: None,
            status: Status::Draft,
            source: DEFAULT_SOURCE.to_string(),
            notes: String::new(),
            tags: None,
            version: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Whether this item has been through curation.
    pub fn is_curated(&self) -> bool {
        self.status != Status::Draft
    }
}

/// The closed set of reasoning families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Arithmetic,
    NumberProperties,
    Patterns,
    Transitivity,
    SetsLogic,
    Ordering,
    PointsScoring,
    BasicLogic,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Family; 8] = [
        Family::Arithmetic,
        Family::NumberProperties,
        Family::Patterns,
        Family::Transitivity,
        Family::SetsLogic,
        Family::Ordering,
        Family::PointsScoring,
        Family::BasicLogic,
    ];

    /// The wire name, e.g. `"number_properties"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Arithmetic => "arithmetic",
            Family::NumberProperties => "number_properties",
            Family::Patterns => "patterns",
            Family::Transitivity => "transitivity",
            Family::SetsLogic => "sets_logic",
            Family::Ordering => "ordering",
            Family::PointsScoring => "points_scoring",
            Family::BasicLogic => "basic_logic",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("unknown family: {s}"))
    }
}

/// Curation status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Approved,
    Retired,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Draft => write!(f, "draft"),
            Status::Approved => write!(f, "approved"),
            Status::Retired => write!(f, "retired"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Status::Draft),
            "approved" => Ok(Status::Approved),
            "retired" => Ok(Status::Retired),
            other => Err(format!("unknown status: {other}")),
        }
    }
}
