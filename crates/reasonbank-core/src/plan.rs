//! TOML generation plan parser.
//!
//! A plan lists generator invocations with their domain inputs. Building a
//! plan runs each generator and stamps the plan's provenance and each
//! entry's tags and notes onto the resulting items.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::generator::{
    arithmetic, basic_logic, number_properties, ordering, patterns, points_scoring, sets_logic,
    transitivity,
};
use crate::generator::points_scoring::PointWeights;
use crate::model::{Item, DEFAULT_SOURCE};

/// Intermediate TOML structure for plan files.
#[derive(Debug, Deserialize)]
struct TomlPlanFile {
    plan: TomlPlanHeader,
    #[serde(default)]
    items: Vec<TomlPlanEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlPlanHeader {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_source")]
    source: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

#[derive(Debug, Deserialize)]
struct TomlPlanEntry {
    #[serde(flatten)]
    spec: ItemSpec,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    notes: String,
}

/// One generator invocation, tagged by generator name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSpec {
    AdditionEquals { a: i64, b: i64, proposed_sum: i64 },
    SumEquals { a: i64, b: i64, c: i64 },
    MultiplicationComparison { a: i64, b: i64, threshold: i64 },
    DivisionWhole { a: i64, b: i64 },
    IsEven { number: i64 },
    IsPrime { number: i64 },
    GreaterThan { a: i64, b: i64 },
    NextInArithmeticSequence { start: i64, step: i64, length: usize, proposal: i64 },
    RepeatingBlock { block: String, position: u64, proposal: char },
    DoublingSequence { values: Vec<i64> },
    GreaterChain { a: i64, b: i64, c: i64 },
    HeightComparison { a_taller_than_b: bool, b_taller_than_c: bool },
    ElementMembership { element: String, group: BTreeSet<String> },
    SubsetRelation { subset: BTreeSet<String>, superset: BTreeSet<String> },
    AscendingTriple { a: i64, b: i64, c: i64 },
    PositionInLine { position: i64, total: i64 },
    MatchPoints {
        goals: u32,
        assists: u32,
        reported: i64,
        #[serde(default)]
        weights: Option<PointWeights>,
    },
    BonusThreshold { score: i64, threshold: i64 },
    ConjunctionTruth { p: bool, q: bool },
    NegationFlip { p: bool },
    ConditionalTruth { p: bool, q: bool },
}

impl ItemSpec {
    /// Run the generator this entry names.
    pub fn build(&self) -> crate::error::Result<Item> {
        let item = match self {
            ItemSpec::AdditionEquals { a, b, proposed_sum } => {
                arithmetic::addition_equals(*a, *b, *proposed_sum)
            }
            ItemSpec::SumEquals { a, b, c } => arithmetic::sum_equals(*a, *b, *c),
            ItemSpec::MultiplicationComparison { a, b, threshold } => {
                arithmetic::multiplication_comparison(*a, *b, *threshold)
            }
            ItemSpec::DivisionWhole { a, b } => arithmetic::division_whole(*a, *b),
            ItemSpec::IsEven { number } => number_properties::is_even(*number),
            ItemSpec::IsPrime { number } => number_properties::is_prime(*number),
            ItemSpec::GreaterThan { a, b } => number_properties::greater_than(*a, *b),
            ItemSpec::NextInArithmeticSequence {
                start,
                step,
                length,
                proposal,
            } => patterns::next_in_arithmetic_sequence(*start, *step, *length, *proposal)?,
            ItemSpec::RepeatingBlock {
                block,
                position,
                proposal,
            } => patterns::repeating_block(block, *position, *proposal)?,
            ItemSpec::DoublingSequence { values } => patterns::doubling_sequence(values)?,
            ItemSpec::GreaterChain { a, b, c } => transitivity::greater_chain(*a, *b, *c),
            ItemSpec::HeightComparison {
                a_taller_than_b,
                b_taller_than_c,
            } => transitivity::height_comparison(*a_taller_than_b, *b_taller_than_c),
            ItemSpec::ElementMembership { element, group } => {
                sets_logic::element_membership(element, group)?
            }
            ItemSpec::SubsetRelation { subset, superset } => {
                sets_logic::subset_relation(subset, superset)?
            }
            ItemSpec::AscendingTriple { a, b, c } => ordering::ascending_triple(*a, *b, *c),
            ItemSpec::PositionInLine { position, total } => {
                ordering::position_in_line(*position, *total)
            }
            ItemSpec::MatchPoints {
                goals,
                assists,
                reported,
                weights,
            } => points_scoring::match_points_weighted(
                *goals,
                *assists,
                *reported,
                weights.unwrap_or_default(),
            ),
            ItemSpec::BonusThreshold { score, threshold } => {
                points_scoring::bonus_threshold(*score, *threshold)
            }
            ItemSpec::ConjunctionTruth { p, q } => basic_logic::conjunction_truth(*p, *q),
            ItemSpec::NegationFlip { p } => basic_logic::negation_flip(*p),
            ItemSpec::ConditionalTruth { p, q } => basic_logic::conditional_truth(*p, *q),
        };
        Ok(item)
    }

    /// The generator name, as written in the `kind` key.
    pub fn kind(&self) -> &'static str {
        match self {
            ItemSpec::AdditionEquals { .. } => "addition_equals",
            ItemSpec::SumEquals { .. } => "sum_equals",
            ItemSpec::MultiplicationComparison { .. } => "multiplication_comparison",
            ItemSpec::DivisionWhole { .. } => "division_whole",
            ItemSpec::IsEven { .. } => "is_even",
            ItemSpec::IsPrime { .. } => "is_prime",
            ItemSpec::GreaterThan { .. } => "greater_than",
            ItemSpec::NextInArithmeticSequence { .. } => "next_in_arithmetic_sequence",
            ItemSpec::RepeatingBlock { .. } => "repeating_block",
            ItemSpec::DoublingSequence { .. } => "doubling_sequence",
            ItemSpec::GreaterChain { .. } => "greater_chain",
            ItemSpec::HeightComparison { .. } => "height_comparison",
            ItemSpec::ElementMembership { .. } => "element_membership",
            ItemSpec::SubsetRelation { .. } => "subset_relation",
            ItemSpec::AscendingTriple { .. } => "ascending_triple",
            ItemSpec::PositionInLine { .. } => "position_in_line",
            ItemSpec::MatchPoints { .. } => "match_points",
            ItemSpec::BonusThreshold { .. } => "bonus_threshold",
            ItemSpec::ConjunctionTruth { .. } => "conjunction_truth",
            ItemSpec::NegationFlip { .. } => "negation_flip",
            ItemSpec::ConditionalTruth { .. } => "conditional_truth",
        }
    }
}

/// A single plan entry: what to generate plus annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub spec: ItemSpec,
    pub tags: Vec<String>,
    pub notes: String,
}

/// A parsed generation plan.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub name: String,
    pub description: String,
    /// Provenance stamped on every built item.
    pub source: String,
    pub entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    /// Build every entry, failing on the first precondition violation.
    pub fn build_items(&self) -> Result<Vec<Item>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut item = entry.spec.build().with_context(|| {
                    format!("plan entry {index} ({}) is invalid", entry.spec.kind())
                })?;
                item = item.with_source(self.source.clone()).with_notes(entry.notes.clone());
                if !entry.tags.is_empty() {
                    item = item.with_tags(entry.tags.iter().cloned());
                }
                Ok(item)
            })
            .collect()
    }
}

/// Parse a plan file.
pub fn parse_plan(path: &Path) -> Result<GenerationPlan> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file: {}", path.display()))?;
    tracing::debug!("parsing plan {}", path.display());

    parse_plan_str(&content, path)
}

/// Parse a TOML string into a plan (useful for testing).
pub fn parse_plan_str(content: &str, source_path: &Path) -> Result<GenerationPlan> {
    let parsed: TomlPlanFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let entries = parsed
        .items
        .into_iter()
        .map(|entry| PlanEntry {
            spec: entry.spec,
            tags: entry.tags,
            notes: entry.notes,
        })
        .collect();

    Ok(GenerationPlan {
        name: parsed.plan.name,
        description: parsed.plan.description,
        source: parsed.plan.source,
        entries,
    })
}

/// A warning from plan validation.
#[derive(Debug, Clone)]
pub struct PlanWarning {
    /// Index of the offending entry, if applicable.
    pub entry: Option<usize>,
    pub message: String,
}

/// Check a plan for issues that do not stop generation.
pub fn validate_plan(plan: &GenerationPlan) -> Vec<PlanWarning> {
    let mut warnings = Vec::new();

    if plan.entries.is_empty() {
        warnings.push(PlanWarning {
            entry: None,
            message: "plan has no items".into(),
        });
    }

    // Identical inputs render identical sentences.
    let mut seen: Vec<&ItemSpec> = Vec::new();
    for (index, entry) in plan.entries.iter().enumerate() {
        if seen.contains(&&entry.spec) {
            warnings.push(PlanWarning {
                entry: Some(index),
                message: format!("duplicate {} entry renders the same sentence", entry.spec.kind()),
            });
        } else {
            seen.push(&entry.spec);
        }
    }

    for (index, entry) in plan.entries.iter().enumerate() {
        let mut tags = HashSet::new();
        if entry.tags.iter().any(|t| t.trim().is_empty() || !tags.insert(t)) {
            warnings.push(PlanWarning {
                entry: Some(index),
                message: "tags must be non-empty and distinct".into(),
            });
        }
    }

    warnings
}
