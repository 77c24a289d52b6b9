//! The consistency validator.
//!
//! Every record is checked in order: schema, text rules, duplicate ids, then
//! re-derivation of the answer from the text. A record that fails the schema
//! is not re-derived, since its family and answer cannot be trusted. After
//! all records, each checked family must have at least one recognized item.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use reasonbank_core::lint::{text_violations, ESL_MAX_WORDS};
use reasonbank_core::model::{Family, Item};

use crate::corpus::{Collection, Corpus, Record};
use crate::recognizer::RecognizerSet;
use crate::report::{CheckKind, FamilyStats, Finding, RecognizerStats, ValidationReport};
use crate::schema::{parse_record, schema_violations};

/// Tunables for a validator run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorOptions {
    /// Word limit for the text rules.
    pub max_words: usize,
    /// Families that must have at least one recognized item.
    pub checked_families: Vec<Family>,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            max_words: ESL_MAX_WORDS,
            checked_families: vec![Family::Arithmetic, Family::Patterns],
        }
    }
}

/// Result of re-deriving one item's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// A recognizer matched and agreed with the stored answer.
    Pass { recognizer: &'static str },
    /// No recognizer for the family matched the text.
    Skip,
    /// A recognizer matched and recomputed a different answer.
    Fail {
        recognizer: &'static str,
        expected: bool,
        stored: bool,
    },
}

impl CheckOutcome {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CheckOutcome::Skip)
    }
}

/// Checks corpora against the item rules and the registered recognizers.
pub struct Validator {
    options: ValidatorOptions,
    recognizers: RecognizerSet,
}

impl Validator {
    /// A validator with the standard recognizers.
    pub fn new(options: ValidatorOptions) -> Self {
        Self::with_recognizers(options, RecognizerSet::standard())
    }

    pub fn with_recognizers(options: ValidatorOptions, recognizers: RecognizerSet) -> Self {
        Self {
            options,
            recognizers,
        }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Re-derive an item's answer from its text.
    ///
    /// Only recognizers registered for the item's family are tried. Every
    /// matching recognizer must agree; the first disagreement fails.
    pub fn rederive(&self, item: &Item) -> CheckOutcome {
        self.rederive_counted(item, &mut |_| {})
    }

    fn rederive_counted(&self, item: &Item, on_match: &mut dyn FnMut(&'static str)) -> CheckOutcome {
        let text = item.text.trim();
        let mut outcome = CheckOutcome::Skip;
        for recognizer in self.recognizers.for_family(item.family) {
            let Some(expected) = recognizer.recompute(text) else {
                continue;
            };
            on_match(recognizer.name());
            if expected != item.answer {
                return CheckOutcome::Fail {
                    recognizer: recognizer.name(),
                    expected,
                    stored: item.answer,
                };
            }
            if outcome == CheckOutcome::Skip {
                outcome = CheckOutcome::Pass {
                    recognizer: recognizer.name(),
                };
            }
        }
        outcome
    }

    /// Run every check over both collections.
    pub fn validate(&self, corpus: &Corpus) -> ValidationReport {
        let mut findings = Vec::new();
        let mut families: Vec<FamilyStats> = Family::ALL.into_iter().map(FamilyStats::new).collect();
        let mut matches: HashMap<&'static str, usize> = HashMap::new();
        let mut seen_ids: HashMap<(Collection, &str), usize> = HashMap::new();

        for record in corpus.records() {
            self.check_record(
                record,
                &mut findings,
                &mut families,
                &mut matches,
                &mut seen_ids,
            );
        }

        for family in &self.options.checked_families {
            let Some(stats) = families.iter().find(|s| s.family == *family) else {
                continue;
            };
            if stats.recognized > 0 {
                continue;
            }
            let message = if stats.items == 0 {
                format!("no {family} items to recognize")
            } else {
                format!(
                    "none of {} {family} items matched a recognizer",
                    stats.items
                )
            };
            findings.push(Finding {
                collection: None,
                index: None,
                item_id: None,
                check: CheckKind::Coverage,
                recognizer: None,
                message,
            });
        }

        for finding in &findings {
            tracing::warn!("{finding}");
        }

        let recognizers = self
            .recognizers
            .iter()
            .map(|r| RecognizerStats {
                name: r.name().to_string(),
                family: r.family(),
                matched: matches.get(r.name()).copied().unwrap_or(0),
            })
            .collect();

        let report = ValidationReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            raw_count: corpus.raw.len(),
            clean_count: corpus.clean.len(),
            checked_families: self.options.checked_families.clone(),
            families,
            recognizers,
            findings,
        };
        tracing::info!(
            "validated {} records ({} raw, {} clean): {} findings",
            report.record_count(),
            report.raw_count,
            report.clean_count,
            report.findings.len()
        );
        report
    }

    fn check_record<'a>(
        &self,
        record: Record<'a>,
        findings: &mut Vec<Finding>,
        families: &mut [FamilyStats],
        matches: &mut HashMap<&'static str, usize>,
        seen_ids: &mut HashMap<(Collection, &'a str), usize>,
    ) {
        let finding = |check: CheckKind, recognizer: Option<&str>, message: String| Finding {
            collection: Some(record.collection),
            index: Some(record.index),
            item_id: record.id().map(str::to_string),
            check,
            recognizer: recognizer.map(str::to_string),
            message,
        };

        let violations = schema_violations(record.value, record.collection);
        for message in &violations {
            findings.push(finding(CheckKind::Schema, None, message.clone()));
        }

        if let Some(text) = record.value.get("text").and_then(|t| t.as_str()) {
            for violation in text_violations(text, self.options.max_words) {
                findings.push(finding(CheckKind::Text, None, violation.to_string()));
            }
        }

        if let Some(id) = record.id() {
            if let Some(first) = seen_ids.insert((record.collection, id), record.index) {
                // Keep the first occurrence as the reference point.
                seen_ids.insert((record.collection, id), first);
                findings.push(finding(
                    CheckKind::DuplicateId,
                    None,
                    format!("duplicate id {id}, first seen at {}[{first}]", record.collection),
                ));
            }
        }

        if !violations.is_empty() {
            return;
        }
        let item = match parse_record(record.value, record.collection) {
            Ok(item) => item,
            Err(errors) => {
                for message in errors {
                    findings.push(finding(CheckKind::Schema, None, message));
                }
                return;
            }
        };

        let outcome = self.rederive_counted(&item, &mut |name| {
            *matches.entry(name).or_default() += 1;
        });
        let Some(stats) = families.iter_mut().find(|s| s.family == item.family) else {
            return;
        };
        stats.items += 1;
        match outcome {
            CheckOutcome::Skip => {
                stats.skipped += 1;
                tracing::debug!("{}: no template recognized", record.locator());
            }
            CheckOutcome::Pass { recognizer } => {
                stats.recognized += 1;
                tracing::debug!("{}: recognized by {recognizer}", record.locator());
            }
            CheckOutcome::Fail {
                recognizer,
                expected,
                stored,
            } => {
                stats.recognized += 1;
                stats.mismatched += 1;
                findings.push(finding(
                    CheckKind::Consistency,
                    Some(recognizer),
                    format!(
                        "stored answer is {stored} but {recognizer} recomputes {expected} from {:?}",
                        item.text
                    ),
                ));
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorOptions::default())
    }
}
