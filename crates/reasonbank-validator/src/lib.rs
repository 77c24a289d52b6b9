//! reasonbank-validator — Consistency checks for item corpora.
//!
//! Loads the raw and clean item collections, checks every record against
//! the item schema and the text rules, and re-derives answers from the item
//! text wherever a recognizer knows the sentence template.

pub mod config;
pub mod consistency;
pub mod corpus;
pub mod recognizer;
pub mod report;
pub mod schema;
