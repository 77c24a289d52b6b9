//! reasonbank-core — Item model, family generators, and scoring.
//!
//! This crate defines the True/False item data model, the text rules every
//! item sentence must satisfy, the per-family generators that pair a rendered
//! sentence with its ground truth, and the scoring contract.

pub mod error;
pub mod generator;
pub mod lint;
pub mod model;
pub mod plan;
pub mod scoring;
