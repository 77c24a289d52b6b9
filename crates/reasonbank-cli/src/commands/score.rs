//! The `reasonbank score` command.

use anyhow::Result;

use reasonbank_core::scoring::{ExactMatchScorer, Scorer};

pub fn execute(correct: bool, response: bool) -> Result<bool> {
    let score = ExactMatchScorer.score(correct, response);
    println!("{score:.1}");
    Ok(true)
}
