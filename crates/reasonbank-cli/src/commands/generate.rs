//! The `reasonbank generate` command.

use std::path::PathBuf;

use anyhow::Result;

use reasonbank_core::plan::{parse_plan, validate_plan};
use reasonbank_validator::corpus::save_collection;

pub fn execute(plan_path: PathBuf, output: PathBuf) -> Result<bool> {
    let plan = parse_plan(&plan_path)?;
    println!("Plan: {} ({} items)", plan.name, plan.entries.len());

    for w in validate_plan(&plan) {
        let prefix = w
            .entry
            .map(|i| format!("  [{i}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    let items = plan.build_items()?;
    save_collection(&items, &output)?;
    tracing::info!("wrote {} items to {}", items.len(), output.display());
    println!("Generated {} items -> {}", items.len(), output.display());

    Ok(true)
}
