//! The `reasonbank init` command.

use std::path::Path;

use anyhow::Result;

use reasonbank_validator::config::ReasonbankConfig;

pub fn execute() -> Result<bool> {
    if Path::new("reasonbank.toml").exists() {
        println!("reasonbank.toml already exists, skipping.");
    } else {
        let config = format!(
            "# reasonbank configuration\n\n{}",
            ReasonbankConfig::default().to_toml()?
        );
        std::fs::write("reasonbank.toml", config)?;
        println!("Created reasonbank.toml");
    }

    std::fs::create_dir_all("plans")?;
    let plan_path = Path::new("plans/starter.toml");
    if plan_path.exists() {
        println!("plans/starter.toml already exists, skipping.");
    } else {
        std::fs::write(plan_path, STARTER_PLAN)?;
        println!("Created plans/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: reasonbank generate --plan plans/starter.toml --output data/items_raw.json");
    println!("  2. Curate items into data/items_clean.json");
    println!("  3. Run: reasonbank validate");

    Ok(true)
}

const STARTER_PLAN: &str = r#"[plan]
name = "starter"
description = "Warm-up items across every reasoning family"

[[items]]
kind = "sum_equals"
a = 2
b = 3
c = 5
tags = ["warmup"]

[[items]]
kind = "addition_equals"
a = 7
b = 8
proposed_sum = 16

[[items]]
kind = "is_prime"
number = 17

[[items]]
kind = "doubling_sequence"
values = [3, 6, 12, 24]

[[items]]
kind = "repeating_block"
block = "AB"
position = 3
proposal = "A"

[[items]]
kind = "greater_chain"
a = 9
b = 5
c = 2

[[items]]
kind = "subset_relation"
subset = ["apple"]
superset = ["apple", "pear"]

[[items]]
kind = "ascending_triple"
a = 1
b = 2
c = 2

[[items]]
kind = "match_points"
goals = 3
assists = 2
reported = 8

[[items]]
kind = "conditional_truth"
p = false
q = true
"#;
