//! The `reasonbank validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use reasonbank_report::sarif::{generate_sarif, SarifSources};
use reasonbank_validator::config::load_config_from;
use reasonbank_validator::consistency::Validator;
use reasonbank_validator::corpus::Corpus;
use reasonbank_validator::report::ValidationReport;

pub struct ValidateArgs {
    pub data_dir: Option<PathBuf>,
    pub raw: Option<PathBuf>,
    pub clean: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: String,
    pub output: Option<PathBuf>,
}

/// Returns whether the corpus passed.
pub fn execute(args: ValidateArgs) -> Result<bool> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    let raw_path = args.raw.unwrap_or_else(|| config.raw_path());
    let clean_path = args.clean.unwrap_or_else(|| config.clean_path());

    let corpus = Corpus::load(&raw_path, &clean_path)?;
    let report = Validator::new(config.validator_options()).validate(&corpus);

    let rendered = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(&report)?,
        "markdown" | "md" => report.to_markdown(),
        "sarif" => {
            let sources = SarifSources {
                raw_uri: uri(&raw_path),
                clean_uri: uri(&clean_path),
            };
            serde_json::to_string_pretty(&generate_sarif(&report, &sources))?
        }
        "text" => render_text(&report),
        other => anyhow::bail!("unknown format: {other} (expected text, json, markdown or sarif)"),
    };

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, rendered)?;
            println!("{}", summary_line(&report));
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(report.is_success())
}

fn uri(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn summary_line(report: &ValidationReport) -> String {
    if report.is_success() {
        format!(
            "All {} items valid ({} raw, {} clean).",
            report.record_count(),
            report.raw_count,
            report.clean_count
        )
    } else {
        format!(
            "{} finding(s) in {} items ({} raw, {} clean).",
            report.findings.len(),
            report.record_count(),
            report.raw_count,
            report.clean_count
        )
    }
}

fn render_text(report: &ValidationReport) -> String {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Family", "Items", "Recognized", "Skipped", "Mismatched"]);
    for s in &report.families {
        let name = if report.checked_families.contains(&s.family) {
            format!("{} *", s.family)
        } else {
            s.family.to_string()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(s.items),
            Cell::new(s.recognized),
            Cell::new(s.skipped),
            Cell::new(s.mismatched),
        ]);
    }

    let mut out = format!("{table}\n* checked for recognizer coverage\n");
    if !report.findings.is_empty() {
        out.push('\n');
        for f in &report.findings {
            out.push_str(&format!("  {f}\n"));
        }
    }
    out.push('\n');
    out.push_str(&summary_line(report));
    out
}
