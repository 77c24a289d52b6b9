//! reasonbank CLI — generate items and validate corpora.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "reasonbank", version, about = "True/false reasoning item bank")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the raw and clean item collections
    Validate {
        /// Directory holding items_raw.json and items_clean.json
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Raw collection path (overrides --data-dir)
        #[arg(long)]
        raw: Option<PathBuf>,

        /// Clean collection path (overrides --data-dir)
        #[arg(long)]
        clean: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json, markdown, sarif
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Generate items from a TOML plan
    Generate {
        /// Path to the .toml plan
        #[arg(long)]
        plan: PathBuf,

        /// Where to write the JSON item array
        #[arg(long)]
        output: PathBuf,
    },

    /// Score a response against an item's answer
    Score {
        /// The item's stored answer
        #[arg(long, action = ArgAction::Set)]
        correct: bool,

        /// The respondent's answer
        #[arg(long, action = ArgAction::Set)]
        response: bool,
    },

    /// Create starter config and example plan
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reasonbank=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            data_dir,
            raw,
            clean,
            config,
            format,
            output,
        } => commands::validate::execute(commands::validate::ValidateArgs {
            data_dir,
            raw,
            clean,
            config,
            format,
            output,
        }),
        Commands::Generate { plan, output } => commands::generate::execute(plan, output),
        Commands::Score { correct, response } => commands::score::execute(correct, response),
        Commands::Init => commands::init::execute(),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
