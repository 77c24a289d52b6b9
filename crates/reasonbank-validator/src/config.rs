//! Validator configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use reasonbank_core::lint::ESL_MAX_WORDS;
use reasonbank_core::model::Family;

use crate::consistency::ValidatorOptions;
use crate::corpus::{CLEAN_FILE, RAW_FILE};

/// Top-level reasonbank configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonbankConfig {
    /// Directory holding the item collections. `${VAR}` references expand.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Raw collection file name, relative to `data_dir`.
    #[serde(default = "default_raw_file")]
    pub raw_file: String,
    /// Clean collection file name, relative to `data_dir`.
    #[serde(default = "default_clean_file")]
    pub clean_file: String,
    /// Word limit for item text.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Families that must have at least one recognized item.
    #[serde(default = "default_checked_families")]
    pub checked_families: Vec<Family>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_raw_file() -> String {
    RAW_FILE.to_string()
}
fn default_clean_file() -> String {
    CLEAN_FILE.to_string()
}
fn default_max_words() -> usize {
    ESL_MAX_WORDS
}
fn default_checked_families() -> Vec<Family> {
    vec![Family::Arithmetic, Family::Patterns]
}

impl Default for ReasonbankConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            raw_file: default_raw_file(),
            clean_file: default_clean_file(),
            max_words: default_max_words(),
            checked_families: default_checked_families(),
        }
    }
}

impl ReasonbankConfig {
    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(&self.raw_file)
    }

    pub fn clean_path(&self) -> PathBuf {
        self.data_dir.join(&self.clean_file)
    }

    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            max_words: self.max_words,
            checked_families: self.checked_families.clone(),
        }
    }

    /// Render as TOML, e.g. for `reasonbank init`.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config")
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `reasonbank.toml` in the current directory
/// 2. `~/.config/reasonbank/config.toml`
///
/// Environment variable overrides: `REASONBANK_DATA_DIR`, `REASONBANK_MAX_WORDS`.
pub fn load_config() -> Result<ReasonbankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ReasonbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("reasonbank.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            parse_config(&path)?
        }
        None => ReasonbankConfig::default(),
    };

    apply_overrides(config, |name| std::env::var(name).ok())
}

fn parse_config(path: &Path) -> Result<ReasonbankConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<ReasonbankConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Apply environment overrides, then expand `${VAR}` in `data_dir`.
fn apply_overrides(
    mut config: ReasonbankConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<ReasonbankConfig> {
    if let Some(dir) = var("REASONBANK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(max) = var("REASONBANK_MAX_WORDS") {
        config.max_words = max
            .trim()
            .parse()
            .with_context(|| format!("REASONBANK_MAX_WORDS must be a positive integer, got {max:?}"))?;
    }
    if config.max_words == 0 {
        anyhow::bail!("max_words must be at least 1");
    }

    let data_dir = config.data_dir.to_string_lossy().into_owned();
    if data_dir.contains("${") {
        config.data_dir = PathBuf::from(resolve_env_vars(&data_dir));
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("reasonbank"))
}
