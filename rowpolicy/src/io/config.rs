//! Render configuration stored in `rowpolicy.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::ButtonType;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "rowpolicy.toml";

/// Output format for rendered decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render configuration (TOML).
///
/// Missing fields default to rendering the four row buttons as text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PolicyConfig {
    /// Output format when no `--format` flag is given.
    pub format: OutputFormat,

    /// Button labels to evaluate per row, in display order. Unknown labels
    /// are kept verbatim and always render hidden.
    pub buttons: Vec<String>,

    /// Keep hidden buttons in rendered output.
    pub include_hidden: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            buttons: ButtonType::ALL.iter().map(|button| button.to_string()).collect(),
            include_hidden: false,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.buttons.is_empty() {
            return Err(anyhow!("buttons must be a non-empty array"));
        }
        let mut seen = HashSet::new();
        for button in &self.buttons {
            if !seen.insert(button.as_str()) {
                return Err(anyhow!("duplicate button '{}' in buttons", button));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PolicyConfig::default()`.
pub fn load_config(path: &Path) -> Result<PolicyConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = PolicyConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PolicyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), buttons = cfg.buttons.len(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PolicyConfig) -> Result<()> {
    cfg.validate()?;
    debug!(path = %path.display(), "writing config");
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    super::write_atomic(path, &buf)
}

/// Write the default config to `path` unless it exists and `force` is unset.
///
/// Returns whether the file was written.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "config exists, keeping");
        return Ok(false);
    }
    write_config(path, &PolicyConfig::default())?;
    Ok(true)
}
