// src/config/io.rs
use super::types::LinkrankToml;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "linkrank.toml";

pub fn parse_toml(content: &str) -> Result<LinkrankToml> {
    toml::from_str(content).context("Failed to parse linkrank.toml")
}

/// Read `linkrank.toml` from `dir`, falling back to defaults when the
/// file does not exist.
pub fn load_toml_config(dir: &Path) -> Result<LinkrankToml> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(LinkrankToml::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_toml(&content)
}

/// Writes a default `linkrank.toml` into `dir` and returns its path.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_default_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    let content = toml::to_string_pretty(&LinkrankToml::default())
        .context("Failed to serialize default config")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
