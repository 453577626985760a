// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the four dataset files. Defaults are the conventional
/// filenames, resolved against the working directory (or `--data-dir`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_graph")]
    pub graph: PathBuf,
    #[serde(default = "default_keywords")]
    pub keywords: PathBuf,
    #[serde(default = "default_impressions")]
    pub impressions: PathBuf,
    #[serde(default = "default_clicks")]
    pub clicks: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            graph: default_graph(),
            keywords: default_keywords(),
            impressions: default_impressions(),
            clicks: default_clicks(),
        }
    }
}

fn default_graph() -> PathBuf { PathBuf::from("web_graph.csv") }
fn default_keywords() -> PathBuf { PathBuf::from("keyword.csv") }
fn default_impressions() -> PathBuf { PathBuf::from("num_impressions.csv") }
fn default_clicks() -> PathBuf { PathBuf::from("clicks.csv") }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Rewrite the counter files after every query / click.
    #[serde(default = "default_auto_persist")]
    pub auto_persist: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            auto_persist: default_auto_persist(),
            verbose: false,
        }
    }
}

fn default_auto_persist() -> bool { true }

/// On-disk shape of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkrankToml {
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Runtime configuration: file settings plus CLI overrides.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub preferences: Preferences,
}
