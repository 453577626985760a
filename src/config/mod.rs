// src/config/mod.rs
pub mod io;
pub mod types;

pub use io::{load_toml_config, write_default_config, CONFIG_FILE};
pub use types::{Config, DatasetConfig, LinkrankToml, Preferences};

use anyhow::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration for a run rooted at `data_dir`. Reads
    /// `linkrank.toml` from that directory when present, then resolves
    /// every relative dataset path against it.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let file = load_toml_config(data_dir)?;
        let mut config = Self {
            dataset: file.dataset,
            preferences: file.preferences,
        };
        config.rebase_dataset(data_dir);
        Ok(config)
    }

    /// Resolve relative dataset paths against `dir`. Absolute paths in
    /// the config file are left untouched.
    pub fn rebase_dataset(&mut self, dir: &Path) {
        for path in [
            &mut self.dataset.graph,
            &mut self.dataset.keywords,
            &mut self.dataset.impressions,
            &mut self.dataset.clicks,
        ] {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}
