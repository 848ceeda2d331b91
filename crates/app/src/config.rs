//! TOML configuration overrides for the CLI.

use anyhow::{Context, Result};
use gradevox_match::MatcherConfig;
use gradevox_parse::SplitterConfig;
use serde::Deserialize;
use std::path::Path;

/// Settings loadable from a TOML file; every field has a default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub matcher: MatcherConfig,
    pub splitter: SplitterConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}
