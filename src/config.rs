use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use crate::common::range::Adjacency;

pub const DEFAULT_CONFIG_FILE: &str = "textkit.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cut: CutConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CutConfig {
    /// Separator used when `-d` is not given.
    pub separator: char,
    pub adjacency: Adjacency,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            separator: '\t',
            adjacency: Adjacency::Merge,
        }
    }
}

impl CutConfig {
    /// Flags given on the command line win over the configured values.
    pub fn selection_params(&self, separator: Option<char>, keep_adjacent: bool) -> (char, Adjacency) {
        let adjacency = if keep_adjacent {
            Adjacency::Keep
        } else {
            self.adjacency
        };
        (separator.unwrap_or(self.separator), adjacency)
    }
}

impl Config {
    pub fn from_toml(document: &str) -> anyhow::Result<Self> {
        toml::from_str(document).context("Failed to parse configuration")
    }

    /// Loads `path` when given, otherwise `textkit.toml` in the working
    /// directory if there is one.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Path::new(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No configuration file, using defaults");
                return Ok(Config::default());
            }
        };

        debug!("Loading configuration from {}", path.display());
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_toml(&document).with_context(|| format!("In {}", path.display()))
    }
}
