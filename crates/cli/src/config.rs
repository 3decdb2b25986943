//! Optional YAML configuration for rf2ctl

use std::fs;
use std::path::Path;

use rf2_input_maps::{BindingLabel, SnapshotSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

/// Ordering of labeled bindings in command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Label,
}

impl SortKey {
    pub fn sort(self, labels: &mut [BindingLabel]) {
        match self {
            // Snapshots already yield bindings ordered by id.
            SortKey::Id => {}
            SortKey::Label => labels.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CliConfig {
    pub source: SnapshotSource,
    pub sort_by: SortKey,
}

impl CliConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, CliError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load the config file at `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let config = Self::from_yaml(&yaml)?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
