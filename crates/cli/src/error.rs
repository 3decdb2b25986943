//! Error types for rf2ctl CLI

use std::path::PathBuf;

use rf2_input_maps::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Invalid key code: {0}")]
    InvalidKeycode(String),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io { .. } => 2,
            CliError::Snapshot(_) | CliError::Config(_) | CliError::InvalidKeycode(_) => 3,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::Io { .. } => "io",
            CliError::Snapshot(_) => "snapshot",
            CliError::Config(_) => "config",
            CliError::InvalidKeycode(_) => "keycode",
        }
    }
}
