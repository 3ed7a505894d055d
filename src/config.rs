use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SolidError};

/// Runtime settings. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive for the diagnostic log, e.g. `"warn"` or `"solid=debug"`.
    pub log_level: String,
    pub routines: Routines,
}

/// Which demonstration routines to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Routines {
    pub branching: bool,
    pub dispatch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            routines: Routines::default(),
        }
    }
}

impl Default for Routines {
    fn default() -> Self {
        Routines {
            branching: true,
            dispatch: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SolidError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
