//! Runtime configuration.
//!
//! Loaded from YAML or JSON, picked by file extension. Unknown keys are rejected so that a typo
//! does not silently fall back to a default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::RtsError;
use crate::err_msg;

pub const DEFAULT_MAX_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Applications allowed per evaluation before the driver gives up.
    pub max_steps: usize,
    /// Emit a trace event for every application.
    pub trace_steps: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            trace_steps: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, RtsError> {
        serde_yaml::from_str(text)
            .map_err(|e| err_msg!(Config, "invalid YAML configuration: {}", e).caused_by(e))
    }

    pub fn from_json_str(text: &str) -> Result<Self, RtsError> {
        serde_json::from_str(text)
            .map_err(|e| err_msg!(Config, "invalid JSON configuration: {}", e).caused_by(e))
    }

    /// Reads `path`, choosing the format from its extension (`.yaml`, `.yml` or `.json`).
    pub fn load(path: &Path) -> Result<Self, RtsError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            err_msg!(Config, "cannot read '{}': {}", path.display(), e).caused_by(e)
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(err_msg!(
                Config,
                "unsupported configuration format for '{}'",
                path.display()
            )
            .with_help("use a .yaml, .yml or .json file")),
        }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
