// In: src/config.rs

//! The single source of truth for engine configuration.
//!
//! `EngineConfig` is created once at the application boundary (typically from a
//! JSON file or string) and handed to `Engine::from_config`. Pipeline definitions
//! are plain data: a name and an ordered list of transform names.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NumpipeError;

//==================================================================================
// I. Pipeline Definitions
//==================================================================================

/// A pipeline definition: `name` built from `steps`, applied left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PipelineSpec {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl PipelineSpec {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

//==================================================================================
// II. The Unified EngineConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// If true, the five built-in transforms are registered before any pipeline is built.
    #[serde(default = "default_true")]
    pub register_builtins: bool,

    /// If true, the host should install the default logger (see `enable_verbose_logging`).
    #[serde(default)]
    pub verbose_logging: bool,

    /// Pipelines to build, in order.
    #[serde(default)]
    pub pipelines: Vec<PipelineSpec>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            register_builtins: true,
            verbose_logging: false,
            pipelines: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, NumpipeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NumpipeError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NumpipeError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn to_json_pretty(&self) -> Result<String, NumpipeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}
