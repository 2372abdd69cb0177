//! Pipeline Configuration: declarative YAML loaded once at startup
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Deliver filtered events to the debug output channel
    #[serde(default)]
    pub debugch: bool,

    /// Filter chain, applied in order
    #[serde(default)]
    pub filter: Vec<FilterSpec>,
}

/// One `filter:` entry. Everything except `type` is handed to the stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "type")]
    pub filter_type: String,

    #[serde(flatten)]
    pub options: serde_yaml::Mapping,
}

impl FilterSpec {
    pub fn new(filter_type: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.into(),
            options: serde_yaml::Mapping::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: serde_yaml::Value) -> Self {
        self.options.insert(serde_yaml::Value::from(key), value);
        self
    }
}

impl PipelineConfig {
    pub fn from_yaml(source: &str) -> Result<Self> {
        // An empty document is a valid, empty pipeline.
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}
