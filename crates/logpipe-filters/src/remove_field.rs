use crate::field_path::FieldPath;
use logpipe_core::{Filter, LogEvent, PipelineError};
use serde::{Deserialize, Serialize};

pub const TYPE_NAME: &str = "remove_field";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveFieldConfig {
    /// Dotted paths to delete; absent or null means none
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

/// Deletes configured field paths from each event's extra fields.
#[derive(Debug, Clone)]
pub struct RemoveFieldFilter {
    fields: Vec<FieldPath>,
}

impl RemoveFieldFilter {
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        Self {
            fields: fields.iter().map(|f| FieldPath::parse(f.as_ref())).collect(),
        }
    }

    pub fn from_config(config: RemoveFieldConfig) -> Self {
        Self::new(&config.fields.unwrap_or_default())
    }

    /// Registry factory: binds the stage options of a `remove_field` entry.
    pub fn from_options(
        options: &serde_yaml::Mapping,
    ) -> logpipe_core::Result<Box<dyn Filter>> {
        let config: RemoveFieldConfig =
            serde_yaml::from_value(serde_yaml::Value::Mapping(options.clone()))
                .map_err(|e| PipelineError::invalid_filter(TYPE_NAME, e))?;
        Ok(Box::new(Self::from_config(config)))
    }

    pub fn fields(&self) -> &[FieldPath] {
        &self.fields
    }
}

impl Filter for RemoveFieldFilter {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn process(&self, event: &mut LogEvent) {
        for path in &self.fields {
            if path.remove_from(&mut event.extra).is_none() {
                tracing::trace!(field = %path, "field did not exist");
            }
        }
    }
}
