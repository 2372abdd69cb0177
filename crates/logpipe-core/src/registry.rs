//! Filter Registry: type identifier → factory, built by the composition root
use crate::config::FilterSpec;
use crate::error::{PipelineError, Result};
use crate::filter::Filter;
use std::collections::HashMap;

/// Builds a ready filter from the stage-specific part of its config entry.
pub type FilterFactory = fn(&serde_yaml::Mapping) -> Result<Box<dyn Filter>>;

#[derive(Default)]
pub struct FilterRegistry {
    factories: HashMap<&'static str, FilterFactory>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory. Each type identifier may be registered once.
    pub fn register(&mut self, type_name: &'static str, factory: FilterFactory) -> Result<()> {
        if self.factories.contains_key(type_name) {
            return Err(PipelineError::DuplicateFilterType(type_name.to_string()));
        }
        self.factories.insert(type_name, factory);
        Ok(())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type identifiers, sorted.
    pub fn types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.factories.keys().copied().collect();
        types.sort_unstable();
        types
    }

    /// Instantiates the filter a config entry names.
    pub fn build(&self, spec: &FilterSpec) -> Result<Box<dyn Filter>> {
        let factory = self
            .factories
            .get(spec.filter_type.as_str())
            .ok_or_else(|| PipelineError::UnknownFilterType(spec.filter_type.clone()))?;
        factory(&spec.options)
    }
}
