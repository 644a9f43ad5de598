//! Registry of linguistic pipelines addressed by identifier.

use super::{EnglishPipeline, LinguisticPipeline};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Default pipeline identifier: the small general-purpose English pipeline.
pub const DEFAULT_MODEL: &str = "en_core_web_sm";

/// Registry for linguistic pipelines.
///
/// Maps identifiers (canonical names and aliases, case-insensitive) to
/// shared pipeline instances. Pipelines are built once when registered.
pub struct PipelineRegistry {
    pipelines: HashMap<String, Arc<dyn LinguisticPipeline>>,
    names: Vec<String>,
}

impl PipelineRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            pipelines: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Create a registry with the built-in pipelines (English).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(EnglishPipeline::new()));
        registry
    }

    /// Register a pipeline under its name and all of its aliases.
    ///
    /// A later registration replaces an earlier one for the same identifier.
    pub fn register(&mut self, pipeline: Arc<dyn LinguisticPipeline>) {
        let name = pipeline.name().to_lowercase();
        for alias in pipeline.aliases() {
            self.pipelines
                .insert(alias.to_lowercase(), pipeline.clone());
        }
        if !self.names.contains(&name) {
            self.names.push(name.clone());
        }
        self.pipelines.insert(name, pipeline);
    }

    /// Get a pipeline by identifier.
    pub fn get(&self, name: &str) -> Option<Arc<dyn LinguisticPipeline>> {
        self.pipelines.get(&name.to_lowercase()).cloned()
    }

    /// Resolve a pipeline, failing with [`Error::ModelLoad`] when unknown.
    pub fn load(&self, name: &str) -> Result<Arc<dyn LinguisticPipeline>> {
        let pipeline = self.get(name).ok_or_else(|| {
            let available = if self.names.is_empty() {
                "no pipelines are registered".to_string()
            } else {
                format!("available: {}", self.names.join(", "))
            };
            Error::model_load(name, format!("unknown pipeline ({})", available))
        })?;
        log::debug!("Loaded pipeline '{}' for '{}'", pipeline.name(), name);
        Ok(pipeline)
    }

    /// Check if an identifier is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.pipelines.contains_key(&name.to_lowercase())
    }

    /// Canonical names of registered pipelines, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(|s| s.as_str()).collect()
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
