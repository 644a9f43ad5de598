//! Annotator options and configuration.

use crate::pipeline::DEFAULT_MODEL;
use crate::render::JsonFormat;

/// Options for building a [`TextEventAnnotator`](super::TextEventAnnotator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorOptions {
    /// Pipeline identifier resolved through the registry
    pub model: String,

    /// Format of files written by `annotate_file`
    pub json_format: JsonFormat,
}

impl AnnotatorOptions {
    /// Create new annotator options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pipeline identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the JSON output format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Write compact JSON.
    pub fn compact(mut self) -> Self {
        self.json_format = JsonFormat::Compact;
        self
    }
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            json_format: JsonFormat::Pretty,
        }
    }
}
