//! Sentence and event annotation on top of a linguistic pipeline.
//!
//! [`TextEventAnnotator`] runs a pipeline over raw text and reshapes its
//! output into [`SentenceRecord`]s: one per detected sentence, with the
//! sentence's literal text, its tokens and the root token as its event.
//!
//! # Example
//!
//! ```no_run
//! use textevent::{AnnotatorOptions, TextEventAnnotator};
//!
//! fn main() -> textevent::Result<()> {
//!     let annotator = TextEventAnnotator::with_options(AnnotatorOptions::new().with_model("en"))?;
//!
//!     for sentence in annotator.annotate("The cat sleeps.")? {
//!         println!("{}: {:?}", sentence.sentence, sentence.event());
//!     }
//!
//!     annotator.annotate_file("input.txt", "events.json")?;
//!     Ok(())
//! }
//! ```

mod options;

pub use options::AnnotatorOptions;

use crate::error::{Error, Result};
use crate::model::{AnnotationStats, EventRecord, SentenceRecord};
use crate::pipeline::{EnglishPipeline, LinguisticPipeline, ParsedToken, PipelineRegistry};
use crate::render;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Annotates text with sentences, tokens and root-token events.
///
/// The pipeline is resolved once at construction and shared read-only by
/// every call.
pub struct TextEventAnnotator {
    pipeline: Arc<dyn LinguisticPipeline>,
    options: AnnotatorOptions,
}

impl TextEventAnnotator {
    /// Create an annotator backed by the built-in English pipeline.
    pub fn new() -> Self {
        Self::from_pipeline(Arc::new(EnglishPipeline::new()))
    }

    /// Create an annotator, resolving `options.model` among the built-in
    /// pipelines.
    ///
    /// Fails with [`Error::ModelLoad`] when the identifier is unknown.
    pub fn with_options(options: AnnotatorOptions) -> Result<Self> {
        Self::with_registry(options, &PipelineRegistry::with_defaults())
    }

    /// Create an annotator, resolving `options.model` in `registry`.
    pub fn with_registry(options: AnnotatorOptions, registry: &PipelineRegistry) -> Result<Self> {
        let pipeline = registry.load(&options.model)?;
        Ok(Self { pipeline, options })
    }

    /// Create an annotator around an existing pipeline.
    pub fn from_pipeline(pipeline: Arc<dyn LinguisticPipeline>) -> Self {
        let options = AnnotatorOptions::new().with_model(pipeline.name());
        Self { pipeline, options }
    }

    /// Replace the output options, keeping the pipeline.
    pub fn with_json_format(mut self, format: render::JsonFormat) -> Self {
        self.options.json_format = format;
        self
    }

    /// Canonical name of the pipeline in use.
    pub fn pipeline_name(&self) -> &str {
        self.pipeline.name()
    }

    /// Options the annotator was built with.
    pub fn options(&self) -> &AnnotatorOptions {
        &self.options
    }

    /// Annotate a text.
    ///
    /// Returns one record per sentence detected by the pipeline, in
    /// document order. Empty input yields no records and does not reach
    /// the pipeline.
    pub fn annotate(&self, text: &str) -> Result<Vec<SentenceRecord>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let doc = self.pipeline.process(text).map_err(|e| match e {
            Error::Processing(_) => e,
            other => Error::Processing(other.to_string()),
        })?;
        doc.validate(text)?;

        let mut sentences = Vec::with_capacity(doc.sentences.len());
        for (sentence_id, span) in doc.sentences.iter().enumerate() {
            let tokens = doc.sentence_tokens(*span).ok_or_else(|| {
                Error::Processing(format!("sentence {} is out of range", sentence_id))
            })?;
            let sentence_text = doc.sentence_text(text, *span).ok_or_else(|| {
                Error::Processing(format!(
                    "sentence {} does not map onto the input text",
                    sentence_id
                ))
            })?;

            let mut record = SentenceRecord::new(sentence_id, sentence_text);
            for token in tokens {
                record.push_token(&token.text, &token.lemma, &token.pos, &token.dep);
            }

            // First self-headed token wins when a pipeline reports several.
            match tokens.iter().position(ParsedToken::is_root) {
                Some(position) => {
                    record.push_event(EventRecord::new(&tokens[position].text, position))
                }
                None => log::warn!("Sentence {} has no root token", sentence_id),
            }

            sentences.push(record);
        }

        log::debug!(
            "Annotated {} sentences ({} tokens) with '{}'",
            sentences.len(),
            doc.tokens.len(),
            self.pipeline.name()
        );
        Ok(sentences)
    }

    /// Annotate a UTF-8 text file and write the records as JSON.
    pub fn annotate_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        self.annotate_file_with_stats(input, output).map(|_| ())
    }

    /// Annotate a UTF-8 text file, write the records as JSON and return
    /// statistics about what was written.
    ///
    /// The input is read and processed completely before anything is
    /// written; a read or processing failure leaves `output` untouched.
    pub fn annotate_file_with_stats(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<AnnotationStats> {
        let input = input.as_ref();
        let output = output.as_ref();

        let bytes = fs::read(input).map_err(|e| Error::file_read(input, e))?;
        let text = String::from_utf8(bytes).map_err(|e| {
            Error::file_read(input, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;

        let sentences = self.annotate(&text)?;

        let json = render::serialize_json(&sentences, self.options.json_format)
            .map_err(|e| Error::file_write(output, e.into()))?;
        fs::write(output, json).map_err(|e| Error::file_write(output, e))?;

        log::info!(
            "Event extraction completed. Results saved to {}",
            output.display()
        );
        Ok(AnnotationStats::from_sentences(&sentences))
    }
}

impl Default for TextEventAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextEventAnnotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEventAnnotator")
            .field("pipeline", &self.pipeline.name())
            .field("options", &self.options)
            .finish()
    }
}
