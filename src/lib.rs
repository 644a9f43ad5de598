//! # textevent
//!
//! Sentence segmentation, token annotation and naive event extraction.
//!
//! Raw text is run through a linguistic pipeline that segments it into
//! sentences and tags every token with its lemma, part of speech and
//! dependency label. Each sentence's syntactic root token is reported as its
//! "event". Results come back as typed records and serialize to JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textevent::{annotate, render, JsonFormat};
//!
//! fn main() -> textevent::Result<()> {
//!     let sentences = annotate("The cat sleeps. The dog barks.")?;
//!
//!     for sentence in &sentences {
//!         if let Some(event) = sentence.event() {
//!             println!("{} -> {}", sentence.sentence, event.event);
//!         }
//!     }
//!
//!     println!("{}", render::to_json(&sentences, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pluggable pipelines**: any [`LinguisticPipeline`] can back the annotator
//! - **Built-in English pipeline**: rule-based, no external model required
//! - **Registry**: pipelines addressed by identifier (`en_core_web_sm`, `en`)
//! - **JSON output**: 4-space indented, non-ASCII kept literal

pub mod annotate;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use annotate::{AnnotatorOptions, TextEventAnnotator};
pub use error::{Error, Result};
pub use model::{AnnotationStats, EventRecord, SentenceRecord, TokenRecord};
pub use pipeline::{
    EnglishPipeline, LinguisticPipeline, ParsedDoc, ParsedToken, PipelineRegistry, SentenceSpan,
    DEFAULT_MODEL,
};
pub use render::JsonFormat;

use std::path::Path;

/// Annotate a text with the default pipeline.
///
/// # Example
///
/// ```no_run
/// let sentences = textevent::annotate("The cat sleeps.").unwrap();
/// assert_eq!(sentences[0].events[0].event, "sleeps");
/// ```
pub fn annotate(text: &str) -> Result<Vec<SentenceRecord>> {
    TextEventAnnotator::new().annotate(text)
}

/// Annotate a UTF-8 text file with the default pipeline and write the
/// records to `output` as pretty JSON.
///
/// # Example
///
/// ```no_run
/// textevent::annotate_file("article.txt", "article_events.json").unwrap();
/// ```
pub fn annotate_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    TextEventAnnotator::new().annotate_file(input, output)
}

/// Annotate a text with a pipeline chosen by identifier.
///
/// Fails with [`Error::ModelLoad`] when the identifier is not a built-in
/// pipeline.
pub fn annotate_with_model(text: &str, model: &str) -> Result<Vec<SentenceRecord>> {
    let options = AnnotatorOptions::new().with_model(model);
    TextEventAnnotator::with_options(options)?.annotate(text)
}

/// Annotate a text and return the records as JSON.
///
/// # Example
///
/// ```no_run
/// use textevent::{to_json, JsonFormat};
///
/// let json = to_json("The cat sleeps.", JsonFormat::Compact).unwrap();
/// println!("{}", json);
/// ```
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let sentences = annotate(text)?;
    render::to_json(&sentences, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_empty() {
        assert!(annotate("").unwrap().is_empty());
    }

    #[test]
    fn test_annotate_whitespace_only() {
        assert!(annotate(" \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_annotate_example() {
        let sentences = annotate("The cat sleeps.").unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].sentence_id, 0);
        assert_eq!(sentences[0].sentence, "The cat sleeps.");
        assert_eq!(sentences[0].events, vec![EventRecord::new("sleeps", 2)]);
    }

    #[test]
    fn test_annotate_with_unknown_model() {
        let result = annotate_with_model("The cat sleeps.", "de_core_news_sm");
        assert!(matches!(result, Err(Error::ModelLoad { .. })));
    }

    #[test]
    fn test_annotate_with_alias() {
        let sentences = annotate_with_model("Dogs bark.", "english").unwrap();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_to_json() {
        let json = to_json("The cat sleeps.", JsonFormat::Compact).unwrap();
        assert!(json.starts_with("[{\"sentenceID\":0,\"sentence\":\"The cat sleeps.\""));
        assert!(json.contains("{\"event\":\"sleeps\",\"eventTokenID\":2}"));
    }
}
