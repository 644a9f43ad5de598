//! Linguistic pipeline abstraction layer.
//!
//! Provides a trait-based interface for sentence segmentation, tagging and
//! dependency parsing, isolating the concrete pipeline from the annotator.
//! The annotator only ever sees the plain structs defined here.

use crate::error::{Error, Result};

/// A token produced by a pipeline.
///
/// Indices are document-level: `index` is the token's position among all
/// tokens of the document and `head` is the index of its syntactic head.
/// A root token is its own head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    /// Document-level token index.
    pub index: usize,
    /// Surface text.
    pub text: String,
    /// Base form.
    pub lemma: String,
    /// Coarse part-of-speech tag.
    pub pos: String,
    /// Dependency label.
    pub dep: String,
    /// Document-level index of the head token.
    pub head: usize,
    /// Byte offset of the first character in the source text.
    pub start: usize,
    /// Byte offset one past the last character in the source text.
    pub end: usize,
}

impl ParsedToken {
    /// Whether the token heads itself.
    pub fn is_root(&self) -> bool {
        self.head == self.index
    }
}

/// A sentence as a half-open range of document-level token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    /// First token index.
    pub start: usize,
    /// One past the last token index.
    pub end: usize,
}

impl SentenceSpan {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of tokens in the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of a pipeline run over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    /// All tokens in document order.
    pub tokens: Vec<ParsedToken>,
    /// Sentences in document order.
    pub sentences: Vec<SentenceSpan>,
}

impl ParsedDoc {
    /// Create an empty parsed document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens of a sentence.
    ///
    /// Returns `None` when the span does not fit the token list.
    pub fn sentence_tokens(&self, span: SentenceSpan) -> Option<&[ParsedToken]> {
        self.tokens.get(span.start..span.end)
    }

    /// Literal source text covered by a sentence.
    ///
    /// Returns `None` when the span or token offsets do not fit `text`.
    pub fn sentence_text<'a>(&self, text: &'a str, span: SentenceSpan) -> Option<&'a str> {
        let tokens = self.sentence_tokens(span)?;
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => text.get(first.start..last.end),
            _ => Some(""),
        }
    }

    /// Check the document against the pipeline output contract.
    ///
    /// Token indices must match positions, heads must point inside the
    /// document, offsets must lie on character boundaries of `text`, and
    /// sentences must be ordered, non-overlapping and in range.
    pub fn validate(&self, text: &str) -> Result<()> {
        let count = self.tokens.len();

        for (position, token) in self.tokens.iter().enumerate() {
            if token.index != position {
                return Err(Error::Processing(format!(
                    "token at position {} reports index {}",
                    position, token.index
                )));
            }
            if token.head >= count {
                return Err(Error::Processing(format!(
                    "token {} has head {} outside the document ({} tokens)",
                    position, token.head, count
                )));
            }
            if token.start > token.end || text.get(token.start..token.end).is_none() {
                return Err(Error::Processing(format!(
                    "token {} has invalid offsets {}..{}",
                    position, token.start, token.end
                )));
            }
        }

        let mut previous_end = 0;
        for (position, span) in self.sentences.iter().enumerate() {
            if span.start > span.end || span.end > count {
                return Err(Error::Processing(format!(
                    "sentence {} covers tokens {}..{} but the document has {} tokens",
                    position, span.start, span.end, count
                )));
            }
            if span.start < previous_end {
                return Err(Error::Processing(format!(
                    "sentence {} overlaps the previous sentence",
                    position
                )));
            }
            previous_end = span.end;
        }

        Ok(())
    }
}

/// Abstract interface for a linguistic pipeline.
///
/// Implementations provide sentence segmentation, tokenization,
/// lemmatization, part-of-speech tagging and dependency parsing, without
/// exposing any implementation-specific object model.
pub trait LinguisticPipeline: Send + Sync {
    /// Canonical identifier of the pipeline (e.g. `en_core_web_sm`).
    fn name(&self) -> &str;

    /// Additional identifiers the pipeline answers to.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Run the pipeline over a text.
    fn process(&self, text: &str) -> Result<ParsedDoc>;
}
