//! Built-in rule-based English pipeline.
//!
//! Runs tokenization, sentence segmentation, part-of-speech tagging,
//! lemmatization and dependency parsing without any external model.
//! Tags follow the Universal POS set and relations use ClearNLP-style
//! labels (`ROOT`, `nsubj`, `dobj`, ...).

mod lemmatizer;
mod lexicon;
mod parser;
mod segmenter;
mod tagger;
mod tags;
mod tokenizer;

pub use tags::{Dep, Pos};

use super::{LinguisticPipeline, ParsedDoc, ParsedToken, DEFAULT_MODEL};
use crate::error::Result;
use lexicon::{lookup_key, Lexicon};
use tagger::Tagger;
use tokenizer::Tokenizer;

/// Rule-based English pipeline.
///
/// Registered as the default pipeline; built once and shared.
#[derive(Debug, Clone)]
pub struct EnglishPipeline {
    lexicon: Lexicon,
    tokenizer: Tokenizer,
    tagger: Tagger,
}

impl EnglishPipeline {
    /// Create the pipeline, compiling its patterns and word lists.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
            tokenizer: Tokenizer::new(),
            tagger: Tagger::new(),
        }
    }

    /// Tag, lemmatize and parse one sentence whose first token is `offset`.
    fn process_sentence(
        &self,
        text: &str,
        spans: &[tokenizer::TokenSpan],
        offset: usize,
    ) -> Vec<ParsedToken> {
        let words: Vec<&str> = spans.iter().map(|s| s.text(text)).collect();
        let keys: Vec<String> = words.iter().map(|w| lookup_key(w)).collect();
        let tags = self.tagger.tag(&words, &self.lexicon);
        let arcs = parser::parse(&keys, &tags, &self.lexicon);

        spans
            .iter()
            .zip(words.iter().zip(tags.iter().zip(arcs)))
            .enumerate()
            .map(|(i, (span, (word, (pos, arc))))| ParsedToken {
                index: offset + i,
                text: word.to_string(),
                lemma: lemmatizer::lemmatize(word, *pos, &self.lexicon),
                pos: pos.as_str().to_string(),
                dep: arc.dep.as_str().to_string(),
                head: offset + arc.head,
                start: span.start,
                end: span.end,
            })
            .collect()
    }
}

impl Default for EnglishPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl LinguisticPipeline for EnglishPipeline {
    fn name(&self) -> &str {
        DEFAULT_MODEL
    }

    fn aliases(&self) -> &[&str] {
        &["en", "english"]
    }

    fn process(&self, text: &str) -> Result<ParsedDoc> {
        let spans = self.tokenizer.tokenize(text, &self.lexicon);
        let sentences = segmenter::segment(text, &spans);

        let mut doc = ParsedDoc::new();
        for sentence in &sentences {
            let tokens =
                self.process_sentence(text, &spans[sentence.start..sentence.end], sentence.start);
            doc.tokens.extend(tokens);
        }
        doc.sentences = sentences;

        log::debug!(
            "{}: {} tokens in {} sentences",
            DEFAULT_MODEL,
            doc.tokens.len(),
            doc.sentences.len()
        );
        Ok(doc)
    }
}
