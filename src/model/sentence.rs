//! Sentence-level records.

use super::{EventRecord, TokenRecord};
use serde::{Deserialize, Serialize};

/// One annotated sentence of the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Position of the sentence in the document (0-indexed)
    #[serde(rename = "sentenceID")]
    pub sentence_id: usize,

    /// Literal text of the sentence
    pub sentence: String,

    /// Tokens in surface order
    pub tokens: Vec<TokenRecord>,

    /// Root-token events (at most one)
    pub events: Vec<EventRecord>,
}

impl SentenceRecord {
    /// Create a new sentence record without tokens or events.
    pub fn new(sentence_id: usize, sentence: impl Into<String>) -> Self {
        Self {
            sentence_id,
            sentence: sentence.into(),
            tokens: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Append a token, assigning the next token ID.
    pub fn push_token(
        &mut self,
        token: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
        dep: impl Into<String>,
    ) {
        let token_id = self.tokens.len();
        self.tokens.push(TokenRecord {
            token_id,
            token: token.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            dep: dep.into(),
        });
    }

    /// Record an event.
    pub fn push_event(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    /// Number of tokens in the sentence.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// The first event, if any.
    pub fn event(&self) -> Option<&EventRecord> {
        self.events.first()
    }

    /// The token an event points at.
    pub fn event_token(&self) -> Option<&TokenRecord> {
        self.event()
            .and_then(|event| self.tokens.get(event.event_token_id))
    }

    /// Check if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
