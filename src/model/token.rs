//! Token and event records.

use serde::{Deserialize, Serialize};

/// A token of a sentence with its linguistic attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Position within the sentence (0-indexed)
    #[serde(rename = "tokenID")]
    pub token_id: usize,

    /// Surface text
    pub token: String,

    /// Base form
    pub lemma: String,

    /// Coarse part-of-speech tag
    pub pos: String,

    /// Dependency label
    pub dep: String,
}

/// The naive event of a sentence: its syntactic root token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Surface text of the root token
    pub event: String,

    /// Position of the root token within the sentence
    #[serde(rename = "eventTokenID")]
    pub event_token_id: usize,
}

impl EventRecord {
    /// Create a new event record.
    pub fn new(event: impl Into<String>, event_token_id: usize) -> Self {
        Self {
            event: event.into(),
            event_token_id,
        }
    }
}
