//! Aggregate statistics over annotated sentences.

use super::SentenceRecord;
use serde::{Deserialize, Serialize};

/// Counts collected from a set of sentence records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationStats {
    /// Number of sentences
    pub sentence_count: usize,

    /// Number of tokens across all sentences
    pub token_count: usize,

    /// Number of events across all sentences
    pub event_count: usize,

    /// Sentences that produced no event
    pub sentences_without_event: usize,
}

impl AnnotationStats {
    /// Collect statistics from sentence records.
    pub fn from_sentences(sentences: &[SentenceRecord]) -> Self {
        sentences.iter().fold(Self::default(), |mut stats, s| {
            stats.sentence_count += 1;
            stats.token_count += s.tokens.len();
            stats.event_count += s.events.len();
            if s.events.is_empty() {
                stats.sentences_without_event += 1;
            }
            stats
        })
    }

    /// Average tokens per sentence (0 when there are no sentences).
    pub fn tokens_per_sentence(&self) -> f64 {
        if self.sentence_count == 0 {
            0.0
        } else {
            self.token_count as f64 / self.sentence_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventRecord;

    #[test]
    fn test_stats_from_sentences() {
        let mut first = SentenceRecord::new(0, "Go.");
        first.push_token("Go", "go", "VERB", "ROOT");
        first.push_token(".", ".", "PUNCT", "punct");
        first.push_event(EventRecord::new("Go", 0));

        let mut second = SentenceRecord::new(1, "!");
        second.push_token("!", "!", "PUNCT", "punct");

        let stats = AnnotationStats::from_sentences(&[first, second]);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.token_count, 3);
        assert_eq!(stats.event_count, 1);
        assert_eq!(stats.sentences_without_event, 1);
        assert!((stats.tokens_per_sentence() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty() {
        let stats = AnnotationStats::from_sentences(&[]);
        assert_eq!(stats, AnnotationStats::default());
        assert_eq!(stats.tokens_per_sentence(), 0.0);
    }
}
