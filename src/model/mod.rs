//! Annotation model types.
//!
//! These records are the output contract of the annotator: one
//! [`SentenceRecord`] per detected sentence, each carrying its tokens and
//! at most one root-token [`EventRecord`]. Field names serialize exactly as
//! the JSON output expects (`sentenceID`, `tokenID`, `eventTokenID`, ...).

mod sentence;
mod stats;
mod token;

pub use sentence::SentenceRecord;
pub use stats::AnnotationStats;
pub use token::{EventRecord, TokenRecord};
