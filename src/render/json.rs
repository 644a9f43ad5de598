//! JSON rendering for sentence records.

use crate::error::{Error, Result};
use crate::model::SentenceRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 4-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert sentence records to JSON.
///
/// Non-ASCII characters are written as-is, never `\u` escaped.
pub fn to_json(sentences: &[SentenceRecord], format: JsonFormat) -> Result<String> {
    serialize(sentences, format)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize records to a JSON string in the given format.
pub(crate) fn serialize(
    sentences: &[SentenceRecord],
    format: JsonFormat,
) -> serde_json::Result<String> {
    match format {
        JsonFormat::Pretty => {
            let mut buf = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
            sentences.serialize(&mut serializer)?;
            String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
        }
        JsonFormat::Compact => serde_json::to_string(sentences),
    }
}
