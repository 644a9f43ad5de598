//! Integration tests for the annotator.

use std::fs;
use std::sync::Arc;
use textevent::error::{Error, Result};
use textevent::{
    AnnotatorOptions, EventRecord, JsonFormat, LinguisticPipeline, ParsedDoc, ParsedToken,
    PipelineRegistry, SentenceRecord, SentenceSpan, TextEventAnnotator,
};

/// Mock pipeline: sentences end at ".", words split on spaces, the first
/// word of each sentence is the root.
struct MockPipeline;

impl LinguisticPipeline for MockPipeline {
    fn name(&self) -> &str {
        "mock"
    }

    fn aliases(&self) -> &[&str] {
        &["mock_sm"]
    }

    fn process(&self, text: &str) -> Result<ParsedDoc> {
        let mut doc = ParsedDoc::new();
        let mut sentence_start = 0;
        let mut root = 0;
        let mut offset = 0;

        for word in text.split(' ') {
            let index = doc.tokens.len();
            if index == sentence_start {
                root = index;
            }
            doc.tokens.push(ParsedToken {
                index,
                text: word.to_string(),
                lemma: word.to_lowercase(),
                pos: "X".to_string(),
                dep: if index == root { "ROOT" } else { "dep" }.to_string(),
                head: root,
                start: offset,
                end: offset + word.len(),
            });
            offset += word.len() + 1;

            if word.ends_with('.') {
                doc.sentences
                    .push(SentenceSpan::new(sentence_start, doc.tokens.len()));
                sentence_start = doc.tokens.len();
            }
        }
        if sentence_start < doc.tokens.len() {
            doc.sentences
                .push(SentenceSpan::new(sentence_start, doc.tokens.len()));
        }
        Ok(doc)
    }
}

/// Pipeline that reports a fixed, possibly broken, document.
struct FixedPipeline(ParsedDoc);

impl LinguisticPipeline for FixedPipeline {
    fn name(&self) -> &str {
        "fixed"
    }

    fn process(&self, _text: &str) -> Result<ParsedDoc> {
        Ok(self.0.clone())
    }
}

/// Pipeline that always fails.
struct FailingPipeline;

impl LinguisticPipeline for FailingPipeline {
    fn name(&self) -> &str {
        "failing"
    }

    fn process(&self, _text: &str) -> Result<ParsedDoc> {
        Err(Error::model_load("failing", "weights missing"))
    }
}

fn token(index: usize, text: &str, head: usize, start: usize) -> ParsedToken {
    ParsedToken {
        index,
        text: text.to_string(),
        lemma: text.to_string(),
        pos: "X".to_string(),
        dep: "dep".to_string(),
        head,
        start,
        end: start + text.len(),
    }
}

fn mock_annotator() -> TextEventAnnotator {
    TextEventAnnotator::from_pipeline(Arc::new(MockPipeline))
}

#[test]
fn test_sentence_and_token_ids_are_contiguous() {
    let sentences = mock_annotator()
        .annotate("Rain fell hard. Wind blew. Calm")
        .unwrap();

    assert_eq!(sentences.len(), 3);
    for (i, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence.sentence_id, i);
        for (j, token) in sentence.tokens.iter().enumerate() {
            assert_eq!(token.token_id, j);
        }
    }
    assert_eq!(sentences[0].sentence, "Rain fell hard.");
    assert_eq!(sentences[1].sentence, "Wind blew.");
    assert_eq!(sentences[2].sentence, "Calm");
}

#[test]
fn test_event_token_id_is_sentence_relative() {
    let sentences = mock_annotator().annotate("Rain fell. Wind blew.").unwrap();
    assert_eq!(sentences[1].events, vec![EventRecord::new("Wind", 0)]);
}

#[test]
fn test_first_root_wins() {
    let doc = ParsedDoc {
        tokens: vec![token(0, "a", 1, 0), token(1, "b", 1, 2), token(2, "c", 2, 4)],
        sentences: vec![SentenceSpan::new(0, 3)],
    };
    let annotator = TextEventAnnotator::from_pipeline(Arc::new(FixedPipeline(doc)));
    let sentences = annotator.annotate("a b c").unwrap();
    assert_eq!(sentences[0].events, vec![EventRecord::new("b", 1)]);
}

#[test]
fn test_sentence_without_root_has_no_event() {
    let doc = ParsedDoc {
        tokens: vec![token(0, "a", 1, 0), token(1, "b", 0, 2)],
        sentences: vec![SentenceSpan::new(0, 2)],
    };
    let annotator = TextEventAnnotator::from_pipeline(Arc::new(FixedPipeline(doc)));
    let sentences = annotator.annotate("a b").unwrap();
    assert_eq!(sentences.len(), 1);
    assert!(sentences[0].events.is_empty());
}

#[test]
fn test_sentence_text_keeps_inner_whitespace() {
    let doc = ParsedDoc {
        tokens: vec![token(0, "a", 0, 1), token(1, "b", 0, 5)],
        sentences: vec![SentenceSpan::new(0, 2)],
    };
    let annotator = TextEventAnnotator::from_pipeline(Arc::new(FixedPipeline(doc)));
    let sentences = annotator.annotate(" a \n\tb  ").unwrap();
    assert_eq!(sentences[0].sentence, "a \n\tb");
}

#[test]
fn test_malformed_pipeline_output() {
    let text = "a b";
    let cases = vec![
        // sentence past the end of the token list
        ParsedDoc {
            tokens: vec![token(0, "a", 0, 0)],
            sentences: vec![SentenceSpan::new(0, 3)],
        },
        // head outside the document
        ParsedDoc {
            tokens: vec![token(0, "a", 9, 0)],
            sentences: vec![SentenceSpan::new(0, 1)],
        },
        // offsets past the end of the text
        ParsedDoc {
            tokens: vec![token(0, "abcdef", 0, 0)],
            sentences: vec![SentenceSpan::new(0, 1)],
        },
    ];

    for doc in cases {
        let annotator = TextEventAnnotator::from_pipeline(Arc::new(FixedPipeline(doc)));
        assert!(matches!(
            annotator.annotate(text),
            Err(Error::Processing(_))
        ));
    }
}

#[test]
fn test_pipeline_failure_is_processing_error() {
    let annotator = TextEventAnnotator::from_pipeline(Arc::new(FailingPipeline));
    let err = annotator.annotate("anything").unwrap_err();
    assert!(matches!(err, Error::Processing(ref msg) if msg.contains("weights missing")));
}

#[test]
fn test_custom_registry() {
    let mut registry = PipelineRegistry::new();
    registry.register(Arc::new(MockPipeline));

    let options = AnnotatorOptions::new().with_model("MOCK_SM");
    let annotator = TextEventAnnotator::with_registry(options, &registry).unwrap();
    assert_eq!(annotator.pipeline_name(), "mock");

    let options = AnnotatorOptions::new();
    assert!(matches!(
        TextEventAnnotator::with_registry(options, &registry),
        Err(Error::ModelLoad { .. })
    ));
}

#[test]
fn test_annotate_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.json");
    let text = "The cat sleeps. Dogs bark loudly at night!";
    fs::write(&input, text).unwrap();

    let annotator = TextEventAnnotator::new();
    let stats = annotator.annotate_file_with_stats(&input, &output).unwrap();

    let written: Vec<SentenceRecord> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, annotator.annotate(text).unwrap());
    assert_eq!(stats.sentence_count, 2);
    assert_eq!(stats.event_count, 2);
}

#[test]
fn test_annotate_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.json");
    fs::write(&input, "Zoë waited. Café crème.").unwrap();

    mock_annotator().annotate_file(&input, &output).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.starts_with("[\n    {\n        \"sentenceID\": 0,\n        \"sentence\": \"Zoë waited.\","));
    assert!(json.contains("Café crème."));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_annotate_file_compact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.json");
    fs::write(&input, "Rain fell.").unwrap();

    mock_annotator()
        .with_json_format(JsonFormat::Compact)
        .annotate_file(&input, &output)
        .unwrap();

    let json = fs::read_to_string(&output).unwrap();
    assert!(!json.contains('\n'));
}

#[test]
fn test_empty_file_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.json");
    fs::write(&input, "").unwrap();

    textevent::annotate_file(&input, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");
    let output = dir.path().join("output.json");

    let err = mock_annotator().annotate_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::FileRead { ref path, .. } if path == &input));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    fs::write(&output, "previous").unwrap();

    let result = mock_annotator().annotate_file(dir.path().join("missing.txt"), &output);
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn test_invalid_utf8_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    let output = dir.path().join("output.json");
    fs::write(&input, [b'c', b'a', b'f', 0xE9]).unwrap();

    let err = mock_annotator().annotate_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Rain fell.").unwrap();
    let output = dir.path().join("no_such_dir").join("output.json");

    let err = mock_annotator().annotate_file(&input, &output).unwrap_err();
    assert!(matches!(err, Error::FileWrite { ref path, .. } if path == &output));
}
