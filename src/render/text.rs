//! Tab-separated text rendering for sentence records.

use crate::model::SentenceRecord;

/// Render sentence records as a readable table.
///
/// Each sentence becomes a block: a `#` header with its ID and text, one
/// `tokenID token lemma pos dep` line per token (tab-separated) and an
/// `# event:` line. Blocks are separated by a blank line.
pub fn to_text(sentences: &[SentenceRecord]) -> String {
    let blocks: Vec<String> = sentences.iter().map(render_sentence).collect();
    blocks.join("\n")
}

fn render_sentence(sentence: &SentenceRecord) -> String {
    let mut output = format!("# {}\t{}\n", sentence.sentence_id, sentence.sentence);

    for token in &sentence.tokens {
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            token.token_id, token.token, token.lemma, token.pos, token.dep
        ));
    }

    match sentence.event() {
        Some(event) => {
            output.push_str(&format!("# event: {} ({})\n", event.event, event.event_token_id))
        }
        None => output.push_str("# event: -\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventRecord;

    #[test]
    fn test_to_text() {
        let mut first = SentenceRecord::new(0, "Cats sleep.");
        first.push_token("Cats", "cat", "NOUN", "nsubj");
        first.push_token("sleep", "sleep", "VERB", "ROOT");
        first.push_token(".", ".", "PUNCT", "punct");
        first.push_event(EventRecord::new("sleep", 1));
        let second = SentenceRecord::new(1, "");

        let text = to_text(&[first, second]);
        assert_eq!(
            text,
            "# 0\tCats sleep.\n\
             0\tCats\tcat\tNOUN\tnsubj\n\
             1\tsleep\tsleep\tVERB\tROOT\n\
             2\t.\t.\tPUNCT\tpunct\n\
             # event: sleep (1)\n\
             \n\
             # 1\t\n\
             # event: -\n"
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_text(&[]), "");
    }
}
