//! Sentence boundary detection over token spans.

use super::tokenizer::TokenSpan;
use crate::pipeline::SentenceSpan;

const CLOSERS: &[&str] = &[")", "]", "}", "\"", "'", "\u{201D}", "\u{2019}", "\u{BB}"];

/// Whether a token ends a sentence (`.`, `!`, `?`, `...`, `?!`, ...).
fn is_terminal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| matches!(c, '.' | '!' | '?' | '\u{2026}'))
}

/// Whether the whitespace between two tokens contains a blank line.
fn is_paragraph_break(gap: &str) -> bool {
    let mut newlines = 0;
    for c in gap.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines >= 2 {
                return true;
            }
        } else if !c.is_whitespace() {
            newlines = 0;
        }
    }
    false
}

/// Group tokens into sentences.
///
/// A sentence ends after a terminal punctuation token together with any
/// closing quotes or brackets attached to it, or before a blank line.
pub fn segment(text: &str, tokens: &[TokenSpan]) -> Vec<SentenceSpan> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if i > start && is_paragraph_break(&text[tokens[i - 1].end..tokens[i].start]) {
            sentences.push(SentenceSpan::new(start, i));
            start = i;
        }

        if is_terminal(tokens[i].text(text)) {
            let mut end = i + 1;
            while end < tokens.len()
                && tokens[end].start == tokens[end - 1].end
                && CLOSERS.contains(&tokens[end].text(text))
            {
                end += 1;
            }
            sentences.push(SentenceSpan::new(start, end));
            start = end;
            i = end;
            continue;
        }

        i += 1;
    }

    if start < tokens.len() {
        sentences.push(SentenceSpan::new(start, tokens.len()));
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::english::lexicon::Lexicon;
    use crate::pipeline::english::tokenizer::Tokenizer;

    fn sentences(text: &str) -> Vec<String> {
        let tokens = Tokenizer::new().tokenize(text, &Lexicon::english());
        segment(text, &tokens)
            .into_iter()
            .map(|s| text[tokens[s.start].start..tokens[s.end - 1].end].to_string())
            .collect()
    }

    #[test]
    fn test_terminal_punctuation() {
        assert_eq!(
            sentences("The cat sleeps. The dog barks! Why?"),
            vec!["The cat sleeps.", "The dog barks!", "Why?"]
        );
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        assert_eq!(
            sentences("He said \"stop.\" Then he left."),
            vec!["He said \"stop.\"", "Then he left."]
        );
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        assert_eq!(
            sentences("Dr. Smith arrived. He sat."),
            vec!["Dr. Smith arrived.", "He sat."]
        );
    }

    #[test]
    fn test_paragraph_break() {
        assert_eq!(
            sentences("A heading\n\nThe body text"),
            vec!["A heading", "The body text"]
        );
    }

    #[test]
    fn test_no_terminal_punctuation() {
        assert_eq!(sentences("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn test_empty() {
        assert!(segment("", &[]).is_empty());
    }

    #[test]
    fn test_is_paragraph_break() {
        assert!(is_paragraph_break("\n\n"));
        assert!(is_paragraph_break(" \n \t\n "));
        assert!(!is_paragraph_break(" \n "));
    }
}
