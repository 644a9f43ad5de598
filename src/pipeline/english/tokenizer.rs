//! Rule-based English tokenizer.
//!
//! Splits on whitespace, then peels prefix punctuation, suffix punctuation
//! and clitics off each chunk. Abbreviations, dotted acronyms, decimals,
//! URLs and e-mail addresses stay whole.

use super::lexicon::{lookup_key, Lexicon};
use regex::Regex;

const PREFIX_CHARS: &[char] = &[
    '(', '[', '{', '"', '\'', '`', '\u{201C}', '\u{2018}', '\u{AB}', '\u{BF}', '\u{A1}', '$',
    '\u{A3}', '\u{20AC}', '#',
];

const SUFFIX_CHARS: &[char] = &[
    ',', ';', ':', '!', '?', ')', ']', '}', '"', '\'', '\u{201D}', '\u{2019}', '\u{BB}', '%',
    '\u{2026}',
];

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    /// The token's text.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// English tokenizer with precompiled patterns.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    whole: Regex,
    acronym: Regex,
}

impl Tokenizer {
    /// Create a tokenizer.
    pub fn new() -> Self {
        Self {
            whole: Regex::new(r"^(?:(?:https?://|www\.)\S+|[\w.+-]+@[\w-]+(?:\.[\w-]+)+)$")
                .expect("valid URL pattern"),
            acronym: Regex::new(r"^(?:\p{L}\.)+$").expect("valid acronym pattern"),
        }
    }

    /// Split text into token spans.
    pub fn tokenize(&self, text: &str, lexicon: &Lexicon) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut chunk_start = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(start) = chunk_start.take() {
                    self.split_chunk(text, start, i, lexicon, &mut spans);
                }
            } else if chunk_start.is_none() {
                chunk_start = Some(i);
            }
        }
        if let Some(start) = chunk_start {
            self.split_chunk(text, start, text.len(), lexicon, &mut spans);
        }

        spans
    }

    fn split_chunk(
        &self,
        text: &str,
        mut lo: usize,
        mut hi: usize,
        lexicon: &Lexicon,
        spans: &mut Vec<TokenSpan>,
    ) {
        let mut suffixes = Vec::new();

        // URLs and e-mail addresses keep everything except trailing punctuation.
        let mut trimmed = hi;
        while let Some(c) = text[lo..trimmed].chars().next_back() {
            if c == '.' || SUFFIX_CHARS.contains(&c) {
                trimmed -= c.len_utf8();
            } else {
                break;
            }
        }
        if trimmed > lo && self.whole.is_match(&text[lo..trimmed]) {
            spans.push(TokenSpan { start: lo, end: trimmed });
            self.push_punctuation(text, trimmed, hi, spans);
            return;
        }

        while lo < hi {
            let rest = &text[lo..hi];
            let Some(c) = rest.chars().next() else { break };
            if !PREFIX_CHARS.contains(&c) || rest.len() == c.len_utf8() {
                break;
            }
            if (c == '\'' || c == '\u{2018}') && CLITICS.contains(&lookup_key(rest).as_str()) {
                break;
            }
            spans.push(TokenSpan {
                start: lo,
                end: lo + c.len_utf8(),
            });
            lo += c.len_utf8();
        }

        while lo < hi {
            let body = &text[lo..hi];
            if body.ends_with("...") {
                if body.len() == 3 {
                    break;
                }
                suffixes.push(TokenSpan { start: hi - 3, end: hi });
                hi -= 3;
                continue;
            }
            let Some(c) = body.chars().next_back() else { break };
            if body.len() == c.len_utf8() {
                break;
            }
            if SUFFIX_CHARS.contains(&c) {
                suffixes.push(TokenSpan {
                    start: hi - c.len_utf8(),
                    end: hi,
                });
                hi -= c.len_utf8();
                continue;
            }
            if c == '.' && !self.keeps_period(body, lexicon) {
                suffixes.push(TokenSpan { start: hi - 1, end: hi });
                hi -= 1;
                continue;
            }
            break;
        }

        if lo < hi {
            self.split_clitic(text, lo, hi, spans);
        }
        spans.extend(suffixes.into_iter().rev());
    }

    /// Whether a period-final chunk keeps its period (abbreviations, initials).
    fn keeps_period(&self, body: &str, lexicon: &Lexicon) -> bool {
        if body.ends_with("..") {
            return false;
        }
        lexicon.is_abbreviation(&lookup_key(body)) || self.acronym.is_match(body)
    }

    /// Split a trailing clitic (`n't`, `'s`, `'ll`, ...) off a word.
    fn split_clitic(&self, text: &str, lo: usize, hi: usize, spans: &mut Vec<TokenSpan>) {
        let word = &text[lo..hi];
        let key = lookup_key(word);

        if key.len() > 3 && key.ends_with("n't") {
            // "n't" is three chars; the apostrophe may be multi-byte.
            let split = word
                .char_indices()
                .rev()
                .nth(2)
                .map(|(i, _)| lo + i)
                .unwrap_or(lo);
            if split > lo {
                spans.push(TokenSpan { start: lo, end: split });
                spans.push(TokenSpan { start: split, end: hi });
                return;
            }
        }

        if let Some((i, _)) = word
            .char_indices()
            .rev()
            .find(|(_, c)| *c == '\'' || *c == '\u{2019}')
        {
            let clitic = lookup_key(&word[i..]);
            if i > 0 && CLITICS.contains(&clitic.as_str()) {
                spans.push(TokenSpan { start: lo, end: lo + i });
                spans.push(TokenSpan { start: lo + i, end: hi });
                return;
            }
        }

        spans.push(TokenSpan { start: lo, end: hi });
    }

    /// Emit each character of a punctuation run, keeping "..." together.
    fn push_punctuation(&self, text: &str, mut lo: usize, hi: usize, spans: &mut Vec<TokenSpan>) {
        while lo < hi {
            if text[lo..hi].starts_with("...") {
                spans.push(TokenSpan { start: lo, end: lo + 3 });
                lo += 3;
                continue;
            }
            let width = text[lo..hi].chars().next().map_or(1, char::len_utf8);
            spans.push(TokenSpan { start: lo, end: lo + width });
            lo += width;
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
