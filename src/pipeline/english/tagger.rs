//! Heuristic part-of-speech tagger.
//!
//! Tags come from three passes over a sentence: a lexical pass (closed
//! classes, numbers, punctuation), a left-to-right pass that guesses open
//! classes from shape, suffix and left context, and a disambiguation pass
//! for words whose tag depends on what follows them.

use super::lexicon::{lookup_key, Lexicon};
use super::tags::Pos;
use regex::Regex;

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ic"];

const DEMONSTRATIVES: &[&str] = &["this", "these", "those"];

/// Part-of-speech tagger with precompiled patterns.
#[derive(Debug, Clone)]
pub struct Tagger {
    number: Regex,
    punct: Regex,
    symbol: Regex,
}

impl Tagger {
    /// Create a tagger.
    pub fn new() -> Self {
        Self {
            number: Regex::new(r"^[+-]?(?:\d+(?:[.,:/]\d+)*|\.\d+)(?:st|nd|rd|th|s)?$")
                .expect("valid number pattern"),
            punct: Regex::new(r"^\p{P}+$").expect("valid punctuation pattern"),
            symbol: Regex::new(r"^\p{S}+$").expect("valid symbol pattern"),
        }
    }

    /// Tag the words of one sentence.
    pub fn tag(&self, words: &[&str], lexicon: &Lexicon) -> Vec<Pos> {
        let keys: Vec<String> = words.iter().map(|w| lookup_key(w)).collect();

        let mut partial: Vec<Option<Pos>> = words
            .iter()
            .zip(&keys)
            .map(|(word, key)| self.lexical(word, key, lexicon))
            .collect();

        let mut clause = Clause {
            initial: true,
            has_verb: false,
        };
        for i in 0..partial.len() {
            if partial[i].is_none() {
                partial[i] = Some(open_class(i, words, &keys, &partial, clause, lexicon));
            }
            clause.advance(partial[i]);
        }

        let mut tags: Vec<Pos> = partial.into_iter().map(|t| t.unwrap_or(Pos::X)).collect();
        disambiguate(&keys, &mut tags, lexicon);
        tags
    }

    /// Tag from the word alone, or `None` for open-class words.
    fn lexical(&self, word: &str, key: &str, lexicon: &Lexicon) -> Option<Pos> {
        if let Some(pos) = lexicon.closed_class(key) {
            return Some(pos);
        }
        if self.number.is_match(key) {
            return Some(Pos::Num);
        }
        if word.contains("://") || word.starts_with("www.") || (word.len() > 2 && word.contains('@'))
        {
            return Some(Pos::X);
        }
        if word == "%" {
            return Some(Pos::Noun);
        }
        if self.punct.is_match(word) {
            return Some(Pos::Punct);
        }
        if self.symbol.is_match(word) {
            return Some(Pos::Sym);
        }
        None
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

fn has_adjective_suffix(key: &str) -> bool {
    (key.len() > 4 && key.ends_with("al"))
        || ADJECTIVE_SUFFIXES
            .iter()
            .any(|s| key.len() > s.len() + 2 && key.ends_with(s))
}

/// Looks like an inflected or base verb form.
fn is_verbal(key: &str, lexicon: &Lexicon) -> bool {
    lexicon.is_verb_form(key)
        || (key.len() > 4 && (key.ends_with("ed") || key.ends_with("ing")))
}

/// What the words left of the current one say about its clause.
#[derive(Debug, Clone, Copy)]
struct Clause {
    /// Only punctuation so far.
    initial: bool,
    /// A verb since the last conjunction or punctuation.
    has_verb: bool,
}

impl Clause {
    fn advance(&mut self, tag: Option<Pos>) {
        match tag {
            Some(Pos::Punct) => self.has_verb = false,
            Some(Pos::Cconj) | Some(Pos::Sconj) => {
                self.initial = false;
                self.has_verb = false;
            }
            Some(Pos::Verb) => {
                self.initial = false;
                self.has_verb = true;
            }
            _ => self.initial = false,
        }
    }
}

/// Guess the tag of an open-class word from shape and context.
fn open_class(
    i: usize,
    words: &[&str],
    keys: &[String],
    tags: &[Option<Pos>],
    clause: Clause,
    lexicon: &Lexicon,
) -> Pos {
    let word = words[i];
    let key = keys[i].as_str();
    let prev = if i > 0 { tags[i - 1] } else { None };
    let prev_key = if i > 0 { keys[i - 1].as_str() } else { "" };
    let Clause { initial, has_verb } = clause;
    let capitalized = word.chars().next().is_some_and(char::is_uppercase);

    if key.len() > 4 && key.ends_with("ly") && !lexicon.is_verb_form(key) {
        return Pos::Adv;
    }

    if capitalized {
        if !initial {
            return Pos::Propn;
        }
        if lexicon.is_base_verb(key) {
            return Pos::Verb;
        }
        let next_capitalized = words
            .get(i + 1)
            .and_then(|w| w.chars().next())
            .is_some_and(char::is_uppercase);
        if !next_capitalized && key.len() > 3 && key.ends_with('s') && !key.ends_with("ss") {
            return Pos::Noun;
        }
        return Pos::Propn;
    }

    match prev {
        Some(Pos::Det) | Some(Pos::Adj) | Some(Pos::Num) => nominal_or_adjective(i, keys, tags),
        Some(Pos::Pron) if lexicon.is_possessive(prev_key) => nominal_or_adjective(i, keys, tags),
        Some(Pos::Aux) if lexicon.is_copula(prev_key) => {
            if key.ends_with("ing") || key.ends_with("ed") || lexicon.irregular_verb(key).is_some()
            {
                Pos::Verb
            } else if is_verbal(key, lexicon) && !lexicon.is_base_verb(key) {
                Pos::Verb
            } else {
                Pos::Adj
            }
        }
        Some(Pos::Aux) if lexicon.is_light_auxiliary(prev_key) => {
            if is_verbal(key, lexicon) || key.ends_with("en") {
                Pos::Verb
            } else {
                Pos::Noun
            }
        }
        Some(Pos::Aux) => Pos::Verb,
        Some(Pos::Adp) if prev_key == "to" && lexicon.is_base_verb(key) => Pos::Verb,
        Some(Pos::Pron) if lexicon.is_subject_pronoun(prev_key) => Pos::Verb,
        Some(Pos::Part) if prev_key == "n't" || prev_key == "not" => Pos::Verb,
        Some(Pos::Noun) | Some(Pos::Propn) | Some(Pos::Pron) if !has_verb => {
            if is_verbal(key, lexicon) || (key.ends_with('s') && !key.ends_with("ss")) {
                Pos::Verb
            } else {
                Pos::Noun
            }
        }
        Some(Pos::Adp) => Pos::Noun,
        Some(Pos::Verb) if key.len() > 4 && key.ends_with("ing") => Pos::Verb,
        _ => {
            if !has_verb && is_verbal(key, lexicon) {
                Pos::Verb
            } else if has_adjective_suffix(key) {
                Pos::Adj
            } else {
                Pos::Noun
            }
        }
    }
}

/// After a determiner or modifier: adjective if another modifier slot follows.
fn nominal_or_adjective(i: usize, keys: &[String], tags: &[Option<Pos>]) -> Pos {
    let next = tags.get(i + 1).copied().flatten();
    let next_is_nominal_slot = keys.get(i + 1).is_some()
        && matches!(next, None | Some(Pos::Noun) | Some(Pos::Propn) | Some(Pos::Adj));
    if has_adjective_suffix(&keys[i]) && next_is_nominal_slot {
        Pos::Adj
    } else {
        Pos::Noun
    }
}

/// Resolve words whose tag depends on the following context.
fn disambiguate(keys: &[String], tags: &mut [Pos], lexicon: &Lexicon) {
    let n = tags.len();

    for i in 0..n {
        let key = keys[i].as_str();
        let next = tags.get(i + 1).copied();
        let next_key = keys.get(i + 1).map(String::as_str).unwrap_or("");
        let prev = if i > 0 { Some(tags[i - 1]) } else { None };
        let prev_key = if i > 0 { keys[i - 1].as_str() } else { "" };

        match key {
            "to" if tags[i] == Pos::Adp && lexicon.is_base_verb(next_key) => {
                tags[i] = Pos::Part;
                tags[i + 1] = Pos::Verb;
            }
            "like" if matches!(prev, Some(Pos::Pron) | Some(Pos::Aux) | Some(Pos::Part))
                && (prev != Some(Pos::Pron) || lexicon.is_subject_pronoun(prev_key)) =>
            {
                tags[i] = Pos::Verb;
            }
            "'s" => {
                if prev == Some(Pos::Pron)
                    || matches!(prev_key, "there" | "here" | "what" | "where" | "how")
                {
                    tags[i] = Pos::Aux;
                }
            }
            "that" => {
                tags[i] = if matches!(next, Some(Pos::Noun) | Some(Pos::Adj) | Some(Pos::Num)) {
                    Pos::Det
                } else if prev == Some(Pos::Verb) {
                    Pos::Sconj
                } else {
                    Pos::Pron
                };
            }
            "there" if next == Some(Pos::Aux) && lexicon.is_copula(next_key) => {
                tags[i] = Pos::Pron;
            }
            "no" if i == 0 && next == Some(Pos::Punct) => {
                tags[i] = Pos::Intj;
            }
            _ => {}
        }

        if tags[i] == Pos::Det
            && DEMONSTRATIVES.contains(&key)
            && matches!(next, None | Some(Pos::Aux) | Some(Pos::Verb) | Some(Pos::Punct))
        {
            tags[i] = Pos::Pron;
        }

        if tags[i] == Pos::Adp
            && lexicon.is_clause_preposition(key)
            && lexicon.is_subject_pronoun(next_key)
        {
            tags[i] = Pos::Sconj;
        }
    }

    // "have"/"do" are auxiliaries only when a verb follows in the clause.
    let mut verb_ahead = vec![false; n];
    for i in (0..n.saturating_sub(1)).rev() {
        verb_ahead[i] = match tags[i + 1] {
            Pos::Punct | Pos::Cconj | Pos::Sconj => false,
            Pos::Verb => true,
            _ => verb_ahead[i + 1],
        };
    }
    for i in 0..n {
        if tags[i] == Pos::Aux && lexicon.is_light_auxiliary(&keys[i]) && !verb_ahead[i] {
            tags[i] = Pos::Verb;
        }
    }
}
