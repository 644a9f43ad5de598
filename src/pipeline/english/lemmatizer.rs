//! Rule-based lemmatizer.

use super::lexicon::{lookup_key, Lexicon};
use super::tags::Pos;

/// Base form of a word given its tag.
pub fn lemmatize(word: &str, pos: Pos, lexicon: &Lexicon) -> String {
    let key = lookup_key(word);

    match pos {
        Pos::Propn | Pos::Punct | Pos::Sym | Pos::X => word.to_string(),
        Pos::Num if word.chars().any(|c| c.is_ascii_digit()) => word.to_string(),
        Pos::Pron => lexicon
            .pronoun_lemma(&key)
            .map(str::to_string)
            .unwrap_or(key),
        Pos::Aux => lexicon
            .auxiliary_lemma(&key)
            .map(str::to_string)
            .unwrap_or(key),
        Pos::Part if key == "n't" => "not".to_string(),
        Pos::Verb => verb_lemma(&key, lexicon),
        Pos::Noun => noun_lemma(&key, lexicon),
        _ => key,
    }
}

fn verb_lemma(key: &str, lexicon: &Lexicon) -> String {
    if let Some(lemma) = lexicon
        .irregular_verb(key)
        .or_else(|| lexicon.auxiliary_lemma(key))
    {
        return lemma.to_string();
    }
    if lexicon.is_base_verb(key) {
        return key.to_string();
    }

    if let Some(stem) = key.strip_suffix("ing").filter(|s| s.len() >= 2) {
        return restore_stem(stem, lexicon);
    }
    if let Some(stem) = key.strip_suffix("ied").filter(|s| s.len() >= 2) {
        return format!("{}y", stem);
    }
    if let Some(stem) = key.strip_suffix("ed").filter(|s| s.len() >= 2) {
        return restore_stem(stem, lexicon);
    }
    if let Some(stem) = key.strip_suffix("ies").filter(|s| s.len() >= 2) {
        return format!("{}y", stem);
    }
    if let Some(stem) = key.strip_suffix("es") {
        if lexicon.is_base_verb(stem)
            || ["sh", "ch", "x", "ss", "z", "o"].iter().any(|e| stem.ends_with(e))
        {
            return stem.to_string();
        }
    }
    if let Some(stem) = key.strip_suffix('s').filter(|s| !s.ends_with('s') && s.len() >= 2) {
        return stem.to_string();
    }
    key.to_string()
}

/// Recover a verb base from a stem with "-ing"/"-ed" removed.
fn restore_stem(stem: &str, lexicon: &Lexicon) -> String {
    let with_e = format!("{}e", stem);
    if lexicon.is_base_verb(stem) {
        return stem.to_string();
    }
    if lexicon.is_base_verb(&with_e) {
        return with_e;
    }

    let chars: Vec<char> = stem.chars().collect();
    if let [.., a, b] = chars.as_slice() {
        if a == b && !matches!(*b, 'l' | 's' | 'z' | 'e') {
            let undoubled: String = chars[..chars.len() - 1].iter().collect();
            return undoubled;
        }
    }
    if stem.ends_with('v') || stem.ends_with('u') || stem.ends_with("iz") {
        return with_e;
    }
    stem.to_string()
}

fn noun_lemma(key: &str, lexicon: &Lexicon) -> String {
    if let Some(lemma) = lexicon.irregular_noun(key) {
        return lemma.to_string();
    }
    if key.len() > 4 {
        if let Some(stem) = key.strip_suffix("ies") {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zes"] {
        if key.ends_with(suffix) {
            return key[..key.len() - 2].to_string();
        }
    }
    if key.len() > 3
        && key.ends_with('s')
        && !["ss", "us", "is"].iter().any(|e| key.ends_with(e))
    {
        return key[..key.len() - 1].to_string();
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(word: &str, pos: Pos) -> String {
        lemmatize(word, pos, &Lexicon::english())
    }

    #[test]
    fn test_verbs() {
        assert_eq!(lemma("sleeps", Pos::Verb), "sleep");
        assert_eq!(lemma("went", Pos::Verb), "go");
        assert_eq!(lemma("running", Pos::Verb), "run");
        assert_eq!(lemma("making", Pos::Verb), "make");
        assert_eq!(lemma("stopped", Pos::Verb), "stop");
        assert_eq!(lemma("tried", Pos::Verb), "try");
        assert_eq!(lemma("watches", Pos::Verb), "watch");
        assert_eq!(lemma("announced", Pos::Verb), "announce");
        assert_eq!(lemma("Exploded", Pos::Verb), "explode");
    }

    #[test]
    fn test_nouns() {
        assert_eq!(lemma("cats", Pos::Noun), "cat");
        assert_eq!(lemma("stories", Pos::Noun), "story");
        assert_eq!(lemma("boxes", Pos::Noun), "box");
        assert_eq!(lemma("children", Pos::Noun), "child");
        assert_eq!(lemma("bus", Pos::Noun), "bus");
        assert_eq!(lemma("glass", Pos::Noun), "glass");
    }

    #[test]
    fn test_closed_classes() {
        assert_eq!(lemma("The", Pos::Det), "the");
        assert_eq!(lemma("me", Pos::Pron), "I");
        assert_eq!(lemma("She", Pos::Pron), "she");
        assert_eq!(lemma("was", Pos::Aux), "be");
        assert_eq!(lemma("n't", Pos::Part), "not");
        assert_eq!(lemma("n\u{2019}t", Pos::Part), "not");
    }

    #[test]
    fn test_surface_kept() {
        assert_eq!(lemma("Paris", Pos::Propn), "Paris");
        assert_eq!(lemma(".", Pos::Punct), ".");
        assert_eq!(lemma("3.50", Pos::Num), "3.50");
        assert_eq!(lemma("Two", Pos::Num), "two");
    }
}
