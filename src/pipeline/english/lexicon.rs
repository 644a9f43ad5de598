//! Word lists for the English pipeline.
//!
//! Closed-class words, auxiliaries, irregular inflections and a core set of
//! verb and adjective base forms. All keys are lowercase; lookups go through
//! [`lookup_key`] so typographic apostrophes and composed/decomposed forms
//! resolve to the same entry.

use super::tags::Pos;
use std::collections::{HashMap, HashSet};
use unicode_normalization::UnicodeNormalization;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "these", "those", "every", "each", "another", "no", "some", "any",
    "all", "both", "either", "neither", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "who", "whom", "whose", "what", "which", "that",
    "something", "anything", "nothing", "everything", "someone", "anyone", "everyone",
    "nobody", "somebody", "anybody", "everybody", "my", "your", "his", "its", "our",
    "their",
];

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "whose"];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they", "who"];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "over",
    "under", "near", "since", "until", "upon", "within", "without", "across", "along", "among",
    "around", "behind", "beside", "beyond", "despite", "except", "inside", "outside", "onto",
    "toward", "towards", "via", "per", "like", "than", "off", "out", "as",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "whereas", "whether", "when",
    "whenever", "wherever",
];

/// Prepositions that introduce a clause when followed by a subject.
const CLAUSE_PREPOSITIONS: &[&str] = &["before", "after", "since", "until", "as"];

const ADVERBS: &[&str] = &[
    "very", "really", "too", "also", "just", "only", "never", "always", "often", "sometimes",
    "usually", "already", "still", "even", "again", "soon", "now", "then", "here", "there",
    "quite", "almost", "rather", "perhaps", "maybe", "how", "why", "where", "however",
    "therefore", "thus", "so", "well", "away", "back", "ever", "yet", "ago", "once", "twice",
    "together", "else", "later", "instead", "indeed", "yesterday", "today", "tomorrow",
    "tonight", "finally", "suddenly", "not",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "wow", "hey", "hello", "hi", "yes", "ok", "okay", "please", "thanks", "oops",
    "alas", "hmm", "uh", "um", "yeah",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

const ADJECTIVES: &[&str] = &[
    "big", "small", "good", "bad", "new", "old", "great", "high", "low", "little", "large",
    "long", "short", "young", "important", "different", "early", "late", "able", "free", "full",
    "happy", "sad", "hot", "cold", "warm", "red", "blue", "green", "black", "white", "dark",
    "bright", "quick", "slow", "fast", "strong", "weak", "easy", "hard", "nice", "real", "true",
    "false", "right", "wrong", "best", "better", "worse", "worst", "last", "first", "next",
    "many", "much", "few", "more", "most", "less", "several", "other", "same", "own", "lazy",
    "brown", "tired", "angry", "quiet", "loud", "rich", "poor", "busy", "clean", "dirty",
    "ready", "sure", "whole", "major", "local", "public", "private", "social", "national",
];

/// Auxiliary forms and their lemmas.
const AUXILIARIES: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("be", "be"),
    ("been", "be"),
    ("being", "be"),
    ("'m", "be"),
    ("'re", "be"),
    ("have", "have"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("'ve", "have"),
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("will", "will"),
    ("'ll", "will"),
    ("wo", "will"),
    ("would", "would"),
    ("'d", "would"),
    ("shall", "shall"),
    ("sha", "shall"),
    ("should", "should"),
    ("can", "can"),
    ("ca", "can"),
    ("could", "could"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
];

/// Irregular verb forms and their lemmas.
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("saw", "see"),
    ("seen", "see"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("took", "take"),
    ("taken", "take"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("slept", "sleep"),
    ("won", "win"),
    ("taught", "teach"),
    ("caught", "catch"),
    ("fought", "fight"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("rode", "ride"),
    ("ridden", "ride"),
    ("shook", "shake"),
    ("shaken", "shake"),
    ("stole", "steal"),
    ("stolen", "steal"),
    ("swam", "swim"),
    ("woke", "wake"),
    ("woken", "wake"),
    ("became", "become"),
    ("done", "do"),
    ("sold", "sell"),
    ("struck", "strike"),
];

/// Verb base forms recognised in context.
const BASE_VERBS: &[&str] = &[
    "be", "have", "do", "say", "go", "get", "make", "know", "think", "take", "see", "come",
    "want", "look", "use", "find", "give", "tell", "work", "call", "try", "ask", "need", "feel",
    "become", "leave", "put", "mean", "keep", "let", "begin", "seem", "help", "talk", "turn",
    "start", "show", "hear", "play", "run", "move", "like", "live", "believe", "hold", "bring",
    "happen", "write", "provide", "sit", "stand", "lose", "pay", "meet", "include", "continue",
    "set", "learn", "change", "lead", "understand", "watch", "follow", "stop", "create", "speak",
    "read", "allow", "add", "spend", "grow", "open", "walk", "win", "offer", "remember", "love",
    "consider", "appear", "buy", "wait", "serve", "die", "send", "expect", "build", "stay",
    "fall", "cut", "reach", "kill", "remain", "suggest", "raise", "pass", "sell", "require",
    "report", "decide", "pull", "sleep", "eat", "drink", "sing", "swim", "fly", "jump", "arrive",
    "announce", "attack", "visit", "destroy", "explode", "launch", "sign", "hit", "increase",
    "reduce", "agree", "fail", "carry", "break", "drive", "throw", "catch", "wear", "choose",
    "cry", "laugh", "smile", "bark", "chase", "close", "hate", "hope", "join", "kick", "kiss",
    "listen", "plan", "rain", "receive", "return", "save", "share", "study", "travel", "wish",
    "worry", "dance", "cook", "clean", "climb", "collapse", "occur", "protest", "resign",
    "elect", "invade", "arrest", "rescue", "strike", "hide", "ride", "shake", "steal", "wake",
    "teach", "fight", "forget", "rise", "draw", "lie", "deliver", "publish", "release",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
];

const PRONOUN_LEMMAS: &[(&str, &str)] = &[
    ("i", "I"),
    ("me", "I"),
    ("him", "he"),
    ("us", "we"),
    ("them", "they"),
];

const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
    "inc.", "ltd.", "co.", "corp.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.",
    "sep.", "sept.", "oct.", "nov.", "dec.", "a.m.", "p.m.", "mt.", "gen.", "gov.", "sen.",
    "rep.", "fig.", "approx.", "no.", "dept.", "est.",
];

/// Normalize a word for lexicon lookup.
///
/// Applies NFC composition, lowercases, and folds the typographic apostrophe
/// to ASCII.
pub fn lookup_key(word: &str) -> String {
    word.nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect()
}

/// Lexical resources for English.
#[derive(Debug, Clone)]
pub struct Lexicon {
    closed: HashMap<&'static str, Pos>,
    auxiliaries: HashMap<&'static str, &'static str>,
    irregular_verbs: HashMap<&'static str, &'static str>,
    irregular_nouns: HashMap<&'static str, &'static str>,
    pronoun_lemmas: HashMap<&'static str, &'static str>,
    base_verbs: HashSet<&'static str>,
    possessives: HashSet<&'static str>,
    subject_pronouns: HashSet<&'static str>,
    clause_prepositions: HashSet<&'static str>,
    abbreviations: HashSet<&'static str>,
}

impl Lexicon {
    /// Build the English lexicon.
    pub fn english() -> Self {
        let mut closed = HashMap::new();
        // Later lists win for words in several lists.
        for (words, pos) in [
            (NUMBER_WORDS, Pos::Num),
            (ADJECTIVES, Pos::Adj),
            (INTERJECTIONS, Pos::Intj),
            (ADVERBS, Pos::Adv),
            (PREPOSITIONS, Pos::Adp),
            (COORDINATORS, Pos::Cconj),
            (SUBORDINATORS, Pos::Sconj),
            (PRONOUNS, Pos::Pron),
            (DETERMINERS, Pos::Det),
        ] {
            for word in words {
                closed.insert(*word, pos);
            }
        }
        closed.insert("not", Pos::Part);
        closed.insert("n't", Pos::Part);
        closed.insert("'s", Pos::Part);
        for (word, _) in AUXILIARIES {
            closed.insert(*word, Pos::Aux);
        }

        Self {
            closed,
            auxiliaries: AUXILIARIES.iter().copied().collect(),
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            pronoun_lemmas: PRONOUN_LEMMAS.iter().copied().collect(),
            base_verbs: BASE_VERBS.iter().copied().collect(),
            possessives: POSSESSIVES.iter().copied().collect(),
            subject_pronouns: SUBJECT_PRONOUNS.iter().copied().collect(),
            clause_prepositions: CLAUSE_PREPOSITIONS.iter().copied().collect(),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Closed-class tag of a word, if it has one.
    pub fn closed_class(&self, key: &str) -> Option<Pos> {
        self.closed.get(key).copied()
    }

    /// Lemma of an auxiliary form.
    pub fn auxiliary_lemma(&self, key: &str) -> Option<&'static str> {
        self.auxiliaries.get(key).copied()
    }

    /// Whether the auxiliary is a form of "be".
    pub fn is_copula(&self, key: &str) -> bool {
        self.auxiliary_lemma(key) == Some("be")
    }

    /// Whether the auxiliary is a form of "have" or "do".
    pub fn is_light_auxiliary(&self, key: &str) -> bool {
        matches!(self.auxiliary_lemma(key), Some("have") | Some("do"))
    }

    /// Lemma of an irregular verb form.
    pub fn irregular_verb(&self, key: &str) -> Option<&'static str> {
        self.irregular_verbs.get(key).copied()
    }

    /// Lemma of an irregular noun form.
    pub fn irregular_noun(&self, key: &str) -> Option<&'static str> {
        self.irregular_nouns.get(key).copied()
    }

    /// Lemma of an object pronoun.
    pub fn pronoun_lemma(&self, key: &str) -> Option<&'static str> {
        self.pronoun_lemmas.get(key).copied()
    }

    /// Whether a word is a known verb base form.
    pub fn is_base_verb(&self, key: &str) -> bool {
        self.base_verbs.contains(key)
    }

    /// Whether a word is a known verb form (base or irregular).
    pub fn is_verb_form(&self, key: &str) -> bool {
        self.is_base_verb(key) || self.irregular_verb(key).is_some()
    }

    /// Whether a pronoun is possessive.
    pub fn is_possessive(&self, key: &str) -> bool {
        self.possessives.contains(key)
    }

    /// Whether a pronoun can be a subject.
    pub fn is_subject_pronoun(&self, key: &str) -> bool {
        self.subject_pronouns.contains(key)
    }

    /// Whether a preposition can introduce a clause.
    pub fn is_clause_preposition(&self, key: &str) -> bool {
        self.clause_prepositions.contains(key)
    }

    /// Whether a period-final word is a known abbreviation.
    pub fn is_abbreviation(&self, key: &str) -> bool {
        self.abbreviations.contains(key)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}
