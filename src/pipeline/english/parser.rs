//! Rule-based dependency parser.
//!
//! Works on one tagged sentence at a time. The sentence is cut into
//! segments at `,` `;` `:` and before subordinating conjunctions; noun
//! phrases are grouped around their heads, given a grammatical role
//! relative to the nearest predicate, and every remaining token is
//! attached by its tag. Heads returned are sentence-local indices and the
//! result is always a tree rooted at a single token.

use super::lexicon::Lexicon;
use super::tags::{Dep, Pos};

const SEGMENT_BREAKS: &[&str] = &[",", ";", ":"];

/// Markers whose clause is a complement rather than an adverbial.
const COMPLEMENTIZERS: &[&str] = &["that", "whether", "if"];

/// Head and relation of one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attachment {
    /// Sentence-local index of the head; the root heads itself.
    pub head: usize,
    pub dep: Dep,
}

/// Parse a tagged sentence.
///
/// `keys` are the lexicon lookup keys of the words and `tags` their
/// part-of-speech tags; both must have the same length.
pub fn parse(keys: &[String], tags: &[Pos], lexicon: &Lexicon) -> Vec<Attachment> {
    if tags.is_empty() {
        return Vec::new();
    }
    Parse::new(keys, tags, lexicon).run()
}

struct Parse<'a> {
    keys: &'a [String],
    tags: &'a [Pos],
    lexicon: &'a Lexicon,
    /// Segment id of each token.
    segment: Vec<usize>,
    /// Leading subordinator of each segment.
    markers: Vec<Option<usize>>,
    np_heads: Vec<bool>,
    /// First token of the phrase headed by each noun-phrase head.
    starts: Vec<usize>,
    predicates: Vec<usize>,
    /// Nearest predicate before/after each token within its segment.
    prev_pred: Vec<Option<usize>>,
    next_pred: Vec<Option<usize>>,
    /// Nearest noun-phrase head and verb after each token within its segment.
    next_np_head: Vec<Option<usize>>,
    next_verb: Vec<Option<usize>>,
    root: usize,
    heads: Vec<Option<Attachment>>,
    has_subject: Vec<bool>,
    has_object: Vec<bool>,
    has_pobj: Vec<bool>,
}

impl<'a> Parse<'a> {
    fn new(keys: &'a [String], tags: &'a [Pos], lexicon: &'a Lexicon) -> Self {
        let n = tags.len();

        let mut segment = Vec::with_capacity(n);
        let mut markers = vec![None];
        let mut current = 0;
        let mut current_len = 0;
        for i in 0..n {
            if tags[i] == Pos::Sconj {
                if current_len > 0 {
                    markers.push(None);
                    current += 1;
                    current_len = 0;
                }
                markers[current] = Some(i);
            }
            segment.push(current);
            current_len += 1;
            if tags[i] == Pos::Punct && SEGMENT_BREAKS.contains(&keys[i].as_str()) {
                markers.push(None);
                current += 1;
                current_len = 0;
            }
        }

        let np_heads: Vec<bool> = (0..n).map(|i| is_np_head(i, keys, tags, lexicon)).collect();

        let next_verb = scan_right(&segment, |j| tags[j] == Pos::Verb);
        let mut predicates: Vec<usize> = (0..n)
            .filter(|&i| tags[i] == Pos::Verb || (tags[i] == Pos::Aux && next_verb[i].is_none()))
            .collect();

        let root = (0..n)
            .find(|&i| tags[i] == Pos::Verb && markers[segment[i]].is_none())
            .or_else(|| (0..n).find(|&i| tags[i] == Pos::Verb))
            .or_else(|| (0..n).find(|&i| tags[i] == Pos::Aux))
            .or_else(|| (0..n).find(|&i| np_heads[i]))
            .or_else(|| (0..n).find(|&i| tags[i] != Pos::Punct))
            .unwrap_or(0);
        if let Err(position) = predicates.binary_search(&root) {
            predicates.insert(position, root);
        }

        let mut is_predicate = vec![false; n];
        for &p in &predicates {
            is_predicate[p] = true;
        }
        let prev_pred = scan_left(&segment, |j| is_predicate[j]);
        let next_pred = scan_right(&segment, |j| is_predicate[j]);
        let next_np_head = scan_right(&segment, |j| np_heads[j]);

        let mut heads = vec![None; n];
        heads[root] = Some(Attachment {
            head: root,
            dep: Dep::Root,
        });

        Self {
            keys,
            tags,
            lexicon,
            segment,
            markers,
            np_heads,
            starts: (0..n).collect(),
            predicates,
            prev_pred,
            next_pred,
            next_np_head,
            next_verb,
            root,
            heads,
            has_subject: vec![false; n],
            has_object: vec![false; n],
            has_pobj: vec![false; n],
        }
    }

    fn run(mut self) -> Vec<Attachment> {
        self.group_noun_phrases();
        self.assign_noun_roles();
        self.attach_auxiliaries();
        self.attach_predicates();
        self.attach_remaining();
        self.finish()
    }

    fn len(&self) -> usize {
        self.tags.len()
    }

    fn key(&self, i: usize) -> &str {
        self.keys[i].as_str()
    }

    fn attach(&mut self, i: usize, head: usize, dep: Dep) {
        if i == head || self.heads[i].is_some() {
            return;
        }
        self.heads[i] = Some(Attachment { head, dep });
        match dep {
            Dep::Nsubj => self.has_subject[head] = true,
            Dep::Dobj => self.has_object[head] = true,
            Dep::Pobj => self.has_pobj[head] = true,
            _ => {}
        }
    }

    fn prev_predicate(&self, i: usize) -> Option<usize> {
        self.prev_pred[i]
    }

    fn next_predicate(&self, i: usize) -> Option<usize> {
        self.next_pred[i]
    }

    /// Nearest predicate in the token's segment, left first, else the root.
    fn governor(&self, i: usize) -> usize {
        self.prev_predicate(i)
            .or_else(|| self.next_predicate(i))
            .unwrap_or(self.root)
    }

    fn is_clausal(&self, i: usize) -> bool {
        matches!(self.tags[i], Pos::Verb | Pos::Aux)
    }

    /// Attach determiners, modifiers and possessors to their noun.
    fn group_noun_phrases(&mut self) {
        for i in 0..self.len() {
            if !self.np_heads[i] {
                continue;
            }
            let mut start = i;
            while start > 0 {
                let j = start - 1;
                if self.segment[j] != self.segment[i] || self.heads[j].is_some() {
                    break;
                }
                let dep = match self.tags[j] {
                    _ if self.np_heads[j] => break,
                    Pos::Det => Dep::Det,
                    Pos::Adj => Dep::Amod,
                    Pos::Num => Dep::Nummod,
                    Pos::Noun | Pos::Propn => Dep::Compound,
                    Pos::Pron if self.lexicon.is_possessive(self.key(j)) => Dep::Poss,
                    Pos::Adv if self.tags[j + 1] == Pos::Adj => {
                        self.attach(j, j + 1, Dep::Advmod);
                        start = j;
                        continue;
                    }
                    Pos::Part
                        if self.key(j) == "'s"
                            && j > 0
                            && self.np_heads[j - 1]
                            && self.heads[j - 1].is_none()
                            && self.segment[j - 1] == self.segment[i] =>
                    {
                        self.attach(j, j - 1, Dep::Case);
                        self.attach(j - 1, i, Dep::Poss);
                        start = self.starts[j - 1];
                        break;
                    }
                    _ => break,
                };
                self.attach(j, i, dep);
                start = j;
            }
            self.starts[i] = start;
        }
    }

    /// Give each free noun-phrase head a role.
    fn assign_noun_roles(&mut self) {
        let root = self.root;

        for i in 0..self.len() {
            if !self.np_heads[i] || self.heads[i].is_some() {
                continue;
            }

            if let Some(before) = self.starts[i].checked_sub(1) {
                if self.tags[before] == Pos::Cconj
                    && before > 0
                    && self.np_heads[before - 1]
                    && !self.lexicon.is_subject_pronoun(self.key(i))
                {
                    self.attach(i, before - 1, Dep::Conj);
                    continue;
                }
                if self.tags[before] == Pos::Adp {
                    self.attach(i, before, Dep::Pobj);
                    continue;
                }
            }

            let next = self.next_predicate(i);
            if let Some(p) = next.filter(|&p| self.is_clausal(p) && !self.has_subject[p]) {
                let adjacent = (i + 1..p)
                    .all(|j| matches!(self.tags[j], Pos::Adv | Pos::Aux | Pos::Part));
                if adjacent || self.prev_predicate(i).is_none() {
                    self.attach(i, p, Dep::Nsubj);
                    continue;
                }
            }

            if let Some(q) = self.prev_predicate(i) {
                let dep = match self.tags[q] {
                    Pos::Aux if self.lexicon.is_copula(self.key(q)) => Dep::Attr,
                    Pos::Verb | Pos::Aux if !self.has_object[q] => Dep::Dobj,
                    _ => Dep::Dep,
                };
                self.attach(i, q, dep);
                continue;
            }

            if let Some(p) = next {
                self.attach(i, p, Dep::Dep);
            } else if i < root && self.is_clausal(root) && !self.has_subject[root] {
                self.attach(i, root, Dep::Nsubj);
            } else {
                self.attach(i, root, Dep::Dep);
            }
        }
    }

    /// Auxiliaries and infinitival "to" attach to the verb they support.
    fn attach_auxiliaries(&mut self) {
        for i in 0..self.len() {
            if self.heads[i].is_some() {
                continue;
            }
            let target = match self.tags[i] {
                Pos::Aux => self.next_verb[i],
                Pos::Part if self.key(i) == "to" => self.next_predicate(i),
                _ => None,
            };
            if let Some(verb) = target {
                self.attach(i, verb, Dep::Aux);
            }
        }
    }

    /// Link every non-root predicate to another predicate or the root.
    fn attach_predicates(&mut self) {
        let root = self.root;
        let predicates = self.predicates.clone();

        for (k, &p) in predicates.iter().enumerate() {
            if self.heads[p].is_some() {
                continue;
            }
            let previous = k.checked_sub(1).map(|k| predicates[k]);

            if p > 0 && self.tags[p - 1] == Pos::Part && self.key(p - 1) == "to" {
                let head = self.prev_predicate(p).or(previous).unwrap_or(root);
                self.attach(p, head, Dep::Xcomp);
                continue;
            }

            if let Some(q) = previous {
                if (q + 1..p).any(|j| self.tags[j] == Pos::Cconj) {
                    self.attach(p, q, Dep::Conj);
                    continue;
                }
            }

            if let Some(marker) = self.markers[self.segment[p]] {
                let dep = if COMPLEMENTIZERS.contains(&self.key(marker)) {
                    Dep::Ccomp
                } else {
                    Dep::Advcl
                };
                self.attach(p, root, dep);
            } else if p < root {
                self.attach(p, root, Dep::Advcl);
            } else {
                let head = self.prev_predicate(p).or(previous).unwrap_or(root);
                self.attach(p, head, Dep::Ccomp);
            }
        }
    }

    /// Attach every still-unattached token according to its tag.
    fn attach_remaining(&mut self) {
        let root = self.root;
        let n = self.len();

        // Conjuncts by dependent position; none are added below.
        let conjuncts: Vec<(usize, usize)> = self
            .heads
            .iter()
            .enumerate()
            .filter_map(|(j, a)| a.filter(|a| a.dep == Dep::Conj).map(|a| (j, a.head)))
            .collect();

        for i in 0..n {
            if self.heads[i].is_some() {
                continue;
            }
            let governor = self.governor(i);

            let (head, dep) = match self.tags[i] {
                Pos::Part if matches!(self.key(i), "not" | "n't") => {
                    match i.checked_sub(1).and_then(|j| self.heads[j]) {
                        Some(previous) if previous.dep == Dep::Aux => (previous.head, Dep::Neg),
                        _ => (governor, Dep::Neg),
                    }
                }
                Pos::Part if self.key(i) == "to" => (governor, Dep::Aux),
                Pos::Part if self.key(i) == "'s" && i > 0 => (i - 1, Dep::Case),
                Pos::Part => (governor, Dep::Advmod),
                Pos::Adp => {
                    let has_object = self.has_pobj[i];
                    let head = if self.key(i) == "of" && i > 0 && self.np_heads[i - 1] {
                        i - 1
                    } else {
                        governor
                    };
                    if has_object || self.prev_predicate(i).is_none() {
                        (head, Dep::Prep)
                    } else {
                        (head, Dep::Prt)
                    }
                }
                Pos::Adj => (governor, Dep::Acomp),
                Pos::Adv => match self.tags.get(i + 1) {
                    Some(Pos::Adj) | Some(Pos::Adv) => (i + 1, Dep::Advmod),
                    _ => (governor, Dep::Advmod),
                },
                Pos::Cconj => {
                    let next = conjuncts.partition_point(|&(j, _)| j <= i);
                    let head = conjuncts
                        .get(next)
                        .filter(|&&(_, head)| head < i)
                        .map_or(governor, |&(_, head)| head);
                    (head, Dep::Cc)
                }
                Pos::Sconj => (self.next_predicate(i).unwrap_or(root), Dep::Mark),
                Pos::Punct => (root, Dep::Punct),
                Pos::Intj => (root, Dep::Intj),
                Pos::Det => (self.next_np_head[i].unwrap_or(governor), Dep::Det),
                _ => (governor, Dep::Dep),
            };
            self.attach(i, head, dep);
        }
    }

    /// Fill gaps and break cycles by hanging stray tokens off the root.
    fn finish(self) -> Vec<Attachment> {
        let root = self.root;
        let fallback = Attachment {
            head: root,
            dep: Dep::Dep,
        };
        let mut arcs: Vec<Attachment> = self
            .heads
            .into_iter()
            .map(|a| a.unwrap_or(fallback))
            .collect();

        let mut state = vec![Reach::Unknown; arcs.len()];
        state[root] = Reach::Root;
        let mut path = Vec::new();

        for i in 0..arcs.len() {
            let mut current = i;
            let reaches_root = loop {
                match state[current] {
                    Reach::Root => break true,
                    Reach::Visiting | Reach::Stray => break false,
                    Reach::Unknown => {
                        state[current] = Reach::Visiting;
                        path.push(current);
                        current = arcs[current].head;
                    }
                }
            };

            for &j in &path {
                state[j] = if reaches_root { Reach::Root } else { Reach::Stray };
            }
            path.clear();
            if !reaches_root {
                arcs[i] = fallback;
                state[i] = Reach::Root;
            }
        }
        arcs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    Unknown,
    Visiting,
    /// Known to end in a cycle; cut when its own turn comes.
    Stray,
    Root,
}

/// Nearest `j < i` in the same segment satisfying `hit`, for every `i`.
fn scan_left(segment: &[usize], hit: impl Fn(usize) -> bool) -> Vec<Option<usize>> {
    let mut nearest = Vec::with_capacity(segment.len());
    let mut last = None;
    for i in 0..segment.len() {
        if i > 0 && segment[i - 1] != segment[i] {
            last = None;
        }
        nearest.push(last);
        if hit(i) {
            last = Some(i);
        }
    }
    nearest
}

/// Nearest `j > i` in the same segment satisfying `hit`, for every `i`.
fn scan_right(segment: &[usize], hit: impl Fn(usize) -> bool) -> Vec<Option<usize>> {
    let n = segment.len();
    let mut nearest = vec![None; n];
    let mut last = None;
    for i in (0..n).rev() {
        if i + 1 < n && segment[i + 1] != segment[i] {
            last = None;
        }
        nearest[i] = last;
        if hit(i) {
            last = Some(i);
        }
    }
    nearest
}

fn is_np_head(i: usize, keys: &[String], tags: &[Pos], lexicon: &Lexicon) -> bool {
    let next = tags.get(i + 1).copied();
    match tags[i] {
        Pos::Noun | Pos::Propn => !matches!(next, Some(Pos::Noun) | Some(Pos::Propn)),
        Pos::Num => !matches!(
            next,
            Some(Pos::Noun) | Some(Pos::Propn) | Some(Pos::Adj) | Some(Pos::Num)
        ),
        Pos::Pron => {
            !(lexicon.is_possessive(&keys[i])
                && matches!(
                    next,
                    Some(Pos::Noun) | Some(Pos::Propn) | Some(Pos::Adj) | Some(Pos::Num)
                ))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::english::lexicon::lookup_key;
    use crate::pipeline::english::tagger::Tagger;

    fn parse_words(words: &[&str]) -> Vec<(usize, &'static str)> {
        let lexicon = Lexicon::english();
        let keys: Vec<String> = words.iter().map(|w| lookup_key(w)).collect();
        let tags = Tagger::new().tag(words, &lexicon);
        parse(&keys, &tags, &lexicon)
            .into_iter()
            .map(|a| (a.head, a.dep.as_str()))
            .collect()
    }

    /// Whether following heads from `i` arrives at `root`.
    fn reaches(arcs: &[(usize, &str)], i: usize, root: usize) -> bool {
        let mut current = i;
        for _ in 0..=arcs.len() {
            if current == root {
                return true;
            }
            current = arcs[current].0;
        }
        false
    }

    fn roots(arcs: &[(usize, &str)]) -> Vec<usize> {
        arcs.iter()
            .enumerate()
            .filter(|(i, (head, _))| i == head)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            parse_words(&["The", "cat", "sleeps", "."]),
            vec![(1, "det"), (2, "nsubj"), (2, "ROOT"), (2, "punct")]
        );
    }

    #[test]
    fn test_prepositional_phrase() {
        let arcs = parse_words(&[
            "The", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog", ".",
        ]);
        assert_eq!(arcs[3], (4, "nsubj"));
        assert_eq!(arcs[1], (3, "amod"));
        assert_eq!(arcs[4], (4, "ROOT"));
        assert_eq!(arcs[5], (4, "prep"));
        assert_eq!(arcs[8], (5, "pobj"));
        assert_eq!(arcs[6], (8, "det"));
    }

    #[test]
    fn test_object_and_infinitive() {
        let arcs = parse_words(&["She", "met", "John", "in", "Paris", "."]);
        assert_eq!(arcs[0], (1, "nsubj"));
        assert_eq!(arcs[2], (1, "dobj"));
        assert_eq!(arcs[4], (3, "pobj"));

        let arcs = parse_words(&["I", "want", "to", "eat", "."]);
        assert_eq!(arcs[1], (1, "ROOT"));
        assert_eq!(arcs[2], (3, "aux"));
        assert_eq!(arcs[3], (1, "xcomp"));
    }

    #[test]
    fn test_auxiliary_and_negation() {
        let arcs = parse_words(&["I", "do", "n't", "know", "."]);
        assert_eq!(arcs[3], (3, "ROOT"));
        assert_eq!(arcs[0], (3, "nsubj"));
        assert_eq!(arcs[1], (3, "aux"));
        assert_eq!(arcs[2], (3, "neg"));
    }

    #[test]
    fn test_copula() {
        let arcs = parse_words(&["The", "sky", "is", "blue", "."]);
        assert_eq!(arcs[2], (2, "ROOT"));
        assert_eq!(arcs[1], (2, "nsubj"));
        assert_eq!(arcs[3], (2, "acomp"));
    }

    #[test]
    fn test_complement_clause() {
        let arcs = parse_words(&["He", "said", "that", "it", "'s", "late", "."]);
        assert_eq!(roots(&arcs), vec![1]);
        assert_eq!(arcs[4], (1, "ccomp"));
        assert_eq!(arcs[2], (4, "mark"));
        assert_eq!(arcs[3], (4, "nsubj"));
    }

    #[test]
    fn test_coordination() {
        let arcs = parse_words(&["I", "came", "and", "she", "left", "."]);
        assert_eq!(roots(&arcs), vec![1]);
        assert_eq!(arcs[4], (1, "conj"));
        assert_eq!(arcs[2], (1, "cc"));
        assert_eq!(arcs[3], (4, "nsubj"));
    }

    #[test]
    fn test_possessive() {
        let arcs = parse_words(&["John", "'s", "dog", "barks", "."]);
        assert_eq!(arcs[0], (2, "poss"));
        assert_eq!(arcs[1], (0, "case"));
        assert_eq!(arcs[2], (3, "nsubj"));
    }

    #[test]
    fn test_verbless_fragment() {
        let arcs = parse_words(&["A", "heading"]);
        assert_eq!(arcs, vec![(1, "det"), (1, "ROOT")]);
    }

    #[test]
    fn test_single_root_and_acyclic() {
        let sentences: &[&[&str]] = &[
            &["Yesterday", ",", "the", "old", "man", "who", "lived", "here", "died", "."],
            &["Because", "it", "rained", ",", "we", "stayed", "home", "."],
            &["Wow", "!"],
            &["...", "and", "or", "but"],
            &[",", ",", ","],
        ];
        for words in sentences {
            let arcs = parse_words(words);
            assert_eq!(arcs.len(), words.len());
            assert_eq!(roots(&arcs).len(), 1, "{:?}", words);
            for start in 0..arcs.len() {
                assert!(reaches(&arcs, start, roots(&arcs)[0]), "{:?}", words);
            }
        }
    }

    #[test]
    fn test_finish_cuts_cycles() {
        let lexicon = Lexicon::english();
        let keys: Vec<String> = ["go", "a", "b", "c"].iter().map(|w| w.to_string()).collect();
        let tags = [Pos::Verb, Pos::Noun, Pos::Noun, Pos::Noun];

        let mut parser = Parse::new(&keys, &tags, &lexicon);
        for (i, head) in [(1, 2), (2, 3), (3, 2)] {
            parser.heads[i] = Some(Attachment { head, dep: Dep::Dep });
        }
        let arcs: Vec<(usize, &str)> = parser
            .finish()
            .into_iter()
            .map(|a| (a.head, a.dep.as_str()))
            .collect();

        assert_eq!(roots(&arcs), vec![0]);
        for start in 0..arcs.len() {
            assert!(reaches(&arcs, start, 0));
        }
    }

    #[test]
    fn test_long_unpunctuated_sentence() {
        let pattern = ["the", "dog", "and", "the", "cat", "have", "seen", "over", "it", "and"];
        let words: Vec<&str> = pattern.iter().copied().cycle().take(20_000).collect();
        let arcs = parse_words(&words);

        assert_eq!(arcs.len(), words.len());
        let root = roots(&arcs);
        assert_eq!(root.len(), 1);
        for start in (0..arcs.len()).step_by(997) {
            assert!(reaches(&arcs, start, root[0]));
        }
        // Coordinators hang off the conjunct that precedes them.
        assert_eq!(arcs[2], (1, "cc"));
    }

    #[test]
    fn test_empty() {
        assert!(parse(&[], &[], &Lexicon::english()).is_empty());
    }
}
