//! Part-of-speech and dependency label sets.

use std::fmt;

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Pos {
    /// Tag name as emitted in records.
    pub fn as_str(self) -> &'static str {
        match self {
            Pos::Adj => "ADJ",
            Pos::Adp => "ADP",
            Pos::Adv => "ADV",
            Pos::Aux => "AUX",
            Pos::Cconj => "CCONJ",
            Pos::Det => "DET",
            Pos::Intj => "INTJ",
            Pos::Noun => "NOUN",
            Pos::Num => "NUM",
            Pos::Part => "PART",
            Pos::Pron => "PRON",
            Pos::Propn => "PROPN",
            Pos::Punct => "PUNCT",
            Pos::Sconj => "SCONJ",
            Pos::Sym => "SYM",
            Pos::Verb => "VERB",
            Pos::X => "X",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency relation (ClearNLP style labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dep {
    Root,
    Nsubj,
    Dobj,
    Pobj,
    Prep,
    Prt,
    Det,
    Amod,
    Compound,
    Aux,
    Neg,
    Advmod,
    Cc,
    Conj,
    Mark,
    Punct,
    Poss,
    Case,
    Nummod,
    Acomp,
    Attr,
    Xcomp,
    Ccomp,
    Advcl,
    Intj,
    Dep,
}

impl Dep {
    /// Label as emitted in records.
    pub fn as_str(self) -> &'static str {
        match self {
            Dep::Root => "ROOT",
            Dep::Nsubj => "nsubj",
            Dep::Dobj => "dobj",
            Dep::Pobj => "pobj",
            Dep::Prep => "prep",
            Dep::Prt => "prt",
            Dep::Det => "det",
            Dep::Amod => "amod",
            Dep::Compound => "compound",
            Dep::Aux => "aux",
            Dep::Neg => "neg",
            Dep::Advmod => "advmod",
            Dep::Cc => "cc",
            Dep::Conj => "conj",
            Dep::Mark => "mark",
            Dep::Punct => "punct",
            Dep::Poss => "poss",
            Dep::Case => "case",
            Dep::Nummod => "nummod",
            Dep::Acomp => "acomp",
            Dep::Attr => "attr",
            Dep::Xcomp => "xcomp",
            Dep::Ccomp => "ccomp",
            Dep::Advcl => "advcl",
            Dep::Intj => "intj",
            Dep::Dep => "dep",
        }
    }
}

impl fmt::Display for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
