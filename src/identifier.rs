use crate::acronyms::{AcronymList, CommonAcronyms};
use crate::parser::fuzzy;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One piece of an identifier.
///
/// Segments never carry casing: the orthography decides it when formatting
/// and checks it when parsing. Equality and hashing ignore case, so
/// `Word("JSON")` and `Word("json")` are the same segment.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Word(String),
    Acronym(String),
}

impl Segment {
    pub(crate) fn classified(text: impl Into<String>, is_acronym: bool) -> Self {
        if is_acronym {
            Segment::Acronym(text.into())
        } else {
            Segment::Word(text.into())
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Segment::Word(text) | Segment::Acronym(text) => text,
        }
    }

    pub fn is_acronym(&self) -> bool {
        matches!(self, Segment::Acronym(_))
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.text().chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.is_acronym() == other.is_acronym() && self.folded().eq(other.folded())
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_acronym().hash(state);
        for c in self.folded() {
            c.hash(state);
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A parsed identifier, ready to be reformatted in a different style.
/// Use it in place of `String` wherever the naming convention may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identifier {
    segments: Vec<Segment>,
}

impl Identifier {
    /// Create an empty identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word segment. Empty text is ignored.
    pub fn append_word(&mut self, word: impl Into<String>) {
        self.push(Segment::Word(word.into()));
    }

    /// Append an acronym segment. Empty text is ignored.
    pub fn append_acronym(&mut self, acronym: impl Into<String>) {
        self.push(Segment::Acronym(acronym.into()));
    }

    fn push(&mut self, segment: Segment) {
        if !segment.text().is_empty() {
            self.segments.push(segment);
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parse any string, but probably badly. Prefer
    /// [`Orthography::parse`](crate::Orthography::parse) when the convention
    /// of the input is known.
    pub fn fuzzy_parse(input: &str) -> Self {
        Self::fuzzy_parse_with(input, &CommonAcronyms)
    }

    pub fn fuzzy_parse_with<A>(input: &str, acronyms: &A) -> Self
    where
        A: AcronymList + ?Sized,
    {
        fuzzy::parse(input, acronyms)
    }
}

impl FromIterator<Segment> for Identifier {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut identifier = Identifier::new();
        for segment in iter {
            identifier.push(segment);
        }
        identifier
    }
}

impl IntoIterator for Identifier {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a Identifier {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
