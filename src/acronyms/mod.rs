//! Strategies for telling acronyms apart from ordinary words.
//!
//! Casing alone cannot always tell: `json_parser` or `JsonParser` look the
//! same whether "json" is meant as an acronym or not. Parsers consult an
//! [`AcronymList`] in those positions.

mod dictionary;

pub use dictionary::{AcronymSet, CommonAcronyms};

pub trait AcronymList {
    fn is_acronym(&self, text: &str) -> bool;
}

impl<F> AcronymList for F
where
    F: Fn(&str) -> bool,
{
    fn is_acronym(&self, text: &str) -> bool {
        self(text)
    }
}

/// Never guess acronyms; anything that looks like a word is a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAcronyms;

impl AcronymList for NoAcronyms {
    fn is_acronym(&self, _text: &str) -> bool {
        false
    }
}

/// Whether "id" is an acronym is context dependent, so it is left out of
/// [`CommonAcronyms`]. Wrap any list in `IdOr` to add it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdOr<A>(pub A);

impl<A: AcronymList> AcronymList for IdOr<A> {
    fn is_acronym(&self, text: &str) -> bool {
        text.eq_ignore_ascii_case("id") || self.0.is_acronym(text)
    }
}
