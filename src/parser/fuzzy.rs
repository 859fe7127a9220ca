use super::camel;
use crate::acronyms::AcronymList;
use crate::identifier::{Identifier, Segment};
use crate::orthography::AcronymHandling;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Best-effort parse of a string in an unknown convention.
///
/// Tries, in order: whitespace-separated words, punctuation-separated words,
/// camel case. Never fails; at worst the whole input becomes one segment.
pub fn parse<A>(input: &str, acronyms: &A) -> Identifier
where
    A: AcronymList + ?Sized,
{
    let input = input.trim();

    let words = pieces(input.split(char::is_whitespace));
    if words.len() > 1 {
        tracing::trace!(input, "fuzzy parse: whitespace separated");
        return classify(words, acronyms);
    }

    let single = words.first().copied().unwrap_or_default();
    let bits = pieces(single.split(is_punctuation));
    if bits.len() > 1 {
        tracing::trace!(input, "fuzzy parse: punctuation separated");
        return classify(bits, acronyms);
    }

    tracing::trace!(input, "fuzzy parse: camel case");
    let rest = bits.first().copied().unwrap_or_default();
    camel::split(rest, AcronymHandling::AsWords, acronyms)
        .into_iter()
        .collect()
}

/// Unicode punctuation (`Pc`, `Pd`, `Ps`, `Pe`, `Pi`, `Pf`, `Po`). Symbols
/// such as `$`, `+` or `~` are not punctuation.
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

fn pieces<'a>(split: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    split
        .filter(|piece| piece.chars().any(char::is_alphanumeric))
        .collect()
}

fn classify<A>(pieces: Vec<&str>, acronyms: &A) -> Identifier
where
    A: AcronymList + ?Sized,
{
    pieces
        .into_iter()
        .map(|piece| Segment::classified(piece, acronyms.is_acronym(piece)))
        .collect()
}
