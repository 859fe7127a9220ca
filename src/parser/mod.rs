pub mod camel;
pub mod fuzzy;

use crate::acronyms::AcronymList;
use crate::identifier::{Identifier, Segment};
use crate::orthography::{AcronymHandling, Casing, Orthography};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid casing in segment {index} ({segment:?})")]
    InvalidCasing { index: usize, segment: String },
    #[error("Missing leading {sigil:?}")]
    MissingSigil { sigil: String },
}

/// Parse a string written in `orthography`, failing if any segment is not
/// cased the way that orthography would have written it.
pub fn parse<A>(input: &str, orthography: &Orthography, acronyms: &A) -> Result<Identifier, ParseError>
where
    A: AcronymList + ?Sized,
{
    let body = input
        .strip_prefix(orthography.sigil())
        .ok_or_else(|| ParseError::MissingSigil {
            sigil: orthography.sigil().to_string(),
        })?;

    let segments = match orthography.separator() {
        Some(separator) => body
            .split(separator)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(i, piece)| guess_segment(piece, orthography, i == 0, acronyms))
            .collect(),
        None => camel::split_lossless(body, orthography.acronyms(), acronyms),
    };

    for (index, segment) in segments.iter().enumerate() {
        // camel boundaries come from letter case, so a letterless run
        // cannot be written back
        let letterless = orthography.separator().is_none() && !camel::has_letter(segment.text());
        if letterless || !is_cased(segment, orthography, index == 0) {
            return Err(ParseError::InvalidCasing {
                index,
                segment: segment.text().to_string(),
            });
        }
    }

    Ok(segments.into_iter().collect())
}

/// Decide whether a separated piece is a word or an acronym. Where the
/// orthography writes acronyms and words alike the list decides, otherwise
/// all-caps pieces are acronyms.
fn guess_segment<A>(piece: &str, orthography: &Orthography, is_first_word: bool, acronyms: &A) -> Segment
where
    A: AcronymList + ?Sized,
{
    let ambiguous = match (orthography.casing(), orthography.acronyms(), is_first_word) {
        (Casing::Screaming, _, _)
        | (Casing::Lower, AcronymHandling::AsWords, _)
        | (_, AcronymHandling::UpperUnlessInitial, true)
        | (Casing::InverseSentence, AcronymHandling::AsWords, true) => true,
        (Casing::Lower, AcronymHandling::Upper | AcronymHandling::UpperUnlessInitial, _)
        | (Casing::Title | Casing::Sentence, _, _)
        | (Casing::InverseSentence, AcronymHandling::AsWords, false)
        | (Casing::InverseSentence, AcronymHandling::Upper | AcronymHandling::UpperUnlessInitial, _) => {
            false
        }
    };

    let is_acronym = if ambiguous {
        acronyms.is_acronym(piece)
    } else {
        is_all_caps(piece)
    };
    Segment::classified(piece, is_acronym)
}

/// Digits and other caseless characters do not count against all-caps,
/// so `MD5` qualifies.
fn is_all_caps(piece: &str) -> bool {
    piece.chars().any(char::is_uppercase) && !piece.chars().any(char::is_lowercase)
}

fn is_cased(segment: &Segment, orthography: &Orthography, is_first_word: bool) -> bool {
    let text = segment.text();
    match segment {
        Segment::Acronym(_) if !orthography.acronyms().renders_as_word(is_first_word) => {
            !text.chars().any(char::is_lowercase)
        }
        Segment::Word(_) | Segment::Acronym(_) => {
            let casing = orthography.casing();
            text.chars().enumerate().all(|(i, c)| {
                if casing.is_upper_at(is_first_word, i == 0) {
                    !c.is_lowercase()
                } else {
                    !c.is_uppercase()
                }
            })
        }
    }
}
