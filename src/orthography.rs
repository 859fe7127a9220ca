use crate::acronyms::{AcronymList, CommonAcronyms};
use crate::identifier::Identifier;
use crate::parser::{self, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Unknown style: {0}")]
    Unknown(String),
    #[error("Unknown casing: {0} (expected lower, title, sentence, inverse-sentence or screaming)")]
    UnknownCasing(String),
    #[error("Unknown acronym handling: {0} (expected as-words, upper or upper-unless-initial)")]
    UnknownAcronymHandling(String),
    #[error("Invalid separator: {0:?} (a separator cannot be a letter)")]
    InvalidSeparator(char),
}

/// How letters are cased across the words of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Casing {
    /// all words lowercase
    Lower,
    /// All Words Initial Upper
    Title,
    /// First word initial upper
    Sentence,
    /// all But First Word Initial Upper
    InverseSentence,
    /// ALL CAPS
    Screaming,
}

impl Casing {
    pub const ALL: [Casing; 5] = [
        Casing::Lower,
        Casing::Title,
        Casing::Sentence,
        Casing::InverseSentence,
        Casing::Screaming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Casing::Lower => "lower",
            Casing::Title => "title",
            Casing::Sentence => "sentence",
            Casing::InverseSentence => "inverse-sentence",
            Casing::Screaming => "screaming",
        }
    }

    /// Whether the character at this position is written uppercase.
    pub(crate) fn is_upper_at(self, is_first_word: bool, is_first_char: bool) -> bool {
        match (self, is_first_word, is_first_char) {
            (Casing::Lower, _, _)
            | (Casing::Title, _, false)
            | (Casing::Sentence, false, _)
            | (Casing::Sentence, true, false)
            | (Casing::InverseSentence, true, _)
            | (Casing::InverseSentence, false, false) => false,
            (Casing::Title, _, true)
            | (Casing::Sentence, true, true)
            | (Casing::InverseSentence, false, true)
            | (Casing::Screaming, _, _) => true,
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "lower" => Ok(Casing::Lower),
            "title" => Ok(Casing::Title),
            "sentence" => Ok(Casing::Sentence),
            "inverse-sentence" => Ok(Casing::InverseSentence),
            "screaming" | "upper" => Ok(Casing::Screaming),
            _ => Err(StyleError::UnknownCasing(s.to_string())),
        }
    }
}

/// How acronyms are cased relative to ordinary words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcronymHandling {
    /// cased exactly like any other word (eg. Rust)
    #[default]
    AsWords,
    /// always ALL CAPS (eg. ObjC)
    Upper,
    /// ALL CAPS unless it is the first word (eg. Swift)
    UpperUnlessInitial,
}

impl AcronymHandling {
    pub const ALL: [AcronymHandling; 3] = [
        AcronymHandling::AsWords,
        AcronymHandling::Upper,
        AcronymHandling::UpperUnlessInitial,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AcronymHandling::AsWords => "as-words",
            AcronymHandling::Upper => "upper",
            AcronymHandling::UpperUnlessInitial => "upper-unless-initial",
        }
    }

    /// Whether an acronym in this position follows the word casing rules
    /// instead of being written in capitals.
    pub(crate) fn renders_as_word(self, is_first_word: bool) -> bool {
        match (self, is_first_word) {
            (AcronymHandling::AsWords, _) | (AcronymHandling::UpperUnlessInitial, true) => true,
            (AcronymHandling::Upper, _) | (AcronymHandling::UpperUnlessInitial, false) => false,
        }
    }
}

impl fmt::Display for AcronymHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcronymHandling {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "as-words" | "words" => Ok(AcronymHandling::AsWords),
            "upper" => Ok(AcronymHandling::Upper),
            "upper-unless-initial" => Ok(AcronymHandling::UpperUnlessInitial),
            _ => Err(StyleError::UnknownAcronymHandling(s.to_string())),
        }
    }
}

/// Completely describes how an identifier is written: an optional leading
/// sigil, an optional separator between words (none means camel-style
/// concatenation), the casing and how acronyms are cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OrthographyFields")]
pub struct Orthography {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    sigil: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    separator: Option<char>,
    casing: Casing,
    #[serde(default)]
    acronyms: AcronymHandling,
}

/// Unvalidated form of [`Orthography`] as it appears in config files.
#[derive(Deserialize)]
struct OrthographyFields {
    #[serde(default)]
    sigil: String,
    #[serde(default)]
    separator: Option<char>,
    casing: Casing,
    #[serde(default)]
    acronyms: AcronymHandling,
}

impl TryFrom<OrthographyFields> for Orthography {
    type Error = StyleError;

    fn try_from(fields: OrthographyFields) -> Result<Self, Self::Error> {
        if let Some(separator) = fields.separator {
            if separator.is_alphabetic() {
                return Err(StyleError::InvalidSeparator(separator));
            }
        }
        Ok(Self {
            sigil: fields.sigil,
            separator: fields.separator,
            casing: fields.casing,
            acronyms: fields.acronyms,
        })
    }
}

impl Orthography {
    pub fn new(casing: Casing) -> Self {
        Self {
            sigil: String::new(),
            separator: None,
            casing,
            acronyms: AcronymHandling::AsWords,
        }
    }

    /// Leading sigil, eg `"_"`, `"$"` or `"@"`.
    pub fn with_sigil(self, sigil: impl Into<String>) -> Self {
        Self {
            sigil: sigil.into(),
            ..self
        }
    }

    /// Separate words with `separator`, which must not be a letter.
    pub fn with_separator(self, separator: char) -> Self {
        debug_assert!(!separator.is_alphabetic(), "letter separator {separator:?}");
        Self {
            separator: Some(separator),
            ..self
        }
    }

    pub fn with_acronyms(self, acronyms: AcronymHandling) -> Self {
        Self { acronyms, ..self }
    }

    pub fn sigil(&self) -> &str {
        &self.sigil
    }

    pub fn separator(&self) -> Option<char> {
        self.separator
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    pub fn acronyms(&self) -> AcronymHandling {
        self.acronyms
    }

    pub fn format(&self, identifier: &Identifier) -> String {
        crate::format::format(identifier, self)
    }

    /// Parse a string written in this orthography, guessing acronyms with
    /// [`CommonAcronyms`] where casing alone cannot tell.
    pub fn parse(&self, input: &str) -> Result<Identifier, ParseError> {
        self.parse_with(input, &CommonAcronyms)
    }

    pub fn parse_with<A>(&self, input: &str, acronyms: &A) -> Result<Identifier, ParseError>
    where
        A: AcronymList + ?Sized,
    {
        parser::parse(input, self, acronyms)
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "casing={} acronyms={}", self.casing, self.acronyms)?;
        if let Some(separator) = self.separator {
            write!(f, " separator={:?}", separator)?;
        }
        if !self.sigil.is_empty() {
            write!(f, " sigil={:?}", self.sigil)?;
        }
        Ok(())
    }
}
