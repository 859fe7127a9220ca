//! Serde support: store an [`Identifier`] as a string written in a fixed
//! orthography.
//!
//! ```
//! use identcase::presets::{generic, swift};
//! use identcase::{NamedOrthography, Styled};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Column {
//!     name: Styled<generic::SnakeCase>,
//! }
//!
//! let column: Column = serde_json::from_str(r#"{"name":"created_at_utc"}"#).unwrap();
//! assert_eq!(swift::TypeIdentifier::format(&column.name), "CreatedAtUTC");
//! ```

use crate::acronyms::{AcronymList, CommonAcronyms};
use crate::identifier::Identifier;
use crate::presets::NamedOrthography;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

/// An identifier that serializes as a string in the orthography `P`, and
/// deserializes by strictly parsing that string with the acronym list `A`.
pub struct Styled<P, A = CommonAcronyms> {
    identifier: Identifier,
    marker: PhantomData<fn() -> (P, A)>,
}

impl<P, A> Styled<P, A> {
    pub fn new(identifier: Identifier) -> Self {
        Self {
            identifier,
            marker: PhantomData,
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn into_inner(self) -> Identifier {
        self.identifier
    }
}

impl<P, A> From<Identifier> for Styled<P, A> {
    fn from(identifier: Identifier) -> Self {
        Self::new(identifier)
    }
}

impl<P, A> Deref for Styled<P, A> {
    type Target = Identifier;

    fn deref(&self) -> &Identifier {
        &self.identifier
    }
}

impl<P, A> Clone for Styled<P, A> {
    fn clone(&self) -> Self {
        Self::new(self.identifier.clone())
    }
}

impl<P, A> PartialEq for Styled<P, A> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<P, A> Eq for Styled<P, A> {}

impl<P: NamedOrthography, A> fmt::Debug for Styled<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Styled")
            .field(&P::format(&self.identifier))
            .finish()
    }
}

impl<P: NamedOrthography, A> fmt::Display for Styled<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&P::format(&self.identifier))
    }
}

impl<P: NamedOrthography, A> Serialize for Styled<P, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&P::format(&self.identifier))
    }
}

impl<'de, P, A> Deserialize<'de> for Styled<P, A>
where
    P: NamedOrthography,
    A: AcronymList + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        P::orthography()
            .parse_with(&encoded, &A::default())
            .map(Self::new)
            .map_err(|e| de::Error::custom(format!("{} in {:?}", e, encoded)))
    }
}
