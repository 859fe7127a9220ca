//! Named orthographies for common ecosystems.
//!
//! Every preset is reachable two ways: at runtime through [`Preset`] (looked
//! up by name from the CLI or configuration), and statically through a
//! marker type such as [`generic::SnakeCase`] implementing
//! [`NamedOrthography`], for use with [`Styled`](crate::Styled).

use crate::identifier::Identifier;
use crate::orthography::{AcronymHandling, Casing, Orthography, StyleError};
use crate::parser::ParseError;
use std::fmt;
use std::str::FromStr;

macro_rules! presets {
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal $(| $alias:literal)*, $orthography:expr;
    )*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Preset {
            $( $(#[$meta])* $variant, )*
        }

        impl Preset {
            pub const ALL: &'static [Preset] = &[ $( Preset::$variant, )* ];

            pub fn name(self) -> &'static str {
                match self {
                    $( Preset::$variant => $name, )*
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $( Preset::$variant => &[ $( $alias, )* ], )*
                }
            }

            pub fn orthography(self) -> Orthography {
                match self {
                    $( Preset::$variant => $orthography, )*
                }
            }
        }
    };
}

fn lower_camel_upper_unless_initial() -> Orthography {
    Orthography::new(Casing::InverseSentence).with_acronyms(AcronymHandling::UpperUnlessInitial)
}

fn title_upper() -> Orthography {
    Orthography::new(Casing::Title).with_acronyms(AcronymHandling::Upper)
}

presets! {
    SnakeCase => "snake_case",
        Orthography::new(Casing::Lower).with_separator('_');
    ScreamingSnakeCase => "SCREAMING_SNAKE_CASE" | "constant_case",
        Orthography::new(Casing::Screaming).with_separator('_');
    CamelCase => "camelCase" | "lower_camel_case",
        Orthography::new(Casing::InverseSentence);
    UpperCamelCase => "UpperCamelCase" | "PascalCase",
        Orthography::new(Casing::Title);
    KebabCase => "kebab-case",
        Orthography::new(Casing::Lower).with_separator('-');

    SwiftCase => "swift.case", lower_camel_upper_unless_initial();
    SwiftFunc => "swift.func", lower_camel_upper_unless_initial();
    SwiftPropertyWrapper => "swift.property-wrapper", title_upper().with_sigil("@");
    SwiftType => "swift.type", title_upper();
    SwiftVar => "swift.var", lower_camel_upper_unless_initial();

    RubyConstant => "ruby.constant",
        Orthography::new(Casing::Screaming).with_separator('_');
    RubyGlobal => "ruby.global",
        Orthography::new(Casing::Lower).with_separator('_').with_sigil("$");
    RubyIVar => "ruby.ivar",
        Orthography::new(Casing::Lower).with_separator('_').with_sigil("@");
    RubyMethod => "ruby.method",
        Orthography::new(Casing::Lower).with_separator('_');
    RubyType => "ruby.type", title_upper();

    GraphqlEnumValue => "graphql.enum-value",
        Orthography::new(Casing::Screaming).with_separator('_');
    GraphqlField => "graphql.field", Orthography::new(Casing::InverseSentence);
    GraphqlType => "graphql.type", Orthography::new(Casing::Title);

    RustType => "rust.type", Orthography::new(Casing::Title);
    RustFn => "rust.fn" | "rust.var",
        Orthography::new(Casing::Lower).with_separator('_');
    RustConst => "rust.const" | "rust.static",
        Orthography::new(Casing::Screaming).with_separator('_');
}

/// Names compare ignoring case and the punctuation used between words, so
/// `swift.var`, `Swift-Var` and `swift_var` are the same preset.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Preset {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| {
                normalize(preset.name()) == wanted
                    || preset.aliases().iter().any(|alias| normalize(alias) == wanted)
            })
            .ok_or_else(|| StyleError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type standing for one fixed orthography.
pub trait NamedOrthography {
    const PRESET: Preset;

    fn orthography() -> Orthography {
        Self::PRESET.orthography()
    }

    fn format(identifier: &Identifier) -> String {
        Self::orthography().format(identifier)
    }

    /// Parse using [`CommonAcronyms`](crate::CommonAcronyms).
    fn parse(input: &str) -> Result<Identifier, ParseError> {
        Self::orthography().parse(input)
    }
}

macro_rules! marker {
    ($( $(#[$meta:meta])* $marker:ident => $preset:ident; )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl $crate::presets::NamedOrthography for $marker {
                const PRESET: $crate::presets::Preset = $crate::presets::Preset::$preset;
            }
        )*
    };
}

/// Convenience orthographies that are not tied to one language.
pub mod generic {
    marker! {
        /// `snake_case`
        SnakeCase => SnakeCase;
        /// `SCREAMING_SNAKE_CASE`
        ScreamingSnakeCase => ScreamingSnakeCase;
        /// `camelCase`
        CamelCase => CamelCase;
        /// `UpperCamelCase`
        UpperCamelCase => UpperCamelCase;
        /// `kebab-case`
        KebabCase => KebabCase;
    }
}

pub mod swift {
    marker! {
        Case => SwiftCase;
        Func => SwiftFunc;
        PropertyWrapper => SwiftPropertyWrapper;
        TypeIdentifier => SwiftType;
        Var => SwiftVar;
    }
}

pub mod ruby {
    marker! {
        Constant => RubyConstant;
        Global => RubyGlobal;
        IVar => RubyIVar;
        Method => RubyMethod;
        TypeIdentifier => RubyType;
    }
}

pub mod graphql {
    marker! {
        EnumValue => GraphqlEnumValue;
        Field => GraphqlField;
        TypeIdentifier => GraphqlType;
    }
}

pub mod rust {
    marker! {
        TypeIdentifier => RustType;
        Function => RustFn;
        Constant => RustConst;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("snake_case".parse::<Preset>(), Ok(Preset::SnakeCase));
        assert_eq!("SnakeCase".parse::<Preset>(), Ok(Preset::SnakeCase));
        assert_eq!("swift.var".parse::<Preset>(), Ok(Preset::SwiftVar));
        assert_eq!("Swift-Var".parse::<Preset>(), Ok(Preset::SwiftVar));
        assert_eq!("ruby_global".parse::<Preset>(), Ok(Preset::RubyGlobal));
        assert_eq!("PascalCase".parse::<Preset>(), Ok(Preset::UpperCamelCase));
        assert_eq!(
            "hungarian".parse::<Preset>(),
            Err(StyleError::Unknown("hungarian".to_string()))
        );
    }

    #[test]
    fn test_names_are_unique() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(*preset));
            for alias in preset.aliases() {
                assert_eq!(alias.parse::<Preset>(), Ok(*preset), "{alias}");
            }
        }
    }

    #[test]
    fn test_markers_match_presets() {
        assert_eq!(generic::SnakeCase::orthography(), Preset::SnakeCase.orthography());
        assert_eq!(swift::Var::orthography(), Preset::SwiftVar.orthography());
        assert_eq!(ruby::Global::orthography().sigil(), "$");
        assert_eq!(swift::PropertyWrapper::orthography().sigil(), "@");
        assert_eq!(
            rust::TypeIdentifier::orthography().acronyms(),
            AcronymHandling::AsWords
        );
    }

    #[test]
    fn test_ecosystem_conventions() {
        let mut identifier = Identifier::new();
        identifier.append_word("user");
        identifier.append_acronym("url");

        assert_eq!(generic::KebabCase::format(&identifier), "user-url");
        assert_eq!(graphql::EnumValue::format(&identifier), "USER_URL");
        assert_eq!(graphql::Field::format(&identifier), "userUrl");
        assert_eq!(rust::TypeIdentifier::format(&identifier), "UserUrl");
        assert_eq!(rust::Function::format(&identifier), "user_url");
        assert_eq!(swift::Case::format(&identifier), "userURL");
        assert_eq!(ruby::TypeIdentifier::format(&identifier), "UserURL");
    }
}
