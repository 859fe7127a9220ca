pub mod acronyms;
pub mod cli;
pub mod config;
pub mod format;
pub mod identifier;
pub mod orthography;
pub mod parser;
pub mod presets;
pub mod transform;

pub use acronyms::{AcronymList, AcronymSet, CommonAcronyms, IdOr, NoAcronyms};
pub use config::Config;
pub use identifier::{Identifier, Segment};
pub use orthography::{AcronymHandling, Casing, Orthography, StyleError};
pub use parser::ParseError;
pub use presets::{NamedOrthography, Preset};
pub use transform::Styled;

#[derive(Debug, Clone, Default)]
pub struct ConvertResult {
    pub converted_count: usize,
    pub error_count: usize,
    pub conversions: Vec<Conversion>,
}

impl ConvertResult {
    pub fn push(&mut self, conversion: Conversion) {
        match conversion.result {
            Ok(_) => self.converted_count += 1,
            Err(_) => self.error_count += 1,
        }
        self.conversions.push(conversion);
    }
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub result: Result<Converted, ParseError>,
}

#[derive(Debug, Clone)]
pub struct Converted {
    pub identifier: Identifier,
    pub output: String,
}

/// Reformat `input` into `to`. With a source orthography the input is parsed
/// strictly; without one it is fuzzy parsed and cannot fail.
pub fn convert<A>(input: &str, from: Option<&Orthography>, to: &Orthography, acronyms: &A) -> Conversion
where
    A: AcronymList + ?Sized,
{
    let parsed = match from {
        Some(orthography) => orthography.parse_with(input, acronyms),
        None => Ok(Identifier::fuzzy_parse_with(input, acronyms)),
    };

    Conversion {
        input: input.to_string(),
        result: parsed.map(|identifier| Converted {
            output: to.format(&identifier),
            identifier,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_strict_and_fuzzy() {
        let to = Preset::SwiftType.orthography();
        let from = Preset::SnakeCase.orthography();

        let conversion = convert("url_scheme_mangler", Some(&from), &to, &CommonAcronyms);
        assert_eq!(conversion.result.unwrap().output, "URLSchemeMangler");

        let conversion = convert("Url_Scheme", Some(&from), &to, &CommonAcronyms);
        assert!(conversion.result.is_err());

        let conversion = convert("Url_Scheme", None, &to, &CommonAcronyms);
        assert_eq!(conversion.result.unwrap().output, "URLScheme");
    }

    #[test]
    fn test_convert_result_counts() {
        let to = Preset::RubyConstant.orthography();
        let from = Preset::CamelCase.orthography();
        let mut result = ConvertResult::default();
        for input in ["fooBar", "FooBar", "baz"] {
            result.push(convert(input, Some(&from), &to, &CommonAcronyms));
        }
        assert_eq!(result.converted_count, 2);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.conversions.len(), 3);
    }
}
