use crate::identifier::{Identifier, Segment};
use crate::orthography::{Casing, Orthography};

/// Render an identifier in the given orthography.
pub fn format(identifier: &Identifier, orthography: &Orthography) -> String {
    let mut result = String::from(orthography.sigil());

    for (i, segment) in identifier.iter().enumerate() {
        let is_first_word = i == 0;
        if !is_first_word {
            if let Some(separator) = orthography.separator() {
                result.push(separator);
            }
        }
        write_segment(&mut result, segment, orthography, is_first_word);
    }

    result
}

fn write_segment(out: &mut String, segment: &Segment, orthography: &Orthography, is_first_word: bool) {
    let casing = match segment {
        Segment::Word(_) => orthography.casing(),
        Segment::Acronym(_) if orthography.acronyms().renders_as_word(is_first_word) => {
            orthography.casing()
        }
        Segment::Acronym(_) => Casing::Screaming,
    };

    for (i, c) in segment.text().chars().enumerate() {
        if casing.is_upper_at(is_first_word, i == 0) {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orthography::AcronymHandling;
    use crate::presets::{generic, ruby, swift, NamedOrthography};

    fn fast_jpeg_decompressor() -> Identifier {
        let mut identifier = Identifier::new();
        identifier.append_word("Fast");
        identifier.append_acronym("JPEG");
        identifier.append_word("decompressor");
        identifier
    }

    fn json_parser() -> Identifier {
        let mut identifier = Identifier::new();
        identifier.append_acronym("JSON");
        identifier.append_word("Parser");
        identifier
    }

    #[test]
    fn test_basics() {
        let identifier = fast_jpeg_decompressor();
        assert_eq!(generic::UpperCamelCase::format(&identifier), "FastJpegDecompressor");
        assert_eq!(swift::TypeIdentifier::format(&identifier), "FastJPEGDecompressor");
        assert_eq!(ruby::Global::format(&identifier), "$fast_jpeg_decompressor");
        assert_eq!(swift::Var::format(&identifier), "fastJPEGDecompressor");
        assert_eq!(ruby::Constant::format(&identifier), "FAST_JPEG_DECOMPRESSOR");
    }

    #[test]
    fn test_initial_acronym() {
        let identifier = json_parser();
        assert_eq!(generic::UpperCamelCase::format(&identifier), "JsonParser");
        assert_eq!(swift::TypeIdentifier::format(&identifier), "JSONParser");
        assert_eq!(generic::SnakeCase::format(&identifier), "json_parser");
        assert_eq!(swift::Func::format(&identifier), "jsonParser");
        assert_eq!(ruby::Constant::format(&identifier), "JSON_PARSER");
    }

    #[test]
    fn test_every_casing_and_acronym_handling() {
        let mut identifier = Identifier::new();
        identifier.append_acronym("json");
        identifier.append_word("PARSER");
        identifier.append_acronym("Url");

        let expected = [
            (Casing::Lower, ["json_parser_url", "JSON_parser_URL", "json_parser_URL"]),
            (Casing::Title, ["Json_Parser_Url", "JSON_Parser_URL", "Json_Parser_URL"]),
            (Casing::Sentence, ["Json_parser_url", "JSON_parser_URL", "Json_parser_URL"]),
            (
                Casing::InverseSentence,
                ["json_Parser_Url", "JSON_Parser_URL", "json_Parser_URL"],
            ),
            (Casing::Screaming, ["JSON_PARSER_URL", "JSON_PARSER_URL", "JSON_PARSER_URL"]),
        ];

        for (casing, row) in expected {
            for (acronyms, want) in AcronymHandling::ALL.into_iter().zip(row) {
                let ortho = Orthography::new(casing)
                    .with_separator('_')
                    .with_acronyms(acronyms);
                assert_eq!(ortho.format(&identifier), want, "{casing} / {acronyms}");
            }
        }
    }

    #[test]
    fn test_empty_identifier_is_just_the_sigil() {
        let identifier = Identifier::new();
        assert_eq!(generic::SnakeCase::format(&identifier), "");
        assert_eq!(ruby::Global::format(&identifier), "$");
        assert_eq!(swift::PropertyWrapper::format(&identifier), "@");
    }

    #[test]
    fn test_single_segment_has_no_separator() {
        let mut identifier = Identifier::new();
        identifier.append_word("alone");
        assert_eq!(ruby::Global::format(&identifier), "$alone");
        assert_eq!(generic::ScreamingSnakeCase::format(&identifier), "ALONE");
    }

    #[test]
    fn test_format_is_deterministic() {
        let identifier = fast_jpeg_decompressor();
        let ortho = swift::Var::orthography();
        assert_eq!(ortho.format(&identifier), ortho.format(&identifier));
    }

    #[test]
    fn test_non_letters_pass_through() {
        let mut identifier = Identifier::new();
        identifier.append_acronym("utf8");
        identifier.append_word("decoder");
        assert_eq!(swift::TypeIdentifier::format(&identifier), "UTF8Decoder");
        assert_eq!(generic::CamelCase::format(&identifier), "utf8Decoder");
    }
}
