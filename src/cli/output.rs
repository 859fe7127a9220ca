use crate::{Conversion, ConvertResult, Identifier, Orthography};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// A style as listed by `identcase styles`.
#[derive(Debug, Clone)]
pub struct StyleEntry {
    pub name: String,
    pub builtin: bool,
    pub orthography: Orthography,
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<&'a Identifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    style: &'a str,
    total: usize,
    converted: usize,
    errors: usize,
    conversions: Vec<JsonConversion<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonStyle {
    name: String,
    builtin: bool,
    example: String,
    orthography: Orthography,
}

impl<'a> From<&'a Conversion> for JsonConversion<'a> {
    fn from(conversion: &'a Conversion) -> Self {
        match &conversion.result {
            Ok(converted) => JsonConversion {
                input: &conversion.input,
                output: Some(&converted.output),
                segments: Some(&converted.identifier),
                error: None,
            },
            Err(e) => JsonConversion {
                input: &conversion.input,
                output: None,
                segments: None,
                error: Some(e.to_string()),
            },
        }
    }
}

fn print_json(style: &str, result: &ConvertResult) -> Result<()> {
    let output = JsonOutput {
        style,
        total: result.conversions.len(),
        converted: result.converted_count,
        errors: result.error_count,
        conversions: result.conversions.iter().map(JsonConversion::from).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print the outcome of `convert`: one line per input.
pub fn print_conversions(
    target: &str,
    result: &ConvertResult,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(target, result),
        OutputFormat::Text => {
            for conversion in &result.conversions {
                match &conversion.result {
                    Ok(converted) if colored_output => println!(
                        "{} {} {}",
                        conversion.input.dimmed(),
                        "→".dimmed(),
                        converted.output.green().bold()
                    ),
                    Ok(converted) => println!("{} → {}", conversion.input, converted.output),
                    Err(e) => print_failure(&conversion.input, &e.to_string(), colored_output),
                }
            }
            Ok(())
        }
    }
}

/// Print the outcome of `check`: failures always, passes as a tick.
pub fn print_check_results(
    style: &str,
    result: &ConvertResult,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(style, result),
        OutputFormat::Text => {
            for conversion in &result.conversions {
                match &conversion.result {
                    Ok(_) if colored_output => {
                        println!("  {} {}", "✓".green(), conversion.input)
                    }
                    Ok(_) => println!("  ✓ {}", conversion.input),
                    Err(e) => print_failure(&conversion.input, &e.to_string(), colored_output),
                }
            }
            Ok(())
        }
    }
}

fn print_failure(input: &str, reason: &str, colored_output: bool) {
    if colored_output {
        println!("  {} {} {}", "✗".red().bold(), input.red().bold(), reason.dimmed());
    } else {
        println!("  ✗ {} {}", input, reason);
    }
}

pub fn print_styles(
    styles: &[StyleEntry],
    example: &Identifier,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    if let OutputFormat::Json = format {
        let json: Vec<JsonStyle> = styles
            .iter()
            .map(|entry| JsonStyle {
                name: entry.name.clone(),
                builtin: entry.builtin,
                example: entry.orthography.format(example),
                orthography: entry.orthography.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let width = styles.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for entry in styles {
        let sample = entry.orthography.format(example);
        let origin = if entry.builtin { "" } else { " (custom)" };
        if colored_output {
            println!(
                "  {:width$}  {:24}  {}{}",
                entry.name.cyan().bold(),
                sample.green(),
                entry.orthography.to_string().dimmed(),
                origin.yellow(),
                width = width
            );
        } else {
            println!(
                "  {:width$}  {:24}  {}{}",
                entry.name,
                sample,
                entry.orthography,
                origin,
                width = width
            );
        }
    }
    Ok(())
}

pub fn print_convert_summary(result: &ConvertResult, colored: bool) {
    if result.error_count == 0 {
        return;
    }
    let noun = if result.error_count == 1 { "identifier" } else { "identifiers" };
    println!();
    if colored {
        println!(
            "{} {} {} could not be parsed",
            "✗".red().bold(),
            result.error_count.to_string().red().bold(),
            noun
        );
    } else {
        println!("✗ {} {} could not be parsed", result.error_count, noun);
    }
}

pub fn print_check_summary(style: &str, result: &ConvertResult, colored: bool) {
    println!();
    if result.error_count == 0 {
        let message = format!("✓ All identifiers follow {}", style);
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let noun = if result.error_count == 1 {
            "identifier does"
        } else {
            "identifiers do"
        };
        if colored {
            println!(
                "{} {} {} not follow {}",
                "✗".red().bold(),
                result.error_count.to_string().red().bold(),
                noun,
                style.cyan()
            );
        } else {
            println!("✗ {} {} not follow {}", result.error_count, noun, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{convert, CommonAcronyms, Preset};

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_json_conversion() {
        let to = Preset::SnakeCase.orthography();
        let from = Preset::CamelCase.orthography();

        let ok = convert("jsonValue", Some(&from), &to, &CommonAcronyms);
        let value = serde_json::to_value(JsonConversion::from(&ok)).unwrap();
        assert_eq!(value["output"], "json_value");
        assert_eq!(value["segments"][0]["kind"], "acronym");
        assert!(value.get("error").is_none());

        let failed = convert("JsonValue", Some(&from), &to, &CommonAcronyms);
        let value = serde_json::to_value(JsonConversion::from(&failed)).unwrap();
        assert!(value.get("output").is_none());
        assert!(value["error"].as_str().unwrap().contains("Invalid casing"));
    }
}
