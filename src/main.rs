use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use identcase::cli::output::{self, OutputFormat, StyleEntry};
use identcase::config::Overrides;
use identcase::{convert, AcronymSet, Config, ConvertResult, Identifier, Orthography, Preset};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "identcase")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Treat this word as an acronym (repeatable)
    #[arg(short = 'a', long = "acronym", value_name = "ACRONYM", global = true)]
    acronyms: Vec<String>,

    /// Treat "id" as an acronym
    #[arg(long, global = true)]
    id_acronym: bool,

    /// Do not use the built-in acronym list
    #[arg(long, global = true)]
    no_common_acronyms: bool,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reformat identifiers into another style
    Convert {
        /// Target style (preset name or custom style from config)
        #[arg(short, long)]
        to: Option<String>,

        /// Source style; without it the input is guessed
        #[arg(short, long)]
        from: Option<String>,

        /// Exit with code 0 even if some identifiers could not be parsed
        #[arg(long)]
        no_fail: bool,

        /// Identifiers to convert; read from stdin, one per line, when omitted
        #[arg(value_name = "IDENTIFIERS")]
        identifiers: Vec<String>,
    },
    /// Check that identifiers follow a style
    Check {
        /// Style to check against
        style: String,

        /// Exit with code 0 even if some identifiers do not follow the style
        #[arg(long)]
        no_fail: bool,

        /// Identifiers to check; read from stdin, one per line, when omitted
        #[arg(value_name = "IDENTIFIERS")]
        identifiers: Vec<String>,
    },
    /// List available styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "identcase", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Load configuration
    let config = Config::load(Overrides {
        acronyms: cli.acronyms.clone(),
        id_is_acronym: cli.id_acronym,
        no_common_acronyms: cli.no_common_acronyms,
    })?;
    let acronyms = config.acronym_list()?;
    let colored = !cli.no_color;

    match command {
        Commands::Convert {
            to,
            from,
            no_fail,
            identifiers,
        } => {
            let target_name = to
                .or_else(|| config.default_target.clone())
                .context("No target style. Pass --to or set default_target in the config file.")?;
            let target = config.resolve_style(&target_name)?;
            let source = from.map(|name| config.resolve_style(&name)).transpose()?;

            let identifiers = read_identifiers(identifiers)?;
            let result = run_convert(&identifiers, source.as_ref(), &target, &acronyms);
            output::print_conversions(&target_name, &result, colored, &cli.format)?;
            if let OutputFormat::Text = cli.format {
                output::print_convert_summary(&result, colored);
            }

            if result.error_count > 0 && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Check {
            style,
            no_fail,
            identifiers,
        } => {
            let orthography = config.resolve_style(&style)?;
            let result = run_convert(
                &read_identifiers(identifiers)?,
                Some(&orthography),
                &orthography,
                &acronyms,
            );
            output::print_check_results(&style, &result, colored, &cli.format)?;
            if let OutputFormat::Text = cli.format {
                output::print_check_summary(&style, &result, colored);
            }

            if result.error_count > 0 && !no_fail {
                std::process::exit(1);
            }
        }
        Commands::Styles => {
            let mut styles: Vec<StyleEntry> = config
                .styles
                .iter()
                .map(|(name, orthography)| StyleEntry {
                    name: name.clone(),
                    builtin: false,
                    orthography: orthography.clone(),
                })
                .collect();
            styles.extend(Preset::ALL.iter().map(|preset| StyleEntry {
                name: preset.name().to_string(),
                builtin: true,
                orthography: preset.orthography(),
            }));

            output::print_styles(&styles, &style_example(), colored, &cli.format)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("identcase=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_identifiers(identifiers: Vec<String>) -> Result<Vec<String>> {
    if !identifiers.is_empty() {
        return Ok(identifiers);
    }

    tracing::debug!("Reading identifiers from stdin");
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    if lines.is_empty() {
        anyhow::bail!("No identifiers given. Pass them as arguments or on stdin.");
    }
    Ok(lines)
}

fn run_convert(
    identifiers: &[String],
    from: Option<&Orthography>,
    to: &Orthography,
    acronyms: &AcronymSet,
) -> ConvertResult {
    let mut result = ConvertResult::default();
    for input in identifiers {
        let conversion = convert(input, from, to, acronyms);
        if let Err(e) = &conversion.result {
            tracing::debug!(input = %input, error = %e, "Failed to parse identifier");
        }
        result.push(conversion);
    }
    result
}

fn style_example() -> Identifier {
    let mut example = Identifier::new();
    example.append_acronym("html");
    example.append_word("parser");
    example.append_acronym("url");
    example
}
