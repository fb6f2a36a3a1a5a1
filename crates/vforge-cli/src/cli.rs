//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vforge",
    version,
    about = "Validate and expand component specifications into variant families",
    long_about = "Validate and expand component specifications into variant families.\n\n\
                  A specification declares one element tree, variant axes, conditional\n\
                  states and typed properties. `generate` builds one artifact per variant\n\
                  combination and groups them into a family manifest."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a specification and list its diagnostics.
    Validate(ValidateArgs),

    /// List every variant combination and the states active in it.
    Variants(SpecArg),

    /// Print the resolved tree of one combination as JSON.
    Preview(PreviewArgs),

    /// Build every combination and write the family manifest.
    Generate(GenerateArgs),

    /// Write a starter specification from a template.
    Init(InitArgs),
}

#[derive(Parser)]
pub struct SpecArg {
    /// Path to the specification JSON file.
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,
}

#[derive(Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: SpecArg,

    /// Apply suggested fixes for duplicate variant values.
    #[arg(long = "fix")]
    pub fix: bool,

    /// Where to write the fixed specification (default: overwrite SPEC).
    #[arg(long = "output", value_name = "PATH", requires = "fix")]
    pub output: Option<PathBuf>,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: SpecArg,

    /// Pick a variant value; unpicked groups take their first value.
    #[arg(long = "variant", value_name = "GROUP=VALUE", value_parser = parse_pick)]
    pub picks: Vec<(String, String)>,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: SpecArg,

    /// Output directory for the manifest and the saved specification.
    #[arg(long = "out", value_name = "DIR")]
    pub out: PathBuf,

    /// Proceed when the variant space exceeds the large-combination threshold.
    #[arg(long = "confirm")]
    pub confirm: bool,

    /// Do not save the specification next to the manifest.
    #[arg(long = "no-save")]
    pub no_save: bool,

    /// Restrict loadable font families; text in other families falls back.
    #[arg(long = "font", value_name = "FAMILY")]
    pub fonts: Vec<String>,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Path of the specification file to create.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Starter template.
    #[arg(long = "template", value_enum, default_value = "button")]
    pub template: TemplateArg,

    /// Component name (defaults to the template's name).
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Overwrite an existing file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    Button,
    Input,
    Blank,
}

impl TemplateArg {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateArg::Button => "button",
            TemplateArg::Input => "input",
            TemplateArg::Blank => "blank",
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_pick(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((group, value)) if !group.trim().is_empty() => {
            Ok((group.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected GROUP=VALUE, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_splits_on_first_equals() {
        assert_eq!(
            parse_pick("size = lg"),
            Ok(("size".to_string(), "lg".to_string()))
        );
        assert_eq!(
            parse_pick("label=a=b"),
            Ok(("label".to_string(), "a=b".to_string()))
        );
        assert!(parse_pick("size").is_err());
        assert!(parse_pick("=lg").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
