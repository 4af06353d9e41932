use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hexcolor_config::{HexColorConfig, OutputFormat};

/// hexcolor: parse `#RRGGBB` / `#RRGGBBAA` strings into normalized channels.
#[derive(Parser, Debug)]
#[command(name = "hexcolor", version, about)]
pub struct Args {
    /// Hex colors to parse (the leading `#` is optional).
    #[arg(required = true, value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Replace every color's alpha (0.0 to 1.0). Overrides config.
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Output format. Overrides config.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Decimal places for text output (0 to 10). Overrides config.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=10))]
    pub precision: Option<u32>,

    /// Also print the normalized hex form.
    #[arg(long)]
    pub hex: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, hexcolor=trace).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Effective settings after applying CLI overrides to the config.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub precision: usize,
    pub hex: bool,
    pub alpha: Option<f64>,
}

impl Args {
    /// Merge CLI args with config, CLI takes precedence.
    pub fn merge_with_config(&self, config: &HexColorConfig) -> Settings {
        Settings {
            format: self.format.map(Into::into).unwrap_or(config.output.format),
            precision: self.precision.unwrap_or(config.output.precision) as usize,
            hex: self.hex || config.output.hex,
            alpha: self.alpha.or(config.parse.alpha),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
