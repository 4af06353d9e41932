//! Parse each input and print the result.

use std::io::Write;

use hexcolor_common::{Color, ColorError};
use hexcolor_config::OutputFormat;
use hexcolor_parse::{parse_hex_color, parse_hex_color_with_alpha};
use serde::Serialize;

use crate::cli::Settings;

/// A color serialized as `#rrggbbaa`.
#[derive(Debug, Serialize)]
struct HexForm(#[serde(with = "hexcolor_parse::serde_hex")] Color);

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<HexForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn parse_input(input: &str, settings: &Settings) -> Result<Color, ColorError> {
    match settings.alpha {
        Some(alpha) => parse_hex_color_with_alpha(input, alpha),
        None => parse_hex_color(input),
    }
}

fn text_line(input: &str, color: &Color, settings: &Settings) -> String {
    let p = settings.precision;
    let mut line = format!(
        "{input} r={:.p$} g={:.p$} b={:.p$} a={:.p$}",
        color.red, color.green, color.blue, color.alpha
    );
    if settings.hex {
        line.push_str(" hex=");
        line.push_str(&color.to_hex_string_with_alpha());
    }
    line
}

fn json_line(
    input: &str,
    outcome: &Result<Color, ColorError>,
    settings: &Settings,
) -> serde_json::Result<String> {
    let line = match outcome {
        Ok(color) => JsonLine {
            input,
            color: Some(*color),
            hex: settings.hex.then_some(HexForm(*color)),
            error: None,
        },
        Err(e) => JsonLine {
            input,
            color: None,
            hex: None,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_string(&line)
}

/// Parse every input, writing results to `out` and text-mode failures to
/// `err`. Returns whether every input parsed.
pub fn report_all<O: Write, E: Write>(
    inputs: &[String],
    settings: &Settings,
    out: &mut O,
    err: &mut E,
) -> hexcolor_common::Result<bool> {
    let mut all_ok = true;

    for input in inputs {
        let outcome = parse_input(input, settings);
        if let Err(e) = &outcome {
            tracing::debug!("failed to parse {input:?}: {e}");
            all_ok = false;
        }

        match settings.format {
            OutputFormat::Text => match &outcome {
                Ok(color) => writeln!(out, "{}", text_line(input, color, settings))?,
                Err(e) => writeln!(err, "{input}: {e}")?,
            },
            OutputFormat::Json => {
                let line = json_line(input, &outcome, settings)
                    .map_err(|e| hexcolor_common::HexColorError::Other(e.to_string()))?;
                writeln!(out, "{line}")?;
            }
        }
    }

    out.flush()?;
    Ok(all_ok)
}
