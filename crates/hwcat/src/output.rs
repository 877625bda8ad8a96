// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output format selection shared by every command.

use std::io::IsTerminal;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// How a command should write its report.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub format: OutputFormat,
    pub color: bool,
}

impl Output {
    /// Colour only applies to text on a terminal, and never with `--plain`.
    pub fn new(format: OutputFormat, plain: bool) -> Self {
        Self {
            format,
            color: format == OutputFormat::Text && !plain && std::io::stdout().is_terminal(),
        }
    }

    pub fn is_json(self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print `value` as pretty JSON on stdout.
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<(), CliError> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Placeholder rendered for spec fields with no officially published value.
pub const NOT_SPECIFIED: &str = "not officially specified";

/// Render an optional value, falling back to [`NOT_SPECIFIED`].
pub fn or_unspecified<T: std::fmt::Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => v.to_string(),
        Some(v) => format!("{v} {unit}"),
        None => NOT_SPECIFIED.to_string(),
    }
}

/// Format a EUR amount with two decimals.
pub fn eur(amount: f64) -> String {
    format!("{amount:.2} EUR")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_values_are_spelled_out() {
        assert_eq!(or_unspecified(Some(24), ""), "24");
        assert_eq!(or_unspecified(Some(5.6), "GHz"), "5.6 GHz");
        assert_eq!(or_unspecified(None::<u32>, "MHz"), NOT_SPECIFIED);
    }

    #[test]
    fn json_output_never_colors() {
        let out = Output::new(OutputFormat::Json, false);
        assert!(!out.color);
        assert!(out.is_json());
    }

    #[test]
    fn eur_has_two_decimals() {
        assert_eq!(eur(329.9), "329.90 EUR");
    }
}
