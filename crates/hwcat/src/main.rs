// SPDX-FileCopyrightText: 2026 Hwcat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! hwcat - a PC hardware catalog where every fact cites an approved source.
//!
//! This is the binary entry point.

mod builder;
mod catalog;
mod error;
mod import;
mod output;
mod validate;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hwcat_core::{ComponentKind, SourceType};
use hwcat_import::ImportError;
use tracing::error;

use crate::error::CliError;
use crate::output::{Output, OutputFormat};

/// hwcat - a provenance-checked PC hardware catalog.
#[derive(Parser, Debug)]
#[command(name = "hwcat", version, about, long_about = None)]
struct Cli {
    /// Configuration file (replaces the XDG lookup).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the catalog with a validated dataset.
    Import {
        /// JSON dataset to import instead of the built-in seed.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Check every source URL a dataset cites, without importing.
    Validate {
        /// JSON dataset to check instead of the built-in seed.
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Validate ad-hoc URLs against the source registry.
    CheckUrl {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Source type the URLs would be cited for.
        #[arg(long = "type")]
        source_type: Option<SourceType>,
    },
    /// Print the effective source allowlist and denylist.
    Sources,
    /// List catalog entries of one kind.
    List { kind: ComponentKind },
    /// Show one catalog entry with its sources.
    Show { kind: ComponentKind, slug: String },
    /// Combine one CPU and one GPU into a priced build.
    Build {
        #[arg(long)]
        cpu: String,
        #[arg(long)]
        gpu: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match hwcat_config::load_and_validate(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            hwcat_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.level);

    let out = Output::new(cli.format, cli.plain);
    let result = match cli.command {
        Commands::Import { dataset } => import::run_import(&config, dataset.as_deref(), out).await,
        Commands::Validate { dataset } => validate::run_validate(&config, dataset.as_deref(), out),
        Commands::CheckUrl { urls, source_type } => {
            validate::run_check_url(&config, &urls, source_type, out)
        }
        Commands::Sources => validate::run_sources(&config, out),
        Commands::List { kind } => catalog::run_list(&config, kind, out).await,
        Commands::Show { kind, slug } => catalog::run_show(&config, kind, &slug, out).await,
        Commands::Build { cpu, gpu } => builder::run_build(&config, &cpu, &gpu, out).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("hwcat: {e}");
            if let CliError::Import(ImportError::MalformedDataset { issues }) = &e {
                for issue in issues {
                    eprintln!("  - {issue}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hwcat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_typed_arguments() {
        let cli = Cli::parse_from([
            "hwcat",
            "--format",
            "json",
            "check-url",
            "https://www.intel.com/x",
            "--type",
            "cpu_specs",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::CheckUrl { urls, source_type } => {
                assert_eq!(urls, ["https://www.intel.com/x"]);
                assert_eq!(source_type, Some(SourceType::CpuSpecs));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn kind_is_case_insensitive() {
        let cli = Cli::parse_from(["hwcat", "show", "GPU", "geforce-rtx-4090", "--plain"]);
        assert!(cli.plain);
        assert!(matches!(
            cli.command,
            Commands::Show { kind: ComponentKind::Gpu, .. }
        ));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = hwcat_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.logging.level, "info");
    }
}
