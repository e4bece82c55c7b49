//! lockhold CLI - runs the documentation audit over Rust sources.
//!
//! ```text
//! lockhold audit [--config audit.toml] core/src/*.rs
//! ```
//!
//! Prints one line per undocumented operation and exits with status 1 when
//! any are found, or when a configured type is missing from the sources.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use lockhold_audit::{AuditConfig, Auditor};

#[derive(Parser)]
#[command(name = "lockhold")]
#[command(about = "Checks for the lockhold container family")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report undocumented operations (exit 1 if any)
    Audit {
        /// TOML audit config; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
        /// Rust source files to scan
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // stdout carries the report; logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { config, files } => audit(config, &files),
    }
}

fn audit(config: Option<PathBuf>, files: &[PathBuf]) -> Result<ExitCode> {
    let config = match config {
        Some(path) => AuditConfig::load(&path)?,
        None => AuditConfig::default(),
    };

    tracing::debug!(files = files.len(), types = ?config.types, "starting audit");
    let mut auditor = Auditor::new(config);
    for file in files {
        auditor
            .add_path(file)
            .with_context(|| format!("while scanning {}", file.display()))?;
    }

    let report = auditor.run();
    println!("{report}");

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
