use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "sitefix")]
#[command(version)]
#[command(about = "One-shot rewrites for the sevo static site", long_about = None)]
pub struct Args {
    /// Site root the page, stylesheet and script paths are resolved against
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/sitefix.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase logging verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rewrite physical-direction CSS into logical properties and drop the RTL section
    Logical,
    /// Split the navbar into brand/menu/actions and patch components.js
    Navbar,
    /// Print the JSON schema of sitefix.yaml
    Schema,
}

impl Args {
    /// Log level implied by `-q` / `-v`, used when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sitefix={}", default_level)));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::warn!(error = %e, "logging already initialised, keeping existing subscriber");
    }
}
