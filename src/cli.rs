//! Command-line interface, built on clap.
//!
//! [`Cli`] carries the global flags (--config, --verbose, --json) and the
//! [`Command`] to run.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Fill missing Lokalise translations with DeepL machine translations.
#[derive(Debug, Parser)]
#[command(name = "locsync", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the TOML configuration file.
    #[arg(long, global = true, default_value = "locsync.toml")]
    pub config: PathBuf,

    /// Log debug output.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Print the run report as JSON instead of a summary.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate every untranslated entry and write it back as unverified.
    Sync,

    /// List untranslated entries without translating anything.
    Pending,
}
