use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `edubot` binary.
#[derive(Debug, Parser)]
#[command(
    name = "edubot",
    version,
    about = "EduBot - academic assistant for students, coordinators, and teachers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress notices other than errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend origin (overrides EDUBOT_API__BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Never substitute demo data; backend failures are errors
    #[arg(long, global = true, conflicts_with = "legacy_fallback")]
    pub no_demo: bool,

    /// Substitute demo data for server rejections too
    #[arg(long, global = true)]
    pub legacy_fallback: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
            no_demo: self.no_demo,
            legacy_fallback: self.legacy_fallback,
        }
    }
}
