//! CLI for uriparse.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use uriparse_core::config;

use commands::{run_completions, run_flags, run_man, run_parse, run_query, ParseArgs};

/// Top-level CLI for uriparse.
#[derive(Debug, Parser)]
#[command(name = "uriparse")]
#[command(about = "Split URLs into components and decode array-style query strings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print its components as JSON.
    Parse {
        /// Absolute URL, e.g. "https://user:pw@example.com:8080/p?a[]=1#top".
        url: String,

        /// Comma-separated components to include (protocol, auth, host, port, query, fragment, path, all).
        #[arg(long, value_name = "NAMES", conflicts_with = "options")]
        only: Option<String>,

        /// Numeric selection mask (protocol=1, auth=2, host=4, port=8, query=16, fragment=32, path=64).
        #[arg(long, value_name = "BITS", allow_negative_numbers = true)]
        options: Option<i64>,

        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// Decode a bare query string (leading '?' optional) and print it as JSON.
    Query {
        /// Raw query string, e.g. "a=1&a=2&b[]=3".
        query: String,

        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// List component names and their bit values.
    Flags,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse {
                url,
                only,
                options,
                compact,
            } => run_parse(
                &cfg,
                &ParseArgs {
                    url: &url,
                    only: only.as_deref(),
                    options,
                    compact,
                },
            )?,
            CliCommand::Query { query, compact } => run_query(&cfg, &query, compact)?,
            CliCommand::Flags => run_flags(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
