//! CLI for urlscope URL introspection.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlscope_core::config::{self, Overrides};

use commands::{run_inspect, run_merge, run_page, run_params};

/// Top-level CLI for urlscope.
#[derive(Debug, Parser)]
#[command(name = "urlscope")]
#[command(about = "urlscope: browser-style URL introspection", long_about = None)]
pub struct Cli {
    /// Host override; replaces the ambient host and collapses the site/full
    /// URLs to exactly this value. Defaults to the config file setting.
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Template path prefix override. Defaults to the config file setting.
    #[arg(long, global = true)]
    pub template: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show everything derived from a URL: page, identity constants, hash.
    Inspect {
        /// Absolute URL to introspect.
        url: String,
    },

    /// Show just the derived page identifier.
    Page {
        /// Absolute URL to introspect.
        url: String,
    },

    /// Show the parsed query snapshot (pairs, canonical string, collection).
    Params {
        /// Absolute URL to introspect.
        url: String,
    },

    /// Merge key=value pairs into the URL's query and show the result.
    Merge {
        /// Absolute URL providing the base query.
        url: String,

        /// Pairs to merge, as `key=value` (caller keys overwrite).
        #[arg(required = true, value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
}

impl CliCommand {
    /// Parses arguments, resolves overrides (config file, then flags), and
    /// dispatches to the matching command.
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let mut overrides = config::load_or_init().unwrap_or_else(|err| {
            tracing::warn!("config unavailable, using defaults: {err:#}");
            Overrides::default()
        });
        if cli.host.is_some() {
            overrides.host = cli.host;
        }
        if cli.template.is_some() {
            overrides.template = cli.template;
        }

        match cli.command {
            CliCommand::Inspect { url } => run_inspect(&url, &overrides),
            CliCommand::Page { url } => run_page(&url, &overrides),
            CliCommand::Params { url } => run_params(&url, &overrides),
            CliCommand::Merge { url, pairs } => run_merge(&url, &pairs, &overrides),
        }
    }
}
