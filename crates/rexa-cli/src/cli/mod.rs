//! CLI for the rexa regex-to-automata client.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use rexa_core::config;

use commands::{
    run_completions, run_convert, run_examples, run_history, run_resolve, run_show,
};

/// Top-level CLI for rexa.
#[derive(Debug, Parser)]
#[command(name = "rexa")]
#[command(about = "rexa: convert regular expressions to NFA, DFA and minimized DFA", long_about = None)]
pub struct Cli {
    /// Conversion service origin; overrides the config file and REXA_API_BASE_URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a regular expression and show the result.
    Convert {
        /// The regular expression, e.g. 'ab(b|c)*d+'. Use `--` before patterns starting with '-'.
        regex: String,
    },

    /// Show a stored conversion by its ID.
    Show {
        /// Record identifier.
        id: String,

        /// Report the current state once instead of waiting for the record.
        #[arg(long)]
        no_wait: bool,
    },

    /// List previous conversions, newest first.
    History,

    /// List example patterns to try.
    Examples,

    /// Print the absolute URL a raw resource reference resolves to.
    Resolve {
        /// Reference as returned by the service (URL, path, or backend file path).
        reference: String,

        /// Treat the reference as a rendered image (applies .png repair).
        #[arg(long)]
        image: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let mut cfg = config::load_or_init()?;
        cfg.apply_api_base_override(cli.api_base.as_deref());
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Convert { regex } => run_convert(&cfg, &regex).await?,
            CliCommand::Show { id, no_wait } => run_show(&cfg, &id, !no_wait).await?,
            CliCommand::History => run_history(&cfg)?,
            CliCommand::Examples => run_examples(),
            CliCommand::Resolve { reference, image } => run_resolve(&cfg, &reference, image),
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
