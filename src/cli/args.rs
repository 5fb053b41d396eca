//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract i18n messages into `messages.xlf`
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Root directory to scan for .ts files (overrides config file)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,

    /// Directory messages.xlf is written to (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Source language tag written into the catalog (overrides config file)
    #[arg(long)]
    pub source_lang: Option<String>,

    /// Exclude files matching a glob or path prefix (overrides config file)
    /// Can be specified multiple times: --ignore "**/*.spec.ts" --ignore generated
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Name of an i18n function (overrides config file)
    /// Can be specified multiple times: --function i18n --function translate
    #[arg(long = "function", value_name = "NAME")]
    pub functions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract i18n messages from TypeScript sources into an XLIFF catalog
    Extract(ExtractCommand),
    /// Initialize a new .xliffrc.json configuration file
    Init,
}
