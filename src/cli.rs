use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "solsort")]
#[command(about = "Canonical function ordering for Solidity contracts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reorder contract functions into canonical order
    Sort {
        /// Solidity file, or directory to process recursively
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long, conflicts_with = "write")]
        output: Option<PathBuf>,

        /// Rewrite files in place (required for directories)
        #[arg(long)]
        write: bool,
    },

    /// Check whether contract functions are already canonically ordered
    Check {
        /// Solidity file, or directory to process recursively
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
