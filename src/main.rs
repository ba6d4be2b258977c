use anyhow::Result;
use clap::Parser;
use solsort::cli::{Cli, Commands};
use solsort::commands::{self, CheckConfig, SortConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Sort {
            path,
            output,
            write,
        } => commands::sort_path(SortConfig {
            path,
            output,
            write,
        }),
        Commands::Check { path, format } => {
            let report = commands::check_paths(CheckConfig { path, format })?;
            if report.unsorted > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
