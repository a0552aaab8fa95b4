//! Photo Feed CLI - Infinite-scroll photo feed on the command line.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod viewport;

use commands::{Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Feed(args)) => run_feed(commands::feed::FeedArgs::with_config(args, &config)),
        Some(Commands::Show(args)) => {
            let args = commands::show::ShowArgs::with_config(args, &config);
            match commands::show::run(&args) {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    ExitCode::Error
                }
            }
        }
        // Default behavior: run feed with flattened args
        None => run_feed(commands::feed::FeedArgs::with_config(cli.feed, &config)),
    };

    exit_code.into()
}

fn run_feed(args: commands::feed::FeedArgs) -> ExitCode {
    match commands::feed::run(&args) {
        Ok(result) => result.exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
