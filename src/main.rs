//! appd-preflight CLI entry point

use appd_preflight::cli::common::EXIT_ERROR;
use appd_preflight::cli::{Command, args::Cli};
use clap::Parser;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("appd_preflight=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("appd_preflight=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Override values may hold credentials, so only the command is logged
    tracing::debug!(command = cli.command.name(), "appd-preflight starting");

    let exit_code = match cli.command {
        Command::Init { force } => match appd_preflight::cli::init::run_init(force) {
            Ok(result) => {
                for path in &result.created {
                    println!("Created {}", path);
                }
                for path in &result.overwritten {
                    println!("Overwrote {}", path);
                }
                for path in &result.skipped {
                    println!("Skipped {} (already exists, use --force to overwrite)", path);
                }
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
        Command::Check {
            profiles,
            overrides,
            format,
            config,
        } => appd_preflight::cli::check::run_check(
            &profiles,
            &overrides,
            format,
            config.as_deref(),
            cli.color,
        ),
        Command::List { format, config } => {
            appd_preflight::cli::list::run_list(format, config.as_deref())
        }
    };

    process::exit(exit_code);
}
