//! assetmap CLI - asset manifest generator
//!
//! Usage: assetmap <COMMAND>
//!
//! Commands:
//!   emit      Build the manifest from a stats file and write it
//!   show      Print the manifest without writing
//!   classify  Show how filenames are classified

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use assetmap::config::Verbosity;
use assetmap::presentation::{Cli, Commands};
use assetmap::ui::json::emit_event;
use assetmap::ui::json::events::ErrorEvent;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    let command = command_name(&cli.command);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                let _ = emit_event(&ErrorEvent::new(command, format!("{e:#}")));
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    init_tracing(cli.verbose, config.output.verbosity);

    match &cli.command {
        Commands::Emit {
            stats,
            out_dir,
            dry_run,
            overrides,
        } => commands::emit::cmd_emit(
            &config,
            stats,
            out_dir.as_deref(),
            *dry_run,
            overrides,
            cli.json,
        ),
        Commands::Show { stats, overrides } => {
            commands::show::cmd_show(&config, stats, overrides, cli.json)
        }
        Commands::Classify {
            filenames,
            overrides,
        } => commands::classify::cmd_classify(&config, filenames, overrides, cli.json),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Emit { .. } => "emit",
        Commands::Show { .. } => "show",
        Commands::Classify { .. } => "classify",
    }
}

/// RUST_LOG wins; otherwise -v count, otherwise the configured verbosity.
fn init_tracing(verbose: u8, configured: Verbosity) {
    let fallback = match verbose {
        0 => configured.log_filter(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
