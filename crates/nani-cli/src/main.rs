// crates/nani-cli/src/main.rs - CLI Application Entry Point
//
// ARCHITECTURE OVERVIEW:
// ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────────┐
// │   User Input    │───▶│   CLI Parser     │───▶│  Command Handlers   │
// │ (clap commands) │    │ (main function)  │    │ (commands/*.rs)     │
// └─────────────────┘    └──────────────────┘    └─────────────────────┘
//                                 │                        │
//                                 ▼                        ▼
//                        ┌──────────────────┐    ┌─────────────────────┐
//                        │     Context      │    │     Services        │
//                        │ (base + config)  │    │ (pages, tools, fs)  │
//                        └──────────────────┘    └─────────────────────┘
//
// EXAMPLE USAGE:
// ```bash
// nani man tar --generate          # Create man/tar.md and open the editor
// nani man tar -v                  # Render it in the terminal
// nani notes week1 -e              # Edit notes/notes_all/week1.md
// nani ls --notes --json           # Machine-readable listing
// nani deploy                      # hugo, then netlify
// ```
//
// EXIT STATUS:
// 0 success, 1 general failure, 2 usage error (clap), 3 page already exists,
// 4 external tool failed, 5 page not found.

use anyhow::Result;
use clap::Parser;
use console::style;
use nani_core::Category;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli; // Command-line interface definitions
mod commands; // Command implementations
mod context; // Base directory, configuration and service wiring
mod error; // Page operation errors and exit statuses
mod services; // Page lifecycle, file system and process services

use cli::{Cli, Commands};
use context::Context;
use error::PageError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            exit_code(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions describe the CLI itself and need no page tree
    match &cli.command {
        #[cfg(feature = "completions")]
        Commands::Completions { shell } => return commands::completions::handle(*shell),
        _ => {}
    }

    let ctx = Context::new(cli.base_dir)?;

    match cli.command {
        Commands::Man(args) => {
            commands::page::handle(&ctx, Category::Man, &args.name, args.action())
        }
        Commands::Notes(args) => {
            commands::page::handle(&ctx, Category::Notes, &args.name, args.action())
        }
        Commands::Ls(args) => {
            let category = if args.man {
                Category::Man
            } else {
                Category::Notes
            };
            commands::list::handle(&ctx, category, args.json)
        }
        Commands::Deploy => commands::deploy::handle(&ctx),
        Commands::Link => commands::link::handle(&ctx),
        Commands::Init => commands::init::handle(&ctx),
        #[cfg(feature = "completions")]
        Commands::Completions { .. } => unreachable!(), // Already handled above
    }
}

/// Logs go to stderr so listings on stdout stay pipeable
///
/// `NANI_LOG` takes an env-filter directive; otherwise warnings only, or
/// info with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env("NANI_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

/// Map the first `PageError` in the chain to its exit status
fn exit_code(err: &anyhow::Error) -> ExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<PageError>())
        .map(|page_err| ExitCode::from(page_err.exit_status()))
        .unwrap_or(ExitCode::FAILURE)
}
