//! activeql - scaffold a new ActiveQL application
//!
//! Copies the bundled starter template (or an on-disk template tree) into a
//! destination directory, generates a package.json and prints the next
//! steps. A non-empty destination requires confirmation unless --force is
//! given.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use activeql_cli::cli::{self, NewArgs, ParseOutcome};
use activeql_cli::template::Template;
use activeql_cli::{dir, exit, name, prompt};

fn main() {
    let outcome = cli::parse_from(env::args_os());

    // Initialize tracing
    // Default to INFO unless verbose is set (then DEBUG), or RUST_LOG overrides it.
    let verbose = matches!(&outcome, ParseOutcome::Run(args) if args.verbose);
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_target(false) // cleaner output for simple CLI tools
        .with_writer(std::io::stderr)
        .init();

    let code = dispatch(outcome);
    exit::exit(code);
}

fn dispatch(outcome: ParseOutcome) -> i32 {
    match outcome {
        ParseOutcome::Help { text } => {
            print!("{text}");
            exit::request_exit();
            0
        }

        ParseOutcome::Version { text } => {
            print!("{text}");
            exit::request_exit();
            0
        }

        ParseOutcome::UsageError { message, help } => {
            eprintln!("{message}");
            print!("{help}");
            exit::request_exit();
            0
        }

        ParseOutcome::Run(args) => {
            // parsing may already have ended the invocation
            if exit::requested() {
                return 0;
            }
            match run(args) {
                Ok(code) => code,
                Err(e) => {
                    tracing::error!("Error: {:#}", e); // Use {:#} for alternate view (causal chain)
                    1
                }
            }
        }
    }
}

fn run(args: NewArgs) -> Result<i32> {
    let dest = args.destination.clone();
    let resolved = resolve(&dest)?;
    let app_name = name::app_name_or_default(&resolved);
    tracing::debug!(%app_name, dest = %dest.display(), "scaffolding");

    let template = match args.template_dir {
        Some(root) => Template::Tree(root),
        None => Template::Starter,
    };

    if !(dir::is_empty(&dest)? || args.force) {
        let proceed = ask_to_continue()?;
        if !proceed {
            eprintln!("aborting");
            return Ok(1);
        }
    }

    template.materialize(&app_name, &dest)?;
    Ok(0)
}

/// Absolute form of the destination, so name derivation sees a real final
/// segment even for `.`.
fn resolve(dest: &Path) -> Result<PathBuf> {
    if dest.is_absolute() {
        Ok(dest.to_path_buf())
    } else {
        let cwd = env::current_dir().context("failed to get current directory")?;
        Ok(cwd.join(dest))
    }
}

/// Prompt on the interactive streams; the locks are released before this
/// returns, whatever the answer.
fn ask_to_continue() -> Result<bool> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    prompt::confirm(
        "destination is not empty, continue? [y/N] ",
        &mut input,
        &mut output,
    )
}
