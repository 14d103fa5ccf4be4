//! Argument parsing as a pure step.
//!
//! Parsing never touches process state: it produces a [`ParseOutcome`] the
//! binary dispatches on. Help, version and usage errors are terminal
//! outcomes, so the scaffolding logic cannot run twice behind them.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// activeql - scaffold a new ActiveQL application
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "activeql", version, about = "Scaffold a new ActiveQL application")]
pub struct NewArgs {
    /// Destination directory for the generated application
    #[arg(value_name = "DESTINATION", default_value = ".")]
    pub destination: PathBuf,

    /// Write into a non-empty destination without asking
    #[arg(short, long)]
    pub force: bool,

    /// Copy an on-disk template tree instead of the bundled starter
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Result of the parse step.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Help was requested; print it and end the invocation with exit 0.
    Help { text: String },
    /// Version was requested; print it and end the invocation with exit 0.
    Version { text: String },
    /// Arguments parsed; run the scaffolder.
    Run(NewArgs),
    /// Unknown or malformed options. Help is rendered once per invocation
    /// (further unknown options produce no duplicate error) and the
    /// invocation still ends with exit 0.
    UsageError { message: String, help: String },
}

/// Parse a full argument list (including the program name).
pub fn parse_from<I, T>(args: I) -> ParseOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match NewArgs::try_parse_from(args) {
        Ok(args) => ParseOutcome::Run(args),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp => ParseOutcome::Help {
                text: err.to_string(),
            },
            ErrorKind::DisplayVersion => ParseOutcome::Version {
                text: err.to_string(),
            },
            _ => ParseOutcome::UsageError {
                message: err
                    .to_string()
                    .lines()
                    .next()
                    .unwrap_or("invalid arguments")
                    .to_string(),
                help: NewArgs::command().render_help().to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_defaults_to_current_directory() {
        match parse_from(["activeql"]) {
            ParseOutcome::Run(args) => {
                assert_eq!(args.destination, PathBuf::from("."));
                assert!(!args.force);
                assert!(args.template_dir.is_none());
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn destination_and_force_are_parsed() {
        match parse_from(["activeql", "demo", "--force"]) {
            ParseOutcome::Run(args) => {
                assert_eq!(args.destination, PathBuf::from("demo"));
                assert!(args.force);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn template_dir_selects_the_tree_variant() {
        match parse_from(["activeql", "demo", "--template-dir", "/tmp/tpl"]) {
            ParseOutcome::Run(args) => {
                assert_eq!(args.template_dir, Some(PathBuf::from("/tmp/tpl")));
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn version_is_a_terminal_outcome() {
        match parse_from(["activeql", "--version"]) {
            ParseOutcome::Version { text } => {
                assert!(text.contains(env!("CARGO_PKG_VERSION")));
            }
            other => panic!("expected Version, got {other:?}"),
        }
    }

    #[test]
    fn help_is_a_terminal_outcome() {
        match parse_from(["activeql", "--help"]) {
            ParseOutcome::Help { text } => {
                assert!(text.contains("Scaffold a new ActiveQL application"));
            }
            other => panic!("expected Help, got {other:?}"),
        }
    }

    #[test]
    fn unknown_option_renders_help_once() {
        match parse_from(["activeql", "--bogus"]) {
            ParseOutcome::UsageError { message, help } => {
                assert!(message.contains("--bogus"));
                assert!(help.contains("Usage:"));
            }
            other => panic!("expected UsageError, got {other:?}"),
        }
    }

    #[test]
    fn second_unknown_option_produces_no_duplicate_error() {
        // parsing stops at the first unknown option; the outcome still
        // carries exactly one help rendering
        match parse_from(["activeql", "--bogus", "--worse"]) {
            ParseOutcome::UsageError { message, help } => {
                assert!(message.contains("--bogus"));
                assert_eq!(help.matches("Usage:").count(), 1);
            }
            other => panic!("expected UsageError, got {other:?}"),
        }
    }
}
