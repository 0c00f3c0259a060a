//! Error types for the `gh-po` application.

use nu_ansi_term::Color;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal errors that terminate a `gh-po` run.
#[derive(Error, Debug)]
pub enum PoError {
    /// `gh pr list` exited unsuccessfully. Carries its stderr verbatim.
    #[error("failed to list pull requests")]
    ListFailed { stderr: String },
    /// `gh pr list` succeeded but printed something that isn't a PR list.
    #[error("failed to parse PR list: {}", .0)]
    ParseFailed(#[from] serde_json::Error),
    /// The user backed out of the selection menu.
    #[error("selection cancelled")]
    SelectionCancelled,
    /// `gh pr checkout` failed.
    #[error("failed to checkout PR {}: {reason}", Color::Green.paint(format!("#{}", .number)))]
    CheckoutFailed { number: u64, reason: String },
    /// `gh browse` failed.
    #[error("failed to open PR {} in browser: {reason}", Color::Green.paint(format!("#{}", .number)))]
    BrowseFailed { number: u64, reason: String },
    /// The collaborator binary could not be started at all.
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    /// The configuration file exists but could not be read.
    #[error("invalid configuration at {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
    /// An [inquire::InquireError] other than a user cancellation.
    #[error("prompt error: {}", .0)]
    Prompt(#[from] inquire::InquireError),
    /// An [io::Error] while writing output.
    #[error("io error: {}", .0)]
    Io(#[from] io::Error),
}

pub type PoResult<T> = Result<T, PoError>;

impl PoError {
    /// Writes the user-facing report for this error to stderr.
    ///
    /// A failed listing relays the collaborator's own diagnostics untouched; every other error
    /// gets an `Error:` prefix.
    pub fn report(&self) {
        match self {
            Self::ListFailed { stderr } => eprint!("{stderr}"),
            other => eprintln!("Error: {other}"),
        }
    }
}
