//! Error handling for the Sprout application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Custom error types for Sprout operations.
///
/// `InvalidTemplate` is raised before the pipeline starts and terminates the
/// process. `CopyFailed`, `InstallFailed` and `GitInitFailed` are produced by
/// pipeline tasks and surface as failed task status.
#[derive(Error, Debug)]
pub enum Error {
    /// The template name does not resolve to a readable bundled template.
    #[error("Invalid template name '{name}' (available: {}).", display_available(.available))]
    InvalidTemplate { name: String, available: Vec<String> },

    /// Recursive copy of the template into the target directory failed.
    #[error("Failed to copy '{}': {source}.", .path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The package manager could not be started or exited non-zero.
    #[error("Failed to install dependencies with {manager}: {reason}.")]
    InstallFailed { manager: String, reason: String },

    /// One of the git init / ignore-file / add / commit steps failed.
    #[error("Failed to initialize Git.")]
    GitInitFailed {
        #[source]
        source: Box<Error>,
    },

    /// Summary error for a pipeline run in which at least one task failed.
    #[error("{failed} task(s) failed.")]
    PipelineFailed { failed: usize },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by libgit2
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),
}

fn display_available(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Convenience type alias for Results with Sprout's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message prefixed with a red `ERROR` to stderr and exits
/// with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!(
        "{} {}",
        "ERROR".if_supports_color(owo_colors::Stream::Stderr, |s| s
            .style(owo_colors::Style::new().bold().red())),
        err
    );
    std::process::exit(1);
}
