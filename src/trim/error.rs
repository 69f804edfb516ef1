//! Errors that can occur while preparing for or running `fastp`.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong between argument validation and the external
/// tool exiting. All variants are terminal for the invocation: there are no
/// retries and no partial-output cleanup.
#[derive(Debug, Error)]
pub enum TrimError {
    /// A required input file does not exist (or is not a regular file).
    #[error("input file not found: {}", .path.display())]
    MissingInputFile {
        /// The path that failed the existence check.
        path: PathBuf,
    },

    /// The output directory was absent and could not be created.
    #[error("could not create output directory {}: {}", .path.display(), .source)]
    CreateOutputDirectory {
        /// The directory we attempted to create.
        path: PathBuf,

        /// The underlying filesystem error.
        source: io::Error,
    },

    /// `fastp` could not be started at all, typically because it is not on
    /// `PATH`.
    #[error("could not launch fastp: {source}")]
    FastpLaunch {
        /// The underlying spawn error.
        source: io::Error,
    },

    /// `fastp` started but exited unsuccessfully.
    #[error("fastp failed for sample {base_name} ({status})")]
    FastpFailed {
        /// Base name of the sample that was being processed.
        base_name: String,

        /// The exit status reported for the child process.
        status: ExitStatus,
    },
}
