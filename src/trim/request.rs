//! Validation of the raw positional arguments into a runnable request.

use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::trim::endedness::Endedness;
use crate::trim::endedness::SINGLE_END_SENTINEL;
use crate::trim::error::TrimError;

/// A validated request to run `fastp` over one sample.
///
/// Whether the sample is paired-end is captured by the presence of `r2`; the
/// sentinel string accepted on the command line never leaves this module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvocationRequest {
    /// Path to the R1 (forward) reads. Referenced an existing regular file
    /// when the request was validated.
    pub r1: PathBuf,

    /// Path to the R2 (reverse) reads, or `None` for a single-end sample.
    /// When present, referenced an existing regular file when the request was
    /// validated.
    pub r2: Option<PathBuf>,

    /// Directory the trimmed reads and reports are written to.
    pub output_directory: PathBuf,

    /// Sample name used to derive every output file name.
    pub base_name: String,
}

impl InvocationRequest {
    /// Validates the raw positional arguments.
    ///
    /// `raw_r2` stays a string because the sentinel `NA` is not a path: it
    /// marks the sample as single-end and is exempt from the existence check.
    /// R1 is checked first, so a missing R1 is reported regardless of what
    /// was passed for R2.
    pub fn new(
        r1: PathBuf,
        raw_r2: &str,
        output_directory: PathBuf,
        base_name: String,
    ) -> Result<Self, TrimError> {
        if !r1.is_file() {
            return Err(TrimError::MissingInputFile { path: r1 });
        }

        let r2 = if raw_r2 == SINGLE_END_SENTINEL {
            None
        } else {
            let path = PathBuf::from(raw_r2);
            if !path.is_file() {
                return Err(TrimError::MissingInputFile { path });
            }
            Some(path)
        };

        Ok(InvocationRequest {
            r1,
            r2,
            output_directory,
            base_name,
        })
    }

    /// The endedness of the sample: an R2 that was absent at validation (the
    /// sentinel) means single-end, anything else paired-end. This is the only
    /// place the layout is decided.
    pub fn endedness(&self) -> Endedness {
        match self.r2 {
            Some(_) => Endedness::Paired,
            None => Endedness::Single,
        }
    }

    /// Makes sure the output directory exists as a directory, creating it
    /// and any missing parents if it is absent. Having to create it is
    /// surfaced as a warning; a path that already exists as something other
    /// than a directory fails the same way a failed creation does.
    pub fn ensure_output_directory(&self) -> Result<(), TrimError> {
        if self.output_directory.is_dir() {
            return Ok(());
        }

        if !self.output_directory.exists() {
            warn!(
                "output directory {} does not exist; creating it",
                self.output_directory.display()
            );
        }

        fs::create_dir_all(&self.output_directory).map_err(|source| {
            TrimError::CreateOutputDirectory {
                path: self.output_directory.clone(),
                source,
            }
        })
    }
}
