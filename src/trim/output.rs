//! Derivation of the output file layout for one `fastp` run.

use std::path::Path;
use std::path::PathBuf;

use crate::trim::endedness::Endedness;

const R1_SUFFIX: &str = "_fastp_R1.fastq.gz";
const R2_SUFFIX: &str = "_fastp_R2.fastq.gz";
const JSON_SUFFIX: &str = "_fastp.json";
const HTML_SUFFIX: &str = "_fastp.html";

/// The set of files one `fastp` run writes for one sample.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutputPaths {
    /// Trimmed R1 reads.
    pub r1: PathBuf,

    /// Trimmed R2 reads. Only present for paired-end samples.
    pub r2: Option<PathBuf>,

    /// The JSON report fastp writes.
    pub json_report: PathBuf,

    /// The HTML report fastp writes.
    pub html_report: PathBuf,
}

impl OutputPaths {
    /// Derives the output paths for a sample by joining the output directory
    /// with the sample stem and a fixed suffix per file.
    ///
    /// Pure and deterministic: identical inputs always map to identical
    /// paths, and any directory prefix embedded in `base_name` is stripped
    /// before use.
    ///
    /// ```
    /// use std::path::{Path, PathBuf};
    /// use run_fastp::trim::endedness::Endedness;
    /// use run_fastp::trim::output::OutputPaths;
    ///
    /// let paths = OutputPaths::new(Path::new("/tmp/out"), "sample1", Endedness::Single);
    /// assert_eq!(paths.json_report, PathBuf::from("/tmp/out/sample1_fastp.json"));
    /// assert_eq!(paths.r2, None);
    /// ```
    pub fn new(output_directory: &Path, base_name: &str, endedness: Endedness) -> Self {
        let stem = sample_stem(base_name);

        let r2 = match endedness {
            Endedness::Paired => Some(output_directory.join(format!("{}{}", stem, R2_SUFFIX))),
            Endedness::Single => None,
        };

        OutputPaths {
            r1: output_directory.join(format!("{}{}", stem, R1_SUFFIX)),
            r2,
            json_report: output_directory.join(format!("{}{}", stem, JSON_SUFFIX)),
            html_report: output_directory.join(format!("{}{}", stem, HTML_SUFFIX)),
        }
    }
}

/// Extracts the file-name component of `base_name`, stripping any directory
/// prefix the caller left in it. Names with no file-name component (`..`,
/// `/`) yield an empty stem; the stem never contains a path separator, so
/// joining it onto the output directory cannot escape it.
fn sample_stem(base_name: &str) -> &str {
    Path::new(base_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}
