//! Whether a sample was sequenced as paired-end or single-end reads.

use std::fmt;

/// The literal R2 argument that marks a sample as single-end. It is exempt
/// from the existence check every real input file must pass.
pub const SINGLE_END_SENTINEL: &str = "NA";

/// The sequencing layout of one sample.
///
/// Decided exactly once, when the command line arguments are validated, and
/// passed to every downstream decision; no code path re-derives the layout
/// from strings or the filesystem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endedness {
    /// Mated R1 and R2 read files.
    Paired,

    /// An R1 read file only.
    Single,
}

impl fmt::Display for Endedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endedness::Paired => write!(f, "paired-end"),
            Endedness::Single => write!(f, "single-end"),
        }
    }
}
