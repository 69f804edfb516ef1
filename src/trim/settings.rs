//! The fixed `fastp` parameter sets.
//!
//! Every sample is trimmed the same way; the only variation is between the
//! paired-end and single-end sets.

use crate::trim::endedness::Endedness;

/// One fixed set of `fastp` parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrimSettings {
    /// Worker threads handed to fastp (`--thread`).
    pub threads: usize,

    /// Reads shorter than this after trimming are dropped
    /// (`--length_required`).
    pub min_length: usize,

    /// Phred score at or above which a base counts as qualified
    /// (`--qualified_quality_phred`).
    pub qualified_quality: usize,

    /// Maximum percentage of unqualified bases before a read is dropped
    /// (`--unqualified_percent_limit`).
    pub unqualified_percent_limit: usize,

    /// Sliding-window size for right-side quality trimming
    /// (`--cut_right_window_size`).
    pub cut_window_size: usize,

    /// Ask fastp to detect adapters from read-pair overlap
    /// (`--detect_adapter_for_pe`).
    pub detect_adapter_for_pe: bool,

    /// Ask fastp to correct mismatched bases in overlapping pair regions
    /// (`--correction`).
    pub correction: bool,
}

impl TrimSettings {
    /// The parameter set used for every paired-end sample.
    pub fn paired() -> Self {
        TrimSettings {
            threads: 16,
            min_length: 50,
            qualified_quality: 20,
            unqualified_percent_limit: 40,
            cut_window_size: 4,
            detect_adapter_for_pe: true,
            correction: true,
        }
    }

    /// The parameter set used for every single-end sample.
    pub fn single() -> Self {
        TrimSettings {
            threads: 8,
            min_length: 50,
            qualified_quality: 20,
            unqualified_percent_limit: 40,
            cut_window_size: 4,
            detect_adapter_for_pe: false,
            correction: false,
        }
    }

    /// Selects the parameter set for the given endedness.
    pub fn for_endedness(endedness: Endedness) -> Self {
        match endedness {
            Endedness::Paired => TrimSettings::paired(),
            Endedness::Single => TrimSettings::single(),
        }
    }
}
