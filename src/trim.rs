//! Functionality related to trimming a sample's FASTQ files with `fastp`.

pub mod command;
pub mod endedness;
pub mod error;
pub mod invocation;
pub mod output;
pub mod request;
pub mod settings;
