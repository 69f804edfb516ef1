//! `run_fastp` is a command line tool that runs [`fastp`] over one
//! sequencing sample with a fixed trimming recipe. This package is composed
//! of both a library crate, as well as a binary crate.
//!
//! This documentation generally refers to the library crate documentation for
//! use by developers of `run_fastp`. If you're interested in details about
//! using the `run_fastp` command line tool (much more common), see the help
//! text emitted by `run_fastp --help`.
//!
//! [`fastp`]: https://github.com/OpenGene/fastp
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod trim;
