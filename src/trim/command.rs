//! Functionality related to the `run_fastp` command itself.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use tracing::info;

use crate::trim::invocation::FastpInvocation;
use crate::trim::output::OutputPaths;
use crate::trim::request::InvocationRequest;
use crate::trim::settings::TrimSettings;

//========================//
// Command line arguments //
//========================//

/// Clap arguments for the `run_fastp` command.
#[derive(Args)]
pub struct TrimArgs {
    /// FASTQ file containing the forward (R1) reads.
    #[arg(value_name = "R1_FASTQ")]
    r1: PathBuf,

    /// FASTQ file containing the reverse (R2) reads, or `NA` for a single-end
    /// sample.
    #[arg(value_name = "R2_FASTQ|NA")]
    r2: String,

    /// Directory the trimmed FASTQs and reports are written to. Created
    /// (including parents) if it does not exist.
    #[arg(value_name = "OUTDIR")]
    output_directory: PathBuf,

    /// Sample name used as the prefix for every output file.
    #[arg(value_name = "BASE_NAME")]
    base_name: String,
}

//==============//
// Main command //
//==============//

/// Main function for the `run_fastp` command.
pub fn trim(args: TrimArgs) -> anyhow::Result<()> {
    info!("Starting fastp trimming...");
    debug!("Arguments:");
    debug!("  [*] R1: {}", args.r1.display());
    debug!("  [*] R2: {}", args.r2);
    debug!("  [*] Output directory: {}", args.output_directory.display());
    debug!("  [*] Base name: {}", args.base_name);

    // (1) Validate the inputs. Endedness falls out of the validated request:
    // a sample is single-end exactly when R2 was passed as the sentinel.
    let request = InvocationRequest::new(args.r1, &args.r2, args.output_directory, args.base_name)?;
    let endedness = request.endedness();
    info!("Treating {} as a {} sample.", request.base_name, endedness);

    // (2) Make sure the output directory exists before fastp needs it.
    request.ensure_output_directory()?;

    // (3) Lay out the outputs and pick the parameter set for this endedness,
    // then hand everything to fastp.
    let outputs = OutputPaths::new(&request.output_directory, &request.base_name, endedness);
    let settings = TrimSettings::for_endedness(endedness);
    FastpInvocation::new(request, outputs, settings).run()?;

    Ok(())
}
