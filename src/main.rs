use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use git_testament::{git_testament, render_testament};

use run_fastp::trim;

git_testament!(TESTAMENT);

/// Trims one sequencing sample's FASTQ files by running `fastp` with a fixed
/// recipe.
#[derive(Parser)]
#[command(name = "run_fastp", version = render_testament!(TESTAMENT))]
struct Cli {
    #[command(flatten)]
    args: trim::command::TrimArgs,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long)]
    quiet: bool,

    /// All available information, including debug information, is printed to
    /// stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    // Usage problems exit 1; help and version are not failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    let mut level = tracing::Level::INFO;
    if cli.quiet {
        level = tracing::Level::ERROR;
    } else if cli.verbose {
        level = tracing::Level::DEBUG;
    }

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    trim::command::trim(cli.args)
}
