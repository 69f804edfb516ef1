//! Composition and execution of the external `fastp` command.

use std::ffi::OsString;
use std::process::Command;

use tracing::info;

use crate::trim::error::TrimError;
use crate::trim::output::OutputPaths;
use crate::trim::request::InvocationRequest;
use crate::trim::settings::TrimSettings;

/// Name of the external executable, resolved through `PATH` at spawn time.
const FASTP: &str = "fastp";

/// A fully composed `fastp` command: the validated inputs, the derived
/// output layout, and the parameter set for the sample's endedness.
pub struct FastpInvocation {
    request: InvocationRequest,
    outputs: OutputPaths,
    settings: TrimSettings,
}

impl FastpInvocation {
    /// Composes the command for one validated request. The caller is expected
    /// to have derived `outputs` and `settings` from the request's own
    /// endedness, so an R2 input is always accompanied by an R2 output.
    pub fn new(request: InvocationRequest, outputs: OutputPaths, settings: TrimSettings) -> Self {
        FastpInvocation {
            request,
            outputs,
            settings,
        }
    }

    /// The exact argument list handed to `fastp`, in a form tests can assert
    /// on without spawning anything.
    pub fn argv(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        args.push("--in1".into());
        args.push(self.request.r1.clone().into());
        if let Some(r2) = &self.request.r2 {
            args.push("--in2".into());
            args.push(r2.clone().into());
        }

        args.push("--out1".into());
        args.push(self.outputs.r1.clone().into());
        if let Some(r2_out) = &self.outputs.r2 {
            args.push("--out2".into());
            args.push(r2_out.clone().into());
        }

        args.push("--json".into());
        args.push(self.outputs.json_report.clone().into());
        args.push("--html".into());
        args.push(self.outputs.html_report.clone().into());

        if self.settings.detect_adapter_for_pe {
            args.push("--detect_adapter_for_pe".into());
        }
        if self.settings.correction {
            args.push("--correction".into());
        }

        args.push("--cut_right".into());
        args.push("--cut_right_window_size".into());
        args.push(self.settings.cut_window_size.to_string().into());
        args.push("--length_required".into());
        args.push(self.settings.min_length.to_string().into());
        args.push("--qualified_quality_phred".into());
        args.push(self.settings.qualified_quality.to_string().into());
        args.push("--unqualified_percent_limit".into());
        args.push(self.settings.unqualified_percent_limit.to_string().into());
        args.push("--thread".into());
        args.push(self.settings.threads.to_string().into());

        args
    }

    /// Runs `fastp` and blocks until it exits, inheriting its stdout and
    /// stderr. A non-zero exit (or failing to launch at all) is this
    /// wrapper's own failure.
    pub fn run(&self) -> Result<(), TrimError> {
        let argv = self.argv();
        info!("Running: {} {}", FASTP, render(&argv));

        let status = Command::new(FASTP)
            .args(&argv)
            .status()
            .map_err(|source| TrimError::FastpLaunch { source })?;

        if !status.success() {
            return Err(TrimError::FastpFailed {
                base_name: self.request.base_name.clone(),
                status,
            });
        }

        info!("fastp finished for sample {}.", self.request.base_name);
        Ok(())
    }
}

/// Renders an argument list for the log line. The rendering is lossy; the
/// exact `OsString`s are what get executed.
fn render(argv: &[OsString]) -> String {
    argv.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn paired_invocation() -> FastpInvocation {
        let request = InvocationRequest {
            r1: PathBuf::from("sample_R1.fastq.gz"),
            r2: Some(PathBuf::from("sample_R2.fastq.gz")),
            output_directory: PathBuf::from("/tmp/out"),
            base_name: String::from("sample1"),
        };
        let endedness = request.endedness();
        let outputs = OutputPaths::new(
            &request.output_directory,
            &request.base_name,
            endedness,
        );

        FastpInvocation::new(request, outputs, TrimSettings::for_endedness(endedness))
    }

    fn single_invocation() -> FastpInvocation {
        let request = InvocationRequest {
            r1: PathBuf::from("single.fastq.gz"),
            r2: None,
            output_directory: PathBuf::from("/tmp/out"),
            base_name: String::from("s2"),
        };
        let endedness = request.endedness();
        let outputs = OutputPaths::new(
            &request.output_directory,
            &request.base_name,
            endedness,
        );

        FastpInvocation::new(request, outputs, TrimSettings::for_endedness(endedness))
    }

    #[test]
    pub fn test_paired_argv() {
        let expected: Vec<OsString> = [
            "--in1",
            "sample_R1.fastq.gz",
            "--in2",
            "sample_R2.fastq.gz",
            "--out1",
            "/tmp/out/sample1_fastp_R1.fastq.gz",
            "--out2",
            "/tmp/out/sample1_fastp_R2.fastq.gz",
            "--json",
            "/tmp/out/sample1_fastp.json",
            "--html",
            "/tmp/out/sample1_fastp.html",
            "--detect_adapter_for_pe",
            "--correction",
            "--cut_right",
            "--cut_right_window_size",
            "4",
            "--length_required",
            "50",
            "--qualified_quality_phred",
            "20",
            "--unqualified_percent_limit",
            "40",
            "--thread",
            "16",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        assert_eq!(paired_invocation().argv(), expected);
    }

    #[test]
    pub fn test_single_argv() {
        let expected: Vec<OsString> = [
            "--in1",
            "single.fastq.gz",
            "--out1",
            "/tmp/out/s2_fastp_R1.fastq.gz",
            "--json",
            "/tmp/out/s2_fastp.json",
            "--html",
            "/tmp/out/s2_fastp.html",
            "--cut_right",
            "--cut_right_window_size",
            "4",
            "--length_required",
            "50",
            "--qualified_quality_phred",
            "20",
            "--unqualified_percent_limit",
            "40",
            "--thread",
            "8",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        assert_eq!(single_invocation().argv(), expected);
    }

    #[test]
    pub fn test_single_argv_never_references_r2() {
        let argv = single_invocation().argv();

        for arg in &argv {
            let arg = arg.to_string_lossy();
            assert!(!arg.contains("R2"), "unexpected R2 reference: {}", arg);
        }
        assert!(!argv.contains(&OsString::from("--in2")));
        assert!(!argv.contains(&OsString::from("--out2")));
        assert!(!argv.contains(&OsString::from("--detect_adapter_for_pe")));
        assert!(!argv.contains(&OsString::from("--correction")));
    }

    #[test]
    pub fn test_render_is_a_plain_command_line() {
        let argv: Vec<OsString> = vec!["--in1".into(), "a.fastq.gz".into()];

        assert_eq!(render(&argv), "--in1 a.fastq.gz");
    }
}
