//! Diagnose command implementation

use crate::cli::DiagnoseArgs;
use crate::diagnostics::{format_report, DiagnosticReport, DiagnosticsRunner};

/// Handle diagnose command
///
/// Returns the rendered output together with the finished report so the
/// caller can pick an exit code.
pub async fn handle_diagnose(
    args: &DiagnoseArgs,
    runner: DiagnosticsRunner,
) -> Result<(String, DiagnosticReport), Box<dyn std::error::Error>> {
    let runner = match &args.question {
        Some(question) => runner.with_probe_question(question.clone()),
        None => runner,
    };

    let report = runner.run().await;

    let output = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        format_report(&report)
    };

    Ok((output, report))
}
