//! Text rendering of diagnostic reports.

use super::report::{DiagnosticReport, Recommendation};
use colored::Colorize;

const RULE_WIDTH: usize = 60;

fn mark(ok: bool) -> &'static str {
    if ok {
        "✅"
    } else {
        "❌"
    }
}

/// Render a report as an ordered block: header, summary, details, guidance.
pub fn format_report(report: &DiagnosticReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "FRONTEND-BACKEND DIAGNOSTICS".bold().to_string(),
        rule.clone(),
        format!("Timestamp: {}", report.timestamp_iso()),
        String::new(),
        "SUMMARY:".to_string(),
        format!("  API: {}", mark(report.api_connected)),
        format!("  RAG: {}", mark(report.rag_ready)),
        format!("  LLM: {}", mark(report.llm_available)),
        format!("  Test Query: {}", mark(report.test_query.success)),
        String::new(),
        "DETAILS:".to_string(),
    ];

    lines.extend(report.details.iter().map(|detail| format!("  {}", detail)));

    let recommendation = report.recommendation();
    let title = match recommendation {
        Recommendation::ApiUnreachable => recommendation.title().red(),
        Recommendation::RagInitializing => recommendation.title().yellow(),
        Recommendation::Operational => recommendation.title().green(),
    };
    lines.push(String::new());
    lines.push(format!("{}: {}", title, recommendation.hint()));
    lines.push(rule);

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_lists_details_in_order() {
        let mut report = DiagnosticReport::new(Utc::now());
        report.api_connected = true;
        report.details = vec!["first".to_string(), "second".to_string()];

        let output = format_report(&report);
        let first = output.find("  first").unwrap();
        let second = output.find("  second").unwrap();
        let summary = output.find("SUMMARY:").unwrap();
        assert!(summary < first);
        assert!(first < second);
    }

    #[test]
    fn test_format_summary_marks() {
        let mut report = DiagnosticReport::new(Utc::now());
        report.api_connected = true;
        report.rag_ready = true;

        let output = format_report(&report);
        assert!(output.contains("API: ✅"));
        assert!(output.contains("RAG: ✅"));
        assert!(output.contains("LLM: ❌"));
        assert!(output.contains("Test Query: ❌"));
        assert!(output.contains(&report.timestamp_iso()));
    }

    #[test]
    fn test_format_includes_recommendation() {
        let report = DiagnosticReport::new(Utc::now());
        let output = format_report(&report);
        assert!(output.contains("API not reachable"));
        assert!(output.contains(Recommendation::ApiUnreachable.hint()));
    }
}
