//! Ask command implementation

use crate::cli::output::shorten;
use crate::cli::AskArgs;
use crate::gateway::{AnswerResult, Gateway};
use colored::Colorize;

const EXCERPT_PREVIEW_CHARS: usize = 120;

/// Format an answer and its sources as pretty text
fn format_answer_pretty(answer: &AnswerResult) -> String {
    let mut lines = vec![
        "Answer:".bold().to_string(),
        answer.answer.clone(),
        String::new(),
        format!("Sources ({}):", answer.source_count).bold().to_string(),
    ];

    if answer.sources.is_empty() {
        lines.push("  (none)".dimmed().to_string());
    }
    for (i, source) in answer.sources.iter().enumerate() {
        lines.push(format!(
            "  {}. {}: {}",
            i + 1,
            source.name.cyan(),
            shorten(&source.excerpt, EXCERPT_PREVIEW_CHARS)
        ));
    }

    lines.join("\n")
}

/// Handle ask command
pub async fn handle_ask(
    args: &AskArgs,
    gateway: &dyn Gateway,
) -> Result<String, Box<dyn std::error::Error>> {
    let answer = gateway.ask_question(&args.question).await?;

    if args.json {
        Ok(serde_json::to_string_pretty(&answer)?)
    } else {
        Ok(format_answer_pretty(&answer))
    }
}
