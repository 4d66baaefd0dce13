//! History and clear-history command implementations

use crate::cli::output::shorten;
use crate::cli::HistoryArgs;
use crate::gateway::{Gateway, HistoryItem};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

const QUESTION_PREVIEW_CHARS: usize = 60;
const ANSWER_PREVIEW_CHARS: usize = 80;

/// Format history items as a table
pub fn format_history_table(items: &[HistoryItem]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Timestamp", "Question", "Answer"]);

    for item in items {
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(&item.timestamp),
            Cell::new(shorten(&item.question, QUESTION_PREVIEW_CHARS)),
            Cell::new(shorten(&item.answer, ANSWER_PREVIEW_CHARS)),
        ]);
    }

    table.to_string()
}

/// Handle history command
pub async fn handle_history(
    args: &HistoryArgs,
    gateway: &dyn Gateway,
) -> Result<String, Box<dyn std::error::Error>> {
    let items = gateway.get_history(args.limit).await?;

    if args.json {
        Ok(serde_json::to_string_pretty(&json!({ "history": items }))?)
    } else if items.is_empty() {
        Ok("No history yet.".to_string())
    } else {
        Ok(format_history_table(&items))
    }
}

/// Handle clear-history command
pub async fn handle_clear_history(
    gateway: &dyn Gateway,
) -> Result<String, Box<dyn std::error::Error>> {
    let result = gateway.clear_history().await?;

    let message = result
        .message
        .unwrap_or_else(|| "History cleared".to_string());
    if result.success {
        Ok(format!("{} {}", "✓".green(), message))
    } else {
        Err(format!("History was not cleared: {}", message).into())
    }
}
