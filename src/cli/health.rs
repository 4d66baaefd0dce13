//! Health command implementation

use crate::cli::output::colored_mark;
use crate::cli::HealthArgs;
use crate::gateway::{Gateway, HealthStatus};
use colored::Colorize;

/// Format health status as pretty text
fn format_health_pretty(health: &HealthStatus) -> String {
    let state = if health.rag_ready {
        "Connected".green()
    } else {
        "Not ready".yellow()
    };

    format!(
        "Status: {} ({})\nRAG: {} • LLM: {}",
        state,
        health.status,
        colored_mark(health.rag_ready),
        colored_mark(health.llm_available)
    )
}

/// Handle health command
pub async fn handle_health(
    args: &HealthArgs,
    gateway: &dyn Gateway,
) -> Result<String, Box<dyn std::error::Error>> {
    let health = gateway.check_health().await?;

    if args.json {
        Ok(serde_json::to_string_pretty(&health)?)
    } else {
        Ok(format_health_pretty(&health))
    }
}
