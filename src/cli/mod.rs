//! CLI module for lexgate
//!
//! Command-line front-end over the gateway, diagnostics and poller.
//!
//! # Commands
//!
//! - `health` - Check service health once
//! - `diagnose` - Run the diagnostic probe sequence
//! - `ask` - Ask the legal assistant a question
//! - `history` - Show recent questions and answers
//! - `clear-history` - Delete the conversation history
//! - `watch` - Poll service health until interrupted
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Full diagnostics against a remote instance
//! lexgate --base-url http://10.0.0.5:8000 diagnose
//!
//! # Live connection status every 10 seconds
//! lexgate watch --interval 10
//! ```

pub mod ask;
pub mod completions;
pub mod config;
pub mod diagnose;
pub mod health;
pub mod history;
pub mod output;
pub mod setup;
pub mod watch;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// lexgate - legal-assistant service client
#[derive(Parser, Debug)]
#[command(
    name = "lexgate",
    version,
    about = "Connectivity and health diagnostics for the legal-assistant QA service"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "lexgate.toml")]
    pub config: PathBuf,

    /// Override the service base URL
    #[arg(short = 'u', long, global = true, env = "LEXGATE_BASE_URL")]
    pub base_url: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "LEXGATE_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check service health once
    Health(HealthArgs),
    /// Run connectivity, readiness and test-query probes
    Diagnose(DiagnoseArgs),
    /// Ask a question
    Ask(AskArgs),
    /// Show conversation history
    History(HistoryArgs),
    /// Delete conversation history
    ClearHistory,
    /// Poll service health until interrupted
    Watch(WatchArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DiagnoseArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the test question
    #[arg(short, long)]
    pub question: Option<String>,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Question sent verbatim to the assistant
    pub question: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of entries (forwarded as-is)
    #[arg(short = 'n', long, default_value_t = crate::gateway::DEFAULT_HISTORY_LIMIT, allow_negative_numbers = true)]
    pub limit: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between checks (defaults to poller.interval_seconds)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "lexgate.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::gateway::{
        AnswerResult, ClearHistoryResult, Gateway, GatewayError, HealthStatus, HistoryItem,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Gateway returning fixed values, recording the last history limit.
    #[derive(Default)]
    pub struct StubGateway {
        pub health: Option<HealthStatus>,
        pub answer: Option<AnswerResult>,
        pub history: Vec<HistoryItem>,
        pub last_limit: Mutex<Option<i64>>,
    }

    fn offline() -> GatewayError {
        GatewayError::Transport {
            message: "connection refused".to_string(),
        }
    }

    #[async_trait]
    impl Gateway for StubGateway {
        async fn check_health(&self) -> Result<HealthStatus, GatewayError> {
            self.health.clone().ok_or_else(offline)
        }

        async fn ask_question(&self, _question: &str) -> Result<AnswerResult, GatewayError> {
            self.answer.clone().ok_or_else(offline)
        }

        async fn get_history(&self, limit: i64) -> Result<Vec<HistoryItem>, GatewayError> {
            *self.last_limit.lock().unwrap() = Some(limit);
            Ok(self.history.clone())
        }

        async fn clear_history(&self) -> Result<ClearHistoryResult, GatewayError> {
            Ok(ClearHistoryResult {
                success: true,
                message: Some("Historique effacé".to_string()),
            })
        }
    }
}
