//! Watch command implementation

use crate::cli::output::colored_mark;
use crate::cli::WatchArgs;
use crate::gateway::Gateway;
use crate::poller::{HealthPoller, PollSnapshot, PollStatus, PollerConfig};
use colored::Colorize;
use std::sync::Arc;
use std::time::Duration;

/// One status line per applied poll result
pub fn format_poll_line(snapshot: &PollSnapshot) -> String {
    let when = snapshot
        .checked_at
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let state = match snapshot.status {
        PollStatus::Pending => "Checking...".yellow(),
        PollStatus::Connected => "Connected".green(),
        PollStatus::Error => "Disconnected".red(),
    };

    let mut line = format!("[{}] {}", when, state);
    if let Some(health) = &snapshot.health {
        line.push_str(&format!(
            "  RAG: {} • LLM: {}",
            colored_mark(health.rag_ready),
            colored_mark(health.llm_available)
        ));
    }
    if let Some(error) = &snapshot.error {
        line.push_str(&format!("  ({})", error));
    }
    line
}

/// Resolve the polling interval from args and config
pub fn resolve_interval(
    args: &WatchArgs,
    config: &PollerConfig,
) -> Result<Duration, Box<dyn std::error::Error>> {
    let secs = args.interval.unwrap_or(config.interval_seconds);
    if secs == 0 {
        return Err("interval must be non-zero".into());
    }
    Ok(Duration::from_secs(secs))
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, stopping watch");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, stopping watch");
        }
    }
}

/// Main watch command handler
pub async fn run_watch(
    args: &WatchArgs,
    gateway: Arc<dyn Gateway>,
    config: &PollerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let interval = resolve_interval(args, config)?;

    let mut poller = HealthPoller::new(gateway, interval);
    let mut updates = poller.subscribe();
    poller.start();

    println!(
        "Watching service health every {}s (Ctrl-C to stop)",
        interval.as_secs()
    );

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                println!("{}", format_poll_line(&snapshot));
            }
        }
    }

    poller.stop();
    Ok(())
}
