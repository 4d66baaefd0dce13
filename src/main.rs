use clap::Parser;
use lexgate::cli::{
    ask, diagnose, handle_completions, handle_config_init, health, history, setup, watch, Cli,
    Commands, ConfigCommands,
};
use lexgate::diagnostics::DiagnosticsRunner;
use lexgate::gateway::{Gateway, GatewayClient};
use std::sync::Arc;

/// Run a command against the configured service; returns the exit code.
async fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Commands that never touch the service
    match &cli.command {
        Commands::Config(ConfigCommands::Init(args)) => {
            handle_config_init(args, cli.global.base_url.as_deref())?;
            return Ok(0);
        }
        Commands::Completions(args) => {
            handle_completions(args);
            return Ok(0);
        }
        _ => {}
    }

    let config = setup::load_config_with_overrides(&cli.global)?;
    setup::init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    let gateway: Arc<dyn Gateway> = Arc::new(GatewayClient::new(&config.gateway)?);

    match cli.command {
        Commands::Health(args) => {
            println!("{}", health::handle_health(&args, gateway.as_ref()).await?);
        }
        Commands::Diagnose(args) => {
            let runner = DiagnosticsRunner::new(Arc::clone(&gateway))
                .with_probe_question(config.diagnostics.probe_question.clone());
            let (output, report) = diagnose::handle_diagnose(&args, runner).await?;
            println!("{}", output);
            if !report.api_connected {
                return Ok(1);
            }
        }
        Commands::Ask(args) => {
            println!("{}", ask::handle_ask(&args, gateway.as_ref()).await?);
        }
        Commands::History(args) => {
            println!("{}", history::handle_history(&args, gateway.as_ref()).await?);
        }
        Commands::ClearHistory => {
            println!("{}", history::handle_clear_history(gateway.as_ref()).await?);
        }
        Commands::Watch(args) => {
            watch::run_watch(&args, gateway, &config.poller).await?;
        }
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(0)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
