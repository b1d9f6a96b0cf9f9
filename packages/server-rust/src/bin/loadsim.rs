//! loadsim -- synthetic HTTP load target for autoscaling tests.
//!
//! Boots the server with configuration from CLI flags or environment
//! variables, logs through `tracing`, and shuts down gracefully on
//! SIGINT/SIGTERM.

use clap::Parser;
use loadsim_core::SimulatorConfig;
use loadsim_server::network::{validate_delay_range, NetworkConfig, ServerModule};
use loadsim_server::Simulator;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Synthetic HTTP load target for autoscaling and load-test infrastructure.
#[derive(Parser)]
#[command(name = "loadsim")]
#[command(about = "Synthetic HTTP load target for autoscaling tests", long_about = None)]
#[command(version)]
struct Cli {
    /// Bind address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Lower bound of the light-load wait in milliseconds
    #[arg(long, env = "MIN_DELAY_MS", default_value_t = 10)]
    min_delay_ms: u64,

    /// Upper bound of the light-load wait in milliseconds
    #[arg(long, env = "MAX_DELAY_MS", default_value_t = 100)]
    max_delay_ms: u64,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let simulator_config = SimulatorConfig {
        min_delay_ms: cli.min_delay_ms,
        max_delay_ms: cli.max_delay_ms,
    };
    validate_delay_range(&simulator_config)?;

    let network_config = NetworkConfig {
        host: cli.host,
        port: cli.port,
        ..NetworkConfig::default()
    };

    let mut module = ServerModule::new(network_config, Simulator::new(simulator_config));
    let port = module.start().await?;
    info!(
        port,
        min_delay_ms = cli.min_delay_ms,
        max_delay_ms = cli.max_delay_ms,
        "loadsim started"
    );

    module.serve(shutdown_signal()).await
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
