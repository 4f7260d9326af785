//! www-router
//!
//! Serves the corporate site, the consumer app and the staff portal from one
//! process, choosing the site by the request's Host header.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                    www-router                     │
//!                    │                                                   │
//!   Client Request   │  ┌─────────┐   ┌─────────────┐   ┌─────────────┐ │
//!   ─────────────────┼─▶│  http   │──▶│ host router │──▶│ route table │ │
//!                    │  │ server  │   │ (by Host)   │   │ (per tenant)│ │
//!                    │  └─────────┘   └─────────────┘   └──────┬──────┘ │
//!                    │                                         │        │
//!                    │                                         ▼        │
//!   Client Response  │  ┌─────────┐                     ┌─────────────┐ │
//!   ◀────────────────┼──│ reply   │◀────────────────────│ controller  │ │
//!                    │  │ render  │                     │ / capability│ │
//!                    │  └─────────┘                     └─────────────┘ │
//!                    │                                                   │
//!                    │  config · environment guard · observability ·     │
//!                    │  lifecycle · mailer                               │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use www_router::config::{load_config, load_from_env};
use www_router::lifecycle::signals::shutdown_on_signal;
use www_router::observability::{logging, metrics};
use www_router::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "www-router")]
#[command(about = "Host-routed web front door", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config/www.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let from_file = args.config.exists();
    let config = if from_file {
        load_config(&args.config)?
    } else {
        load_from_env()?
    };

    logging::init_logging(&config.observability)?;

    tracing::info!("www-router v{} starting", env!("CARGO_PKG_VERSION"));
    if !from_file {
        tracing::warn!(path = %args.config.display(), "Config file not found, using defaults and environment");
    }
    tracing::info!(
        bind_address = %config.listener.bind_address,
        environment = %config.environment,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_signal(shutdown.clone()));

    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
