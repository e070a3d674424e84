//! build-test: a minimal liveness service.
//!
//! This is the application entry point. It parses the command line, loads
//! configuration, initializes tracing, builds the Axum router and starts the
//! HTTP server.

use clap::Parser;
use const_format::formatcp;

use build_test::config::{AppConfig, DEFAULT_LISTEN_ADDR};
use build_test::http::start_server;
use build_test::logging::{init_tracing, resolve_filter};
use build_test::routes::create_router;

const AFTER_HELP: &str = formatcp!(
    "Without a config file the server listens on {}.",
    DEFAULT_LISTEN_ADDR
);

/// build-test: answers GET /health with OK
#[derive(Parser, Debug)]
#[command(name = "build-test", version, about, after_help = AFTER_HELP)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// IP address to bind, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "build_test=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_overrides(args.host, args.port);
    let addr = config.socket_addr()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        %addr,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
