//! popmon Server Entry Point

use clap::Parser;
use popmon::cli::{Cli, Commands};
use popmon::config::MonitorConfig;
use popmon::{logging, server, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    // .env は任意（存在しなくてもエラーにしない）
    let dotenv_loaded = dotenv::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }
    if let Some(path) = dotenv_loaded {
        info!("Loaded environment from {}", path.display());
    }

    let config = match cli.command {
        Some(Commands::Serve(args)) => {
            MonitorConfig::from_env().with_bind_overrides(args.host, args.port)
        }
        // No subcommand - default to serve
        None => MonitorConfig::from_env(),
    };

    info!(
        prometheus_url = %config.prometheus_url,
        metric = %config.metric,
        auth = config.credentials.is_some(),
        "popmon v{}",
        env!("CARGO_PKG_VERSION")
    );

    let bind_addr = config.bind_addr();
    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server::run(state, &bind_addr).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
