//! CLI module for popmon
//!
//! Provides command-line interface for the monitoring proxy.

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// popmon - Per-popsite HTTP health flags from Prometheus probe data
#[derive(Parser, Debug)]
#[command(name = "popmon")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    POPMON_HOST                   Bind address (default: 0.0.0.0)
    POPMON_PORT                   Listen port (default: 5000, legacy: PORT)
    POPMON_PROMETHEUS_URL         Prometheus base URL (default: http://localhost:9090, legacy: PROMETHEUS_URL)
    POPMON_PROMETHEUS_USER        Basic auth username (legacy: PROMETHEUS_USER)
    POPMON_PROMETHEUS_PASSWORD    Basic auth password (legacy: PROMETHEUS_PASSWORD)
    POPMON_PROMQL                 Metric name (default: probe_http_status_code, legacy: PROMQL)
    POPMON_BACKEND_TIMEOUT_SECS   Prometheus request timeout (default: 30)
    POPMON_LOG_LEVEL              Log level (default: info)
    POPMON_LOG_FORMAT             text | json (default: text)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the monitoring server
    Serve(serve::ServeArgs),
}
