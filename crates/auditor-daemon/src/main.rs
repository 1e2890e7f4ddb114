//! AI Act Auditor daemon
//!
//! Serves EU AI Act risk classification over HTTP: assessments, compliance
//! checklists, suspicious-term scans, the guided decision tree, sector
//! templates and a bounded audit history.

use auditor_daemon::{DaemonConfig, DaemonError, Server};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AI Act Auditor daemon CLI
#[derive(Parser)]
#[command(name = "auditord")]
#[command(about = "AI Act Auditor - EU AI Act risk classification service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "AUDITOR_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "AUDITOR_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "AUDITOR_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "AUDITOR_LOG_JSON")]
    json: bool,

    /// Treat suspicious free-text terms as prohibited-practice matches
    #[arg(long, env = "AUDITOR_ESCALATE_TERMS")]
    escalate_terms: bool,
}

#[tokio::main]
async fn main() -> Result<(), DaemonError> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    if let Some(listen) = &cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;
    config.engine.escalate_suspicious_terms |= cli.escalate_terms;

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
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

    // Print startup banner
    println!(
        r#"
     _    ___      _       _
    / \  |_ _|    / \   ___| |_
   / _ \  | |    / _ \ / __| __|
  / ___ \ | |   / ___ \ (__| |_
 /_/   \_\___| /_/   \_\___|\__|

  AI Act Auditor - Risk Classification Service
  Version: {}
  Escalate terms: {}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.engine.escalate_suspicious_terms,
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config)?;
    server.run().await
}
