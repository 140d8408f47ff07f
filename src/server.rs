//! Tracing initialization and HTTP agent startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use statwatch_config::{Config, ConfigLoader, LoggingConfig};

use crate::routes::{create_router, AgentState};

/// Initialize tracing.
///
/// Console output goes to stderr; stdout carries report lines. When a log
/// directory is configured, logs are also written to daily rolling files.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = match &logging.dir {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("statwatch")
                .filename_suffix("log")
                .max_log_files(logging.max_files)
                .build(&log_dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes the writer on drop; keep it for the process lifetime.
            static GUARD: OnceLock<WorkerGuard> = OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Run the HTTP agent until interrupted.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot_dir = PathBuf::from(ConfigLoader::expand_path(&config.source.snapshot_dir));

    info!("Starting statwatch v{}", env!("CARGO_PKG_VERSION"));
    info!("Snapshot directory: {}", snapshot_dir.display());
    if !snapshot_dir.is_dir() {
        error!("Snapshot directory does not exist, every check will answer CRITICAL");
    }

    let app = create_router(Arc::new(AgentState::new(snapshot_dir)));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP agent listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP agent stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
