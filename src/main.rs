// src/main.rs

use dotenvy::dotenv;
use scorecard_server::config::{Config, LogConfig};
use scorecard_server::mail::{MailQueue, SmtpMailer, spawn_outcome_logger};
use scorecard_server::routes;
use scorecard_server::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Logging settings first so config warnings are not lost
    let logging = LogConfig::from_env();

    let file_appender = tracing_appender::rolling::daily(&logging.log_dir, "scorecard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&logging.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load configuration from environment, port from the first argument
    let config = Config::from_env().with_port_arg(std::env::args().nth(1));

    // Mailer and background queue
    let mailer = SmtpMailer::from_config(config.mailer.clone())?;
    if !mailer.is_configured() {
        tracing::warn!(
            "GMAIL_APP_PASSWORD is not set, scorecards will be logged as failed instead of sent"
        );
    }
    let (mail, outcomes) = MailQueue::start(
        Arc::new(mailer),
        config.mail_workers,
        config.mail_queue_capacity,
    );
    spawn_outcome_logger(outcomes);
    tracing::info!(
        "Mail queue started ({} workers, capacity {})",
        config.mail_workers,
        config.mail_queue_capacity
    );

    // Create AppState
    let state = AppState {
        config: config.clone(),
        mail,
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Trinexial mock test server running on http://localhost:{}", config.port);

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down server...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
