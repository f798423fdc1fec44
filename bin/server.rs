// Bank API - Web Server

use anyhow::{Context, Result};
use bank_api::config::load_dotenv;
use bank_api::logging::init_logging;
use bank_api::{
    create_router, open_database, AccountService, AppState, ServerConfig, SqliteAccountRepository,
};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    init_logging();

    let config = ServerConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        version = bank_api::VERSION,
        host = %config.host,
        port = config.port,
        database = ?config.database_path,
        "Configuration loaded"
    );

    let db = open_database(&config.database_path)?;
    let service = AccountService::new(SqliteAccountRepository::new(db));
    let app = create_router(AppState::new(service));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
