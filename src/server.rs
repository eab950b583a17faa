//! HTTP server initialization and runtime setup.
//!
//! Handles dataset loading, mail backend selection and Axum server lifecycle.

use crate::config::Config;
use crate::domain::delivery::MessageDelivery;
use crate::infrastructure::dataset::CsvDataSource;
use crate::infrastructure::delivery::{CachedHealth, DEFAULT_HEALTH_TTL, LogDelivery, SmtpDelivery};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Pantry and institution catalog from CSV
/// - SMTP delivery with cached health checks (or LogDelivery fallback)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - A dataset is missing or malformed
/// - The SMTP relay settings are invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let catalog = CsvDataSource::new(&config.pantry_csv, &config.institution_csv)
        .load()
        .context("Failed to load datasets")?;

    let delivery: Arc<dyn MessageDelivery> = match &config.smtp {
        Some(smtp) => {
            let transport = SmtpDelivery::new(smtp).context("Invalid SMTP settings")?;
            tracing::info!("Mail delivery enabled ({})", transport.describe());
            Arc::new(CachedHealth::new(Arc::new(transport), DEFAULT_HEALTH_TTL))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, contact messages will only be logged");
            Arc::new(LogDelivery::new())
        }
    };

    let state = AppState::new(
        Arc::new(catalog),
        delivery,
        config.map,
        config.default_borough,
        Duration::from_secs(config.delivery_timeout_seconds),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
