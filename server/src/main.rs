//! A GraphQL api serving the bookshelf catalogue.
//! The catalogue is fixed at start-up and nothing is ever written back.
use crate::{
    app_builder::build_app,
    settings::{Settings, SettingsError},
    telemetry::TelemetryError,
};
use axum::serve;
use bookshelf::BookStore;
use std::{future::pending, io::Error as IoError};
use thiserror::Error;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{debug, info, warn};

#[cfg(test)]
mod api_testing;
mod app_builder;
mod book_schema;
mod queries;
mod settings;
mod telemetry;

/// Errors that stop the server from starting, or end it early.
#[derive(Debug, Error)]
enum StartupError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Logging could not be set up.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Binding the listener or serving failed.
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Resolves once the process is asked to shut down.
async fn shutdown_signal() {
    if let Err(err) = ctrl_c().await {
        warn!(%err, "unable to listen for the shutdown signal, running until killed");
        pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Read before the settings so it can feed them. Reported once logging is up.
    let dotenv = dotenvy::dotenv();
    let settings = Settings::load()?;
    telemetry::init(&settings.telemetry)?;
    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) => debug!(%err, "no environment file loaded"),
    }

    // --- Set up the catalogue and the app around it ---
    let app = build_app(BookStore::seeded(), &settings);

    // --- Start server ---
    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    let url = format!("http://{}{}", listener.local_addr()?, settings.graphql.path);
    info!(%url, "server ready");
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");

    Ok(())
}
