//! SafeTrack host: serves the server-rendered dashboard and its hydration
//! bundle.

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env present but unreadable; using process environment");
        }
    }

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "safetrack listening");
    axum::serve(listener, app).await?;
    Ok(())
}
