//! Startup and serve errors for the host binary.

use std::net::SocketAddr;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// The `[package.metadata.leptos]` section could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
