//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] when a variable is set but does
    /// not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_vars(
            std::env::var("BIND_ADDR").ok().as_deref(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Build config from raw variable values; `None` or blank selects the
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidConfig`] for unparseable values.
    pub fn from_vars(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let bind_addr = parse_or(bind_addr, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let port = parse_or(port, "PORT", DEFAULT_PORT)?;
        Ok(Self { bind_addr, port })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, var: &'static str, default: T) -> Result<T, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ServerError::InvalidConfig { var, value: value.to_owned() }),
    }
}
