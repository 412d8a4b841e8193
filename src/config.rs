//! Server configuration read from command-line flags and the environment.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Port the service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while interpreting configuration values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The host is not an IP address.
    #[error("invalid listen host '{0}', expected an IP address")]
    InvalidHost(String),
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "taskboard", version, about = "In-memory user and task REST service")]
pub struct ServerConfig {
    /// IP address to bind.
    #[arg(long, env = "TASKBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to bind.
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log filter directive used when `RUST_LOG` is unset.
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::LOCALHOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: "info".to_owned(),
        }
    }
}

impl ServerConfig {
    /// Resolves the address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] when `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
