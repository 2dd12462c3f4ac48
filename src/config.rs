// Runtime configuration
// Read from the process environment (after loading .env)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Which Store adapter backs the user repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub token: String,
    pub store_backend: StoreBackend,
    pub users_file: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// - `TOKEN` (required): static API token
    /// - `HOST` / `PORT`: listen address, default `0.0.0.0:8080`
    /// - `STORE_BACKEND`: `file` (default) or `memory`
    /// - `USERS_FILE`: JSON datastore path, default `users.json`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::Missing("TOKEN"))?;

        let host = match lookup("HOST") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "STORE_BACKEND",
                value,
            })?,
            None => StoreBackend::File,
        };

        let users_file = lookup("USERS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                if store_backend == StoreBackend::File {
                    tracing::warn!("USERS_FILE not set, using {}", DEFAULT_USERS_FILE);
                }
                PathBuf::from(DEFAULT_USERS_FILE)
            });

        Ok(Self {
            host,
            port,
            token,
            store_backend,
            users_file,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
