// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORT` | `3001` |
//! | `HOST` | `0.0.0.0` |
//! | `DATABASE_URL` | `sqlite://movie-review.db` |
//! | `LOG_FILTER` | `movie_reviews=info,tower_http=info,sqlx=warn` |
//!
//! `LOG_FILTER` only applies when `RUST_LOG` is unset.

use std::{
    error::Error as StdError,
    fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr}
};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default SQLite URL, a file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://movie-review.db";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "movie_reviews=info,tower_http=info,sqlx=warn";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address.
    pub host:         IpAddr,
    /// Listen port.
    pub port:         u16,
    /// SQLite connection URL.
    pub database_url: String,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter:   String
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host:         IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port:         DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_filter:   DEFAULT_LOG_FILTER.to_string()
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`.
    ///
    /// Missing or empty variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port
        };
        let host = match get("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => defaults.host
        };

        Ok(Self {
            host,
            port,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            log_filter: get("LOG_FILTER").unwrap_or(defaults.log_filter)
        })
    }

    /// Address the server binds to.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a number in `0..=65535`.
    InvalidPort(String),

    /// `HOST` is not an IP address.
    InvalidHost(String)
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort(raw) => write!(f, "PORT must be a port number, got {raw:?}"),
            Self::InvalidHost(raw) => write!(f, "HOST must be an IP address, got {raw:?}")
        }
    }
}

impl StdError for ConfigError {}
