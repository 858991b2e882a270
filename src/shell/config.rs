// Service configuration, read from the environment.
//
// A `.env` file is loaded by the binary before this runs, so everything here
// only sees plain key lookups.

use anyhow::{Context, bail};
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "ENTERTAINMENT_BIND_ADDR";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// `None` runs the service on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} must be a socket address"))?;

        let database = match lookup(DATABASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            None => None,
            Some(url) => {
                let max_connections = match lookup(DATABASE_MAX_CONNECTIONS_VAR) {
                    None => DEFAULT_MAX_CONNECTIONS,
                    Some(raw) => raw.parse::<u32>().with_context(|| {
                        format!("{DATABASE_MAX_CONNECTIONS_VAR} must be a positive integer")
                    })?,
                };
                if max_connections == 0 {
                    bail!("{DATABASE_MAX_CONNECTIONS_VAR} must be at least 1");
                }
                Some(DatabaseConfig {
                    url,
                    max_connections,
                })
            }
        };

        Ok(Self {
            bind_addr,
            database,
        })
    }
}
