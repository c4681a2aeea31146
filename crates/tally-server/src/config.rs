use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tally_types::TableConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub table: TableConfig,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:4180".parse().expect("static default address")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            table: TableConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn from_toml_path(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:4180".parse::<SocketAddr>().unwrap());
        assert_eq!(c.table.seats, 4);
        assert_eq!(c.table.starting_life, 40);
    }

    #[test]
    fn toml_round_trip() {
        let c = ServerConfig::default();
        let raw = toml::to_string(&c).unwrap();
        let back: ServerConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.bind_addr, c.bind_addr);
        assert_eq!(back.table, c.table);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let c: ServerConfig = toml::from_str("[table]\nseats = 2\n").unwrap();
        assert_eq!(c.bind_addr, default_bind_addr());
        assert_eq!(c.table.seats, 2);
        assert_eq!(c.table.starting_life, 40);
    }
}
