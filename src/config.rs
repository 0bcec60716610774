use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const STORE_PATH_VAR: &str = "TODO_LIST_FILE";
pub const BIND_ADDR_VAR: &str = "TODO_BIND_ADDR";
pub const DEFAULT_STORE_PATH: &str = "ToDoList.txt";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TODO_BIND_ADDR '{value}': {source}")]
    InvalidBindAddr { value: String, source: AddrParseError },
}

/// Runtime settings, read from the environment (after `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_path = lookup(STORE_PATH_VAR).unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr { value: bind_addr.clone(), source })?;
        Ok(Self { store_path: PathBuf::from(store_path), bind_addr })
    }
}
