//! Loading of catalog documents and engine settings

mod engine;

pub use engine::{EngineConfig, EquipHookPolicy};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure while reading catalogs or engine settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read loadout data: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid TOML in loadout data: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid JSON in loadout data: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("loadout data rejected: {0}")]
    ValidationError(String),
}

/// Deserialize a TOML document from disk
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&fs::read_to_string(path)?)
}

/// Deserialize a TOML document held in memory
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read `EngineConfig` from a TOML file; absent keys take their defaults
pub fn load_engine_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = load_toml(path)?;
    tracing::debug!(path = %path.display(), hooks = ?config.equip_hooks, "engine config loaded");
    Ok(config)
}
