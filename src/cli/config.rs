//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::ConfigCommand;
use crate::core::config::{Config, ConfigKey};
use crate::error::{Result, RoadmapError};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(&key, &value, config_path),
        ConfigCommand::Get { key } => handle_get(&key, config_path),
        ConfigCommand::Path => {
            println!("{}", Config::resolve_path(config_path)?.display());
            Ok(())
        }
    }
}

fn parse_key(key: &str) -> Result<ConfigKey> {
    ConfigKey::from_name(key).ok_or_else(|| {
        RoadmapError::InvalidInput(format!(
            "Unknown configuration key '{}'. Available keys: {}",
            key,
            ConfigKey::all()
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

/// Handle setting a configuration value
fn handle_set(key: &str, value: &str, config_path: Option<&Path>) -> Result<()> {
    let key = parse_key(key)?;

    let mut config = Config::load(config_path)?;
    config.set(key, value)?;
    config.save(config_path)?;

    println!("{} set to: {}", key.name(), config.get(key));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: &str, config_path: Option<&Path>) -> Result<()> {
    let key = parse_key(key)?;
    let config = Config::load(config_path)?;
    println!("{}: {}", key.name(), config.get(key));
    Ok(())
}
