//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::{parse_bool, parse_radius, Config};

const VALID_KEYS: &str = "topology, node-radius, highlight-endpoints, dark-mode";

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("bfsg Configuration");
    println!("{:-<40}", "");

    println!(
        "Topology:            {}",
        config
            .topology_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(reference graph)".to_string())
    );
    println!("Node Radius:         {}", config.node_radius);
    println!("Highlight Endpoints: {}", config.highlight_endpoints);
    println!("Dark Mode:           {}", config.dark_mode);

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    apply(config, key, value)?;
    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Update a single field by key without saving.
pub fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "topology" | "topology-path" => {
            config.topology_path = if value.is_empty() || value == "none" {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        "node-radius" | "radius" => {
            config.node_radius = parse_radius(value)?;
        }
        "highlight-endpoints" => {
            config.highlight_endpoints = parse_bool(value)?;
        }
        "dark-mode" | "dark" => {
            config.dark_mode = parse_bool(value)?;
        }
        _ => {
            anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, VALID_KEYS);
        }
    }
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", value_of(config, key)?);
    Ok(())
}

pub fn value_of(config: &Config, key: &str) -> Result<String> {
    let value = match key {
        "topology" | "topology-path" => config
            .topology_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        "node-radius" | "radius" => config.node_radius.to_string(),
        "highlight-endpoints" => config.highlight_endpoints.to_string(),
        "dark-mode" | "dark" => config.dark_mode.to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };
    Ok(value)
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
