//! CLI configuration management.
//!
//! Values come from, lowest precedence first: built-in defaults, the JSON
//! config file, `.env` / environment variables, then CLI arguments.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bfs_graph_core::NODE_RADIUS;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "BFSG_CONFIG";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Topology JSON file to load instead of the built-in reference graph.
    pub topology_path: Option<PathBuf>,

    /// Node radius in canvas units (drawing and click target).
    pub node_radius: f32,

    /// Keep start/end colored separately once a path is shown.
    pub highlight_endpoints: bool,

    /// Start the viewer in dark mode.
    pub dark_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topology_path: None,
            node_radius: NODE_RADIUS,
            highlight_endpoints: false,
            dark_mode: false,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) => Self::load_file(&path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override fields from environment variables, looked up through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(path) = var("BFSG_TOPOLOGY") {
            self.topology_path = Some(PathBuf::from(path));
        }
        if let Some(radius) = var("BFSG_NODE_RADIUS") {
            self.node_radius = parse_radius(&radius)
                .with_context(|| format!("Invalid BFSG_NODE_RADIUS: {radius}"))?;
        }
        if let Some(flag) = var("BFSG_HIGHLIGHT_ENDPOINTS") {
            self.highlight_endpoints = parse_bool(&flag)
                .with_context(|| format!("Invalid BFSG_HIGHLIGHT_ENDPOINTS: {flag}"))?;
        }
        if let Some(flag) = var("BFSG_DARK_MODE") {
            self.dark_mode =
                parse_bool(&flag).with_context(|| format!("Invalid BFSG_DARK_MODE: {flag}"))?;
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        self.save_at(Self::config_file_path())
    }

    fn save_at(&self, location: Option<PathBuf>) -> Result<()> {
        let Some(config_path) = location else {
            anyhow::bail!("No config file location available; set {CONFIG_PATH_ENV}");
        };
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("dev", "bfs-graph", "bfsg")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}

/// Parses a node radius, which must be finite and positive.
pub fn parse_radius(value: &str) -> Result<f32> {
    let radius: f32 = value.trim().parse()?;
    if !(radius.is_finite() && radius > 0.0) {
        anyhow::bail!("node radius must be a positive number, got {value}");
    }
    Ok(radius)
}

/// Accepts the usual spellings of a boolean flag.
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected true/false, got {other:?}"),
    }
}
