// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Everything is optional: a missing or unreadable file falls back to
//! defaults, and unknown values degrade rather than fail.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReef";

pub const DEFAULT_OPACITY: f32 = 1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Window width override in logical pixels.
    #[serde(default)]
    pub window_width: Option<u32>,
    /// Window height override in logical pixels.
    #[serde(default)]
    pub window_height: Option<u32>,
    /// Opacity the viewer starts with, in `[0.0, 1.0]`.
    #[serde(default)]
    pub initial_opacity: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: None,
            window_height: None,
            initial_opacity: Some(DEFAULT_OPACITY),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
