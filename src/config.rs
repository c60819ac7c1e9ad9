//! Router Configuration
//!
//! Loads and saves the router's configuration from
//! `~/.skillrouter/config.json`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::{default_config, RouterConfig};

/// Config file name within the router directory.
const CONFIG_FILENAME: &str = "config.json";

/// Environment variable consulted when the config file carries no API key.
const API_KEY_ENV: &str = "SKILLROUTER_API_KEY";

/// Returns the router's config directory: `~/.skillrouter`.
pub fn get_router_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/root"))
        .join(".skillrouter")
}

/// Returns the full path to the config file: `~/.skillrouter/config.json`.
pub fn get_config_path() -> PathBuf {
    get_router_dir().join(CONFIG_FILENAME)
}

/// Load the router config from disk.
///
/// Missing fields are merged with defaults; an absent `reasoningApiKey`
/// falls back to the `SKILLROUTER_API_KEY` environment variable. Returns
/// the plain defaults (plus the env key, if set) when the file does not
/// exist or cannot be parsed.
pub fn load_config() -> RouterConfig {
    let config_path = get_config_path();

    let config = fs::read_to_string(&config_path)
        .ok()
        .and_then(|contents| serde_json::from_str::<RouterConfig>(&contents).ok())
        .unwrap_or_else(default_config);

    merge_defaults(config)
}

/// Save the router config to `~/.skillrouter/config.json`, creating the
/// directory if needed.
pub fn save_config(config: &RouterConfig) -> Result<()> {
    let dir = get_router_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create router directory")?;
    }

    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(get_config_path(), &json).context("Failed to write config file")?;

    Ok(())
}

/// Fill unset fields with defaults and apply the API-key env fallback.
pub fn merge_defaults(mut config: RouterConfig) -> RouterConfig {
    let defaults = default_config();

    if config.skills_dir.is_empty() {
        config.skills_dir = defaults.skills_dir;
    }
    if config.reasoning_api_url.is_empty() {
        config.reasoning_api_url = defaults.reasoning_api_url;
    }
    if config.reasoning_model.is_empty() {
        config.reasoning_model = defaults.reasoning_model;
    }
    if config.request_timeout_secs == 0 {
        config.request_timeout_secs = defaults.request_timeout_secs;
    }
    if config.command_prefixes.is_empty() {
        config.command_prefixes = defaults.command_prefixes;
    }

    if config.reasoning_api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.reasoning_api_key = key;
        }
    }

    config
}

/// Resolve a path that may start with `~` to an absolute path.
pub fn resolve_path(p: &str) -> String {
    if let Some(rest) = p.strip_prefix('~') {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root"));
        let rest = rest.strip_prefix('/').unwrap_or(rest);
        home.join(rest).to_string_lossy().to_string()
    } else {
        p.to_string()
    }
}
