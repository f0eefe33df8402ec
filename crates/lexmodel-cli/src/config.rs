//! Client configuration loader for `lexm`.
//!
//! Reads `config.toml` from the config directory (`~/.lexmodel/` by default)
//! and deserializes it into [`ClientConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::{Path, PathBuf};

use lexmodel_types::config::ClientConfig;

/// Resolve the config file path.
///
/// The `--config` flag (or `LEXMODEL_CONFIG`) wins. Otherwise the file is
/// `~/.lexmodel/config.toml`, or `.lexmodel/config.toml` in the current
/// directory when no home directory can be determined.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lexmodel").join("config.toml");
    }

    PathBuf::from(".lexmodel").join("config.toml")
}

/// Load the client configuration from `path`.
///
/// - Missing file: [`ClientConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_client_config(path: &Path) -> ClientConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ClientConfig::default()
        }
    }
}

/// Apply command-line overrides on top of the file.
pub fn apply_overrides(mut config: ClientConfig, region: Option<String>) -> ClientConfig {
    if let Some(region) = region {
        config.region = region;
    }
    config
}
