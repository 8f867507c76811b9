//! Configuration loading and server URL resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Environment variable consulted when no CLI argument is given
pub const SERVER_URL_ENV: &str = "BIRDAPP_SERVER_URL";

/// Compiled default server URL (local development server)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/BirdApp";

/// Server URL resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. `BIRDAPP_SERVER_URL` environment variable
/// 3. `server_url` key in the TOML config file
/// 4. Compiled default (fallback)
pub fn resolve_server_url(cli_arg: Option<&str>) -> String {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        return url.trim_end_matches('/').to_string();
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        if !url.trim().is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = config_file_path() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(url) = config.get("server_url").and_then(|v| v.as_str()) {
                    return url.trim_end_matches('/').to_string();
                }
            }
        }
    }

    // Priority 4: Compiled default
    DEFAULT_SERVER_URL.to_string()
}

/// Locate the per-user config file (`birdapp/config.toml` in the
/// platform config directory). Errors when the file does not exist.
fn config_file_path() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("birdapp").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins_and_trailing_slash_is_stripped() {
        let url = resolve_server_url(Some("http://example.org/BirdApp/"));
        assert_eq!(url, "http://example.org/BirdApp");
    }
}
