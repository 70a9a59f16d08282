// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the wingdeck client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level wingdeck configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WingdeckConfig {
    /// Backend server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Persisted sign-in state settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Terminal output settings.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Base URL of the API, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Persisted sign-in state configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Path of the JSON file holding the signed-in token and user.
    #[serde(default = "default_state_path")]
    pub state_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
        }
    }
}

fn default_state_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("wingdeck").join("session.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("session.json"))
        .to_string_lossy()
        .into_owned()
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colorize terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_color() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = WingdeckConfig::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.server.timeout_secs, 30);
        assert!(config.session.state_path.ends_with("session.json"));
        assert_eq!(config.ui.log_level, "info");
        assert!(config.ui.color);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[server]
base_url = "https://setup.example.com/api"
"#;
        let config: WingdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.base_url, "https://setup.example.com/api");
        assert_eq!(config.server.timeout_secs, 30);
        assert_eq!(config.ui.log_level, "info");
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let toml_str = r#"
[server]
base_url = "https://setup.example.com/api"
timeout = 10
"#;
        let result = toml::from_str::<WingdeckConfig>(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = WingdeckConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: WingdeckConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.server.base_url, config.server.base_url);
        assert_eq!(parsed.session.state_path, config.session.state_path);
    }
}
