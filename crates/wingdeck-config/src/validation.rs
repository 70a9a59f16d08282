// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as well-formed URLs and known log levels.

use url::Url;

use crate::diagnostic::ConfigError;
use crate::model::WingdeckConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &WingdeckConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.server.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.base_url must not be empty".to_string(),
        });
    } else {
        match Url::parse(base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                errors.push(ConfigError::Validation {
                    message: format!(
                        "server.base_url must use http or https, got scheme `{}`",
                        url.scheme()
                    ),
                });
            }
            Err(e) => {
                errors.push(ConfigError::Validation {
                    message: format!("server.base_url `{base_url}` is not a valid URL: {e}"),
                });
            }
        }
    }

    if config.server.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "server.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.session.state_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "session.state_path must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.ui.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "ui.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.ui.log_level
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
