// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./wingdeck.toml` > `~/.config/wingdeck/wingdeck.toml`
//! > `/etc/wingdeck/wingdeck.toml` with environment variable overrides via the
//! `WINGDECK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::WingdeckConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wingdeck/wingdeck.toml` (system-wide)
/// 3. `~/.config/wingdeck/wingdeck.toml` (user XDG config)
/// 4. `./wingdeck.toml` (local directory)
/// 5. `WINGDECK_*` environment variables
pub fn load_config() -> Result<WingdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WingdeckConfig::default()))
        .merge(Toml::file("/etc/wingdeck/wingdeck.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("wingdeck/wingdeck.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("wingdeck.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<WingdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WingdeckConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WingdeckConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WingdeckConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores stay intact: `WINGDECK_SERVER_BASE_URL` must map to
/// `server.base_url`, not `server.base.url`.
fn env_provider() -> Env {
    Env::prefixed("WINGDECK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: WINGDECK_SERVER_BASE_URL -> "server_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("session_", "session.", 1)
            .replacen("ui_", "ui.", 1);
        mapped.into()
    })
}
