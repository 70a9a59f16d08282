// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The backend trait seam.
//!
//! State machines and views depend on [`BackendApi`] as a trait object so
//! they can run against the real HTTP client or a scripted mock. Every
//! method is exactly one backend round trip; retry and caching policies do
//! not exist at this layer.

use async_trait::async_trait;

use crate::error::WingdeckError;
use crate::types::{Application, AppPayload, AuthResponse, PackageSuggestion};

/// Typed façade over the setup-list REST API.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Exchanges credentials for a token. Does not persist anything.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, WingdeckError>;

    /// Creates an account and signs it in. A duplicate email surfaces as a
    /// 409 [`WingdeckError::Api`].
    async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, WingdeckError>;

    /// All of the caller's applications, in server order.
    async fn list_apps(&self) -> Result<Vec<Application>, WingdeckError>;

    /// Creates an entry and returns it with server-assigned fields.
    async fn create_app(&self, payload: &AppPayload) -> Result<Application, WingdeckError>;

    /// Replaces the entry with the given id.
    async fn update_app(&self, id: i64, payload: &AppPayload)
        -> Result<Application, WingdeckError>;

    /// Deletes the entry with the given id.
    async fn delete_app(&self, id: i64) -> Result<(), WingdeckError>;

    /// Asks the server to render the install script for the current list.
    /// Returns the script text, which may be empty.
    async fn generate_script(&self) -> Result<String, WingdeckError>;

    /// Searches the winget catalog. Returns hits in server order, untruncated.
    async fn search_packages(&self, query: &str)
        -> Result<Vec<PackageSuggestion>, WingdeckError>;
}
