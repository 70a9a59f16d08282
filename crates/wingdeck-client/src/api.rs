// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed façade over the setup-list REST API.
//!
//! [`ApiClient`] implements [`BackendApi`] with exactly one HTTP round trip
//! per operation. It performs no validation and no persistence; those live
//! in the form layer and the login flow respectively.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use wingdeck_config::ServerConfig;
use wingdeck_core::{
    AppPayload, Application, AuthResponse, BackendApi, PackageSuggestion, WingdeckError,
};
use wingdeck_session::SessionStore;

use crate::transport::HttpTransport;

/// Login/signup request body.
#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Envelope around the generated script. Other fields of the server's
/// success wrapper are ignored.
#[derive(Deserialize)]
struct ScriptEnvelope {
    data: Option<ScriptBody>,
}

#[derive(Deserialize)]
struct ScriptBody {
    script: String,
}

/// The production [`BackendApi`] implementation.
#[derive(Clone)]
pub struct ApiClient {
    transport: HttpTransport,
}

impl ApiClient {
    /// Builds a client for the configured server, reading tokens from (and
    /// clearing them into) the given session store.
    pub fn new(config: &ServerConfig, session: Arc<SessionStore>) -> Result<Self, WingdeckError> {
        Ok(Self {
            transport: HttpTransport::new(config, session)?,
        })
    }
}

#[async_trait]
impl BackendApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, WingdeckError> {
        self.transport
            .post_json("/auth/login", &Credentials { email, password })
            .await
    }

    async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, WingdeckError> {
        self.transport
            .post_json("/auth/signup", &Credentials { email, password })
            .await
    }

    async fn list_apps(&self) -> Result<Vec<Application>, WingdeckError> {
        self.transport.get_json("/apps", &[]).await
    }

    async fn create_app(&self, payload: &AppPayload) -> Result<Application, WingdeckError> {
        self.transport.post_json("/apps", payload).await
    }

    async fn update_app(
        &self,
        id: i64,
        payload: &AppPayload,
    ) -> Result<Application, WingdeckError> {
        self.transport.put_json(&format!("/apps/{id}"), payload).await
    }

    async fn delete_app(&self, id: i64) -> Result<(), WingdeckError> {
        self.transport.delete(&format!("/apps/{id}")).await
    }

    async fn generate_script(&self) -> Result<String, WingdeckError> {
        let envelope: ScriptEnvelope = self.transport.get_json("/apps/script", &[]).await?;
        Ok(envelope.data.map(|d| d.script).unwrap_or_default())
    }

    async fn search_packages(
        &self,
        query: &str,
    ) -> Result<Vec<PackageSuggestion>, WingdeckError> {
        self.transport
            .get_json("/winget/search", &[("q", query)])
            .await
    }
}
