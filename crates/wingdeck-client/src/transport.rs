// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport for the wingdeck backend.
//!
//! Provides [`HttpTransport`], the single funnel every backend call goes
//! through. It attaches the bearer token when one is stored, maps error
//! statuses to [`WingdeckError`], and tears down the persisted session the
//! moment the server answers 401.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wingdeck_config::ServerConfig;
use wingdeck_core::WingdeckError;
use wingdeck_session::SessionStore;

/// Error body the server sends with non-2xx responses. Decoded best-effort;
/// both fields are optional so an unexpected shape degrades gracefully.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP layer shared by all API calls.
///
/// Holds the connection pool, the resolved base URL, and a handle to the
/// session store it reads tokens from on every request.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl HttpTransport {
    /// Creates a transport for the configured server.
    pub fn new(config: &ServerConfig, session: Arc<SessionStore>) -> Result<Self, WingdeckError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WingdeckError::Http {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// GET `path` and decode the JSON body. Query pairs may be empty.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, WingdeckError> {
        let response = self.send::<()>(Method::GET, path, query, None).await?;
        decode(response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, WingdeckError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, &[], Some(body)).await?;
        decode(response).await
    }

    /// PUT `body` as JSON to `path` and decode the JSON response.
    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, WingdeckError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, &[], Some(body)).await?;
        decode(response).await
    }

    /// DELETE `path`, discarding any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), WingdeckError> {
        self.send::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Sends one request and applies the shared response policy.
    ///
    /// A stored token always rides along as `Authorization: Bearer`. A 401
    /// clears the session store before surfacing as
    /// [`WingdeckError::Unauthorized`]; other error statuses decode the
    /// server's error body when they can.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<reqwest::Response, WingdeckError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method.clone(), &url);

        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.session.token().await {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| WingdeckError::Http {
            message: format!("HTTP request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(method = %method, path, status = %status, "response received");

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let (error, message) = match serde_json::from_str::<ApiErrorBody>(&body_text) {
                Ok(body) => (body.error, body.message),
                Err(_) => (None, None),
            };
            warn!(status = %status, path, "api error");

            if status.as_u16() == 401 {
                // Whatever the token was, the server no longer honors it.
                // Forget it so the next run starts signed out.
                if let Err(e) = self.session.clear().await {
                    warn!(error = %e, "failed to clear session after 401");
                }
                return Err(WingdeckError::Unauthorized { message });
            }

            return Err(WingdeckError::Api {
                status: status.as_u16(),
                error,
                message,
            });
        }

        Ok(response)
    }
}

/// Reads the full body and parses it as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, WingdeckError> {
    let body = response.text().await.map_err(|e| WingdeckError::Http {
        message: format!("failed to read response body: {e}"),
        source: Some(Box::new(e)),
    })?;
    serde_json::from_str(&body).map_err(|e| WingdeckError::Http {
        message: format!("failed to parse API response: {e}"),
        source: Some(Box::new(e)),
    })
}
