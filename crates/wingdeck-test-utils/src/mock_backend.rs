// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock backend for deterministic testing.
//!
//! `MockBackend` implements `BackendApi` against an in-memory app store,
//! enabling fast, CI-runnable tests without a server. Each operation first
//! consults a FIFO queue of scripted results; when the queue is empty it
//! falls back to serving the in-memory store the way the real server would.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wingdeck_core::{
    AppPayload, Application, AuthResponse, BackendApi, PackageSuggestion, User, WingdeckError,
};

type Scripted<T> = Mutex<VecDeque<Result<T, WingdeckError>>>;

/// A scripted search response: an optional artificial latency plus the
/// result. Latency makes stale-response tests deterministic under
/// `tokio::time::pause`.
type SearchScript = (Option<Duration>, Result<Vec<PackageSuggestion>, WingdeckError>);

/// In-memory `BackendApi` with scriptable results and a call log.
pub struct MockBackend {
    apps: Mutex<Vec<Application>>,
    next_id: AtomicI64,
    user: User,

    login_results: Scripted<AuthResponse>,
    signup_results: Scripted<AuthResponse>,
    list_results: Scripted<Vec<Application>>,
    create_results: Scripted<Application>,
    update_results: Scripted<Application>,
    delete_results: Scripted<()>,
    script_results: Scripted<String>,
    search_results: Mutex<VecDeque<SearchScript>>,

    calls: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Create a mock backend with an empty app store.
    pub fn new() -> Self {
        Self::with_apps(Vec::new())
    }

    /// Create a mock backend pre-loaded with the given apps.
    pub fn with_apps(apps: Vec<Application>) -> Self {
        let max_id = apps.iter().map(|a| a.id).max().unwrap_or(0);
        Self {
            apps: Mutex::new(apps),
            next_id: AtomicI64::new(max_id + 1),
            user: User {
                id: 1,
                email: "mock@example.com".into(),
            },
            login_results: Mutex::new(VecDeque::new()),
            signup_results: Mutex::new(VecDeque::new()),
            list_results: Mutex::new(VecDeque::new()),
            create_results: Mutex::new(VecDeque::new()),
            update_results: Mutex::new(VecDeque::new()),
            delete_results: Mutex::new(VecDeque::new()),
            script_results: Mutex::new(VecDeque::new()),
            search_results: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn push_login_result(&self, result: Result<AuthResponse, WingdeckError>) {
        self.login_results.lock().await.push_back(result);
    }

    pub async fn push_signup_result(&self, result: Result<AuthResponse, WingdeckError>) {
        self.signup_results.lock().await.push_back(result);
    }

    pub async fn push_list_result(&self, result: Result<Vec<Application>, WingdeckError>) {
        self.list_results.lock().await.push_back(result);
    }

    pub async fn push_create_result(&self, result: Result<Application, WingdeckError>) {
        self.create_results.lock().await.push_back(result);
    }

    pub async fn push_update_result(&self, result: Result<Application, WingdeckError>) {
        self.update_results.lock().await.push_back(result);
    }

    pub async fn push_delete_result(&self, result: Result<(), WingdeckError>) {
        self.delete_results.lock().await.push_back(result);
    }

    pub async fn push_script_result(&self, result: Result<String, WingdeckError>) {
        self.script_results.lock().await.push_back(result);
    }

    pub async fn push_search_result(&self, result: Result<Vec<PackageSuggestion>, WingdeckError>) {
        self.search_results.lock().await.push_back((None, result));
    }

    /// Script a search response that takes `delay` to arrive.
    pub async fn push_search_delayed(
        &self,
        delay: Duration,
        result: Result<Vec<PackageSuggestion>, WingdeckError>,
    ) {
        self.search_results
            .lock()
            .await
            .push_back((Some(delay), result));
    }

    /// Every operation invoked so far, in order, as `op` or `op:detail`.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Current contents of the in-memory app store.
    pub async fn apps_snapshot(&self) -> Vec<Application> {
        self.apps.lock().await.clone()
    }

    async fn record(&self, call: impl Into<String>) {
        self.calls.lock().await.push(call.into());
    }

    fn auth_ok(&self) -> AuthResponse {
        AuthResponse {
            token: "mock-token".into(),
            user: self.user.clone(),
        }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendApi for MockBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, WingdeckError> {
        self.record(format!("login:{email}")).await;
        match self.login_results.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(self.auth_ok()),
        }
    }

    async fn signup(&self, email: &str, _password: &str) -> Result<AuthResponse, WingdeckError> {
        self.record(format!("signup:{email}")).await;
        match self.signup_results.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(self.auth_ok()),
        }
    }

    async fn list_apps(&self) -> Result<Vec<Application>, WingdeckError> {
        self.record("list").await;
        match self.list_results.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(self.apps.lock().await.clone()),
        }
    }

    async fn create_app(&self, payload: &AppPayload) -> Result<Application, WingdeckError> {
        self.record(format!("create:{}", payload.name)).await;
        if let Some(result) = self.create_results.lock().await.pop_front() {
            return result;
        }
        let app = Application {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: self.user.id,
            name: payload.name.clone(),
            winget_id: payload.winget_id.clone(),
            download_url: payload.download_url.clone(),
            args: payload.args.clone(),
        };
        self.apps.lock().await.push(app.clone());
        Ok(app)
    }

    async fn update_app(
        &self,
        id: i64,
        payload: &AppPayload,
    ) -> Result<Application, WingdeckError> {
        self.record(format!("update:{id}")).await;
        if let Some(result) = self.update_results.lock().await.pop_front() {
            return result;
        }
        let updated = Application {
            id,
            user_id: self.user.id,
            name: payload.name.clone(),
            winget_id: payload.winget_id.clone(),
            download_url: payload.download_url.clone(),
            args: payload.args.clone(),
        };
        let mut apps = self.apps.lock().await;
        if let Some(slot) = apps.iter_mut().find(|a| a.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    async fn delete_app(&self, id: i64) -> Result<(), WingdeckError> {
        self.record(format!("delete:{id}")).await;
        if let Some(result) = self.delete_results.lock().await.pop_front() {
            return result;
        }
        self.apps.lock().await.retain(|a| a.id != id);
        Ok(())
    }

    async fn generate_script(&self) -> Result<String, WingdeckError> {
        self.record("script").await;
        match self.script_results.lock().await.pop_front() {
            Some(result) => result,
            None => {
                let apps = self.apps.lock().await;
                let lines: Vec<String> = apps
                    .iter()
                    .filter_map(|a| a.winget_id.as_ref())
                    .map(|id| format!("winget install --id {id}"))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }

    async fn search_packages(
        &self,
        query: &str,
    ) -> Result<Vec<PackageSuggestion>, WingdeckError> {
        self.record(format!("search:{query}")).await;
        let scripted = self.search_results.lock().await.pop_front();
        match scripted {
            Some((delay, result)) => {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(Vec::new()),
        }
    }
}
