// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wingdeck status` command implementation.
//!
//! Shows which server the client points at, where the session lives, and
//! whether the stored session still works. With `--json` the same
//! information is emitted as one machine-readable object.

use std::io::IsTerminal;

use colored::Colorize;
use serde::Serialize;

use wingdeck_config::WingdeckConfig;
use wingdeck_core::{BackendApi, WingdeckError};
use wingdeck_session::SessionStore;

/// Structured status output for `--json` mode.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub server_url: String,
    pub session_path: String,
    pub signed_in: bool,
    pub email: Option<String>,
    pub reachable: Option<bool>,
    pub app_count: Option<usize>,
}

/// Builds the status snapshot.
///
/// The backend is probed only while a session is stored; signed out there
/// is nothing meaningful to ask it. An HTTP-level probe failure marks the
/// backend unreachable, any other failure still proves it answered.
pub async fn gather_status(
    config: &WingdeckConfig,
    api: &dyn BackendApi,
    session: &SessionStore,
) -> StatusResponse {
    let user = session.user().await;

    let probe = match &user {
        Some(_) => Some(api.list_apps().await),
        None => None,
    };
    let (reachable, app_count) = match &probe {
        None => (None, None),
        Some(Ok(apps)) => (Some(true), Some(apps.len())),
        Some(Err(WingdeckError::Http { .. })) => (Some(false), None),
        Some(Err(_)) => (Some(true), None),
    };

    StatusResponse {
        server_url: config.server.base_url.clone(),
        session_path: config.session.state_path.clone(),
        signed_in: user.is_some(),
        email: user.map(|u| u.email),
        reachable,
        app_count,
    }
}

/// Run the `wingdeck status` command. Exits nonzero when the probe cannot
/// reach the server at all.
pub async fn run_status(
    config: &WingdeckConfig,
    api: &dyn BackendApi,
    session: &SessionStore,
    json: bool,
) -> Result<(), WingdeckError> {
    let response = gather_status(config, api, session).await;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        print_status(&response, std::io::stdout().is_terminal());
    }

    if response.reachable == Some(false) {
        std::process::exit(1);
    }
    Ok(())
}

fn print_status(status: &StatusResponse, use_color: bool) {
    println!();
    println!("  wingdeck status");
    println!("  {}", "-".repeat(35));
    println!("    Server:   {}", status.server_url);
    println!("    Session:  {}", status.session_path);

    match &status.email {
        Some(email) => {
            if use_color {
                println!("    Account:  {} {}", "✓".green(), email.green());
            } else {
                println!("    Account:  [OK] {email}");
            }
        }
        None => println!("    Account:  signed out"),
    }

    match status.reachable {
        Some(true) => {
            if let Some(count) = status.app_count {
                println!("    Apps:     {count}");
            }
        }
        Some(false) => {
            if use_color {
                println!("    Backend:  {} {}", "✗".red(), "unreachable".red());
            } else {
                println!("    Backend:  [FAIL] unreachable");
            }
        }
        None => {}
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    use wingdeck_core::{Application, User};
    use wingdeck_session::Session;
    use wingdeck_test_utils::MockBackend;

    fn app(id: i64, name: &str) -> Application {
        Application {
            id,
            user_id: 1,
            name: name.into(),
            winget_id: Some(format!("{name}.{name}")),
            download_url: None,
            args: None,
        }
    }

    async fn signed_in_store(dir: &tempfile::TempDir) -> SessionStore {
        let store = SessionStore::open(dir.path().join("session.json")).await;
        store
            .save(Session {
                token: "tok".into(),
                user: User {
                    id: 1,
                    email: "dev@example.com".into(),
                },
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn signed_out_status_skips_the_probe() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).await;
        let backend = MockBackend::new();

        let status = gather_status(&WingdeckConfig::default(), &backend, &store).await;

        assert!(!status.signed_in);
        assert_eq!(status.email, None);
        assert_eq!(status.reachable, None);
        assert_eq!(status.app_count, None);
        assert!(backend.calls().await.is_empty());
    }

    #[tokio::test]
    async fn signed_in_status_counts_apps() {
        let dir = tempfile::tempdir().unwrap();
        let store = signed_in_store(&dir).await;
        let backend = MockBackend::with_apps(vec![app(1, "Git"), app(2, "Node")]);

        let status = gather_status(&WingdeckConfig::default(), &backend, &store).await;

        assert!(status.signed_in);
        assert_eq!(status.email.as_deref(), Some("dev@example.com"));
        assert_eq!(status.reachable, Some(true));
        assert_eq!(status.app_count, Some(2));
        assert_eq!(backend.calls().await, vec!["list"]);
    }

    #[tokio::test]
    async fn transport_failure_marks_backend_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let store = signed_in_store(&dir).await;
        let backend = MockBackend::new();
        backend
            .push_list_result(Err(WingdeckError::Http {
                message: "connection refused".into(),
                source: None,
            }))
            .await;

        let status = gather_status(&WingdeckConfig::default(), &backend, &store).await;

        assert_eq!(status.reachable, Some(false));
        assert_eq!(status.app_count, None);
    }

    #[tokio::test]
    async fn api_error_still_proves_the_backend_answered() {
        let dir = tempfile::tempdir().unwrap();
        let store = signed_in_store(&dir).await;
        let backend = MockBackend::new();
        backend
            .push_list_result(Err(WingdeckError::Api {
                status: 500,
                error: None,
                message: None,
            }))
            .await;

        let status = gather_status(&WingdeckConfig::default(), &backend, &store).await;

        assert_eq!(status.reachable, Some(true));
        assert_eq!(status.app_count, None);
    }

    #[test]
    fn signed_in_status_serializes() {
        let resp = StatusResponse {
            server_url: "http://127.0.0.1:8080/api".to_string(),
            session_path: "/tmp/session.json".to_string(),
            signed_in: true,
            email: Some("dev@example.com".to_string()),
            reachable: Some(true),
            app_count: Some(3),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"signed_in\":true"));
        assert!(json.contains("\"app_count\":3"));
    }

    #[test]
    fn signed_out_status_serializes() {
        let resp = StatusResponse {
            server_url: "http://127.0.0.1:8080/api".to_string(),
            session_path: "/tmp/session.json".to_string(),
            signed_in: false,
            email: None,
            reachable: None,
            app_count: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"signed_in\":false"));
        assert!(json.contains("\"email\":null"));
    }
}
