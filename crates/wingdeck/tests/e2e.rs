// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the assembled client stack.
//!
//! Each test wires a real [`ApiClient`] and a temp-file [`SessionStore`]
//! against a wiremock server, then drives the same state types the binary
//! uses. Tests are independent and order-insensitive.

use std::sync::Arc;

use wingdeck_client::ApiClient;
use wingdeck_config::ServerConfig;
use wingdeck_core::{AppPayload, BackendApi, User};
use wingdeck_session::{Session, SessionStore};
use wingdeck_state::{AppList, ListState, MAX_SUGGESTIONS, SuggestionFinder, auth};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_config(server: &MockServer) -> ServerConfig {
    ServerConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    }
}

async fn open_store(dir: &tempfile::TempDir) -> Arc<SessionStore> {
    Arc::new(SessionStore::open(dir.path().join("session.json")).await)
}

async fn signed_in_client(
    server: &MockServer,
    dir: &tempfile::TempDir,
) -> (Arc<dyn BackendApi>, Arc<SessionStore>) {
    let store = open_store(dir).await;
    store
        .save(Session {
            token: "tok-e2e".into(),
            user: User {
                id: 7,
                email: "e2e@example.com".into(),
            },
        })
        .await
        .unwrap();
    let client = ApiClient::new(&server_config(server), Arc::clone(&store)).unwrap();
    (Arc::new(client), store)
}

fn app_json(id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "user_id": 7,
        "name": name,
        "winget_id": "Git.Git",
        "download_url": null,
        "args": null
    })
}

// ---- Test 1: Login persists a session the next run can reuse ----

#[tokio::test]
async fn test_login_round_trip_persists_and_authorizes() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;
    assert!(!store.is_signed_in().await);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "e2e@example.com",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-e2e",
            "user": {"id": 7, "email": "e2e@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .and(header("authorization", "Bearer tok-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server_config(&server), Arc::clone(&store)).unwrap();
    let auth = client.login("e2e@example.com", "hunter22").await.unwrap();
    store
        .save(Session {
            token: auth.token,
            user: auth.user,
        })
        .await
        .unwrap();

    // The very next call carries the fresh token.
    let apps = client.list_apps().await.unwrap();
    assert!(apps.is_empty());

    // A second store on the same path sees the persisted session.
    let reopened = open_store(&dir).await;
    assert_eq!(
        reopened.user().await.map(|u| u.email),
        Some("e2e@example.com".to_string())
    );
}

// ---- Test 2: App CRUD through the list state ----

#[tokio::test]
async fn test_crud_flow_preserves_order_and_positions() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let (api, _store) = signed_in_client(&server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            app_json(1, "7-Zip"),
            app_json(2, "Git"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(201).set_body_json(app_json(3, "Node.js")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/apps/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(app_json(1, "7-Zip Beta")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/apps/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut list = AppList::new(api);
    list.refresh().await.unwrap();
    assert_eq!(list.len(), 2);

    // Creation appends.
    let payload = AppPayload {
        name: "Node.js".into(),
        winget_id: Some("OpenJS.NodeJS".into()),
        download_url: None,
        args: None,
    };
    list.create(&payload).await.unwrap();
    assert_eq!(list.apps()[2].name, "Node.js");

    // An update keeps the row where it was.
    list.update(1, &payload).await.unwrap();
    assert_eq!(list.apps()[0].name, "7-Zip Beta");

    list.delete(2).await.unwrap();
    let ids: Vec<i64> = list.apps().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

// ---- Test 3: Expired token tears the stored session down ----

#[tokio::test]
async fn test_expired_token_clears_stored_session() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let (api, store) = signed_in_client(&server, &dir).await;
    assert!(dir.path().join("session.json").exists());

    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "unauthorized",
            "message": "Token expired"
        })))
        .mount(&server)
        .await;

    let mut list = AppList::new(api);
    let err = list.refresh().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(matches!(list.state(), ListState::Error(_)));
    assert!(!store.is_signed_in().await);
    assert!(!dir.path().join("session.json").exists());
}

// ---- Test 4: Script generation ----

#[tokio::test]
async fn test_script_envelope_unwraps_to_script_text() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let (api, _store) = signed_in_client(&server, &dir).await;

    Mock::given(method("GET"))
        .and(path("/apps"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([app_json(1, "Git")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/apps/script"))
        .and(header("authorization", "Bearer tok-e2e"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Script generated",
            "data": {"script": "winget install --id Git.Git\nwinget install --id 7zip.7zip"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut list = AppList::new(api);
    list.refresh().await.unwrap();
    assert!(!list.is_empty());

    let script = list.generate_script().await.unwrap();
    assert_eq!(script.lines().count(), 2);
    assert!(script.starts_with("winget install --id Git.Git"));
}

// ---- Test 5: Signup conflict points at login ----

#[tokio::test]
async fn test_signup_conflict_suggests_logging_in() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir).await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": "conflict",
            "message": "email already registered"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server_config(&server), store).unwrap();
    let err = client
        .signup("taken@example.com", "password1")
        .await
        .unwrap_err();

    assert_eq!(
        auth::signup_error_message(&err),
        "An account with this email already exists. Please log in instead."
    );
}

// ---- Test 6: Suggestion lookup over the wire ----

#[tokio::test]
async fn test_suggestion_finder_caps_wire_results() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let (api, _store) = signed_in_client(&server, &dir).await;

    let many: Vec<serde_json::Value> = (0..8)
        .map(|i| {
            serde_json::json!({
                "id": format!("Vendor.Tool{i}"),
                "name": format!("Tool {i}"),
                "publisher": "Vendor"
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/winget/search"))
        .and(query_param("q", "tool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(many))
        .expect(1)
        .mount(&server)
        .await;

    let finder = SuggestionFinder::new(api);
    let handle = finder.refresh("tool", "").await.unwrap();
    handle.await.unwrap();

    let hits = finder.current().await;
    assert_eq!(hits.len(), MAX_SUGGESTIONS);
    assert_eq!(hits[0].id, "Vendor.Tool0");
    assert_eq!(hits[0].publisher.as_deref(), Some("Vendor"));
}
