// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the wingdeck workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The signed-in account, as the server reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Successful login/signup response: a bearer token plus the account it
/// belongs to.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}

/// One entry in the user's setup list.
///
/// At least one of `winget_id` and `download_url` is present on entries the
/// server accepted; the client enforces that before submitting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub winget_id: Option<String>,
    pub download_url: Option<String>,
    pub args: Option<String>,
}

/// Body for create and update calls. Optional fields are omitted from the
/// JSON entirely rather than sent as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winget_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}

/// One hit from the winget catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSuggestion {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_debug_redacts_token() {
        let auth = AuthResponse {
            token: "secret-bearer-token".into(),
            user: User {
                id: 1,
                email: "a@b.c".into(),
            },
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("secret-bearer-token"));
        assert!(rendered.contains("[redacted]"));
        assert!(rendered.contains("a@b.c"));
    }

    #[test]
    fn application_deserializes_with_missing_optionals() {
        let json = r#"{"id": 3, "user_id": 1, "name": "Git"}"#;
        let app: Application = serde_json::from_str(json).unwrap();
        assert_eq!(app.name, "Git");
        assert_eq!(app.winget_id, None);
        assert_eq!(app.download_url, None);
        assert_eq!(app.args, None);
    }

    #[test]
    fn payload_omits_absent_fields() {
        let payload = AppPayload {
            name: "Git".into(),
            winget_id: Some("Git.Git".into()),
            download_url: None,
            args: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("winget_id"));
        assert!(!json.contains("download_url"));
        assert!(!json.contains("args"));
    }

    #[test]
    fn suggestion_accepts_null_publisher() {
        let json = r#"[{"id": "Git.Git", "name": "Git", "publisher": null},
                       {"id": "7zip.7zip", "name": "7-Zip", "publisher": "Igor Pavlov"}]"#;
        let hits: Vec<PackageSuggestion> = serde_json::from_str(json).unwrap();
        assert_eq!(hits[0].publisher, None);
        assert_eq!(hits[1].publisher.as_deref(), Some("Igor Pavlov"));
    }
}
