// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the wingdeck client.

use thiserror::Error;

/// Notice shown whenever the server rejects the stored credentials.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// The primary error type used across the wingdeck workspace.
#[derive(Debug, Error)]
pub enum WingdeckError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A form field failed local validation. The payload is the exact
    /// user-facing message.
    #[error("{0}")]
    Validation(String),

    /// The server returned 401. The stored session has already been cleared
    /// by the time this is observed. Carries the server's message so the
    /// login view can show why a sign-in attempt was rejected.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx response, with the decoded error body when the
    /// server sent one.
    #[error("api error: status {status}")]
    Api {
        status: u16,
        error: Option<String>,
        message: Option<String>,
    },

    /// Transport-level failures (connect, timeout, malformed body).
    #[error("http error: {message}")]
    Http {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session state could not be read or written.
    #[error("session store error: {message}")]
    Session {
        message: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WingdeckError {
    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True for a 409 Conflict response.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// The string a view should show for this error.
    ///
    /// Server-provided `message` fields win; validation text passes through
    /// verbatim; everything else collapses to the caller's fallback. Views
    /// that treat a dead session specially check [`Self::is_unauthorized`]
    /// before calling this.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Unauthorized {
                message: Some(msg),
            } => msg.clone(),
            Self::Api {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_http_variants_only() {
        assert_eq!(
            WingdeckError::Unauthorized { message: None }.status(),
            Some(401)
        );
        assert_eq!(
            WingdeckError::Api {
                status: 409,
                error: None,
                message: None
            }
            .status(),
            Some(409)
        );
        assert_eq!(WingdeckError::Config("x".into()).status(), None);
        assert_eq!(WingdeckError::Internal("x".into()).status(), None);
    }

    #[test]
    fn conflict_detection() {
        let conflict = WingdeckError::Api {
            status: 409,
            error: Some("conflict".into()),
            message: None,
        };
        assert!(conflict.is_conflict());

        let other = WingdeckError::Api {
            status: 500,
            error: None,
            message: None,
        };
        assert!(!other.is_conflict());
        assert!(!WingdeckError::Unauthorized { message: None }.is_conflict());
    }

    #[test]
    fn user_message_prefers_server_message() {
        let err = WingdeckError::Api {
            status: 400,
            error: Some("bad_request".into()),
            message: Some("Name is taken".into()),
        };
        assert_eq!(err.user_message("Failed to save app"), "Name is taken");
    }

    #[test]
    fn user_message_falls_back_when_body_has_no_message() {
        // The wire `error` code is diagnostic, not display text.
        let err = WingdeckError::Api {
            status: 500,
            error: Some("internal".into()),
            message: None,
        };
        assert_eq!(err.user_message("Failed to save app"), "Failed to save app");

        let transport = WingdeckError::Http {
            message: "connection refused".into(),
            source: None,
        };
        assert_eq!(
            transport.user_message("Failed to fetch apps"),
            "Failed to fetch apps"
        );
    }

    #[test]
    fn validation_text_passes_through() {
        let err = WingdeckError::Validation("App name is required".into());
        assert_eq!(err.user_message("ignored"), "App name is required");
        assert_eq!(err.to_string(), "App name is required");
    }

    #[test]
    fn unauthorized_carries_server_message_for_login_view() {
        let rejected = WingdeckError::Unauthorized {
            message: Some("Invalid email or password".into()),
        };
        assert!(rejected.is_unauthorized());
        assert_eq!(
            rejected.user_message("Login failed"),
            "Invalid email or password"
        );

        let bare = WingdeckError::Unauthorized { message: None };
        assert_eq!(bare.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn status_reflects_the_wire_code() {
        let conflict = WingdeckError::Api {
            status: 409,
            error: Some("conflict".into()),
            message: None,
        };
        assert_eq!(conflict.status(), Some(409));
        assert!(conflict.is_conflict());

        let expired = WingdeckError::Unauthorized { message: None };
        assert_eq!(expired.status(), Some(401));
        assert!(!expired.is_conflict());

        let offline = WingdeckError::Http {
            message: "connection refused".into(),
            source: None,
        };
        assert_eq!(offline.status(), None);
    }
}
