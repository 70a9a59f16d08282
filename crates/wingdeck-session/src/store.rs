// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed sign-in state: the bearer token and the account it belongs to.
//!
//! Token and user are one record. They are saved together after login or
//! signup and cleared together on logout or when the server rejects the
//! token, so the client can never hold a token without knowing whose it is.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use wingdeck_core::{User, WingdeckError};

/// The signed-in state as persisted on disk.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[redacted]")
            .field("user", &self.user)
            .finish()
    }
}

/// Persistent store for the current [`Session`].
///
/// The in-memory copy is authoritative for reads; disk is written through on
/// every change. An unreadable or unparsable state file is treated as
/// signed-out rather than an error.
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Open the store, loading any existing state file.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<Session>(&bytes) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unparsable session file");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
                None
            }
        };
        if current.is_some() {
            debug!(path = %path.display(), "restored session");
        }
        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// Persist a new session, replacing any previous one.
    pub async fn save(&self, session: Session) -> Result<(), WingdeckError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| store_err("creating session directory", e))?;
        }
        let body = serde_json::to_vec_pretty(&session)
            .map_err(|e| store_err("encoding session state", e))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| store_err("writing session file", e))?;

        let mut current = self.current.write().await;
        *current = Some(session);
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Forget the session, on disk and in memory. Idempotent.
    pub async fn clear(&self) -> Result<(), WingdeckError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(store_err("removing session file", e)),
        }
        let mut current = self.current.write().await;
        if current.take().is_some() {
            debug!(path = %self.path.display(), "session cleared");
        }
        Ok(())
    }

    /// The current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// The bearer token, if signed in.
    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.token.clone())
    }

    /// The signed-in account, if any.
    pub async fn user(&self) -> Option<User> {
        self.current.read().await.as_ref().map(|s| s.user.clone())
    }

    /// True when a session is held.
    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Where the state file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn store_err(context: &str, e: impl std::error::Error + Send + Sync + 'static) -> WingdeckError {
    WingdeckError::Session {
        message: context.to_string(),
        source: Box::new(e),
    }
}
