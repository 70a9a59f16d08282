// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List-of-applications state machine.
//!
//! One fetch populates the list; create, update and delete edit the local
//! copy only after the backend has accepted the change, so a rejected write
//! can never corrupt what is on screen. Rows stay in server order; there is
//! no local sorting or filtering.

use std::sync::Arc;

use tracing::debug;

use wingdeck_core::{AppPayload, Application, BackendApi, WingdeckError};

/// What the list view should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    /// A fetch is in flight, or none has happened yet.
    Loading,
    /// The last fetch failed; carries the display message.
    Error(String),
    /// The last fetch succeeded.
    Ready(Vec<Application>),
}

/// The signed-in user's applications plus the backend handle that
/// maintains them.
pub struct AppList {
    api: Arc<dyn BackendApi>,
    state: ListState,
}

impl AppList {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        Self {
            api,
            state: ListState::Loading,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// The current rows, empty unless the list is [`ListState::Ready`].
    pub fn apps(&self) -> &[Application] {
        match &self.state {
            ListState::Ready(apps) => apps,
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.apps().is_empty()
    }

    pub fn len(&self) -> usize {
        self.apps().len()
    }

    /// Looks up a row by its server id.
    pub fn get(&self, id: i64) -> Option<&Application> {
        self.apps().iter().find(|a| a.id == id)
    }

    /// Refetches the whole list. On failure the state carries the display
    /// message and the error is also returned, so callers can still tell a
    /// dead session apart from a server fault.
    pub async fn refresh(&mut self) -> Result<(), WingdeckError> {
        self.state = ListState::Loading;
        match self.api.list_apps().await {
            Ok(apps) => {
                debug!(count = apps.len(), "app list refreshed");
                self.state = ListState::Ready(apps);
                Ok(())
            }
            Err(e) => {
                self.state = ListState::Error(e.user_message("Failed to fetch apps"));
                Err(e)
            }
        }
    }

    /// Creates an entry and appends the server's row to the list.
    pub async fn create(&mut self, payload: &AppPayload) -> Result<Application, WingdeckError> {
        let created = self.api.create_app(payload).await?;
        if let ListState::Ready(apps) = &mut self.state {
            apps.push(created.clone());
        }
        Ok(created)
    }

    /// Updates an entry in place, keeping its position. An id unknown to the
    /// local list leaves the rows untouched; the server accepted the write
    /// and there is simply nothing to replace.
    pub async fn update(
        &mut self,
        id: i64,
        payload: &AppPayload,
    ) -> Result<Application, WingdeckError> {
        let updated = self.api.update_app(id, payload).await?;
        if let ListState::Ready(apps) = &mut self.state
            && let Some(slot) = apps.iter_mut().find(|a| a.id == id)
        {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes an entry and drops it from the list.
    pub async fn delete(&mut self, id: i64) -> Result<(), WingdeckError> {
        self.api.delete_app(id).await?;
        if let ListState::Ready(apps) = &mut self.state {
            apps.retain(|a| a.id != id);
        }
        Ok(())
    }

    /// Fetches the rendered install script. Refusing to run on an empty
    /// list is the view's job, not this one's.
    pub async fn generate_script(&self) -> Result<String, WingdeckError> {
        self.api.generate_script().await
    }
}
