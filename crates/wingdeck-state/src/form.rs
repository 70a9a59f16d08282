// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Add/edit form buffer and its submission rules.

use url::Url;

use wingdeck_core::{AppPayload, Application, WingdeckError};

/// Raw edit buffers for one application entry. Values are kept exactly as
/// typed; trimming happens at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppForm {
    pub name: String,
    pub winget_id: String,
    pub download_url: String,
    pub args: String,
}

impl AppForm {
    /// Pre-populates the buffers from an existing entry for editing.
    pub fn from_application(app: &Application) -> Self {
        Self {
            name: app.name.clone(),
            winget_id: app.winget_id.clone().unwrap_or_default(),
            download_url: app.download_url.clone().unwrap_or_default(),
            args: app.args.clone().unwrap_or_default(),
        }
    }

    /// Checks the buffers and builds the submission payload. The first rule
    /// that fails wins; its message is shown to the user verbatim.
    ///
    /// An entry needs a name and at least one way to install it. When both a
    /// winget id and a download URL are present that is fine too; the server
    /// keeps both. Install arguments are passed through unchecked.
    pub fn validate(&self) -> Result<AppPayload, WingdeckError> {
        let name = self.name.trim();
        let winget_id = self.winget_id.trim();
        let download_url = self.download_url.trim();
        let args = self.args.trim();

        if name.is_empty() {
            return Err(WingdeckError::Validation("App name is required".into()));
        }
        if winget_id.is_empty() && download_url.is_empty() {
            return Err(WingdeckError::Validation(
                "Either Winget ID or Download URL is required".into(),
            ));
        }
        if !download_url.is_empty() && !is_https_url(download_url) {
            return Err(WingdeckError::Validation(
                "Download URL must be a valid HTTPS URL".into(),
            ));
        }

        Ok(AppPayload {
            name: name.to_string(),
            winget_id: none_if_empty(winget_id),
            download_url: none_if_empty(download_url),
            args: none_if_empty(args),
        })
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn is_https_url(value: &str) -> bool {
    matches!(Url::parse(value), Ok(url) if url.scheme() == "https")
}
