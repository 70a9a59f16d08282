// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wingdeck script`: fetch the install script, then print, save, or copy it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arboard::Clipboard;
use colored::Colorize;

use wingdeck_core::{BackendApi, WingdeckError};
use wingdeck_session::SessionStore;
use wingdeck_state::AppList;

use crate::apps::{exit_if_unauthorized, require_session};

/// Default output name, matching what the web dashboard downloads.
pub const SCRIPT_FILENAME: &str = "setup-script.ps1";

pub async fn run_script(
    api: Arc<dyn BackendApi>,
    session: &SessionStore,
    out: Option<PathBuf>,
    copy: bool,
    print: bool,
) -> Result<(), WingdeckError> {
    require_session(session).await;

    let mut list = AppList::new(api);
    if let Err(err) = list.refresh().await {
        exit_if_unauthorized(&err);
        eprintln!("{}", err.user_message("Failed to fetch apps").red());
        std::process::exit(1);
    }
    if list.is_empty() {
        eprintln!(
            "No applications to include. Add one with {} first.",
            "wingdeck add".yellow()
        );
        std::process::exit(1);
    }

    let script = match list.generate_script().await {
        Ok(script) => script,
        Err(err) => {
            exit_if_unauthorized(&err);
            eprintln!("{}", err.user_message("Failed to generate script").red());
            std::process::exit(1);
        }
    };

    let mut delivered = false;
    if let Some(out) = &out {
        let path = save_script(&script, out).await?;
        println!("Saved to {}.", path.display());
        delivered = true;
    }
    if copy {
        match copy_to_clipboard(&script) {
            Ok(()) => {
                println!("Script copied to clipboard!");
                delivered = true;
            }
            Err(e) => eprintln!("{}", e.to_string().yellow()),
        }
    }
    if print || !delivered {
        println!("{script}");
    }
    Ok(())
}

/// Writes the script, defaulting the filename when given a directory.
pub async fn save_script(script: &str, out: &Path) -> Result<PathBuf, WingdeckError> {
    let path = if out.is_dir() {
        out.join(SCRIPT_FILENAME)
    } else {
        out.to_path_buf()
    };
    tokio::fs::write(&path, script).await.map_err(|e| {
        WingdeckError::Internal(format!("failed to write {}: {e}", path.display()))
    })?;
    Ok(path)
}

/// Puts the script on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), WingdeckError> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| WingdeckError::Internal(format!("clipboard unavailable: {e}")))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| WingdeckError::Internal(format!("clipboard write failed: {e}")))?;
    Ok(())
}
