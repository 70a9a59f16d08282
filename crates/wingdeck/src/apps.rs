// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-shot application commands: `list`, `add`, and `rm`.

use std::io;
use std::sync::Arc;

use colored::Colorize;

use wingdeck_core::{BackendApi, SESSION_EXPIRED, WingdeckError};
use wingdeck_session::SessionStore;
use wingdeck_state::{AppForm, AppList, ListState};

use crate::render;

/// Bails out with a sign-in hint when no session is stored.
pub async fn require_session(session: &SessionStore) {
    if !session.is_signed_in().await {
        eprintln!("Not signed in. Run {} first.", "wingdeck login".yellow());
        std::process::exit(1);
    }
}

/// Prints the session-expired notice and exits when the error is a 401.
pub fn exit_if_unauthorized(err: &WingdeckError) {
    if err.is_unauthorized() {
        eprintln!("{}", SESSION_EXPIRED.yellow());
        std::process::exit(1);
    }
}

pub async fn run_list(
    api: Arc<dyn BackendApi>,
    session: &SessionStore,
) -> Result<(), WingdeckError> {
    require_session(session).await;

    let mut list = AppList::new(api);
    if let Err(err) = list.refresh().await {
        exit_if_unauthorized(&err);
    }
    match list.state() {
        ListState::Error(message) => {
            eprintln!("{}", message.red());
            std::process::exit(1);
        }
        _ => render::render_apps(list.apps()),
    }
    Ok(())
}

pub async fn run_add(
    api: &dyn BackendApi,
    session: &SessionStore,
    name: String,
    winget_id: Option<String>,
    download_url: Option<String>,
    args: Option<String>,
) -> Result<(), WingdeckError> {
    require_session(session).await;

    let form = AppForm {
        name,
        winget_id: winget_id.unwrap_or_default(),
        download_url: download_url.unwrap_or_default(),
        args: args.unwrap_or_default(),
    };
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("{}", e.user_message("Failed to save app").red());
            std::process::exit(1);
        }
    };

    match api.create_app(&payload).await {
        Ok(created) => {
            render::render_app(&created);
            Ok(())
        }
        Err(err) => {
            exit_if_unauthorized(&err);
            eprintln!("{}", err.user_message("Failed to save app").red());
            std::process::exit(1);
        }
    }
}

pub async fn run_rm(
    api: &dyn BackendApi,
    session: &SessionStore,
    id: i64,
    yes: bool,
) -> Result<(), WingdeckError> {
    require_session(session).await;

    if !yes && !confirm_delete()? {
        println!("Aborted.");
        return Ok(());
    }

    match api.delete_app(id).await {
        Ok(()) => {
            println!("Removed application {id}.");
            Ok(())
        }
        Err(err) => {
            exit_if_unauthorized(&err);
            eprintln!("{}", err.user_message("Failed to delete app").red());
            std::process::exit(1);
        }
    }
}

/// y/N prompt matching the dashboard's wording. Defaults to No.
fn confirm_delete() -> Result<bool, WingdeckError> {
    eprint!("Are you sure you want to delete this app? [y/N] ");
    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| WingdeckError::Internal(format!("failed to read input: {e}")))?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
