// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `wingdeck login`, `signup`, and `logout` command implementations.

use std::io::{self, IsTerminal};

use colored::Colorize;
use tracing::debug;

use wingdeck_core::{BackendApi, WingdeckError};
use wingdeck_session::{Session, SessionStore};
use wingdeck_state::auth;

pub async fn run_login(
    api: &dyn BackendApi,
    session: &SessionStore,
    email: Option<String>,
) -> Result<(), WingdeckError> {
    let email = match email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = prompt_password("Password: ")?;

    if let Err(e) = auth::validate_login(&email, &password) {
        eprintln!("{}", auth::login_error_message(&e).red());
        std::process::exit(1);
    }

    match api.login(email.trim(), &password).await {
        Ok(auth_response) => {
            let greeting = auth_response.user.email.clone();
            session
                .save(Session {
                    token: auth_response.token,
                    user: auth_response.user,
                })
                .await?;
            debug!(email = %greeting, "session stored");
            println!("Signed in as {}.", greeting.green());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", auth::login_error_message(&err).red());
            std::process::exit(1);
        }
    }
}

pub async fn run_signup(
    api: &dyn BackendApi,
    session: &SessionStore,
    email: Option<String>,
) -> Result<(), WingdeckError> {
    let email = match email {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = prompt_password("Password: ")?;
    let confirm = prompt_password("Confirm password: ")?;

    if let Err(e) = auth::validate_signup(&email, &password, &confirm) {
        eprintln!("{}", e.user_message("Signup failed").red());
        std::process::exit(1);
    }

    match api.signup(email.trim(), &password).await {
        Ok(auth_response) => {
            let greeting = auth_response.user.email.clone();
            session
                .save(Session {
                    token: auth_response.token,
                    user: auth_response.user,
                })
                .await?;
            debug!(email = %greeting, "session stored");
            println!("Account created. Signed in as {}.", greeting.green());
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", auth::signup_error_message(&err).red());
            std::process::exit(1);
        }
    }
}

pub async fn run_logout(session: &SessionStore) -> Result<(), WingdeckError> {
    session.clear().await?;
    println!("Signed out.");
    Ok(())
}

fn prompt_line(prompt: &str) -> Result<String, WingdeckError> {
    eprint!("{prompt}");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| WingdeckError::Internal(format!("failed to read input: {e}")))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_password(prompt: &str) -> Result<String, WingdeckError> {
    // Piped input still works, just without echo suppression.
    if !io::stdin().is_terminal() {
        return prompt_line(prompt);
    }
    eprint!("{prompt}");
    rpassword::read_password()
        .map_err(|e| WingdeckError::Internal(format!("failed to read password: {e}")))
}
