// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential validation and error phrasing shared by the sign-in and
//! sign-up flows.

use wingdeck_core::WingdeckError;

/// Both login fields must be present. No email-format checking beyond that;
/// the server is the authority on what an account looks like.
pub fn validate_login(email: &str, password: &str) -> Result<(), WingdeckError> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(WingdeckError::Validation(
            "Please fill in all fields".into(),
        ));
    }
    Ok(())
}

/// Sign-up checks, applied in order: completeness, confirmation match,
/// password length. The first failure wins.
pub fn validate_signup(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), WingdeckError> {
    if email.trim().is_empty() || password.trim().is_empty() || confirm.trim().is_empty() {
        return Err(WingdeckError::Validation(
            "Please fill in all fields".into(),
        ));
    }
    if password != confirm {
        return Err(WingdeckError::Validation("Passwords do not match".into()));
    }
    if password.chars().count() < 8 {
        return Err(WingdeckError::Validation(
            "Password must be at least 8 characters long".into(),
        ));
    }
    Ok(())
}

/// Message shown when a login attempt fails.
pub fn login_error_message(err: &WingdeckError) -> String {
    err.user_message("Login failed")
}

/// Message shown when a sign-up attempt fails. A duplicate email gets a
/// fixed message regardless of what the server said.
pub fn signup_error_message(err: &WingdeckError) -> String {
    if err.is_conflict() {
        return "An account with this email already exists. Please log in instead.".into();
    }
    err.user_message("Signup failed")
}
