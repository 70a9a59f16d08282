// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the wingdeck client.
//!
//! This crate provides the domain types, the error taxonomy, and the
//! [`BackendApi`] trait that the HTTP client implements and the state
//! machines consume.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{SESSION_EXPIRED, WingdeckError};
pub use traits::BackendApi;
pub use types::{AppPayload, Application, AuthResponse, PackageSuggestion, User};

/// Shorthand used across the workspace.
pub type Result<T> = std::result::Result<T, WingdeckError>;
