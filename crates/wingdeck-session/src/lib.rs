// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted sign-in state for the wingdeck client.
//!
//! Replaces the browser notion of "token in local storage" with a JSON state
//! file under the user's data directory. The HTTP layer reads the token from
//! here on every request and clears the store when the server answers 401.

pub mod store;

pub use store::{Session, SessionStore};
