// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the wingdeck workspace.
//!
//! Provides [`MockBackend`], a scriptable in-memory `BackendApi`
//! implementation used by state-machine and flow tests.

pub mod mock_backend;

pub use mock_backend::MockBackend;
