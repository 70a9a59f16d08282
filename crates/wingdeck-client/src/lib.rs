// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the wingdeck backend.
//!
//! Two layers: [`transport::HttpTransport`] owns request mechanics and the
//! shared response policy (bearer auth, 401 session teardown, error-body
//! decoding); [`api::ApiClient`] is the typed façade implementing
//! [`wingdeck_core::BackendApi`], one endpoint per method.

pub mod api;
pub mod transport;

pub use api::ApiClient;
pub use transport::HttpTransport;
