// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side state for the wingdeck terminal views.
//!
//! Everything in this crate is UI-agnostic. The dashboard REPL and the
//! one-shot commands drive the same [`AppList`], [`AppForm`] and
//! [`SuggestionFinder`] against any [`wingdeck_core::BackendApi`]
//! implementation, which is what makes the flows testable without a server.

pub mod apps;
pub mod auth;
pub mod catalog;
pub mod form;
pub mod suggest;

pub use apps::{AppList, ListState};
pub use catalog::{CATALOG, CatalogSection, PopularPackage};
pub use form::AppForm;
pub use suggest::{MAX_SUGGESTIONS, SuggestionFinder};
