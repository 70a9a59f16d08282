// SPDX-FileCopyrightText: 2026 Wingdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Winget package autocomplete with stale-response protection.
//!
//! The form re-runs the lookup whenever its name buffer changes, so two
//! lookups can be in flight at once and the slower one may carry older
//! input. Each lookup captures the generation counter at spawn time and may
//! only store its hits while that generation is still current; everything
//! else is discarded unseen.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

use wingdeck_core::{BackendApi, PackageSuggestion};

/// Upper bound on stored hits, matching what the form can display.
pub const MAX_SUGGESTIONS: usize = 5;

/// Shared autocomplete state for one form session.
#[derive(Clone)]
pub struct SuggestionFinder {
    api: Arc<dyn BackendApi>,
    generation: Arc<AtomicU64>,
    results: Arc<Mutex<Vec<PackageSuggestion>>>,
}

impl SuggestionFinder {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        Self {
            api,
            generation: Arc::new(AtomicU64::new(0)),
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Reacts to an edit of the form's name or winget-id buffer.
    ///
    /// Suggestions exist to fill the winget-id field from the name, so a
    /// lookup runs only while the name is nonempty and the id field is still
    /// empty. In every other case pending hits are cleared and no request
    /// goes out. Returns the lookup task when one was spawned.
    pub async fn refresh(&self, name: &str, winget_id: &str) -> Option<JoinHandle<()>> {
        // Bumping first retires any in-flight lookup, spawn or not.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = name.trim();
        if query.is_empty() || !winget_id.trim().is_empty() {
            self.results.lock().await.clear();
            return None;
        }

        let api = Arc::clone(&self.api);
        let current = Arc::clone(&self.generation);
        let results = Arc::clone(&self.results);
        let query = query.to_string();

        Some(tokio::spawn(async move {
            // A failed lookup renders the same as no matches.
            let mut hits = api.search_packages(&query).await.unwrap_or_default();
            hits.truncate(MAX_SUGGESTIONS);

            let mut slot = results.lock().await;
            // Re-checked under the lock: a stale task that stored after a
            // newer one would resurrect outdated hits.
            if current.load(Ordering::SeqCst) != generation {
                debug!(query = %query, "dropping stale suggestion response");
                return;
            }
            *slot = hits;
        }))
    }

    /// Drops pending hits and retires anything still in flight. Called when
    /// a suggestion is accepted or the form closes.
    pub async fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.results.lock().await.clear();
    }

    /// Snapshot of the current hits, at most [`MAX_SUGGESTIONS`] of them.
    pub async fn current(&self) -> Vec<PackageSuggestion> {
        self.results.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use wingdeck_core::WingdeckError;
    use wingdeck_test_utils::MockBackend;

    fn hit(id: &str, name: &str) -> PackageSuggestion {
        PackageSuggestion {
            id: id.into(),
            name: name.into(),
            publisher: None,
        }
    }

    #[tokio::test]
    async fn lookup_stores_hits_for_the_typed_name() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_result(Ok(vec![hit("Git.Git", "Git")]))
            .await;
        let finder = SuggestionFinder::new(Arc::clone(&backend) as Arc<dyn BackendApi>);

        let handle = finder.refresh("git", "").await.unwrap();
        handle.await.unwrap();

        assert_eq!(finder.current().await, vec![hit("Git.Git", "Git")]);
        assert_eq!(backend.calls().await, vec!["search:git"]);
    }

    #[tokio::test]
    async fn hits_are_capped_at_five() {
        let backend = Arc::new(MockBackend::new());
        let many: Vec<PackageSuggestion> = (0..8)
            .map(|i| hit(&format!("Vendor.Tool{i}"), &format!("Tool {i}")))
            .collect();
        backend.push_search_result(Ok(many)).await;
        let finder = SuggestionFinder::new(backend);

        finder.refresh("tool", "").await.unwrap().await.unwrap();

        assert_eq!(finder.current().await.len(), MAX_SUGGESTIONS);
    }

    #[tokio::test]
    async fn empty_name_clears_without_searching() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_result(Ok(vec![hit("Git.Git", "Git")]))
            .await;
        let finder = SuggestionFinder::new(Arc::clone(&backend) as Arc<dyn BackendApi>);
        finder.refresh("git", "").await.unwrap().await.unwrap();

        assert!(finder.refresh("   ", "").await.is_none());

        assert!(finder.current().await.is_empty());
        assert_eq!(backend.calls().await, vec!["search:git"]);
    }

    #[tokio::test]
    async fn filled_winget_id_suppresses_the_lookup() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_result(Ok(vec![hit("Git.Git", "Git")]))
            .await;
        let finder = SuggestionFinder::new(Arc::clone(&backend) as Arc<dyn BackendApi>);
        finder.refresh("git", "").await.unwrap().await.unwrap();

        // The id field the suggestions were for is filled in now.
        assert!(finder.refresh("git", "Git.Git").await.is_none());

        assert!(finder.current().await.is_empty());
        assert_eq!(backend.calls().await, vec!["search:git"]);
    }

    #[tokio::test]
    async fn failed_lookup_reads_as_no_matches() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_result(Ok(vec![hit("Git.Git", "Git")]))
            .await;
        backend
            .push_search_result(Err(WingdeckError::Api {
                status: 500,
                error: None,
                message: None,
            }))
            .await;
        let finder = SuggestionFinder::new(backend);
        finder.refresh("git", "").await.unwrap().await.unwrap();
        assert_eq!(finder.current().await.len(), 1);

        finder.refresh("gith", "").await.unwrap().await.unwrap();

        assert!(finder.current().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn slow_response_for_old_input_is_discarded() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_delayed(
                Duration::from_millis(50),
                Ok(vec![hit("Old.Hit", "Old hit")]),
            )
            .await;
        let finder = SuggestionFinder::new(Arc::clone(&backend) as Arc<dyn BackendApi>);

        let slow = finder.refresh("first", "").await.unwrap();
        // Let the slow lookup claim its scripted response before the next
        // keystroke arrives.
        tokio::time::sleep(Duration::from_millis(1)).await;

        backend
            .push_search_result(Ok(vec![hit("New.Hit", "New hit")]))
            .await;
        let fast = finder.refresh("second", "").await.unwrap();
        fast.await.unwrap();
        slow.await.unwrap();

        assert_eq!(finder.current().await, vec![hit("New.Hit", "New hit")]);
        assert_eq!(
            backend.calls().await,
            vec!["search:first", "search:second"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_retires_an_in_flight_lookup() {
        let backend = Arc::new(MockBackend::new());
        backend
            .push_search_delayed(
                Duration::from_millis(20),
                Ok(vec![hit("Git.Git", "Git")]),
            )
            .await;
        let finder = SuggestionFinder::new(backend);

        let handle = finder.refresh("git", "").await.unwrap();
        tokio::time::sleep(Duration::from_millis(1)).await;

        finder.invalidate().await;
        handle.await.unwrap();

        assert!(finder.current().await.is_empty());
    }
}
