//! Collection browser view
//!
//! Owns the page state and the single fetch that fills it. Mounting the view
//! starts in the loading state and spawns the fetch. The fetch is tied to a
//! cancellation token: a response arriving after the view is unmounted is
//! discarded instead of applied.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{BrowserError, BrowserResult};
use crate::model::Collection;
use crate::source::CollectionSource;

/// Page-local state.
///
/// `collections` is empty whenever `loading` is set or `error` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub collections: Vec<Collection>,
    pub loading: bool,
    pub error: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            loading: true,
            error: String::new(),
        }
    }
}

impl PageState {
    fn apply(&mut self, result: BrowserResult<Vec<Collection>>) {
        match result {
            Ok(collections) => {
                self.collections = collections;
                self.error.clear();
            }
            Err(e) => {
                self.collections.clear();
                self.error = e.banner_message();
            }
        }
        self.loading = false;
    }
}

/// A mounted collection browser
pub struct CollectionBrowser {
    state: Arc<RwLock<PageState>>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CollectionBrowser {
    /// Mount the view and start its one fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn CollectionSource>) -> Self {
        let state = Arc::new(RwLock::new(PageState::default()));
        let cancel = CancellationToken::new();

        let shared = Arc::clone(&state);
        let token = cancel.clone();
        let task = tokio::spawn(async move {
            // The fetch runs in its own task so a panic inside the source
            // still ends in `apply` below and `loading` is always cleared.
            let mut fetch = tokio::spawn(async move { source.fetch_collections().await });

            let joined = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    fetch.abort();
                    None
                }
                joined = &mut fetch => Some(joined),
            };

            let Some(joined) = joined.filter(|_| !token.is_cancelled()) else {
                debug!("view unmounted before collections arrived");
                return;
            };

            let result = joined.unwrap_or_else(|e| {
                warn!(error = %e, "collection fetch did not complete");
                Err(BrowserError::Unknown)
            });
            shared.write().apply(result);
        });

        Self {
            state,
            cancel,
            task: Some(task),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> PageState {
        self.state.read().clone()
    }

    /// Wait for the fetch to finish (or be abandoned) and return the state
    pub async fn settled(&mut self) -> PageState {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "collection fetch task failed");
            }
        }
        self.state()
    }

    /// Tear the view down; an in-flight fetch is cancelled
    pub fn unmount(&mut self) {
        self.cancel.cancel();
    }
}

impl Drop for CollectionBrowser {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{copy_identifier, MemoryClipboard};
    use crate::model::Record;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct StaticSource {
        collections: Vec<Collection>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CollectionSource for StaticSource {
        async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.collections.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CollectionSource for FailingSource {
        async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>> {
            Err(BrowserError::Status { status: 502 })
        }
    }

    struct PanickingSource;

    #[async_trait]
    impl CollectionSource for PanickingSource {
        async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>> {
            panic!("backend client blew up");
        }
    }

    /// Answers only once the gate is opened
    struct GatedSource {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl CollectionSource for GatedSource {
        async fn fetch_collections(&self) -> BrowserResult<Vec<Collection>> {
            self.gate.notified().await;
            Ok(vec![Collection {
                name: "late".into(),
                records: vec![Record::default()],
            }])
        }
    }

    fn sample() -> Vec<Collection> {
        vec![Collection {
            name: "jira_issues".into(),
            records: vec![Record {
                id: "abc123".into(),
                document: "text".into(),
                metadata: None,
                embedding: None,
            }],
        }]
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = PageState::default();
        assert!(state.loading);
        assert!(state.collections.is_empty());
        assert!(state.error.is_empty());
    }

    #[tokio::test]
    async fn test_mount_fetches_once_and_settles() {
        let source = Arc::new(StaticSource {
            collections: sample(),
            calls: AtomicUsize::new(0),
        });
        let mut browser = CollectionBrowser::mount(source.clone());

        let state = browser.settled().await;
        assert!(!state.loading);
        assert!(state.error.is_empty());
        assert_eq!(state.collections, sample());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        // settling again does not refetch
        browser.settled().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_copy_does_not_touch_state() {
        let source = Arc::new(StaticSource {
            collections: sample(),
            calls: AtomicUsize::new(0),
        });
        let mut browser = CollectionBrowser::mount(source);
        let before = browser.settled().await;

        let mut clipboard = MemoryClipboard::default();
        copy_identifier(&mut clipboard, &before.collections[0].records[0].id).unwrap();

        assert_eq!(clipboard.contents(), Some("abc123"));
        assert_eq!(browser.state(), before);
    }

    #[tokio::test]
    async fn test_failure_sets_error_and_clears_loading() {
        let mut browser = CollectionBrowser::mount(Arc::new(FailingSource));
        let state = browser.settled().await;

        assert!(!state.loading);
        assert!(state.collections.is_empty());
        assert!(state.error.contains("502"));
    }

    #[tokio::test]
    async fn test_panicking_fetch_still_clears_loading() {
        let mut browser = CollectionBrowser::mount(Arc::new(PanickingSource));
        let state = browser.settled().await;

        assert!(!state.loading);
        assert!(state.collections.is_empty());
        assert_eq!(state.error, "Unknown error");
    }

    #[tokio::test]
    async fn test_state_is_loading_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let mut browser = CollectionBrowser::mount(Arc::new(GatedSource { gate: gate.clone() }));

        assert_eq!(browser.state(), PageState::default());

        gate.notify_one();
        let state = browser.settled().await;
        assert!(!state.loading);
        assert_eq!(state.collections[0].name, "late");
    }

    #[tokio::test]
    async fn test_unmount_discards_late_response() {
        let gate = Arc::new(Notify::new());
        let mut browser = CollectionBrowser::mount(Arc::new(GatedSource { gate: gate.clone() }));

        browser.unmount();
        gate.notify_one();

        let state = browser.settled().await;
        assert_eq!(state, PageState::default());
    }
}
