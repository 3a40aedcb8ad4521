//! Page state shared by every view-model

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Result;

/// Result of a page fetch cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum Loadable<T> {
    /// No fetch has settled yet
    Pending,
    Ready(T),
    /// Fetch failed; carries the error message
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Identifies one fetch cycle; only the newest token may settle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// View state with a generation counter and a mounted flag.
///
/// A fetch takes a token with [`ViewCell::begin`] before issuing its
/// requests and hands the outcome to [`ViewCell::settle`]. Outcomes whose
/// token has been superseded, or that arrive after [`ViewCell::unmount`],
/// are dropped, so the latest-issued fetch wins regardless of settle order.
pub struct ViewCell<T> {
    state: Arc<RwLock<Loadable<T>>>,
    generation: Arc<AtomicU64>,
    mounted: Arc<AtomicBool>,
    page: &'static str,
}

impl<T> Clone for ViewCell<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            mounted: Arc::clone(&self.mounted),
            page: self.page,
        }
    }
}

impl<T> ViewCell<T> {
    pub fn new(page: &'static str) -> Self {
        Self {
            state: Arc::new(RwLock::new(Loadable::Pending)),
            generation: Arc::new(AtomicU64::new(0)),
            mounted: Arc::new(AtomicBool::new(true)),
            page,
        }
    }

    /// Start a fetch cycle, superseding any still in flight
    pub fn begin(&self) -> FetchToken {
        FetchToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        self.is_mounted() && self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Apply a fetch outcome. Returns false if it was discarded.
    pub fn settle(&self, token: FetchToken, outcome: Result<T>) -> bool {
        // Generation is checked under the write lock so a superseded
        // result cannot land after the newer one.
        let mut state = self.state.write();
        if !self.is_current(token) {
            tracing::debug!(page = self.page, generation = token.0, "discarding superseded fetch result");
            return false;
        }

        *state = match outcome {
            Ok(data) => Loadable::Ready(data),
            Err(e) => {
                tracing::error!(page = self.page, error = %e, "fetch failed");
                Loadable::Failed(e.to_string())
            }
        };
        true
    }

    /// Stop accepting results; anything still in flight is dropped on arrival
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    pub fn with<R>(&self, f: impl FnOnce(&Loadable<T>) -> R) -> R {
        f(&self.state.read())
    }
}

impl<T: Clone> ViewCell<T> {
    pub fn snapshot(&self) -> Loadable<T> {
        self.state.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_failure_is_distinct_from_empty() {
        let cell: ViewCell<Vec<u32>> = ViewCell::new("test");
        assert!(cell.snapshot().is_pending());

        let token = cell.begin();
        assert!(cell.settle(token, Ok(vec![])));
        assert_eq!(cell.snapshot(), Loadable::Ready(vec![]));

        let token = cell.begin();
        assert!(cell.settle(token, Err(Error::Config("boom".into()))));
        assert_eq!(cell.snapshot().error(), Some("config error: boom"));
    }

    #[test]
    fn test_superseded_token_is_discarded() {
        let cell: ViewCell<&str> = ViewCell::new("test");
        let first = cell.begin();
        let second = cell.begin();

        assert!(cell.settle(second, Ok("new")));
        assert!(!cell.settle(first, Ok("stale")));
        assert_eq!(cell.snapshot(), Loadable::Ready("new"));
    }

    #[test]
    fn test_latest_token_survives_threaded_settles() {
        let cell: ViewCell<u64> = ViewCell::new("test");
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cell = cell.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let token = cell.begin();
                        cell.settle(token, Ok(token.0));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let latest = cell.generation.load(Ordering::SeqCst);
        assert_eq!(cell.snapshot(), Loadable::Ready(latest));
    }

    #[test]
    fn test_unmount_drops_late_results() {
        let cell: ViewCell<u32> = ViewCell::new("test");
        let token = cell.begin();
        cell.unmount();

        assert!(!cell.settle(token, Ok(1)));
        assert!(cell.snapshot().is_pending());
        assert!(!cell.is_mounted());
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_value(Loadable::Ready(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "ready", "data": 3 }));
        let json = serde_json::to_value(Loadable::<u32>::Pending).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "pending" }));
    }
}
