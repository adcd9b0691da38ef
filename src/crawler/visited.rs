//! Visited set: the sole deduplication authority
//!
//! A URL is admitted into the search graph at most once, and only the
//! worker that receives `true` from [`VisitedSet::admit`] may construct
//! the corresponding node. No other component decides whether a URL is
//! new.

use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically tests membership and inserts if absent
    ///
    /// Returns `true` exactly once per distinct URL; every later call for
    /// the same URL returns `false`.
    pub fn admit(&self, url: &str) -> bool {
        let mut seen = self.seen.lock().unwrap();
        if seen.contains(url) {
            return false;
        }
        seen.insert(url.to_string());
        true
    }

    /// Number of URLs admitted so far
    pub fn len(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
