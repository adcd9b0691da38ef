//! Single-writer-wins result flag
//!
//! Records the node that matched the target article. The transition from
//! pending to found happens at most once per search; every worker polls
//! [`SearchFlag::peek`] as a cooperative cancellation check.

use super::graph::NodeId;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct SearchFlag {
    winner: Mutex<Option<NodeId>>,
}

impl SearchFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` as the winning node if the search is still pending
    ///
    /// Exactly one caller per search receives `true`; the winner is
    /// whichever candidate acquires the lock first, not necessarily the
    /// globally shortest path when several matches land in the same
    /// instant.
    pub fn try_claim(&self, id: NodeId) -> bool {
        let mut winner = self.winner.lock().unwrap();
        if winner.is_none() {
            *winner = Some(id);
            true
        } else {
            false
        }
    }

    /// Non-blocking read of the current winner, if any
    pub fn peek(&self) -> Option<NodeId> {
        *self.winner.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::graph::NodeArena;
    use std::sync::Arc;

    #[test]
    fn test_starts_pending() {
        let flag = SearchFlag::new();
        assert_eq!(flag.peek(), None);
    }

    #[test]
    fn test_first_claim_wins() {
        let arena = NodeArena::new();
        let a = arena.alloc("https://en.wikipedia.org/wiki/A".to_string(), 1, None);
        let b = arena.alloc("https://en.wikipedia.org/wiki/B".to_string(), 1, None);

        let flag = SearchFlag::new();
        assert!(flag.try_claim(a));
        assert!(!flag.try_claim(b));
        assert_eq!(flag.peek(), Some(a));
    }

    #[test]
    fn test_concurrent_claims_single_winner() {
        let arena = NodeArena::new();
        let ids: Vec<_> = (0..8)
            .map(|i| arena.alloc(format!("https://en.wikipedia.org/wiki/N{}", i), 1, None))
            .collect();

        let flag = Arc::new(SearchFlag::new());
        let handles: Vec<_> = ids
            .into_iter()
            .map(|id| {
                let flag = flag.clone();
                std::thread::spawn(move || flag.try_claim(id))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        assert_eq!(wins, 1, "pending -> found transitions at most once");
        assert!(flag.peek().is_some());
    }
}
