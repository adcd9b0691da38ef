//! Shared FIFO frontier of nodes awaiting expansion
//!
//! Insertion order is visitation order across the whole worker pool, which
//! approximates level-order traversal without a strict barrier between
//! depth levels. The frontier also tracks how many claimed nodes are still
//! being processed, so workers can tell a momentarily empty queue apart
//! from an exhausted traversal.

use super::graph::NodeId;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Outcome of a non-blocking pop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOutcome {
    /// A node was dequeued; the caller now counts as in flight until it
    /// calls [`Frontier::task_done`]
    Claimed(NodeId),

    /// The queue is empty but siblings are mid-fetch and may push more work
    Idle,

    /// The queue is empty and nothing is in flight; the traversal is done
    Exhausted,
}

#[derive(Debug, Default)]
struct Inner {
    queue: VecDeque<NodeId>,
    in_flight: usize,
}

/// Thread-safe FIFO of discovered-but-unprocessed nodes
#[derive(Debug, Default)]
pub struct Frontier {
    inner: Mutex<Inner>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the tail
    pub fn push(&self, id: NodeId) {
        self.inner.lock().unwrap().queue.push_back(id);
    }

    /// Removes and returns the head without ever blocking
    ///
    /// Claiming a node and incrementing the in-flight count happen under
    /// one lock, so no sibling can observe an empty queue with zero
    /// in-flight while a node is being handed out.
    pub fn pop(&self) -> PopOutcome {
        let mut inner = self.inner.lock().unwrap();
        match inner.queue.pop_front() {
            Some(id) => {
                inner.in_flight += 1;
                PopOutcome::Claimed(id)
            }
            None if inner.in_flight > 0 => PopOutcome::Idle,
            None => PopOutcome::Exhausted,
        }
    }

    /// Marks one previously claimed node as fully processed
    pub fn task_done(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
    }

    /// Number of nodes waiting in the queue
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
