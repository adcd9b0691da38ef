//! Worker scheduling loop
//!
//! Each worker repeatedly claims a node from the frontier, fetches its
//! page, extracts candidate edges, and enqueues admitted children. Workers
//! stop when the flag reports a winner or the frontier is exhausted with
//! no sibling mid-fetch. Cancellation is cooperative: an in-flight fetch
//! runs to completion, but its extracted links are discarded by the flag
//! checks.

use super::extractor::LinkExtractor;
use super::fetcher::fetch_page;
use super::flag::SearchFlag;
use super::frontier::{Frontier, PopOutcome};
use super::graph::{Node, NodeArena, NodeId};
use super::visited::VisitedSet;
use crate::url::ArticleNormalizer;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// How long an idle worker waits before re-checking the frontier
const IDLE_BACKOFF: Duration = Duration::from_millis(10);

/// Shared state for one search, passed by reference into every worker task
///
/// Frontier, visited set, and flag each own exactly one lock; no worker
/// ever holds two of them at once.
pub struct CrawlContext {
    pub frontier: Frontier,
    pub visited: VisitedSet,
    pub flag: SearchFlag,
    pub arena: NodeArena,
    pub client: Client,
    pub normalizer: ArticleNormalizer,
    pub target: String,
    pub max_depth: u32,
}

/// Runs one worker until the search finishes or the frontier is exhausted
pub async fn run_worker(ctx: Arc<CrawlContext>, worker_id: usize) {
    tracing::debug!("Worker {} started", worker_id);

    loop {
        // Stop promptly once another worker has found the target.
        if ctx.flag.peek().is_some() {
            break;
        }

        let id = match ctx.frontier.pop() {
            PopOutcome::Claimed(id) => id,
            PopOutcome::Idle => {
                // Siblings are mid-fetch and may still push new work.
                tokio::time::sleep(IDLE_BACKOFF).await;
                continue;
            }
            PopOutcome::Exhausted => break,
        };

        let node = ctx.arena.get(id);
        match fetch_page(&ctx.client, &node.url).await {
            Ok(html) => expand(&ctx, id, &node, &html),
            Err(e) => {
                // Dead end: skip the node, no retry.
                tracing::debug!("Worker {}: fetch failed, skipping: {}", worker_id, e);
            }
        }
        ctx.frontier.task_done();
    }

    tracing::debug!("Worker {} stopped", worker_id);
}

/// Feeds the extracted links of one fetched page into the search tree
fn expand(ctx: &CrawlContext, parent: NodeId, node: &Node, html: &str) {
    let child_depth = node.depth + 1;
    if child_depth > ctx.max_depth {
        // Every edge from this node would exceed the depth limit.
        return;
    }

    for candidate in LinkExtractor::new(html, &ctx.normalizer) {
        // Stop emitting edges as soon as another worker wins.
        if ctx.flag.peek().is_some() {
            return;
        }

        // Admission must precede node construction; the admitting worker is
        // the only one allowed to materialize this URL.
        if !ctx.visited.admit(&candidate) {
            continue;
        }

        let is_target = candidate == ctx.target;
        let child = ctx.arena.alloc(candidate, child_depth, Some(parent));

        if is_target {
            // Claimed or lost, a matched target is never enqueued.
            if ctx.flag.try_claim(child) {
                tracing::info!("Target reached at depth {}", child_depth);
            }
        } else {
            ctx.frontier.push(child);
        }
    }
}
