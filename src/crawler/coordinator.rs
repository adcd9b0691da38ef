//! Search coordinator - main orchestration logic
//!
//! This module owns the lifecycle of one search: it validates the two
//! endpoints, builds the shared crawl context, seeds the frontier with the
//! root article, runs the worker pool to completion, and reconstructs the
//! winning path from the node arena.

use super::fetcher::build_http_client;
use super::flag::SearchFlag;
use super::frontier::Frontier;
use super::graph::{Node, NodeArena};
use super::visited::VisitedSet;
use super::worker::{run_worker, CrawlContext};
use crate::config::Config;
use crate::url::ArticleNormalizer;
use crate::Result;
use std::sync::Arc;
use std::time::Instant;

/// Final outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Ordered chain of nodes from the start article to the target
    Found { path: Vec<Node> },

    /// The graph was exhausted at the depth limit without reaching the
    /// target
    NotFound,
}

/// Runs a bounded-depth path search between two articles
pub struct Searcher {
    config: Config,
    normalizer: ArticleNormalizer,
    start: String,
    target: String,
}

impl Searcher {
    /// Validates the configured endpoints and prepares a search
    ///
    /// Both URLs must canonicalize under the article prefix of the site
    /// origin; rejection here is a user-facing configuration error and no
    /// crawling happens.
    pub fn new(config: Config) -> Result<Self> {
        let normalizer = match &config.search.site_origin {
            Some(origin) => ArticleNormalizer::new(origin)?,
            None => ArticleNormalizer::wikipedia(),
        };

        let start = normalizer.parse_endpoint(&config.search.start_url)?;
        let target = normalizer.parse_endpoint(&config.search.target_url)?;

        Ok(Self {
            config,
            normalizer,
            start,
            target,
        })
    }

    /// Runs the search to completion
    ///
    /// When start and target normalize to the same article the trivial
    /// single-node path is returned directly; the crawl engine never
    /// starts and no fetch occurs.
    pub async fn run(&self) -> Result<SearchOutcome> {
        if self.start == self.target {
            let arena = NodeArena::new();
            let root = arena.alloc(self.start.clone(), 0, None);
            return Ok(SearchOutcome::Found {
                path: arena.path_from_root(root),
            });
        }

        let workers = self.config.crawler.workers;
        tracing::info!(
            "Searching from {} to {} (max depth {}, {} workers)",
            self.start,
            self.target,
            self.config.search.max_depth,
            workers
        );

        let client = build_http_client(&self.config.crawler)?;
        let ctx = Arc::new(CrawlContext {
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            flag: SearchFlag::new(),
            arena: NodeArena::new(),
            client,
            normalizer: self.normalizer.clone(),
            target: self.target.clone(),
            max_depth: self.config.search.max_depth,
        });

        // The root is admitted before any worker can observe it, so no
        // later discovery of the start URL creates a second node.
        let root = ctx.arena.alloc(self.start.clone(), 0, None);
        ctx.visited.admit(&self.start);
        ctx.frontier.push(root);

        let started = Instant::now();
        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            handles.push(tokio::spawn(run_worker(ctx.clone(), worker_id)));
        }
        for handle in handles {
            handle.await?;
        }

        tracing::info!(
            "Explored {} pages ({} admitted) in {:?}",
            ctx.arena.len(),
            ctx.visited.len(),
            started.elapsed()
        );

        match ctx.flag.peek() {
            Some(winner) => Ok(SearchOutcome::Found {
                path: ctx.arena.path_from_root(winner),
            }),
            None => Ok(SearchOutcome::NotFound),
        }
    }
}

/// Runs a complete search with the given configuration
///
/// This is the main entry point: it validates the endpoints, runs the
/// worker pool, and returns the reconstructed path or `NotFound`.
pub async fn search(config: Config) -> Result<SearchOutcome> {
    Searcher::new(config)?.run().await
}
