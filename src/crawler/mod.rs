//! Concurrent breadth-first exploration of the article hyperlink graph
//!
//! This module contains the core search engine:
//! - The shared frontier, visited set, and result flag
//! - The node arena and path reconstruction
//! - HTTP fetching and lexical link extraction
//! - The worker scheduling loop and overall coordination

mod coordinator;
mod extractor;
mod fetcher;
mod flag;
mod frontier;
mod graph;
mod visited;
mod worker;

pub use coordinator::{search, SearchOutcome, Searcher};
pub use extractor::LinkExtractor;
pub use fetcher::{build_http_client, fetch_page};
pub use flag::SearchFlag;
pub use frontier::{Frontier, PopOutcome};
pub use graph::{Node, NodeArena, NodeId};
pub use visited::VisitedSet;
pub use worker::{run_worker, CrawlContext};
