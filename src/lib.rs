//! Wikitrail: bounded-depth path search between Wikipedia articles
//!
//! This crate implements a concurrent breadth-first crawler that explores
//! outward from a start article until a target article is discovered or the
//! hyperlink graph is exhausted at the depth limit.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for wikitrail operations
#[derive(Debug, Error)]
pub enum WikitrailError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(#[from] UrlError),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid site origin '{origin}': {message}")]
    InvalidOrigin { origin: String, message: String },

    #[error("'{url}' is not an article URL under {prefix}")]
    OutsideArticlePath { url: String, prefix: String },

    #[error("'{0}' has an empty article title")]
    EmptyTitle(String),

    #[error("'{0}' is a namespaced page (Category:, File:, Talk:, ...), not an article")]
    Namespaced(String),
}

/// Result type alias for wikitrail operations
pub type Result<T> = std::result::Result<T, WikitrailError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{search, SearchOutcome, Searcher};
pub use url::{article_title, ArticleNormalizer};
