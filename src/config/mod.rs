//! Configuration module for wikitrail
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and building equivalent configurations from command-line values.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wikitrail::config::load_config;
//!
//! let config = load_config(Path::new("search.toml")).unwrap();
//! println!("Searching up to depth {}", config.search.max_depth);
//! ```

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, SearchConfig};
pub use validation::validate;
