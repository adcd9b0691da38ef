//! URL handling module for wikitrail
//!
//! This module turns raw link references into canonical article URLs and
//! rejects everything that is not an article page.

mod normalize;

pub use normalize::{article_title, ArticleNormalizer, WIKIPEDIA_ORIGIN};
