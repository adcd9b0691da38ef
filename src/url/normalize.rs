use crate::UrlError;
use url::Url;

/// Default site origin for article URLs
pub const WIKIPEDIA_ORIGIN: &str = "https://en.wikipedia.org";

/// Path marker that distinguishes article pages from everything else
const ARTICLE_PATH: &str = "/wiki/";

/// Canonicalizes raw link references into article URLs
///
/// The normalizer carries the site origin, which is fixed for the lifetime of
/// one search. Articles live under `origin + "/wiki/"`; pages whose title
/// segment contains `:` (Category:, File:, Talk:, ...) are namespaced pages
/// and are rejected.
///
/// # Normalization Steps
///
/// 1. Resolve site-relative references (`/wiki/...`) against the origin;
///    accept absolute URLs under the article prefix; reject everything else
/// 2. Truncate at the first fragment marker (`#`)
/// 3. Truncate at the first query marker (`?`)
/// 4. Strip trailing slashes down to the origin length
/// 5. Reject empty or namespaced title segments
///
/// Normalization is idempotent: feeding a canonical URL back through any of
/// the entry points returns it unchanged.
#[derive(Debug, Clone)]
pub struct ArticleNormalizer {
    origin: String,
    prefix: String,
}

impl ArticleNormalizer {
    /// Creates a normalizer for the English Wikipedia
    pub fn wikipedia() -> Self {
        Self {
            origin: WIKIPEDIA_ORIGIN.to_string(),
            prefix: format!("{}{}", WIKIPEDIA_ORIGIN, ARTICLE_PATH),
        }
    }

    /// Creates a normalizer for an arbitrary site origin
    ///
    /// The origin must be an absolute http(s) URL without a path, e.g.
    /// `https://en.wikipedia.org` or a local test server address.
    pub fn new(origin: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(origin).map_err(|e| UrlError::InvalidOrigin {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(UrlError::InvalidOrigin {
                origin: origin.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let origin = origin.trim_end_matches('/').to_string();
        let prefix = format!("{}{}", origin, ARTICLE_PATH);
        Ok(Self { origin, prefix })
    }

    /// Returns the site origin this normalizer resolves against
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Turns a raw href from page markup into a canonical article URL
    ///
    /// Returns `None` for anything that is not an article reference: links
    /// outside the origin, external schemes, namespaced pages, and empty
    /// titles. Rejection is the normal case on a real page, so this is an
    /// `Option`, not an error.
    pub fn normalize_href(&self, href: &str) -> Option<String> {
        let mut full = if href.starts_with(ARTICLE_PATH) {
            // Site-relative reference: /wiki/Some_Page
            format!("{}{}", self.origin, href)
        } else if href.starts_with(&self.prefix) {
            // Already an absolute article URL
            href.to_string()
        } else {
            return None;
        };

        self.strip_decorations(&mut full);

        if self.is_article(&full) {
            Some(full)
        } else {
            None
        }
    }

    /// Parses an operator-supplied start or target URL
    ///
    /// Applies the same canonicalization as [`normalize_href`] but reports
    /// why the input was rejected, for user-facing configuration errors.
    ///
    /// [`normalize_href`]: ArticleNormalizer::normalize_href
    pub fn parse_endpoint(&self, input: &str) -> Result<String, UrlError> {
        let mut full = input.trim().to_string();
        self.strip_decorations(&mut full);

        let title = match full.strip_prefix(&self.prefix) {
            Some(title) => title,
            None => {
                return Err(UrlError::OutsideArticlePath {
                    url: input.to_string(),
                    prefix: self.prefix.clone(),
                })
            }
        };

        if title.is_empty() {
            Err(UrlError::EmptyTitle(input.to_string()))
        } else if title.contains(':') {
            Err(UrlError::Namespaced(input.to_string()))
        } else {
            Ok(full)
        }
    }

    /// Truncates at the first `#` and `?`, then strips trailing slashes down
    /// to the origin length
    fn strip_decorations(&self, url: &mut String) {
        if let Some(i) = url.find('#') {
            url.truncate(i);
        }
        if let Some(i) = url.find('?') {
            url.truncate(i);
        }
        while url.len() > self.origin.len() && url.ends_with('/') {
            url.pop();
        }
    }

    /// Checks whether a canonical URL denotes a standard article page
    fn is_article(&self, full: &str) -> bool {
        match full.strip_prefix(&self.prefix) {
            Some(title) => !title.is_empty() && !title.contains(':'),
            None => false,
        }
    }
}

/// Returns the final path segment of an article URL
///
/// Used for presentation; the segment keeps its underscores.
pub fn article_title(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wiki() -> ArticleNormalizer {
        ArticleNormalizer::wikipedia()
    }

    #[test]
    fn test_relative_reference_resolved() {
        let result = wiki().normalize_href("/wiki/Rust_(programming_language)");
        assert_eq!(
            result.as_deref(),
            Some("https://en.wikipedia.org/wiki/Rust_(programming_language)")
        );
    }

    #[test]
    fn test_absolute_article_url_accepted() {
        let result = wiki().normalize_href("https://en.wikipedia.org/wiki/Cat");
        assert_eq!(result.as_deref(), Some("https://en.wikipedia.org/wiki/Cat"));
    }

    #[test]
    fn test_external_url_rejected() {
        assert_eq!(wiki().normalize_href("https://example.com/wiki/Cat"), None);
        assert_eq!(wiki().normalize_href("mailto:someone@example.com"), None);
        assert_eq!(wiki().normalize_href("#cite_note-1"), None);
        assert_eq!(wiki().normalize_href("//en.wikipedia.org/wiki/Cat"), None);
    }

    #[test]
    fn test_fragment_stripped() {
        let result = wiki().normalize_href("/wiki/Cat#Anatomy");
        assert_eq!(result.as_deref(), Some("https://en.wikipedia.org/wiki/Cat"));
    }

    #[test]
    fn test_query_stripped() {
        let result = wiki().normalize_href("/wiki/Cat?action=edit");
        assert_eq!(result.as_deref(), Some("https://en.wikipedia.org/wiki/Cat"));
    }

    #[test]
    fn test_fragment_before_query() {
        let result = wiki().normalize_href("/wiki/Cat#section?query=1");
        assert_eq!(result.as_deref(), Some("https://en.wikipedia.org/wiki/Cat"));
    }

    #[test]
    fn test_trailing_slashes_stripped() {
        let result = wiki().normalize_href("/wiki/Cat///");
        assert_eq!(result.as_deref(), Some("https://en.wikipedia.org/wiki/Cat"));
    }

    #[test]
    fn test_namespaced_pages_rejected() {
        assert_eq!(wiki().normalize_href("/wiki/Category:Mammals"), None);
        assert_eq!(wiki().normalize_href("/wiki/File:Cat.jpg"), None);
        assert_eq!(wiki().normalize_href("/wiki/Talk:Cat"), None);
        assert_eq!(wiki().normalize_href("/wiki/Special:Random"), None);
    }

    #[test]
    fn test_namespace_separator_anywhere_in_title() {
        assert_eq!(wiki().normalize_href("/wiki/Cat:Dog"), None);
        assert_eq!(wiki().normalize_href("/wiki/cat:dog"), None);
    }

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(wiki().normalize_href("/wiki/"), None);
        assert_eq!(wiki().normalize_href("/wiki/#top"), None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let n = wiki();
        for href in [
            "/wiki/Cat#Anatomy",
            "/wiki/Rust_(programming_language)?x=1",
            "https://en.wikipedia.org/wiki/Dog/",
        ] {
            let once = n.normalize_href(href).unwrap();
            let twice = n.normalize_href(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_custom_origin() {
        let n = ArticleNormalizer::new("http://127.0.0.1:8080").unwrap();
        let result = n.normalize_href("/wiki/Cat");
        assert_eq!(result.as_deref(), Some("http://127.0.0.1:8080/wiki/Cat"));
        assert_eq!(n.normalize_href("https://en.wikipedia.org/wiki/Cat"), None);
    }

    #[test]
    fn test_custom_origin_trailing_slash() {
        let n = ArticleNormalizer::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(n.origin(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_origin() {
        assert!(ArticleNormalizer::new("not a url").is_err());
        assert!(ArticleNormalizer::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_parse_endpoint_valid() {
        let result = wiki().parse_endpoint("https://en.wikipedia.org/wiki/Cat#top");
        assert_eq!(result.unwrap(), "https://en.wikipedia.org/wiki/Cat");
    }

    #[test]
    fn test_parse_endpoint_trims_whitespace() {
        let result = wiki().parse_endpoint("  https://en.wikipedia.org/wiki/Cat\n");
        assert_eq!(result.unwrap(), "https://en.wikipedia.org/wiki/Cat");
    }

    #[test]
    fn test_parse_endpoint_outside_prefix() {
        let result = wiki().parse_endpoint("https://example.com/wiki/Cat");
        assert!(matches!(result, Err(UrlError::OutsideArticlePath { .. })));
    }

    #[test]
    fn test_parse_endpoint_namespaced() {
        let result = wiki().parse_endpoint("https://en.wikipedia.org/wiki/Category:Mammals");
        assert!(matches!(result, Err(UrlError::Namespaced(_))));
    }

    #[test]
    fn test_parse_endpoint_empty_title() {
        let result = wiki().parse_endpoint("https://en.wikipedia.org/wiki/");
        assert!(matches!(result, Err(UrlError::EmptyTitle(_))));
    }

    #[test]
    fn test_article_title() {
        assert_eq!(
            article_title("https://en.wikipedia.org/wiki/Rust_(programming_language)"),
            "Rust_(programming_language)"
        );
        assert_eq!(article_title("https://en.wikipedia.org/wiki/Cat"), "Cat");
    }
}
