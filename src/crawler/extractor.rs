//! Lexical link extraction
//!
//! Scans raw page markup for anchor openings and href attribute values and
//! feeds each value through the article normalizer. This is a best-effort
//! lexical scan, deliberately not an HTML parser: it tracks no nesting,
//! comments, or escaped quotes, and may both miss and misattribute links on
//! malformed markup. Malformed or missing attributes read as "no link
//! here" and scanning continues.

use crate::url::ArticleNormalizer;

const ANCHOR_OPEN: &str = "<a";
const HREF_ATTR: &str = "href=\"";

/// Iterator over the normalized article URLs referenced by a page
///
/// The sequence is finite and non-restartable; duplicates are yielded as
/// they appear since deduplication belongs to the Visited Set.
pub struct LinkExtractor<'a> {
    html: &'a str,
    normalizer: &'a ArticleNormalizer,
    pos: usize,
}

impl<'a> LinkExtractor<'a> {
    pub fn new(html: &'a str, normalizer: &'a ArticleNormalizer) -> Self {
        Self {
            html,
            normalizer,
            pos: 0,
        }
    }
}

impl Iterator for LinkExtractor<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let anchor = self.html.get(self.pos..)?.find(ANCHOR_OPEN)?;
            let anchor_at = self.pos + anchor;

            let attr = match self.html[anchor_at..].find(HREF_ATTR) {
                Some(offset) => offset,
                None => {
                    // No href anywhere past this anchor; nudge forward and rescan.
                    self.pos = anchor_at + ANCHOR_OPEN.len();
                    continue;
                }
            };
            let value_start = anchor_at + attr + HREF_ATTR.len();

            let value_len = match self.html[value_start..].find('"') {
                Some(len) => len,
                None => {
                    // Unterminated attribute value ends the scan.
                    self.pos = self.html.len();
                    return None;
                }
            };

            self.pos = value_start + value_len + 1;
            if value_len == 0 {
                continue;
            }

            let raw = &self.html[value_start..value_start + value_len];
            if let Some(url) = self.normalizer.normalize_href(raw) {
                return Some(url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<String> {
        let normalizer = ArticleNormalizer::wikipedia();
        LinkExtractor::new(html, &normalizer).collect()
    }

    #[test]
    fn test_extracts_article_links() {
        let html = r#"<p>See <a href="/wiki/Cat">cats</a> and <a href="/wiki/Dog">dogs</a>.</p>"#;
        assert_eq!(
            extract(html),
            vec![
                "https://en.wikipedia.org/wiki/Cat",
                "https://en.wikipedia.org/wiki/Dog",
            ]
        );
    }

    #[test]
    fn test_rejected_hrefs_are_skipped() {
        let html = r##"
            <a href="/wiki/Category:Mammals">category</a>
            <a href="https://example.com/">external</a>
            <a href="/wiki/Cat">cat</a>
            <a href="#cite_note-1">footnote</a>
        "##;
        assert_eq!(extract(html), vec!["https://en.wikipedia.org/wiki/Cat"]);
    }

    #[test]
    fn test_duplicates_are_yielded() {
        // Deduplication is the Visited Set's job, not the extractor's.
        let html = r#"<a href="/wiki/Cat">one</a><a href="/wiki/Cat">two</a>"#;
        assert_eq!(extract(html).len(), 2);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">anchor</a><a href="/wiki/Cat">cat</a>"#;
        assert_eq!(extract(html), vec!["https://en.wikipedia.org/wiki/Cat"]);
    }

    #[test]
    fn test_empty_href_is_skipped() {
        let html = r#"<a href="">empty</a><a href="/wiki/Cat">cat</a>"#;
        assert_eq!(extract(html), vec!["https://en.wikipedia.org/wiki/Cat"]);
    }

    #[test]
    fn test_unterminated_quote_ends_scan() {
        let html = r#"<a href="/wiki/Cat">cat</a><a href="/wiki/Dog"#;
        assert_eq!(extract(html), vec!["https://en.wikipedia.org/wiki/Cat"]);
    }

    #[test]
    fn test_single_quoted_href_is_not_recognized() {
        // Known limitation of the lexical scan.
        let html = r#"<a href='/wiki/Cat'>cat</a>"#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_no_anchors() {
        assert!(extract("<p>plain text</p>").is_empty());
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_fragment_and_query_normalized_during_extraction() {
        let html = r#"<a href="/wiki/Cat#Anatomy">cat</a><a href="/wiki/Dog?oldid=1">dog</a>"#;
        assert_eq!(
            extract(html),
            vec![
                "https://en.wikipedia.org/wiki/Cat",
                "https://en.wikipedia.org/wiki/Dog",
            ]
        );
    }
}
