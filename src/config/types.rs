use serde::Deserialize;

/// Main configuration structure for wikitrail
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// The search itself: where to start, what to find, how far to go
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Article URL the search starts from
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Article URL the search is looking for
    #[serde(rename = "target-url")]
    pub target_url: String,

    /// Maximum depth to explore from the start article
    #[serde(rename = "max-depth")]
    pub max_depth: u32,

    /// Overrides the article site origin; intended for tests against
    /// local servers
    #[serde(rename = "site-origin", default)]
    pub site_origin: Option<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of parallel workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Optional report file the winning path is written to
    #[serde(rename = "path-file", default)]
    pub path_file: Option<String>,
}

fn default_workers() -> usize {
    8
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("wikitrail/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Config {
    /// Builds a configuration from the three command-line values, with
    /// defaults for everything else
    pub fn from_endpoints(start_url: &str, target_url: &str, max_depth: u32) -> Self {
        Self {
            search: SearchConfig {
                start_url: start_url.to_string(),
                target_url: target_url.to_string(),
                max_depth,
                site_origin: None,
            },
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}
