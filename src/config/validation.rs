use crate::config::types::Config;
use crate::url::ArticleNormalizer;
use crate::ConfigError;

/// Validates the entire configuration before any crawling begins
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_search(config)?;
    validate_crawler(config)?;
    Ok(())
}

/// Validates the search section, including both endpoint URLs
fn validate_search(config: &Config) -> Result<(), ConfigError> {
    if config.search.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max-depth must be >= 1, got {}",
            config.search.max_depth
        )));
    }

    let normalizer = match &config.search.site_origin {
        Some(origin) => ArticleNormalizer::new(origin)?,
        None => ArticleNormalizer::wikipedia(),
    };

    normalizer.parse_endpoint(&config.search.start_url)?;
    normalizer.parse_endpoint(&config.search.target_url)?;

    Ok(())
}

/// Validates crawler behavior settings
fn validate_crawler(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.workers < 1 || config.crawler.workers > 64 {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and 64, got {}",
            config.crawler.workers
        )));
    }

    if config.crawler.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1 second, got {}",
            config.crawler.request_timeout
        )));
    }

    if config.crawler.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
