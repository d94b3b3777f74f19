// octoview-core-client/octoview-core-client
//
// Copyright: 2026, Octoview Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote profile source.
    pub source_base_url: Url,
    /// Upper bound applied to every remote source call. A timeout surfaces
    /// as the same failure as any other source error.
    pub source_timeout: Duration,
    /// Page size used when walking paginated source listings.
    pub source_page_size: u32,
    /// How long a fetched repository listing stays fresh.
    pub repos_cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_base_url: Url::parse("https://api.github.com")
                .expect("Hardcoded URL should be valid"),
            source_timeout: Duration::from_secs(10),
            source_page_size: 100,
            repos_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl AppConfig {
    /// Loads the config from the environment, falling back to the defaults
    /// for unset or unparsable variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            source_base_url: parse_var("OCTOVIEW_SOURCE_URL", defaults.source_base_url),
            source_timeout: Duration::from_secs(parse_var(
                "OCTOVIEW_SOURCE_TIMEOUT_SECS",
                defaults.source_timeout.as_secs(),
            )),
            source_page_size: parse_var("OCTOVIEW_SOURCE_PAGE_SIZE", defaults.source_page_size),
            repos_cache_ttl: Duration::from_secs(parse_var(
                "OCTOVIEW_REPOS_CACHE_TTL_SECS",
                defaults.repos_cache_ttl.as_secs(),
            )),
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(error) => {
            warn!("Ignoring invalid {key} value: {error}");
            default
        }
    }
}
