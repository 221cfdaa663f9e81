use thiserror::Error;
use tracing::{debug, info};

pub const DEFAULT_SEARCH_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_GRAPHQL_URL: &str = "/graphql";
pub const DEFAULT_SAVED_IDS_KEY: &str = "saved_artists";
pub const DEFAULT_TOKEN_KEY: &str = "id_token";

const ENV_SEARCH_URL: &str = "ARTFIND_SEARCH_URL";
const ENV_GRAPHQL_URL: &str = "ARTFIND_GRAPHQL_URL";
const ENV_SAVED_IDS_KEY: &str = "ARTFIND_SAVED_IDS_KEY";
const ENV_TOKEN_KEY: &str = "ARTFIND_TOKEN_KEY";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid URL for {key}: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("Empty value for {0}")]
    Empty(&'static str),
    #[error("Cannot resolve {key} against origin {origin}")]
    Unresolvable { key: &'static str, origin: String },
}

/// Endpoints and storage keys used by the search page
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Book search endpoint, queried with `?q=<text>`
    pub search_url: String,
    /// GraphQL endpoint for the save mutation and profile queries
    pub graphql_url: String,
    /// localStorage key holding the saved id list
    pub saved_ids_key: String,
    /// localStorage key holding the session token
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            saved_ids_key: DEFAULT_SAVED_IDS_KEY.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load from the process environment, falling back to values baked in at
    /// compile time (the only source available in the browser), then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| std::env::var(key).ok().or_else(|| compiled(key)))?;
        info!(
            "Config loaded: search={} graphql={}",
            config.search_url, config.graphql_url
        );
        Ok(config)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &'static str, default: String| -> Result<String, ConfigError> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
                Some(value) => {
                    debug!("{} overridden", key);
                    Ok(value.trim().to_string())
                }
                None => Ok(default),
            }
        };

        let config = Self {
            search_url: pick(ENV_SEARCH_URL, defaults.search_url)?,
            graphql_url: pick(ENV_GRAPHQL_URL, defaults.graphql_url)?,
            saved_ids_key: pick(ENV_SAVED_IDS_KEY, defaults.saved_ids_key)?,
            token_key: pick(ENV_TOKEN_KEY, defaults.token_key)?,
        };

        validate_url(ENV_SEARCH_URL, &config.search_url)?;
        validate_url(ENV_GRAPHQL_URL, &config.graphql_url)?;
        Ok(config)
    }

    /// Turn root-relative endpoints into absolute URLs on `origin`. The HTTP
    /// client only accepts absolute URLs.
    pub fn resolve_against(mut self, origin: &str) -> Result<Self, ConfigError> {
        self.search_url = resolve_url(ENV_SEARCH_URL, &self.search_url, origin)?;
        self.graphql_url = resolve_url(ENV_GRAPHQL_URL, &self.graphql_url, origin)?;
        Ok(self)
    }

    /// True while any endpoint still needs an origin to be usable.
    pub fn has_relative_urls(&self) -> bool {
        is_root_relative(&self.search_url) || is_root_relative(&self.graphql_url)
    }
}

fn compiled(key: &str) -> Option<String> {
    let value = match key {
        ENV_SEARCH_URL => option_env!("ARTFIND_SEARCH_URL"),
        ENV_GRAPHQL_URL => option_env!("ARTFIND_GRAPHQL_URL"),
        ENV_SAVED_IDS_KEY => option_env!("ARTFIND_SAVED_IDS_KEY"),
        ENV_TOKEN_KEY => option_env!("ARTFIND_TOKEN_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

fn is_root_relative(value: &str) -> bool {
    value.starts_with('/') && !value.starts_with("//")
}

fn resolve_url(key: &'static str, value: &str, origin: &str) -> Result<String, ConfigError> {
    if !is_root_relative(value) {
        return Ok(value.to_string());
    }
    reqwest::Url::parse(origin)
        .ok()
        .filter(|base| matches!(base.scheme(), "http" | "https"))
        .and_then(|base| base.join(value).ok())
        .map(|url| url.to_string())
        .ok_or_else(|| ConfigError::Unresolvable {
            key,
            origin: origin.to_string(),
        })
}

/// Absolute http(s) URLs, or paths relative to the page origin.
fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    if is_root_relative(value) {
        return Ok(());
    }
    match reqwest::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(ConfigError::InvalidUrl {
            key,
            value: value.to_string(),
        }),
    }
}
