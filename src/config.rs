use std::{env, num::ParseIntError};

use thiserror::Error;
use url::Url;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_ORIGIN: &str = "https://jh-cf-assessment.justcshuynh.workers.dev";
const DEFAULT_STATIC_PAGE_URL: &str = "https://static-links-page.signalnerve.workers.dev";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    Port(#[from] ParseIntError),
    #[error("invalid {name}: {source}")]
    Url {
        name: &'static str,
        source: url::ParseError,
    },
    #[error("ORIGIN must be an http(s) origin, got {0}")]
    Origin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Serialized origin, e.g. `https://example.com`, without a trailing slash.
    pub origin: String,
    pub static_page_url: Url,
}

impl Config {
    pub fn new(port: u16, origin: &str, static_page_url: &str) -> Result<Self, ConfigError> {
        let origin = Url::parse(origin)
            .map_err(|source| ConfigError::Url {
                name: "ORIGIN",
                source,
            })?
            .origin();

        if !origin.is_tuple() {
            return Err(ConfigError::Origin(origin.ascii_serialization()));
        }

        let static_page_url = Url::parse(static_page_url).map_err(|source| ConfigError::Url {
            name: "STATIC_PAGE_URL",
            source,
        })?;

        Ok(Self {
            port,
            origin: origin.ascii_serialization(),
            static_page_url,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_owned())
            .parse()?;

        Self::new(
            port,
            &env::var("ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_owned()),
            &env::var("STATIC_PAGE_URL").unwrap_or_else(|_| DEFAULT_STATIC_PAGE_URL.to_owned()),
        )
    }

    /// The only request URL answered with the JSON link list.
    pub fn links_url(&self) -> String {
        format!("{}/links", self.origin)
    }
}
