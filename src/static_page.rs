use bytes::Bytes;
use http::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use tracing::instrument;
use url::Url;

use crate::helper::{self, PageError};

/// Body of the upstream template, either still streaming or already
/// materialized.
#[derive(Debug)]
pub enum StaticPage {
    Streaming(Response),
    Buffered(Bytes),
}

impl StaticPage {
    #[instrument(skip(client))]
    pub async fn fetch(client: &Client, url: &Url) -> Result<Self, PageError> {
        let response = client
            .get(url.clone())
            .headers(helper::headers())
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Static page responded with {}, rewriting it anyway.",
                response.status()
            );
        }

        Self::gather(response).await
    }

    /// JSON bodies are parsed and re-serialized compactly; everything else is
    /// passed through untouched as text.
    pub async fn gather(response: Response) -> Result<Self, PageError> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        tracing::debug!("Static page content type: {:?}", content_type);

        if content_type.contains("application/json") {
            let value: serde_json::Value = serde_json::from_slice(&response.bytes().await?)?;

            return Ok(Self::Buffered(Bytes::from(serde_json::to_vec(&value)?)));
        }

        Ok(Self::Streaming(response))
    }

    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>, PageError> {
        match self {
            Self::Streaming(response) => Ok(response.chunk().await?),
            Self::Buffered(bytes) if bytes.is_empty() => Ok(None),
            Self::Buffered(bytes) => Ok(Some(std::mem::take(bytes))),
        }
    }
}
