use axum::response::{IntoResponse, Response};
use http::{header::CONTENT_TYPE, HeaderMap, HeaderValue, StatusCode};
use lol_html::errors::{RewritingError, SelectorError};
use thiserror::Error;

pub const HTML_CONTENT_TYPE: &str = "text/html;charset=UTF-8";

pub fn headers() -> HeaderMap<HeaderValue> {
    let mut headers = HeaderMap::with_capacity(1);

    headers.append(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE));

    headers
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to fetch the static page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("static page claimed to be json but was not: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid rewrite selector: {0}")]
    Selector(#[from] SelectorError),
    #[error("failed to rewrite the static page: {0}")]
    Rewrite(#[from] RewritingError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{self}")).into_response()
    }
}
