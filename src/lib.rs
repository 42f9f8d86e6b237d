pub mod config;
pub mod helper;
pub mod links;
pub mod profile;
pub mod rewrite;
pub mod state;
pub mod static_page;
pub mod transform;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{
    body::{boxed, Body},
    extract::State,
    response::{IntoResponse, Response},
    Router,
};
use http::{header::CONTENT_TYPE, header::HOST, Request};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::instrument;

use crate::{
    helper::{PageError, HTML_CONTENT_TYPE},
    links::links_response,
    state::PageState,
    static_page::StaticPage,
    transform::transform,
};

/// Rebuilds the absolute URL the client asked for.
///
/// Origin-form request targets take their scheme from the first entry of
/// `X-Forwarded-Proto` (falling back to `http`) and their authority from the
/// `Host` header.
pub fn request_url<B>(request: &Request<B>) -> String {
    let uri = request.uri();
    let headers = request.headers();

    let scheme = uri
        .scheme_str()
        .or_else(|| {
            headers
                .get("x-forwarded-proto")
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.split(',').next())
                .map(str::trim)
        })
        .unwrap_or("http");

    let host = uri
        .authority()
        .map(|authority| authority.as_str())
        .or_else(|| headers.get(HOST).and_then(|value| value.to_str().ok()))
        .unwrap_or_default();

    let path_and_query = uri
        .path_and_query()
        .map(|path_and_query| path_and_query.as_str())
        .unwrap_or("/");

    format!("{scheme}://{host}{path_and_query}")
}

/// Serves the link list on an exact `{origin}/links` match and the rewritten
/// static page for everything else.
#[instrument(skip_all, fields(url = tracing::field::Empty))]
pub async fn handle_request(
    State(state): State<Arc<PageState>>,
    request: Request<Body>,
) -> Result<Response, PageError> {
    let url = request_url(&request);
    tracing::Span::current().record("url", url.as_str());

    if url == state.config.links_url() {
        return links_response(state.profile.links);
    }

    let page = StaticPage::fetch(&state.client, &state.config.static_page_url).await?;

    Ok((
        [(CONTENT_TYPE, HTML_CONTENT_TYPE)],
        boxed(transform(state.rules.clone(), page)),
    )
        .into_response())
}

pub fn router(state: Arc<PageState>) -> Router {
    Router::new()
        .fallback(handle_request)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
