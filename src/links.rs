use axum::response::{IntoResponse, Response};
use http::header::CONTENT_TYPE;
use serde::Serialize;

use crate::{helper::PageError, profile::Link};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Serialize)]
pub struct LinksDocument<'a> {
    pub links: &'a [Link],
}

impl<'a> LinksDocument<'a> {
    pub fn new(links: &'a [Link]) -> Self {
        Self { links }
    }

    pub fn to_pretty_json(&self) -> Result<String, PageError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn links_response(links: &[Link]) -> Result<Response, PageError> {
    let json = LinksDocument::new(links).to_pretty_json()?;

    Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], json).into_response())
}
