//! API utilities for fetching server-rendered fragments
//!
//! The sort endpoint answers with the inner HTML of the list container when
//! the request carries the fragment marker header.

use gloo_net::http::{Request, RequestBuilder};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Header telling the server to render a fragment instead of a full page
pub const FRAGMENT_HEADER: &str = "X-Requested-With";
pub const FRAGMENT_HEADER_VALUE: &str = "XMLHttpRequest";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to read response body: {0}")]
    Body(String),
}

pub type FragmentFuture = Pin<Box<dyn Future<Output = Result<String, FetchError>>>>;

/// Source of HTML fragments for a given URL
pub trait FragmentSource {
    fn fetch_fragment(&self, url: &str) -> FragmentFuture;
}

/// Fetches fragments with a single GET carrying the fragment marker header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFragmentSource {
    header_name: String,
    header_value: String,
}

impl HttpFragmentSource {
    pub fn new(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
        }
    }

    /// GET request for `url` carrying the fragment marker header.
    pub fn request(&self, url: &str) -> RequestBuilder {
        Request::get(url).header(&self.header_name, &self.header_value)
    }
}

impl Default for HttpFragmentSource {
    fn default() -> Self {
        Self::new(FRAGMENT_HEADER, FRAGMENT_HEADER_VALUE)
    }
}

impl FragmentSource for HttpFragmentSource {
    fn fetch_fragment(&self, url: &str) -> FragmentFuture {
        let request = self.request(url);
        Box::pin(fetch_html_fragment(request))
    }
}

/// Send `request` and return the response body as text.
///
/// Non-2xx responses are errors; the body of such responses is ignored.
pub async fn fetch_html_fragment(request: RequestBuilder) -> Result<String, FetchError> {
    let response = request
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))
}
