//! Fragment fetching
//!
//! The engine fetches fragments through the `FragmentFetcher` seam; the HTTP
//! implementation resolves resource names against a base URL. Tests script
//! their own fetcher instead of standing up a server.

use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

use crate::error::NavigationError;
use crate::Result;

/// A fetched fragment response: status plus raw markup body.
#[derive(Debug, Clone)]
pub struct FetchedFragment {
    pub status: u16,
    pub body: String,
}

impl FetchedFragment {
    pub fn ok(body: impl Into<String>) -> FetchedFragment {
        FetchedFragment {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait FragmentFetcher: Send + Sync {
    /// Fetch a fragment by resource name. Transport failures are errors;
    /// a non-success status is returned as a normal response and judged by
    /// the caller.
    async fn fetch(&self, resource: &str) -> Result<FetchedFragment>;
}

/// HTTP fetcher resolving fragment names against a base URL.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Result<HttpFetcher> {
        let client = reqwest::Client::builder()
            .redirect(Policy::limited(5))
            .timeout(Duration::from_secs(12))
            .user_agent("Mozilla/5.0 (PatasAmigas SPA)")
            .build()
            .map_err(|e| NavigationError::Network(e.to_string()))?;

        Ok(HttpFetcher { client, base })
    }
}

#[async_trait]
impl FragmentFetcher for HttpFetcher {
    async fn fetch(&self, resource: &str) -> Result<FetchedFragment> {
        let url = self
            .base
            .join(resource)
            .map_err(|e| NavigationError::InvalidUrl(e.to_string()))?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NavigationError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| NavigationError::Network(e.to_string()))?;

        Ok(FetchedFragment { status, body })
    }
}
