//! HTTP provider fetching.
//!
//! Executes [`FetchRequest`]s with a blocking client and supports
//! ETag-based conditional requests.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use std::time::Duration;

use crate::cache::{Origin, OriginResponse};
use crate::config::HttpSettings;
use crate::error::{GistError, Result};
use crate::registry::strategy::FetchRequest;

/// Fetches provider documents over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

/// Response from a successful fetch.
#[derive(Debug)]
pub struct FetchResponse {
    /// The response body.
    pub content: String,
    /// ETag header if present.
    pub etag: Option<String>,
    /// Last-Modified header if present.
    pub last_modified: Option<String>,
}

impl HttpFetcher {
    /// Create a fetcher from HTTP settings.
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let timeout = settings.timeout();
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(timeout)
            .build()
            .map_err(|e| GistError::Other(anyhow::anyhow!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn prepare(&self, request: &FetchRequest) -> RequestBuilder {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some((user, password)) = &request.basic_auth {
            builder = builder.basic_auth(user, password.as_deref());
        }
        builder
    }

    /// Fetch unconditionally.
    pub fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse> {
        match self.fetch_if_changed(request, None)? {
            Some(response) => Ok(response),
            None => Err(fetch_error(&request.url, "HTTP 304 without a validator")),
        }
    }

    /// Fetch with conditional request (If-None-Match).
    ///
    /// Returns `None` if content unchanged (304 Not Modified).
    pub fn fetch_if_changed(
        &self,
        request: &FetchRequest,
        etag: Option<&str>,
    ) -> Result<Option<FetchResponse>> {
        let mut builder = self.prepare(request);

        if let Some(etag) = etag {
            builder = builder.header("If-None-Match", etag);
        }

        tracing::debug!("GET {} (validator: {:?})", request.url, etag);
        let response = builder
            .send()
            .map_err(|e| fetch_error(&request.url, e.to_string()))?;

        if response.status() == StatusCode::NOT_MODIFIED {
            tracing::debug!("{} not modified", request.url);
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(fetch_error(&request.url, format!("HTTP {}", response.status())));
        }

        let new_etag = header_value(&response, "etag");
        let last_modified = header_value(&response, "last-modified");

        let content = response
            .text()
            .map_err(|e| fetch_error(&request.url, e.to_string()))?;

        Ok(Some(FetchResponse {
            content,
            etag: new_etag,
            last_modified,
        }))
    }
}

fn header_value(response: &reqwest::blocking::Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

fn fetch_error(url: &str, message: impl Into<String>) -> GistError {
    GistError::Fetch {
        url: url.to_string(),
        message: message.into(),
    }
}

/// One provider request bound to a fetcher, usable as a cache origin.
#[derive(Debug, Clone, Copy)]
pub struct HttpOrigin<'a> {
    fetcher: &'a HttpFetcher,
    request: &'a FetchRequest,
}

impl<'a> HttpOrigin<'a> {
    /// Bind a request to a fetcher.
    pub fn new(fetcher: &'a HttpFetcher, request: &'a FetchRequest) -> Self {
        Self { fetcher, request }
    }
}

impl Origin for HttpOrigin<'_> {
    fn fetch(&self, validator: Option<&str>) -> Result<OriginResponse> {
        Ok(match self.fetcher.fetch_if_changed(self.request, validator)? {
            None => OriginResponse::NotModified,
            Some(response) => OriginResponse::Modified {
                body: response.content,
                etag: response.etag,
            },
        })
    }
}
