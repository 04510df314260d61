//! HTTP fetch raced against a timeout

use reqwest::{Client, Method, Response};
use serde::Deserialize;
use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;
use trinkets_common::LoggingTransformer;

/// Fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The timer fired before the operation completed
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// The method string is not a valid HTTP method
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// Building, sending or reading the request failed
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<FetchError> for trinkets_common::Error {
    fn from(e: FetchError) -> Self {
        let kind = match e {
            FetchError::Timeout(_) => trinkets_common::ErrorKind::Timeout,
            FetchError::InvalidMethod(_) => trinkets_common::ErrorKind::Validation,
            FetchError::Request(_) => trinkets_common::ErrorKind::Network,
        };
        trinkets_common::Error::with_source(kind, e)
    }
}

/// Request settings for [`fetch`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    /// HTTP method, case-insensitive
    pub method: String,
    /// Headers in insertion order
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: Option<String>,
    /// Timeout in milliseconds; `None` waits indefinitely
    pub timeout_ms: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            headers: Vec::new(),
            body: None,
            timeout_ms: None,
        }
    }
}

impl FetchOptions {
    /// A GET with no timeout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Append a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// The timeout as a `Duration`
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Race `fut` against a timer
///
/// With `None` the future simply runs to completion. On timeout the future
/// is dropped, which cancels whatever it was doing.
///
/// # Errors
///
/// Returns `FetchError::Timeout` if the timer fires first.
pub async fn with_timeout<F>(fut: F, timeout: Option<Duration>) -> Result<F::Output, FetchError>
where
    F: Future,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| FetchError::Timeout(limit)),
        None => Ok(fut.await),
    }
}

/// Send a request to `url` with a fresh client
///
/// Non-success status codes are returned as responses, not errors.
///
/// # Errors
///
/// See [`fetch_with_client`]; also fails if the client cannot be built.
pub async fn fetch(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    let client = Client::builder().build()?;
    fetch_with_client(&client, url, options).await
}

/// Send a request to `url` with a caller-supplied client
///
/// # Errors
///
/// - `FetchError::InvalidMethod` for an unparseable method
/// - `FetchError::Timeout` if the response headers do not arrive in time
/// - `FetchError::Request` for connection, header or protocol failures
pub async fn fetch_with_client(
    client: &Client,
    url: &str,
    options: &FetchOptions,
) -> Result<Response, FetchError> {
    let method = Method::from_bytes(options.method.to_ascii_uppercase().as_bytes())
        .map_err(|_| FetchError::InvalidMethod(options.method.clone()))?;

    let mut request = client.request(method.clone(), url);
    for (name, value) in &options.headers {
        request = request.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &options.body {
        request = request.body(body.clone());
    }

    let started = Instant::now();
    let outcome = match with_timeout(request.send(), options.timeout_duration()).await {
        Ok(sent) => sent.map_err(FetchError::from),
        Err(e) => {
            tracing::warn!(%method, url, "fetch timed out");
            Err(e)
        }
    };
    LoggingTransformer::log_performance_metric("fetch", started.elapsed(), outcome.is_ok());
    let response = outcome?;
    LoggingTransformer::log_network_operation(
        method.as_str(),
        url,
        Some(response.status().as_u16()),
    );
    Ok(response)
}
