//! Low-level JSON-over-HTTP client built on the `hyper-util` pooled client.

use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{header, Request, Uri};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde::de::DeserializeOwned;

/// Transport-level failure. Views catch these at the call site and fall back
/// to a "could not load" state.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The backend answered with a status outside `200..=299`.
    #[error("API error {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("failed to read response body: {0}")]
    Body(#[from] hyper::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("response is not the expected JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// The HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// JSON `GET` client bound to one backend base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client<HttpConnector, Empty<Bytes>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `base_url`. A trailing `/` is dropped so that
    /// `base_url + "/path"` never doubles the slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder(TokioExecutor::new()).build_http();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET base_url + path` and decode the body as `T`.
    ///
    /// Use `serde_json::Value` for `T` when the payload shape is not trusted
    /// and will be normalised by the caller.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let uri: Uri = url.parse().map_err(|e: hyper::http::uri::InvalidUri| {
            ClientError::InvalidUrl {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        let request = Request::get(uri)
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())?;

        tracing::debug!(%url, "GET");
        let response = self.http.request(request).await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "non-success response");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.into_body().collect().await?.to_bytes();
        tracing::debug!(%url, bytes = body.len(), "response body read");
        Ok(serde_json::from_slice(&body)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
