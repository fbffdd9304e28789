//! ResQ-X API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    Method, Request,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use resqx_types::ApiResponse;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::error::ResqxError;
use crate::session::SessionContext;
use crate::subscriptions::Subscriptions;
use crate::transform::{BearerAuth, RequestTransform};

/// Header carrying the static dashboard API key.
pub const API_KEY_HEADER: &str = "x-resqx-key";

/// Connect timeout (TCP handshake + TLS).
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request/response time.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the ResQ-X client.
#[derive(Debug, Clone)]
pub struct ResqxConfig {
    /// API root (e.g., "https://api.resqx.net/v1/"). Treated as a directory.
    pub base_url: Url,

    /// Static API key sent as `x-resqx-key` on every request
    pub api_key: String,
}

/// Shared, cheaply clonable client for the ResQ-X API.
///
/// Every request carries the JSON content type and the API key. Before send,
/// bearer auth runs first, then each extra transform in insertion order.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    auth: BearerAuth,
    transforms: Vec<Arc<dyn RequestTransform>>,
}

impl ApiClient {
    /// Create a new client reading its bearer token from `session`.
    ///
    /// # Returns
    /// A configured `ApiClient` or `ResqxError::Config` if the API key is empty,
    /// is not a valid header value, or the base URL cannot hold paths.
    pub fn new(config: ResqxConfig, session: Arc<dyn SessionContext>) -> Result<Self, ResqxError> {
        if config.api_key.is_empty() {
            return Err(ResqxError::Config("api_key is required".into()));
        }

        if config.base_url.cannot_be_a_base() {
            return Err(ResqxError::Config(format!(
                "base_url {} cannot be used as a base",
                config.base_url
            )));
        }

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ResqxError::Config("api_key is not a valid header value".into()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: as_directory(config.base_url),
            auth: BearerAuth::new(session),
            transforms: Vec::new(),
        })
    }

    /// Append a transform to the pre-send chain.
    pub fn with_transform(mut self, transform: impl RequestTransform + 'static) -> Self {
        self.transforms.push(Arc::new(transform));
        self
    }

    /// Same pool and transform chain, different session.
    ///
    /// Used per inbound request when the token lives in that request's cookies.
    pub fn with_session(&self, session: Arc<dyn SessionContext>) -> Self {
        Self {
            auth: BearerAuth::new(session),
            ..self.clone()
        }
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    /// Resolve `path` against the base URL. A leading `/` is ignored; a path
    /// that resolves outside the base (absolute URL, `..` segments) is a
    /// `Config` error, since the request would carry the key and token.
    pub fn url(&self, path: &str) -> Result<Url, ResqxError> {
        let joined = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ResqxError::Config(format!("invalid path {}: {}", path, e)))?;

        if joined.origin() != self.base_url.origin()
            || !joined.path().starts_with(self.base_url.path())
        {
            return Err(ResqxError::Config(format!(
                "path {} resolves outside {}",
                path, self.base_url
            )));
        }
        Ok(joined)
    }

    /// Build a request and run it through the transform chain without sending it.
    ///
    /// Client default headers (`x-resqx-key`, content type) are merged by reqwest
    /// at send time and are not visible here.
    pub fn prepare<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request, ResqxError> {
        let mut builder = self.http.request(method, self.url(path)?);
        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(ResqxError::Encode)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }

        let request = builder
            .build()
            .map_err(|e| ResqxError::Config(format!("failed to build request: {}", e)))?;
        let mut request = self.auth.apply(request)?;
        for transform in &self.transforms {
            request = transform.apply(request)?;
        }
        Ok(request)
    }

    /// Send a request and decode the response envelope.
    ///
    /// Non-2xx responses surface as `ResqxError::Status` with the raw body; no
    /// retries are attempted.
    pub async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ResqxError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.prepare(method, path, body)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "Sending API request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            debug!(%status, "API request failed");
            return Err(ResqxError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ResqxError> {
        self.send::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ResqxError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ResqxError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ResqxError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ResqxError> {
        self.send::<T, ()>(Method::DELETE, path, None).await
    }
}

fn as_directory(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
