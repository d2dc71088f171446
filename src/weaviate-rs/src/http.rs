use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use weaviate_core::{Config, ErrorMessage, ErrorResponse};

use crate::auth::AccessTokenProvider;
use crate::{ClientError, Result};

/// Shared request executor behind every builder
///
/// Endpoints are addressed by path segments below `/v1`, e.g.
/// `&["schema", class_name]`; each segment is percent-encoded on its own.
#[derive(Clone)]
pub(crate) struct Transport {
    http: HttpClient,
    base_url: Url,
    token_provider: Option<Arc<dyn AccessTokenProvider>>,
}

impl Transport {
    pub(crate) fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidRequest(format!("header '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidRequest(format!("header '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let base_url = Url::parse(&config.base_url())
            .map_err(|e| ClientError::InvalidRequest(format!("base url: {}", e)))?;

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token_provider: None,
        })
    }

    pub(crate) fn set_token_provider(&mut self, provider: Arc<dyn AccessTokenProvider>) {
        self.token_provider = Some(provider);
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn url(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidRequest(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Start a request to `path`; callers may add query pairs before
    /// handing it to [`Transport::execute`]
    pub(crate) fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder> {
        Ok(self.http.request(method, self.url(path)?))
    }

    /// Attach the bearer token and send, returning the response whatever its status
    pub(crate) async fn execute(&self, mut request: RequestBuilder) -> Result<Response> {
        if let Some(provider) = &self.token_provider {
            request = request.bearer_auth(provider.access_token().await);
        }
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.http.execute(request).await?;
        debug!(method = %method, url = %url, status = response.status().as_u16(), "Weaviate request");
        Ok(response)
    }

    /// Send a request with an optional JSON body
    pub(crate) async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> Result<Response> {
        let mut request = self.request(method, path)?;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// Decode a 2xx body into `T`
    pub(crate) async fn json<T, B>(&self, method: Method, path: &[&str], body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        read_json(self.send(method, path, body).await?).await
    }

    /// Like [`Transport::json`], but 404 yields `None`
    pub(crate) async fn optional<T, B>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        read_optional(self.send(method, path, body).await?).await
    }

    /// Expect a 2xx and discard the body
    pub(crate) async fn empty<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> Result<()> {
        let response = self.send(method, path, body).await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        return Err(server_error(response).await);
    }
    Ok(response.json().await?)
}

pub(crate) async fn read_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

/// Body-less request marker for the generic helpers
pub(crate) const NO_BODY: Option<&()> = None;

/// Turn a non-2xx response into [`ClientError::Server`]
pub(crate) async fn server_error(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ClientError::Server {
        status,
        messages: parse_error_messages(&body),
    }
}

fn parse_error_messages(body: &str) -> Vec<ErrorMessage> {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ if body.trim().is_empty() => Vec::new(),
        _ => vec![ErrorMessage::new(body.trim())],
    }
}

/// Unwrap a builder field or fail before anything is sent
pub(crate) fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| ClientError::InvalidRequest(format!("{} is required", what)))
}
