//! Bearer token sources for authenticated Weaviate instances.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::sync::{Notify, RwLock};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, info, warn};
use weaviate_core::{OpenIdConfiguration, ProviderMetadata, TokenResponse};

use crate::http::{server_error, Transport, NO_BODY};
use crate::{ClientError, Result};

/// Seconds before expiry at which a token is refreshed
const REFRESH_MARGIN_SECS: u64 = 2;

/// Supplies the bearer token attached to every request
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> String;
}

/// A fixed token, typically a Weaviate API key
#[derive(Debug, Clone)]
pub struct ApiKeyProvider {
    api_key: String,
}

impl ApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for ApiKeyProvider {
    async fn access_token(&self) -> String {
        self.api_key.clone()
    }
}

#[derive(Debug, Clone)]
struct TokenState {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
}

/// How long to wait before refreshing a token that lives `expires_in` seconds
pub fn refresh_period(expires_in: u64) -> Duration {
    Duration::from_secs(expires_in.saturating_sub(REFRESH_MARGIN_SECS).max(1))
}

/// Keeps an OIDC access token fresh using its refresh token.
///
/// A background task wakes shortly before the token expires and exchanges
/// the refresh token at the provider's token endpoint. A failed exchange
/// keeps the current token and is retried on the next tick.
pub struct RefreshTokenProvider {
    state: Arc<RwLock<TokenState>>,
    shutdown: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl RefreshTokenProvider {
    /// Start refreshing against `token_endpoint`
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime, since the refresh loop
    /// is spawned onto the current one.
    pub fn start(
        http: HttpClient,
        token_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: u64,
    ) -> Self {
        let state = Arc::new(RwLock::new(TokenState {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_in,
        }));
        let shutdown = Arc::new(Notify::new());

        let refresher = Refresher {
            http,
            token_endpoint: token_endpoint.into(),
            client_id: client_id.into(),
            state: state.clone(),
        };
        let handle = tokio::spawn(refresher.run(shutdown.clone()));

        Self {
            state,
            shutdown,
            handle,
        }
    }

    /// Signal the refresh task to exit; the current token stays usable
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }

    /// Whether the refresh task is still alive
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

#[async_trait]
impl AccessTokenProvider for RefreshTokenProvider {
    async fn access_token(&self) -> String {
        self.state.read().await.access_token.clone()
    }
}

impl Drop for RefreshTokenProvider {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Refresher {
    http: HttpClient,
    token_endpoint: String,
    client_id: String,
    state: Arc<RwLock<TokenState>>,
}

impl Refresher {
    async fn run(self, shutdown: Arc<Notify>) {
        info!(endpoint = %self.token_endpoint, "Token refresh task started");

        loop {
            let period = refresh_period(self.state.read().await.expires_in);
            tokio::select! {
                _ = shutdown.notified() => {
                    info!("Token refresh task stopped");
                    break;
                }
                _ = time::sleep(period) => {
                    if let Err(e) = self.refresh().await {
                        warn!(error = %e, "Token refresh failed, keeping current token");
                    }
                }
            }
        }
    }

    async fn refresh(&self) -> Result<()> {
        let refresh_token = self.state.read().await.refresh_token.clone();
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", self.client_id.as_str()),
            ("refresh_token", refresh_token.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_endpoint)
            .form(&form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }
        let token: TokenResponse = response.json().await?;

        let mut state = self.state.write().await;
        state.access_token = token.access_token;
        if let Some(refresh_token) = token.refresh_token {
            state.refresh_token = refresh_token;
        }
        if let Some(expires_in) = token.expires_in {
            state.expires_in = expires_in;
        }
        debug!(expires_in = state.expires_in, "Access token refreshed");
        Ok(())
    }
}

/// Resolve the OIDC token endpoint advertised by a Weaviate instance.
///
/// Returns the client id Weaviate expects alongside the endpoint, or
/// `None` when the instance has authentication disabled.
pub(crate) async fn discover_token_endpoint(
    transport: &Transport,
) -> Result<Option<(String, String)>> {
    let openid: Option<OpenIdConfiguration> = transport
        .optional(
            reqwest::Method::GET,
            &[".well-known", "openid-configuration"],
            NO_BODY,
        )
        .await?;
    let Some(openid) = openid else {
        return Ok(None);
    };

    let response = transport.http().get(&openid.href).send().await?;
    if !response.status().is_success() {
        return Err(ClientError::Auth(format!(
            "fetching provider metadata from {} returned {}",
            openid.href,
            response.status()
        )));
    }
    let metadata: ProviderMetadata = response.json().await?;
    debug!(token_endpoint = %metadata.token_endpoint, "Discovered token endpoint");

    Ok(Some((metadata.token_endpoint, openid.client_id)))
}
