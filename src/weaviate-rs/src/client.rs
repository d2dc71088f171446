use std::sync::Arc;

use tracing::info;
use weaviate_core::Config;

use crate::auth::{self, AccessTokenProvider, ApiKeyProvider, RefreshTokenProvider};
use crate::batch::Batch;
use crate::data::Data;
use crate::graphql::GraphQL;
use crate::http::Transport;
use crate::misc::Misc;
use crate::schema::SchemaApi;
use crate::{ClientError, Result};

/// Weaviate REST and GraphQL API client
#[derive(Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client for the configured instance.
    ///
    /// A configured API key, or a static access token, is sent as a bearer
    /// token. Use [`Client::connect`] to keep an expiring token refreshed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(ClientError::InvalidRequest)?;

        let mut transport = Transport::new(&config)?;
        if let Some(api_key) = &config.api_key {
            transport.set_token_provider(Arc::new(ApiKeyProvider::new(api_key.clone())));
        } else if let Some(auth) = &config.auth {
            transport.set_token_provider(Arc::new(ApiKeyProvider::new(auth.access_token.clone())));
        }

        Ok(Self { transport })
    }

    /// Create a client and, when the config carries a refresh token, start
    /// refreshing it against the instance's OIDC provider
    pub async fn connect(config: Config) -> Result<Self> {
        let client = Self::new(config.clone())?;

        let Some(auth) = config.auth.filter(|_| config.api_key.is_none()) else {
            return Ok(client);
        };
        let Some(refresh_token) = auth.refresh_token else {
            return Ok(client);
        };

        let (token_endpoint, discovered_client_id) =
            auth::discover_token_endpoint(&client.transport)
                .await?
                .ok_or_else(|| {
                    ClientError::Auth("instance does not advertise an OIDC provider".to_string())
                })?;
        let client_id = auth.client_id.unwrap_or(discovered_client_id);

        info!(host = %config.host, "Starting access token refresh");
        let provider = RefreshTokenProvider::start(
            client.transport.http().clone(),
            token_endpoint,
            client_id,
            auth.access_token,
            refresh_token,
            auth.expires_in,
        );

        Ok(client.with_token_provider(Arc::new(provider)))
    }

    /// Replace the bearer token source
    pub fn with_token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.transport.set_token_provider(provider);
        self
    }

    pub fn misc(&self) -> Misc {
        Misc::new(self.transport.clone())
    }

    pub fn schema(&self) -> SchemaApi {
        SchemaApi::new(self.transport.clone())
    }

    pub fn data(&self) -> Data {
        Data::new(self.transport.clone())
    }

    pub fn batch(&self) -> Batch {
        Batch::new(self.transport.clone())
    }

    pub fn graphql(&self) -> GraphQL {
        GraphQL::new(self.transport.clone())
    }
}
