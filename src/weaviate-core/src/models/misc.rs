use serde::{Deserialize, Serialize};

/// Server metadata from `GET /v1/meta`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub modules: serde_json::Value,
}

/// OIDC discovery pointer from `GET /v1/.well-known/openid-configuration`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenIdConfiguration {
    pub href: String,
    pub client_id: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// The subset of the provider's discovery document the client needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub token_endpoint: String,
}

/// OAuth2 token endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
