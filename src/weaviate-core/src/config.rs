use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Connection settings for a Weaviate instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub host: String,

    /// Extra headers sent with every request (e.g. module API keys)
    #[serde(default)]
    pub headers: HashMap<String, String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Static API key, sent as a bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Token pair obtained out of band, kept fresh by the client
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_expires_in() -> u64 {
    300
}

impl Config {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            ..Default::default()
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Build from `WEAVIATE_SCHEME`, `WEAVIATE_HOST` and `WEAVIATE_API_KEY`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(scheme) = std::env::var("WEAVIATE_SCHEME") {
            config.scheme = scheme;
        }
        if let Ok(host) = std::env::var("WEAVIATE_HOST") {
            config.host = host;
        }
        config.api_key = std::env::var("WEAVIATE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        config
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Root of the versioned REST API, e.g. `http://localhost:8080/v1`
    pub fn base_url(&self) -> String {
        format!("{}://{}/v1", self.scheme, self.host.trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.scheme != "http" && self.scheme != "https" {
            return Err(format!("unsupported scheme '{}'", self.scheme));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            host: "localhost:8080".to_string(),
            headers: HashMap::new(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
            auth: None,
        }
    }
}
