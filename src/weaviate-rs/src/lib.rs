//! Weaviate Client Library
//!
//! Async HTTP client for the Weaviate REST and GraphQL APIs. Calls are
//! assembled with small builders grouped by API area:
//!
//! ```no_run
//! # async fn demo() -> weaviate_rs::Result<()> {
//! use weaviate_rs::{Client, Config};
//!
//! let client = Client::new(Config::new("http", "localhost:8080"))?;
//! let schema = client.schema().getter().run().await?;
//! println!("{} classes", schema.classes.len());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod batch;
mod client;
pub mod data;
pub mod graphql;
mod http;
pub mod misc;
pub mod schema;

pub use auth::{AccessTokenProvider, ApiKeyProvider, RefreshTokenProvider};
pub use client::Client;
pub use weaviate_core::{query, Config, ErrorMessage};

use weaviate_core::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Server error: {status} - {}", join_messages(.messages))]
    Server {
        status: u16,
        messages: Vec<ErrorMessage>,
    },

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Invalid response from server")]
    InvalidResponse,
}

impl ClientError {
    /// HTTP status of a server-side failure
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn join_messages(messages: &[ErrorMessage]) -> String {
    messages
        .iter()
        .map(|m| m.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, ClientError>;
