//! Request and response types of the Weaviate REST and GraphQL APIs.

use serde::{Deserialize, Serialize};

pub mod batch;
pub mod data;
pub mod graphql;
pub mod misc;
pub mod schema;

pub use batch::*;
pub use data::*;
pub use graphql::*;
pub use misc::*;
pub use schema::*;

/// Error body returned by the server, `{"error": [{"message": "..."}]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Vec<ErrorMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
