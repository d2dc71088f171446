//! Weaviate Core Library
//!
//! Transport-independent building blocks for talking to a Weaviate
//! instance:
//! - Connection configuration
//! - Wire models for the REST API (schema, objects, batch, meta)
//! - GraphQL query and argument builders

pub mod config;
pub mod models;
pub mod query;

// Re-export commonly used types
pub use config::{AuthConfig, Config};
pub use models::*;
pub use query::{Argument, QueryError};
