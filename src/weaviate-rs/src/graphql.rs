//! GraphQL queries. `Get`, `Aggregate` and `Explore` render their query
//! client-side and post it like a [`Raw`] query.
//!
//! A response carrying GraphQL `errors` is still returned as `Ok`; inspect
//! [`GraphQLResponse::errors`].

use reqwest::Method;
use tracing::{debug, warn};
use weaviate_core::query::{
    AggregateQuery, Ask, Bm25, ExploreField, ExploreQuery, Fields, GetQuery, Group, Hybrid,
    NearImage, NearObject, NearText, NearVector, Sort, WhereFilter,
};
use weaviate_core::{GraphQLQuery, GraphQLResponse};

use crate::http::{required, Transport};
use crate::Result;

pub struct GraphQL {
    transport: Transport,
}

impl GraphQL {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn raw(&self) -> Raw {
        Raw {
            transport: self.transport.clone(),
            query: None,
        }
    }

    pub fn get(&self) -> Get {
        Get {
            transport: self.transport.clone(),
            query: GetQuery::new(),
        }
    }

    pub fn aggregate(&self) -> Aggregate {
        Aggregate {
            transport: self.transport.clone(),
            query: AggregateQuery::new(),
        }
    }

    pub fn explore(&self) -> Explore {
        Explore {
            transport: self.transport.clone(),
            query: ExploreQuery::new(),
        }
    }
}

async fn post_query(transport: &Transport, query: String) -> Result<GraphQLResponse> {
    debug!(query = %query, "GraphQL query");
    let response: GraphQLResponse = transport
        .json(Method::POST, &["graphql"], Some(&GraphQLQuery { query }))
        .await?;
    if let Some(errors) = &response.errors {
        warn!(errors = errors.len(), "GraphQL query returned errors");
    }
    Ok(response)
}

/// `POST /graphql` with a hand-written query
pub struct Raw {
    transport: Transport,
    query: Option<String>,
}

impl Raw {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub async fn run(self) -> Result<GraphQLResponse> {
        let query = required(self.query, "query")?;
        post_query(&self.transport, query).await
    }
}

/// `{Get{...}}`
pub struct Get {
    transport: Transport,
    query: GetQuery,
}

impl Get {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.query = self.query.with_class_name(class_name);
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.query = self.query.with_fields(fields);
        self
    }

    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.query = self.query.with_where(filter);
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.query = self.query.with_near_text(near_text);
        self
    }

    pub fn with_near_object(mut self, near_object: NearObject) -> Self {
        self.query = self.query.with_near_object(near_object);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.query = self.query.with_near_vector(near_vector);
        self
    }

    pub fn with_near_image(mut self, near_image: NearImage) -> Self {
        self.query = self.query.with_near_image(near_image);
        self
    }

    pub fn with_ask(mut self, ask: Ask) -> Self {
        self.query = self.query.with_ask(ask);
        self
    }

    pub fn with_bm25(mut self, bm25: Bm25) -> Self {
        self.query = self.query.with_bm25(bm25);
        self
    }

    pub fn with_hybrid(mut self, hybrid: Hybrid) -> Self {
        self.query = self.query.with_hybrid(hybrid);
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.query = self.query.with_group(group);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.query = self.query.with_sort(sort);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.query = self.query.with_limit(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.query = self.query.with_offset(offset);
        self
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.query = self.query.with_after(after);
        self
    }

    /// The query text that [`Get::run`] would send
    pub fn build(&self) -> Result<String> {
        Ok(self.query.build()?)
    }

    pub async fn run(self) -> Result<GraphQLResponse> {
        let query = self.build()?;
        post_query(&self.transport, query).await
    }
}

/// `{Aggregate{...}}`
pub struct Aggregate {
    transport: Transport,
    query: AggregateQuery,
}

impl Aggregate {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.query = self.query.with_class_name(class_name);
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.query = self.query.with_fields(fields);
        self
    }

    pub fn with_group_by<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.query = self.query.with_group_by(path);
        self
    }

    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.query = self.query.with_where(filter);
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.query = self.query.with_near_text(near_text);
        self
    }

    pub fn with_near_object(mut self, near_object: NearObject) -> Self {
        self.query = self.query.with_near_object(near_object);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.query = self.query.with_near_vector(near_vector);
        self
    }

    pub fn with_object_limit(mut self, object_limit: u32) -> Self {
        self.query = self.query.with_object_limit(object_limit);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.query = self.query.with_limit(limit);
        self
    }

    pub fn build(&self) -> Result<String> {
        Ok(self.query.build()?)
    }

    pub async fn run(self) -> Result<GraphQLResponse> {
        let query = self.build()?;
        post_query(&self.transport, query).await
    }
}

/// `{Explore(...){...}}`
pub struct Explore {
    transport: Transport,
    query: ExploreQuery,
}

impl Explore {
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = ExploreField>) -> Self {
        self.query = self.query.with_fields(fields);
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.query = self.query.with_near_text(near_text);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.query = self.query.with_near_vector(near_vector);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.query = self.query.with_limit(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.query = self.query.with_offset(offset);
        self
    }

    pub fn build(&self) -> Result<String> {
        Ok(self.query.build()?)
    }

    pub async fn run(self) -> Result<GraphQLResponse> {
        let query = self.build()?;
        post_query(&self.transport, query).await
    }
}
