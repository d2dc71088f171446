//! Schema management: classes, properties and shards.

use futures::future::try_join_all;
use reqwest::Method;
use tracing::info;
use weaviate_core::{Property, Schema, Shard, ShardStatus, ShardStatusUpdate, WeaviateClass};

use crate::http::{required, Transport, NO_BODY};
use crate::{ClientError, Result};

pub struct SchemaApi {
    transport: Transport,
}

impl SchemaApi {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn getter(&self) -> SchemaGetter {
        SchemaGetter {
            transport: self.transport.clone(),
        }
    }

    pub fn class_getter(&self) -> ClassGetter {
        ClassGetter {
            transport: self.transport.clone(),
            class_name: None,
        }
    }

    pub fn class_creator(&self) -> ClassCreator {
        ClassCreator {
            transport: self.transport.clone(),
            class: None,
        }
    }

    pub fn class_deleter(&self) -> ClassDeleter {
        ClassDeleter {
            transport: self.transport.clone(),
            class_name: None,
        }
    }

    pub fn all_deleter(&self) -> AllDeleter {
        AllDeleter {
            transport: self.transport.clone(),
        }
    }

    pub fn property_creator(&self) -> PropertyCreator {
        PropertyCreator {
            transport: self.transport.clone(),
            class_name: None,
            property: None,
        }
    }

    pub fn shards_getter(&self) -> ShardsGetter {
        ShardsGetter {
            transport: self.transport.clone(),
            class_name: None,
        }
    }

    pub fn shard_updater(&self) -> ShardUpdater {
        ShardUpdater {
            transport: self.transport.clone(),
            class_name: None,
            shard_name: None,
            status: None,
        }
    }

    pub fn shards_updater(&self) -> ShardsUpdater {
        ShardsUpdater {
            transport: self.transport.clone(),
            class_name: None,
            status: None,
        }
    }
}

/// `GET /schema`
pub struct SchemaGetter {
    transport: Transport,
}

impl SchemaGetter {
    pub async fn run(self) -> Result<Schema> {
        self.transport.json(Method::GET, &["schema"], NO_BODY).await
    }
}

/// `GET /schema/{class}`; `None` when the class does not exist
pub struct ClassGetter {
    transport: Transport,
    class_name: Option<String>,
}

impl ClassGetter {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub async fn run(self) -> Result<Option<WeaviateClass>> {
        let class_name = required(self.class_name, "class name")?;
        self.transport
            .optional(Method::GET, &["schema", class_name.as_str()], NO_BODY)
            .await
    }
}

/// `POST /schema`
pub struct ClassCreator {
    transport: Transport,
    class: Option<WeaviateClass>,
}

impl ClassCreator {
    pub fn with_class(mut self, class: WeaviateClass) -> Self {
        self.class = Some(class);
        self
    }

    pub async fn run(self) -> Result<WeaviateClass> {
        let class = required(self.class, "class")?;
        if class.class_name.is_empty() {
            return Err(ClientError::InvalidRequest("class name is required".to_string()));
        }
        info!(class = %class.class_name, "Creating class");
        self.transport
            .json(Method::POST, &["schema"], Some(&class))
            .await
    }
}

/// `DELETE /schema/{class}`
pub struct ClassDeleter {
    transport: Transport,
    class_name: Option<String>,
}

impl ClassDeleter {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub async fn run(self) -> Result<()> {
        let class_name = required(self.class_name, "class name")?;
        info!(class = %class_name, "Deleting class");
        delete_class(&self.transport, &class_name).await
    }
}

async fn delete_class(transport: &Transport, class_name: &str) -> Result<()> {
    transport
        .empty(Method::DELETE, &["schema", class_name], NO_BODY)
        .await
}

/// Deletes every class in the schema, one request per class.
///
/// Stops at the first failure; classes deleted before it stay deleted.
pub struct AllDeleter {
    transport: Transport,
}

impl AllDeleter {
    pub async fn run(self) -> Result<()> {
        let schema: Schema = self.transport.json(Method::GET, &["schema"], NO_BODY).await?;
        info!(classes = schema.classes.len(), "Deleting all classes");
        for class in &schema.classes {
            delete_class(&self.transport, &class.class_name).await?;
        }
        Ok(())
    }
}

/// `POST /schema/{class}/properties`
pub struct PropertyCreator {
    transport: Transport,
    class_name: Option<String>,
    property: Option<Property>,
}

impl PropertyCreator {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.property = Some(property);
        self
    }

    pub async fn run(self) -> Result<Property> {
        let class_name = required(self.class_name, "class name")?;
        let property = required(self.property, "property")?;
        self.transport
            .json(
                Method::POST,
                &["schema", class_name.as_str(), "properties"],
                Some(&property),
            )
            .await
    }
}

/// `GET /schema/{class}/shards`
pub struct ShardsGetter {
    transport: Transport,
    class_name: Option<String>,
}

impl ShardsGetter {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub async fn run(self) -> Result<Vec<Shard>> {
        let class_name = required(self.class_name, "class name")?;
        get_shards(&self.transport, &class_name).await
    }
}

async fn get_shards(transport: &Transport, class_name: &str) -> Result<Vec<Shard>> {
    transport
        .json(Method::GET, &["schema", class_name, "shards"], NO_BODY)
        .await
}

async fn update_shard(
    transport: &Transport,
    class_name: &str,
    shard_name: &str,
    status: ShardStatus,
) -> Result<ShardStatusUpdate> {
    transport
        .json(
            Method::PUT,
            &["schema", class_name, "shards", shard_name],
            Some(&ShardStatusUpdate::from(status)),
        )
        .await
}

/// `PUT /schema/{class}/shards/{shard}`
pub struct ShardUpdater {
    transport: Transport,
    class_name: Option<String>,
    shard_name: Option<String>,
    status: Option<ShardStatus>,
}

impl ShardUpdater {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_shard_name(mut self, shard_name: impl Into<String>) -> Self {
        self.shard_name = Some(shard_name.into());
        self
    }

    pub fn with_status(mut self, status: ShardStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub async fn run(self) -> Result<ShardStatusUpdate> {
        let class_name = required(self.class_name, "class name")?;
        let shard_name = required(self.shard_name, "shard name")?;
        let status = required(self.status, "status")?;
        update_shard(&self.transport, &class_name, &shard_name, status).await
    }
}

/// Applies one status to every shard of a class
pub struct ShardsUpdater {
    transport: Transport,
    class_name: Option<String>,
    status: Option<ShardStatus>,
}

impl ShardsUpdater {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_status(mut self, status: ShardStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub async fn run(self) -> Result<Vec<Shard>> {
        let class_name = required(self.class_name, "class name")?;
        let status = required(self.status, "status")?;

        let shards = get_shards(&self.transport, &class_name).await?;
        let updates = shards
            .iter()
            .map(|shard| update_shard(&self.transport, &class_name, &shard.name, status));
        let results = try_join_all(updates).await?;

        let updated: Vec<Shard> = shards
            .into_iter()
            .zip(results)
            .map(|(shard, result)| Shard {
                name: shard.name,
                status: result.status,
            })
            .collect();
        info!(class = %class_name, shards = updated.len(), ?status, "Updated shard status");
        Ok(updated)
    }
}
