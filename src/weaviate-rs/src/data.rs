//! Single-object CRUD and cross-references.

use std::collections::HashMap;

use reqwest::{Method, StatusCode};
use tracing::debug;
use uuid::Uuid;
use weaviate_core::{ObjectReference, ObjectsList, WeaviateObject};

use crate::http::{read_optional, required, server_error, Transport, NO_BODY};
use crate::{ClientError, Result};

type Properties = HashMap<String, serde_json::Value>;

pub struct Data {
    transport: Transport,
}

impl Data {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn creator(&self) -> ObjectCreator {
        ObjectCreator {
            transport: self.transport.clone(),
            object: WeaviateObject::default(),
        }
    }

    pub fn getter(&self) -> ObjectsGetter {
        ObjectsGetter {
            transport: self.transport.clone(),
            id: None,
            class_name: None,
            limit: None,
            offset: None,
            after: None,
            additional: Vec::new(),
        }
    }

    pub fn updater(&self) -> ObjectUpdater {
        ObjectUpdater {
            transport: self.transport.clone(),
            object: WeaviateObject::default(),
            merge: false,
        }
    }

    pub fn deleter(&self) -> ObjectDeleter {
        ObjectDeleter {
            transport: self.transport.clone(),
            id: None,
            class_name: None,
        }
    }

    pub fn checker(&self) -> ObjectChecker {
        ObjectChecker {
            transport: self.transport.clone(),
            id: None,
            class_name: None,
        }
    }

    pub fn validator(&self) -> ObjectValidator {
        ObjectValidator {
            transport: self.transport.clone(),
            object: WeaviateObject::default(),
        }
    }

    pub fn reference_creator(&self) -> ReferenceCreator {
        ReferenceCreator {
            target: ReferenceTarget::new(self.transport.clone()),
            reference: None,
        }
    }

    pub fn reference_replacer(&self) -> ReferenceReplacer {
        ReferenceReplacer {
            target: ReferenceTarget::new(self.transport.clone()),
            references: Vec::new(),
        }
    }

    pub fn reference_deleter(&self) -> ReferenceDeleter {
        ReferenceDeleter {
            target: ReferenceTarget::new(self.transport.clone()),
            reference: None,
        }
    }
}

fn validate_id(id: &str) -> Result<()> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|e| ClientError::InvalidRequest(format!("invalid object id '{}': {}", id, e)))
}

/// `/objects/{class}/{id}`, or the class-less `/objects/{id}` form
fn object_path<'a>(class_name: Option<&'a str>, id: &'a str) -> Vec<&'a str> {
    match class_name {
        Some(class_name) => vec!["objects", class_name, id],
        None => vec!["objects", id],
    }
}

/// `POST /objects`
pub struct ObjectCreator {
    transport: Transport,
    object: WeaviateObject,
}

impl ObjectCreator {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.object.class_name = Some(class_name.into());
        self
    }

    /// Use a caller-chosen UUID instead of a server-generated one
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.object.id = Some(id.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.object.properties = properties;
        self
    }

    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.object.vector = Some(vector);
        self
    }

    pub async fn run(self) -> Result<WeaviateObject> {
        if self.object.class_name.is_none() {
            return Err(ClientError::InvalidRequest("class name is required".to_string()));
        }
        if let Some(id) = &self.object.id {
            validate_id(id)?;
        }
        self.transport
            .json(Method::POST, &["objects"], Some(&self.object))
            .await
    }
}

/// Fetches one object by id, or lists objects page by page
pub struct ObjectsGetter {
    transport: Transport,
    id: Option<String>,
    class_name: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    after: Option<String>,
    additional: Vec<String>,
}

impl ObjectsGetter {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Cursor pagination; requires a class name and no offset
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Request an `_additional` field such as `vector` or `classification`
    pub fn with_additional(mut self, name: impl Into<String>) -> Self {
        self.additional.push(name.into());
        self
    }

    pub fn with_vector(self) -> Self {
        self.with_additional("vector")
    }

    /// Listing parameters apply only without an id; `include` applies to both
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.id.is_none() {
            if let Some(class_name) = &self.class_name {
                pairs.push(("class", class_name.clone()));
            }
            if let Some(limit) = self.limit {
                pairs.push(("limit", limit.to_string()));
            }
            if let Some(offset) = self.offset {
                pairs.push(("offset", offset.to_string()));
            }
            if let Some(after) = &self.after {
                pairs.push(("after", after.clone()));
            }
        }
        if !self.additional.is_empty() {
            pairs.push(("include", self.additional.join(",")));
        }
        pairs
    }

    /// Objects matching the request; a 404 for an id or a class yields an
    /// empty list
    pub async fn run(self) -> Result<Vec<WeaviateObject>> {
        if self.after.is_some() && (self.class_name.is_none() || self.offset.is_some()) {
            return Err(ClientError::InvalidRequest(
                "cursor pagination needs a class name and no offset".to_string(),
            ));
        }

        let path = match &self.id {
            Some(id) => object_path(self.class_name.as_deref(), id),
            None => vec!["objects"],
        };
        let request = self
            .transport
            .request(Method::GET, &path)?
            .query(&self.query_pairs());
        let response = self.transport.execute(request).await?;

        if self.id.is_some() {
            let object: Option<WeaviateObject> = read_optional(response).await?;
            return Ok(object.into_iter().collect());
        }
        let list: Option<ObjectsList> = read_optional(response).await?;
        let objects = list.map(|list| list.objects).unwrap_or_default();
        debug!(count = objects.len(), "Listed objects");
        Ok(objects)
    }
}

/// `PUT` replaces an object; with merge, `PATCH` updates only the given
/// properties
pub struct ObjectUpdater {
    transport: Transport,
    object: WeaviateObject,
    merge: bool,
}

impl ObjectUpdater {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.object.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.object.class_name = Some(class_name.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.object.properties = properties;
        self
    }

    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.object.vector = Some(vector);
        self
    }

    pub fn with_merge(mut self) -> Self {
        self.merge = true;
        self
    }

    pub async fn run(self) -> Result<()> {
        let id = required(self.object.id.as_deref(), "id")?;
        let class_name = required(self.object.class_name.as_deref(), "class name")?;
        validate_id(id)?;

        let path = object_path(Some(class_name), id);
        let method = if self.merge { Method::PATCH } else { Method::PUT };
        self.transport.empty(method, &path, Some(&self.object)).await
    }
}

/// `DELETE /objects/{class}/{id}`
pub struct ObjectDeleter {
    transport: Transport,
    id: Option<String>,
    class_name: Option<String>,
}

impl ObjectDeleter {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub async fn run(self) -> Result<()> {
        let id = required(self.id, "id")?;
        let path = object_path(self.class_name.as_deref(), &id);
        self.transport.empty(Method::DELETE, &path, NO_BODY).await
    }
}

/// `HEAD /objects/{class}/{id}`
pub struct ObjectChecker {
    transport: Transport,
    id: Option<String>,
    class_name: Option<String>,
}

impl ObjectChecker {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub async fn run(self) -> Result<bool> {
        let id = required(self.id, "id")?;
        let path = object_path(self.class_name.as_deref(), &id);
        let response = self.transport.send(Method::HEAD, &path, NO_BODY).await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            _ => Err(server_error(response).await),
        }
    }
}

/// `POST /objects/validate`; an invalid object is a 422 server error
/// carrying the validation messages
pub struct ObjectValidator {
    transport: Transport,
    object: WeaviateObject,
}

impl ObjectValidator {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.object.id = Some(id.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.object.class_name = Some(class_name.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.object.properties = properties;
        self
    }

    pub async fn run(self) -> Result<()> {
        self.transport
            .empty(Method::POST, &["objects", "validate"], Some(&self.object))
            .await
    }
}

/// Source object and property of a reference operation
struct ReferenceTarget {
    transport: Transport,
    id: Option<String>,
    class_name: Option<String>,
    property: Option<String>,
}

impl ReferenceTarget {
    fn new(transport: Transport) -> Self {
        Self {
            transport,
            id: None,
            class_name: None,
            property: None,
        }
    }

    fn path(&self) -> Result<Vec<&str>> {
        let id = required(self.id.as_deref(), "id")?;
        let property = required(self.property.as_deref(), "reference property")?;
        let mut path = object_path(self.class_name.as_deref(), id);
        path.extend(["references", property]);
        Ok(path)
    }
}

macro_rules! reference_target_setters {
    ($builder:ident) => {
        impl $builder {
            pub fn with_id(mut self, id: impl Into<String>) -> Self {
                self.target.id = Some(id.into());
                self
            }

            pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
                self.target.class_name = Some(class_name.into());
                self
            }

            pub fn with_reference_property(mut self, property: impl Into<String>) -> Self {
                self.target.property = Some(property.into());
                self
            }
        }
    };
}

/// `POST /objects/{class}/{id}/references/{property}`
pub struct ReferenceCreator {
    target: ReferenceTarget,
    reference: Option<ObjectReference>,
}

reference_target_setters!(ReferenceCreator);

impl ReferenceCreator {
    pub fn with_reference(mut self, reference: ObjectReference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub async fn run(self) -> Result<()> {
        let path = self.target.path()?;
        let reference = required(self.reference, "reference")?;
        self.target
            .transport
            .empty(Method::POST, &path, Some(&reference))
            .await
    }
}

/// `PUT /objects/{class}/{id}/references/{property}`; replaces the whole list
pub struct ReferenceReplacer {
    target: ReferenceTarget,
    references: Vec<ObjectReference>,
}

reference_target_setters!(ReferenceReplacer);

impl ReferenceReplacer {
    pub fn with_references(mut self, references: Vec<ObjectReference>) -> Self {
        self.references = references;
        self
    }

    pub async fn run(self) -> Result<()> {
        let path = self.target.path()?;
        self.target
            .transport
            .empty(Method::PUT, &path, Some(&self.references))
            .await
    }
}

/// `DELETE /objects/{class}/{id}/references/{property}`
pub struct ReferenceDeleter {
    target: ReferenceTarget,
    reference: Option<ObjectReference>,
}

reference_target_setters!(ReferenceDeleter);

impl ReferenceDeleter {
    pub fn with_reference(mut self, reference: ObjectReference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub async fn run(self) -> Result<()> {
        let path = self.target.path()?;
        let reference = required(self.reference, "reference")?;
        self.target
            .transport
            .empty(Method::DELETE, &path, Some(&reference))
            .await
    }
}
