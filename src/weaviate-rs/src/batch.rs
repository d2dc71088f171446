//! Bulk import of objects and references, and filtered bulk deletion.

use reqwest::Method;
use tracing::{info, warn};
use weaviate_core::query::WhereFilter;
use weaviate_core::{
    BatchDeleteMatch, BatchDeleteRequest, BatchDeleteResponse, BatchReference,
    BatchReferenceResponse, DeleteOutput, ObjectGetResponse, ObjectsBatchRequest, WeaviateObject,
};

use crate::http::{required, Transport};
use crate::{ClientError, Result};

pub struct Batch {
    transport: Transport,
}

impl Batch {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub fn objects_batcher(&self) -> ObjectsBatcher {
        ObjectsBatcher {
            transport: self.transport.clone(),
            objects: Vec::new(),
        }
    }

    pub fn references_batcher(&self) -> ReferencesBatcher {
        ReferencesBatcher {
            transport: self.transport.clone(),
            references: Vec::new(),
        }
    }

    pub fn objects_batch_deleter(&self) -> ObjectsBatchDeleter {
        ObjectsBatchDeleter {
            transport: self.transport.clone(),
            class_name: None,
            where_filter: None,
            output: None,
            dry_run: None,
        }
    }
}

/// `POST /batch/objects`.
///
/// The call succeeds as a whole even when individual objects are rejected;
/// check each item's [`ObjectGetResponse::errors`].
pub struct ObjectsBatcher {
    transport: Transport,
    objects: Vec<WeaviateObject>,
}

impl ObjectsBatcher {
    pub fn with_object(mut self, object: WeaviateObject) -> Self {
        self.objects.push(object);
        self
    }

    pub fn with_objects(mut self, objects: impl IntoIterator<Item = WeaviateObject>) -> Self {
        self.objects.extend(objects);
        self
    }

    pub async fn run(self) -> Result<Vec<ObjectGetResponse>> {
        if self.objects.is_empty() {
            return Err(ClientError::InvalidRequest("batch has no objects".to_string()));
        }

        let count = self.objects.len();
        let request = ObjectsBatchRequest::new(self.objects);
        let results: Vec<ObjectGetResponse> = self
            .transport
            .json(Method::POST, &["batch", "objects"], Some(&request))
            .await?;

        let failed = results.iter().filter(|r| !r.errors().is_empty()).count();
        if failed > 0 {
            warn!(count, failed, "Batch import finished with object errors");
        } else {
            info!(count, "Batch import finished");
        }
        Ok(results)
    }
}

/// `POST /batch/references`
pub struct ReferencesBatcher {
    transport: Transport,
    references: Vec<BatchReference>,
}

impl ReferencesBatcher {
    pub fn with_reference(mut self, reference: BatchReference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_references(mut self, references: impl IntoIterator<Item = BatchReference>) -> Self {
        self.references.extend(references);
        self
    }

    pub async fn run(self) -> Result<Vec<BatchReferenceResponse>> {
        if self.references.is_empty() {
            return Err(ClientError::InvalidRequest(
                "batch has no references".to_string(),
            ));
        }
        self.transport
            .json(Method::POST, &["batch", "references"], Some(&self.references))
            .await
    }
}

/// `DELETE /batch/objects` for every object of a class matching a filter
pub struct ObjectsBatchDeleter {
    transport: Transport,
    class_name: Option<String>,
    where_filter: Option<WhereFilter>,
    output: Option<DeleteOutput>,
    dry_run: Option<bool>,
}

impl ObjectsBatchDeleter {
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.where_filter = Some(filter);
        self
    }

    pub fn with_output(mut self, output: DeleteOutput) -> Self {
        self.output = Some(output);
        self
    }

    /// Report what would be deleted without deleting it
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = Some(dry_run);
        self
    }

    pub async fn run(self) -> Result<BatchDeleteResponse> {
        let class_name = required(self.class_name, "class name")?;
        let where_filter = required(self.where_filter, "where filter")?;
        let request = BatchDeleteRequest {
            match_: BatchDeleteMatch {
                class_name,
                where_filter,
            },
            output: self.output,
            dry_run: self.dry_run,
        };

        let response: BatchDeleteResponse = self
            .transport
            .json(Method::DELETE, &["batch", "objects"], Some(&request))
            .await?;
        info!(
            class = %request.match_.class_name,
            matches = response.results.matches,
            successful = response.results.successful,
            failed = response.results.failed,
            "Batch delete finished"
        );
        Ok(response)
    }
}
