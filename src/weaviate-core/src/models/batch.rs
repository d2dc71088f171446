use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::data::{beacon, property_beacon, WeaviateObject};
use super::ErrorResponse;
use crate::query::WhereFilter;

/// Body of `POST /v1/batch/objects`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectsBatchRequest {
    pub fields: Vec<String>,
    pub objects: Vec<WeaviateObject>,
}

impl ObjectsBatchRequest {
    pub fn new(objects: Vec<WeaviateObject>) -> Self {
        Self {
            fields: vec!["ALL".to_string()],
            objects,
        }
    }
}

/// Per-object outcome of a batch import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectGetResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "class", default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub creation_time_unix: Option<i64>,
    #[serde(default)]
    pub last_update_time_unix: Option<i64>,
    #[serde(default)]
    pub properties: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    #[serde(default)]
    pub result: Option<BatchItemResult>,
}

impl ObjectGetResponse {
    /// Error messages reported for this item, empty when it succeeded
    pub fn errors(&self) -> Vec<&str> {
        self.result
            .as_ref()
            .map(BatchItemResult::messages)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchItemResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorResponse>,
}

impl BatchItemResult {
    pub fn messages(&self) -> Vec<&str> {
        self.errors
            .as_ref()
            .map(|errors| errors.error.iter().map(|e| e.message.as_str()).collect())
            .unwrap_or_default()
    }
}

/// One entry of `POST /v1/batch/references`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchReference {
    pub from: String,
    pub to: String,
}

impl BatchReference {
    /// Link `from_class/from_id.property` to `to_class/to_id`
    pub fn new(
        from_class: &str,
        from_id: &str,
        property: &str,
        to_class: &str,
        to_id: &str,
    ) -> Self {
        Self {
            from: property_beacon(from_class, from_id, property),
            to: beacon(Some(to_class), to_id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReferenceResponse {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub result: Option<BatchItemResult>,
}

/// Verbosity of a batch delete response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeleteOutput {
    #[default]
    Minimal,
    Verbose,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDeleteMatch {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(rename = "where")]
    pub where_filter: WhereFilter,
}

/// Body of `DELETE /v1/batch/objects`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteRequest {
    #[serde(rename = "match")]
    pub match_: BatchDeleteMatch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<DeleteOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteResponse {
    #[serde(rename = "match", default)]
    pub match_: Option<serde_json::Value>,
    #[serde(default)]
    pub output: Option<DeleteOutput>,
    #[serde(default)]
    pub dry_run: Option<bool>,
    #[serde(default)]
    pub results: BatchDeleteResults,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BatchDeleteResults {
    #[serde(default)]
    pub matches: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub successful: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub objects: Vec<BatchDeleteObject>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BatchDeleteObject {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Option<ErrorResponse>,
}
