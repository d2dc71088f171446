use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host segment used in beacons; Weaviate resolves it to the local node
const BEACON_HOST: &str = "weaviate://localhost";

/// A data object stored in a class
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeaviateObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time_unix: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time_unix: Option<i64>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub additional: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f32>>,
}

impl WeaviateObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn properties(mut self, properties: HashMap<String, serde_json::Value>) -> Self {
        self.properties = properties;
        self
    }

    pub fn vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = Some(vector);
        self
    }
}

/// Response of `GET /v1/objects`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectsList {
    #[serde(default)]
    pub objects: Vec<WeaviateObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

/// Cross-reference pointer to another object
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ObjectReference {
    /// Reference to `{class}/{id}`
    pub fn to(class_name: &str, id: &str) -> Self {
        Self {
            beacon: Some(beacon(Some(class_name), id)),
            href: None,
        }
    }

    /// Reference by id only (pre class-scoped beacons)
    pub fn to_id(id: &str) -> Self {
        Self {
            beacon: Some(beacon(None, id)),
            href: None,
        }
    }
}

/// Build a beacon URI, `weaviate://localhost/{class}/{id}`
pub fn beacon(class_name: Option<&str>, id: &str) -> String {
    match class_name {
        Some(class_name) => format!("{}/{}/{}", BEACON_HOST, class_name, id),
        None => format!("{}/{}", BEACON_HOST, id),
    }
}

/// Build the `from` side of a batch reference,
/// `weaviate://localhost/{class}/{id}/{property}`
pub fn property_beacon(class_name: &str, id: &str, property: &str) -> String {
    format!("{}/{}/{}/{}", BEACON_HOST, class_name, id, property)
}
