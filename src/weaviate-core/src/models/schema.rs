use serde::{Deserialize, Serialize};

/// Property data type names understood by Weaviate.
///
/// Kept as plain strings so the server remains the authority on validity.
pub mod data_type {
    pub const STRING: &str = "string";
    pub const TEXT: &str = "text";
    pub const INT: &str = "int";
    pub const NUMBER: &str = "number";
    pub const BOOLEAN: &str = "boolean";
    pub const DATE: &str = "date";
    pub const GEO_COORDINATES: &str = "geoCoordinates";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const BLOB: &str = "blob";
    pub const UUID: &str = "uuid";
    pub const STRING_ARRAY: &str = "string[]";
    pub const TEXT_ARRAY: &str = "text[]";
    pub const INT_ARRAY: &str = "int[]";
    pub const NUMBER_ARRAY: &str = "number[]";
    pub const BOOLEAN_ARRAY: &str = "boolean[]";
    pub const DATE_ARRAY: &str = "date[]";
    pub const UUID_ARRAY: &str = "uuid[]";
}

pub mod tokenization {
    pub const WORD: &str = "word";
    pub const FIELD: &str = "field";
}

/// Full schema as returned by `GET /v1/schema`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
    #[serde(default)]
    pub classes: Vec<WeaviateClass>,
}

/// A class (collection) definition
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeaviateClass {
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverted_index_config: Option<InvertedIndexConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_config: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_index_config: Option<VectorIndexConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sharding_config: Option<ShardingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_index_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectorizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication_config: Option<ReplicationConfig>,
}

impl WeaviateClass {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn vectorizer(mut self, vectorizer: impl Into<String>) -> Self {
        self.vectorizer = Some(vectorizer.into());
        self
    }

    pub fn vector_index_type(mut self, index_type: impl Into<String>) -> Self {
        self.vector_index_type = Some(index_type.into());
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn inverted_index_config(mut self, config: InvertedIndexConfig) -> Self {
        self.inverted_index_config = Some(config);
        self
    }

    pub fn vector_index_config(mut self, config: VectorIndexConfig) -> Self {
        self.vector_index_config = Some(config);
        self
    }

    pub fn sharding_config(mut self, config: ShardingConfig) -> Self {
        self.sharding_config = Some(config);
        self
    }

    pub fn replication_config(mut self, config: ReplicationConfig) -> Self {
        self.replication_config = Some(config);
        self
    }

    pub fn module_config(mut self, config: serde_json::Value) -> Self {
        self.module_config = Some(config);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(default)]
    pub data_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_inverted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_config: Option<serde_json::Value>,
}

impl Property {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: vec![data_type.into()],
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tokenization(mut self, tokenization: impl Into<String>) -> Self {
        self.tokenization = Some(tokenization.into());
        self
    }

    pub fn index_inverted(mut self, index_inverted: bool) -> Self {
        self.index_inverted = Some(index_inverted);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvertedIndexConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bm25: Option<Bm25Config>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<StopwordConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_interval_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_timestamps: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Bm25Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k1: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StopwordConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removals: Vec<String>,
}

/// HNSW tuning knobs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VectorIndexConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_interval_seconds: Option<u32>,
    /// Distance metric: "cosine", "dot", "l2-squared", "manhattan", "hamming"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef_construction: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_cache_max_objects: Option<u64>,
    /// -1 lets the server pick ef dynamically
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ef: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_factor: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_ef_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_search_cutoff: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShardingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_virtual_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_virtual_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_per_physical: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReplicationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<u32>,
}

/// Shard status values accepted by `PUT /schema/{class}/shards/{shard}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShardStatus {
    Ready,
    #[serde(rename = "READONLY")]
    ReadOnly,
}

impl ShardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShardStatus::Ready => "READY",
            ShardStatus::ReadOnly => "READONLY",
        }
    }
}

impl std::fmt::Display for ShardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shard as reported by the server. `status` is kept verbatim since the
/// server also reports transient states such as `INDEXING` or `LOADING`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shard {
    pub name: String,
    pub status: String,
}

impl Shard {
    pub fn status_is(&self, status: ShardStatus) -> bool {
        self.status == status.as_str()
    }
}

/// Body and response of a shard status update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShardStatusUpdate {
    pub status: String,
}

impl From<ShardStatus> for ShardStatusUpdate {
    fn from(status: ShardStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
        }
    }
}
