use serde::{Deserialize, Serialize};

/// Body of `POST /v1/graphql`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLQuery {
    pub query: String,
}

/// GraphQL response; `data` is left untyped since its shape follows the query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Result list at `data.<operation>.<class_name>`, e.g. `("Get", "Pizza")`
    pub fn objects(&self, operation: &str, class_name: &str) -> Option<&Vec<serde_json::Value>> {
        self.data
            .as_ref()?
            .get(operation)?
            .get(class_name)?
            .as_array()
    }

    /// Result list of an Explore query
    pub fn explore(&self) -> Option<&Vec<serde_json::Value>> {
        self.data.as_ref()?.get("Explore")?.as_array()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<PathSegment>,
    #[serde(default)]
    pub locations: Vec<GraphQLErrorLocation>,
}

/// One step of an error path: a field name, or an index into a result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(u64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphQLErrorLocation {
    pub line: u32,
    pub column: u32,
}
