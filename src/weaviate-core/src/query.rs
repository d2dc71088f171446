//! Client-side assembly of GraphQL query strings.
//!
//! Every argument renders itself into a textual fragment such as
//! `nearText:{concepts:["pizza"] certainty:0.7}`. The query builders in
//! [`builder`] stitch fragments and [`Field`] selections into complete
//! `Get`, `Aggregate` and `Explore` queries.

pub mod builder;
pub mod fields;
pub mod filter;
pub mod group;
pub mod near;
pub mod search;
pub mod sort;

pub use builder::{AggregateQuery, ExploreQuery, GetQuery};
pub use fields::{ExploreField, Field, Fields};
pub use filter::{GeoCoordinates, GeoDistance, GeoRange, WhereFilter, WhereOperator, WhereValue};
pub use group::{Group, GroupType};
pub use near::{Move, MoveObject, NearImage, NearObject, NearText, NearVector};
pub use search::{Ask, Bm25, Hybrid};
pub use sort::{Sort, SortOrder};

/// A GraphQL query argument that renders to a textual fragment
pub trait Argument {
    fn build(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Double-quote a string, escaping characters GraphQL treats specially
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `["a","b"]`
pub(crate) fn quoted_array<S: AsRef<str>>(values: &[S]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(v.as_ref())).collect();
    format!("[{}]", items.join(","))
}

/// `[0.1,0.2]`
pub(crate) fn float_array(values: &[f32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// Render `name:{parts...}`, skipping nothing; callers only push present parts
pub(crate) fn object(name: &str, parts: &[String]) -> String {
    format!("{}:{{{}}}", name, parts.join(" "))
}
