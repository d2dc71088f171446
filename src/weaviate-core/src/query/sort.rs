use std::fmt;

use super::{quoted_array, Argument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// One sort criterion; a query's criteria render together as a single
/// `sort:[...]` argument
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    path: Vec<String>,
    order: Option<SortOrder>,
}

impl Sort {
    pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            order: None,
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    fn build_item(&self) -> String {
        let mut parts = vec![format!("path:{}", quoted_array(&self.path))];
        if let Some(order) = self.order {
            parts.push(format!("order:{}", order));
        }
        format!("{{{}}}", parts.join(" "))
    }
}

impl Argument for [Sort] {
    fn build(&self) -> String {
        let items: Vec<String> = self.iter().map(Sort::build_item).collect();
        format!("sort:[{}]", items.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sort() {
        let sorts = [Sort::new(["name"]).order(SortOrder::Desc)];
        assert_eq!(sorts[..].build(), r#"sort:[{path:["name"] order:desc}]"#);
    }

    #[test]
    fn test_multiple_sorts_keep_order() {
        let sorts = vec![
            Sort::new(["name"]).order(SortOrder::Desc),
            Sort::new(["price"]).order(SortOrder::Asc),
            Sort::new(["_creationTimeUnix"]),
        ];
        assert_eq!(
            sorts.build(),
            r#"sort:[{path:["name"] order:desc},{path:["price"] order:asc},{path:["_creationTimeUnix"]}]"#
        );
    }
}
