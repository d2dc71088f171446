use super::{
    quote, quoted_array, Argument, Ask, Bm25, ExploreField, Fields, Group, Hybrid, NearImage,
    NearObject, NearText, NearVector, QueryError, Sort, WhereFilter,
};

fn render_args(args: &[String]) -> String {
    if args.is_empty() {
        String::new()
    } else {
        format!("({})", args.join(" "))
    }
}

/// `{Get{Class(args){fields}}}`
#[derive(Debug, Clone, Default)]
pub struct GetQuery {
    class_name: Option<String>,
    fields: Fields,
    where_filter: Option<WhereFilter>,
    near_text: Option<NearText>,
    near_object: Option<NearObject>,
    near_vector: Option<NearVector>,
    near_image: Option<NearImage>,
    ask: Option<Ask>,
    bm25: Option<Bm25>,
    hybrid: Option<Hybrid>,
    group: Option<Group>,
    sort: Vec<Sort>,
    limit: Option<u32>,
    offset: Option<u32>,
    after: Option<String>,
}

impl GetQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.where_filter = Some(filter);
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.near_text = Some(near_text);
        self
    }

    pub fn with_near_object(mut self, near_object: NearObject) -> Self {
        self.near_object = Some(near_object);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.near_vector = Some(near_vector);
        self
    }

    pub fn with_near_image(mut self, near_image: NearImage) -> Self {
        self.near_image = Some(near_image);
        self
    }

    pub fn with_ask(mut self, ask: Ask) -> Self {
        self.ask = Some(ask);
        self
    }

    pub fn with_bm25(mut self, bm25: Bm25) -> Self {
        self.bm25 = Some(bm25);
        self
    }

    pub fn with_hybrid(mut self, hybrid: Hybrid) -> Self {
        self.hybrid = Some(hybrid);
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }

    /// Appends a sort criterion; criteria apply in the order given
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
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

    /// Cursor pagination: continue after the object with this id
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(filter) = &self.where_filter {
            args.push(filter.build());
        }
        if let Some(near_text) = &self.near_text {
            args.push(near_text.build());
        }
        if let Some(near_object) = &self.near_object {
            args.push(near_object.build());
        }
        if let Some(near_vector) = &self.near_vector {
            args.push(near_vector.build());
        }
        if let Some(near_image) = &self.near_image {
            args.push(near_image.build());
        }
        if let Some(ask) = &self.ask {
            args.push(ask.build());
        }
        if let Some(bm25) = &self.bm25 {
            args.push(bm25.build());
        }
        if let Some(hybrid) = &self.hybrid {
            args.push(hybrid.build());
        }
        if let Some(group) = &self.group {
            args.push(group.build());
        }
        if !self.sort.is_empty() {
            args.push(self.sort.build());
        }
        if let Some(limit) = self.limit {
            args.push(format!("limit:{}", limit));
        }
        if let Some(offset) = self.offset {
            args.push(format!("offset:{}", offset));
        }
        if let Some(after) = &self.after {
            args.push(format!("after:{}", quote(after)));
        }
        args
    }

    pub fn build(&self) -> Result<String, QueryError> {
        let class_name = self
            .class_name
            .as_deref()
            .ok_or(QueryError::MissingField("class name"))?;
        if self.fields.is_empty() {
            return Err(QueryError::MissingField("fields"));
        }
        Ok(format!(
            "{{Get{{{}{}{{{}}}}}}}",
            class_name,
            render_args(&self.args()),
            self.fields.build()
        ))
    }
}

/// `{Aggregate{Class(args){fields}}}`
#[derive(Debug, Clone, Default)]
pub struct AggregateQuery {
    class_name: Option<String>,
    fields: Fields,
    group_by: Vec<String>,
    where_filter: Option<WhereFilter>,
    near_text: Option<NearText>,
    near_object: Option<NearObject>,
    near_vector: Option<NearVector>,
    object_limit: Option<u32>,
    limit: Option<u32>,
}

impl AggregateQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn with_group_by<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.group_by = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_where(mut self, filter: WhereFilter) -> Self {
        self.where_filter = Some(filter);
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.near_text = Some(near_text);
        self
    }

    pub fn with_near_object(mut self, near_object: NearObject) -> Self {
        self.near_object = Some(near_object);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.near_vector = Some(near_vector);
        self
    }

    /// Caps how many nearest objects a vector search aggregates over
    pub fn with_object_limit(mut self, object_limit: u32) -> Self {
        self.object_limit = Some(object_limit);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.group_by.is_empty() {
            args.push(format!("groupBy:{}", quoted_array(&self.group_by)));
        }
        if let Some(filter) = &self.where_filter {
            args.push(filter.build());
        }
        if let Some(near_text) = &self.near_text {
            args.push(near_text.build());
        }
        if let Some(near_object) = &self.near_object {
            args.push(near_object.build());
        }
        if let Some(near_vector) = &self.near_vector {
            args.push(near_vector.build());
        }
        if let Some(object_limit) = self.object_limit {
            args.push(format!("objectLimit:{}", object_limit));
        }
        if let Some(limit) = self.limit {
            args.push(format!("limit:{}", limit));
        }
        args
    }

    pub fn build(&self) -> Result<String, QueryError> {
        let class_name = self
            .class_name
            .as_deref()
            .ok_or(QueryError::MissingField("class name"))?;
        if self.fields.is_empty() {
            return Err(QueryError::MissingField("fields"));
        }
        Ok(format!(
            "{{Aggregate{{{}{}{{{}}}}}}}",
            class_name,
            render_args(&self.args()),
            self.fields.build()
        ))
    }
}

/// `{Explore(args){fields}}`, a cross-class vector search
#[derive(Debug, Clone, Default)]
pub struct ExploreQuery {
    fields: Vec<ExploreField>,
    near_text: Option<NearText>,
    near_vector: Option<NearVector>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl ExploreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = ExploreField>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn with_near_text(mut self, near_text: NearText) -> Self {
        self.near_text = Some(near_text);
        self
    }

    pub fn with_near_vector(mut self, near_vector: NearVector) -> Self {
        self.near_vector = Some(near_vector);
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

    pub fn build(&self) -> Result<String, QueryError> {
        if self.fields.is_empty() {
            return Err(QueryError::MissingField("fields"));
        }
        if self.near_text.is_none() && self.near_vector.is_none() {
            return Err(QueryError::MissingField("nearText or nearVector"));
        }

        let mut args = Vec::new();
        if let Some(near_text) = &self.near_text {
            args.push(near_text.build());
        }
        if let Some(near_vector) = &self.near_vector {
            args.push(near_vector.build());
        }
        if let Some(limit) = self.limit {
            args.push(format!("limit:{}", limit));
        }
        if let Some(offset) = self.offset {
            args.push(format!("offset:{}", offset));
        }

        let fields: Vec<String> = self.fields.iter().map(ToString::to_string).collect();
        Ok(format!(
            "{{Explore{}{{{}}}}}",
            render_args(&args),
            fields.join(" ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Field, GroupType, Move, SortOrder, WhereOperator};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_without_args() {
        let query = GetQuery::new()
            .with_class_name("Pizza")
            .with_fields(["name", "description"])
            .build()
            .unwrap();
        assert_eq!(query, "{Get{Pizza{name description}}}");
    }

    #[test]
    fn test_get_with_near_text_and_limit() {
        let query = GetQuery::new()
            .with_class_name("Pizza")
            .with_fields(vec![
                Field::new("name"),
                Field::additional(["certainty"]),
            ])
            .with_near_text(
                NearText::new(["Italian"])
                    .move_away_from(Move::new().concepts(["Hawaii"]).force(0.8)),
            )
            .with_limit(10)
            .build()
            .unwrap();
        assert_eq!(
            query,
            concat!(
                r#"{Get{Pizza(nearText:{concepts:["Italian"] moveAwayFrom:{concepts:["Hawaii"] force:0.8}}"#,
                r#" limit:10){name _additional{certainty}}}}"#
            )
        );
    }

    #[test]
    fn test_get_argument_order() {
        // builder call order does not affect rendering order
        let query = GetQuery::new()
            .with_after("00000000-0000-0000-0000-000000000001")
            .with_limit(5)
            .with_sort(Sort::new(["name"]).order(SortOrder::Asc))
            .with_group(Group::new(GroupType::Merge).force(1.0))
            .with_bm25(Bm25::new("cheese"))
            .with_where(
                WhereFilter::new()
                    .path(["name"])
                    .operator(WhereOperator::Equal)
                    .value_string("Hawaii"),
            )
            .with_class_name("Pizza")
            .with_fields(["name"])
            .build()
            .unwrap();
        assert_eq!(
            query,
            concat!(
                r#"{Get{Pizza(where:{operator:Equal path:["name"] valueString:"Hawaii"}"#,
                r#" bm25:{query:"cheese"} group:{type:merge force:1}"#,
                r#" sort:[{path:["name"] order:asc}] limit:5"#,
                r#" after:"00000000-0000-0000-0000-000000000001"){name}}}"#
            )
        );
    }

    #[test]
    fn test_get_requires_class_and_fields() {
        assert_eq!(
            GetQuery::new().with_fields(["name"]).build(),
            Err(QueryError::MissingField("class name"))
        );
        assert_eq!(
            GetQuery::new().with_class_name("Pizza").build(),
            Err(QueryError::MissingField("fields"))
        );
    }

    #[test]
    fn test_aggregate() {
        let query = AggregateQuery::new()
            .with_class_name("Pizza")
            .with_fields(vec![
                Field::new("groupedBy").fields(["value"]),
                Field::new("meta").fields(["count"]),
            ])
            .with_group_by(["name"])
            .with_near_vector(NearVector::new(vec![0.5, 0.5]).certainty(0.7))
            .with_object_limit(100)
            .build()
            .unwrap();
        assert_eq!(
            query,
            concat!(
                r#"{Aggregate{Pizza(groupBy:["name"] nearVector:{vector:[0.5,0.5] certainty:0.7}"#,
                r#" objectLimit:100){groupedBy{value} meta{count}}}}"#
            )
        );
    }

    #[test]
    fn test_aggregate_meta_count() {
        let query = AggregateQuery::new()
            .with_class_name("Soup")
            .with_fields(vec![Field::new("meta").fields(["count"])])
            .build()
            .unwrap();
        assert_eq!(query, "{Aggregate{Soup{meta{count}}}}");
    }

    #[test]
    fn test_explore() {
        let query = ExploreQuery::new()
            .with_fields([ExploreField::Certainty, ExploreField::Beacon, ExploreField::ClassName])
            .with_near_text(NearText::new(["Cheese"]))
            .with_limit(3)
            .build()
            .unwrap();
        assert_eq!(
            query,
            r#"{Explore(nearText:{concepts:["Cheese"]} limit:3){certainty beacon className}}"#
        );
    }

    #[test]
    fn test_explore_requires_near_argument() {
        let result = ExploreQuery::new()
            .with_fields([ExploreField::Beacon])
            .build();
        assert_eq!(result, Err(QueryError::MissingField("nearText or nearVector")));
    }
}
