use std::fmt;

/// A selected field, optionally with nested sub-selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    fields: Vec<Field>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields<F: Into<Field>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// `_additional { ... }` selection
    pub fn additional<F: Into<Field>>(fields: impl IntoIterator<Item = F>) -> Self {
        Self::new("_additional").fields(fields)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(&self) -> String {
        if self.fields.is_empty() {
            self.name.clone()
        } else {
            format!("{}{{{}}}", self.name, Fields::join(&self.fields))
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::new(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::new(name)
    }
}

/// A selection set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(pub Vec<Field>);

impl Fields {
    pub fn new<F: Into<Field>>(fields: impl IntoIterator<Item = F>) -> Self {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn build(&self) -> String {
        Self::join(&self.0)
    }

    fn join(fields: &[Field]) -> String {
        let rendered: Vec<String> = fields.iter().map(Field::build).collect();
        rendered.join(" ")
    }
}

impl<F: Into<Field>> From<Vec<F>> for Fields {
    fn from(fields: Vec<F>) -> Self {
        Fields::new(fields)
    }
}

impl<F: Into<Field>, const N: usize> From<[F; N]> for Fields {
    fn from(fields: [F; N]) -> Self {
        Fields::new(fields)
    }
}

/// Fields available on Explore results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreField {
    Certainty,
    Distance,
    Beacon,
    ClassName,
}

impl fmt::Display for ExploreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExploreField::Certainty => "certainty",
            ExploreField::Distance => "distance",
            ExploreField::Beacon => "beacon",
            ExploreField::ClassName => "className",
        };
        f.write_str(name)
    }
}
