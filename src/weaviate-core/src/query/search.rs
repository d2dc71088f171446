use super::{float_array, object, quote, quoted_array, Argument};

/// `ask` question answering (qna modules)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ask {
    question: String,
    properties: Vec<String>,
    certainty: Option<f32>,
    distance: Option<f32>,
    autocorrect: Option<bool>,
    rerank: Option<bool>,
}

impl Ask {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    pub fn properties<S: Into<String>>(mut self, properties: impl IntoIterator<Item = S>) -> Self {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    pub fn certainty(mut self, certainty: f32) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }

    pub fn rerank(mut self, rerank: bool) -> Self {
        self.rerank = Some(rerank);
        self
    }
}

impl Argument for Ask {
    fn build(&self) -> String {
        let mut parts = vec![format!("question:{}", quote(&self.question))];
        if !self.properties.is_empty() {
            parts.push(format!("properties:{}", quoted_array(&self.properties)));
        }
        if let Some(certainty) = self.certainty {
            parts.push(format!("certainty:{}", certainty));
        }
        if let Some(distance) = self.distance {
            parts.push(format!("distance:{}", distance));
        }
        if let Some(autocorrect) = self.autocorrect {
            parts.push(format!("autocorrect:{}", autocorrect));
        }
        if let Some(rerank) = self.rerank {
            parts.push(format!("rerank:{}", rerank));
        }
        object("ask", &parts)
    }
}

/// `bm25` keyword search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bm25 {
    query: String,
    properties: Vec<String>,
}

impl Bm25 {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            properties: Vec::new(),
        }
    }

    pub fn properties<S: Into<String>>(mut self, properties: impl IntoIterator<Item = S>) -> Self {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }
}

impl Argument for Bm25 {
    fn build(&self) -> String {
        let mut parts = vec![format!("query:{}", quote(&self.query))];
        if !self.properties.is_empty() {
            parts.push(format!("properties:{}", quoted_array(&self.properties)));
        }
        object("bm25", &parts)
    }
}

/// `hybrid` search blending bm25 and vector scores by `alpha`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hybrid {
    query: String,
    alpha: Option<f32>,
    vector: Vec<f32>,
}

impl Hybrid {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// 0 is pure keyword search, 1 pure vector search
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn vector(mut self, vector: impl Into<Vec<f32>>) -> Self {
        self.vector = vector.into();
        self
    }
}

impl Argument for Hybrid {
    fn build(&self) -> String {
        let mut parts = vec![format!("query:{}", quote(&self.query))];
        if let Some(alpha) = self.alpha {
            parts.push(format!("alpha:{}", alpha));
        }
        if !self.vector.is_empty() {
            parts.push(format!("vector:{}", float_array(&self.vector)));
        }
        object("hybrid", &parts)
    }
}
