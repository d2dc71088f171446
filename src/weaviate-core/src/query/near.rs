use super::{float_array, object, quote, quoted_array, Argument};

/// An object to move towards or away from in a [`Move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveObject {
    Id(String),
    Beacon(String),
}

impl MoveObject {
    fn build(&self) -> String {
        match self {
            MoveObject::Id(id) => format!("{{id:{}}}", quote(id)),
            MoveObject::Beacon(beacon) => format!("{{beacon:{}}}", quote(beacon)),
        }
    }
}

/// `moveTo` / `moveAwayFrom` parameters of a [`NearText`] search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Move {
    concepts: Vec<String>,
    force: Option<f32>,
    objects: Vec<MoveObject>,
}

impl Move {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concepts<S: Into<String>>(mut self, concepts: impl IntoIterator<Item = S>) -> Self {
        self.concepts = concepts.into_iter().map(Into::into).collect();
        self
    }

    pub fn force(mut self, force: f32) -> Self {
        self.force = Some(force);
        self
    }

    pub fn object(mut self, object: MoveObject) -> Self {
        self.objects.push(object);
        self
    }

    fn build(&self, name: &str) -> String {
        let mut parts = Vec::new();
        if !self.concepts.is_empty() {
            parts.push(format!("concepts:{}", quoted_array(&self.concepts)));
        }
        if let Some(force) = self.force {
            parts.push(format!("force:{}", force));
        }
        if !self.objects.is_empty() {
            let objects: Vec<String> = self.objects.iter().map(MoveObject::build).collect();
            parts.push(format!("objects:[{}]", objects.join(",")));
        }
        object(name, &parts)
    }
}

/// `nearText` vector search by concepts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearText {
    concepts: Vec<String>,
    certainty: Option<f32>,
    distance: Option<f32>,
    move_to: Option<Move>,
    move_away_from: Option<Move>,
    autocorrect: Option<bool>,
}

impl NearText {
    pub fn new<S: Into<String>>(concepts: impl IntoIterator<Item = S>) -> Self {
        Self {
            concepts: concepts.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn certainty(mut self, certainty: f32) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn move_to(mut self, move_to: Move) -> Self {
        self.move_to = Some(move_to);
        self
    }

    pub fn move_away_from(mut self, move_away_from: Move) -> Self {
        self.move_away_from = Some(move_away_from);
        self
    }

    pub fn autocorrect(mut self, autocorrect: bool) -> Self {
        self.autocorrect = Some(autocorrect);
        self
    }
}

impl Argument for NearText {
    fn build(&self) -> String {
        let mut parts = Vec::new();
        if !self.concepts.is_empty() {
            parts.push(format!("concepts:{}", quoted_array(&self.concepts)));
        }
        if let Some(certainty) = self.certainty {
            parts.push(format!("certainty:{}", certainty));
        }
        if let Some(distance) = self.distance {
            parts.push(format!("distance:{}", distance));
        }
        if let Some(move_to) = &self.move_to {
            parts.push(move_to.build("moveTo"));
        }
        if let Some(move_away_from) = &self.move_away_from {
            parts.push(move_away_from.build("moveAwayFrom"));
        }
        if let Some(autocorrect) = self.autocorrect {
            parts.push(format!("autocorrect:{}", autocorrect));
        }
        object("nearText", &parts)
    }
}

/// `nearObject` search seeded by an existing object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearObject {
    id: Option<String>,
    beacon: Option<String>,
    certainty: Option<f32>,
    distance: Option<f32>,
}

impl NearObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn beacon(mut self, beacon: impl Into<String>) -> Self {
        self.beacon = Some(beacon.into());
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
}

impl Argument for NearObject {
    fn build(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = &self.id {
            parts.push(format!("id:{}", quote(id)));
        }
        if let Some(beacon) = &self.beacon {
            parts.push(format!("beacon:{}", quote(beacon)));
        }
        if let Some(certainty) = self.certainty {
            parts.push(format!("certainty:{}", certainty));
        }
        if let Some(distance) = self.distance {
            parts.push(format!("distance:{}", distance));
        }
        object("nearObject", &parts)
    }
}

/// `nearVector` search by a raw embedding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearVector {
    vector: Vec<f32>,
    certainty: Option<f32>,
    distance: Option<f32>,
}

impl NearVector {
    pub fn new(vector: impl Into<Vec<f32>>) -> Self {
        Self {
            vector: vector.into(),
            ..Default::default()
        }
    }

    pub fn certainty(mut self, certainty: f32) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }
}

impl Argument for NearVector {
    fn build(&self) -> String {
        let mut parts = Vec::new();
        if !self.vector.is_empty() {
            parts.push(format!("vector:{}", float_array(&self.vector)));
        }
        if let Some(certainty) = self.certainty {
            parts.push(format!("certainty:{}", certainty));
        }
        if let Some(distance) = self.distance {
            parts.push(format!("distance:{}", distance));
        }
        object("nearVector", &parts)
    }
}

/// `nearImage` search (img2vec modules); the image is base64 encoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearImage {
    image: String,
    certainty: Option<f32>,
    distance: Option<f32>,
}

impl NearImage {
    pub fn new(base64_image: impl Into<String>) -> Self {
        Self {
            image: base64_image.into(),
            ..Default::default()
        }
    }

    pub fn certainty(mut self, certainty: f32) -> Self {
        self.certainty = Some(certainty);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }
}

impl Argument for NearImage {
    fn build(&self) -> String {
        // data URIs are accepted by clients but the server wants the bare payload
        let image = self
            .image
            .split_once(";base64,")
            .map_or(self.image.as_str(), |(_, payload)| payload);

        let mut parts = vec![format!("image:{}", quote(image))];
        if let Some(certainty) = self.certainty {
            parts.push(format!("certainty:{}", certainty));
        }
        if let Some(distance) = self.distance {
            parts.push(format!("distance:{}", distance));
        }
        object("nearImage", &parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_near_text_concepts_only() {
        assert_eq!(
            NearText::new(["pizza"]).build(),
            r#"nearText:{concepts:["pizza"]}"#
        );
    }

    #[test]
    fn test_near_text_with_moves() {
        let near_text = NearText::new(["pineapple slices", "ham"])
            .certainty(0.71)
            .move_to(Move::new().concepts(["Pizza"]).force(0.3))
            .move_away_from(Move::new().concepts(["toast", "bread"]).force(0.4));
        assert_eq!(
            near_text.build(),
            concat!(
                r#"nearText:{concepts:["pineapple slices","ham"] certainty:0.71"#,
                r#" moveTo:{concepts:["Pizza"] force:0.3}"#,
                r#" moveAwayFrom:{concepts:["toast","bread"] force:0.4}}"#
            )
        );
    }

    #[test]
    fn test_near_text_move_objects_and_autocorrect() {
        let near_text = NearText::new(["some say revolution"])
            .distance(0.2)
            .move_to(
                Move::new()
                    .force(0.5)
                    .object(MoveObject::Id("abc".to_string()))
                    .object(MoveObject::Beacon("weaviate://localhost/Pizza/def".to_string())),
            )
            .autocorrect(true);
        assert_eq!(
            near_text.build(),
            concat!(
                r#"nearText:{concepts:["some say revolution"] distance:0.2"#,
                r#" moveTo:{force:0.5 objects:[{id:"abc"},{beacon:"weaviate://localhost/Pizza/def"}]}"#,
                r#" autocorrect:true}"#
            )
        );
    }

    #[test]
    fn test_near_object() {
        let near_object = NearObject::new()
            .id("6baed48e-2afe-4be4-a09d-b00a955d962b")
            .certainty(0.99);
        assert_eq!(
            near_object.build(),
            r#"nearObject:{id:"6baed48e-2afe-4be4-a09d-b00a955d962b" certainty:0.99}"#
        );

        let by_beacon = NearObject::new()
            .beacon("weaviate://localhost/Soup/abc")
            .distance(0.1);
        assert_eq!(
            by_beacon.build(),
            r#"nearObject:{beacon:"weaviate://localhost/Soup/abc" distance:0.1}"#
        );
    }

    #[test]
    fn test_near_vector() {
        let near_vector = NearVector::new(vec![0.1, -0.25, 1.0]).certainty(0.7);
        assert_eq!(
            near_vector.build(),
            "nearVector:{vector:[0.1,-0.25,1] certainty:0.7}"
        );
    }

    #[test]
    fn test_near_image_strips_data_uri() {
        let near_image = NearImage::new("data:image/png;base64,iVBORw0KGgo=").certainty(0.8);
        assert_eq!(
            near_image.build(),
            r#"nearImage:{image:"iVBORw0KGgo=" certainty:0.8}"#
        );
        assert_eq!(
            NearImage::new("iVBORw0KGgo=").build(),
            r#"nearImage:{image:"iVBORw0KGgo="}"#
        );
    }
}
