use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{quote, quoted_array, Argument};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WhereOperator {
    And,
    Or,
    Equal,
    NotEqual,
    Like,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    WithinGeoRange,
}

impl fmt::Display for WhereOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WhereOperator::And => "And",
            WhereOperator::Or => "Or",
            WhereOperator::Equal => "Equal",
            WhereOperator::NotEqual => "NotEqual",
            WhereOperator::Like => "Like",
            WhereOperator::GreaterThan => "GreaterThan",
            WhereOperator::GreaterThanEqual => "GreaterThanEqual",
            WhereOperator::LessThan => "LessThan",
            WhereOperator::LessThanEqual => "LessThanEqual",
            WhereOperator::WithinGeoRange => "WithinGeoRange",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f32,
    pub longitude: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoDistance {
    pub max: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoRange {
    pub geo_coordinates: GeoCoordinates,
    pub distance: GeoDistance,
}

impl GeoRange {
    pub fn new(latitude: f32, longitude: f32, max_distance: f32) -> Self {
        Self {
            geo_coordinates: GeoCoordinates {
                latitude,
                longitude,
            },
            distance: GeoDistance { max: max_distance },
        }
    }
}

/// The single comparison value of a leaf filter.
///
/// The variant names double as the JSON keys of the REST filter format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WhereValue {
    #[serde(rename = "valueInt")]
    Int(i64),
    #[serde(rename = "valueNumber")]
    Number(f64),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueString")]
    String(String),
    #[serde(rename = "valueText")]
    Text(String),
    #[serde(rename = "valueDate")]
    Date(DateTime<FixedOffset>),
    #[serde(rename = "valueGeoRange")]
    GeoRange(GeoRange),
}

impl WhereValue {
    fn build(&self) -> String {
        match self {
            WhereValue::Int(v) => format!("valueInt:{}", v),
            WhereValue::Number(v) => format!("valueNumber:{}", v),
            WhereValue::Boolean(v) => format!("valueBoolean:{}", v),
            WhereValue::String(v) => format!("valueString:{}", quote(v)),
            WhereValue::Text(v) => format!("valueText:{}", quote(v)),
            WhereValue::Date(v) => format!(
                "valueDate:{}",
                quote(&v.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            ),
            WhereValue::GeoRange(v) => format!(
                "valueGeoRange:{{geoCoordinates:{{latitude:{},longitude:{}}},distance:{{max:{}}}}}",
                v.geo_coordinates.latitude, v.geo_coordinates.longitude, v.distance.max
            ),
        }
    }
}

/// A `where` filter: either a leaf comparison (`path`, `operator`, value)
/// or a boolean combination of `operands`.
///
/// Renders to GraphQL through [`Argument::build`] and to the REST JSON
/// shape (used by batch delete) through serde.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WhereFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operands: Vec<WhereFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<WhereOperator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(flatten)]
    pub value: Option<WhereValue>,
}

impl WhereFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(operands: impl IntoIterator<Item = WhereFilter>) -> Self {
        Self::combine(WhereOperator::And, operands)
    }

    pub fn or(operands: impl IntoIterator<Item = WhereFilter>) -> Self {
        Self::combine(WhereOperator::Or, operands)
    }

    fn combine(operator: WhereOperator, operands: impl IntoIterator<Item = WhereFilter>) -> Self {
        Self {
            operands: operands.into_iter().collect(),
            operator: Some(operator),
            ..Default::default()
        }
    }

    pub fn path<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn operator(mut self, operator: WhereOperator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn operands(mut self, operands: impl IntoIterator<Item = WhereFilter>) -> Self {
        self.operands = operands.into_iter().collect();
        self
    }

    pub fn value_int(self, value: i64) -> Self {
        self.value(WhereValue::Int(value))
    }

    pub fn value_number(self, value: f64) -> Self {
        self.value(WhereValue::Number(value))
    }

    pub fn value_boolean(self, value: bool) -> Self {
        self.value(WhereValue::Boolean(value))
    }

    pub fn value_string(self, value: impl Into<String>) -> Self {
        self.value(WhereValue::String(value.into()))
    }

    pub fn value_text(self, value: impl Into<String>) -> Self {
        self.value(WhereValue::Text(value.into()))
    }

    pub fn value_date<Tz: TimeZone>(self, value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        self.value(WhereValue::Date(value.with_timezone(&offset)))
    }

    pub fn value_geo_range(self, value: GeoRange) -> Self {
        self.value(WhereValue::GeoRange(value))
    }

    /// Set the comparison value; a later call replaces an earlier one
    pub fn value(mut self, value: WhereValue) -> Self {
        self.value = Some(value);
        self
    }

    fn build_body(&self) -> String {
        let mut parts = Vec::new();
        if !self.operands.is_empty() {
            let operands: Vec<String> = self
                .operands
                .iter()
                .map(|operand| format!("{{{}}}", operand.build_body()))
                .collect();
            parts.push(format!("operands:[{}]", operands.join(",")));
        }
        if let Some(operator) = &self.operator {
            parts.push(format!("operator:{}", operator));
        }
        if !self.path.is_empty() {
            parts.push(format!("path:{}", quoted_array(&self.path)));
        }
        if let Some(value) = &self.value {
            parts.push(value.build());
        }
        parts.join(" ")
    }
}

impl Argument for WhereFilter {
    fn build(&self) -> String {
        format!("where:{{{}}}", self.build_body())
    }
}
