// Query builder configuration attached to each dashboard query
use super::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured representation of a query as built in the query editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryConfig {
    pub id: String,
    pub database: String,
    pub measurement: String,
    pub retention_policy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: BTreeMap<String, Vec<String>>,
    pub group_by: GroupBy,
    pub are_tags_accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    pub raw_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<DurationRange>,
    #[serde(deserialize_with = "null_as_default")]
    pub shifts: Vec<TimeShift>,
}

/// A selected field or function call; functions nest their arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    pub value: serde_json::Value,
    #[serde(rename = "type")]
    pub kind: String,
    pub alias: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub args: Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupBy {
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationRange {
    pub upper: String,
    pub lower: String,
}

/// Compare the query against an earlier window, e.g. "1 week ago".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeShift {
    pub label: String,
    pub unit: String,
    pub quantity: String,
}
