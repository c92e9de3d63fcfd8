// Dashboard cell domain model
use super::null_as_default;
use super::query_config::{QueryConfig, TimeShift};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Used when a cell arrives without a usable width
pub const DEFAULT_WIDTH: i32 = 4;
/// Used when a cell arrives without a usable height
pub const DEFAULT_HEIGHT: i32 = 4;

pub const DEFAULT_QUERY_TYPE: &str = "influxql";
pub const DEFAULT_NOTE_VISIBILITY: &str = "default";

/// Axis labels a cell may carry
pub const AXIS_LABELS: [&str; 3] = ["x", "y", "y2"];

/// A single visualization widget within a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardCell {
    #[serde(rename = "i")]
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub queries: Vec<DashboardQuery>,
    #[serde(deserialize_with = "null_as_default")]
    pub axes: BTreeMap<String, Axis>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "colors", deserialize_with = "null_as_default")]
    pub cell_colors: Vec<CellColor>,
    pub legend: Legend,
    pub table_options: TableOptions,
    #[serde(deserialize_with = "null_as_default")]
    pub field_options: Vec<RenamableField>,
    pub time_format: String,
    pub decimal_places: DecimalPlaces,
    pub note: String,
    pub note_visibility: String,
}

/// A time-series query attached to a cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardQuery {
    #[serde(rename = "query")]
    pub command: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
    pub query_config: QueryConfig,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Populated from `query_config.shifts` during validation; never on the wire.
    #[serde(skip)]
    pub shifts: Vec<TimeShift>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Axis {
    #[serde(deserialize_with = "null_as_default")]
    pub bounds: Vec<String>,
    pub label: String,
    pub prefix: String,
    pub suffix: String,
    pub base: String,
    pub scale: String,
}

impl Axis {
    /// Axis with open lower and upper bounds
    pub fn unbounded() -> Self {
        Self {
            bounds: vec![String::new(), String::new()],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellColor {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hex: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Legend {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub orientation: String,
}

impl Legend {
    pub fn is_unset(&self) -> bool {
        self.kind.is_empty() && self.orientation.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableOptions {
    pub vertical_time_axis: bool,
    pub sort_by: RenamableField,
    pub wrapping: String,
    pub fix_first_column: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenamableField {
    pub internal_name: String,
    pub display_name: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecimalPlaces {
    pub is_enforced: bool,
    pub digits: i32,
}
