// REST representations of dashboards and cells
use crate::domain::cell::{
    AXIS_LABELS, Axis, DEFAULT_NOTE_VISIBILITY, DEFAULT_QUERY_TYPE, DashboardCell,
};
use crate::domain::dashboard::{Dashboard, DashboardId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Prefix of every dashboard and cell `self` link
pub const DASHBOARDS_PATH: &str = "/chronograf/v1/dashboards";

#[derive(Debug, Clone, Serialize)]
pub struct CellLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellResponse {
    #[serde(flatten)]
    pub cell: DashboardCell,
    pub links: CellLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub cells: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub id: DashboardId,
    pub name: String,
    pub cells: Vec<CellResponse>,
    pub links: DashboardLinks,
}

/// Normalized copy of `cell` for clients; the stored cell is left as is.
///
/// Every query gets a type, all three axes are present with two bounds each,
/// and the note visibility is filled in.
pub fn cell_response(dashboard_id: DashboardId, cell: &DashboardCell) -> CellResponse {
    let mut cell = cell.clone();

    for query in &mut cell.queries {
        if query.kind.is_empty() {
            query.kind = DEFAULT_QUERY_TYPE.to_string();
        }
    }

    let mut axes: BTreeMap<String, Axis> = cell
        .axes
        .into_iter()
        .map(|(label, mut axis)| {
            if axis.bounds.is_empty() {
                axis.bounds = Axis::unbounded().bounds;
            }
            (label, axis)
        })
        .collect();
    for label in AXIS_LABELS {
        axes.entry(label.to_string()).or_insert_with(Axis::unbounded);
    }
    cell.axes = axes;

    if cell.note_visibility.is_empty() {
        cell.note_visibility = DEFAULT_NOTE_VISIBILITY.to_string();
    }

    let self_link = format!("{}/{}/cells/{}", DASHBOARDS_PATH, dashboard_id, cell.id);
    CellResponse {
        cell,
        links: CellLinks { self_link },
    }
}

pub fn cell_responses(dashboard_id: DashboardId, cells: &[DashboardCell]) -> Vec<CellResponse> {
    cells.iter().map(|c| cell_response(dashboard_id, c)).collect()
}

pub fn dashboard_response(dashboard: &Dashboard) -> DashboardResponse {
    let self_link = format!("{}/{}", DASHBOARDS_PATH, dashboard.id);
    DashboardResponse {
        id: dashboard.id,
        name: dashboard.name.clone(),
        cells: cell_responses(dashboard.id, &dashboard.cells),
        links: DashboardLinks {
            cells: format!("{}/cells", self_link),
            self_link,
        },
    }
}
