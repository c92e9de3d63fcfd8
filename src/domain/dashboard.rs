// Dashboard domain model
use super::cell::DashboardCell;
use super::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardId(pub i64);

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DashboardId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(DashboardId)
    }
}

/// A dashboard exclusively owns its cells; cells have no identity outside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dashboard {
    pub id: DashboardId,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cells: Vec<DashboardCell>,
}

impl Dashboard {
    #[cfg(test)]
    pub fn new(name: String, cells: Vec<DashboardCell>) -> Self {
        Self {
            id: DashboardId::default(),
            name,
            cells,
        }
    }

    /// Position of the cell with the given id
    pub fn cell_index(&self, cell_id: &str) -> Option<usize> {
        self.cells.iter().position(|c| c.id == cell_id)
    }

    pub fn cell(&self, cell_id: &str) -> Option<&DashboardCell> {
        self.cells.iter().find(|c| c.id == cell_id)
    }
}
