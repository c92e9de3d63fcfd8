// Validation rules for dashboard cells
//
// Checks run in a fixed order and stop at the first failure. Several of them
// also normalize the cell in place, and those changes stay even when a later
// check rejects the cell.
use crate::domain::cell::{
    AXIS_LABELS, DEFAULT_HEIGHT, DEFAULT_NOTE_VISIBILITY, DEFAULT_QUERY_TYPE, DEFAULT_WIDTH,
    DashboardCell,
};
use crate::domain::errors::CellError;
use crate::domain::query_config::{Field, QueryConfig};

const AXIS_SCALES: &[&str] = &["linear", "log", ""];
const AXIS_BASES: &[&str] = &["10", "2", "", "raw"];
const COLOR_TYPES: &[&str] = &["max", "min", "threshold", "text", "background", "scale"];
const LEGEND_ORIENTATIONS: &[&str] = &["top", "bottom", "right", "left"];
const LEGEND_TYPES: &[&str] = &["static"];
const QUERY_TYPES: &[&str] = &["influxql", "flux"];
const NOTE_VISIBILITIES: &[&str] = &["default", "showWhenNoData"];
const FIELD_TYPES: &[&str] = &["func", "field", "integer", "number", "regex", "wildcard"];

/// Length of a `#RRGGBB` color
const HEX_COLOR_LEN: usize = 7;

/// Validate a cell submitted by a client, normalizing it along the way.
pub fn valid_dashboard_cell_request(cell: &mut DashboardCell) -> Result<(), CellError> {
    validate_note(cell)?;
    correct_width_height(cell);
    for query in &cell.queries {
        validate_query_config(&query.query_config)?;
    }
    move_time_shift(cell);
    has_correct_axes(cell)?;
    has_correct_query_type(cell)?;
    has_correct_colors(cell)?;
    has_correct_legend(cell)
}

/// Sanitize the note HTML and check its visibility setting
pub fn validate_note(cell: &mut DashboardCell) -> Result<(), CellError> {
    cell.note = ammonia::clean(&cell.note);

    if cell.note_visibility.is_empty() {
        cell.note_visibility = DEFAULT_NOTE_VISIBILITY.to_string();
    }
    if !one_of(&cell.note_visibility, NOTE_VISIBILITIES) {
        return Err(CellError::InvalidNoteVisibility);
    }
    Ok(())
}

/// Replace a missing or non-positive size with the defaults
pub fn correct_width_height(cell: &mut DashboardCell) {
    if cell.w < 1 {
        cell.w = DEFAULT_WIDTH;
    }
    if cell.h < 1 {
        cell.h = DEFAULT_HEIGHT;
    }
}

pub fn validate_query_config(config: &QueryConfig) -> Result<(), CellError> {
    config.fields.iter().try_for_each(validate_field)
}

fn validate_field(field: &Field) -> Result<(), CellError> {
    if !one_of(&field.kind, FIELD_TYPES) {
        return Err(CellError::InvalidFieldType(field.kind.clone()));
    }
    // Only the direct arguments are checked.
    for arg in &field.args {
        if !one_of(&arg.kind, FIELD_TYPES) {
            return Err(CellError::InvalidFieldType(field.kind.clone()));
        }
    }
    Ok(())
}

/// Time shifts are edited on the query config but carried on the query.
pub fn move_time_shift(cell: &mut DashboardCell) {
    for query in &mut cell.queries {
        query.shifts = query.query_config.shifts.clone();
    }
}

pub fn has_correct_axes(cell: &DashboardCell) -> Result<(), CellError> {
    for (label, axis) in &cell.axes {
        if !one_of(label, &AXIS_LABELS)
            || !one_of(&axis.scale, AXIS_SCALES)
            || !one_of(&axis.base, AXIS_BASES)
        {
            return Err(CellError::InvalidAxis);
        }
    }
    Ok(())
}

/// Default empty query types to InfluxQL, then reject unknown ones
pub fn has_correct_query_type(cell: &mut DashboardCell) -> Result<(), CellError> {
    for query in &mut cell.queries {
        if query.kind.is_empty() {
            query.kind = DEFAULT_QUERY_TYPE.to_string();
        }
        if !one_of(&query.kind, QUERY_TYPES) {
            return Err(CellError::InvalidCellQueryType);
        }
    }
    Ok(())
}

pub fn has_correct_colors(cell: &DashboardCell) -> Result<(), CellError> {
    for color in &cell.cell_colors {
        if !one_of(&color.kind, COLOR_TYPES) {
            return Err(CellError::InvalidColorType);
        }
        if color.hex.len() != HEX_COLOR_LEN {
            return Err(CellError::InvalidColor);
        }
    }
    Ok(())
}

pub fn has_correct_legend(cell: &DashboardCell) -> Result<(), CellError> {
    let legend = &cell.legend;
    if legend.is_unset() {
        return Ok(());
    }
    if legend.kind.is_empty() || legend.orientation.is_empty() {
        return Err(CellError::InvalidLegend);
    }
    if !one_of(&legend.orientation, LEGEND_ORIENTATIONS) {
        return Err(CellError::InvalidLegendOrientation);
    }
    if !one_of(&legend.kind, LEGEND_TYPES) {
        return Err(CellError::InvalidLegendType);
    }
    Ok(())
}

fn one_of(value: &str, options: &[&str]) -> bool {
    options.contains(&value)
}
