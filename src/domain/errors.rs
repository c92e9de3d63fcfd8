// Validation errors for dashboard cells
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("Unexpected axis in cell. Valid axes are 'x', 'y', and 'y2'")]
    InvalidAxis,

    #[error("Invalid color type. Valid color types are 'min', 'max', 'threshold', 'text', 'background', and 'scale'")]
    InvalidColorType,

    #[error("Invalid color. Accepted color format is #RRGGBB")]
    InvalidColor,

    #[error("Invalid legend. Both type and orientation must be set")]
    InvalidLegend,

    #[error("Invalid legend type. Valid legend type is 'static'")]
    InvalidLegendType,

    #[error("Invalid orientation type. Valid orientation types are 'top', 'bottom', 'right', 'left'")]
    InvalidLegendOrientation,

    #[error("Invalid query type. Valid query types are 'influxql' and 'flux'")]
    InvalidCellQueryType,

    #[error("Chronograf dashboard cell note visibility value is invalid")]
    InvalidNoteVisibility,

    #[error(
        "invalid field type \"{0}\" ; expect func, field, integer, number, regex, wildcard"
    )]
    InvalidFieldType(String),
}
