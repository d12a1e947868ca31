use thiserror::Error;

/// Errors raised by table access and the table transforms.
///
/// Partial interpolation is *not* an error; see
/// [`Interpolation::complete`](crate::transform::interpolate::Interpolation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// A referenced column does not exist in the table.
    #[error("column '{column}' not found")]
    MissingColumn { column: String },

    /// A row position lies outside `0..len`.
    #[error("row {row} is out of bounds for a table of {len} rows")]
    RowOutOfBounds { row: usize, len: usize },

    /// The first or last row was asked for a neighbour on both sides.
    #[error("row {row} is at the edge of a table of {len} rows and has no neighbour on one side")]
    EdgeRow { row: usize, len: usize },

    /// A numeric operation met a cell that is neither integer, float nor null.
    #[error("row {row}, column '{column}': value is not numeric")]
    NotNumeric { row: usize, column: String },

    /// Columns handed to the table constructor have different lengths.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    /// An Arrow column type with no [`Value`](crate::data::model::Value) counterpart.
    #[error("unsupported arrow column: {0}")]
    Arrow(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
