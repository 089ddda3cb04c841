use thiserror::Error;

/// Errors raised while building grids and viewers or loading their inputs.
#[derive(Debug, Error)]
pub enum RaycasterError {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    IndexOutOfRange {
        col: usize,
        row: usize,
        cols: usize,
        rows: usize,
    },
    #[error("invalid map character {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
