use thiserror::Error;

/// Errors raised by board construction, access and parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside a {width}x{height} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] Malformed),
    #[error("invalid board dimensions {width}x{height}, both must be positive")]
    InvalidDimensions { width: usize, height: usize },
    #[error("live probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Why a textual board could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("no cells")]
    Empty,
    #[error("{cells} cells cannot be split evenly across {rows} rows")]
    NotRectangular { cells: usize, rows: usize },
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid cell {found:?} at ({row}, {col}), only '0' and '1' are allowed")]
    InvalidCell { row: usize, col: usize, found: char },
}

pub type Result<T> = std::result::Result<T, BoardError>;
