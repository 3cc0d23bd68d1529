use thiserror::Error;

/// Malformed map data. Always fatal at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("map has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },
    #[error("map row {row} has {found} columns, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
    #[error("map has no player spawn")]
    MissingPlayer,
    #[error("map has a second player spawn at {second:?} (first at {first:?})")]
    DuplicatePlayer {
        first: (usize, usize),
        second: (usize, usize),
    },
}
