use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("frontier index {index} is outside a {size}x{size} map")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} codes, found {found}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row}, column {column}: {token:?} is not a road code")]
    BadCode {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("map is disconnected: reached {reached} of {total} cells")]
    Disconnected { reached: usize, total: usize },
}
