use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row [{ordinal}] is truncated: {columns} columns, net amount column is out of range")]
    Truncated { ordinal: usize, columns: usize },
}
