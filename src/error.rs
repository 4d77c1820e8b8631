use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Index {index} out of range for column {column} (len {len})")]
    IndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    #[error("Column {column} holds {found} at index {index}, expected {expected}")]
    TaskPositionMismatch {
        column: String,
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Invalid column ID format: {0}")]
    InvalidColumnId(String),

    #[error("Corrupt board: {0}")]
    CorruptBoard(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
