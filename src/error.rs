use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskflowError>;

#[derive(Debug, Error)]
pub enum TaskflowError {
    #[error("{entity} title is required")]
    EmptyTitle { entity: &'static str },

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Duplicate card ID: {0}")]
    DuplicateCard(String),

    #[error("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid {kind} ID format: {value}")]
    InvalidId { kind: &'static str, value: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TaskflowError {
    /// True for failures caused by user input rather than stale references
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle { .. } | Self::InvalidDate(_) | Self::InvalidId { .. }
        )
    }
}
