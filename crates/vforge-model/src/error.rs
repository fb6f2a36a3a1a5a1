use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid specification document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown template: {0}")]
    UnknownTemplate(String),
    #[error("variant group #{group_index} has no value at index {value_index}")]
    VariantValueOutOfRange {
        group_index: usize,
        value_index: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
