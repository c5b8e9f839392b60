use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Malformed dataset (line {line}): {reason}")]
    DatasetMalformed { line: u64, reason: String },

    #[error("'{0}' has 0 kcal per 100 g; no equivalent quantity exists")]
    ZeroCalorieTarget(String),

    #[error("Quantity must be a positive number of grams, got {0}")]
    InvalidQuantity(f64),

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Cannot swap across groups: '{source_group}' vs '{target_group}'")]
    GroupMismatch {
        source_group: String,
        target_group: String,
    },

    #[error("Source and target are the same food: {0}")]
    SameFood(String),

    #[error("Unknown food group: {0}")]
    UnknownGroup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SwapError>;
