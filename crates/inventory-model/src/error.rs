use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading or transforming the inventory.
///
/// Records with missing fields are not errors; cleaning drops them.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be read.
    #[error("failed to read inventory file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not a JSON array of records, or a field is unusable.
    #[error("malformed inventory input: {reason}")]
    MalformedInput { reason: String },

    /// A record has `weight_kg == 0`, so `price_per_kg` is undefined.
    #[error("division by zero: weight_kg is 0 for model_id {model_id}")]
    DivisionByZero { model_id: i64 },

    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] PolarsError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl InventoryError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
