use neo_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Required column or field names are absent from a source header.
    #[error("{source_name} is missing required column(s): {}", .missing.join(", "))]
    Schema {
        source_name: String,
        missing: Vec<String>,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    pub fn schema(source_name: impl Into<String>, missing: Vec<String>) -> Self {
        IngestError::Schema {
            source_name: source_name.into(),
            missing,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
