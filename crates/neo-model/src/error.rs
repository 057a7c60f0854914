use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A required raw value was empty or failed type coercion.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    /// A close approach was serialized before being linked to its NEO.
    #[error("close approach of {designation:?} is not linked to a near-Earth object")]
    Linkage { designation: String },
}

impl ModelError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ModelError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
