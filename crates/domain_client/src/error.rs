//! Client domain errors

use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required client fields are missing or empty
    #[error("required client fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl ClientError {
    /// Builds a MissingFields error from validator output, with field
    /// names sorted for stable reporting.
    pub fn missing_fields(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ClientError::MissingFields(fields)
    }
}
