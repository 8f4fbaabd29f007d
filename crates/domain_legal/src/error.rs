//! Legal text domain errors

use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur in the legal text domain
#[derive(Debug, Error)]
pub enum LegalTextError {
    /// Required fields are missing or empty
    #[error("required legal text fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl LegalTextError {
    /// Builds a MissingFields error from validator output.
    pub fn missing_fields(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        LegalTextError::MissingFields(fields)
    }
}
