//! Case domain errors

use thiserror::Error;
use validator::ValidationErrors;

use crate::judicial::JudicialLevel;

/// Errors that can occur in the case domain
#[derive(Debug, Error)]
pub enum CaseError {
    /// Required case fields are missing or empty
    #[error("required case fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Section does not belong to the chosen judicial level
    #[error("section '{section}' is not heard by {level}")]
    SectionNotInLevel {
        section: String,
        level: JudicialLevel,
    },
}

impl CaseError {
    /// Builds a MissingFields error from validator output, with field
    /// names sorted for stable reporting.
    pub fn missing_fields(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        CaseError::MissingFields(fields)
    }
}
