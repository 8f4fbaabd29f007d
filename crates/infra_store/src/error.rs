//! Storage and service error types

use std::fmt;
use thiserror::Error;

use domain_case::CaseError;
use domain_client::ClientError;
use domain_legal::LegalTextError;

/// Errors raised by the storage medium itself.
///
/// A failed write is fatal for the triggering request only; the process
/// keeps serving. Callers must not assume the in-memory document they
/// mutated reached disk. The next operation reloads from the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The case file exists but could not be read
    #[error("failed to read the case file: {0}")]
    Read(#[source] std::io::Error),

    /// The case file could not be written or replaced
    #[error("failed to write the case file: {0}")]
    Write(#[source] std::io::Error),

    /// The case file exists but is not a valid document
    #[error("the case file is not a valid document: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The in-memory document could not be serialized
    #[error("failed to encode the case file: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The kind of record an operation addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Client,
    Case,
    LegalText,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Client => "client",
            Entity::Case => "case",
            Entity::LegalText => "legal text",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by the record services.
///
/// The HTTP layer maps these onto status codes: validation failures to
/// 400, missing records to 404, storage failures to 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required fields are missing or empty (wire field names)
    #[error("required fields are missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// The case's section does not belong to its judicial level
    #[error("section '{section}' is not heard by {level}")]
    InvalidSection { section: String, level: String },

    /// A case referenced a client that does not exist
    #[error("client '{0}' does not exist")]
    UnknownClient(String),

    /// The addressed record does not exist
    #[error("{entity} with id '{id}' not found")]
    NotFound { entity: Entity, id: String },

    /// The storage medium failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Creates a NotFound error for a record
    pub fn not_found(entity: Entity, id: impl fmt::Display) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true if this error means the record was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    /// Returns true if this error is a caller mistake rather than a
    /// storage failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::MissingFields(_)
                | ServiceError::InvalidSection { .. }
                | ServiceError::UnknownClient(_)
        )
    }
}

/// Converts a snake_case Rust field name to its camelCase wire name.
fn camelize(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn camelize_all(fields: Vec<String>) -> Vec<String> {
    fields.iter().map(|f| camelize(f)).collect()
}

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingFields(fields) => {
                ServiceError::MissingFields(camelize_all(fields))
            }
        }
    }
}

impl From<CaseError> for ServiceError {
    fn from(err: CaseError) -> Self {
        match err {
            CaseError::MissingFields(fields) => ServiceError::MissingFields(camelize_all(fields)),
            CaseError::SectionNotInLevel { section, level } => ServiceError::InvalidSection {
                section,
                level: level.label().to_string(),
            },
        }
    }
}

impl From<LegalTextError> for ServiceError {
    fn from(err: LegalTextError) -> Self {
        match err {
            LegalTextError::MissingFields(fields) => {
                ServiceError::MissingFields(camelize_all(fields))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_wire_names() {
        assert_eq!(camelize("first_name"), "firstName");
        assert_eq!(camelize("mother_first_name"), "motherFirstName");
        assert_eq!(camelize("level"), "level");
    }

    #[test]
    fn test_missing_fields_use_wire_names() {
        let err: ServiceError =
            ClientError::MissingFields(vec!["first_name".into(), "phone_number".into()]).into();
        let ServiceError::MissingFields(fields) = err else {
            panic!("expected MissingFields");
        };
        assert_eq!(fields, vec!["firstName", "phoneNumber"]);
    }

    #[test]
    fn test_predicates() {
        let not_found = ServiceError::not_found(Entity::Client, "x");
        assert!(not_found.is_not_found());
        assert!(!not_found.is_validation());

        let missing = ServiceError::MissingFields(vec!["subject".into()]);
        assert!(missing.is_validation());
    }
}
