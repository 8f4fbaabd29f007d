//! Client entity and input types
//!
//! A [`Client`] is the office's represented party. The record carries the
//! civil-status fields used on Algerian legal paperwork (father's and
//! mother's names, identity document, issuing wilaya/municipality) plus an
//! optional embedded [`Opposition`] describing the adverse party.
//!
//! Wire and persisted field names are camelCase, matching the persisted
//! document layout consumed by the front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ClientError;
use core_kernel::ClientId;

/// Kind of identity document presented by a party
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// National identity card
    #[default]
    IdCard,
    /// Driving license
    DrivingLicense,
    /// Passport
    Passport,
}

/// The adverse party in a client's disputes, recorded for reference.
///
/// Same identity shape as the client record, minus the service-assigned
/// timestamps. The `id` is whatever the entry path supplied; oppositions
/// are never addressed individually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opposition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_first_name: String,
    #[serde(default)]
    pub mother_last_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_place: String,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub document_issue_date: String,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub phone_number: String,
}

/// A client record: identity and contact data for a represented party.
///
/// `id` is unique and immutable after creation. `created_at` and
/// `updated_at` are assigned by the service layer, never caller-supplied;
/// `updated_at >= created_at` always holds. Date-of-birth and
/// document-issue dates are kept as free-form strings: the entry UI
/// tolerates partial data and the persisted layout stores them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub father_name: String,
    #[validate(length(min = 1))]
    pub mother_first_name: String,
    #[validate(length(min = 1))]
    pub mother_last_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_place: String,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub document_issue_date: String,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub municipality: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opposition: Option<Opposition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a client. The service assigns id and timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_first_name: String,
    #[serde(default)]
    pub mother_last_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub birth_place: String,
    #[serde(default)]
    pub document_type: DocumentType,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub document_issue_date: String,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub municipality: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub opposition: Option<Opposition>,
}

/// Partial update for a client. Absent fields leave the record untouched;
/// a supplied `opposition` replaces the embedded record wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub father_name: Option<String>,
    pub mother_first_name: Option<String>,
    pub mother_last_name: Option<String>,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub document_type: Option<DocumentType>,
    pub document_number: Option<String>,
    pub document_issue_date: Option<String>,
    pub wilaya: Option<String>,
    pub municipality: Option<String>,
    pub phone_number: Option<String>,
    pub opposition: Option<Opposition>,
}

impl Client {
    /// Builds a client record from a creation payload.
    ///
    /// Assigns a fresh identifier and sets both timestamps to the same
    /// instant, so `created_at == updated_at` at creation.
    pub fn new(fields: NewClient) -> Self {
        let now = Utc::now();
        Self {
            id: ClientId::new(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            father_name: fields.father_name,
            mother_first_name: fields.mother_first_name,
            mother_last_name: fields.mother_last_name,
            birth_date: fields.birth_date,
            birth_place: fields.birth_place,
            document_type: fields.document_type,
            document_number: fields.document_number,
            document_issue_date: fields.document_issue_date,
            wilaya: fields.wilaya,
            municipality: fields.municipality,
            phone_number: fields.phone_number,
            opposition: fields.opposition,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the client's display name, "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merges a patch over this record.
    ///
    /// `id` and `created_at` are preserved; the caller (the record
    /// service) refreshes `updated_at` after a successful merge.
    pub fn apply(&mut self, patch: ClientPatch) {
        let ClientPatch {
            first_name,
            last_name,
            father_name,
            mother_first_name,
            mother_last_name,
            birth_date,
            birth_place,
            document_type,
            document_number,
            document_issue_date,
            wilaya,
            municipality,
            phone_number,
            opposition,
        } = patch;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = father_name {
            self.father_name = v;
        }
        if let Some(v) = mother_first_name {
            self.mother_first_name = v;
        }
        if let Some(v) = mother_last_name {
            self.mother_last_name = v;
        }
        if let Some(v) = birth_date {
            self.birth_date = v;
        }
        if let Some(v) = birth_place {
            self.birth_place = v;
        }
        if let Some(v) = document_type {
            self.document_type = v;
        }
        if let Some(v) = document_number {
            self.document_number = v;
        }
        if let Some(v) = document_issue_date {
            self.document_issue_date = v;
        }
        if let Some(v) = wilaya {
            self.wilaya = v;
        }
        if let Some(v) = municipality {
            self.municipality = v;
        }
        if let Some(v) = phone_number {
            self.phone_number = v;
        }
        if let Some(v) = opposition {
            self.opposition = Some(v);
        }
    }

    /// Checks the required-field contract for client records.
    ///
    /// Required and non-empty: firstName, lastName, fatherName,
    /// motherFirstName, motherLastName, phoneNumber.
    pub fn check_required(&self) -> Result<(), ClientError> {
        self.validate()
            .map_err(|errors| ClientError::missing_fields(&errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> NewClient {
        NewClient {
            first_name: "علي".to_string(),
            last_name: "بن يوسف".to_string(),
            father_name: "محمد".to_string(),
            mother_first_name: "فاطمة".to_string(),
            mother_last_name: "حداد".to_string(),
            phone_number: "0555000000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_client_timestamps_equal() {
        let client = Client::new(valid_fields());
        assert_eq!(client.created_at, client.updated_at);
    }

    #[test]
    fn test_valid_client_passes_required_check() {
        let client = Client::new(valid_fields());
        assert!(client.check_required().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let client = Client::new(NewClient {
            first_name: "علي".to_string(),
            ..Default::default()
        });
        let err = client.check_required().unwrap_err();
        let ClientError::MissingFields(fields) = err;
        assert!(fields.contains(&"last_name".to_string()));
        assert!(fields.contains(&"phone_number".to_string()));
        assert!(!fields.contains(&"first_name".to_string()));
    }

    #[test]
    fn test_apply_preserves_id_and_created_at() {
        let mut client = Client::new(valid_fields());
        let id = client.id;
        let created_at = client.created_at;

        client.apply(ClientPatch {
            first_name: Some("كريم".to_string()),
            ..Default::default()
        });

        assert_eq!(client.id, id);
        assert_eq!(client.created_at, created_at);
        assert_eq!(client.first_name, "كريم");
        assert_eq!(client.last_name, "بن يوسف");
    }

    #[test]
    fn test_apply_replaces_opposition_wholesale() {
        let mut client = Client::new(valid_fields());
        assert!(client.opposition.is_none());

        client.apply(ClientPatch {
            opposition: Some(Opposition {
                first_name: "رشيد".to_string(),
                last_name: "عمراني".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(client.opposition.as_ref().unwrap().first_name, "رشيد");
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let client = Client::new(valid_fields());
        let json = serde_json::to_value(&client).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("motherFirstName").is_some());
        assert!(json.get("createdAt").is_some());
        // Absent opposition is omitted, not null.
        assert!(json.get("opposition").is_none());
    }

    #[test]
    fn test_document_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&DocumentType::DrivingLicense).unwrap(),
            "\"driving_license\""
        );
        let parsed: DocumentType = serde_json::from_str("\"passport\"").unwrap();
        assert_eq!(parsed, DocumentType::Passport);
    }
}
