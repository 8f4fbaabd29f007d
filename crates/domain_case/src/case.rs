//! Court case entity and input types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CaseError;
use crate::judicial::JudicialLevel;
use core_kernel::{CaseId, ClientId};

/// A court matter tied to exactly one client.
///
/// `client_id` must reference an existing client at creation time; the
/// record service enforces this. The section must belong to the list of
/// the chosen judicial level, and cases before a fixed-seat level always
/// carry that level's wilaya and court regardless of what was submitted
/// (see [`CourtCase::normalize_seat`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourtCase {
    pub id: CaseId,
    pub client_id: ClientId,
    #[validate(length(min = 1))]
    pub case_number: String,
    #[serde(default)]
    pub session_number: String,
    pub level: JudicialLevel,
    #[serde(default)]
    pub wilaya: String,
    #[validate(length(min = 1))]
    pub court: String,
    #[validate(length(min = 1))]
    pub section: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[serde(default)]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a case. The service assigns id and timestamps.
///
/// `client_id` and `level` are optional here so their absence surfaces as
/// a missing-field validation error rather than a malformed request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCase {
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub session_number: String,
    #[serde(default)]
    pub level: Option<JudicialLevel>,
    #[serde(default)]
    pub wilaya: String,
    #[serde(default)]
    pub court: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub session_date: Option<String>,
}

/// Partial update for a case. `client_id` is immutable and not patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePatch {
    pub case_number: Option<String>,
    pub session_number: Option<String>,
    pub level: Option<JudicialLevel>,
    pub wilaya: Option<String>,
    pub court: Option<String>,
    pub section: Option<String>,
    pub subject: Option<String>,
    pub details: Option<String>,
    pub session_date: Option<String>,
}

impl CourtCase {
    /// Builds a case record from a creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::MissingFields`] when `clientId` or `level` is
    /// absent; the string required-field checks run separately via
    /// [`CourtCase::check_required`].
    pub fn new(fields: NewCase) -> Result<Self, CaseError> {
        let (client_id, level) = match (fields.client_id, fields.level) {
            (Some(client_id), Some(level)) => (client_id, level),
            (client_id, level) => {
                let mut missing = Vec::new();
                if client_id.is_none() {
                    missing.push("client_id".to_string());
                }
                if level.is_none() {
                    missing.push("level".to_string());
                }
                return Err(CaseError::MissingFields(missing));
            }
        };

        let now = Utc::now();
        Ok(Self {
            id: CaseId::new(),
            client_id,
            case_number: fields.case_number,
            session_number: fields.session_number,
            level,
            wilaya: fields.wilaya,
            court: fields.court,
            section: fields.section,
            subject: fields.subject,
            details: fields.details,
            session_date: fields.session_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges a patch over this record.
    ///
    /// `id`, `client_id` and `created_at` are preserved; the record
    /// service refreshes `updated_at` and re-normalizes the seat after a
    /// merge.
    pub fn apply(&mut self, patch: CasePatch) {
        let CasePatch {
            case_number,
            session_number,
            level,
            wilaya,
            court,
            section,
            subject,
            details,
            session_date,
        } = patch;

        if let Some(v) = case_number {
            self.case_number = v;
        }
        if let Some(v) = session_number {
            self.session_number = v;
        }
        if let Some(v) = level {
            self.level = v;
        }
        if let Some(v) = wilaya {
            self.wilaya = v;
        }
        if let Some(v) = court {
            self.court = v;
        }
        if let Some(v) = section {
            self.section = v;
        }
        if let Some(v) = subject {
            self.subject = v;
        }
        if let Some(v) = details {
            self.details = v;
        }
        if let Some(v) = session_date {
            self.session_date = Some(v);
        }
    }

    /// Forces wilaya and court to the level's fixed seat where one exists.
    ///
    /// Cases before the supreme court or the council of state always sit
    /// in Algiers under the level's own name; caller-supplied values are
    /// overridden, not trusted.
    pub fn normalize_seat(&mut self) {
        if let Some((wilaya, court)) = self.level.fixed_seat() {
            self.wilaya = wilaya.to_string();
            self.court = court.to_string();
        }
    }

    /// Checks the required-field contract for case records.
    ///
    /// Required and non-empty: caseNumber, subject, court, section.
    /// Call after [`CourtCase::normalize_seat`] so a fixed-seat court is
    /// never reported missing.
    pub fn check_required(&self) -> Result<(), CaseError> {
        self.validate()
            .map_err(|errors| CaseError::missing_fields(&errors))
    }

    /// Checks that `section` belongs to the level's section list.
    pub fn check_section(&self) -> Result<(), CaseError> {
        if self.level.has_section(&self.section) {
            Ok(())
        } else {
            Err(CaseError::SectionNotInLevel {
                section: self.section.clone(),
                level: self.level,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> NewCase {
        NewCase {
            client_id: Some(ClientId::new()),
            case_number: "2024/01234".to_string(),
            level: Some(JudicialLevel::Tribunal),
            wilaya: "الجلفة".to_string(),
            court: "محكمة الجلفة".to_string(),
            section: "القسم المدني".to_string(),
            subject: "نزاع عقاري".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_case_timestamps_equal() {
        let case = CourtCase::new(valid_fields()).unwrap();
        assert_eq!(case.created_at, case.updated_at);
    }

    #[test]
    fn test_missing_client_and_level_reported_together() {
        let err = CourtCase::new(NewCase::default()).unwrap_err();
        let CaseError::MissingFields(fields) = err else {
            panic!("expected MissingFields, got {err:?}");
        };
        assert_eq!(fields, vec!["client_id".to_string(), "level".to_string()]);
    }

    #[test]
    fn test_required_string_fields() {
        let mut fields = valid_fields();
        fields.case_number = String::new();
        fields.subject = String::new();
        let case = CourtCase::new(fields).unwrap();
        let err = case.check_required().unwrap_err();
        let CaseError::MissingFields(missing) = err else {
            panic!("expected MissingFields");
        };
        assert!(missing.contains(&"case_number".to_string()));
        assert!(missing.contains(&"subject".to_string()));
    }

    #[test]
    fn test_normalize_seat_overrides_submitted_values() {
        let mut fields = valid_fields();
        fields.level = Some(JudicialLevel::SupremeCourt);
        fields.wilaya = "وهران".to_string();
        fields.court = "محكمة وهران".to_string();
        let mut case = CourtCase::new(fields).unwrap();

        case.normalize_seat();
        assert_eq!(case.wilaya, "الجزائر");
        assert_eq!(case.court, "المحكمة العليا (Cour Suprême)");
    }

    #[test]
    fn test_normalize_seat_leaves_tribunal_untouched() {
        let mut case = CourtCase::new(valid_fields()).unwrap();
        case.normalize_seat();
        assert_eq!(case.wilaya, "الجلفة");
        assert_eq!(case.court, "محكمة الجلفة");
    }

    #[test]
    fn test_section_must_match_level() {
        let mut case = CourtCase::new(valid_fields()).unwrap();
        assert!(case.check_section().is_ok());

        case.section = "الغرفة الأولى".to_string();
        let err = case.check_section().unwrap_err();
        assert!(matches!(err, CaseError::SectionNotInLevel { .. }));
    }

    #[test]
    fn test_apply_keeps_client_binding() {
        let mut case = CourtCase::new(valid_fields()).unwrap();
        let id = case.id;
        let client_id = case.client_id;
        let created_at = case.created_at;

        case.apply(CasePatch {
            level: Some(JudicialLevel::CouncilOfState),
            subject: Some("طعن إداري".to_string()),
            ..Default::default()
        });

        assert_eq!(case.id, id);
        assert_eq!(case.client_id, client_id);
        assert_eq!(case.created_at, created_at);
        assert_eq!(case.level, JudicialLevel::CouncilOfState);
        assert_eq!(case.subject, "طعن إداري");
    }
}
