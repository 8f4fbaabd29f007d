//! Audit trail entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::AuditEntryId;

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

/// Which kind of record was touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditedEntity {
    Client,
    Case,
}

/// One line of the audit trail.
///
/// `details` is the human-readable Arabic description shown in the
/// activity feed; `entity_id` is the string form of the touched record's
/// identifier so the trail survives the record's deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub action: AuditAction,
    pub entity_type: AuditedEntity,
    pub entity_id: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

impl AuditEntry {
    /// Records an action, stamping the entry with the current time.
    pub fn record(
        action: AuditAction,
        entity_type: AuditedEntity,
        entity_id: impl ToString,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: AuditEntryId::new(),
            action,
            entity_type,
            entity_id: entity_id.to_string(),
            timestamp: Utc::now(),
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let entry = AuditEntry::record(
            AuditAction::Create,
            AuditedEntity::Client,
            "some-id",
            "تم إنشاء موكل جديد: علي بن يوسف",
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "create");
        assert_eq!(json["entityType"], "client");
        assert_eq!(json["entityId"], "some-id");
        assert!(json.get("timestamp").is_some());
    }
}
