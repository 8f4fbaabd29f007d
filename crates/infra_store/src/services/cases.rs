//! Case record service
//!
//! CRUD over the `cases` collection. Two rules live here rather than in
//! any entry form: the referenced client must exist at creation, and
//! cases before a fixed-seat level (supreme court, council of state) get
//! their wilaya and court forced to that level's seat on both create and
//! update, whatever the caller submitted.

use std::sync::Arc;

use chrono::Utc;

use core_kernel::CaseId;
use domain_audit::{AuditAction, AuditEntry, AuditedEntity};
use domain_case::{CasePatch, CourtCase, NewCase};

use crate::error::{Entity, ServiceError};
use crate::store::DocumentStore;

/// Service for court case records
#[derive(Clone)]
pub struct CaseService {
    store: Arc<dyn DocumentStore>,
}

impl CaseService {
    /// Creates a new service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns all cases in stored (insertion) order
    pub async fn list(&self) -> Result<Vec<CourtCase>, ServiceError> {
        Ok(self.store.load().await?.cases)
    }

    /// Returns the case with the given id
    pub async fn get(&self, id: CaseId) -> Result<CourtCase, ServiceError> {
        self.store
            .load()
            .await?
            .case(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Entity::Case, id))
    }

    /// Creates a case record.
    ///
    /// Seat normalization runs before the required-field check, so a
    /// fixed-seat case is valid even when the caller left the court
    /// blank. The referenced client must exist.
    pub async fn create(&self, fields: NewCase) -> Result<CourtCase, ServiceError> {
        let mut case = CourtCase::new(fields)?;
        case.normalize_seat();
        case.check_required()?;
        case.check_section()?;

        let mut doc = self.store.load().await?;
        let owner = doc
            .client(case.client_id)
            .ok_or_else(|| ServiceError::UnknownClient(case.client_id.to_string()))?
            .display_name();

        doc.record(AuditEntry::record(
            AuditAction::Create,
            AuditedEntity::Case,
            case.id.as_uuid(),
            format!("تمت إضافة قضية جديدة \"{}\" للموكل {}", case.subject, owner),
        ));
        doc.cases.push(case.clone());
        self.store.save(&doc).await?;

        tracing::info!(case_id = %case.id, client_id = %case.client_id, "case created");
        Ok(case)
    }

    /// Merges a patch over an existing case.
    ///
    /// The seat is re-normalized after the merge, so changing the level
    /// to a fixed-seat tier rewrites wilaya and court in the same update.
    /// Section membership is checked only when the patch supplies a
    /// section; a level-only change keeps the section already on record.
    pub async fn update(&self, id: CaseId, patch: CasePatch) -> Result<CourtCase, ServiceError> {
        let section_supplied = patch.section.is_some();

        let mut doc = self.store.load().await?;
        let case = doc
            .case_mut(id)
            .ok_or_else(|| ServiceError::not_found(Entity::Case, id))?;

        case.apply(patch);
        case.normalize_seat();
        case.check_required()?;
        if section_supplied {
            case.check_section()?;
        }
        case.updated_at = Utc::now();
        let updated = case.clone();

        doc.record(AuditEntry::record(
            AuditAction::Update,
            AuditedEntity::Case,
            updated.id.as_uuid(),
            format!("تم تحديث قضية \"{}\"", updated.subject),
        ));
        self.store.save(&doc).await?;

        tracing::info!(case_id = %id, "case updated");
        Ok(updated)
    }

    /// Deletes a case. Cases are leaves: nothing cascades.
    pub async fn delete(&self, id: CaseId) -> Result<(), ServiceError> {
        let mut doc = self.store.load().await?;
        let position = doc
            .cases
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ServiceError::not_found(Entity::Case, id))?;
        let case = doc.cases.remove(position);

        doc.record(AuditEntry::record(
            AuditAction::Delete,
            AuditedEntity::Case,
            id.as_uuid(),
            format!("تم حذف قضية \"{}\"", case.subject),
        ));
        self.store.save(&doc).await?;

        tracing::info!(case_id = %id, "case deleted");
        Ok(())
    }
}
