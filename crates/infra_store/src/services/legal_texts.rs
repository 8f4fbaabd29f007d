//! Legal text record service
//!
//! CRUD over the library of statutes and gazette extracts. No cascades
//! and no audit entries: the trail covers the office's own records, not
//! the reference library.

use std::sync::Arc;

use chrono::Utc;

use core_kernel::LegalTextId;
use domain_legal::{LegalText, LegalTextPatch, NewLegalText};

use crate::error::{Entity, ServiceError};
use crate::store::DocumentStore;

/// Service for legal text records
#[derive(Clone)]
pub struct LegalTextService {
    store: Arc<dyn DocumentStore>,
}

impl LegalTextService {
    /// Creates a new service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns all legal texts in stored order
    pub async fn list(&self) -> Result<Vec<LegalText>, ServiceError> {
        Ok(self.store.load().await?.legal_texts)
    }

    /// Returns the legal text with the given id
    pub async fn get(&self, id: LegalTextId) -> Result<LegalText, ServiceError> {
        self.store
            .load()
            .await?
            .legal_text(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Entity::LegalText, id))
    }

    /// Creates a legal text record
    pub async fn create(&self, fields: NewLegalText) -> Result<LegalText, ServiceError> {
        let text = LegalText::new(fields);
        text.check_required()?;

        let mut doc = self.store.load().await?;
        doc.legal_texts.push(text.clone());
        self.store.save(&doc).await?;

        tracing::info!(text_id = %text.id, "legal text created");
        Ok(text)
    }

    /// Merges a patch over an existing legal text
    pub async fn update(
        &self,
        id: LegalTextId,
        patch: LegalTextPatch,
    ) -> Result<LegalText, ServiceError> {
        let mut doc = self.store.load().await?;
        let text = doc
            .legal_text_mut(id)
            .ok_or_else(|| ServiceError::not_found(Entity::LegalText, id))?;

        text.apply(patch);
        text.check_required()?;
        text.updated_at = Utc::now();
        let updated = text.clone();

        self.store.save(&doc).await?;
        Ok(updated)
    }

    /// Deletes a legal text
    pub async fn delete(&self, id: LegalTextId) -> Result<(), ServiceError> {
        let mut doc = self.store.load().await?;
        let position = doc
            .legal_texts
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ServiceError::not_found(Entity::LegalText, id))?;
        doc.legal_texts.remove(position);

        self.store.save(&doc).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn sample() -> NewLegalText {
        NewLegalText {
            title: "القانون المدني الجزائري".to_string(),
            category: "civil_law".to_string(),
            article_number: "المادة 124".to_string(),
            content: "كل عمل أيا كان يرتكبه المرء ويسبب ضررا للغير يلزم من كان سببا في حدوثه بالتعويض."
                .to_string(),
            publish_date: "1975-09-26".to_string(),
            official_gazette_number: "78".to_string(),
            tags: vec!["مسؤولية مدنية".to_string(), "تعويض".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_get_update_delete_cycle() {
        let store = Arc::new(MemoryStore::new());
        let service = LegalTextService::new(store);

        let created = service.create(sample()).await.unwrap();
        assert_eq!(service.get(created.id).await.unwrap(), created);

        let updated = service
            .update(
                created.id,
                LegalTextPatch {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, created.created_at);

        service.delete(created.id).await.unwrap();
        assert!(service.get(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_requires_content() {
        let store = Arc::new(MemoryStore::new());
        let service = LegalTextService::new(store);

        let mut fields = sample();
        fields.content = String::new();
        let err = service.create(fields).await.unwrap_err();
        assert!(err.is_validation());
    }
}
