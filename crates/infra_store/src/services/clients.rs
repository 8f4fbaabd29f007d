//! Client record service
//!
//! CRUD over the `clients` collection, including the cascading delete of
//! a client's cases. Deleting a client removes the client record and
//! every case whose `clientId` matches, in a single atomic document
//! write.

use std::sync::Arc;

use chrono::Utc;

use core_kernel::ClientId;
use domain_audit::{AuditAction, AuditEntry, AuditedEntity};
use domain_client::{Client, ClientPatch, NewClient};

use crate::error::{Entity, ServiceError};
use crate::store::DocumentStore;

/// Service for client records
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn DocumentStore>,
}

impl ClientService {
    /// Creates a new service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns all clients in stored (insertion) order
    pub async fn list(&self) -> Result<Vec<Client>, ServiceError> {
        Ok(self.store.load().await?.clients)
    }

    /// Returns the client with the given id
    ///
    /// # Errors
    ///
    /// `ServiceError::NotFound` if no such client exists.
    pub async fn get(&self, id: ClientId) -> Result<Client, ServiceError> {
        self.store
            .load()
            .await?
            .client(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(Entity::Client, id))
    }

    /// Creates a client record.
    ///
    /// Validates the required fields, assigns id and timestamps
    /// (`createdAt == updatedAt`), appends the record and its audit entry,
    /// and persists.
    pub async fn create(&self, fields: NewClient) -> Result<Client, ServiceError> {
        let client = Client::new(fields);
        client.check_required()?;

        let mut doc = self.store.load().await?;
        doc.record(AuditEntry::record(
            AuditAction::Create,
            AuditedEntity::Client,
            client.id.as_uuid(),
            format!("تم إنشاء موكل جديد: {}", client.display_name()),
        ));
        doc.clients.push(client.clone());
        self.store.save(&doc).await?;

        tracing::info!(client_id = %client.id, "client created");
        Ok(client)
    }

    /// Merges a patch over an existing client.
    ///
    /// Preserves `id` and `createdAt`, refreshes `updatedAt`, and
    /// revalidates the merged record so a supplied-but-blank required
    /// field is rejected.
    pub async fn update(&self, id: ClientId, patch: ClientPatch) -> Result<Client, ServiceError> {
        let mut doc = self.store.load().await?;
        let client = doc
            .client_mut(id)
            .ok_or_else(|| ServiceError::not_found(Entity::Client, id))?;

        client.apply(patch);
        client.check_required()?;
        client.updated_at = Utc::now();
        let updated = client.clone();

        doc.record(AuditEntry::record(
            AuditAction::Update,
            AuditedEntity::Client,
            updated.id.as_uuid(),
            format!("تم تحديث بيانات الموكل: {}", updated.display_name()),
        ));
        self.store.save(&doc).await?;

        tracing::info!(client_id = %id, "client updated");
        Ok(updated)
    }

    /// Deletes a client and all of the client's cases.
    ///
    /// The cascade happens inside one document write; either both the
    /// client and its cases are gone, or (on a failed write) nothing
    /// changed on disk. Deleting an already-deleted client yields
    /// `NotFound`.
    pub async fn delete(&self, id: ClientId) -> Result<(), ServiceError> {
        let mut doc = self.store.load().await?;
        let position = doc
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ServiceError::not_found(Entity::Client, id))?;
        let client = doc.clients.remove(position);

        let before = doc.cases.len();
        doc.cases.retain(|case| case.client_id != id);
        let removed_cases = before - doc.cases.len();

        doc.record(AuditEntry::record(
            AuditAction::Delete,
            AuditedEntity::Client,
            id.as_uuid(),
            format!("تم حذف الموكل: {}", client.display_name()),
        ));
        self.store.save(&doc).await?;

        tracing::info!(client_id = %id, removed_cases, "client deleted");
        Ok(())
    }
}
