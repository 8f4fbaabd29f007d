//! Cross-service workflows over the in-memory store

use std::sync::Arc;

use infra_store::services::{AuditTrail, CaseService, ClientService};
use infra_store::MemoryStore;

use domain_audit::{AuditAction, AuditedEntity};
use test_utils::{CaseBuilder, ClientBuilder};

#[tokio::test]
async fn deleting_a_client_cascades_to_its_cases_only() {
    let store = Arc::new(MemoryStore::new());
    let clients = ClientService::new(store.clone());
    let cases = CaseService::new(store.clone());

    let ali = clients.create(ClientBuilder::new().build()).await.unwrap();
    let samir = clients
        .create(
            ClientBuilder::new()
                .first_name("سمير")
                .last_name("قادري")
                .build(),
        )
        .await
        .unwrap();

    cases
        .create(CaseBuilder::for_client(ali.id).subject("نزاع عقاري").build())
        .await
        .unwrap();
    cases
        .create(CaseBuilder::for_client(ali.id).subject("نفقة").build())
        .await
        .unwrap();
    let kept = cases
        .create(
            CaseBuilder::for_client(samir.id)
                .subject("منازعة تجارية")
                .build(),
        )
        .await
        .unwrap();

    clients.delete(ali.id).await.unwrap();

    let remaining_clients = clients.list().await.unwrap();
    assert_eq!(remaining_clients.len(), 1);
    assert_eq!(remaining_clients[0].id, samir.id);

    let remaining_cases = cases.list().await.unwrap();
    assert_eq!(remaining_cases.len(), 1);
    assert_eq!(remaining_cases[0].id, kept.id);

    let stats = store.snapshot().await.stats();
    assert_eq!(stats.total_clients, 1);
    assert_eq!(stats.total_cases, 1);
    assert_eq!(stats.clients_with_cases, 1);
}

#[tokio::test]
async fn audit_trail_tells_the_whole_story_newest_first() {
    let store = Arc::new(MemoryStore::new());
    let clients = ClientService::new(store.clone());
    let cases = CaseService::new(store.clone());
    let trail = AuditTrail::new(store.clone());

    let client = clients.create(ClientBuilder::new().build()).await.unwrap();
    let case = cases
        .create(CaseBuilder::for_client(client.id).subject("نزاع عقاري").build())
        .await
        .unwrap();
    cases.delete(case.id).await.unwrap();
    clients.delete(client.id).await.unwrap();

    let entries = trail.list().await.unwrap();
    assert_eq!(entries.len(), 4);

    let summary: Vec<(AuditAction, AuditedEntity)> = entries
        .iter()
        .map(|e| (e.action, e.entity_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            (AuditAction::Delete, AuditedEntity::Client),
            (AuditAction::Delete, AuditedEntity::Case),
            (AuditAction::Create, AuditedEntity::Case),
            (AuditAction::Create, AuditedEntity::Client),
        ]
    );
    assert!(entries[3].details.contains("علي بن يوسف"));
    assert!(entries[2].details.contains("نزاع عقاري"));
}

#[tokio::test]
async fn failed_write_leaves_the_stored_document_unchanged() {
    let store = Arc::new(MemoryStore::new());
    let clients = ClientService::new(store.clone());

    let client = clients.create(ClientBuilder::new().build()).await.unwrap();

    store.set_fail_writes(true);
    assert!(clients.delete(client.id).await.is_err());
    store.set_fail_writes(false);

    // The next operation reloads from the store and still sees the client.
    let listed = clients.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, client.id);
}

#[tokio::test]
async fn invalid_payloads_never_reach_the_store() {
    let store = Arc::new(MemoryStore::new());
    let clients = ClientService::new(store.clone());

    let err = clients
        .create(ClientBuilder::new().missing_required().build())
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(store.snapshot().await, infra_store::CaseFile::default());
}
