//! The persisted document
//!
//! Everything the office records lives in one JSON document with four
//! top-level collections. Missing keys deserialize to empty collections,
//! so a first-run file, a legacy two-collection file, and a current file
//! all load the same way.

use serde::{Deserialize, Serialize};

use core_kernel::{CaseId, ClientId, LegalTextId};
use domain_audit::AuditEntry;
use domain_case::CourtCase;
use domain_client::Client;
use domain_legal::LegalText;

/// The whole persisted state of the office.
///
/// Collections keep insertion order; list operations return records in
/// the order they were stored. The audit trail is kept newest-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseFile {
    pub clients: Vec<Client>,
    pub cases: Vec<CourtCase>,
    pub legal_texts: Vec<LegalText>,
    pub audit_logs: Vec<AuditEntry>,
}

/// Aggregate counts served by the stats endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_clients: usize,
    pub total_cases: usize,
    pub clients_with_cases: usize,
}

impl CaseFile {
    /// Finds a client by id
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Finds a client by id, mutably
    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id == id)
    }

    /// Finds a case by id
    pub fn case(&self, id: CaseId) -> Option<&CourtCase> {
        self.cases.iter().find(|c| c.id == id)
    }

    /// Finds a case by id, mutably
    pub fn case_mut(&mut self, id: CaseId) -> Option<&mut CourtCase> {
        self.cases.iter_mut().find(|c| c.id == id)
    }

    /// Finds a legal text by id
    pub fn legal_text(&self, id: LegalTextId) -> Option<&LegalText> {
        self.legal_texts.iter().find(|t| t.id == id)
    }

    /// Finds a legal text by id, mutably
    pub fn legal_text_mut(&mut self, id: LegalTextId) -> Option<&mut LegalText> {
        self.legal_texts.iter_mut().find(|t| t.id == id)
    }

    /// Prepends an entry to the audit trail (newest first)
    pub fn record(&mut self, entry: AuditEntry) {
        self.audit_logs.insert(0, entry);
    }

    /// Computes the aggregate counts for the stats endpoint
    pub fn stats(&self) -> StoreStats {
        let clients_with_cases = self
            .clients
            .iter()
            .filter(|client| self.cases.iter().any(|case| case.client_id == client.id))
            .count();

        StoreStats {
            total_clients: self.clients.len(),
            total_cases: self.cases.len(),
            clients_with_cases,
        }
    }
}
