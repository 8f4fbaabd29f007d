//! Core Kernel - Foundational types for the case-management system
//!
//! This crate provides the building blocks used across all domain modules:
//! strongly-typed record identifiers shared by the client, case, legal-text
//! and audit domains.

pub mod identifiers;

pub use identifiers::{AuditEntryId, CaseId, ClientId, LegalTextId};
