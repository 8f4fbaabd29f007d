//! Audit Trail Domain
//!
//! An append-only trail of record mutations for traceability. Every
//! create, update, and delete of a client or case produces one
//! [`AuditEntry`], written by the record services in the same document
//! write as the mutation itself. Entries are never mutated or deleted by
//! the application; the trail grows unboundedly, which is accepted for a
//! single-seat tool.

pub mod entry;

pub use entry::{AuditAction, AuditEntry, AuditedEntity};
