//! Infrastructure Store Layer
//!
//! This crate owns persistence for the case-management system: one JSON
//! document holding every collection (clients, cases, legal texts, audit
//! logs), read into memory whole and rewritten whole on every mutation.
//!
//! # Architecture
//!
//! The [`DocumentStore`] trait is the seam between the record services and
//! the storage medium. [`JsonFileStore`] is the production implementation
//! (flat file, atomic temp-file-and-rename writes); [`MemoryStore`] backs
//! tests and demos. An embedded database could be substituted behind the
//! same trait without touching service code.
//!
//! Record services perform load → validate/mutate → save per operation.
//! There is no locking between concurrent operations: the last save wins
//! on the whole document. That is an accepted limitation of a single-seat
//! tool, not a feature.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{JsonFileStore, services::ClientService};
//! use std::sync::Arc;
//!
//! let store = Arc::new(JsonFileStore::new("data/db.json"));
//! let clients = ClientService::new(store);
//! let created = clients.create(new_client).await?;
//! ```

pub mod document;
pub mod error;
pub mod services;
pub mod store;

pub use document::{CaseFile, StoreStats};
pub use error::{Entity, ServiceError, StorageError};
pub use store::{DocumentStore, JsonFileStore, MemoryStore};
