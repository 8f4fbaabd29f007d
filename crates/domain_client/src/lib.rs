//! Client Records Domain
//!
//! This crate manages the law office's client records: the represented
//! party's identity and contact data, and optionally the opposing party
//! (`Opposition`) recorded for reference alongside the client.
//!
//! # Record lifecycle
//!
//! Clients are created from a [`NewClient`] payload; the service layer
//! assigns the identifier and both timestamps. Updates are expressed as a
//! [`ClientPatch`] merged over the stored record, preserving `id` and
//! `createdAt` and refreshing `updatedAt`. Deleting a client cascades to
//! the client's court cases; that rule lives in the record services, not
//! here.
//!
//! # Examples
//!
//! ```rust
//! use domain_client::{Client, NewClient};
//!
//! let client = Client::new(NewClient {
//!     first_name: "علي".into(),
//!     last_name: "بن يوسف".into(),
//!     father_name: "محمد".into(),
//!     mother_first_name: "فاطمة".into(),
//!     mother_last_name: "حداد".into(),
//!     phone_number: "0555000000".into(),
//!     ..Default::default()
//! });
//! assert_eq!(client.created_at, client.updated_at);
//! assert!(client.check_required().is_ok());
//! ```

pub mod client;
pub mod error;

pub use client::{Client, ClientPatch, DocumentType, NewClient, Opposition};
pub use error::ClientError;
