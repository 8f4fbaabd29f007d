//! Legal Text Domain
//!
//! Library records for the office: statute articles and official-gazette
//! extracts kept for citation while drafting. Plain records; search
//! ranking and citation parsing are out of scope.

pub mod error;
pub mod legal_text;

pub use error::LegalTextError;
pub use legal_text::{LegalText, LegalTextPatch, NewLegalText};
