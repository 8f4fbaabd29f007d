//! Record services
//!
//! One service per collection, each holding a shared handle to the
//! document store. Every operation is a full load → validate/mutate →
//! save cycle; nothing is cached between operations, so a failed write
//! only ever leaves disk one step behind, never the in-memory view ahead
//! of a later read.
//!
//! Client and case mutations append an audit entry in the same document
//! write as the mutation itself, so the trail and the data can never
//! disagree.

pub mod audit;
pub mod cases;
pub mod clients;
pub mod legal_texts;

pub use audit::AuditTrail;
pub use cases::CaseService;
pub use clients::ClientService;
pub use legal_texts::LegalTextService;
