//! Court Case Domain
//!
//! This crate manages court-case records: a case is a matter before one of
//! the four tiers of the Algerian judicial hierarchy, tied to exactly one
//! client. The [`JudicialLevel`] enum carries the reference data for each
//! tier: its display label, the sections or chambers it hears, and (for
//! the supreme court and the council of state) the fixed seat that
//! overrides caller-supplied wilaya/court values.

pub mod case;
pub mod error;
pub mod judicial;

pub use case::{CasePatch, CourtCase, NewCase};
pub use error::CaseError;
pub use judicial::{JudicialLevel, FIXED_SEAT_WILAYA};
