//! Audit trail for NestEgg
//!
//! Every create, update and delete performed through the services is
//! appended to `audit.log` as one JSON object per line, with the
//! before/after state of the record and a short summary of changed fields.

mod entry;
mod logger;

pub use entry::{generate_diff, AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
