//! Audit history storage
//!
//! Keeps `{input, result, timestamp}` records, newest first, bounded by
//! `history.max_records`.

mod memory;
mod record;
mod traits;

pub use memory::InMemoryStorage;
pub use record::{AuditRecord, AuditStats};
pub use traits::{AuditStorage, StorageResult};
