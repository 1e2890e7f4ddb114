//! Storage trait definitions

use crate::error::StorageError;
use crate::storage::AuditRecord;
use async_trait::async_trait;
use auditor_types::{AISystemInput, AnalysisResult};
use uuid::Uuid;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage for audit records
#[async_trait]
pub trait AuditStorage: Send + Sync {
    /// Save a new record with a fresh id and timestamp
    async fn save_audit(
        &self,
        input: AISystemInput,
        result: AnalysisResult,
    ) -> StorageResult<AuditRecord>;

    /// Get a record by ID
    async fn get_audit(&self, id: &Uuid) -> StorageResult<Option<AuditRecord>>;

    /// List all records, newest first
    async fn list_audits(&self) -> StorageResult<Vec<AuditRecord>>;

    /// Delete a record by ID, `NotFound` if absent
    async fn delete_audit(&self, id: &Uuid) -> StorageResult<()>;

    /// Delete every record, returning how many were removed
    async fn clear_audits(&self) -> StorageResult<usize>;

    /// Save each pair as a new record, in order
    async fn import_audits(
        &self,
        entries: Vec<(AISystemInput, AnalysisResult)>,
    ) -> StorageResult<usize> {
        let count = entries.len();
        for (input, result) in entries {
            self.save_audit(input, result).await?;
        }
        Ok(count)
    }
}
