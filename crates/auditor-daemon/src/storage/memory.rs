//! In-memory audit history

use super::traits::*;
use crate::error::StorageError;
use crate::storage::AuditRecord;
use async_trait::async_trait;
use auditor_types::{AISystemInput, AnalysisResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Bounded history kept newest first
#[derive(Debug)]
pub struct InMemoryStorage {
    records: Arc<RwLock<Vec<AuditRecord>>>,
    max_records: usize,
}

impl InMemoryStorage {
    /// Create a storage keeping at most `max_records` records
    pub fn new(max_records: usize) -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            max_records,
        }
    }
}

#[async_trait]
impl AuditStorage for InMemoryStorage {
    async fn save_audit(
        &self,
        input: AISystemInput,
        result: AnalysisResult,
    ) -> StorageResult<AuditRecord> {
        let record = AuditRecord::new(input, result);
        let mut records = self.records.write().await;
        records.insert(0, record.clone());
        if records.len() > self.max_records {
            let dropped = records.len() - self.max_records;
            records.truncate(self.max_records);
            debug!(dropped, max = self.max_records, "audit history trimmed");
        }
        Ok(record)
    }

    async fn get_audit(&self, id: &Uuid) -> StorageResult<Option<AuditRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == *id).cloned())
    }

    async fn list_audits(&self) -> StorageResult<Vec<AuditRecord>> {
        let records = self.records.read().await;
        Ok(records.clone())
    }

    async fn delete_audit(&self, id: &Uuid) -> StorageResult<()> {
        let mut records = self.records.write().await;
        let position = records
            .iter()
            .position(|r| r.id == *id)
            .ok_or_else(|| StorageError::NotFound(format!("Audit {} not found", id)))?;
        records.remove(position);
        Ok(())
    }

    async fn clear_audits(&self) -> StorageResult<usize> {
        let mut records = self.records.write().await;
        let count = records.len();
        records.clear();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditor_types::RiskLevel;

    fn result() -> AnalysisResult {
        AnalysisResult {
            risk_level: RiskLevel::Minimal,
            risk_score: 0.4,
            justification: vec![],
            matched_rules: vec![],
            obligations: vec![],
            next_steps: vec![],
        }
    }

    fn named(name: &str) -> AISystemInput {
        AISystemInput::new(name, "", "")
    }

    #[tokio::test]
    async fn test_audit_crud() {
        let storage = InMemoryStorage::new(50);

        // Create
        let record = storage.save_audit(named("first"), result()).await.unwrap();

        // Read
        let retrieved = storage.get_audit(&record.id).await.unwrap();
        assert_eq!(retrieved, Some(record.clone()));

        // Delete
        storage.delete_audit(&record.id).await.unwrap();
        assert!(matches!(
            storage.delete_audit(&record.id).await,
            Err(StorageError::NotFound(_))
        ));
        assert!(storage.list_audits().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_first_and_bounded() {
        let storage = InMemoryStorage::new(3);
        for i in 0..5 {
            storage.save_audit(named(&format!("system-{i}")), result()).await.unwrap();
        }

        let names: Vec<_> = storage
            .list_audits()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.input.name)
            .collect();
        assert_eq!(names, vec!["system-4", "system-3", "system-2"]);
    }

    #[tokio::test]
    async fn test_import_assigns_fresh_ids() {
        let storage = InMemoryStorage::new(50);
        let original = storage.save_audit(named("a"), result()).await.unwrap();

        let imported = storage
            .import_audits(vec![(original.input.clone(), original.result.clone())])
            .await
            .unwrap();
        assert_eq!(imported, 1);

        let all = storage.list_audits().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, original.id);
        assert_eq!(all[0].input, original.input);
    }

    #[tokio::test]
    async fn test_clear() {
        let storage = InMemoryStorage::new(50);
        storage.save_audit(named("a"), result()).await.unwrap();
        storage.save_audit(named("b"), result()).await.unwrap();
        assert_eq!(storage.clear_audits().await.unwrap(), 2);
        assert!(storage.list_audits().await.unwrap().is_empty());
    }
}
