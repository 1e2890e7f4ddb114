//! Application state for API handlers

use crate::config::DaemonConfig;
use crate::error::DaemonResult;
use crate::storage::{AuditStorage, InMemoryStorage};
use auditor_guide::DecisionTree;
use auditor_rules::{CacheStats, CachedClassifier, ClassificationEngine, EngineConfig, RuleCatalog};
use auditor_types::{AISystemInput, AnalysisResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Engine, with or without the result cache
pub enum Classifier {
    Direct(ClassificationEngine),
    Cached(CachedClassifier),
}

impl Classifier {
    pub fn classify(&self, input: &AISystemInput) -> AnalysisResult {
        match self {
            Classifier::Direct(engine) => engine.classify(input),
            Classifier::Cached(cached) => cached.classify(input),
        }
    }

    pub fn engine(&self) -> &ClassificationEngine {
        match self {
            Classifier::Direct(engine) => engine,
            Classifier::Cached(cached) => cached.engine(),
        }
    }

    /// `None` when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        match self {
            Classifier::Direct(_) => None,
            Classifier::Cached(cached) => Some(cached.stats()),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Risk classifier
    pub classifier: Arc<Classifier>,

    /// Audit history backend
    pub storage: Arc<dyn AuditStorage>,

    /// Guided-entry decision tree
    pub tree: Arc<DecisionTree>,

    /// Daemon version
    pub version: String,

    /// Daemon start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        classifier: Classifier,
        storage: Arc<dyn AuditStorage>,
        tree: DecisionTree,
    ) -> Self {
        Self {
            classifier: Arc::new(classifier),
            storage,
            tree: Arc::new(tree),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Build the builtin catalog, tree and in-memory history.
    ///
    /// Fails if the builtin catalog or decision tree does not validate.
    pub fn from_config(config: &DaemonConfig) -> DaemonResult<Self> {
        let catalog = RuleCatalog::builtin()?;
        let tree = DecisionTree::builtin()?;

        let engine = ClassificationEngine::with_catalog(catalog).with_config(EngineConfig {
            escalate_suspicious_terms: config.engine.escalate_suspicious_terms,
        });

        let classifier = if config.engine.cache_enabled {
            Classifier::Cached(CachedClassifier::new(
                engine,
                Duration::from_secs(config.engine.cache_ttl_secs),
                config.engine.cache_max_entries,
            ))
        } else {
            Classifier::Direct(engine)
        };

        info!(
            rules = classifier.engine().catalog().len(),
            questions = tree.nodes().len(),
            cache = config.engine.cache_enabled,
            escalate_terms = config.engine.escalate_suspicious_terms,
            max_records = config.history.max_records,
            "classification state ready"
        );

        let storage = Arc::new(InMemoryStorage::new(config.history.max_records));
        Ok(Self::new(classifier, storage, tree))
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        let secs = (chrono::Utc::now() - self.started_at).num_seconds();

        match secs {
            s if s < 60 => format!("{}s", s),
            s if s < 3600 => format!("{}m {}s", s / 60, s % 60),
            s if s < 86400 => format!("{}h {}m", s / 3600, (s % 3600) / 60),
            s => format!("{}d {}h", s / 86400, (s % 86400) / 3600),
        }
    }
}
