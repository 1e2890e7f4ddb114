//! # auditor-rules
//!
//! Deterministic risk classification for AI systems under the AI Act.
//!
//! ## Components
//!
//! - [`RuleCatalog`]: the immutable rule table. Each [`Rule`] ties a typed
//!   predicate over [`AISystemInput`](auditor_types::AISystemInput) to a
//!   target tier and a legal reference. Validated once at construction.
//! - [`terms`]: the advisory suspicious-term detector (en/fr phrase lists).
//! - [`ClassificationEngine`]: evaluates the catalog in tier precedence,
//!   picks the first tier that matched, scores confidence and assembles the
//!   [`AnalysisResult`](auditor_types::AnalysisResult).
//! - [`CachedClassifier`]: memoizing wrapper keyed by a BLAKE3 digest of the
//!   canonical input serialization.
//!
//! Classification is total: any input shape produces a result. Only a broken
//! catalog is an error, and it surfaces at construction time.

pub mod cache;
pub mod catalog;
pub mod confidence;
pub mod engine;
pub mod error;
mod messages;
pub mod terms;

pub use cache::{CacheStats, CachedClassifier};
pub use catalog::{Localized, Rule, RuleCatalog};
pub use confidence::confidence_score;
pub use engine::{ClassificationEngine, EngineConfig, TERM_RULE_ID};
pub use error::{RulesError, RulesResult};
pub use terms::{detect_in_input, detect_suspicious_terms};
