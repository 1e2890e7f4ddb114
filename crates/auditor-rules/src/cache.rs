//! Memoizing classifier.
//!
//! Results are keyed by the BLAKE3 digest of the input's JSON form. Set
//! fields are ordered sets, so equal inputs always serialize identically.
//! A cached result is always equal to a fresh `classify`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use auditor_types::{AISystemInput, AnalysisResult};
use dashmap::DashMap;
use serde::Serialize;
use tracing::{trace, warn};

use crate::engine::ClassificationEngine;

/// Hit/miss counters and current size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

struct CacheEntry {
    result: AnalysisResult,
    inserted_at: Instant,
}

/// [`ClassificationEngine`] wrapped with a bounded TTL cache.
pub struct CachedClassifier {
    engine: ClassificationEngine,
    entries: DashMap<[u8; 32], CacheEntry>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CachedClassifier {
    pub fn new(engine: ClassificationEngine, ttl: Duration, max_entries: usize) -> Self {
        Self {
            engine,
            entries: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    pub fn classify(&self, input: &AISystemInput) -> AnalysisResult {
        let Some(key) = cache_key(input) else {
            return self.engine.classify(input);
        };

        if let Some(entry) = self.entries.get(&key) {
            if entry.inserted_at.elapsed() < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(system = %input.name, "classification cache hit");
                return entry.result.clone();
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = self.engine.classify(input);
        self.make_room();
        self.entries.insert(
            key,
            CacheEntry {
                result: result.clone(),
                inserted_at: Instant::now(),
            },
        );
        result
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drop expired entries, then the oldest one if still at capacity.
    fn make_room(&self) {
        if self.entries.len() < self.max_entries {
            return;
        }
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);

        if self.entries.len() >= self.max_entries {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().inserted_at)
                .map(|entry| *entry.key());
            if let Some(key) = oldest {
                self.entries.remove(&key);
            }
        }
    }
}

fn cache_key(input: &AISystemInput) -> Option<[u8; 32]> {
    match serde_json::to_vec(input) {
        Ok(bytes) => Some(*blake3::hash(&bytes).as_bytes()),
        Err(err) => {
            warn!(error = %err, "input not serializable, bypassing cache");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditor_types::InputFlag;

    fn cached(ttl: Duration, max: usize) -> CachedClassifier {
        CachedClassifier::new(ClassificationEngine::builtin().unwrap(), ttl, max)
    }

    #[test]
    fn cached_equals_uncached() {
        let cache = cached(Duration::from_secs(60), 10);
        let input = AISystemInput::default().with_flag(InputFlag::Education, true);
        let first = cache.classify(&input);
        let second = cache.classify(&input);
        assert_eq!(first, second);
        assert_eq!(first, cache.engine().classify(&input));
        assert_eq!(
            cache.stats(),
            CacheStats {
                entries: 1,
                hits: 1,
                misses: 1
            }
        );
    }

    #[test]
    fn zero_ttl_never_hits() {
        let cache = cached(Duration::ZERO, 10);
        let input = AISystemInput::default();
        cache.classify(&input);
        cache.classify(&input);
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn bounded_size() {
        let cache = cached(Duration::from_secs(60), 2);
        for name in ["a", "b", "c", "d"] {
            cache.classify(&AISystemInput::new(name, "", ""));
        }
        assert!(cache.stats().entries <= 2);
    }

    #[test]
    fn distinct_inputs_distinct_keys() {
        let a = cache_key(&AISystemInput::new("a", "", ""));
        let b = cache_key(&AISystemInput::new("b", "", ""));
        assert_ne!(a, b);
        assert_eq!(a, cache_key(&AISystemInput::new("a", "", "")));
    }
}
