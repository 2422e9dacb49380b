//! TTL'd sample cache.
//!
//! Holds the current transaction batch together with its expiry
//! instant. A read past the expiry regenerates the batch wholesale;
//! the batch is never mutated in place, so every render cycle sees a
//! consistent snapshot.

use crate::generator::SampleGenerator;
use fraudlens_core::types::Transaction;
use std::time::{Duration, Instant};

/// Cache of one generated sample batch with a time-based lifecycle.
#[derive(Debug)]
pub struct SampleCache {
    generator: SampleGenerator,
    sample_size: usize,
    ttl: Duration,
    base_seed: u64,
    refresh_count: u64,
    data: Vec<Transaction>,
    expires_at: Instant,
}

impl SampleCache {
    /// Create an empty cache. The first `get` populates it.
    #[must_use]
    pub fn new(sample_size: usize, ttl: Duration, base_seed: u64) -> Self {
        Self {
            generator: SampleGenerator::new(),
            sample_size,
            ttl,
            base_seed,
            refresh_count: 0,
            data: Vec::new(),
            expires_at: Instant::now(),
        }
    }

    /// Current batch, regenerated first if the TTL has lapsed.
    ///
    /// Each refresh derives a fresh seed from the base seed and the
    /// refresh counter, so successive batches differ while a fixed
    /// counter state stays reproducible.
    pub fn get(&mut self) -> &[Transaction] {
        if self.data.is_empty() || Instant::now() >= self.expires_at {
            self.refresh();
        }
        &self.data
    }

    /// Force regeneration regardless of expiry.
    pub fn refresh(&mut self) {
        let seed = self.base_seed.wrapping_add(self.refresh_count);
        self.refresh_count += 1;
        self.data = self.generator.generate(self.sample_size, seed);
        self.expires_at = Instant::now() + self.ttl;
        tracing::info!(
            count = self.data.len(),
            refresh = self.refresh_count,
            "sample cache refreshed"
        );
    }

    /// Number of times the batch has been regenerated.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_get_populates() {
        let mut cache = SampleCache::new(50, Duration::from_secs(30), 42);
        assert_eq!(cache.refresh_count(), 0);
        assert_eq!(cache.get().len(), 50);
        assert_eq!(cache.refresh_count(), 1);
    }

    #[test]
    fn test_within_ttl_returns_same_snapshot() {
        let mut cache = SampleCache::new(50, Duration::from_secs(3600), 42);
        let first: Vec<_> = cache.get().to_vec();
        let second: Vec<_> = cache.get().to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.refresh_count(), 1);
    }

    #[test]
    fn test_expired_cache_replaces_batch() {
        let mut cache = SampleCache::new(50, Duration::ZERO, 42);
        cache.get();
        cache.get();
        assert_eq!(cache.refresh_count(), 2);
    }

    #[test]
    fn test_forced_refresh_advances_counter() {
        let mut cache = SampleCache::new(10, Duration::from_secs(3600), 1);
        cache.refresh();
        cache.refresh();
        assert_eq!(cache.refresh_count(), 2);
    }
}
