use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Tracks counters for one or more search runs.
///
/// Cloning shares the underlying counters, so the same instance can be
/// observed from every worker thread without locking.
#[derive(Debug, Clone, Default)]
pub struct SearchMetrics {
    lines_scanned: Arc<AtomicU64>,
    batches_claimed: Arc<AtomicU64>,
    matches_found: Arc<AtomicU64>,

    // Compiled-mask cache metrics
    cache_hits: Arc<AtomicU64>,
    cache_misses: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance with all counters at zero
    pub fn new() -> Self {
        Default::default()
    }

    /// Records one scanned line and the matches it produced
    pub fn record_line(&self, match_count: usize) {
        self.lines_scanned.fetch_add(1, Ordering::Relaxed);
        if match_count > 0 {
            self.matches_found
                .fetch_add(match_count as u64, Ordering::Relaxed);
        }
    }

    /// Records one claimed work batch
    pub fn record_batch(&self) {
        self.batches_claimed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a compiled-mask cache lookup
    pub fn record_cache_operation(&self, hit: bool) {
        if hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn lines_scanned(&self) -> u64 {
        self.lines_scanned.load(Ordering::Relaxed)
    }

    pub fn batches_claimed(&self) -> u64 {
        self.batches_claimed.load(Ordering::Relaxed)
    }

    pub fn matches_found(&self) -> u64 {
        self.matches_found.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Logs the current counter values
    pub fn log_stats(&self) {
        debug!(
            "Search stats: {} lines scanned in {} batches, {} matches, mask cache {} hits / {} misses",
            self.lines_scanned(),
            self.batches_claimed(),
            self.matches_found(),
            self.cache_hits(),
            self.cache_misses(),
        );
    }
}
