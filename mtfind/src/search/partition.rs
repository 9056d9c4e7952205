use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of line indices claimed per batch.
///
/// Small enough that a worker stuck on a batch of long lines does not hold
/// back the rest, large enough to keep cursor contention negligible.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// A shared claim cursor over line indices.
///
/// Workers repeatedly call [`claim`](WorkQueue::claim) until it returns
/// `None`. Each claim atomically advances the cursor, so every index in
/// `0..line_count` is handed out exactly once, and workers that draw batches
/// of short lines simply come back for more. This balances load regardless
/// of how line lengths are distributed.
#[derive(Debug)]
pub struct WorkQueue {
    cursor: AtomicUsize,
    line_count: usize,
    batch_size: usize,
}

impl WorkQueue {
    /// Creates a queue over `line_count` lines with the given batch size
    pub fn new(line_count: usize, batch_size: usize) -> Self {
        Self {
            cursor: AtomicUsize::new(0),
            line_count,
            batch_size: batch_size.max(1),
        }
    }

    /// Claims the next unprocessed batch of line indices.
    ///
    /// Returns `None` once all lines have been claimed.
    pub fn claim(&self) -> Option<Range<usize>> {
        let start = self.cursor.fetch_add(self.batch_size, Ordering::Relaxed);
        if start >= self.line_count {
            return None;
        }
        let end = (start + self.batch_size).min(self.line_count);
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_claims_cover_all_indices() {
        let queue = WorkQueue::new(10, 4);
        assert_eq!(queue.claim(), Some(0..4));
        assert_eq!(queue.claim(), Some(4..8));
        assert_eq!(queue.claim(), Some(8..10));
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_empty_queue() {
        let queue = WorkQueue::new(0, 16);
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_batch_larger_than_line_count() {
        let queue = WorkQueue::new(3, 100);
        assert_eq!(queue.claim(), Some(0..3));
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_zero_batch_size_clamped() {
        let queue = WorkQueue::new(2, 0);
        assert_eq!(queue.claim(), Some(0..1));
        assert_eq!(queue.claim(), Some(1..2));
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_concurrent_claims_partition_exactly_once() {
        let line_count = 10_000;
        let queue = WorkQueue::new(line_count, 7);
        let mut claimed: Vec<Range<usize>> = Vec::new();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        let mut local = Vec::new();
                        while let Some(range) = queue.claim() {
                            local.push(range);
                        }
                        local
                    })
                })
                .collect();
            for handle in handles {
                claimed.extend(handle.join().unwrap());
            }
        });

        let mut seen = vec![false; line_count];
        for range in claimed {
            for index in range {
                assert!(!seen[index], "index {} claimed twice", index);
                seen[index] = true;
            }
        }
        assert!(seen.iter().all(|&v| v), "every index must be claimed");
    }
}
