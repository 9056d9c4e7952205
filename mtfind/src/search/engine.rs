use std::thread;
use tracing::{debug, info};

use super::mask::CompiledMask;
use super::matcher::find_matches;
use super::partition::WorkQueue;
use crate::config::SearchConfig;
use crate::errors::SearchResult;
use crate::metrics::SearchMetrics;
use crate::results::{Match, MatchCollector, SearchResult as SearchOutput};

/// Performs a concurrent mask search over pre-loaded lines.
///
/// Compiles the mask, then runs a fixed pool of workers that claim line
/// batches from a shared cursor, match each line, and submit their findings
/// to a shared collector. After all workers have joined, the collector is
/// finalized into the (line_number, position)-ordered result. The thread
/// count affects performance only, never the result set or its order.
pub fn search(lines: &[Vec<u8>], config: &SearchConfig) -> SearchResult<SearchOutput> {
    info!(
        "Starting search: mask {:?} over {} lines",
        config.mask,
        lines.len()
    );

    let metrics = SearchMetrics::new();
    let mask = CompiledMask::compile_with_metrics(&config.mask, &metrics)?;

    if lines.is_empty() {
        debug!("No lines to search, returning empty result");
        return Ok(SearchOutput::new());
    }

    let worker_count = config.thread_count.get();
    let queue = WorkQueue::new(lines.len(), config.batch_size.get());
    let collector = MatchCollector::new();

    debug!(
        "Spawning {} workers, batch size {}",
        worker_count,
        config.batch_size.get()
    );

    thread::scope(|s| {
        for _ in 0..worker_count {
            s.spawn(|| {
                while let Some(batch) = queue.claim() {
                    metrics.record_batch();
                    for index in batch {
                        let line = &lines[index];
                        let spans = find_matches(line, &mask);
                        metrics.record_line(spans.len());
                        if spans.is_empty() {
                            continue;
                        }
                        let found = spans
                            .into_iter()
                            .map(|(start, end)| Match {
                                line_number: index + 1,
                                position: start + 1,
                                text: String::from_utf8_lossy(&line[start..end]).into_owned(),
                            })
                            .collect();
                        collector.submit(found);
                    }
                }
            });
        }
    });

    let result = collector.finalize(lines.len());
    metrics.log_stats();

    info!(
        "Search complete. Found {} matches in {} lines",
        result.total_matches, result.lines_searched
    );

    Ok(result)
}
