use std::sync::Mutex;

/// A single mask occurrence in the searched text.
///
/// Line numbers and positions are 1-based, matching the report format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The line number where the match was found
    pub line_number: usize,
    /// The column of the first matched byte within the line
    pub position: usize,
    /// The matched text (length always equals the mask length)
    pub text: String,
}

/// The complete, ordered result of one search run
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// All matches, ordered by (line_number, position)
    pub matches: Vec<Match>,
    /// Total number of matches found
    pub total_matches: usize,
    /// Total number of lines searched
    pub lines_searched: usize,
}

impl SearchResult {
    /// Creates a new empty search result
    pub fn new() -> Self {
        Default::default()
    }
}

/// Thread-safe collection point for matches discovered by workers.
///
/// `submit` may be called concurrently from any worker; each call is one
/// short critical section proportional to the number of matches handed over.
/// `finalize` consumes the collector after all workers have joined and
/// performs the single global ordering step.
#[derive(Debug, Default)]
pub struct MatchCollector {
    matches: Mutex<Vec<Match>>,
}

impl MatchCollector {
    /// Creates a new empty collector
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a worker's matches to the shared collection
    pub fn submit(&self, found: Vec<Match>) {
        let mut matches = self.matches.lock().expect("match collector lock poisoned");
        matches.extend(found);
    }

    /// Freezes the collection and produces the final ordered result
    pub fn finalize(self, lines_searched: usize) -> SearchResult {
        let mut matches = self
            .matches
            .into_inner()
            .expect("match collector lock poisoned");
        matches.sort_unstable_by_key(|m| (m.line_number, m.position));
        SearchResult {
            total_matches: matches.len(),
            matches,
            lines_searched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(line_number: usize, position: usize, text: &str) -> Match {
        Match {
            line_number,
            position,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_search_result_new() {
        let result = SearchResult::new();
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.lines_searched, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_finalize_orders_by_line_then_position() {
        let collector = MatchCollector::new();
        // Out-of-order submissions, as if from racing workers
        collector.submit(vec![m(7, 2, "bb"), m(7, 9, "bb")]);
        collector.submit(vec![m(2, 5, "aa")]);
        collector.submit(vec![m(7, 1, "cc"), m(1, 3, "dd")]);

        let result = collector.finalize(10);
        assert_eq!(result.total_matches, 5);
        assert_eq!(result.lines_searched, 10);

        let order: Vec<(usize, usize)> = result
            .matches
            .iter()
            .map(|m| (m.line_number, m.position))
            .collect();
        assert_eq!(order, vec![(1, 3), (2, 5), (7, 1), (7, 2), (7, 9)]);
    }

    #[test]
    fn test_finalize_empty() {
        let collector = MatchCollector::new();
        let result = collector.finalize(0);
        assert_eq!(result.total_matches, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_concurrent_submit() {
        let collector = MatchCollector::new();
        std::thread::scope(|s| {
            for worker in 0..8 {
                let collector = &collector;
                s.spawn(move || {
                    for i in 0..100 {
                        collector.submit(vec![m(worker * 100 + i + 1, 1, "x")]);
                    }
                });
            }
        });
        let result = collector.finalize(800);
        assert_eq!(result.total_matches, 800);
        // Strictly increasing line numbers after finalize
        for pair in result.matches.windows(2) {
            assert!(pair[0].line_number < pair[1].line_number);
        }
    }
}
