//! Optional intake telemetry, kept outside the scoring core.
//!
//! The scorer and engine stay pure; anything that wants accounting (popular
//! query tallies and the like) plugs in through [`IntakeObserver`]. Counters
//! here are non-authoritative caches and may be dropped or reset at any time
//! without affecting correctness.

use std::collections::HashMap;

use crate::text;

/// Hook invoked by the triage pipeline as messages flow through.
pub trait IntakeObserver {
    /// A title was about to be checked against the backlog.
    fn record_query(&mut self, title: &str);
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IntakeObserver for NoopObserver {
    fn record_query(&mut self, _title: &str) {}
}

/// Cap on distinct tally keys; once full, new keys are silently dropped.
const MAX_TALLY_ENTRIES: usize = 1_000;

/// Bounded popular-query tally keyed by normalized title.
#[derive(Debug, Clone, Default)]
pub struct QueryTally {
    counts: HashMap<String, u64>,
}

impl QueryTally {
    pub fn new() -> Self {
        QueryTally::default()
    }

    /// The `n` most-queried titles, most frequent first; ties broken by key
    /// so the ordering is deterministic.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(title, &count)| (title.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl IntakeObserver for QueryTally {
    fn record_query(&mut self, title: &str) {
        let key = text::normalize(title);
        if key.is_empty() {
            return;
        }
        if self.counts.len() >= MAX_TALLY_ENTRIES && !self.counts.contains_key(&key) {
            return;
        }
        *self.counts.entry(key).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_normalized_variants_together() {
        let mut tally = QueryTally::new();
        tally.record_query("The Matrix");
        tally.record_query("matrix!");
        tally.record_query("dune");

        let top = tally.top(2);
        assert_eq!(top[0], ("matrix".to_string(), 2));
        assert_eq!(top[1], ("dune".to_string(), 1));
    }

    #[test]
    fn test_tally_ignores_empty_queries() {
        let mut tally = QueryTally::new();
        tally.record_query("   ");
        tally.record_query("!!!");
        assert!(tally.is_empty());
    }

    #[test]
    fn test_tally_reset() {
        let mut tally = QueryTally::new();
        tally.record_query("dune");
        tally.reset();
        assert!(tally.is_empty());
    }

    #[test]
    fn test_tally_top_deterministic_on_ties() {
        let mut tally = QueryTally::new();
        tally.record_query("bbb");
        tally.record_query("aaa");
        let top = tally.top(10);
        assert_eq!(top[0].0, "aaa");
        assert_eq!(top[1].0, "bbb");
    }
}
