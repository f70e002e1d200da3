//! Run metrics and traces.
//!
//! Collected while classifying a dump:
//!
//! - `RunMetrics` is always filled in. It is cheap: a few counters and one
//!   map entry per rule that fired.
//! - `RowTrace` is opt-in (`Options::trace`) and allocates one record per row.

use std::time::Duration;

use indexmap::IndexMap;

use crate::Classification;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time spent classifying.
    pub total: Duration,
    /// Rows seen, headers included.
    pub rows: usize,
    /// Rows that produced a store increment.
    pub counted: usize,
    /// Header rows and ignored names.
    pub discarded: usize,
    /// Rows skipped because of malformed metadata.
    pub failed: usize,
    /// Number of rows decided by each rule, in first-hit order.
    pub rule_hits: IndexMap<&'static str, usize>,
}

impl RunMetrics {
    pub(crate) fn record_hit(&mut self, rule: &'static str) {
        *self.rule_hits.entry(rule).or_default() += 1;
    }

    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &RunMetrics) {
        self.total += other.total;
        self.rows += other.rows;
        self.counted += other.counted;
        self.discarded += other.discarded;
        self.failed += other.failed;
        for (rule, hits) in &other.rule_hits {
            *self.rule_hits.entry(*rule).or_default() += hits;
        }
    }
}

/// One classified row, for `--verbose` reports and debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTrace {
    pub character: String,
    pub label: String,
    /// Rule that decided the row, or the rule whose production failed.
    pub rule: &'static str,
    /// The classification, or the error message for a skipped row.
    pub outcome: Result<Classification, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_counters_and_hits() {
        let mut a = RunMetrics { rows: 2, counted: 1, discarded: 1, ..Default::default() };
        a.record_hit("su name");
        a.record_hit("header row");

        let mut b = RunMetrics { rows: 3, counted: 2, failed: 1, ..Default::default() };
        b.record_hit("su name");
        b.record_hit("fallback");

        a.merge(&b);
        assert_eq!((a.rows, a.counted, a.discarded, a.failed), (5, 3, 1, 1));
        assert_eq!(a.rule_hits.get("su name"), Some(&2));
        assert_eq!(a.rule_hits.keys().copied().collect::<Vec<_>>(), vec!["su name", "header row", "fallback"]);
    }
}
