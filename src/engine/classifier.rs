//! First-match classifier.
//!
//! - `classify` decides a single row: the first active rule whose patterns all
//!   match and whose production returns an outcome wins.
//! - `run` feeds one character's rows through `classify` and applies the
//!   resulting increments to an [`AggregateStore`].
//!
//! A production error (malformed quantity metadata) fails that row only; the
//! rest of the batch continues and the error is handed back to the caller.

use std::time::Instant;

use super::compiled_rules::CompiledRules;
use super::metrics::{RowTrace, RunMetrics};
use super::trigger::LabelInfo;
use crate::error::{Error, Result};
use crate::store::AggregateStore;
use crate::tables::ReferenceTables;
use crate::{Category, Classification, Entry, Pattern, RawItem, Rule, Verdict};

/// Rule name reported when no rule produced an outcome.
pub const UNMATCHED_RULE: &str = "<unmatched>";

/// Result of running one character's rows.
#[derive(Debug, Default)]
pub struct CharacterRun {
    pub metrics: RunMetrics,
    /// Rows skipped because of malformed metadata.
    pub failures: Vec<Error>,
    /// Per-row traces, only filled in when requested.
    pub trace: Vec<RowTrace>,
}

/// Classifier over a compiled rule set and a set of reference tables.
#[derive(Debug)]
pub struct Classifier<'a> {
    compiled: CompiledRules<'a>,
    tables: &'a ReferenceTables,
}

impl<'a> Classifier<'a> {
    pub fn new(rules: &'a [Rule], tables: &'a ReferenceTables) -> Self {
        Self { compiled: CompiledRules::new(rules), tables }
    }

    /// Decide one row.
    ///
    /// Returns the verdict of the first rule that produced an outcome, or the
    /// production error of that rule. Rows no rule accepts are counted under
    /// `other` with [`UNMATCHED_RULE`].
    pub fn classify(&self, item: &RawItem) -> Result<Verdict> {
        self.classify_traced(item).map_err(|(_, err)| err)
    }

    /// Like [`Classifier::classify`], but keeps the rule name on failure.
    fn classify_traced(&self, item: &RawItem) -> std::result::Result<Verdict, (&'static str, Error)> {
        let info = LabelInfo::scan(item);

        for id in self.compiled.active(info.buckets) {
            let rule = self.compiled.rules[id];
            let Some(groups) = match_patterns(rule, item, self.tables) else {
                continue;
            };
            match (rule.production)(item, &groups, self.tables) {
                Some(Ok(classification)) => return Ok(Verdict { rule: rule.name, classification }),
                Some(Err(err)) => return Err((rule.name, err)),
                None => log::trace!("rule {:?} matched {:?} but declined", rule.name, item.label),
            }
        }

        log::warn!("no rule accepted {:?}; counting it under other", item.label);
        Ok(Verdict {
            rule: UNMATCHED_RULE,
            classification: Classification::Count(Entry::new(Category::Other, item.label.as_str())),
        })
    }

    /// Classify every row of `character` into `store`.
    pub fn run(&self, character: &str, rows: &[RawItem], store: &mut AggregateStore, trace: bool) -> CharacterRun {
        let start = Instant::now();
        let mut run = CharacterRun::default();

        for item in rows {
            run.metrics.rows += 1;

            let (rule, outcome) = match self.classify_traced(item) {
                Ok(verdict) => {
                    run.metrics.record_hit(verdict.rule);
                    match apply(&verdict.classification, character, store) {
                        Ok(()) => (verdict.rule, Ok(verdict.classification)),
                        Err(err) => (verdict.rule, Err(err)),
                    }
                }
                Err((rule, err)) => (rule, Err(err)),
            };

            match &outcome {
                Ok(Classification::Discard) => {
                    run.metrics.discarded += 1;
                    log::debug!("[{character}] {:?} -> discarded ({rule})", item.label);
                }
                Ok(Classification::Count(entry)) => {
                    run.metrics.counted += 1;
                    log::debug!(
                        "[{character}] {:?} -> {} {:?} x{} ({rule})",
                        item.label,
                        entry.category.name(),
                        entry.name,
                        entry.amount
                    );
                }
                Err(err) => {
                    run.metrics.failed += 1;
                    log::warn!("[{character}] skipped {:?}: {err}", item.label);
                }
            }

            if trace {
                run.trace.push(RowTrace {
                    character: character.to_string(),
                    label: item.label.clone(),
                    rule,
                    outcome: outcome.as_ref().map(Clone::clone).map_err(ToString::to_string),
                });
            }

            if let Err(err) = outcome {
                run.failures.push(err);
            }
        }

        run.metrics.total = start.elapsed();
        run
    }
}

fn apply(classification: &Classification, character: &str, store: &mut AggregateStore) -> Result<()> {
    match classification {
        Classification::Discard => Ok(()),
        Classification::Count(entry) => {
            store.increment(entry.category, entry.set.as_deref(), &entry.name, character, entry.amount)
        }
    }
}

/// Match every pattern of `rule` against the row. Regex patterns search the
/// label and contribute their capture groups (group 0 included, unmatched
/// optional groups as empty strings).
fn match_patterns(rule: &Rule, item: &RawItem, tables: &ReferenceTables) -> Option<Vec<String>> {
    let mut groups = Vec::new();
    for pattern in &rule.pattern {
        match pattern {
            Pattern::Regex(re) => {
                let caps = re.captures(&item.label)?;
                groups.extend(caps.iter().map(|m| m.map_or_else(String::new, |m| m.as_str().to_string())));
            }
            Pattern::Predicate(pred) => {
                if !pred(item, tables) {
                    return None;
                }
            }
        }
    }
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleClass;
    use crate::rules::item::rules;

    fn with_classifier<T>(f: impl FnOnce(&Classifier<'_>) -> T) -> T {
        let rules = rules::get();
        let tables = ReferenceTables::builtin();
        let classifier = Classifier::new(&rules, &tables);
        f(&classifier)
    }

    #[test]
    fn rules_without_outcome_fall_through_to_unmatched() {
        let rules = vec![rule! {
            name: "never",
            pattern: [],
            prod: |_m| -> Option<Entry> { None }
        }];
        let tables = ReferenceTables::empty();
        let classifier = Classifier::new(&rules, &tables);

        let verdict = classifier.classify(&RawItem::new("Mystery", StyleClass::Other)).unwrap();
        assert_eq!(verdict.rule, UNMATCHED_RULE);
        assert_eq!(verdict.classification, Classification::Count(Entry::new(Category::Other, "Mystery")));
    }

    #[test]
    fn run_counts_discards_and_failures() {
        with_classifier(|classifier| {
            let rows = vec![
                RawItem::header_row(),
                RawItem::new("Fire [Pantheon]", StyleClass::Other),
                RawItem::new("Sacred Vessel", StyleClass::Other),
                RawItem::new("Arcane Shards (10)", StyleClass::Other),
            ];
            let mut store = AggregateStore::new();
            let run = classifier.run("Alice", &rows, &mut store, true);

            assert_eq!(run.metrics.rows, 4);
            assert_eq!(run.metrics.discarded, 1);
            assert_eq!(run.metrics.counted, 2);
            assert_eq!(run.metrics.failed, 1);
            assert_eq!(run.failures.len(), 1);
            assert!(matches!(run.failures[0], Error::MalformedMetadata { .. }));

            assert_eq!(run.trace.len(), 4);
            assert_eq!(run.trace[2].rule, "shrine vessel");
            assert!(run.trace[2].outcome.is_err());

            assert_eq!(store.get(Category::Other, "Arcane Crystal").unwrap().amount(), 2.0);
            assert!(store.set("Pantheon").unwrap().get("Fire").unwrap().has_contributor("Alice"));
        });
    }

    #[test]
    fn run_without_trace_keeps_no_rows() {
        with_classifier(|classifier| {
            let rows = vec![RawItem::new("Razorspine", StyleClass::Other)];
            let mut store = AggregateStore::new();
            let run = classifier.run("Alice", &rows, &mut store, false);
            assert!(run.trace.is_empty());
            assert_eq!(run.metrics.rule_hits.get("su name"), Some(&1));
        });
    }
}
