use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::engine::{Classifier, RowTrace, RunMetrics};
use crate::error::{Error, Result};
use crate::render::render_trade_post;
use crate::store::AggregateStore;
use crate::tables::ReferenceTables;
use crate::{RawItem, Rule, Verdict};

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::item::rules::get);
static BUILTIN_TABLES: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::builtin);

/// Options that affect a dump run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Keep a [`RowTrace`] for every classified row.
    pub trace: bool,
}

/// One character's scraped inventory.
///
/// A batch with `error` set stands for a character whose inventory could not
/// be fetched; it is reported as skipped and its rows are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterItems {
    pub character: String,
    #[serde(default)]
    pub rows: Vec<RawItem>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CharacterItems {
    pub fn new(character: impl Into<String>, rows: Vec<RawItem>) -> Self {
        Self { character: character.into(), rows, error: None }
    }

    pub fn failed(character: impl Into<String>, error: impl Into<String>) -> Self {
        Self { character: character.into(), rows: Vec::new(), error: Some(error.into()) }
    }
}

/// Per-character counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub character: String,
    pub rows: usize,
    pub counted: usize,
    pub discarded: usize,
    pub failed: usize,
}

/// A character left out of the dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCharacter {
    pub character: String,
    pub reason: String,
}

/// Everything a dump request produced.
#[derive(Debug)]
pub struct DumpReport {
    pub store: AggregateStore,
    pub characters: Vec<CharacterSummary>,
    pub skipped: Vec<SkippedCharacter>,
    /// Rows that were skipped, one error each.
    pub warnings: Vec<Error>,
    pub metrics: RunMetrics,
    /// Empty unless [`Options::trace`] was set.
    pub trace: Vec<RowTrace>,
    pub elapsed: Duration,
}

impl DumpReport {
    /// True when no row was counted: the "no items found" condition.
    pub fn is_empty(&self) -> bool {
        !self.store.has_data()
    }

    pub fn trade_post(&self) -> String {
        render_trade_post(&self.store)
    }
}

/// A dump in progress: characters are added one at a time into one shared
/// store, then [`ItemDump::finish`] hands back the report.
///
/// # Example
/// ```
/// use mxl_tradepost::{ItemDump, Options, RawItem, ReferenceTables, StyleClass};
///
/// let tables = ReferenceTables::builtin();
/// let mut dump = ItemDump::new(&tables, Options::default());
/// dump.add_character("Alice", &[RawItem::new("Razorspine", StyleClass::Other)]);
/// dump.add_character("Bob", &[RawItem::new("Razorspine", StyleClass::Other)]);
///
/// let report = dump.finish();
/// assert!(report.trade_post().contains("[item]Razorspine[/item] x2"));
/// ```
#[derive(Debug)]
pub struct ItemDump<'t> {
    classifier: Classifier<'t>,
    options: Options,
    store: AggregateStore,
    characters: Vec<CharacterSummary>,
    skipped: Vec<SkippedCharacter>,
    warnings: Vec<Error>,
    metrics: RunMetrics,
    trace: Vec<RowTrace>,
    started: Instant,
}

impl<'t> ItemDump<'t> {
    pub fn new(tables: &'t ReferenceTables, options: Options) -> Self {
        Self {
            classifier: Classifier::new(&DEFAULT_RULES, tables),
            options,
            store: AggregateStore::new(),
            characters: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
            metrics: RunMetrics::default(),
            trace: Vec::new(),
            started: Instant::now(),
        }
    }

    /// Classify one character's rows into the shared store.
    pub fn add_character(&mut self, character: &str, rows: &[RawItem]) -> &CharacterSummary {
        let run = self.classifier.run(character, rows, &mut self.store, self.options.trace);

        let summary = CharacterSummary {
            character: character.to_string(),
            rows: run.metrics.rows,
            counted: run.metrics.counted,
            discarded: run.metrics.discarded,
            failed: run.metrics.failed,
        };
        log::info!(
            "{character}: {} rows, {} counted, {} discarded, {} failed",
            summary.rows,
            summary.counted,
            summary.discarded,
            summary.failed
        );

        self.metrics.merge(&run.metrics);
        self.warnings.extend(run.failures);
        self.trace.extend(run.trace);
        self.characters.push(summary);
        &self.characters[self.characters.len() - 1]
    }

    /// Record a character whose inventory could not be read.
    pub fn skip_character(&mut self, character: &str, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("skipping {character}: {reason}");
        self.skipped.push(SkippedCharacter { character: character.to_string(), reason });
    }

    /// Add a batch, honoring its `error` marker.
    pub fn add(&mut self, batch: &CharacterItems) {
        match &batch.error {
            Some(reason) => self.skip_character(&batch.character, reason.as_str()),
            None => {
                self.add_character(&batch.character, &batch.rows);
            }
        }
    }

    pub fn store(&self) -> &AggregateStore {
        &self.store
    }

    pub fn finish(self) -> DumpReport {
        DumpReport {
            store: self.store,
            characters: self.characters,
            skipped: self.skipped,
            warnings: self.warnings,
            metrics: self.metrics,
            trace: self.trace,
            elapsed: self.started.elapsed(),
        }
    }
}

/// Aggregate `batches` with the built-in tables and default options.
pub fn dump(batches: &[CharacterItems]) -> DumpReport {
    dump_with(batches, &BUILTIN_TABLES, &Options::default())
}

/// Aggregate `batches` with the given tables and options.
pub fn dump_with(batches: &[CharacterItems], tables: &ReferenceTables, options: &Options) -> DumpReport {
    let mut dump = ItemDump::new(tables, options.clone());
    for batch in batches {
        dump.add(batch);
    }
    dump.finish()
}

/// Classify a single row with the built-in tables.
///
/// # Example
/// ```
/// use mxl_tradepost::{Category, Classification, RawItem, StyleClass, classify};
///
/// let verdict = classify(&RawItem::new("Sacred Shrine (37%)", StyleClass::Other)).unwrap();
/// let Classification::Count(entry) = verdict.classification else { panic!() };
/// assert_eq!(entry.category, Category::Shrines);
/// assert_eq!(entry.name, "Sacred Shrine");
/// ```
pub fn classify(item: &RawItem) -> Result<Verdict> {
    classify_with(item, &BUILTIN_TABLES)
}

pub fn classify_with(item: &RawItem, tables: &ReferenceTables) -> Result<Verdict> {
    Classifier::new(&DEFAULT_RULES, tables).classify(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, StyleClass};

    fn row(label: &str) -> RawItem {
        RawItem::new(label, StyleClass::Other)
    }

    #[test]
    fn same_row_twice_increments_twice_with_one_contributor() {
        let report = dump(&[CharacterItems::new("Alice", vec![row("Razorspine"), row("Razorspine")])]);

        let record = report.store.get(Category::Su, "Razorspine").unwrap();
        assert_eq!(record.amount(), 2.0);
        assert_eq!(record.contributors().collect::<Vec<_>>(), vec!["Alice"]);
    }

    #[test]
    fn characters_share_one_store() {
        let report = dump(&[
            CharacterItems::new("Alice", vec![row("Fire [Pantheon]"), row("Arcane Shards (17)")]),
            CharacterItems::new("Bob", vec![row("Fire [Pantheon]"), row("Arcane Shards (3)")]),
        ]);

        let fire = report.store.set("Pantheon").unwrap().get("Fire").unwrap();
        assert_eq!(fire.amount(), 2.0);
        assert_eq!(fire.contributors().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        let crystals = report.store.get(Category::Other, "Arcane Crystal").unwrap();
        assert!((crystals.amount() - 4.0).abs() < 1e-9);
        assert_eq!(report.characters.len(), 2);
    }

    #[test]
    fn non_discarded_row_changes_exactly_one_category() {
        for label in ["Razorspine", "Dawn", "Jewel", "Fire [Pantheon]", "Sacred Shrine (37%)", "Whatever"] {
            let report = dump(&[CharacterItems::new("Alice", vec![row(label)])]);
            assert_eq!(report.store.populated().bits().count_ones(), 1, "{label}");
        }
    }

    #[test]
    fn ignored_and_header_rows_leave_the_store_empty() {
        let report = dump(&[CharacterItems::new("Alice", vec![RawItem::header_row(), row("Horadric Cube")])]);

        assert!(report.is_empty());
        assert_eq!(report.trade_post(), "");
        assert_eq!(report.metrics.discarded, 2);
    }

    #[test]
    fn empty_input_is_empty_report() {
        let report = dump(&[]);
        assert!(report.is_empty());
        assert!(report.characters.is_empty());
        assert_eq!(report.trade_post(), "");
    }

    #[test]
    fn failed_fetch_skips_character_and_keeps_others() {
        let report = dump(&[
            CharacterItems::failed("Alice", "session expired"),
            CharacterItems::new("Bob", vec![row("Razorspine")]),
        ]);

        assert_eq!(
            report.skipped,
            vec![SkippedCharacter { character: "Alice".into(), reason: "session expired".into() }]
        );
        assert_eq!(report.characters.len(), 1);
        assert!(!report.is_empty());
    }

    #[test]
    fn malformed_row_becomes_warning_and_batch_continues() {
        let report = dump(&[CharacterItems::new("Alice", vec![row("Sacred Vessel"), row("Razorspine")])]);

        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(report.warnings[0], Error::MalformedMetadata { .. }));
        assert_eq!(report.characters[0].failed, 1);
        assert!(report.store.get(Category::Su, "Razorspine").is_some());
    }

    #[test]
    fn trace_is_opt_in() {
        let batches = [CharacterItems::new("Alice", vec![row("Razorspine"), row("Mystery")])];

        assert!(dump(&batches).trace.is_empty());

        let traced = dump_with(&batches, &ReferenceTables::builtin(), &Options { trace: true });
        let rules: Vec<_> = traced.trace.iter().map(|t| t.rule).collect();
        assert_eq!(rules, vec!["su name", "fallback"]);
        assert_eq!(traced.metrics.rule_hits.get("fallback"), Some(&1));
    }

    #[test]
    fn su_rendering_scenario() {
        let report = dump(&[CharacterItems::new(
            "Alice",
            vec![row("Razorspine"), row("Icetomb"), row("Icetomb"), row("Icetomb")],
        )]);

        let post = report.trade_post();
        assert!(post.contains("[item]Razorspine[/item]\n[item]Icetomb[/item] x3\n"));
    }

    #[test]
    fn header_rows_may_omit_the_label() {
        let json = r#"[{"character": "Alice", "rows": [{"header": true}, {"label": "Razorspine"}]}]"#;
        let batches: Vec<CharacterItems> = serde_json::from_str(json).unwrap();

        assert!(batches[0].rows[0].header);
        assert_eq!(batches[0].rows[0].label, "");

        let report = dump(&batches);
        assert_eq!(report.metrics.discarded, 1);
        assert!(report.store.get(Category::Su, "Razorspine").is_some());
    }

    #[test]
    fn batches_deserialize_from_json() {
        let json = r#"[
            {"character": "Alice", "rows": [
                {"label": "Superior Long Sword", "style": "color-white", "details": ["[ethereal]"]},
                {"label": "", "header": true}
            ]},
            {"character": "Bob", "error": "timeout"}
        ]"#;
        let batches: Vec<CharacterItems> = serde_json::from_str(json).unwrap();

        assert_eq!(batches[0].rows[0].style, StyleClass::White);
        assert!(batches[0].rows[1].header);
        assert_eq!(batches[1].error.as_deref(), Some("timeout"));

        let report = dump(&batches);
        assert!(report.store.get(Category::RunewordBases, "Long Sword [eth]").is_some());
        assert_eq!(report.skipped.len(), 1);
    }
}
