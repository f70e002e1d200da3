extern crate self as mxl_tradepost;

use regex::Regex;
use serde::Deserialize;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod render;
mod rules;
mod store;
mod tables;

pub use api::{
    CharacterItems, CharacterSummary, DumpReport, ItemDump, Options, SkippedCharacter, classify, classify_with, dump,
    dump_with,
};
pub use engine::{RowTrace, RunMetrics};
pub use error::{Error, Result};
pub use render::{format_amount, render_trade_post};
pub use store::{AggregateStore, CategoryMask, ItemRecord, SetGroup};
pub use tables::{ReferenceTables, Table, TablesFile, TablesMode};

// --- Row model --------------------------------------------------------------

/// Style class the armory attaches to an item label.
///
/// Only the plain colors matter for classification; every other class
/// (unique gold, set green, crafted orange, ...) collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum StyleClass {
    White,
    Blue,
    Yellow,
    #[default]
    Other,
}

impl StyleClass {
    /// Returns true for the white/blue styles used by runeword base candidates.
    pub fn is_plain(self) -> bool {
        matches!(self, StyleClass::White | StyleClass::Blue)
    }
}

impl From<&str> for StyleClass {
    /// Accepts both bare color names and the scraped `color-*` CSS classes.
    fn from(value: &str) -> Self {
        let value = value.trim();
        let color = value.strip_prefix("color-").unwrap_or(value);
        match color.to_ascii_lowercase().as_str() {
            "white" => StyleClass::White,
            "blue" => StyleClass::Blue,
            "yellow" => StyleClass::Yellow,
            _ => StyleClass::Other,
        }
    }
}

impl From<String> for StyleClass {
    fn from(value: String) -> Self {
        StyleClass::from(value.as_str())
    }
}

/// One scraped inventory row, as handed over by the armory scraper.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawItem {
    /// Display label of the item. Header rows may omit it.
    #[serde(default)]
    pub label: String,
    /// Style class of the label.
    #[serde(default)]
    pub style: StyleClass,
    /// Free-text fields attached to the row (stats, `Quantity: N`, `[ethereal]`...).
    #[serde(default)]
    pub details: Vec<String>,
    /// Structural rows (table headers, separators) carry no item.
    #[serde(default)]
    pub header: bool,
}

impl RawItem {
    pub fn new(label: impl Into<String>, style: StyleClass) -> Self {
        Self { label: label.into(), style, details: Vec::new(), header: false }
    }

    /// A structural, non-item row.
    pub fn header_row() -> Self {
        Self { header: true, ..Self::default() }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

// --- Categories -------------------------------------------------------------

/// The sixteen buckets a dump is partitioned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Sets,
    Su,
    Ssu,
    Sssu,
    Amulets,
    Rings,
    Jewels,
    MagicOrbs,
    Quivers,
    Runewords,
    RunewordBases,
    ShrineBases,
    Charms,
    Trophies,
    Shrines,
    Other,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Sets,
        Category::Su,
        Category::Ssu,
        Category::Sssu,
        Category::Amulets,
        Category::Rings,
        Category::Jewels,
        Category::MagicOrbs,
        Category::Quivers,
        Category::Runewords,
        Category::RunewordBases,
        Category::ShrineBases,
        Category::Charms,
        Category::Trophies,
        Category::Shrines,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Sets => "sets",
            Category::Su => "su",
            Category::Ssu => "ssu",
            Category::Sssu => "sssu",
            Category::Amulets => "amulets",
            Category::Rings => "rings",
            Category::Jewels => "jewels",
            Category::MagicOrbs => "mos",
            Category::Quivers => "quivers",
            Category::Runewords => "runewords",
            Category::RunewordBases => "rw_bases",
            Category::ShrineBases => "shrine_bases",
            Category::Charms => "charms",
            Category::Trophies => "trophies",
            Category::Shrines => "shrines",
            Category::Other => "other",
        }
    }
}

// --- Classification results -------------------------------------------------

/// A single store increment produced by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub category: Category,
    /// Set name; only present (and required) for `Category::Sets`.
    pub set: Option<String>,
    pub name: String,
    pub amount: f64,
}

impl Entry {
    /// One unit of `name` in a flat category.
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self::with_amount(category, name, 1.0)
    }

    pub fn with_amount(category: Category, name: impl Into<String>, amount: f64) -> Self {
        debug_assert!(category != Category::Sets, "set items need a set name");
        Entry { category, set: None, name: name.into(), amount }
    }

    pub fn set_item(set: impl Into<String>, name: impl Into<String>) -> Self {
        Entry { category: Category::Sets, set: Some(set.into()), name: name.into(), amount: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Header rows and ignored items.
    Discard,
    Count(Entry),
}

/// Classification plus the name of the rule that decided it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub rule: &'static str,
    pub classification: Classification,
}

// --- Rules ------------------------------------------------------------------

pub(crate) type Outcome = Result<Classification>;

// Trait to convert rule production results into outcomes
pub(crate) trait IntoOutcome {
    fn into_outcome(self) -> Option<Outcome>;
}

impl IntoOutcome for Classification {
    fn into_outcome(self) -> Option<Outcome> {
        Some(Ok(self))
    }
}

impl IntoOutcome for Entry {
    fn into_outcome(self) -> Option<Outcome> {
        Some(Ok(Classification::Count(self)))
    }
}

impl IntoOutcome for Result<Entry> {
    fn into_outcome(self) -> Option<Outcome> {
        Some(self.map(Classification::Count))
    }
}

/// Pattern items used by rules. Every pattern of a rule must match for the
/// production to run.
#[derive(Debug)]
pub(crate) enum Pattern {
    /// Regular expression searched in the label. The `Regex` is a static
    /// reference created via the `regex!` helper macro in `src/macros.rs`;
    /// its capture groups are handed to the production.
    Regex(&'static Regex),

    /// Predicate over the whole row and the reference tables.
    Predicate(fn(&RawItem, &ReferenceTables) -> bool),
}

/// What a production sees once every pattern of its rule matched.
#[derive(Debug)]
pub(crate) struct Matched<'r> {
    pub item: &'r RawItem,
    /// Capture groups of the regex patterns, group 0 included, in pattern order.
    pub groups: &'r [String],
    pub tables: &'r ReferenceTables,
}

pub(crate) type Production =
    Box<dyn Fn(&RawItem, &[String], &ReferenceTables) -> Option<Outcome> + Send + Sync>;

/// A classification rule: a name, the patterns that must all match, the
/// coarse label buckets it needs, and a production that turns the match into
/// an outcome. A production returning `None` passes the row on to the next rule.
pub(crate) struct Rule {
    pub name: &'static str,
    pub pattern: Vec<Pattern>,
    pub production: Production,
    /// Bucket mask - rule is only tried when the label carries every bucket.
    pub buckets: u32,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .finish()
    }
}
