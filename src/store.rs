//! Aggregate store.
//!
//! Holds the running totals of one dump request: per category, an
//! insertion-ordered map from normalized item name to an [`ItemRecord`].
//! Set items are nested one level deeper, under their set name.
//!
//! The store never shrinks. Every write goes through [`AggregateStore::increment`],
//! which creates the record on first sighting and then accumulates:
//!
//! ```text
//! increment(Su, None, "Razorspine", "Alice", 1)   -> Razorspine { 1, {Alice} }
//! increment(Su, None, "Razorspine", "Bob",   2)   -> Razorspine { 3, {Alice, Bob} }
//! increment(Su, None, "Razorspine", "Alice", 1)   -> Razorspine { 4, {Alice, Bob} }
//! ```

use indexmap::{IndexMap, IndexSet};

use crate::Category;
use crate::error::{Error, Result};

bitflags::bitflags! {
    /// Categories that hold at least one record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CategoryMask: u16 {
        const SETS          = 1 << 0;
        const SU            = 1 << 1;
        const SSU           = 1 << 2;
        const SSSU          = 1 << 3;
        const AMULETS       = 1 << 4;
        const RINGS         = 1 << 5;
        const JEWELS        = 1 << 6;
        const MAGIC_ORBS    = 1 << 7;
        const QUIVERS       = 1 << 8;
        const RUNEWORDS     = 1 << 9;
        const RW_BASES      = 1 << 10;
        const SHRINE_BASES  = 1 << 11;
        const CHARMS        = 1 << 12;
        const TROPHIES      = 1 << 13;
        const SHRINES       = 1 << 14;
        const OTHER         = 1 << 15;
    }
}

impl From<Category> for CategoryMask {
    fn from(category: Category) -> Self {
        match category {
            Category::Sets => CategoryMask::SETS,
            Category::Su => CategoryMask::SU,
            Category::Ssu => CategoryMask::SSU,
            Category::Sssu => CategoryMask::SSSU,
            Category::Amulets => CategoryMask::AMULETS,
            Category::Rings => CategoryMask::RINGS,
            Category::Jewels => CategoryMask::JEWELS,
            Category::MagicOrbs => CategoryMask::MAGIC_ORBS,
            Category::Quivers => CategoryMask::QUIVERS,
            Category::Runewords => CategoryMask::RUNEWORDS,
            Category::RunewordBases => CategoryMask::RW_BASES,
            Category::ShrineBases => CategoryMask::SHRINE_BASES,
            Category::Charms => CategoryMask::CHARMS,
            Category::Trophies => CategoryMask::TROPHIES,
            Category::Shrines => CategoryMask::SHRINES,
            Category::Other => CategoryMask::OTHER,
        }
    }
}

/// Accumulated sightings of one item name.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    name: String,
    contributors: IndexSet<String>,
    amount: f64,
}

impl ItemRecord {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), contributors: IndexSet::new(), amount: 0.0 }
    }

    fn add(&mut self, character: &str, amount: f64) {
        self.amount += amount;
        if !self.contributors.contains(character) {
            self.contributors.insert(character.to_string());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Characters that contributed, in first-seen order.
    pub fn contributors(&self) -> impl Iterator<Item = &str> {
        self.contributors.iter().map(String::as_str)
    }

    pub fn has_contributor(&self, character: &str) -> bool {
        self.contributors.contains(character)
    }
}

/// Items of one set, keyed by item name.
#[derive(Debug, Clone, PartialEq)]
pub struct SetGroup {
    name: String,
    items: IndexMap<String, ItemRecord>,
}

impl SetGroup {
    fn new(name: &str) -> Self {
        Self { name: name.to_string(), items: IndexMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.values()
    }

    pub fn get(&self, name: &str) -> Option<&ItemRecord> {
        self.items.get(name)
    }
}

type Records = IndexMap<String, ItemRecord>;

/// Per-request totals, one map per [`Category`].
#[derive(Debug, Clone, Default)]
pub struct AggregateStore {
    sets: IndexMap<String, SetGroup>,
    flat: IndexMap<Category, Records>,
    populated: CategoryMask,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` of `name` to `category` on behalf of `character`.
    ///
    /// `set` is required for [`Category::Sets`] and ignored otherwise.
    pub fn increment(
        &mut self,
        category: Category,
        set: Option<&str>,
        name: &str,
        character: &str,
        amount: f64,
    ) -> Result<()> {
        let record = match category {
            Category::Sets => {
                let set = set.ok_or_else(|| Error::MissingSetName { name: name.to_string() })?;
                let group = self.sets.entry(set.to_string()).or_insert_with(|| SetGroup::new(set));
                group.items.entry(name.to_string()).or_insert_with(|| ItemRecord::new(name))
            }
            _ => self
                .flat
                .entry(category)
                .or_default()
                .entry(name.to_string())
                .or_insert_with(|| ItemRecord::new(name)),
        };

        record.add(character, amount);
        self.populated |= CategoryMask::from(category);
        Ok(())
    }

    /// True iff any category (or any set) holds a record.
    pub fn has_data(&self) -> bool {
        !self.populated.is_empty()
    }

    pub fn populated(&self) -> CategoryMask {
        self.populated
    }

    /// Records of a flat category in first-seen order. Empty for `Sets`.
    pub fn items(&self, category: Category) -> impl Iterator<Item = &ItemRecord> {
        self.flat.get(&category).into_iter().flat_map(|records| records.values())
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&ItemRecord> {
        self.flat.get(&category)?.get(name)
    }

    /// Set groups in first-seen order.
    pub fn sets(&self) -> impl Iterator<Item = &SetGroup> {
        self.sets.values()
    }

    pub fn set(&self, name: &str) -> Option<&SetGroup> {
        self.sets.get(name)
    }

    /// Number of distinct names in `category` (set items counted across sets).
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Sets => self.sets.values().map(|group| group.items.len()).sum(),
            _ => self.flat.get(&category).map_or(0, IndexMap::len),
        }
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.len(category) == 0
    }

    /// Sum of all amounts recorded in `category`.
    pub fn total(&self, category: Category) -> f64 {
        match category {
            Category::Sets => self.sets.values().flat_map(|group| group.items.values()).map(ItemRecord::amount).sum(),
            _ => self.items(category).map(ItemRecord::amount).sum(),
        }
    }
}
