//! Reference tables.
//!
//! The classifier only ever asks two kinds of questions about item names:
//! "is this name in table X?" and "what does this name map to?". This module
//! owns the answers.
//!
//! Tables come from two places:
//!
//! - the built-in data compiled into the crate (`rules/item/data.rs`), and
//! - an optional TOML file that extends or replaces it (see [`TablesFile`]).
//!
//! Once built, a [`ReferenceTables`] value is read-only and is handed to the
//! classifier at construction time.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::rules::item::data;

/// Membership tables (name sets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Ignored,
    Su,
    Ssu,
    Sssu,
    Runewords,
    Amulets,
    Rings,
    Jewels,
    Quivers,
    MagicOrbs,
    Charms,
    Trophies,
}

impl Table {
    pub const ALL: [Table; 12] = [
        Table::Ignored,
        Table::Su,
        Table::Ssu,
        Table::Sssu,
        Table::Runewords,
        Table::Amulets,
        Table::Rings,
        Table::Jewels,
        Table::Quivers,
        Table::MagicOrbs,
        Table::Charms,
        Table::Trophies,
    ];

    fn builtin(self) -> &'static [&'static str] {
        match self {
            Table::Ignored => data::IGNORED,
            Table::Su => data::SU,
            Table::Ssu => data::SSU,
            Table::Sssu => data::SSSU,
            Table::Runewords => data::RUNEWORDS,
            Table::Amulets => data::AMULETS,
            Table::Rings => data::RINGS,
            Table::Jewels => data::JEWELS,
            Table::Quivers => data::QUIVERS,
            Table::MagicOrbs => data::MAGIC_ORBS,
            Table::Charms => data::CHARMS,
            Table::Trophies => data::TROPHIES,
        }
    }
}

/// Immutable lookup data used by the classifier.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    names: HashMap<Table, HashSet<String>>,
    /// Vessel name -> shrine name.
    vessels: HashMap<String, String>,
    /// Set item name -> set name.
    set_items: HashMap<String, String>,
    /// Corrupted label fragment -> canonical SU name. Checked in insertion order.
    su_aliases: IndexMap<String, String>,
}

impl ReferenceTables {
    /// Tables with no entries at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tables compiled into the crate.
    pub fn builtin() -> Self {
        let mut tables = Self::empty();
        for table in Table::ALL {
            tables.extend(table, table.builtin().iter().copied());
        }
        tables.vessels = pairs(data::VESSEL_SHRINES).collect();
        tables.set_items = pairs(data::SET_ITEMS).collect();
        tables.su_aliases = pairs(data::SU_ALIASES).collect();
        tables
    }

    /// Parse a TOML tables file and apply it on top of the built-in data
    /// (or on an empty set, in `replace` mode).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: TablesFile = toml::from_str(text)?;
        Ok(file.into_tables())
    }

    /// Read and parse a TOML tables file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn contains(&self, table: Table, name: &str) -> bool {
        self.names.get(&table).is_some_and(|set| set.contains(name))
    }

    pub fn len(&self, table: Table) -> usize {
        self.names.get(&table).map_or(0, HashSet::len)
    }

    pub fn is_vessel(&self, name: &str) -> bool {
        self.vessels.contains_key(name)
    }

    /// Shrine refilled by the vessel `name`.
    pub fn shrine_for_vessel(&self, name: &str) -> Option<&str> {
        self.vessels.get(name).map(String::as_str)
    }

    /// Set the item `name` belongs to, if known.
    pub fn set_for_item(&self, name: &str) -> Option<&str> {
        self.set_items.get(name).map(String::as_str)
    }

    /// Canonical SU name for a label containing a known corrupted fragment.
    pub fn su_alias(&self, label: &str) -> Option<&str> {
        self.su_aliases.iter().find(|(fragment, _)| label.contains(fragment.as_str())).map(|(_, name)| name.as_str())
    }

    /// Add names to a membership table.
    pub fn extend<I, S>(&mut self, table: Table, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.entry(table).or_default().extend(names.into_iter().map(Into::into));
    }

    pub fn insert_vessel(&mut self, vessel: impl Into<String>, shrine: impl Into<String>) {
        self.vessels.insert(vessel.into(), shrine.into());
    }

    pub fn insert_set_item(&mut self, item: impl Into<String>, set: impl Into<String>) {
        self.set_items.insert(item.into(), set.into());
    }

    pub fn insert_su_alias(&mut self, fragment: impl Into<String>, name: impl Into<String>) {
        self.su_aliases.insert(fragment.into(), name.into());
    }
}

fn pairs(raw: &'static [(&'static str, &'static str)]) -> impl Iterator<Item = (String, String)> {
    raw.iter().map(|(k, v)| (k.to_string(), v.to_string()))
}

// --- TOML tables file --------------------------------------------------------

/// How a tables file combines with the built-in data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablesMode {
    /// Add the file's entries to the built-in tables.
    #[default]
    Extend,
    /// Use only the file's entries.
    Replace,
}

/// On-disk shape of a tables file.
///
/// ```toml
/// mode = "extend"
/// su = ["Some New Unique"]
///
/// [vessels]
/// "Odd Vessel" = "Odd Shrine"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TablesFile {
    pub mode: TablesMode,
    pub ignored: Vec<String>,
    pub su: Vec<String>,
    pub ssu: Vec<String>,
    pub sssu: Vec<String>,
    pub runewords: Vec<String>,
    pub amulets: Vec<String>,
    pub rings: Vec<String>,
    pub jewels: Vec<String>,
    pub quivers: Vec<String>,
    #[serde(alias = "mos")]
    pub magic_orbs: Vec<String>,
    pub charms: Vec<String>,
    pub trophies: Vec<String>,
    pub vessels: HashMap<String, String>,
    pub set_items: HashMap<String, String>,
    pub su_aliases: IndexMap<String, String>,
}

impl TablesFile {
    pub fn into_tables(self) -> ReferenceTables {
        let mut tables = match self.mode {
            TablesMode::Extend => ReferenceTables::builtin(),
            TablesMode::Replace => ReferenceTables::empty(),
        };

        let lists = [
            (Table::Ignored, self.ignored),
            (Table::Su, self.su),
            (Table::Ssu, self.ssu),
            (Table::Sssu, self.sssu),
            (Table::Runewords, self.runewords),
            (Table::Amulets, self.amulets),
            (Table::Rings, self.rings),
            (Table::Jewels, self.jewels),
            (Table::Quivers, self.quivers),
            (Table::MagicOrbs, self.magic_orbs),
            (Table::Charms, self.charms),
            (Table::Trophies, self.trophies),
        ];
        for (table, names) in lists {
            tables.extend(table, names);
        }
        for (vessel, shrine) in self.vessels {
            tables.insert_vessel(vessel, shrine);
        }
        for (item, set) in self.set_items {
            tables.insert_set_item(item, set);
        }
        for (fragment, name) in self.su_aliases {
            tables.insert_su_alias(fragment, name);
        }

        log::debug!("reference tables loaded (mode={:?}, su={})", self.mode, tables.len(Table::Su));
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_tables_know_core_names() {
        let tables = ReferenceTables::builtin();

        assert!(tables.contains(Table::Ignored, "Horadric Cube"));
        assert!(tables.contains(Table::Su, "Razorspine"));
        assert!(tables.contains(Table::Sssu, "Azurewrath"));
        assert!(tables.contains(Table::Runewords, "Victory\n(Median XL - 6 years)"));
        assert!(tables.contains(Table::MagicOrbs, "The Demon Core"));
        assert!(!tables.contains(Table::Su, "Hanfod T\u{e2}n"));
        assert_eq!(tables.shrine_for_vessel("Sacred Vessel"), Some("Sacred Shrine"));
        assert_eq!(tables.set_for_item("Fire"), Some("Pantheon"));
    }

    #[test]
    fn su_alias_matches_fragment_anywhere_in_label() {
        let tables = ReferenceTables::builtin();

        assert_eq!(tables.su_alias("Hanfod TÃ¢n"), Some("Hanfod T\u{e2}n"));
        assert_eq!(tables.su_alias("Razorspine"), None);
    }

    #[test]
    fn extend_mode_keeps_builtin_entries() {
        let tables = ReferenceTables::from_toml_str(
            r#"
            su = ["Brand New Unique"]

            [vessels]
            "Odd Vessel" = "Odd Shrine"
            "#,
        )
        .unwrap();

        assert!(tables.contains(Table::Su, "Brand New Unique"));
        assert!(tables.contains(Table::Su, "Razorspine"));
        assert_eq!(tables.shrine_for_vessel("Odd Vessel"), Some("Odd Shrine"));
        assert!(tables.is_vessel("Creepy Vessel"));
    }

    #[test]
    fn replace_mode_starts_from_empty_tables() {
        let tables = ReferenceTables::from_toml_str(
            r#"
            mode = "replace"
            mos = ["Glass Marble"]
            "#,
        )
        .unwrap();

        assert!(tables.contains(Table::MagicOrbs, "Glass Marble"));
        assert!(!tables.contains(Table::Su, "Razorspine"));
        assert_eq!(tables.len(Table::Runewords), 0);
        assert!(!tables.is_vessel("Creepy Vessel"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ReferenceTables::from_toml_str("crafted = [\"Thing\"]").unwrap_err();
        assert!(matches!(err, crate::Error::TablesToml(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_reads_tables_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "trophies = [\"Shiny Trophy\"]").unwrap();

        let tables = ReferenceTables::load(file.path()).unwrap();
        assert!(tables.contains(Table::Trophies, "Shiny Trophy"));
        assert!(tables.contains(Table::Trophies, "Triune Trophy"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReferenceTables::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
