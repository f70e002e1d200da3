use crate::tables::{ReferenceTables, Table};
use crate::{RawItem, StyleClass};

/// Returns true for structural rows that carry no item.
pub fn is_header(item: &RawItem, _: &ReferenceTables) -> bool {
    item.header
}

pub fn is_ignored(item: &RawItem, tables: &ReferenceTables) -> bool {
    tables.contains(Table::Ignored, &item.label)
}

pub fn in_table<const T: u8>(item: &RawItem, tables: &ReferenceTables) -> bool {
    tables.contains(table_of(T), &item.label)
}

/// Returns true when the label contains a fragment of a garbled SU name.
pub fn has_su_alias(item: &RawItem, tables: &ReferenceTables) -> bool {
    tables.su_alias(&item.label).is_some()
}

/// Returns true for the bare, unnamed `Jewel` label.
pub fn is_generic_jewel(item: &RawItem, _: &ReferenceTables) -> bool {
    item.label == "Jewel"
}

/// Returns true for white and blue labels (runeword base candidates).
pub fn is_plain_style(item: &RawItem, _: &ReferenceTables) -> bool {
    item.style.is_plain()
}

/// Returns true for yellow labels (shrine base candidates).
pub fn is_yellow_style(item: &RawItem, _: &ReferenceTables) -> bool {
    item.style == StyleClass::Yellow
}

pub fn is_vessel(item: &RawItem, tables: &ReferenceTables) -> bool {
    tables.is_vessel(&item.label)
}

pub fn is_arcane_cluster(item: &RawItem, _: &ReferenceTables) -> bool {
    item.label == "Arcane Cluster"
}

// Const-generic discriminants for `in_table`; `fn` pointers cannot capture.
pub const SU: u8 = 0;
pub const SSU: u8 = 1;
pub const SSSU: u8 = 2;
pub const RUNEWORDS: u8 = 3;
pub const AMULETS: u8 = 4;
pub const RINGS: u8 = 5;
pub const JEWELS: u8 = 6;
pub const QUIVERS: u8 = 7;
pub const MAGIC_ORBS: u8 = 8;
pub const CHARMS: u8 = 9;
pub const TROPHIES: u8 = 10;

const fn table_of(t: u8) -> Table {
    match t {
        SU => Table::Su,
        SSU => Table::Ssu,
        SSSU => Table::Sssu,
        RUNEWORDS => Table::Runewords,
        AMULETS => Table::Amulets,
        RINGS => Table::Rings,
        JEWELS => Table::Jewels,
        QUIVERS => Table::Quivers,
        MAGIC_ORBS => Table::MagicOrbs,
        CHARMS => Table::Charms,
        _ => Table::Trophies,
    }
}
