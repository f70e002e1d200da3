use crate::engine::LabelMask;
use crate::error::Error;
use crate::rules::item::helpers::{
    ARCANE_CRYSTAL, SHARDS_PER_CRYSTAL, SHRINE_PERCENT_PER_UNIT, base_name, divided_count, group, quantity,
    strip_count_suffix, strip_set_suffix,
};
use crate::rules::item::predicates::{
    AMULETS, CHARMS, JEWELS, MAGIC_ORBS, QUIVERS, RINGS, RUNEWORDS, SSSU, SSU, SU, TROPHIES, has_su_alias, in_table,
    is_arcane_cluster, is_generic_jewel, is_header, is_ignored, is_plain_style, is_vessel, is_yellow_style,
};
use crate::{Category, Classification, Entry, Rule};

/// Build a rule that counts one unit of the raw label when it is a member of
/// the given table.
macro_rules! table_rule {
    ($name:literal, $table:ident, $category:expr) => {
        rule! {
            name: $name,
            pattern: [pred!(in_table::<$table>)],
            prod: |m| -> Option<Entry> {
                Some(Entry::new($category, m.item.label.as_str()))
            }
        }
    };
}

fn rule_header() -> Rule {
    rule! {
        name: "header row",
        pattern: [pred!(is_header)],
        prod: |_m| -> Option<Classification> { Some(Classification::Discard) }
    }
}

fn rule_ignored() -> Rule {
    rule! {
        name: "ignored name",
        pattern: [pred!(is_ignored)],
        prod: |_m| -> Option<Classification> { Some(Classification::Discard) }
    }
}

fn rule_set_item() -> Rule {
    rule! {
        name: "set item",
        pattern: [re!(r"\[([^\]]+)")],
        buckets: LabelMask::HAS_BRACKET.bits(),
        prod: |m| -> Option<crate::Result<Entry>> {
            let set = group(&m, 1)?.trim();
            let name = strip_set_suffix(&m.item.label);
            if name.is_empty() || set.is_empty() {
                Some(Err(Error::malformed(&m.item.label, "an item name followed by '[Set Name]'")))
            } else {
                if let Some(known) = m.tables.set_for_item(name) {
                    if known != set {
                        log::warn!("set item {name:?} listed under {set:?}, reference table says {known:?}");
                    }
                }
                Some(Ok(Entry::set_item(set, name)))
            }
        }
    }
}

fn rule_su() -> Rule {
    table_rule!("su name", SU, Category::Su)
}

fn rule_su_alias() -> Rule {
    rule! {
        name: "su name (garbled)",
        pattern: [pred!(has_su_alias)],
        prod: |m| -> Option<Entry> {
            let canonical = m.tables.su_alias(&m.item.label)?;
            log::debug!("re-mapped garbled label {:?} to {canonical:?}", m.item.label);
            Some(Entry::new(Category::Su, canonical))
        }
    }
}

fn rule_generic_jewel() -> Rule {
    rule! {
        name: "generic jewel",
        pattern: [pred!(is_generic_jewel)],
        prod: |m| -> Option<Entry> { Some(Entry::new(Category::Other, m.item.label.as_str())) }
    }
}

fn rule_ssu() -> Rule {
    table_rule!("ssu name", SSU, Category::Ssu)
}

fn rule_sssu() -> Rule {
    table_rule!("sssu name", SSSU, Category::Sssu)
}

fn rule_runeword() -> Rule {
    table_rule!("runeword name", RUNEWORDS, Category::Runewords)
}

fn rule_amulet() -> Rule {
    table_rule!("amulet name", AMULETS, Category::Amulets)
}

fn rule_ring() -> Rule {
    table_rule!("ring name", RINGS, Category::Rings)
}

fn rule_jewel() -> Rule {
    table_rule!("jewel name", JEWELS, Category::Jewels)
}

fn rule_quiver() -> Rule {
    table_rule!("quiver name", QUIVERS, Category::Quivers)
}

fn rule_magic_orb() -> Rule {
    table_rule!("magic orb name", MAGIC_ORBS, Category::MagicOrbs)
}

fn rule_runeword_base() -> Rule {
    rule! {
        name: "runeword base",
        pattern: [pred!(is_plain_style)],
        buckets: LabelMask::PLAIN_STYLE.bits(),
        prod: |m| -> Option<Entry> { Some(Entry::new(Category::RunewordBases, base_name(m.item))) }
    }
}

fn rule_shrine_base() -> Rule {
    rule! {
        name: "shrine base",
        pattern: [pred!(is_yellow_style)],
        prod: |m| -> Option<Entry> { Some(Entry::new(Category::ShrineBases, m.item.label.as_str())) }
    }
}

fn rule_charm() -> Rule {
    table_rule!("charm name", CHARMS, Category::Charms)
}

fn rule_shrine_count() -> Rule {
    rule! {
        name: "shrine (<n>%)",
        pattern: [re!(r"Shrine \(([^)]+)")],
        buckets: LabelMask::HAS_PARENS.bits(),
        prod: |m| -> Option<crate::Result<Entry>> {
            let label = &m.item.label;
            Some(
                divided_count(m.item, group(&m, 1), SHRINE_PERCENT_PER_UNIT, "a shrine count like '(37%)'")
                    .map(|amount| Entry::with_amount(Category::Shrines, strip_count_suffix(label), amount)),
            )
        }
    }
}

fn rule_vessel() -> Rule {
    rule! {
        name: "shrine vessel",
        pattern: [pred!(is_vessel)],
        prod: |m| -> Option<crate::Result<Entry>> {
            let shrine = m.tables.shrine_for_vessel(&m.item.label)?;
            Some(quantity(m.item).map(|amount| Entry::with_amount(Category::Shrines, shrine, amount)))
        }
    }
}

fn rule_arcane_cluster() -> Rule {
    rule! {
        name: "arcane cluster",
        pattern: [pred!(is_arcane_cluster)],
        prod: |m| -> Option<crate::Result<Entry>> {
            Some(quantity(m.item).map(|amount| Entry::with_amount(Category::Other, ARCANE_CRYSTAL, amount)))
        }
    }
}

fn rule_arcane_shards() -> Rule {
    rule! {
        name: "arcane shards (<n>)",
        pattern: [re!(r"Shards \(([^)]+)")],
        buckets: LabelMask::HAS_PARENS.bits(),
        prod: |m| -> Option<crate::Result<Entry>> {
            Some(
                divided_count(m.item, group(&m, 1), SHARDS_PER_CRYSTAL, "a shard count like '(17)'")
                    .map(|amount| Entry::with_amount(Category::Other, ARCANE_CRYSTAL, amount)),
            )
        }
    }
}

fn rule_trophy() -> Rule {
    table_rule!("trophy name", TROPHIES, Category::Trophies)
}

fn rule_fallback() -> Rule {
    rule! {
        name: "fallback",
        pattern: [],
        prod: |m| -> Option<Entry> { Some(Entry::new(Category::Other, m.item.label.as_str())) }
    }
}

/// All item rules, in decision order. The first rule that produces an
/// outcome wins.
pub fn get() -> Vec<Rule> {
    vec![
        rule_header(),
        rule_ignored(),
        rule_set_item(),
        rule_su(),
        rule_su_alias(),
        rule_generic_jewel(),
        rule_ssu(),
        rule_sssu(),
        rule_runeword(),
        rule_amulet(),
        rule_ring(),
        rule_jewel(),
        rule_quiver(),
        rule_magic_orb(),
        rule_runeword_base(),
        rule_shrine_base(),
        rule_charm(),
        rule_shrine_count(),
        rule_vessel(),
        rule_arcane_cluster(),
        rule_arcane_shards(),
        rule_trophy(),
        rule_fallback(),
    ]
}
