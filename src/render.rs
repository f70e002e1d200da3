//! Trade-post rendering.
//!
//! Turns an [`AggregateStore`] into the forum markup posted on the trade
//! board. Layout is fixed:
//!
//! ```text
//! Selling
//!   Sets      (one underlined heading per set)
//!   SU / SSU / SSSU
//!   Runewords
//!   Rings/Amulets/Quivers/MOs/Jewels   (one section, blank line between groups)
//!   Bases     (runeword bases grey, shrine bases yellow)
//!   Charms
//!   Trophies
//!   Misc      (shrines, blank line, everything else)
//! ```
//!
//! A section is only written when it has at least one line.

use std::fmt::Write;

use crate::store::{AggregateStore, ItemRecord};
use crate::Category;

struct Section {
    title: &'static str,
    color: &'static str,
    /// The sets section is the only one without a trailing blank line; each
    /// set already ends with one.
    trailing_newline: bool,
}

const SETS: Section = Section { title: "Sets", color: "#00FF00", trailing_newline: false };
const SU: Section = Section { title: "SU", color: "#804000", trailing_newline: true };
const SSU: Section = Section { title: "SSU", color: "#804000", trailing_newline: true };
const SSSU: Section = Section { title: "SSSU", color: "#804000", trailing_newline: true };
const RUNEWORDS: Section = Section { title: "Runewords", color: "#808080", trailing_newline: true };
const JEWELRY: Section =
    Section { title: "Rings/Amulets/Quivers/MOs/Jewels", color: "#804000", trailing_newline: true };
const BASES: Section = Section { title: "Bases", color: "#808080", trailing_newline: true };
const CHARMS: Section = Section { title: "Charms", color: "#FF7F50", trailing_newline: true };
const TROPHIES: Section = Section { title: "Trophies", color: "#FFA500", trailing_newline: true };
const MISC: Section = Section { title: "Misc", color: "#FFFFFF", trailing_newline: true };

const SET_COLOR: &str = "#00FF00";
const RW_BASE_COLOR: &str = "#808080";
const SHRINE_BASE_COLOR: &str = "#FFFF00";
const TROPHY_COLOR: &str = "#FF7F50";

/// Render the full trade post. An empty store renders to an empty string.
pub fn render_trade_post(store: &AggregateStore) -> String {
    if !store.has_data() {
        return String::new();
    }

    let mut body = String::new();

    let mut sets = String::new();
    for group in store.sets() {
        let _ = writeln!(sets, "[u][color={SET_COLOR}]{}[/color][/u]", group.name());
        for item in group.items() {
            item_line(&mut sets, item);
        }
        sets.push('\n');
    }
    push_section(&mut body, &SETS, &sets);

    push_section(&mut body, &SU, &item_lines(store, Category::Su));
    push_section(&mut body, &SSU, &item_lines(store, Category::Ssu));
    push_section(&mut body, &SSSU, &item_lines(store, Category::Sssu));
    push_section(&mut body, &RUNEWORDS, &item_lines(store, Category::Runewords));

    let groups = [Category::Rings, Category::Amulets, Category::Quivers, Category::MagicOrbs, Category::Jewels];
    push_section(&mut body, &JEWELRY, &grouped_lines(store, &groups));

    let mut bases = String::new();
    for item in store.items(Category::RunewordBases) {
        colored_line(&mut bases, item, RW_BASE_COLOR);
    }
    for item in store.items(Category::ShrineBases) {
        colored_line(&mut bases, item, SHRINE_BASE_COLOR);
    }
    push_section(&mut body, &BASES, &bases);

    push_section(&mut body, &CHARMS, &item_lines(store, Category::Charms));

    let mut trophies = String::new();
    for item in store.items(Category::Trophies) {
        colored_line(&mut trophies, item, TROPHY_COLOR);
    }
    push_section(&mut body, &TROPHIES, &trophies);

    push_section(&mut body, &MISC, &grouped_lines(store, &[Category::Shrines, Category::Other]));

    format!("[color=#FFFF00][size=26]Selling[/size][/color]\n[hr][/hr]\n{body}\n")
}

/// Format an amount for display: integral amounts without a decimal part,
/// fractional ones with at most two decimals.
///
/// ```
/// use mxl_tradepost::format_amount;
///
/// assert_eq!(format_amount(3.0), "3");
/// assert_eq!(format_amount(3.4), "3.4");
/// assert_eq!(format_amount(0.7 + 0.2), "0.9");
/// ```
pub fn format_amount(amount: f64) -> String {
    let rounded = round2(amount);
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Quantity suffix, only for amounts above one (after display rounding).
fn suffix(item: &ItemRecord) -> String {
    if round2(item.amount()) > 1.0 { format!(" x{}", format_amount(item.amount())) } else { String::new() }
}

fn item_line(out: &mut String, item: &ItemRecord) {
    let _ = writeln!(out, "[item]{}[/item]{}", item.name(), suffix(item));
}

fn colored_line(out: &mut String, item: &ItemRecord, color: &str) {
    let _ = writeln!(out, "[color={color}]{}[/color]{}", item.name(), suffix(item));
}

fn item_lines(store: &AggregateStore, category: Category) -> String {
    let mut out = String::new();
    for item in store.items(category) {
        item_line(&mut out, item);
    }
    out
}

/// Several categories in one section, separated by a blank line after each
/// non-empty group except the last one.
fn grouped_lines(store: &AggregateStore, categories: &[Category]) -> String {
    let mut out = String::new();
    let last = categories.len().saturating_sub(1);
    for (idx, &category) in categories.iter().enumerate() {
        let lines = item_lines(store, category);
        if lines.is_empty() {
            continue;
        }
        out.push_str(&lines);
        if idx != last {
            out.push('\n');
        }
    }
    out
}

fn push_section(body: &mut String, section: &Section, items: &str) {
    if items.is_empty() {
        return;
    }
    let _ = write!(body, "[color={}][size=24]{}[/size][/color]\n[hr][/hr]\n{items}", section.color, section.title);
    if section.trailing_newline {
        body.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(entries: &[(Category, Option<&str>, &str, f64)]) -> AggregateStore {
        let mut store = AggregateStore::new();
        for &(category, set, name, amount) in entries {
            store.increment(category, set, name, "Alice", amount).unwrap();
        }
        store
    }

    #[test]
    fn empty_store_renders_nothing() {
        assert_eq!(render_trade_post(&AggregateStore::new()), "");
    }

    #[test]
    fn su_section_shows_suffix_only_above_one() {
        let store = store_with(&[(Category::Su, None, "Razorspine", 1.0), (Category::Su, None, "Icetomb", 3.0)]);

        let post = render_trade_post(&store);
        assert_eq!(
            post,
            "[color=#FFFF00][size=26]Selling[/size][/color]\n[hr][/hr]\n\
             [color=#804000][size=24]SU[/size][/color]\n[hr][/hr]\n\
             [item]Razorspine[/item]\n[item]Icetomb[/item] x3\n\n\n"
        );
    }

    #[test]
    fn sets_render_heading_per_set() {
        let store = store_with(&[
            (Category::Sets, Some("Pantheon"), "Fire", 1.0),
            (Category::Sets, Some("Pantheon"), "Fire", 1.0),
            (Category::Sets, Some("Celestia's Myth"), "Celestia's Wings", 1.0),
        ]);

        let post = render_trade_post(&store);
        assert!(post.contains(
            "[color=#00FF00][size=24]Sets[/size][/color]\n[hr][/hr]\n\
             [u][color=#00FF00]Pantheon[/color][/u]\n[item]Fire[/item] x2\n\n\
             [u][color=#00FF00]Celestia's Myth[/color][/u]\n[item]Celestia's Wings[/item]\n\n"
        ));
    }

    #[test]
    fn jewelry_groups_share_one_section_in_fixed_order() {
        let store = store_with(&[
            (Category::Jewels, None, "Atomus", 1.0),
            (Category::Amulets, None, "Felblood", 1.0),
            (Category::Rings, None, "Ouroboros", 1.0),
        ]);

        let post = render_trade_post(&store);
        assert!(post.contains(
            "[hr][/hr]\n[item]Ouroboros[/item]\n\n[item]Felblood[/item]\n\n[item]Atomus[/item]\n\n"
        ));
        assert_eq!(post.matches("Rings/Amulets/Quivers/MOs/Jewels").count(), 1);
    }

    #[test]
    fn bases_use_distinct_colors() {
        let store = store_with(&[
            (Category::ShrineBases, None, "Ring Mail", 1.0),
            (Category::RunewordBases, None, "Long Sword [eth]", 2.0),
        ]);

        let post = render_trade_post(&store);
        assert!(post.contains("[color=#808080]Long Sword [eth][/color] x2\n[color=#FFFF00]Ring Mail[/color]\n"));
    }

    #[test]
    fn misc_lists_shrines_before_other() {
        let store = store_with(&[
            (Category::Other, None, "Arcane Crystal", 3.4),
            (Category::Shrines, None, "Sacred Shrine", 3.7),
        ]);

        let post = render_trade_post(&store);
        assert!(post.contains("[item]Sacred Shrine[/item] x3.7\n\n[item]Arcane Crystal[/item] x3.4\n"));
    }

    #[test]
    fn sections_follow_fixed_order() {
        let store = store_with(&[
            (Category::Other, None, "Jewel", 1.0),
            (Category::Trophies, None, "Triune Trophy", 1.0),
            (Category::Charms, None, "Shadow Vortex", 1.0),
            (Category::Runewords, None, "Amok", 1.0),
            (Category::Sssu, None, "Azurewrath", 1.0),
            (Category::Su, None, "Razorspine", 1.0),
        ]);

        let post = render_trade_post(&store);
        let order = ["]SU[", "]SSSU[", "]Runewords[", "]Charms[", "]Trophies[", "]Misc["];
        let positions: Vec<usize> = order.iter().map(|title| post.find(title).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "unexpected order: {post}");
        assert!(!post.contains("]Bases["));
        assert!(post.contains("[color=#FF7F50]Triune Trophy[/color]\n"));
    }

    #[test]
    fn amounts_rounding_to_one_show_no_suffix() {
        let store = store_with(&[
            (Category::Shrines, None, "Quiet Shrine", 0.6),
            (Category::Shrines, None, "Quiet Shrine", 0.4),
            (Category::Shrines, None, "Eerie Shrine", 0.5),
        ]);

        let post = render_trade_post(&store);
        assert!(post.contains("[item]Quiet Shrine[/item]\n[item]Eerie Shrine[/item]\n"));
    }

    #[test]
    fn format_amount_trims_float_noise() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(3.7), "3.7");
        assert_eq!(format_amount(3.4 + 3.4 + 0.2), "7");
        assert_eq!(format_amount(1.25), "1.25");
    }
}
