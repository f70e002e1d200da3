use crate::error::{Error, Result};
use crate::{Matched, RawItem};

/// Marker the armory prints for ethereal items.
pub const ETHEREAL_MARKER: &str = "[ethereal]";

/// Shrine percentage points per shrine.
pub const SHRINE_PERCENT_PER_UNIT: f64 = 10.0;

/// Arcane shards per Arcane Crystal.
pub const SHARDS_PER_CRYSTAL: f64 = 5.0;

/// Canonical name every arcane resource is counted under.
pub const ARCANE_CRYSTAL: &str = "Arcane Crystal";

/// Return capture group `idx` of the rule's regex patterns.
pub fn group<'r>(m: &Matched<'r>, idx: usize) -> Option<&'r str> {
    m.groups.get(idx).map(String::as_str)
}

/// Label text before the first `[`, trimmed.
///
/// ```text
/// "Fire [Pantheon]" -> "Fire"
/// ```
pub fn strip_set_suffix(label: &str) -> &str {
    label.split('[').next().unwrap_or(label).trim()
}

/// Label text before the first `(`, trimmed.
pub fn strip_count_suffix(label: &str) -> &str {
    label.split('(').next().unwrap_or(label).trim()
}

/// True when an attached field carries the ethereal marker. A bracketed label
/// never reaches the base rules: the set rule takes it first.
pub fn is_ethereal(item: &RawItem) -> bool {
    item.details.iter().any(|d| d.contains(ETHEREAL_MARKER))
}

/// Normalized runeword base name: `Superior ` dropped, ` [eth]` appended for
/// ethereal bases.
///
/// ```text
/// "Superior Long Sword"              -> "Long Sword"
/// "Superior Long Sword" + [ethereal] -> "Long Sword [eth]"
/// ```
pub fn base_name(item: &RawItem) -> String {
    let name = item.label.replace("Superior ", "");
    if is_ethereal(item) { format!("{name} [eth]") } else { name }
}

/// Parse a whole count such as `37`, `37%` or ` 17 `.
pub fn parse_count(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let raw = raw.strip_suffix('%').unwrap_or(raw).trim();
    raw.parse::<u32>().ok().map(f64::from)
}

/// Read the `Quantity: N` field attached to the row.
pub fn quantity(item: &RawItem) -> Result<f64> {
    let re = regex!(r"Quantity:\s*([0-9]+)");
    item.details
        .iter()
        .find_map(|detail| re.captures(detail))
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_count(m.as_str()))
        .ok_or_else(|| Error::malformed(&item.label, "a 'Quantity: N' field"))
}

/// Parse a parenthesized count captured by a rule regex and divide it.
pub fn divided_count(item: &RawItem, raw: Option<&str>, divisor: f64, expected: &'static str) -> Result<f64> {
    raw.and_then(parse_count).map(|n| n / divisor).ok_or_else(|| Error::malformed(&item.label, expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReferenceTables, StyleClass};

    #[test]
    fn group_reads_capture_by_index() {
        let item = RawItem::new("Fire [Pantheon]", StyleClass::Other);
        let tables = ReferenceTables::empty();
        let groups = vec!["[Pantheon".to_string(), "Pantheon".to_string()];
        let m = Matched { item: &item, groups: &groups, tables: &tables };

        assert_eq!(group(&m, 1), Some("Pantheon"));
        assert_eq!(group(&m, 2), None);
    }

    #[test]
    fn set_suffix_is_stripped() {
        assert_eq!(strip_set_suffix("Fire [Pantheon]"), "Fire");
        assert_eq!(strip_set_suffix("Red Vex' Sin [Red Vex' Embrace]"), "Red Vex' Sin");
        assert_eq!(strip_set_suffix("Plain"), "Plain");
    }

    #[test]
    fn counts_accept_percent_sign() {
        assert_eq!(parse_count("37%"), Some(37.0));
        assert_eq!(parse_count(" 17 "), Some(17.0));
        assert_eq!(parse_count("abc"), None);
        assert_eq!(parse_count("-3"), None);
    }

    #[test]
    fn quantity_reads_first_matching_field() {
        let item = RawItem::new("Sacred Vessel", StyleClass::Other)
            .with_detail("Can be opened")
            .with_detail("Quantity: 12");
        assert_eq!(quantity(&item).unwrap(), 12.0);
    }

    #[test]
    fn missing_quantity_is_malformed() {
        let item = RawItem::new("Sacred Vessel", StyleClass::Other).with_detail("Quantity: lots");
        let err = quantity(&item).unwrap_err();
        assert!(matches!(err, Error::MalformedMetadata { ref label, .. } if label == "Sacred Vessel"));
    }

    #[test]
    fn base_name_handles_ethereal_and_superior() {
        let plain = RawItem::new("Superior Long Sword", StyleClass::White);
        assert_eq!(base_name(&plain), "Long Sword");

        let eth = plain.clone().with_detail("[ethereal]");
        assert_eq!(base_name(&eth), "Long Sword [eth]");

        let normal = RawItem::new("Ring Mail", StyleClass::Blue);
        assert_eq!(base_name(&normal), "Ring Mail");

        let marked_label = RawItem::new("Long Sword [ethereal]", StyleClass::White);
        assert!(!is_ethereal(&marked_label));
    }
}
