//! Trigger scanning (row pre-classification).
//!
//! Inspects a raw row and produces the coarse `LabelMask` used to gate
//! bucketed rules. The scan is a heuristic: a bucket being present does not
//! mean a rule matches, only that it might. A bucket being absent must mean
//! the rule cannot match.

use super::compiled_rules::LabelMask;
use crate::RawItem;

/// Row characteristics detected before rule matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInfo {
    pub buckets: LabelMask,
}

impl LabelInfo {
    pub fn scan(item: &RawItem) -> Self {
        let mut buckets = LabelMask::empty();

        if item.label.contains('[') {
            buckets |= LabelMask::HAS_BRACKET;
        }
        if item.label.contains('(') {
            buckets |= LabelMask::HAS_PARENS;
        }
        if item.style.is_plain() {
            buckets |= LabelMask::PLAIN_STYLE;
        }

        Self { buckets }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleClass;

    #[test]
    fn scan_detects_label_features() {
        let set = LabelInfo::scan(&RawItem::new("Fire [Pantheon]", StyleClass::Other));
        assert_eq!(set.buckets, LabelMask::HAS_BRACKET);

        let shrine = LabelInfo::scan(&RawItem::new("Sacred Shrine (37%)", StyleClass::Other));
        assert_eq!(shrine.buckets, LabelMask::HAS_PARENS);

        let base = LabelInfo::scan(&RawItem::new("Long Sword", StyleClass::Blue));
        assert_eq!(base.buckets, LabelMask::PLAIN_STYLE);

        let plain = LabelInfo::scan(&RawItem::new("Razorspine", StyleClass::Yellow));
        assert!(plain.buckets.is_empty());
    }
}
