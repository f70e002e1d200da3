//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: the structures derived
//! from the full rule list once, before any row is classified.
//!
//! Classification is split into two phases:
//!
//! 1. **Compile/index rules** (this module): wrap the rule list in
//!    `CompiledRules` and index it by coarse label buckets.
//! 2. **Run** (see `classifier.rs`): scan each row for buckets (`trigger.rs`),
//!    pick the active rules and try them in order.
//!
//! ## Extension points
//!
//! Adding a new bucket:
//!   1. Add a `LabelMask` bit.
//!   2. Add a `BUCKET_*` constant and bump `BUCKET_COUNT`.
//!   3. Teach `CompiledRules::new` to index it.
//!   4. Teach `LabelInfo::scan` (in `trigger.rs`) to detect it.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` and `CompiledRules::metas`.
//!   Those vectors must stay aligned.
//! - Lower `RuleId` means higher precedence. `CompiledRules::active` always
//!   returns ids sorted ascending.

use std::collections::BTreeSet;

use crate::Rule;

/// Rule identifier (index into the rules vector).
pub(crate) type RuleId = usize;

bitflags::bitflags! {
    /// Coarse features of a row, used to skip rules that cannot match.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LabelMask: u32 {
        /// Label contains `[`.
        const HAS_BRACKET = 1 << 0;
        /// Label contains `(`.
        const HAS_PARENS  = 1 << 1;
        /// White or blue style.
        const PLAIN_STYLE = 1 << 2;
    }
}

/// Metadata attached to a rule at compile time.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    pub name: &'static str,
    pub buckets: LabelMask,
}

#[derive(Default, Debug)]
pub struct RuleIndex {
    pub always_on: Vec<RuleId>,
    pub by_bucket: [Vec<RuleId>; BUCKET_COUNT],
}

pub const BUCKET_COUNT: usize = 3;
pub const BUCKET_HAS_BRACKET: usize = 0;
pub const BUCKET_HAS_PARENS: usize = 1;
pub const BUCKET_PLAIN_STYLE: usize = 2;

const BUCKETS: [(LabelMask, usize); BUCKET_COUNT] = [
    (LabelMask::HAS_BRACKET, BUCKET_HAS_BRACKET),
    (LabelMask::HAS_PARENS, BUCKET_HAS_PARENS),
    (LabelMask::PLAIN_STYLE, BUCKET_PLAIN_STYLE),
];

/// Pre-compiled rule set with metadata and indexes.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: Vec<&'a Rule>,
    pub metas: Vec<RuleMeta>,
    pub index: RuleIndex,
}

impl<'a> CompiledRules<'a> {
    /// Create a compiled rule set from a slice of rules. Rule order is kept.
    pub fn new(rules: &'a [Rule]) -> Self {
        let rule_refs: Vec<&Rule> = rules.iter().collect();

        let metas: Vec<RuleMeta> = rule_refs
            .iter()
            .map(|r| RuleMeta { name: r.name, buckets: LabelMask::from_bits_truncate(r.buckets) })
            .collect();

        let mut index = RuleIndex::default();
        for (id, meta) in metas.iter().enumerate() {
            if meta.buckets.is_empty() {
                index.always_on.push(id);
                continue;
            }
            for (flag, slot) in BUCKETS {
                if meta.buckets.contains(flag) {
                    index.by_bucket[slot].push(id);
                }
            }
        }

        log::debug!(
            "compiled {} rules ({} always on, {} bucketed)",
            metas.len(),
            index.always_on.len(),
            metas.len() - index.always_on.len()
        );

        CompiledRules { rules: rule_refs, metas, index }
    }

    /// Rules that may match a row with the given features, in precedence order.
    ///
    /// A bucketed rule is active only when the row carries every bucket the
    /// rule declares.
    pub fn active(&self, mask: LabelMask) -> Vec<RuleId> {
        let mut ids: BTreeSet<RuleId> = self.index.always_on.iter().copied().collect();
        for (flag, slot) in BUCKETS {
            if mask.contains(flag) {
                ids.extend(&self.index.by_bucket[slot]);
            }
        }
        ids.into_iter().filter(|&id| mask.contains(self.metas[id].buckets)).collect()
    }
}
