//! Classification engine.
//!
//! The engine turns scraped inventory rows into store increments. It is split
//! into small submodules under `src/engine/`:
//!
//! ```text
//! rules (all)  ──┐
//!               │  CompiledRules::new            (compiled_rules.rs)
//!               └───────────────┬──────────────
//!                               │
//! row ── LabelInfo::scan ───────┼─ active rule ids, in declaration order
//!        (trigger.rs)           │
//!                               v
//!                     Classifier::classify (classifier.rs)
//!                       - match every pattern of the rule
//!                       - run the production
//!                       - first outcome wins
//!                               │
//!                               v
//!                     Classifier::run
//!                       - apply increments to the AggregateStore
//!                       - collect failures, metrics, traces (metrics.rs)
//! ```
//!
//! Unlike a saturating parser, classification is a single pass: each row is
//! offered to the rules in order and the first rule whose production returns
//! an outcome decides it. The fallback rule has no patterns, so every row that
//! reaches it is counted.
//!
//! ## Adding rules
//!
//! Rules live in `src/rules/item/rules.rs`. If a rule can only match rows with
//! some cheap feature (a bracket, a parenthesis, a plain style), give it a
//! `LabelMask` bucket so rows without that feature skip it. Bucket gating never
//! changes which rule wins; it only avoids evaluating rules that cannot match.
//!
//! ## Debugging
//!
//! Per-row verdicts are logged at `debug` level under the `mxl_tradepost`
//! target; run the CLI with `RUST_LOG=mxl_tradepost=debug` to see them.

#[path = "engine/classifier.rs"]
mod classifier;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

pub use classifier::Classifier;
#[allow(unused_imports)]
pub use classifier::UNMATCHED_RULE;
#[allow(unused_imports)]
pub use compiled_rules::{CompiledRules, LabelMask, RuleIndex, RuleMeta};
pub use metrics::{RowTrace, RunMetrics};
#[allow(unused_imports)]
pub use trigger::LabelInfo;
