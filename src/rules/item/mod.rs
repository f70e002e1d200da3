//! Inventory item rules.
//!
//! `rules::get()` returns the ordered rule list; the first rule whose patterns
//! match and whose production returns an outcome decides the row.

pub mod data;
pub mod helpers;
pub mod predicates;
pub mod rules;

#[cfg(test)]
mod tests;
