//! StatAccumulator - Collects base contributions and modifiers before producing a StatSheet

use super::{StatModifier, StatSheet};
use crate::types::StatKind;
use std::collections::BTreeMap;

/// Running terms for one stat
///
/// Final value is calculated as:
/// `(base + added) × multiplier`
/// but only when at least one modifier touched the stat; otherwise the base passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTerm {
    /// Sum of base contributions from equipped parts
    pub base: f64,
    /// Sum of modifier `add` deltas
    pub added: f64,
    /// Product of effective modifier factors
    pub multiplier: f64,
    /// How many modifiers targeted this stat
    pub modifier_count: usize,
}

impl Default for StatTerm {
    fn default() -> Self {
        StatTerm {
            base: 0.0,
            added: 0.0,
            multiplier: 1.0,
            modifier_count: 0,
        }
    }
}

impl StatTerm {
    pub fn compute(&self) -> f64 {
        if self.modifier_count == 0 {
            self.base
        } else {
            (self.base + self.added) * self.multiplier
        }
    }
}

/// Accumulates stat contributions from every equipped part
///
/// Used during a rebuild: base stats are summed first, modifiers are grouped by stat,
/// then `finish` collapses each group into the published sheet.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    terms: BTreeMap<StatKind, StatTerm>,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    /// Add a base contribution. Zero contributions are not stored.
    pub fn add_base(&mut self, stat: StatKind, value: f64) {
        if value == 0.0 {
            return;
        }
        self.terms.entry(stat).or_default().base += value;
    }

    /// Add every entry of a sparse base-stat map
    pub fn add_base_stats<'a>(&mut self, stats: impl IntoIterator<Item = (&'a StatKind, &'a f64)>) {
        for (stat, value) in stats {
            self.add_base(*stat, *value);
        }
    }

    /// Fold a modifier into its stat group
    pub fn apply_modifier(&mut self, modifier: &StatModifier) {
        let term = self.terms.entry(modifier.stat).or_default();
        term.added += modifier.add;
        term.multiplier *= modifier.effective_multiplier();
        term.modifier_count += 1;
    }

    pub fn apply_modifiers<'a>(&mut self, modifiers: impl IntoIterator<Item = &'a StatModifier>) {
        for modifier in modifiers {
            self.apply_modifier(modifier);
        }
    }

    /// Current terms for a stat, if anything contributed to it
    pub fn term(&self, stat: StatKind) -> Option<&StatTerm> {
        self.terms.get(&stat)
    }

    /// Collapse all terms into a stat sheet
    pub fn finish(&self) -> StatSheet {
        let mut sheet = StatSheet::new();
        for (stat, term) in &self.terms {
            sheet.set(*stat, term.compute());
        }
        sheet
    }
}
