//! StatSheet - Final per-stat values published after every rebuild

mod aggregator;
mod modifier;

pub use aggregator::{StatAccumulator, StatTerm};
pub use modifier::StatModifier;

use crate::types::StatKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named numeric attribute set
///
/// Sparse: stats nothing contributed to are not stored but read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSheet {
    values: BTreeMap<StatKind, f64>,
}

impl StatSheet {
    pub fn new() -> Self {
        StatSheet::default()
    }

    /// Value of a stat, `0.0` if absent
    pub fn get(&self, stat: StatKind) -> f64 {
        self.values.get(&stat).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, stat: StatKind, value: f64) {
        self.values.insert(stat, value);
    }

    /// Add to a stat's current value
    pub fn add(&mut self, stat: StatKind, value: f64) {
        *self.values.entry(stat).or_insert(0.0) += value;
    }

    /// Whether a value was stored for this stat
    pub fn contains(&self, stat: StatKind) -> bool {
        self.values.contains_key(&stat)
    }

    /// Stored entries in stat declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    /// Every stat kind with its value, absent ones as `0.0`
    pub fn iter_all(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        StatKind::all().iter().map(move |k| (*k, self.get(*k)))
    }

    /// Power generation minus power consumption
    pub fn net_power(&self) -> f64 {
        self.get(StatKind::PowerGeneration) - self.get(StatKind::PowerConsumption)
    }
}
