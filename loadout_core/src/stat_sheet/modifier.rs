//! StatModifier - Additive and multiplicative delta for one stat

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// A single stat delta
///
/// Aggregated per stat as:
/// `(base + Σ add) × Π mult`
///
/// A `mult` of exactly `0.0` means "no multiplicative effect" and is read as `1.0`,
/// never as zeroing the stat. Authoring tools leave unset factors at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatKind,
    /// Flat delta, e.g. +10 armor
    #[serde(default)]
    pub add: f64,
    /// Factor, e.g. 1.1 for +10%
    #[serde(default = "default_mult")]
    pub mult: f64,
}

fn default_mult() -> f64 {
    1.0
}

impl StatModifier {
    pub fn new(stat: StatKind, add: f64, mult: f64) -> Self {
        StatModifier { stat, add, mult }
    }

    /// Flat-only modifier (mult 1)
    pub fn additive(stat: StatKind, add: f64) -> Self {
        StatModifier { stat, add, mult: 1.0 }
    }

    /// Factor-only modifier (add 0)
    pub fn multiplicative(stat: StatKind, mult: f64) -> Self {
        StatModifier { stat, add: 0.0, mult }
    }

    /// Multiplier actually applied during aggregation
    pub fn effective_multiplier(&self) -> f64 {
        if self.mult == 0.0 {
            1.0
        } else {
            self.mult
        }
    }
}
