//! ComponentDefinition - Immutable catalog entry for one equippable part

use crate::effect::Effect;
use crate::types::{ComponentKind, SlotType, StatKind};
use std::collections::BTreeMap;
use std::sync::Arc;

/// One equippable part as described by the catalog
///
/// Structural parts (`slot != None`) expose hardpoint capacity; weapons consume it.
/// The engine never mutates a definition; it shares them as `Arc<ComponentDefinition>`
/// and uses the `Arc` pointer as the identity of a mounted weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub kind: ComponentKind,
    pub slot: SlotType,
    /// Structural parts only: weapon mounting points exposed
    pub hardpoint_capacity: usize,
    /// Weapons only: contiguous mounting points consumed
    pub hardpoints_required: usize,
    /// Tags used for set-bonus gating
    pub tags: Vec<String>,
    /// Sparse base stat contributions
    pub base_stats: BTreeMap<StatKind, f64>,
    pub effects: Vec<Arc<Effect>>,
}

impl ComponentDefinition {
    /// Create a bare, non-structural definition
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        ComponentDefinition {
            id: id.into(),
            name: name.into(),
            kind,
            slot: SlotType::None,
            hardpoint_capacity: 0,
            hardpoints_required: 0,
            tags: Vec::new(),
            base_stats: BTreeMap::new(),
            effects: Vec::new(),
        }
    }

    /// Bind this part to a body slot
    pub fn in_slot(mut self, slot: SlotType) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_hardpoints(mut self, capacity: usize) -> Self {
        self.hardpoint_capacity = capacity;
        self
    }

    pub fn requiring(mut self, hardpoints: usize) -> Self {
        self.hardpoints_required = hardpoints;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a base stat contribution (sums with any existing entry)
    pub fn with_base_stat(mut self, stat: StatKind, value: f64) -> Self {
        *self.base_stats.entry(stat).or_insert(0.0) += value;
        self
    }

    pub fn with_effect(mut self, effect: Arc<Effect>) -> Self {
        self.effects.push(effect);
        self
    }

    /// Wrap into the shared handle the engine works with
    pub fn shared(self) -> Arc<ComponentDefinition> {
        Arc::new(self)
    }

    /// Bound to a body slot
    pub fn is_structural(&self) -> bool {
        self.slot.is_body_slot()
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ComponentKind::Weapon
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Hardpoints consumed when mounted; at least one even if declared zero
    pub fn mount_span(&self) -> usize {
        self.hardpoints_required.max(1)
    }

    pub fn base_stat(&self, stat: StatKind) -> f64 {
        self.base_stats.get(&stat).copied().unwrap_or(0.0)
    }
}
