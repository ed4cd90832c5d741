//! Serialized catalog layout

use crate::effect::Effect;
use crate::types::{ComponentKind, SlotType, StatKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level catalog document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

/// A component as written in a catalog file; effects are referenced by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    #[serde(default)]
    pub slot: SlotType,
    #[serde(default)]
    pub hardpoint_capacity: usize,
    #[serde(default)]
    pub hardpoints_required: usize,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub base_stats: BTreeMap<StatKind, f64>,
    #[serde(default)]
    pub effects: Vec<String>,
}
