//! loadout_core - Mech loadout resolution
//!
//! This library provides:
//! - LoadoutEngine: one structural part per body slot, weapons mounted on hardpoints
//! - HardpointAllocator: contiguous weapon mounting within a slot
//! - EffectResolver: passive modifiers, tag-gated set bonuses, active abilities
//! - StatSheet: final stats, rebuilt from scratch on every change

pub mod catalog;
pub mod component;
pub mod config;
pub mod effect;
pub mod hardpoint;
pub mod loadout;
pub mod prelude;
pub mod stat_sheet;
pub mod types;

// Re-export core types for convenience
pub use catalog::{default_catalog, Catalog, ComponentCatalog};
pub use component::ComponentDefinition;
pub use config::{ConfigError, EngineConfig, EquipHookPolicy};
pub use effect::{
    AbilityExecutor, AbilitySpec, ActiveAbility, Effect, EffectResolver, LoggingExecutor,
    ResolvedEffects, SetBonusCondition, SetBonusStatus,
};
pub use hardpoint::HardpointAllocator;
pub use loadout::{Diagnostic, DiagnosticSink, LoadoutEngine, LoadoutError, ObserverId};
pub use stat_sheet::{StatAccumulator, StatModifier, StatSheet};
pub use types::{ComponentKind, EffectKind, SlotType, StatKind};
