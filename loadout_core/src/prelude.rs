//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Core types
pub use crate::component::ComponentDefinition;
pub use crate::stat_sheet::{StatModifier, StatSheet};
pub use crate::types::{ComponentKind, EffectKind, SlotType, StatKind};

// Effects
pub use crate::effect::{AbilityExecutor, AbilitySpec, ActiveAbility, Effect};

// Engine
pub use crate::hardpoint::HardpointAllocator;
pub use crate::loadout::{Diagnostic, LoadoutEngine, LoadoutError};

// Catalog and config
pub use crate::catalog::{default_catalog, Catalog, ComponentCatalog};
pub use crate::config::{EngineConfig, EquipHookPolicy};
