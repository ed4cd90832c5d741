//! Engine behavior configuration

use serde::{Deserialize, Serialize};

/// When on-equip hooks fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipHookPolicy {
    /// Once per equipped effect on every rebuild; hooks must be idempotent
    #[default]
    EveryRebuild,
    /// Only when an effect enters the equipped set
    OncePerEquip,
}

/// Tunable engine behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub equip_hooks: EquipHookPolicy,
    /// Report a diagnostic when generation falls below consumption
    #[serde(default = "default_warn_on_negative_power")]
    pub warn_on_negative_power: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            equip_hooks: EquipHookPolicy::EveryRebuild,
            warn_on_negative_power: true,
        }
    }
}

fn default_warn_on_negative_power() -> bool {
    true
}
