//! Core enumerations shared across the loadout model

use serde::{Deserialize, Serialize};

/// Body location a structural component binds to
///
/// `None` is the sentinel for parts that are not slot-bound (weapons, loose systems).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotType {
    #[default]
    None,
    Legs,
    Waist,
    Core,
    Chest,
    Arms,
    Head,
    Back,
}

impl SlotType {
    /// Number of real body slots (excludes `None`)
    pub const COUNT: usize = 7;

    /// Get all body slots, in paper-doll order
    pub fn all() -> &'static [SlotType] {
        &[
            SlotType::Legs,
            SlotType::Waist,
            SlotType::Core,
            SlotType::Chest,
            SlotType::Arms,
            SlotType::Head,
            SlotType::Back,
        ]
    }

    /// Dense index of a body slot, `None` for the sentinel
    pub fn index(self) -> Option<usize> {
        match self {
            SlotType::None => None,
            SlotType::Legs => Some(0),
            SlotType::Waist => Some(1),
            SlotType::Core => Some(2),
            SlotType::Chest => Some(3),
            SlotType::Arms => Some(4),
            SlotType::Head => Some(5),
            SlotType::Back => Some(6),
        }
    }

    pub fn is_body_slot(self) -> bool {
        self != SlotType::None
    }
}

/// Classification of an equippable part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Weapon,
    Armor,
    Mobility,
    Reactor,
    Utility,
    Sensor,
    System,
}

/// Numeric attribute tracked on a mech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Armor,
    PowerGeneration,
    PowerConsumption,
    Speed,
    Damage,
    Range,
    Accuracy,
    Weight,
}

impl StatKind {
    /// Get all stat kinds in declaration order
    pub fn all() -> &'static [StatKind] {
        &[
            StatKind::Armor,
            StatKind::PowerGeneration,
            StatKind::PowerConsumption,
            StatKind::Speed,
            StatKind::Damage,
            StatKind::Range,
            StatKind::Accuracy,
            StatKind::Weight,
        ]
    }

    /// Human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Armor => "Armor",
            StatKind::PowerGeneration => "Power Generation",
            StatKind::PowerConsumption => "Power Consumption",
            StatKind::Speed => "Speed",
            StatKind::Damage => "Damage",
            StatKind::Range => "Range",
            StatKind::Accuracy => "Accuracy",
            StatKind::Weight => "Weight",
        }
    }
}

/// Declared kind of an attached effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Always-on modifiers
    #[default]
    Passive,
    /// Triggered by a pilot or AI during combat
    ActiveAbility,
    /// Activates when enough tagged parts are equipped
    SetBonus,
}
