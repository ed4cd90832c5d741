//! Effects attached to components: passive modifiers, set bonuses, active abilities

mod ability;
mod resolver;

pub use ability::{AbilityExecutor, ActiveAbility, LoggingExecutor};
pub use resolver::{EffectResolver, ResolvedEffects, SetBonusStatus};

use crate::stat_sheet::StatModifier;
use crate::types::EffectKind;
use serde::{Deserialize, Serialize};

/// Condition gating a set bonus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBonusCondition {
    /// Tag equipped parts must carry
    pub tag: String,
    /// Minimum number of tagged parts
    #[serde(default = "default_required_count")]
    pub required_count: usize,
}

fn default_required_count() -> usize {
    2
}

/// Metadata of an executable ability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub name: String,
    #[serde(default = "default_cooldown")]
    pub cooldown_seconds: f64,
    #[serde(default = "default_energy_cost")]
    pub energy_cost: f64,
}

fn default_cooldown() -> f64 {
    10.0
}
fn default_energy_cost() -> f64 {
    10.0
}

impl AbilitySpec {
    pub fn new(name: impl Into<String>, cooldown_seconds: f64, energy_cost: f64) -> Self {
        AbilitySpec {
            name: name.into(),
            cooldown_seconds,
            energy_cost,
        }
    }
}

/// An effect attached to a component
///
/// Capabilities are independent: an effect may provide modifiers, gate them on a
/// set-bonus condition, and be executable as an ability all at once. `kind` is the
/// author's declared label; resolution branches on the capabilities present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub kind: EffectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<StatModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_bonus: Option<SetBonusCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<AbilitySpec>,
}

/// How the resolver treats an effect's modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierRole {
    /// Always applied
    Passive,
    /// Applied only while the set condition holds
    SetBonus,
    /// Contributes no modifiers
    Inert,
}

impl Effect {
    /// Unconditional modifiers
    pub fn passive(id: impl Into<String>, modifiers: Vec<StatModifier>) -> Self {
        Effect {
            id: id.into(),
            description: String::new(),
            kind: EffectKind::Passive,
            modifiers: Some(modifiers),
            set_bonus: None,
            ability: None,
        }
    }

    /// Modifiers gated on `required_count` equipped parts tagged `tag`
    pub fn set_bonus(
        id: impl Into<String>,
        tag: impl Into<String>,
        required_count: usize,
        modifiers: Vec<StatModifier>,
    ) -> Self {
        Effect {
            id: id.into(),
            description: String::new(),
            kind: EffectKind::SetBonus,
            modifiers: Some(modifiers),
            set_bonus: Some(SetBonusCondition {
                tag: tag.into(),
                required_count,
            }),
            ability: None,
        }
    }

    pub fn active_ability(id: impl Into<String>, ability: AbilitySpec) -> Self {
        Effect {
            id: id.into(),
            description: String::new(),
            kind: EffectKind::ActiveAbility,
            modifiers: None,
            set_bonus: None,
            ability: Some(ability),
        }
    }

    /// Also make this effect executable
    pub fn with_ability(mut self, ability: AbilitySpec) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn modifier_role(&self) -> ModifierRole {
        if self.set_bonus.is_some() {
            ModifierRole::SetBonus
        } else if self.modifiers.is_some() {
            ModifierRole::Passive
        } else {
            ModifierRole::Inert
        }
    }

    pub fn is_ability(&self) -> bool {
        self.ability.is_some()
    }

    /// Declared modifiers, empty if none
    pub fn modifiers(&self) -> &[StatModifier] {
        self.modifiers.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatKind;

    #[test]
    fn test_modifier_roles() {
        let passive = Effect::passive("p", vec![StatModifier::additive(StatKind::Armor, 5.0)]);
        assert_eq!(passive.modifier_role(), ModifierRole::Passive);

        let set = Effect::set_bonus("s", "alpha", 2, vec![]);
        assert_eq!(set.modifier_role(), ModifierRole::SetBonus);

        let ability = Effect::active_ability("a", AbilitySpec::new("Overcharge", 8.0, 20.0));
        assert_eq!(ability.modifier_role(), ModifierRole::Inert);
        assert!(ability.is_ability());
    }

    #[test]
    fn test_passive_can_also_be_ability() {
        let effect = Effect::passive("boost", vec![StatModifier::multiplicative(StatKind::Speed, 1.2)])
            .with_ability(AbilitySpec::new("Sprint", 5.0, 15.0));
        assert_eq!(effect.modifier_role(), ModifierRole::Passive);
        assert!(effect.is_ability());
    }

    #[test]
    fn test_parse_effect_defaults() {
        let toml = r#"
id = "alpha_set"
kind = "set_bonus"

[set_bonus]
tag = "alpha"
"#;
        let effect: Effect = toml::from_str(toml).unwrap();
        let condition = effect.set_bonus.as_ref().unwrap();
        assert_eq!(condition.required_count, 2);
        assert!(effect.modifiers().is_empty());
        assert_eq!(effect.modifier_role(), ModifierRole::SetBonus);
    }

    #[test]
    fn test_builder_matches_catalog_form() {
        let built = Effect::passive("plating", vec![StatModifier::additive(StatKind::Armor, 15.0)])
            .with_description("Layered composite plating");
        let toml = r#"
id = "plating"
kind = "passive"
description = "Layered composite plating"
modifiers = [{ stat = "armor", add = 15.0 }]
"#;
        let parsed: Effect = toml::from_str(toml).unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn test_parse_ability_defaults() {
        let toml = r#"
id = "smoke"
kind = "active_ability"

[ability]
name = "Smoke Screen"
"#;
        let effect: Effect = toml::from_str(toml).unwrap();
        let spec = effect.ability.unwrap();
        assert!((spec.cooldown_seconds - 10.0).abs() < f64::EPSILON);
        assert!((spec.energy_cost - 10.0).abs() < f64::EPSILON);
    }
}
