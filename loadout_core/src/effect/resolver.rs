//! EffectResolver - Turns the equipped set's effects into modifiers and abilities

use super::{ActiveAbility, Effect, ModifierRole};
use crate::component::ComponentDefinition;
use crate::stat_sheet::StatModifier;
use std::sync::Arc;

/// Progress of one set bonus against the current loadout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBonusStatus {
    pub effect_id: String,
    pub tag: String,
    pub equipped_count: usize,
    pub required_count: usize,
    pub active: bool,
}

/// Output of one resolution pass
#[derive(Debug, Clone, Default)]
pub struct ResolvedEffects {
    /// Passive modifiers plus those of active set bonuses, in equip order
    pub modifiers: Vec<StatModifier>,
    pub abilities: Vec<ActiveAbility>,
    /// One entry per set-bonus effect encountered, active or not
    pub set_bonuses: Vec<SetBonusStatus>,
}

/// Stateless resolver over an equipped set
pub struct EffectResolver;

impl EffectResolver {
    /// Number of equipped parts carrying `tag`
    ///
    /// Each entry of `equipped` counts once no matter how many effects it carries.
    pub fn count_tagged(equipped: &[Arc<ComponentDefinition>], tag: &str) -> usize {
        equipped.iter().filter(|c| c.has_tag(tag)).count()
    }

    /// Resolve every effect of every equipped part
    ///
    /// `on_equip` is called once per equipped effect, in equip order, before classification.
    pub fn resolve<F>(equipped: &[Arc<ComponentDefinition>], mut on_equip: F) -> ResolvedEffects
    where
        F: FnMut(&Arc<Effect>),
    {
        let mut resolved = ResolvedEffects::default();

        for component in equipped {
            for effect in &component.effects {
                on_equip(effect);

                match effect.modifier_role() {
                    ModifierRole::SetBonus => {
                        let status = Self::set_bonus_status(equipped, effect);
                        if status.active {
                            resolved.modifiers.extend_from_slice(effect.modifiers());
                        }
                        resolved.set_bonuses.push(status);
                    }
                    ModifierRole::Passive => {
                        resolved.modifiers.extend_from_slice(effect.modifiers());
                    }
                    ModifierRole::Inert => {}
                }

                if let Some(spec) = &effect.ability {
                    resolved.abilities.push(ActiveAbility {
                        spec: spec.clone(),
                        effect: Arc::clone(effect),
                        source_component: component.id.clone(),
                    });
                }
            }
        }

        resolved
    }

    fn set_bonus_status(equipped: &[Arc<ComponentDefinition>], effect: &Effect) -> SetBonusStatus {
        // Only called for SetBonus roles, which always carry a condition
        let (tag, required_count) = match &effect.set_bonus {
            Some(condition) => (condition.tag.clone(), condition.required_count),
            None => (String::new(), 0),
        };
        let equipped_count = Self::count_tagged(equipped, &tag);
        SetBonusStatus {
            effect_id: effect.id.clone(),
            active: equipped_count >= required_count,
            tag,
            equipped_count,
            required_count,
        }
    }
}
