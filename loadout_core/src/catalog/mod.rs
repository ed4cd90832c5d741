//! Component catalog - read-only provider of component definitions

mod records;

pub use records::{CatalogFile, ComponentRecord};

use crate::component::ComponentDefinition;
use crate::config::{self, ConfigError};
use crate::effect::Effect;
use crate::types::{EffectKind, SlotType};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Read-only lookup of equippable parts
///
/// The loadout never mutates what a catalog hands out.
pub trait ComponentCatalog {
    /// Every definition, in catalog order
    fn all(&self) -> &[Arc<ComponentDefinition>];

    fn get(&self, id: &str) -> Option<Arc<ComponentDefinition>> {
        self.all().iter().find(|c| c.id == id).cloned()
    }

    /// Structural parts that fit `slot`
    fn structural_for_slot(&self, slot: SlotType) -> Vec<Arc<ComponentDefinition>> {
        self.all()
            .iter()
            .filter(|c| c.is_structural() && c.slot == slot)
            .cloned()
            .collect()
    }

    fn weapons(&self) -> Vec<Arc<ComponentDefinition>> {
        self.all().iter().filter(|c| c.is_weapon()).cloned().collect()
    }

    /// Case-insensitive display-name filter; a blank query matches everything
    fn search(&self, query: &str) -> Vec<Arc<ComponentDefinition>> {
        let query = query.trim().to_lowercase();
        self.all()
            .iter()
            .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: Vec<Arc<ComponentDefinition>>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Add a definition; ids must be unique
    pub fn add(&mut self, component: ComponentDefinition) -> Result<Arc<ComponentDefinition>, ConfigError> {
        if self.by_id.contains_key(&component.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate component id '{}'",
                component.id
            )));
        }
        if component.hardpoint_capacity > 0 && (component.is_weapon() || !component.is_structural()) {
            return Err(ConfigError::ValidationError(format!(
                "component '{}' exposes hardpoints but is not a structural non-weapon part",
                component.id
            )));
        }
        let shared = Arc::new(component);
        self.by_id.insert(shared.id.clone(), self.components.len());
        self.components.push(Arc::clone(&shared));
        Ok(shared)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Build from a parsed catalog document, resolving effect references
    pub fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        let mut effects: HashMap<String, Arc<Effect>> = HashMap::new();
        for effect in file.effects {
            if let Some(condition) = &effect.set_bonus {
                if condition.required_count == 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "set bonus '{}' must require at least one part",
                        effect.id
                    )));
                }
            }
            match effect.kind {
                EffectKind::SetBonus if effect.set_bonus.is_none() => {
                    return Err(ConfigError::ValidationError(format!(
                        "set bonus '{}' has no [set_bonus] condition",
                        effect.id
                    )));
                }
                EffectKind::ActiveAbility if effect.ability.is_none() => {
                    return Err(ConfigError::ValidationError(format!(
                        "ability '{}' has no [ability] table",
                        effect.id
                    )));
                }
                _ => {}
            }
            if effects.contains_key(&effect.id) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate effect id '{}'",
                    effect.id
                )));
            }
            effects.insert(effect.id.clone(), Arc::new(effect));
        }

        let mut catalog = Catalog::new();
        for record in file.components {
            let mut resolved = Vec::with_capacity(record.effects.len());
            for effect_id in &record.effects {
                let effect = effects.get(effect_id).ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "component '{}' references unknown effect '{}'",
                        record.id, effect_id
                    ))
                })?;
                resolved.push(Arc::clone(effect));
            }

            catalog.add(ComponentDefinition {
                id: record.id,
                name: record.name,
                kind: record.kind,
                slot: record.slot,
                hardpoint_capacity: record.hardpoint_capacity,
                hardpoints_required: record.hardpoints_required,
                tags: record.tags,
                base_stats: record.base_stats,
                effects: resolved,
            })?;
        }

        tracing::debug!(components = catalog.len(), effects = effects.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        Self::from_file(config::parse_toml(content)?)
    }

    /// Load a catalog from a TOML file
    pub fn load_toml(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file(config::load_toml(path)?)
    }

    /// Parse a catalog from a JSON string
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_file(file)
    }
}

impl ComponentCatalog for Catalog {
    fn all(&self) -> &[Arc<ComponentDefinition>] {
        &self.components
    }

    fn get(&self, id: &str) -> Option<Arc<ComponentDefinition>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.components[i]))
    }
}

/// Catalog shipped with the crate
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/components.toml");
    Catalog::parse_toml(toml).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "embedded catalog failed to load");
        Catalog::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ComponentKind, StatKind};

    const SAMPLE: &str = r#"
[[effects]]
id = "alpha_set"
kind = "set_bonus"
description = "Alpha frame synergy"
modifiers = [{ stat = "armor", add = 10.0 }]

[effects.set_bonus]
tag = "alpha"
required_count = 2

[[components]]
id = "alpha_core"
name = "Alpha Core"
kind = "reactor"
slot = "core"
hardpoint_capacity = 2
tags = ["alpha"]
effects = ["alpha_set"]

[components.base_stats]
power_generation = 40.0

[[components]]
id = "autocannon"
name = "Autocannon"
kind = "weapon"
hardpoints_required = 2

[components.base_stats]
damage = 12.0
power_consumption = 8.0
"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::parse_toml(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let core = catalog.get("alpha_core").unwrap();
        assert_eq!(core.slot, SlotType::Core);
        assert_eq!(core.hardpoint_capacity, 2);
        assert_eq!(core.effects.len(), 1);
        assert!((core.base_stat(StatKind::PowerGeneration) - 40.0).abs() < f64::EPSILON);

        let gun = catalog.get("autocannon").unwrap();
        assert!(gun.is_weapon());
        assert_eq!(gun.slot, SlotType::None);
    }

    #[test]
    fn test_filters() {
        let catalog = Catalog::parse_toml(SAMPLE).unwrap();
        assert_eq!(catalog.structural_for_slot(SlotType::Core).len(), 1);
        assert!(catalog.structural_for_slot(SlotType::Legs).is_empty());
        assert_eq!(catalog.weapons().len(), 1);
        assert_eq!(catalog.search("AUTO").len(), 1);
        assert_eq!(catalog.search("  ").len(), 2);
    }

    #[test]
    fn test_shared_effect_is_one_instance() {
        let toml = r#"
[[effects]]
id = "plating"
modifiers = [{ stat = "armor", add = 5.0 }]

[[components]]
id = "chest"
name = "Chest"
kind = "armor"
slot = "chest"
effects = ["plating"]

[[components]]
id = "arms"
name = "Arms"
kind = "armor"
slot = "arms"
effects = ["plating"]
"#;
        let catalog = Catalog::parse_toml(toml).unwrap();
        let chest = catalog.get("chest").unwrap();
        let arms = catalog.get("arms").unwrap();
        assert!(Arc::ptr_eq(&chest.effects[0], &arms.effects[0]));
    }

    #[test]
    fn test_set_bonus_without_condition_rejected() {
        let toml = r#"
[[effects]]
id = "loose_bonus"
kind = "set_bonus"
modifiers = [{ stat = "armor", add = 100.0 }]
"#;
        let err = Catalog::parse_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("loose_bonus")));
    }

    #[test]
    fn test_ability_without_spec_rejected() {
        let toml = r#"
[[effects]]
id = "blank_ability"
kind = "active_ability"
"#;
        let err = Catalog::parse_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref msg) if msg.contains("blank_ability")));
    }

    #[test]
    fn test_weapon_with_hardpoints_rejected() {
        let toml = r#"
[[components]]
id = "gun_core"
name = "Gun Core"
kind = "weapon"
slot = "core"
hardpoint_capacity = 2
"#;
        let err = Catalog::parse_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let mut catalog = Catalog::new();
        let loose = ComponentDefinition::new("rack", "Rack", ComponentKind::Utility).with_hardpoints(1);
        assert!(catalog.add(loose).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let toml = r#"
[[components]]
id = "x"
name = "X"
kind = "armor"
effects = ["missing"]
"#;
        let err = Catalog::parse_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut catalog = Catalog::new();
        catalog
            .add(ComponentDefinition::new("x", "X", ComponentKind::Armor))
            .unwrap();
        assert!(catalog
            .add(ComponentDefinition::new("x", "Other", ComponentKind::Armor))
            .is_err());
    }

    #[test]
    fn test_zero_required_count_rejected() {
        let toml = r#"
[[effects]]
id = "bad"
kind = "set_bonus"

[effects.set_bonus]
tag = "alpha"
required_count = 0
"#;
        assert!(Catalog::parse_toml(toml).is_err());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "components": [
                { "id": "legs", "name": "Legs", "kind": "mobility", "slot": "legs",
                  "base_stats": { "speed": 5.0 } }
            ]
        }"#;
        let catalog = Catalog::parse_json(json).unwrap();
        let legs = catalog.get("legs").unwrap();
        assert!(legs.is_structural());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog();
        assert!(!catalog.is_empty());
        assert!(!catalog.weapons().is_empty());
        for slot in SlotType::all() {
            assert!(!catalog.structural_for_slot(*slot).is_empty(), "no part for {:?}", slot);
        }
    }
}
