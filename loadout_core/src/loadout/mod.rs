//! LoadoutEngine - Structural slots, hardpoints, and the derived stat sheet of one mech

mod diagnostics;
mod error;
mod observer;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingSink, TracingSink};
pub use error::LoadoutError;
pub use observer::{ObserverId, ObserverRegistry};

use crate::component::ComponentDefinition;
use crate::config::{EngineConfig, EquipHookPolicy};
use crate::effect::{AbilityExecutor, ActiveAbility, Effect, EffectResolver, SetBonusStatus};
use crate::hardpoint::HardpointAllocator;
use crate::stat_sheet::{StatAccumulator, StatSheet};
use crate::types::SlotType;
use std::sync::Arc;

type EquipHook = Box<dyn FnMut(&Effect) + Send>;

/// Complete loadout state for one mech
///
/// Holds at most one structural part per body slot and one hardpoint allocator per
/// slot whose part exposes capacity. Every successful mutation fully recomputes the
/// stat sheet and ability list, then notifies observers.
///
/// The engine is synchronous and owns its collections without locking; share it
/// across threads only behind a single mutex guarding the whole instance.
pub struct LoadoutEngine {
    name: String,
    config: EngineConfig,
    structural: [Option<Arc<ComponentDefinition>>; SlotType::COUNT],
    hardpoints: [Option<HardpointAllocator>; SlotType::COUNT],
    stats: StatSheet,
    abilities: Vec<ActiveAbility>,
    set_bonuses: Vec<SetBonusStatus>,
    observers: ObserverRegistry,
    equip_hook: Option<EquipHook>,
    /// Effects present after the last rebuild, for `OncePerEquip`
    notified: Vec<Arc<Effect>>,
    diagnostics: Box<dyn DiagnosticSink>,
    rebuild_count: u64,
}

impl Default for LoadoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadoutEngine {
    /// Create an empty loadout with default name and config
    pub fn new() -> Self {
        Self::with_name("mech")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self::with_config(name, EngineConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: EngineConfig) -> Self {
        LoadoutEngine {
            name: name.into(),
            config,
            structural: Default::default(),
            hardpoints: Default::default(),
            stats: StatSheet::new(),
            abilities: Vec::new(),
            set_bonuses: Vec::new(),
            observers: ObserverRegistry::new(),
            equip_hook: None,
            notified: Vec::new(),
            diagnostics: Box::new(TracingSink),
            rebuild_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace where diagnostics are reported (defaults to `TracingSink`)
    pub fn set_diagnostic_sink(&mut self, sink: impl DiagnosticSink + 'static) {
        self.diagnostics = Box::new(sink);
    }

    /// Install the on-equip hook; see `EquipHookPolicy` for when it fires
    pub fn set_equip_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&Effect) + Send + 'static,
    {
        self.equip_hook = Some(Box::new(hook));
    }

    pub fn clear_equip_hook(&mut self) {
        self.equip_hook = None;
    }

    /// Register a callback run after every rebuild
    pub fn on_stats_changed<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&StatSheet) + Send + 'static,
    {
        self.observers.register(callback)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    // === Equip API ===

    /// Equip a structural part into its declared slot
    ///
    /// Replaces the previous occupant, which is returned. Weapons mounted on the
    /// previous part are dropped; nothing migrates to the new part.
    pub fn equip_structural(
        &mut self,
        component: Arc<ComponentDefinition>,
    ) -> Result<Option<Arc<ComponentDefinition>>, LoadoutError> {
        if !component.is_structural() {
            return self.reject(LoadoutError::InvalidComponent {
                name: component.name.clone(),
            });
        }
        let Some(index) = component.slot.index() else {
            return self.reject(LoadoutError::UnknownSlot(component.slot));
        };

        let capacity = component.hardpoint_capacity;
        if capacity > 0 {
            self.hardpoints[index]
                .get_or_insert_with(HardpointAllocator::default)
                .reset(capacity);
        } else {
            self.hardpoints[index] = None;
        }

        tracing::debug!(engine = %self.name, slot = ?component.slot, part = %component.id, "equip structural");
        let previous = self.structural[index].replace(component);
        self.rebuild();
        Ok(previous)
    }

    /// Clear a structural slot and discard its hardpoints with everything mounted
    pub fn unequip_structural(&mut self, slot: SlotType) -> Option<Arc<ComponentDefinition>> {
        let index = slot.index()?;
        let removed = self.structural[index].take()?;
        self.hardpoints[index] = None;

        tracing::debug!(engine = %self.name, ?slot, part = %removed.id, "unequip structural");
        self.rebuild();
        Some(removed)
    }

    /// Mount a weapon on `slot`'s hardpoints starting at `start`
    pub fn mount_weapon(
        &mut self,
        slot: SlotType,
        start: usize,
        weapon: &Arc<ComponentDefinition>,
    ) -> Result<(), LoadoutError> {
        if !weapon.is_weapon() {
            return self.reject(LoadoutError::NotAWeapon {
                name: weapon.name.clone(),
            });
        }
        if self.structural.iter().flatten().any(|part| Arc::ptr_eq(part, weapon)) {
            return self.reject(LoadoutError::InvalidComponent {
                name: weapon.name.clone(),
            });
        }
        let Some(index) = slot.index().filter(|&i| self.hardpoints[i].is_some()) else {
            return self.reject(LoadoutError::NoHardpoint(slot));
        };

        let mounted = self.hardpoints[index]
            .as_mut()
            .is_some_and(|hp| hp.try_mount_at(weapon, start));
        if !mounted {
            return self.reject(LoadoutError::RangeUnavailable {
                slot,
                start,
                required: weapon.mount_span(),
            });
        }

        tracing::debug!(engine = %self.name, ?slot, start, weapon = %weapon.id, "mount weapon");
        self.rebuild();
        Ok(())
    }

    /// Unmount whichever weapon occupies `index` on `slot`, returning it
    pub fn unmount_weapon(&mut self, slot: SlotType, index: usize) -> Option<Arc<ComponentDefinition>> {
        let slot_index = slot.index()?;
        let removed = self.hardpoints[slot_index].as_mut()?.unmount_by_index(index)?;

        tracing::debug!(engine = %self.name, ?slot, index, weapon = %removed.id, "unmount weapon");
        self.rebuild();
        Some(removed)
    }

    // === Build / aggregation ===

    /// Recompute stats, abilities, and set-bonus status from scratch
    pub fn rebuild(&mut self) {
        let equipped = self.equipped_components();

        let mut accumulator = StatAccumulator::new();
        for component in &equipped {
            accumulator.add_base_stats(&component.base_stats);
        }

        let policy = self.config.equip_hooks;
        let previous = std::mem::take(&mut self.notified);
        let mut current: Vec<Arc<Effect>> = Vec::new();
        let hook = &mut self.equip_hook;
        let resolved = EffectResolver::resolve(&equipped, |effect| {
            let seen = current.iter().any(|e| Arc::ptr_eq(e, effect));
            let fire = match policy {
                EquipHookPolicy::EveryRebuild => true,
                EquipHookPolicy::OncePerEquip => {
                    !seen && !previous.iter().any(|e| Arc::ptr_eq(e, effect))
                }
            };
            if !seen {
                current.push(Arc::clone(effect));
            }
            if fire {
                if let Some(hook) = hook.as_mut() {
                    hook(Arc::as_ref(effect));
                }
            }
        });
        self.notified = current;

        accumulator.apply_modifiers(&resolved.modifiers);
        self.stats = accumulator.finish();
        self.abilities = resolved.abilities;
        self.set_bonuses = resolved.set_bonuses;
        self.rebuild_count += 1;

        let net_power = self.stats.net_power();
        tracing::debug!(
            engine = %self.name,
            components = equipped.len(),
            modifiers = resolved.modifiers.len(),
            abilities = self.abilities.len(),
            net_power,
            "rebuilt stats"
        );
        if net_power < 0.0 && self.config.warn_on_negative_power {
            self.report(Diagnostic::NegativeNetPower { net_power });
        }

        self.observers.notify(&self.stats);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.report(&self.name, &diagnostic);
    }

    fn reject<T>(&mut self, err: LoadoutError) -> Result<T, LoadoutError> {
        self.report(Diagnostic::Rejected(err.clone()));
        Err(err)
    }

    // === Queries ===

    pub fn stats(&self) -> &StatSheet {
        &self.stats
    }

    /// Generation minus consumption in the final sheet
    pub fn net_power(&self) -> f64 {
        self.stats.net_power()
    }

    pub fn abilities(&self) -> &[ActiveAbility] {
        &self.abilities
    }

    pub fn set_bonuses(&self) -> &[SetBonusStatus] {
        &self.set_bonuses
    }

    /// Number of rebuilds since creation
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn structural(&self, slot: SlotType) -> Option<&Arc<ComponentDefinition>> {
        slot.index().and_then(|i| self.structural[i].as_ref())
    }

    pub fn hardpoints(&self, slot: SlotType) -> Option<&HardpointAllocator> {
        slot.index().and_then(|i| self.hardpoints[i].as_ref())
    }

    /// Hardpoint capacity of `slot`, 0 without an allocator
    pub fn hardpoint_count(&self, slot: SlotType) -> usize {
        self.hardpoints(slot).map_or(0, HardpointAllocator::capacity)
    }

    /// Structural parts in slot order, then each slot's distinct mounted weapons
    pub fn equipped_components(&self) -> Vec<Arc<ComponentDefinition>> {
        let mut equipped: Vec<Arc<ComponentDefinition>> =
            self.structural.iter().flatten().cloned().collect();
        for allocator in self.hardpoints.iter().flatten() {
            equipped.extend(allocator.distinct_mounted());
        }
        equipped
    }

    /// Slot whose hardpoints hold this weapon instance
    pub fn parent_slot_of_weapon(&self, weapon: &Arc<ComponentDefinition>) -> Option<SlotType> {
        SlotType::all()
            .iter()
            .copied()
            .find(|slot| self.hardpoints(*slot).is_some_and(|hp| hp.contains(weapon)))
    }

    /// Equipped parts (structural and mounted) carrying `tag`
    pub fn count_by_tag(&self, tag: &str) -> usize {
        EffectResolver::count_tagged(&self.equipped_components(), tag)
    }

    /// Start indices on `slot` where `weapon` fits right now
    pub fn valid_mount_points(&self, slot: SlotType, weapon: &ComponentDefinition) -> Vec<usize> {
        self.hardpoints(slot)
            .map(|hp| hp.valid_start_indices(weapon).collect())
            .unwrap_or_default()
    }

    /// Hand the named ability to a combat executor
    ///
    /// Returns `false` if no equipped effect provides an ability with that name.
    pub fn execute_ability(
        &self,
        ability_name: &str,
        executor: &mut dyn AbilityExecutor,
        target: Option<&LoadoutEngine>,
    ) -> bool {
        match self.abilities.iter().find(|a| a.spec.name == ability_name) {
            Some(ability) => {
                executor.execute(&ability.spec, self, target);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for LoadoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadoutEngine")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("structural", &self.structural)
            .field("hardpoints", &self.hardpoints)
            .field("stats", &self.stats)
            .field("abilities", &self.abilities.len())
            .field("rebuild_count", &self.rebuild_count)
            .finish()
    }
}
