//! HardpointAllocator - Contiguous weapon mounting within one structural slot

use crate::component::ComponentDefinition;
use std::sync::Arc;

/// Fixed-capacity occupancy table for one slot's hardpoints
///
/// Every occupied index belongs to exactly one contiguous run owned by one weapon;
/// the run length is the weapon's `mount_span()`. Weapons are identified by their
/// `Arc` pointer, never by value.
#[derive(Debug, Clone, Default)]
pub struct HardpointAllocator {
    occupancy: Vec<Option<Arc<ComponentDefinition>>>,
}

impl HardpointAllocator {
    pub fn new(capacity: usize) -> Self {
        let mut allocator = HardpointAllocator::default();
        allocator.reset(capacity);
        allocator
    }

    /// Set a new capacity and drop every mount
    pub fn reset(&mut self, capacity: usize) {
        self.occupancy = vec![None; capacity];
    }

    pub fn capacity(&self) -> usize {
        self.occupancy.len()
    }

    /// Weapon occupying `index`, if any
    pub fn get_at(&self, index: usize) -> Option<&Arc<ComponentDefinition>> {
        self.occupancy.get(index).and_then(|slot| slot.as_ref())
    }

    /// No index is occupied
    pub fn is_empty(&self) -> bool {
        self.occupancy.iter().all(Option::is_none)
    }

    /// `length > 0`, in bounds, and every index in `[start, start + length)` empty
    pub fn is_range_free(&self, start: usize, length: usize) -> bool {
        if length == 0 {
            return false;
        }
        let Some(end) = start.checked_add(length) else {
            return false;
        };
        if end > self.capacity() {
            return false;
        }
        self.occupancy[start..end].iter().all(Option::is_none)
    }

    pub fn can_mount_at(&self, weapon: &ComponentDefinition, start: usize) -> bool {
        weapon.is_weapon() && self.is_range_free(start, weapon.mount_span())
    }

    /// Mount `weapon` at `start`, filling its whole span
    ///
    /// Returns `false` and leaves the table untouched if the range is unavailable.
    pub fn try_mount_at(&mut self, weapon: &Arc<ComponentDefinition>, start: usize) -> bool {
        if !self.can_mount_at(weapon, start) {
            return false;
        }
        let end = start + weapon.mount_span();
        for slot in &mut self.occupancy[start..end] {
            *slot = Some(Arc::clone(weapon));
        }
        true
    }

    /// Remove the weapon occupying `index`, clearing every index it holds
    ///
    /// Any index of a run identifies the whole weapon. Returns the removed weapon.
    pub fn unmount_by_index(&mut self, index: usize) -> Option<Arc<ComponentDefinition>> {
        let weapon = Arc::clone(self.get_at(index)?);
        for slot in &mut self.occupancy {
            if slot.as_ref().is_some_and(|w| Arc::ptr_eq(w, &weapon)) {
                *slot = None;
            }
        }
        Some(weapon)
    }

    /// Remove all mounts, keeping capacity
    pub fn clear_all_mounts(&mut self) {
        for slot in &mut self.occupancy {
            *slot = None;
        }
    }

    /// Unique mounted weapons, in order of their lowest index
    pub fn distinct_mounted(&self) -> Vec<Arc<ComponentDefinition>> {
        let mut mounted: Vec<Arc<ComponentDefinition>> = Vec::new();
        for weapon in self.occupancy.iter().flatten() {
            if !mounted.iter().any(|w| Arc::ptr_eq(w, weapon)) {
                mounted.push(Arc::clone(weapon));
            }
        }
        mounted
    }

    /// Whether this exact weapon instance is mounted here
    pub fn contains(&self, weapon: &Arc<ComponentDefinition>) -> bool {
        self.occupancy
            .iter()
            .flatten()
            .any(|w| Arc::ptr_eq(w, weapon))
    }

    /// Start indices where `weapon` could be mounted right now, ascending
    pub fn valid_start_indices<'a>(
        &'a self,
        weapon: &'a ComponentDefinition,
    ) -> impl Iterator<Item = usize> + 'a {
        let span = weapon.mount_span();
        let last = if weapon.is_weapon() {
            (self.capacity() + 1).saturating_sub(span)
        } else {
            0
        };
        (0..last).filter(move |&start| self.is_range_free(start, span))
    }
}
