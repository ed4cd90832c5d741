//! Stats-changed observer registry

use crate::stat_sheet::StatSheet;

/// Handle returned on registration, used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type StatsCallback = Box<dyn FnMut(&StatSheet) + Send>;

/// Ordered list of stats-changed callbacks
///
/// Callbacks only see the published sheet, so they cannot register or remove
/// observers while a notification is running.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverId, StatsCallback)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        ObserverRegistry::default()
    }

    pub fn register<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&StatSheet) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Returns whether the observer was registered
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Call every observer in registration order
    pub fn notify(&mut self, stats: &StatSheet) {
        for (_, callback) in &mut self.observers {
            callback(stats);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}
