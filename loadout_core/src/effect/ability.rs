//! Ability execution boundary

use super::{AbilitySpec, Effect};
use crate::loadout::LoadoutEngine;
use std::sync::Arc;

/// An executable ability currently provided by the loadout
#[derive(Debug, Clone)]
pub struct ActiveAbility {
    pub spec: AbilitySpec,
    /// Effect the ability came from
    pub effect: Arc<Effect>,
    /// Catalog id of the part carrying the effect
    pub source_component: String,
}

/// Applies an ability in combat
///
/// The loadout only exposes the ability list; what an ability does to a target
/// belongs to the combat system that implements this trait.
pub trait AbilityExecutor {
    fn execute(&mut self, ability: &AbilitySpec, user: &LoadoutEngine, target: Option<&LoadoutEngine>);
}

/// Stub executor that only records the activation in the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingExecutor;

impl AbilityExecutor for LoggingExecutor {
    fn execute(&mut self, ability: &AbilitySpec, user: &LoadoutEngine, target: Option<&LoadoutEngine>) {
        let target_name = target.map(LoadoutEngine::name).unwrap_or("no target");
        tracing::info!(
            ability = %ability.name,
            energy_cost = ability.energy_cost,
            user = user.name(),
            target_name,
            "executing ability"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_executor_accepts_missing_target() {
        let user = LoadoutEngine::with_name("pilot");
        let mut executor = LoggingExecutor;
        executor.execute(&AbilitySpec::new("Flare", 4.0, 2.0), &user, None);
    }
}
