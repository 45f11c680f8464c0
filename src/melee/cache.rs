//! Round-scoped melee state cache
//!
//! Limb damage changes from round to round, so entries must be dropped at
//! every round start. Within a round, repeated lookups reuse the states.

use ahash::AHashMap;

use crate::core::config::MeleeConfig;
use crate::core::types::UnitId;
use crate::melee::evaluator::LimbEvaluator;
use crate::melee::state::MeleeStates;
use crate::unit::CombatUnit;

#[derive(Debug, Clone, Default)]
pub struct MeleeStateCache {
    states: AHashMap<UnitId, MeleeStates>,
}

impl MeleeStateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached states for a unit, evaluating it on first use
    pub fn get_or_build<U: CombatUnit + ?Sized>(
        &mut self,
        unit: &U,
        evaluator: &LimbEvaluator,
        config: &MeleeConfig,
    ) -> &mut MeleeStates {
        self.states.entry(unit.id()).or_insert_with(|| {
            let condition = evaluator.evaluate(unit);
            MeleeStates::build(&condition, config)
        })
    }

    pub fn get(&self, id: UnitId) -> Option<&MeleeStates> {
        self.states.get(&id)
    }

    /// Drop one unit's states, e.g. after it takes damage mid-round
    pub fn invalidate(&mut self, id: UnitId) -> bool {
        self.states.remove(&id).is_some()
    }

    /// Drop everything; called at round start
    pub fn clear(&mut self) {
        if !self.states.is_empty() {
            tracing::debug!("Invalidating {} cached melee states", self.states.len());
        }
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
