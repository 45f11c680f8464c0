//! Host integration layer
//!
//! The host forwards combat events here instead of having its methods
//! patched. Melee states are cached per unit and dropped at round start or
//! whenever the host reports that a unit took damage.

pub mod to_hit;

use tracing::{debug, info};

use crate::core::config::MeleeConfig;
use crate::core::error::Result;
use crate::core::types::{Round, UnitId};
use crate::melee::{LimbEvaluator, MeleeStateCache, MeleeStates};
use crate::unit::stats::{CAN_SHOOT_AFTER_SPRINTING, MELEE_HIT_PUSHBACK_PHASES};
use crate::unit::CombatUnit;

/// Combat events the melee rules react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    /// A new round began
    NewRound { round: Round, interleaved: bool },
    /// A unit's components or status changed mid-round
    UnitDamaged { unit: UnitId },
}

/// Melee rules bound to one combat
#[derive(Debug, Clone)]
pub struct MeleeHooks {
    config: MeleeConfig,
    evaluator: LimbEvaluator,
    cache: MeleeStateCache,
    round: Round,
}

impl MeleeHooks {
    pub fn new(config: MeleeConfig) -> Result<Self> {
        let evaluator = LimbEvaluator::new(&config)?;
        Ok(Self {
            config,
            evaluator,
            cache: MeleeStateCache::new(),
            round: 0,
        })
    }

    pub fn config(&self) -> &MeleeConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &LimbEvaluator {
        &self.evaluator
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn cached_units(&self) -> usize {
        self.cache.len()
    }

    /// React to an event that only touches melee bookkeeping
    ///
    /// `NewRound` here clears cached states but leaves unit stats alone; hosts
    /// that own the unit list should call [`MeleeHooks::on_new_round`].
    pub fn handle(&mut self, event: CombatEvent) {
        match event {
            CombatEvent::NewRound { round, interleaved } => {
                info!("Round {} started (interleaved: {})", round, interleaved);
                self.round = round;
                self.cache.clear();
            }
            CombatEvent::UnitDamaged { unit } => {
                if self.cache.invalidate(unit) {
                    debug!("Invalidated melee states for unit: {}", unit);
                }
            }
        }
    }

    /// Round start: reset per-round stats on every unit and drop cached states
    ///
    /// Outside interleaved (combat) mode units may not fire after sprinting.
    pub fn on_new_round<U: CombatUnit>(
        &mut self,
        round: Round,
        interleaved: bool,
        units: &mut [U],
    ) {
        for unit in units.iter_mut() {
            unit.stats_mut().set(CAN_SHOOT_AFTER_SPRINTING, interleaved);
        }
        self.handle(CombatEvent::NewRound { round, interleaved });
    }

    /// Unit joined the combat: sprinting units may fire until told otherwise
    pub fn on_unit_init<U: CombatUnit + ?Sized>(&mut self, unit: &mut U) {
        unit.stats_mut().set(CAN_SHOOT_AFTER_SPRINTING, true);
        self.cache.invalidate(unit.id());
        debug!("Initialized melee stats for unit: {}", unit.id());
    }

    /// Melee states for a unit, evaluated at most once per round
    pub fn melee_states<U: CombatUnit + ?Sized>(&mut self, unit: &U) -> &mut MeleeStates {
        self.cache.get_or_build(unit, &self.evaluator, &self.config)
    }

    /// Initiative phases a target loses after a damaging melee hit
    pub fn pushback_phases<U: CombatUnit + ?Sized>(&self, attacker: &U) -> u32 {
        attacker
            .stats()
            .get_int(MELEE_HIT_PUSHBACK_PHASES)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    }

    pub fn self_jumped_modifier<U: CombatUnit + ?Sized>(&self, unit: &U) -> i32 {
        to_hit::self_jumped_modifier(unit, &self.config.to_hit)
    }
}
