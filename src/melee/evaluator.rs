//! Limb condition evaluator
//!
//! Walks a unit's installed components, classifies the actuators in its arms
//! and legs, and reduces them to a [`MeleeCondition`] snapshot. Status gating
//! is applied afterwards in strict priority order.

use tracing::{debug, info};

use crate::core::config::{DeveloperConfig, MeleeConfig};
use crate::core::error::Result;
use crate::core::types::Side;
use crate::melee::category::CategoryMap;
use crate::melee::condition::{LimbCondition, MeleeCondition, MeleeFlags};
use crate::unit::stats::{PHYSICAL_WEAPON_IGNORE_ACTUATORS, PUNCH_IS_PHYSICAL_WEAPON};
use crate::unit::{CombatUnit, UnitStatus};

/// Why a unit was denied melee, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeGate {
    DeveloperOverride,
    DownOrStanding,
    Dead,
}

/// Builds melee snapshots from live unit state
#[derive(Debug, Clone)]
pub struct LimbEvaluator {
    categories: CategoryMap,
    developer: DeveloperConfig,
}

impl LimbEvaluator {
    /// Validate a config and create an evaluator from it
    pub fn new(config: &MeleeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            categories: CategoryMap::from_config(&config.categories)?,
            developer: config.developer.clone(),
        })
    }

    pub fn from_parts(categories: CategoryMap, developer: DeveloperConfig) -> Self {
        Self {
            categories,
            developer,
        }
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Evaluate a unit's current melee condition
    ///
    /// Units that are not melee-capable get an all-false snapshot.
    pub fn evaluate<U: CombatUnit + ?Sized>(&self, unit: &U) -> MeleeCondition {
        info!("Calculating melee condition for unit: {}", unit.id());

        if !unit.kind().can_melee() {
            info!("  - unit is a {:?}, cannot use melee attacks", unit.kind());
            return MeleeCondition::unavailable();
        }

        let mut left = LimbCondition::default();
        let mut right = LimbCondition::default();

        for component in unit.components() {
            let Some((limb, side)) = component.location.limb_side() else {
                continue;
            };
            debug!(
                "  - Actuator: {} is functional: {}",
                component.name, component.functional
            );
            if let Some(subsystem) = self.categories.classify(component, limb) {
                let target = match side {
                    Side::Left => &mut left,
                    Side::Right => &mut right,
                };
                target.apply(subsystem, component.functional);
            }
        }

        let stats = unit.stats();
        let status = unit.status();
        let gate = self.gate(status);
        if let Some(gate) = gate {
            match gate {
                MeleeGate::DeveloperOverride => info!("Invalidated by developer flag."),
                MeleeGate::DownOrStanding => {
                    info!("Cannot melee when you stand up or are being knocked down")
                }
                MeleeGate::Dead => info!("Cannot melee when dead"),
            }
        }

        let flags = MeleeFlags {
            can_melee: gate.is_none(),
            has_physical_attack: stats.flag(PUNCH_IS_PHYSICAL_WEAPON),
            ignore_actuator_damage: stats.flag(PHYSICAL_WEAPON_IGNORE_ACTUATORS),
            unsteady: status.unsteady,
            can_dfa: status.can_dfa,
        };

        MeleeCondition::from_parts(left, right, flags)
    }

    /// First status gate that denies melee, if any
    pub fn gate(&self, status: &UnitStatus) -> Option<MeleeGate> {
        if self.developer.force_invalidate_all_melee_attacks {
            Some(MeleeGate::DeveloperOverride)
        } else if status.is_or_will_be_prone()
            || status.stood_up_this_round
            || status.flagged_for_knockdown
        {
            Some(MeleeGate::DownOrStanding)
        } else if status.is_or_will_be_dead() {
            Some(MeleeGate::Dead)
        } else {
            None
        }
    }
}
