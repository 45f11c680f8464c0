//! Per-attack melee states
//!
//! One [`MeleeState`] per attack type, built from a condition snapshot. It
//! carries validity, the hit tables each side rolls on and the additive
//! to-hit modifiers produced by actuator damage. Damage clusters and
//! instability are left for the host's damage rules to fill in.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::config::{ActuatorModifierConfig, MeleeConfig};
use crate::melee::condition::{LimbCondition, MeleeCondition};
use crate::melee::eligibility::MeleeAttackType;

pub const MOD_LEG_ACTUATOR_DAMAGE: &str = "LEG ACTUATOR DAMAGE";
pub const MOD_FOOT_ACTUATOR_DAMAGE: &str = "FOOT ACTUATOR DAMAGE";
pub const MOD_ARM_ACTUATOR_DAMAGE: &str = "ARM ACTUATOR DAMAGE";
pub const MOD_HAND_ACTUATOR_DAMAGE: &str = "HAND ACTUATOR DAMAGE";

/// Hit location table used to distribute melee damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DamageTable {
    /// Side takes no damage
    #[default]
    None,
    Standard,
    Rear,
    Punch,
    Kick,
}

/// Resolved state for one melee attack type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeleeState {
    pub attack: MeleeAttackType,
    pub is_valid: bool,
    pub attacker_table: DamageTable,
    pub target_table: DamageTable,
    pub attacker_damage_clusters: Vec<f32>,
    pub target_damage_clusters: Vec<f32>,
    pub attacker_instability: f32,
    pub target_instability: f32,
    pub force_unsteady_on_attacker: bool,
    pub force_unsteady_on_target: bool,
    /// Named to-hit modifiers shown to the player, summed for the roll
    pub attack_modifiers: BTreeMap<String, i32>,
    /// Notes shown in the attack description
    pub description_notes: BTreeSet<String>,
}

impl MeleeState {
    fn new(attack: MeleeAttackType, is_valid: bool) -> Self {
        let (attacker_table, target_table) = match attack {
            MeleeAttackType::Charge => (DamageTable::Standard, DamageTable::Standard),
            MeleeAttackType::DeathFromAbove => (DamageTable::Kick, DamageTable::Punch),
            MeleeAttackType::Kick => (DamageTable::None, DamageTable::Kick),
            MeleeAttackType::PhysicalWeapon => (DamageTable::None, DamageTable::Standard),
            MeleeAttackType::Punch => (DamageTable::None, DamageTable::Punch),
        };
        Self {
            attack,
            is_valid,
            attacker_table,
            target_table,
            attacker_damage_clusters: Vec::new(),
            target_damage_clusters: Vec::new(),
            attacker_instability: 0.0,
            target_instability: 0.0,
            force_unsteady_on_attacker: false,
            force_unsteady_on_target: false,
            attack_modifiers: BTreeMap::new(),
            description_notes: BTreeSet::new(),
        }
    }

    /// Record a modifier, skipping zero values
    pub fn add_modifier(&mut self, label: impl Into<String>, value: i32) {
        if value != 0 {
            let entry = self.attack_modifiers.entry(label.into()).or_insert(0);
            *entry = entry.saturating_add(value);
        }
    }

    /// Sum of all attack modifiers, saturating at the i32 bounds
    pub fn total_modifier(&self) -> i32 {
        self.attack_modifiers
            .values()
            .fold(0i32, |total, value| total.saturating_add(*value))
    }
}

/// Melee states for every attack type, plus the player's selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeleeStates {
    pub charge: MeleeState,
    pub dfa: MeleeState,
    pub kick: MeleeState,
    pub physical_weapon: MeleeState,
    pub punch: MeleeState,
    selected: Option<MeleeAttackType>,
}

impl MeleeStates {
    /// Build all five states from a snapshot
    pub fn build(condition: &MeleeCondition, config: &MeleeConfig) -> Self {
        let mods = &config.modifiers;
        let mut states = Self {
            charge: MeleeState::new(MeleeAttackType::Charge, condition.can_charge()),
            dfa: MeleeState::new(MeleeAttackType::DeathFromAbove, condition.can_dfa()),
            kick: MeleeState::new(MeleeAttackType::Kick, condition.can_kick()),
            physical_weapon: MeleeState::new(
                MeleeAttackType::PhysicalWeapon,
                condition.can_use_physical_attack(),
            ),
            punch: MeleeState::new(MeleeAttackType::Punch, condition.can_punch()),
            selected: None,
        };

        if states.kick.is_valid {
            apply_kick_modifiers(&mut states.kick, condition, mods);
        }
        if states.punch.is_valid {
            apply_punch_modifiers(&mut states.punch, condition, mods);
        }
        if states.physical_weapon.is_valid && !condition.flags().ignore_actuator_damage {
            apply_physical_weapon_modifiers(&mut states.physical_weapon, condition, mods);
        }

        for attack in MeleeAttackType::ALL {
            let state = states.get_mut(attack);
            if !state.is_valid {
                state.description_notes.insert(invalid_reason(attack, condition).to_string());
            }
        }

        states
    }

    pub fn get(&self, attack: MeleeAttackType) -> &MeleeState {
        match attack {
            MeleeAttackType::Charge => &self.charge,
            MeleeAttackType::DeathFromAbove => &self.dfa,
            MeleeAttackType::Kick => &self.kick,
            MeleeAttackType::PhysicalWeapon => &self.physical_weapon,
            MeleeAttackType::Punch => &self.punch,
        }
    }

    fn get_mut(&mut self, attack: MeleeAttackType) -> &mut MeleeState {
        match attack {
            MeleeAttackType::Charge => &mut self.charge,
            MeleeAttackType::DeathFromAbove => &mut self.dfa,
            MeleeAttackType::Kick => &mut self.kick,
            MeleeAttackType::PhysicalWeapon => &mut self.physical_weapon,
            MeleeAttackType::Punch => &mut self.punch,
        }
    }

    /// Select an attack; invalid attacks leave the selection unchanged
    pub fn select(&mut self, attack: MeleeAttackType) -> Option<&MeleeState> {
        if !self.get(attack).is_valid {
            return None;
        }
        self.selected = Some(attack);
        Some(self.get(attack))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&MeleeState> {
        self.selected.map(|attack| self.get(attack))
    }

    /// Valid states in attack type order
    pub fn valid_states(&self) -> impl Iterator<Item = &MeleeState> {
        MeleeAttackType::ALL
            .into_iter()
            .map(move |attack| self.get(attack))
            .filter(|state| state.is_valid)
    }
}

fn apply_kick_modifiers(
    state: &mut MeleeState,
    condition: &MeleeCondition,
    mods: &ActuatorModifierConfig,
) {
    // Kicking leg is assumed to be the worse one
    let worst = condition.left().leg_actuators.min(condition.right().leg_actuators);
    let missing = 2u8.saturating_sub(worst) as i32;
    state.add_modifier(
        MOD_LEG_ACTUATOR_DAMAGE,
        missing.saturating_mul(mods.leg_actuator_missing),
    );

    if !condition.left().foot_functional || !condition.right().foot_functional {
        state.add_modifier(MOD_FOOT_ACTUATOR_DAMAGE, mods.foot_damaged);
    }
}

fn apply_punch_modifiers(
    state: &mut MeleeState,
    condition: &MeleeCondition,
    mods: &ActuatorModifierConfig,
) {
    let Some(arm) = best_arm(condition, |limb| limb.shoulder_functional) else {
        return;
    };
    let missing = 2u8.saturating_sub(arm.arm_actuators) as i32;
    state.add_modifier(
        MOD_ARM_ACTUATOR_DAMAGE,
        missing.saturating_mul(mods.arm_actuator_missing),
    );
    if !arm.hand_functional {
        state.add_modifier(MOD_HAND_ACTUATOR_DAMAGE, mods.hand_damaged);
    }
}

fn apply_physical_weapon_modifiers(
    state: &mut MeleeState,
    condition: &MeleeCondition,
    mods: &ActuatorModifierConfig,
) {
    let Some(arm) = best_arm(condition, LimbCondition::can_grip) else {
        return;
    };
    let missing = 2u8.saturating_sub(arm.arm_actuators) as i32;
    state.add_modifier(
        MOD_ARM_ACTUATOR_DAMAGE,
        missing.saturating_mul(mods.arm_actuator_missing),
    );
}

/// Least damaged arm that passes `usable`
fn best_arm<'a>(
    condition: &'a MeleeCondition,
    usable: impl Fn(&LimbCondition) -> bool,
) -> Option<&'a LimbCondition> {
    [condition.left(), condition.right()]
        .into_iter()
        .filter(|limb| usable(*limb))
        .max_by_key(|limb| (limb.arm_actuators, limb.hand_functional))
}

fn invalid_reason(attack: MeleeAttackType, condition: &MeleeCondition) -> &'static str {
    if !condition.can_melee() {
        return "Unit cannot make melee attacks this round";
    }
    match attack {
        MeleeAttackType::Charge => "Cannot charge while unsteady",
        MeleeAttackType::DeathFromAbove => "Unit cannot perform death from above",
        MeleeAttackType::Kick => "Cannot kick with a damaged hip actuator",
        MeleeAttackType::Punch => "Cannot punch without a functional shoulder actuator",
        MeleeAttackType::PhysicalWeapon => {
            if condition.has_physical_attack() {
                "Physical weapon needs an arm with functional shoulder and hand"
            } else {
                "No physical weapon equipped"
            }
        }
    }
}
