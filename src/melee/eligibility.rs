//! Melee eligibility queries
//!
//! Each query is a pure function of the snapshot and starts by checking
//! general melee eligibility.

use serde::{Deserialize, Serialize};

use crate::melee::condition::MeleeCondition;

/// Melee attack types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MeleeAttackType {
    Charge,
    DeathFromAbove,
    Kick,
    PhysicalWeapon,
    Punch,
}

impl MeleeAttackType {
    pub const ALL: [MeleeAttackType; 5] = [
        MeleeAttackType::Charge,
        MeleeAttackType::DeathFromAbove,
        MeleeAttackType::Kick,
        MeleeAttackType::PhysicalWeapon,
        MeleeAttackType::Punch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MeleeAttackType::Charge => "Charge",
            MeleeAttackType::DeathFromAbove => "Death From Above",
            MeleeAttackType::Kick => "Kick",
            MeleeAttackType::PhysicalWeapon => "Physical Weapon",
            MeleeAttackType::Punch => "Punch",
        }
    }
}

impl MeleeCondition {
    /// Cannot charge while unsteady
    pub fn can_charge(&self) -> bool {
        self.can_melee() && !self.flags().unsteady
    }

    pub fn can_dfa(&self) -> bool {
        self.can_melee() && self.flags().can_dfa
    }

    /// A single damaged hip cripples kicking
    pub fn can_kick(&self) -> bool {
        self.can_melee() && self.left().hip_functional && self.right().hip_functional
    }

    /// One working shoulder is enough to punch
    pub fn can_punch(&self) -> bool {
        self.can_melee() && (self.left().shoulder_functional || self.right().shoulder_functional)
    }

    /// Needs a physical weapon and one arm able to grip it, unless the unit
    /// ignores actuator damage
    pub fn can_use_physical_attack(&self) -> bool {
        if !self.can_melee() || !self.has_physical_attack() {
            return false;
        }

        if self.flags().ignore_actuator_damage {
            return true;
        }

        self.left().can_grip() || self.right().can_grip()
    }

    pub fn is_eligible(&self, attack: MeleeAttackType) -> bool {
        match attack {
            MeleeAttackType::Charge => self.can_charge(),
            MeleeAttackType::DeathFromAbove => self.can_dfa(),
            MeleeAttackType::Kick => self.can_kick(),
            MeleeAttackType::PhysicalWeapon => self.can_use_physical_attack(),
            MeleeAttackType::Punch => self.can_punch(),
        }
    }

    /// Every attack type legal this turn
    pub fn eligible_attacks(&self) -> Vec<MeleeAttackType> {
        MeleeAttackType::ALL
            .into_iter()
            .filter(|attack| self.is_eligible(*attack))
            .collect()
    }
}
