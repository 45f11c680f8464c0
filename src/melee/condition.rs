//! Melee condition snapshot
//!
//! A point-in-time summary of a unit's limbs and melee-relevant status.
//! Built once per evaluation and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::core::types::Side;
use crate::melee::category::LimbSubsystem;

/// Functional state of one side's arm and leg
///
/// Everything starts non-functional: a subsystem with no matching component
/// is treated exactly like a destroyed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LimbCondition {
    pub hip_functional: bool,
    /// Functional upper and lower leg actuators (0-2)
    pub leg_actuators: u8,
    pub foot_functional: bool,
    pub shoulder_functional: bool,
    /// Functional upper and lower arm actuators (0-2)
    pub arm_actuators: u8,
    pub hand_functional: bool,
}

impl LimbCondition {
    /// Every actuator on this side working
    pub fn intact() -> Self {
        Self {
            hip_functional: true,
            leg_actuators: 2,
            foot_functional: true,
            shoulder_functional: true,
            arm_actuators: 2,
            hand_functional: true,
        }
    }

    /// Fold one classified component into the summary
    ///
    /// Joints take the state of the last matching component; counted
    /// actuators add one per functional match.
    pub(crate) fn apply(&mut self, subsystem: LimbSubsystem, functional: bool) {
        match subsystem {
            LimbSubsystem::Hip => self.hip_functional = functional,
            LimbSubsystem::Foot => self.foot_functional = functional,
            LimbSubsystem::Shoulder => self.shoulder_functional = functional,
            LimbSubsystem::Hand => self.hand_functional = functional,
            LimbSubsystem::UpperLeg | LimbSubsystem::LowerLeg => {
                if functional {
                    self.leg_actuators = self.leg_actuators.saturating_add(1);
                }
            }
            LimbSubsystem::UpperArm | LimbSubsystem::LowerArm => {
                if functional {
                    self.arm_actuators = self.arm_actuators.saturating_add(1);
                }
            }
        }
    }

    /// Arm can wield a physical weapon (shoulder and hand both work)
    pub fn can_grip(&self) -> bool {
        self.shoulder_functional && self.hand_functional
    }
}

/// Unit-level flags captured alongside the limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeleeFlags {
    /// General melee eligibility after status gating
    pub can_melee: bool,
    /// Unit carries a punch flagged as a physical weapon
    pub has_physical_attack: bool,
    /// Physical weapon attacks ignore arm actuator damage
    pub ignore_actuator_damage: bool,
    /// Unsteady when the snapshot was taken
    pub unsteady: bool,
    /// Chassis can perform death-from-above
    pub can_dfa: bool,
}

/// Immutable melee snapshot for one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeleeCondition {
    left: LimbCondition,
    right: LimbCondition,
    flags: MeleeFlags,
}

impl MeleeCondition {
    /// Assemble a snapshot directly from its parts
    ///
    /// Evaluation goes through [`crate::melee::LimbEvaluator`]; this exists
    /// for tests and tooling that need an exact state.
    pub fn from_parts(left: LimbCondition, right: LimbCondition, flags: MeleeFlags) -> Self {
        Self { left, right, flags }
    }

    /// Snapshot for a unit that cannot melee at all
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn left(&self) -> &LimbCondition {
        &self.left
    }

    pub fn right(&self) -> &LimbCondition {
        &self.right
    }

    pub fn side(&self, side: Side) -> &LimbCondition {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn flags(&self) -> &MeleeFlags {
        &self.flags
    }

    pub fn can_melee(&self) -> bool {
        self.flags.can_melee
    }

    pub fn has_physical_attack(&self) -> bool {
        self.flags.has_physical_attack
    }
}
