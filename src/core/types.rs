//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for combat units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Combat round counter
pub type Round = u32;

/// Left or right side of a chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Limb kind a location belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Limb {
    Arm,
    Leg,
}

/// Where a component is mounted on the chassis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChassisLocation {
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl ChassisLocation {
    /// Limb and side for arm and leg locations, `None` for everything else
    pub fn limb_side(&self) -> Option<(Limb, Side)> {
        match self {
            ChassisLocation::LeftArm => Some((Limb::Arm, Side::Left)),
            ChassisLocation::RightArm => Some((Limb::Arm, Side::Right)),
            ChassisLocation::LeftLeg => Some((Limb::Leg, Side::Left)),
            ChassisLocation::RightLeg => Some((Limb::Leg, Side::Right)),
            _ => None,
        }
    }
}
