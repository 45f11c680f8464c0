//! Actuator classification
//!
//! Category ids from the config are folded into a single lookup table once,
//! so classifying a component is a handful of hash lookups instead of a scan
//! over every configured list.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::CategoryConfig;
use crate::core::error::{MeleeError, Result};
use crate::core::types::Limb;
use crate::unit::Component;

/// Actuator subsystems, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LimbSubsystem {
    Hip,
    UpperLeg,
    LowerLeg,
    Foot,
    Shoulder,
    UpperArm,
    LowerArm,
    Hand,
}

impl LimbSubsystem {
    pub const ALL: [LimbSubsystem; 8] = [
        LimbSubsystem::Hip,
        LimbSubsystem::UpperLeg,
        LimbSubsystem::LowerLeg,
        LimbSubsystem::Foot,
        LimbSubsystem::Shoulder,
        LimbSubsystem::UpperArm,
        LimbSubsystem::LowerArm,
        LimbSubsystem::Hand,
    ];

    /// Which limb this subsystem lives in
    pub fn limb(&self) -> Limb {
        match self {
            LimbSubsystem::Hip
            | LimbSubsystem::UpperLeg
            | LimbSubsystem::LowerLeg
            | LimbSubsystem::Foot => Limb::Leg,
            LimbSubsystem::Shoulder
            | LimbSubsystem::UpperArm
            | LimbSubsystem::LowerArm
            | LimbSubsystem::Hand => Limb::Arm,
        }
    }

    /// Counted actuators (upper/lower) as opposed to single joints
    pub fn is_counted(&self) -> bool {
        matches!(
            self,
            LimbSubsystem::UpperLeg
                | LimbSubsystem::LowerLeg
                | LimbSubsystem::UpperArm
                | LimbSubsystem::LowerArm
        )
    }
}

/// Category id to subsystem lookup
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    by_id: AHashMap<String, LimbSubsystem>,
}

impl CategoryMap {
    /// Build the lookup, rejecting ids configured for more than one subsystem
    pub fn from_config(config: &CategoryConfig) -> Result<Self> {
        let mut by_id = AHashMap::new();
        for subsystem in LimbSubsystem::ALL {
            for id in config.ids(subsystem) {
                if let Some(&first) = by_id.get(id) {
                    if first != subsystem {
                        return Err(MeleeError::DuplicateCategory {
                            category: id.clone(),
                            first,
                            second: subsystem,
                        });
                    }
                    continue;
                }
                by_id.insert(id.clone(), subsystem);
            }
        }
        Ok(Self { by_id })
    }

    pub fn subsystem(&self, category: &str) -> Option<LimbSubsystem> {
        self.by_id.get(category).copied()
    }

    /// Subsystem a component counts toward on the given limb
    ///
    /// When a component carries ids for several subsystems, the earliest in
    /// evaluation order wins, so no component is ever counted twice.
    pub fn classify(&self, component: &Component, limb: Limb) -> Option<LimbSubsystem> {
        component
            .categories
            .iter()
            .filter_map(|c| self.subsystem(c))
            .filter(|s| s.limb() == limb)
            .min()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
