//! Named unit statistics
//!
//! Hosts attach loosely-typed statistics to units. Lookups never fail: a
//! missing statistic or one holding a different type reads as absent.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Punch attacks count as a physical weapon
pub const PUNCH_IS_PHYSICAL_WEAPON: &str = "PunchIsPhysicalWeapon";
/// Physical weapon attacks ignore arm actuator damage
pub const PHYSICAL_WEAPON_IGNORE_ACTUATORS: &str = "PhysicalWeaponIgnoreActuators";
/// Initiative phases a target loses when hit in melee by this unit
pub const MELEE_HIT_PUSHBACK_PHASES: &str = "MeleeHitPushBackPhases";
/// Unit may fire after sprinting this round
pub const CAN_SHOOT_AFTER_SPRINTING: &str = "CanShootAfterSprinting";

/// A single statistic value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl From<bool> for StatValue {
    fn from(v: bool) -> Self {
        StatValue::Bool(v)
    }
}

impl From<i64> for StatValue {
    fn from(v: i64) -> Self {
        StatValue::Int(v)
    }
}

impl From<f64> for StatValue {
    fn from(v: f64) -> Self {
        StatValue::Float(v)
    }
}

/// Statistics keyed by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatCollection {
    values: AHashMap<String, StatValue>,
}

impl StatCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<StatValue> {
        self.values.get(key).copied()
    }

    /// Boolean value of a statistic, `None` when missing or not a bool
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(StatValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// Integer value of a statistic, `None` when missing or not an int
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(StatValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// True only when the statistic exists and holds `true`
    pub fn flag(&self, key: &str) -> bool {
        self.get_bool(key).unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StatValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<StatValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
