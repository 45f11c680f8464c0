//! Melee rules configuration
//!
//! Loaded once from TOML and handed to the evaluator and hooks explicitly.
//! Every section falls back to its defaults when omitted from the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{MeleeError, Result};
use crate::melee::category::{CategoryMap, LimbSubsystem};

/// Complete melee configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeleeConfig {
    /// Component category ids that identify each actuator
    #[serde(default)]
    pub categories: CategoryConfig,
    /// Developer switches
    #[serde(default)]
    pub developer: DeveloperConfig,
    /// Situational to-hit modifiers
    #[serde(default)]
    pub to_hit: ToHitConfig,
    /// Penalties produced by actuator damage
    #[serde(default)]
    pub modifiers: ActuatorModifierConfig,
}

/// Ordered category id lists, one per actuator subsystem
///
/// A component is an actuator of a subsystem when it carries any of the
/// ids listed for that subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub hip: Vec<String>,
    pub upper_leg: Vec<String>,
    pub lower_leg: Vec<String>,
    pub foot: Vec<String>,
    pub shoulder: Vec<String>,
    pub upper_arm: Vec<String>,
    pub lower_arm: Vec<String>,
    pub hand: Vec<String>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            hip: vec!["LegHip".to_string()],
            upper_leg: vec!["LegUpperActuator".to_string()],
            lower_leg: vec!["LegLowerActuator".to_string()],
            foot: vec!["LegFootActuator".to_string()],
            shoulder: vec!["ArmShoulder".to_string()],
            upper_arm: vec!["ArmUpperActuator".to_string()],
            lower_arm: vec!["ArmLowerActuator".to_string()],
            hand: vec!["ArmHandActuator".to_string()],
        }
    }
}

impl CategoryConfig {
    /// The id list configured for one subsystem
    pub fn ids(&self, subsystem: LimbSubsystem) -> &[String] {
        match subsystem {
            LimbSubsystem::Hip => &self.hip,
            LimbSubsystem::UpperLeg => &self.upper_leg,
            LimbSubsystem::LowerLeg => &self.lower_leg,
            LimbSubsystem::Foot => &self.foot,
            LimbSubsystem::Shoulder => &self.shoulder,
            LimbSubsystem::UpperArm => &self.upper_arm,
            LimbSubsystem::LowerArm => &self.lower_arm,
            LimbSubsystem::Hand => &self.hand,
        }
    }
}

/// Developer switches
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeveloperConfig {
    /// Makes every melee attack invalid regardless of unit state
    pub force_invalidate_all_melee_attacks: bool,
}

/// Situational to-hit modifiers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToHitConfig {
    /// Penalty for an attacker that moved this round after jumping last round
    pub self_jumped: i32,
}

impl Default for ToHitConfig {
    fn default() -> Self {
        Self { self_jumped: 2 }
    }
}

/// Largest penalty any single actuator modifier may carry
pub const MAX_ACTUATOR_MODIFIER: i32 = 100;

/// Additive to-hit penalties from actuator damage
///
/// These are ADDITIVE, never multiplicative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuatorModifierConfig {
    /// Per missing upper/lower leg actuator (kick)
    pub leg_actuator_missing: i32,
    /// Damaged foot actuator (kick)
    pub foot_damaged: i32,
    /// Per missing upper/lower arm actuator (punch, physical weapon)
    pub arm_actuator_missing: i32,
    /// Damaged hand actuator (punch)
    pub hand_damaged: i32,
}

impl Default for ActuatorModifierConfig {
    fn default() -> Self {
        Self {
            leg_actuator_missing: 2,
            foot_damaged: 1,
            arm_actuator_missing: 2,
            hand_damaged: 1,
        }
    }
}

impl MeleeConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MeleeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded melee config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for subsystem in LimbSubsystem::ALL {
            if self.categories.ids(subsystem).iter().any(|id| id.trim().is_empty()) {
                return Err(MeleeError::InvalidConfig(format!(
                    "blank category id listed for {:?}",
                    subsystem
                )));
            }
        }

        // Building the map rejects ids shared between subsystems
        CategoryMap::from_config(&self.categories)?;

        let m = &self.modifiers;
        for (name, value) in [
            ("leg_actuator_missing", m.leg_actuator_missing),
            ("foot_damaged", m.foot_damaged),
            ("arm_actuator_missing", m.arm_actuator_missing),
            ("hand_damaged", m.hand_damaged),
        ] {
            if !(0..=MAX_ACTUATOR_MODIFIER).contains(&value) {
                return Err(MeleeError::InvalidConfig(format!(
                    "actuator modifier {} = {} is outside 0..={}",
                    name, value, MAX_ACTUATOR_MODIFIER
                )));
            }
        }

        Ok(())
    }
}
