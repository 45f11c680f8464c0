//! Host unit abstraction
//!
//! The melee rules only ever read a unit through [`CombatUnit`]. Hosts
//! implement it over their own actor model; [`UnitState`] is the plain
//! value implementation used by tooling and tests.

use serde::{Deserialize, Serialize};

use crate::core::config::CategoryConfig;
use crate::core::types::{ChassisLocation, Limb, Side, UnitId};
use crate::melee::category::LimbSubsystem;
use crate::unit::component::Component;
use crate::unit::stats::{StatCollection, StatValue};

/// Chassis type of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitKind {
    /// Legged and armed chassis, the only kind that can melee
    #[default]
    Mech,
    Vehicle,
    Turret,
    Trooper,
}

impl UnitKind {
    pub fn can_melee(&self) -> bool {
        matches!(self, UnitKind::Mech)
    }
}

/// Whole-unit status flags, read at evaluation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitStatus {
    pub dead: bool,
    pub flagged_for_death: bool,
    pub prone: bool,
    /// Will be prone once the current sequence resolves
    pub will_be_prone: bool,
    pub stood_up_this_round: bool,
    pub flagged_for_knockdown: bool,
    pub unsteady: bool,
    /// Chassis is able to perform death-from-above attacks
    pub can_dfa: bool,
    pub moved_this_round: bool,
    pub jumped_last_round: bool,
}

impl UnitStatus {
    /// Prone now or about to be
    pub fn is_or_will_be_prone(&self) -> bool {
        self.prone || self.will_be_prone
    }

    /// Dead now or about to be
    pub fn is_or_will_be_dead(&self) -> bool {
        self.dead || self.flagged_for_death
    }
}

/// Read access to a host unit
pub trait CombatUnit {
    fn id(&self) -> UnitId;
    fn kind(&self) -> UnitKind;
    fn components(&self) -> &[Component];
    fn status(&self) -> &UnitStatus;
    fn stats(&self) -> &StatCollection;
    fn stats_mut(&mut self) -> &mut StatCollection;
}

/// Plain unit value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitState {
    #[serde(default)]
    pub id: UnitId,
    pub name: String,
    #[serde(default)]
    pub kind: UnitKind,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub status: UnitStatus,
    #[serde(default)]
    pub stats: StatCollection,
}

impl UnitState {
    pub fn new(name: impl Into<String>, kind: UnitKind) -> Self {
        Self {
            id: UnitId::new(),
            name: name.into(),
            kind,
            components: Vec::new(),
            status: UnitStatus::default(),
            stats: StatCollection::new(),
        }
    }

    /// An undamaged mech with no components installed
    pub fn mech(name: impl Into<String>) -> Self {
        Self::new(name, UnitKind::Mech)
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_stat(mut self, key: impl Into<String>, value: impl Into<StatValue>) -> Self {
        self.stats.set(key, value);
        self
    }

    /// Install a functional actuator for every subsystem on both sides
    ///
    /// Uses the first configured id of each subsystem; subsystems with no
    /// configured id are skipped.
    pub fn with_full_actuators(mut self, categories: &CategoryConfig) -> Self {
        for side in [Side::Left, Side::Right] {
            for subsystem in LimbSubsystem::ALL {
                let Some(id) = categories.ids(subsystem).first() else {
                    continue;
                };
                let location = match (subsystem.limb(), side) {
                    (Limb::Arm, Side::Left) => ChassisLocation::LeftArm,
                    (Limb::Arm, Side::Right) => ChassisLocation::RightArm,
                    (Limb::Leg, Side::Left) => ChassisLocation::LeftLeg,
                    (Limb::Leg, Side::Right) => ChassisLocation::RightLeg,
                };
                let name = format!("{:?} {:?}", side, subsystem);
                self.components.push(Component::new(name, location, id.clone()));
            }
        }
        self
    }

    /// Mark every component in a location with the given category destroyed
    pub fn destroy(&mut self, location: ChassisLocation, category: &str) {
        for component in &mut self.components {
            if component.location == location && component.is_category(category) {
                component.functional = false;
            }
        }
    }
}

impl CombatUnit for UnitState {
    fn id(&self) -> UnitId {
        self.id
    }

    fn kind(&self) -> UnitKind {
        self.kind
    }

    fn components(&self) -> &[Component] {
        &self.components
    }

    fn status(&self) -> &UnitStatus {
        &self.status
    }

    fn stats(&self) -> &StatCollection {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatCollection {
        &mut self.stats
    }
}
