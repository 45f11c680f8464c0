pub mod component;
pub mod state;
pub mod stats;

pub use component::Component;
pub use state::{CombatUnit, UnitKind, UnitState, UnitStatus};
pub use stats::{StatCollection, StatValue};
