pub mod config;
pub mod error;
pub mod types;

pub use config::MeleeConfig;
pub use error::{MeleeError, Result};
pub use types::{ChassisLocation, Limb, Round, Side, UnitId};
