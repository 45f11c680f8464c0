//! Mech Melee - melee eligibility rules for turn-based mech combat
//!
//! Given a unit's installed actuators and status, decides which melee
//! attacks it may make this turn and what modifiers they carry.

pub mod core;
pub mod hooks;
pub mod melee;
pub mod unit;
