//! Situational to-hit modifiers

use crate::core::config::ToHitConfig;
use crate::unit::CombatUnit;

/// Penalty for an attacker that moved this round after jumping last round
pub fn self_jumped_modifier<U: CombatUnit + ?Sized>(unit: &U, config: &ToHitConfig) -> i32 {
    let status = unit.status();
    if status.moved_this_round && status.jumped_last_round {
        config.self_jumped
    } else {
        0
    }
}

/// Append the jumped modifier to a tooltip description
pub fn describe_self_jumped<U: CombatUnit + ?Sized>(
    description: &str,
    unit: &U,
    config: &ToHitConfig,
) -> String {
    let status = unit.status();
    if status.moved_this_round && status.jumped_last_round {
        format!("{}JUMPED {}; ", description, signed(config.self_jumped))
    } else {
        description.to_string()
    }
}

/// `+2`, `-1`, or empty for zero
fn signed(value: i32) -> String {
    match value {
        0 => String::new(),
        v if v > 0 => format!("+{}", v),
        v => v.to_string(),
    }
}
