//! Melee eligibility integration tests
//!
//! Exercises evaluation end-to-end from unit components through to
//! per-attack melee states, including the documented damage scenarios.

use mech_melee::core::config::MeleeConfig;
use mech_melee::core::types::ChassisLocation;
use mech_melee::hooks::{CombatEvent, MeleeHooks};
use mech_melee::melee::{
    LimbCondition, LimbEvaluator, MeleeAttackType, MeleeCondition, MeleeFlags, MeleeStates,
};
use mech_melee::unit::stats::{PHYSICAL_WEAPON_IGNORE_ACTUATORS, PUNCH_IS_PHYSICAL_WEAPON};
use mech_melee::unit::{Component, UnitKind, UnitState, UnitStatus};
use proptest::prelude::*;

const CATEGORY_IDS: [&str; 9] = [
    "LegHip",
    "LegUpperActuator",
    "LegLowerActuator",
    "LegFootActuator",
    "ArmShoulder",
    "ArmUpperActuator",
    "ArmLowerActuator",
    "ArmHandActuator",
    "HeatSink",
];

fn evaluator() -> LimbEvaluator {
    LimbEvaluator::new(&MeleeConfig::default()).unwrap()
}

fn forced_evaluator() -> LimbEvaluator {
    let mut config = MeleeConfig::default();
    config.developer.force_invalidate_all_melee_attacks = true;
    LimbEvaluator::new(&config).unwrap()
}

fn intact_mech(name: &str) -> UnitState {
    UnitState::mech(name).with_full_actuators(&MeleeConfig::default().categories)
}

fn assert_all_invalid(condition: &MeleeCondition) {
    assert!(!condition.can_kick());
    assert!(!condition.can_punch());
    assert!(!condition.can_charge());
    assert!(!condition.can_dfa());
    assert!(!condition.can_use_physical_attack());
}

/// One hip out, both shoulders working: no kick, punch still fine
#[test]
fn test_scenario_single_hip_destroyed() {
    let mut mech = intact_mech("Hunchback");
    mech.destroy(ChassisLocation::RightLeg, "LegHip");

    let condition = evaluator().evaluate(&mech);
    assert!(condition.can_melee());
    assert!(condition.left().hip_functional);
    assert!(!condition.right().hip_functional);
    assert!(condition.left().shoulder_functional && condition.right().shoulder_functional);

    assert!(!condition.can_kick());
    assert!(condition.can_punch());
}

/// Ignore-actuators stat lets a physical weapon swing with wrecked arms
#[test]
fn test_scenario_ignore_actuators_with_destroyed_arms() {
    let mut mech = intact_mech("Berserker")
        .with_stat(PUNCH_IS_PHYSICAL_WEAPON, true)
        .with_stat(PHYSICAL_WEAPON_IGNORE_ACTUATORS, true);
    for location in [ChassisLocation::LeftArm, ChassisLocation::RightArm] {
        for category in ["ArmShoulder", "ArmUpperActuator", "ArmLowerActuator", "ArmHandActuator"] {
            mech.destroy(location, category);
        }
    }

    let condition = evaluator().evaluate(&mech);
    assert_eq!(condition.left().arm_actuators, 0);
    assert!(!condition.can_punch());
    assert!(condition.can_use_physical_attack());
}

/// Developer override wins over a perfect unit
#[test]
fn test_scenario_developer_override() {
    let mech = intact_mech("Atlas")
        .with_stat(PUNCH_IS_PHYSICAL_WEAPON, true)
        .with_status(UnitStatus {
            can_dfa: true,
            ..Default::default()
        });

    assert!(evaluator().evaluate(&mech).can_dfa());
    let condition = forced_evaluator().evaluate(&mech);
    assert_all_invalid(&condition);
}

#[test]
fn test_dead_or_prone_blocks_everything() {
    for status in [
        UnitStatus { dead: true, can_dfa: true, ..Default::default() },
        UnitStatus { prone: true, can_dfa: true, ..Default::default() },
    ] {
        let mech = intact_mech("Catapult")
            .with_stat(PUNCH_IS_PHYSICAL_WEAPON, true)
            .with_status(status);
        let condition = evaluator().evaluate(&mech);
        assert!(!condition.can_melee());
        assert_all_invalid(&condition);
    }
}

#[test]
fn test_one_shoulder_no_hands() {
    let mech = UnitState::mech("Urbanmech")
        .with_stat(PUNCH_IS_PHYSICAL_WEAPON, true)
        .with_component(Component::new("Shoulder", ChassisLocation::LeftArm, "ArmShoulder"))
        .with_component(
            Component::new("Hand", ChassisLocation::LeftArm, "ArmHandActuator").destroyed(),
        );

    let condition = evaluator().evaluate(&mech);
    assert!(condition.can_punch());
    assert!(!condition.can_use_physical_attack());

    let ignoring = mech.with_stat(PHYSICAL_WEAPON_IGNORE_ACTUATORS, true);
    assert!(evaluator().evaluate(&ignoring).can_use_physical_attack());
}

#[test]
fn test_vehicle_cannot_melee() {
    let tank = UnitState::new("Schrek", UnitKind::Vehicle)
        .with_full_actuators(&MeleeConfig::default().categories);
    let condition = evaluator().evaluate(&tank);
    assert_eq!(condition, MeleeCondition::unavailable());
    assert!(condition.eligible_attacks().is_empty());
}

#[test]
fn test_custom_categories() {
    let toml = r#"
        [categories]
        hip = ["Hip", "HipTSM"]
        shoulder = ["Shoulder"]
    "#;
    let config = MeleeConfig::from_toml_str(toml).unwrap();
    let evaluator = LimbEvaluator::new(&config).unwrap();

    let mech = UnitState::mech("Custom")
        .with_component(Component::new("L Hip", ChassisLocation::LeftLeg, "Hip"))
        .with_component(Component::new("R Hip", ChassisLocation::RightLeg, "HipTSM"))
        .with_component(
            Component::new("Stock Hip", ChassisLocation::RightLeg, "LegHip").destroyed(),
        );

    // Stock ids are no longer configured for hips, so the destroyed part is ignored
    let condition = evaluator.evaluate(&mech);
    assert!(condition.can_kick());
    assert!(!condition.can_punch());
}

#[test]
fn test_unsteady_is_captured_in_snapshot() {
    let mut mech = intact_mech("Firestarter");
    let condition = evaluator().evaluate(&mech);

    mech.status.unsteady = true;
    assert!(condition.can_charge());
    assert!(!evaluator().evaluate(&mech).can_charge());
}

#[test]
fn test_states_through_hooks() {
    let mut hooks = MeleeHooks::new(MeleeConfig::default()).unwrap();
    let mut mech = intact_mech("Stalker");
    mech.destroy(ChassisLocation::LeftLeg, "LegUpperActuator");

    let states = hooks.melee_states(&mech);
    assert!(states.kick.is_valid);
    assert_eq!(states.kick.total_modifier(), 2);
    assert!(states.select(MeleeAttackType::Kick).is_some());

    mech.destroy(ChassisLocation::LeftLeg, "LegHip");
    hooks.handle(CombatEvent::UnitDamaged { unit: mech.id });
    let states = hooks.melee_states(&mech);
    assert!(!states.kick.is_valid);
    assert!(states.selected().is_none());
}

#[test]
fn test_single_snapshot_matches_hook_states() {
    let config = MeleeConfig::default();
    let unit: UnitState = toml::from_str(include_str!("../demos/crippled_atlas.toml")).unwrap();

    let condition = LimbEvaluator::new(&config).unwrap().evaluate(&unit);
    let direct = MeleeStates::build(&condition, &config);

    let mut hooks = MeleeHooks::new(config).unwrap();
    assert_eq!(*hooks.melee_states(&unit), direct);
    assert_eq!(
        direct.valid_states().map(|s| s.attack).collect::<Vec<_>>(),
        condition.eligible_attacks()
    );
}

#[test]
fn test_load_shipped_config_from_disk() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/melee.toml");
    let config = MeleeConfig::load(&path).unwrap();
    assert_eq!(config, MeleeConfig::default());
}

#[test]
fn test_demo_unit_parses() {
    let unit: UnitState = toml::from_str(include_str!("../demos/crippled_atlas.toml")).unwrap();
    let condition = evaluator().evaluate(&unit);

    assert!(!condition.can_kick());
    assert!(condition.can_punch());
    assert!(!condition.can_charge());
    assert!(condition.can_use_physical_attack());
    assert_eq!(condition.right().arm_actuators, 1);

    let states = MeleeStates::build(&condition, &MeleeConfig::default());
    assert_eq!(states.punch.total_modifier(), 0);
    assert_eq!(states.physical_weapon.total_modifier(), 0);
}

fn location_strategy() -> impl Strategy<Value = ChassisLocation> {
    prop_oneof![
        Just(ChassisLocation::Head),
        Just(ChassisLocation::CenterTorso),
        Just(ChassisLocation::LeftTorso),
        Just(ChassisLocation::RightTorso),
        Just(ChassisLocation::LeftArm),
        Just(ChassisLocation::RightArm),
        Just(ChassisLocation::LeftLeg),
        Just(ChassisLocation::RightLeg),
    ]
}

fn component_strategy(
    location: impl Strategy<Value = ChassisLocation>,
) -> impl Strategy<Value = Component> {
    (location, any::<bool>(), prop::sample::select(CATEGORY_IDS.to_vec())).prop_map(
        |(location, functional, category)| Component {
            name: category.to_string(),
            location,
            functional,
            categories: vec![category.to_string()],
        },
    )
}

fn status_strategy() -> impl Strategy<Value = UnitStatus> {
    prop::array::uniform10(any::<bool>()).prop_map(|b| UnitStatus {
        dead: b[0],
        flagged_for_death: b[1],
        prone: b[2],
        will_be_prone: b[3],
        stood_up_this_round: b[4],
        flagged_for_knockdown: b[5],
        unsteady: b[6],
        can_dfa: b[7],
        moved_this_round: b[8],
        jumped_last_round: b[9],
    })
}

fn unit_strategy(
    location: impl Strategy<Value = ChassisLocation>,
) -> impl Strategy<Value = UnitState> {
    (
        prop::collection::vec(component_strategy(location), 0..24),
        status_strategy(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(components, status, physical, ignore)| {
            let mut unit = UnitState::mech("Random").with_status(status);
            unit.components = components;
            unit.with_stat(PUNCH_IS_PHYSICAL_WEAPON, physical)
                .with_stat(PHYSICAL_WEAPON_IGNORE_ACTUATORS, ignore)
        })
}

fn limb_strategy() -> impl Strategy<Value = LimbCondition> {
    (any::<bool>(), 0u8..=2, any::<bool>(), any::<bool>(), 0u8..=2, any::<bool>()).prop_map(
        |(hip, legs, foot, shoulder, arms, hand)| LimbCondition {
            hip_functional: hip,
            leg_actuators: legs,
            foot_functional: foot,
            shoulder_functional: shoulder,
            arm_actuators: arms,
            hand_functional: hand,
        },
    )
}

proptest! {
    #[test]
    fn prop_no_legs_never_kicks(unit in unit_strategy(prop_oneof![
        Just(ChassisLocation::LeftArm),
        Just(ChassisLocation::RightArm),
        Just(ChassisLocation::CenterTorso),
    ])) {
        prop_assert!(!evaluator().evaluate(&unit).can_kick());
    }

    #[test]
    fn prop_developer_override_blocks_all(unit in unit_strategy(location_strategy())) {
        let condition = forced_evaluator().evaluate(&unit);
        prop_assert!(condition.eligible_attacks().is_empty());
    }

    #[test]
    fn prop_evaluation_is_idempotent(unit in unit_strategy(location_strategy())) {
        let evaluator = evaluator();
        prop_assert_eq!(evaluator.evaluate(&unit), evaluator.evaluate(&unit));
    }

    #[test]
    fn prop_both_hips_kick(left in limb_strategy(), right in limb_strategy()) {
        let flags = MeleeFlags { can_melee: true, ..Default::default() };
        let left = LimbCondition { hip_functional: true, ..left };
        let right = LimbCondition { hip_functional: true, ..right };
        prop_assert!(MeleeCondition::from_parts(left, right, flags).can_kick());
    }

    #[test]
    fn prop_no_melee_no_attacks(
        left in limb_strategy(),
        right in limb_strategy(),
        physical in any::<bool>(),
        ignore in any::<bool>(),
        can_dfa in any::<bool>(),
    ) {
        let flags = MeleeFlags {
            can_melee: false,
            has_physical_attack: physical,
            ignore_actuator_damage: ignore,
            unsteady: false,
            can_dfa,
        };
        let condition = MeleeCondition::from_parts(left, right, flags);
        prop_assert!(condition.eligible_attacks().is_empty());
        let states = MeleeStates::build(&condition, &MeleeConfig::default());
        prop_assert_eq!(states.valid_states().count(), 0);
    }

    #[test]
    fn prop_valid_states_match_queries(left in limb_strategy(), right in limb_strategy()) {
        let flags = MeleeFlags {
            can_melee: true,
            has_physical_attack: true,
            can_dfa: true,
            ..Default::default()
        };
        let condition = MeleeCondition::from_parts(left, right, flags);
        let states = MeleeStates::build(&condition, &MeleeConfig::default());
        for attack in MeleeAttackType::ALL {
            prop_assert_eq!(states.get(attack).is_valid, condition.is_eligible(attack));
            prop_assert!(states.get(attack).total_modifier() >= 0);
        }
    }
}
