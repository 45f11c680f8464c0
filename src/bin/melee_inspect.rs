//! Melee Inspector
//!
//! Loads a unit description and prints which melee attacks it may make,
//! with the modifiers each one carries.

use clap::Parser;
use mech_melee::core::config::MeleeConfig;
use mech_melee::core::error::Result;
use mech_melee::melee::{LimbEvaluator, MeleeAttackType, MeleeCondition, MeleeStates};
use mech_melee::unit::UnitState;
use serde::Serialize;
use std::path::PathBuf;

/// Melee Inspector - melee eligibility report for a single unit
#[derive(Parser, Debug)]
#[command(name = "melee_inspect")]
#[command(about = "Report melee eligibility and modifiers for a unit")]
struct Args {
    /// Unit description (JSON, or TOML when the extension is .toml)
    unit: PathBuf,

    /// Melee config TOML (defaults to the shipped data/melee.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging of the evaluation
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct Report<'a> {
    unit: &'a str,
    condition: MeleeCondition,
    eligible: Vec<MeleeAttackType>,
    states: &'a MeleeStates,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => MeleeConfig::load(path)?,
        None => MeleeConfig::from_toml_str(include_str!("../../data/melee.toml"))?,
    };

    let content = std::fs::read_to_string(&args.unit)?;
    let unit: UnitState = if args.unit.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    let evaluator = LimbEvaluator::new(&config)?;
    let condition = evaluator.evaluate(&unit);
    let states = MeleeStates::build(&condition, &config);

    if args.format == "json" {
        let report = Report {
            unit: &unit.name,
            condition,
            eligible: condition.eligible_attacks(),
            states: &states,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== {} ===", unit.name);
    println!("Can melee: {}", condition.can_melee());
    for attack in MeleeAttackType::ALL {
        let state = states.get(attack);
        if state.is_valid {
            println!("  {:<18} VALID  modifier {:+}", attack.label(), state.total_modifier());
            for (label, value) in &state.attack_modifiers {
                println!("      {} {:+}", label, value);
            }
        } else {
            println!("  {:<18} -", attack.label());
            for note in &state.description_notes {
                println!("      {}", note);
            }
        }
    }

    Ok(())
}
