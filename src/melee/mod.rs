pub mod cache;
pub mod category;
pub mod condition;
pub mod eligibility;
pub mod evaluator;
pub mod state;

pub use cache::MeleeStateCache;
pub use category::{CategoryMap, LimbSubsystem};
pub use condition::{LimbCondition, MeleeCondition, MeleeFlags};
pub use eligibility::MeleeAttackType;
pub use evaluator::{LimbEvaluator, MeleeGate};
pub use state::{DamageTable, MeleeState, MeleeStates};
