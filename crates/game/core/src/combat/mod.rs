//! Combat resolution system.
//!
//! # Architecture
//!
//! - **Pure formulas**: `curve`, `hit`, `damage`, and `facing` are free
//!   functions over [`Combatant`](crate::combatant::Combatant) reads
//! - **Injected randomness**: every draw goes through an
//!   [`RngSource`](crate::env::RngSource) passed by the caller
//! - **One mutation point**: [`AttackResolver::attack`] is the only code that
//!   writes damage and statistics
//!
//! # Core Functions
//!
//! - `curve::scale` / `curve::next_int`: luck-biased rolls
//! - `roll_to_hit`: one swing's outcome
//! - `base_damage`, `hit_damage`, `critical_damage`: damage formulas
//! - `facing_of`: Front/Side/Rear exposure
//! - `AttackResolver::attack`: full attack action

pub mod curve;
pub mod damage;
pub mod facing;
pub mod hit;
pub mod resolver;
pub mod result;

pub use damage::{
    DamagePreview, base_damage, base_damage_avg, base_damage_max, base_damage_min,
    critical_damage, hit_damage,
};
pub use facing::{Facing, Orientation, facing_of};
pub use hit::{RollThresholds, roll_to_hit};
pub use resolver::{AttackResolver, in_range, is_ready_to_attack};
pub use result::{AttackOutcome, AttackResult, Swing};
