//! Collaborators injected into combat resolution.
//!
//! The engine reads nothing from the outside world except what the caller
//! hands it; today that is only the random source.
mod rng;

pub use rng::{PcgRng, RngError, RngSource, ScriptedRng, compute_seed};
